//! Per-frame wireframe rendering.
//!
//! The [`Renderer`] owns the viewport, pipeline configuration and depth
//! buffer. Each frame borrows it together with a [`DrawingSurface`] through a
//! [`Frame`], which transforms objects and emits their edges as line draws.

use super::depth_buffer::DepthBuffer;
use super::surface::{DrawingSurface, SurfaceError};
use crate::camera::Camera;
use crate::colors::Color;
use crate::config::RenderConfig;
use crate::math::mat4::Mat4;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::mesh::TriangleWireframe;
use crate::projection::Viewport;
use crate::triangle::Triangle;
use crate::wireframe::EdgeWireframe;

/// A vertex after projection: its pixel position and its projected depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenVertex {
    pub position: Vec2,
    pub depth: f32,
}

pub struct Renderer {
    config: RenderConfig,
    viewport: Viewport,
    depth_buffer: DepthBuffer,
}

impl Renderer {
    pub fn new(viewport: Viewport, config: RenderConfig) -> Self {
        Self {
            config,
            viewport,
            depth_buffer: DepthBuffer::new(viewport.width(), viewport.height()),
        }
    }

    /// Adopts a new viewport size and reallocates the depth buffer to match.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        self.depth_buffer = DepthBuffer::new(width, height);
        log::info!("viewport resized to {width}x{height}");
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn depth_buffer(&self) -> &DepthBuffer {
        &self.depth_buffer
    }

    /// Builds `projection * view * model` for an object placed at `origin`.
    pub fn model_view_projection(&self, origin: Vec3, camera: &Camera) -> Mat4 {
        let model = Mat4::translation(origin.x, origin.y, origin.z);
        let view = camera.view_matrix(self.config.world_up);
        let projection = camera
            .projection(
                self.viewport.aspect_ratio(),
                self.config.near_plane,
                self.config.far_plane,
            )
            .matrix();

        projection * view * model
    }

    /// Transforms a local-space vertex by `mvp` and maps it to pixels.
    pub fn project(&self, mvp: &Mat4, vertex: Vec3) -> ScreenVertex {
        let projected = *mvp * vertex;
        ScreenVertex {
            position: self.viewport.to_screen(projected),
            depth: projected.z,
        }
    }

    /// Clears the depth buffer and the surface, and opens a frame on `surface`.
    pub fn begin_frame<'a, S>(
        &'a mut self,
        surface: &'a mut S,
        background: Color,
    ) -> Result<Frame<'a, S>, SurfaceError>
    where
        S: DrawingSurface + ?Sized,
    {
        self.depth_buffer.clear();
        surface.clear(background)?;
        Ok(Frame {
            renderer: self,
            surface,
            segments: 0,
        })
    }

    fn record_depth(&mut self, vertex: &ScreenVertex) {
        if let Some((x, y)) = self.viewport.pixel(vertex.position) {
            self.depth_buffer.record(x, y, vertex.depth);
        }
    }
}

/// Whether a face is turned toward a viewer at `eye`.
///
/// The face at `vertex` is visible when the direction from the eye to the
/// vertex opposes the normal. Meshes pass their local-space first vertex, so
/// a mesh origin offset does not change which faces are drawn. Zero-length inputs make the alignment NaN,
/// which fails the strict comparison, so such faces are never visible.
pub fn is_front_facing(eye: Vec3, vertex: Vec3, normal: Vec3) -> bool {
    let view_dir = (vertex - eye).normalize();
    view_dir.dot(normal.normalize()) < 0.0
}

/// One frame in progress on a drawing surface.
pub struct Frame<'a, S: DrawingSurface + ?Sized> {
    renderer: &'a mut Renderer,
    surface: &'a mut S,
    segments: usize,
}

impl<'a, S: DrawingSurface + ?Sized> Frame<'a, S> {
    /// Line segments issued so far this frame.
    pub fn segments(&self) -> usize {
        self.segments
    }

    pub fn surface(&mut self) -> &mut S {
        &mut *self.surface
    }

    /// Draws every edge of an edge wireframe, in declaration order.
    ///
    /// Returns the number of segments drawn.
    pub fn draw_wireframe(
        &mut self,
        wireframe: &EdgeWireframe,
        camera: &Camera,
        color: Color,
    ) -> Result<usize, SurfaceError> {
        self.surface.set_color(color);

        let mvp = self
            .renderer
            .model_view_projection(wireframe.location(), camera);

        let projected: Vec<ScreenVertex> = wireframe
            .vertices()
            .iter()
            .map(|&v| self.renderer.project(&mvp, v))
            .collect();

        for vertex in &projected {
            self.renderer.record_depth(vertex);
        }

        for &(a, b) in wireframe.edges() {
            self.line(projected[a].position, projected[b].position)?;
        }

        Ok(wireframe.edges().len())
    }

    /// Draws the three edges of every triangle facing the camera.
    ///
    /// Returns the number of segments drawn.
    pub fn draw_mesh(
        &mut self,
        mesh: &TriangleWireframe,
        camera: &Camera,
        color: Color,
    ) -> Result<usize, SurfaceError> {
        self.surface.set_color(color);

        let mvp = self.renderer.model_view_projection(mesh.origin(), camera);
        let eye = camera.position();

        let mut drawn = 0;
        for triangle in mesh.triangles() {
            // Facing is judged against the untranslated first vertex
            let [v0, _, _] = *triangle.vertices();
            if !is_front_facing(eye, v0, triangle.normal()) {
                if triangle.is_degenerate() {
                    log::trace!("skipping zero-area triangle {:?}", triangle.vertices());
                }
                continue;
            }

            self.draw_triangle(triangle, &mvp)?;
            drawn += 3;
        }

        Ok(drawn)
    }

    fn draw_triangle(&mut self, triangle: &Triangle, mvp: &Mat4) -> Result<(), SurfaceError> {
        let vertices = *triangle.vertices();
        let [p0, p1, p2] = vertices.map(|v| self.renderer.project(mvp, v));

        for vertex in [&p0, &p1, &p2] {
            self.renderer.record_depth(vertex);
        }

        self.line(p0.position, p1.position)?;
        self.line(p0.position, p2.position)?;
        self.line(p1.position, p2.position)
    }

    fn line(&mut self, from: Vec2, to: Vec2) -> Result<(), SurfaceError> {
        self.segments += 1;
        self.surface.draw_line(from.x, from.y, to.x, to.y)
    }

    /// Presents the surface and closes the frame.
    pub fn present(self) -> Result<usize, SurfaceError> {
        self.surface.present()?;
        Ok(self.segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::render::surface::{DrawCommand, RecordingSurface};
    use approx::assert_relative_eq;

    fn cube_scene() -> (Renderer, Camera) {
        let renderer = Renderer::new(Viewport::new(600, 400), RenderConfig::default());
        let camera = Camera::new(Vec3::new(0.0, 3.0, 10.0), Vec3::ZERO, 90.0);
        (renderer, camera)
    }

    #[test]
    fn cube_draws_twelve_symmetric_edges() {
        let (mut renderer, camera) = cube_scene();
        let cube = EdgeWireframe::cube(Vec3::ZERO);
        let mut surface = RecordingSurface::new();

        let mut frame = renderer.begin_frame(&mut surface, colors::BLACK).unwrap();
        let drawn = frame.draw_wireframe(&cube, &camera, colors::WHITE).unwrap();
        assert_eq!(frame.present().unwrap(), 12);
        assert_eq!(drawn, 12);

        let lines = surface.lines();
        assert_eq!(lines.len(), 12);
        for (from, to) in &lines {
            assert!(from.is_finite() && to.is_finite());
        }

        // Edges running along X join mirror-image vertices
        for i in [0, 2, 4, 6] {
            let (from, to) = lines[i];
            assert_relative_eq!(from.x + to.x, 600.0, epsilon = 1e-3);
            assert_relative_eq!(from.y, to.y, epsilon = 1e-3);
        }

        // Each edge has a mirror edge reflected about x = 300, in either direction
        let mirror = |p: Vec2, q: Vec2| (p.x + q.x - 600.0).abs() < 1e-3 && (p.y - q.y).abs() < 1e-3;
        for &(from, to) in &lines {
            let mirrored = lines
                .iter()
                .any(|&(a, b)| (mirror(a, from) && mirror(b, to)) || (mirror(a, to) && mirror(b, from)));
            assert!(mirrored);
        }
    }

    #[test]
    fn cube_projects_in_front_of_camera() {
        let (renderer, camera) = cube_scene();
        let mvp = renderer.model_view_projection(Vec3::ZERO, &camera);

        // Top vertices land above bottom ones in pixel space
        let top = renderer.project(&mvp, Vec3::new(1.0, 1.0, 1.0));
        let bottom = renderer.project(&mvp, Vec3::new(1.0, -1.0, 1.0));
        assert!(top.position.y < bottom.position.y);
        // Right of the axis lands right of center
        assert!(top.position.x > 300.0);
        // Origin projects to the viewport center
        let center = renderer.project(&mvp, Vec3::ZERO);
        assert_relative_eq!(center.position.x, 300.0, epsilon = 1e-3);
        assert_relative_eq!(center.position.y, 200.0, epsilon = 1e-3);
    }

    #[test]
    fn projection_is_deterministic() {
        let (renderer, camera) = cube_scene();
        let origin = Vec3::new(5.0, 5.0, 5.0);
        let v = Vec3::new(-1.0, 1.0, -1.0);

        let first = renderer.project(&renderer.model_view_projection(origin, &camera), v);
        let second = renderer.project(&renderer.model_view_projection(origin, &camera), v);
        assert_eq!(first, second);
    }

    #[test]
    fn location_offset_is_applied_at_render_time() {
        let (renderer, camera) = cube_scene();
        let v = Vec3::new(1.0, 1.0, 1.0);
        let offset = Vec3::new(2.0, 0.0, 0.0);

        let moved = renderer.project(&renderer.model_view_projection(offset, &camera), v);
        let baked = renderer.project(&renderer.model_view_projection(Vec3::ZERO, &camera), v + offset);
        assert_relative_eq!(moved.position.x, baked.position.x, epsilon = 1e-3);
        assert_relative_eq!(moved.position.y, baked.position.y, epsilon = 1e-3);
    }

    #[test]
    fn ground_plane_seen_from_above_draws_both_triangles() {
        let (mut renderer, camera) = cube_scene();
        let plane = TriangleWireframe::ground_plane(5.0, -1.0);
        let mut surface = RecordingSurface::new();

        let mut frame = renderer.begin_frame(&mut surface, colors::BLACK).unwrap();
        assert_eq!(frame.draw_mesh(&plane, &camera, colors::RED).unwrap(), 6);
        frame.present().unwrap();

        let lines = surface.lines();
        assert_eq!(lines.len(), 6);

        // Edges go out as (v0,v1), (v0,v2), (v1,v2)
        let mvp = renderer.model_view_projection(Vec3::ZERO, &camera);
        let first = *plane.triangles()[0].vertices();
        let [p0, p1, p2] = first.map(|v| renderer.project(&mvp, v).position);
        assert_eq!(&lines[..3], &[(p0, p1), (p0, p2), (p1, p2)]);

        // The shared diagonal is drawn once per triangle, no deduplication
        assert_eq!(lines[0], lines[4]);
    }

    #[test]
    fn surfaces_receive_subpixel_coordinates() {
        let (mut renderer, camera) = cube_scene();
        let cube = EdgeWireframe::cube(Vec3::ZERO);
        let mut surface = RecordingSurface::new();

        let mut frame = renderer.begin_frame(&mut surface, colors::BLACK).unwrap();
        frame.draw_wireframe(&cube, &camera, colors::WHITE).unwrap();
        frame.present().unwrap();

        let mvp = renderer.model_view_projection(Vec3::ZERO, &camera);
        let lines = surface.lines();
        for (&(a, b), &(from, to)) in cube.edges().iter().zip(&lines) {
            assert_eq!(from, renderer.project(&mvp, cube.vertices()[a]).position);
            assert_eq!(to, renderer.project(&mvp, cube.vertices()[b]).position);
        }
        assert!(lines
            .iter()
            .flat_map(|(from, to)| [from.x, from.y, to.x, to.y])
            .any(|c| c.fract() != 0.0));
    }

    #[test]
    fn mesh_origin_does_not_affect_culling() {
        let (mut renderer, camera) = cube_scene();
        // Faces up at local y = 0 but sits above the eye once translated
        let mut plane = TriangleWireframe::ground_plane(5.0, 0.0);
        plane.set_origin(Vec3::new(0.0, 5.0, 0.0));
        let mut surface = RecordingSurface::new();

        let mut frame = renderer.begin_frame(&mut surface, colors::BLACK).unwrap();
        assert_eq!(frame.draw_mesh(&plane, &camera, colors::RED).unwrap(), 6);
        frame.present().unwrap();

        assert_eq!(surface.lines().len(), 6);
        let [v0, _, _] = *plane.triangles()[0].vertices();
        assert!(!is_front_facing(
            camera.position(),
            v0 + plane.origin(),
            plane.triangles()[0].normal()
        ));
    }

    #[test]
    fn back_faces_are_skipped() {
        let (mut renderer, camera) = cube_scene();
        let mut mesh = TriangleWireframe::default();
        // Facing down, away from a camera above the plane
        mesh.add_triangle([
            Vec3::new(-5.0, -1.0, -5.0),
            Vec3::new(5.0, -1.0, -5.0),
            Vec3::new(5.0, -1.0, 5.0),
        ]);
        let mut surface = RecordingSurface::new();

        let mut frame = renderer.begin_frame(&mut surface, colors::BLACK).unwrap();
        assert_eq!(frame.draw_mesh(&mesh, &camera, colors::RED).unwrap(), 0);
        frame.present().unwrap();

        assert!(surface.lines().is_empty());
        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::Clear(colors::BLACK),
                DrawCommand::SetColor(colors::RED),
                DrawCommand::Present,
            ]
        );
    }

    #[test]
    fn front_facing_rule() {
        let eye = Vec3::new(0.0, 0.0, 10.0);
        // Normal toward the camera: dot < 0, drawn
        assert!(is_front_facing(eye, Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0)));
        // Normal away from the camera: dot > 0, skipped
        assert!(!is_front_facing(eye, Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0)));
        // Edge-on: dot == 0, skipped
        assert!(!is_front_facing(eye, Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)));
        // Zero-area face: NaN alignment, skipped
        assert!(!is_front_facing(eye, Vec3::ZERO, Vec3::ZERO));
    }

    #[test]
    fn degenerate_triangles_draw_nothing() {
        let (mut renderer, camera) = cube_scene();
        let mut mesh = TriangleWireframe::default();
        mesh.add_triangle([Vec3::ZERO, Vec3::ONE, Vec3::ONE * 2.0]);
        let mut surface = RecordingSurface::new();

        let mut frame = renderer.begin_frame(&mut surface, colors::BLACK).unwrap();
        assert_eq!(frame.draw_mesh(&mesh, &camera, colors::RED).unwrap(), 0);
    }

    #[test]
    fn depth_buffer_tracks_vertices_without_occluding() {
        let (mut renderer, camera) = cube_scene();
        let near = EdgeWireframe::cube(Vec3::ZERO);
        let far = EdgeWireframe::cube(Vec3::new(0.0, 0.0, -10.0));
        let mut surface = RecordingSurface::new();

        let mut frame = renderer.begin_frame(&mut surface, colors::BLACK).unwrap();
        frame.draw_wireframe(&near, &camera, colors::WHITE).unwrap();
        frame.draw_wireframe(&far, &camera, colors::RED).unwrap();
        frame.present().unwrap();

        // Every edge of both cubes is drawn, hidden or not
        assert_eq!(surface.lines().len(), 24);
        assert!(renderer.depth_buffer().touched() > 0);
        assert!(renderer.depth_buffer().touched() <= 16);

        // A new frame starts from a cleared depth buffer
        let mut surface = RecordingSurface::new();
        renderer.begin_frame(&mut surface, colors::BLACK).unwrap();
        assert_eq!(renderer.depth_buffer().touched(), 0);
    }

    #[test]
    fn near_far_come_from_config() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, 90.0);
        let tight = RenderConfig {
            near_plane: 1.0,
            far_plane: 5.0,
            ..RenderConfig::default()
        };
        let default = Renderer::new(Viewport::new(600, 400), RenderConfig::default());
        let custom = Renderer::new(Viewport::new(600, 400), tight);

        let a = default.project(&default.model_view_projection(Vec3::ZERO, &camera), Vec3::ZERO);
        let b = custom.project(&custom.model_view_projection(Vec3::ZERO, &camera), Vec3::ZERO);
        assert_eq!(a.position, b.position);
        assert_ne!(a.depth, b.depth);
    }

    #[test]
    fn resize_reallocates_depth_buffer() {
        let (mut renderer, _) = cube_scene();
        renderer.resize(320, 240);
        assert_eq!(renderer.viewport(), Viewport::new(320, 240));
        assert_eq!(renderer.depth_buffer().as_slice().len(), 320 * 240);
    }
}

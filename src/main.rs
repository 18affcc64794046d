use std::path::{Path, PathBuf};
use std::process::ExitCode;

use wirescope::prelude::*;

/// The objects shown by the viewer.
struct Scene {
    cube: EdgeWireframe,
    offset_cube: EdgeWireframe,
    ground: EdgeWireframe,
    ground_mesh: TriangleWireframe,
}

impl Scene {
    fn demo() -> Self {
        Self {
            cube: EdgeWireframe::cube(Vec3::ZERO),
            offset_cube: EdgeWireframe::cube(Vec3::new(5.0, 5.0, 5.0)),
            ground: EdgeWireframe::ground_square(5.0, -1.0),
            ground_mesh: TriangleWireframe::ground_plane(5.0, -1.0),
        }
    }

    fn draw<S: DrawingSurface + ?Sized>(
        &self,
        frame: &mut Frame<'_, S>,
        camera: &Camera,
    ) -> Result<(), SurfaceError> {
        frame.draw_wireframe(&self.cube, camera, colors::WHITE)?;
        frame.draw_wireframe(&self.offset_cube, camera, colors::RED)?;
        frame.draw_wireframe(&self.ground, camera, colors::WHITE)?;
        frame.draw_mesh(&self.ground_mesh, camera, colors::RED)?;
        Ok(())
    }
}

fn orbit_from(config: &ViewerConfig) -> OrbitCamera {
    let mut orbit = OrbitCamera::new(config.orbit_radius, config.camera_height, config.fov);
    orbit.orbit_step = config.orbit_step;
    orbit.fov_step = config.fov_step;
    orbit
}

fn run_window(config: &ViewerConfig) -> Result<(), SurfaceError> {
    let mut window = Window::new(&config.title, config.width, config.height)?;
    let mut renderer = Renderer::new(Viewport::new(config.width, config.height), config.render);
    let limiter = FrameLimiter::new(config.frame_delay);
    let scene = Scene::demo();
    let mut orbit = orbit_from(config);

    'running: loop {
        for event in window.poll_events() {
            match event {
                WindowEvent::Quit => break 'running,
                WindowEvent::Scroll { dx, dy } => {
                    orbit.scroll(dx, dy);
                }
                WindowEvent::Resize(w, h) => renderer.resize(w, h),
            }
        }

        let camera = orbit.camera();
        let mut frame = renderer.begin_frame(&mut window, config.background)?;
        scene.draw(&mut frame, &camera)?;
        frame.present()?;

        limiter.wait();
    }

    log::info!("quit requested, shutting down");
    Ok(())
}

fn run_snapshot(config: &ViewerConfig, path: &Path) -> Result<(), SurfaceError> {
    let mut surface = PixelSurface::new(config.width, config.height);
    let mut renderer = Renderer::new(Viewport::new(config.width, config.height), config.render);
    let camera = orbit_from(config).camera();

    let mut frame = renderer.begin_frame(&mut surface, config.background)?;
    Scene::demo().draw(&mut frame, &camera)?;
    let segments = frame.present()?;

    surface.save(path)?;
    log::info!("wrote {segments} segments to {}", path.display());
    Ok(())
}

/// Returns the target of `--snapshot <path>`, if given.
fn snapshot_path<I: IntoIterator<Item = String>>(args: I) -> Result<Option<PathBuf>, String> {
    let mut args = args.into_iter();
    let mut path = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--snapshot" => match args.next() {
                Some(target) => path = Some(PathBuf::from(target)),
                None => return Err("--snapshot requires an output path".to_string()),
            },
            other => log::warn!("ignoring unknown argument {other:?}"),
        }
    }
    Ok(path)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ViewerConfig::default();
    let result = match snapshot_path(std::env::args().skip(1)) {
        Ok(Some(path)) => run_snapshot(&config, &path),
        Ok(None) => run_window(&config),
        Err(message) => {
            log::error!("{message}");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

//! Linear algebra used by the transform pipeline.

pub mod mat4;
pub mod vec2;
pub mod vec3;

pub use mat4::Mat4;
pub use vec2::Vec2;
pub use vec3::Vec3;

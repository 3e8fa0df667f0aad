pub mod config;
pub mod surface;

pub use surface::MonoSurface;

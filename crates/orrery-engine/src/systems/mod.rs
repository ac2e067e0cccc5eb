pub mod lighting;
pub mod line_render;
pub mod sphere_render;
pub mod vector;

pub mod entity;
pub mod line_loop;
pub mod mesh;

pub mod controls;
pub mod game;
pub mod types;

mod bodies;
mod game;
mod orbit;
use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-system");

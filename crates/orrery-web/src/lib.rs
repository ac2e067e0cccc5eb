pub mod app;
pub mod canvas;
pub mod panel;
pub mod runner;

pub use app::launch;
pub use canvas::Canvas2dRenderer;
pub use runner::GameRunner;

/// Generate the `#[wasm_bindgen(start)]` entry point for a game.
///
/// The generated `start` function constructs the game with `new()` and hands
/// it to [`launch`], which mounts the canvas and slider panel and starts the
/// frame loop. Any DOM setup failure is returned to the host as a thrown error.
///
/// # Usage
///
/// ```ignore
/// mod game;
/// use game::MyGame;
///
/// orrery_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `orrery_engine::Game`
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        #[wasm_bindgen::prelude::wasm_bindgen(start)]
        pub fn start() -> Result<(), wasm_bindgen::JsValue> {
            $crate::launch(<$game_type>::new(), $game_name)
        }
    };
}

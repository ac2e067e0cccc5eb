use std::cell::RefCell;
use std::rc::Rc;

use orrery_engine::{Game, Renderer};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::canvas::Canvas2dRenderer;
use crate::panel::mount_panel;
use crate::runner::GameRunner;

/// Start `game` in the page: canvas, slider panel, resize handling and the frame loop.
///
/// Called by the `#[wasm_bindgen(start)]` function that `export_game!` generates.
pub fn launch<G: Game + 'static>(game: G, name: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or_else(|| dom_error("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| dom_error("no document"))?;

    let (width, height) = viewport_size(&window)?;

    let mut runner = GameRunner::new(game);
    runner.init();
    runner.resize(width as f32, height as f32);
    let sliders = runner.sliders();
    let runner = Rc::new(RefCell::new(runner));

    let renderer = Rc::new(RefCell::new(Canvas2dRenderer::mount(&document, width, height)?));
    mount_panel(&document, &runner, &sliders)?;

    // Resize: camera first, then the canvas backing store
    {
        let runner = Rc::clone(&runner);
        let renderer = Rc::clone(&renderer);
        let win = window.clone();
        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
            match viewport_size(&win) {
                Ok((w, h)) => {
                    runner.borrow_mut().resize(w as f32, h as f32);
                    if w > 0 && h > 0 {
                        renderer.borrow_mut().resize(w, h);
                    }
                }
                Err(err) => log::error!("resize: {err:?}"),
            }
        }) as Box<dyn FnMut(_)>);

        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Animation loop using requestAnimationFrame
    {
        let runner = Rc::clone(&runner);
        let renderer = Rc::clone(&renderer);
        let win = window.clone();

        #[allow(clippy::type_complexity)]
        let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let g = Rc::clone(&f);

        *g.borrow_mut() = Some(Closure::new(move || {
            {
                let mut runner = runner.borrow_mut();
                runner.tick();
                renderer.borrow_mut().draw(&runner.frame());
            }
            // Request next frame
            if let Some(next) = f.borrow().as_ref() {
                if let Err(err) = request_animation_frame(&win, next) {
                    log::error!("frame loop stopped: {err:?}");
                }
            }
        }));

        // Start the loop
        let first = g.borrow();
        if let Some(first) = first.as_ref() {
            request_animation_frame(&window, first)?;
        }
    }

    log::info!(
        "{name}: initialized ({}x{}, {} sliders, {})",
        width,
        height,
        sliders.len(),
        renderer.borrow().backend()
    );
    Ok(())
}

/// A thrown JS `Error` for a missing piece of the host page.
pub(crate) fn dom_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

fn request_animation_frame(window: &Window, f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window.request_animation_frame(f.as_ref().unchecked_ref())
}

/// Current `innerWidth x innerHeight` in whole pixels.
fn viewport_size(window: &Window) -> Result<(u32, u32), JsValue> {
    let w = window.inner_width()?.as_f64().unwrap_or(0.0);
    let h = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((w.max(0.0) as u32, h.max(0.0) as u32))
}

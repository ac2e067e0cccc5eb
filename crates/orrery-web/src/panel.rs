use std::cell::RefCell;
use std::rc::Rc;

use orrery_engine::{parse_slider_value, Game, InputEvent, SliderSpec};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::app::dom_error;
use crate::runner::GameRunner;

/// Id of the host element the slider rows are appended to.
pub const PANEL_CONTAINER_ID: &str = "sliders";

/// Build one slider row per spec inside `#sliders`.
///
/// Each row posts `InputEvent::Slider` to the runner on every `input` event
/// and updates its readout right away; the game sees the value on the next tick.
pub fn mount_panel<G: Game + 'static>(
    document: &Document,
    runner: &Rc<RefCell<GameRunner<G>>>,
    sliders: &[SliderSpec],
) -> Result<(), JsValue> {
    let container = document
        .get_element_by_id(PANEL_CONTAINER_ID)
        .ok_or_else(|| dom_error("missing #sliders container"))?;

    for spec in sliders {
        let row = build_row(document, runner, spec)?;
        container.append_child(&row)?;
    }

    log::info!("panel: mounted {} sliders", sliders.len());
    Ok(())
}

fn build_row<G: Game + 'static>(
    document: &Document,
    runner: &Rc<RefCell<GameRunner<G>>>,
    spec: &SliderSpec,
) -> Result<Element, JsValue> {
    let row = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    row.style().set_property("margin-bottom", "10px")?;

    let label = document.create_element("label")?;
    label.set_text_content(Some(&spec.label));

    let input = document.create_element("input")?.dyn_into::<HtmlInputElement>()?;
    input.set_type("range");
    input.set_min(&spec.min.to_string());
    input.set_max(&spec.max.to_string());
    input.set_step(&spec.step.to_string());
    input.set_value(&spec.value.to_string());
    input.style().set_property("width", "120px")?;
    input.set_attribute("data-index", &spec.index.to_string())?;

    let readout = document.create_element("span")?;
    readout.set_text_content(Some(&spec.readout(spec.value)));

    {
        let runner = Rc::clone(runner);
        let readout = readout.clone();
        let spec = spec.clone();
        let closure = Closure::wrap(Box::new(move |e: web_sys::Event| {
            let Some(target) = e.target() else { return };
            let Some(input) = target.dyn_ref::<HtmlInputElement>() else { return };
            match parse_slider_value(&input.value()) {
                Some(value) => {
                    runner.borrow_mut().push_input(InputEvent::Slider {
                        kind: spec.kind,
                        index: spec.index,
                        value,
                    });
                    readout.set_text_content(Some(&spec.readout(value)));
                }
                None => log::debug!("panel: ignoring unparsable slider value {:?}", input.value()),
            }
        }) as Box<dyn FnMut(_)>);

        input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    row.append_child(&label)?;
    row.append_child(&input)?;
    row.append_child(&readout)?;
    Ok(row.into())
}

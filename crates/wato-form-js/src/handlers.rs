//! Free functions for the folder list and the setup pages.

use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, MouseEvent};

/// Fill the input `id` with a random secret of `len` characters.
#[wasm_bindgen(js_name = randomizeSecret)]
pub fn randomize_secret(id: &str, len: usize) {
    wato_form_browser::randomize_secret(id, len);
}

/// Flip the `hidden` class of the element `id`.
#[wasm_bindgen(js_name = toggleContainer)]
pub fn toggle_container(id: &str) {
    wato_form_browser::toggle_container(id);
}

/// Open the folder at `link` when its tile was clicked.
#[wasm_bindgen(js_name = openFolder)]
pub fn open_folder(event: &Event, link: &str) -> bool {
    wato_form_browser::open_folder(event, link)
}

/// Show or hide the folder actions on mouseover/mouseout.
#[wasm_bindgen(js_name = toggleFolder)]
pub fn toggle_folder(event: &MouseEvent, tile: &Element, on: bool) {
    wato_form_browser::toggle_folder(event, tile, on);
}

#[wasm_bindgen(js_name = toggleRuleConditionType)]
pub fn toggle_rule_condition_type(value: &str) {
    wato_form_browser::toggle_rule_condition_type(value);
}

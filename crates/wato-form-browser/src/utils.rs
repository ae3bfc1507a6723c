//! DOM leaf utilities used across the setup pages.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use wato_form_core::random_secret;

use crate::dom::{document, set_display};

/// Fill the input with the given id with a random secret of `len` characters.
pub fn randomize_secret(id: &str, len: usize) {
    let Some(input) = document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
    else {
        tracing::trace!(id, "secret input not found");
        return;
    };
    input.set_value(&random_secret(len));
}

/// Flip the `hidden` class of the element with the given id.
///
/// Returns whether the element is hidden afterwards.
pub fn toggle_container(id: &str) -> Option<bool> {
    let element = document()?.get_element_by_id(id)?;
    element.class_list().toggle("hidden").ok()
}

/// Hide all `.condition` elements, then show those of the selected type.
pub fn toggle_rule_condition_type(value: &str) {
    let Some(document) = document() else {
        return;
    };
    set_display_all(&document, ".condition", "none");
    set_display_all(&document, &format!(".condition.{value}"), "");
}

fn set_display_all(document: &Document, selector: &str, display: &str) {
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(e) => {
            tracing::debug!(selector, error = ?e, "invalid condition selector");
            return;
        }
    };
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
            set_display(&element, display);
        }
    }
}

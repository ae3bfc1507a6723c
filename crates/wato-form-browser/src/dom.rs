//! Small DOM helpers shared by the views.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node};

pub(crate) fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Set `style.display`, ignoring elements without a style.
pub(crate) fn set_display(element: &Element, display: &str) {
    let Some(element) = element.dyn_ref::<web_sys::HtmlElement>() else {
        return;
    };
    if let Err(e) = element.style().set_property("display", display) {
        tracing::trace!(error = ?e, "failed to set display");
    }
}

/// `childNodes[index]` of a node.
pub(crate) fn child_node(node: &Node, index: u32) -> Option<Node> {
    node.child_nodes().item(index)
}

/// Element children of a node, in document order.
pub(crate) fn child_elements(node: &Node) -> impl Iterator<Item = Element> + use<> {
    let children = node.child_nodes();
    (0..children.length())
        .filter_map(move |i| children.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
}

/// First element with the given tag name below `element`.
pub(crate) fn first_by_tag(element: &Element, tag: &str) -> Option<Element> {
    element.get_elements_by_tag_name(tag).item(0)
}

/// Last element with the given tag name below `element`.
pub(crate) fn last_by_tag(element: &Element, tag: &str) -> Option<Element> {
    let collection = element.get_elements_by_tag_name(tag);
    collection.item(collection.length().checked_sub(1)?)
}

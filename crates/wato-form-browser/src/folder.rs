//! Folder list handlers.
//!
//! Folder tiles are rendered as `<div>` elements inside a container with id
//! `folder_<id>`. The page wires `onclick`, `onmouseover` and `onmouseout`
//! of each tile to these handlers.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, MouseEvent, Node};

use wato_form_core::folder::{
    FolderView, Hover, apply_folder_hover, container_id, folder_id, is_folder_click, pointer_left,
};

use crate::dom::set_display;

/// Folder icons and dialogs of a document.
pub struct DomFolderView {
    document: Document,
}

impl DomFolderView {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl FolderView for DomFolderView {
    fn set_icon_display(&mut self, element_id: &str, display: &'static str) {
        if let Some(icon) = self.document.get_element_by_id(element_id) {
            set_display(&icon, display);
        }
    }

    fn set_open(&mut self, folder_id: &str, open: bool) {
        let Some(container) = self.document.get_element_by_id(&container_id(folder_id)) else {
            tracing::trace!(folder_id, "folder container not on page");
            return;
        };
        let class_list = container.class_list();
        let result = if open {
            class_list.add_1("open")
        } else {
            class_list.remove_1("open")
        };
        if let Err(e) = result {
            tracing::trace!(error = ?e, folder_id, "failed to set open class");
        }
    }

    fn hide_move_dialog(&mut self, element_id: &str) {
        if let Some(dialog) = self.document.get_element_by_id(element_id) {
            set_display(&dialog, "none");
        }
    }
}

/// Navigate to `link` when the click landed on the folder tile itself.
///
/// Returns whether navigation was started.
pub fn open_folder(event: &Event, link: &str) -> bool {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return false;
    };
    if !is_folder_click(&target.tag_name()) {
        return false;
    }
    let Some(window) = web_sys::window() else {
        return false;
    };
    match window.location().set_href(link) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = ?e, link, "folder navigation failed");
            false
        }
    }
}

/// Show or hide the actions of the folder `tile` on hover.
///
/// A mouseout onto a descendant of the tile is ignored.
pub fn toggle_folder(event: &MouseEvent, tile: &Element, on: bool) {
    let hover = Hover::from_on(on);
    if hover == Hover::Leave {
        let related = event
            .related_target()
            .and_then(|t| t.dyn_into::<Node>().ok());
        let ancestors = std::iter::successors(related, |node| node.parent_node());
        let tile_node: &Node = tile.as_ref();
        if !pointer_left(tile_node, ancestors) {
            return;
        }
    }

    let Some(parent_id) = tile.parent_element().map(|container| container.id()) else {
        return;
    };
    let Some(id) = folder_id(&parent_id) else {
        tracing::trace!(parent_id, "folder container without id");
        return;
    };
    let Some(document) = crate::dom::document() else {
        return;
    };
    let mut view = DomFolderView::new(document);
    apply_folder_hover(&mut view, id, hover);
}

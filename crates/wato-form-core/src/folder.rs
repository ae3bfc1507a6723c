//! Folder list hover and click behavior.
//!
//! Each folder tile is a `div` inside a container with id `folder_<id>`.
//! Hovering the tile reveals its action icons, leaving it hides them again
//! together with an open move dialog.

/// Prefix of the folder container id.
const CONTAINER_PREFIX: &str = "folder_";

/// Action icons revealed while hovering a folder.
pub const ACTION_ICONS: [&str; 3] = ["edit", "popup_trigger_move", "delete"];

/// Folder id from the container element id.
pub fn folder_id(container_id: &str) -> Option<&str> {
    container_id.get(CONTAINER_PREFIX.len()..)
}

/// Container element id of a folder.
pub fn container_id(folder_id: &str) -> String {
    format!("{CONTAINER_PREFIX}{folder_id}")
}

/// Ids of the action icon elements of a folder.
pub fn action_icon_ids(folder_id: &str) -> impl Iterator<Item = String> + '_ {
    ACTION_ICONS
        .iter()
        .map(move |icon| format!("{icon}_{folder_id}"))
}

pub fn move_dialog_id(folder_id: &str) -> String {
    format!("move_dialog_{folder_id}")
}

/// Whether a click should open the folder.
///
/// Only clicks on the tile `div` itself count. Clicks on the links and
/// images inside it bubble up with those elements as target.
pub fn is_folder_click(target_tag_name: &str) -> bool {
    target_tag_name.eq_ignore_ascii_case("div")
}

/// Pointer movement relative to a folder tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hover {
    Enter,
    Leave,
}

impl Hover {
    pub fn from_on(on: bool) -> Self {
        if on { Hover::Enter } else { Hover::Leave }
    }
}

/// Whether a mouseout really left the tile.
///
/// `related_ancestors` walks from the element the pointer moved to up to the
/// document root. Moving onto a descendant of the tile is not a leave.
pub fn pointer_left<N: PartialEq>(tile: &N, related_ancestors: impl IntoIterator<Item = N>) -> bool {
    !related_ancestors.into_iter().any(|node| &node == tile)
}

/// Page access for the folder list.
pub trait FolderView {
    /// Set `style.display` of an action icon, if present.
    fn set_icon_display(&mut self, element_id: &str, display: &'static str);

    /// Add or remove the `open` class of the folder container.
    fn set_open(&mut self, folder_id: &str, open: bool);

    /// Hide the move dialog, if present.
    fn hide_move_dialog(&mut self, element_id: &str);
}

/// Apply a hover change to the folder.
pub fn apply_folder_hover(view: &mut impl FolderView, folder_id: &str, hover: Hover) {
    let display = match hover {
        Hover::Enter => "inline",
        Hover::Leave => "none",
    };
    for icon in action_icon_ids(folder_id) {
        view.set_icon_display(&icon, display);
    }
    match hover {
        Hover::Enter => view.set_open(folder_id, true),
        Hover::Leave => {
            view.set_open(folder_id, false);
            view.hide_move_dialog(&move_dialog_id(folder_id));
        }
    }
    tracing::trace!(folder_id, ?hover, "folder hover");
}

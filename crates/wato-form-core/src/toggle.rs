//! Editable/default field swap driven by an attribute's enable checkbox.

use crate::types::Visibility;
use crate::view::FormView;

/// Show the editable field while the attribute is checked, the default
/// field otherwise.
///
/// Attributes rendered without the field pair are left alone.
pub fn toggle_attribute(view: &mut impl FormView, attr: &str, checked: bool) {
    if !view.has_entry_fields(attr) {
        tracing::trace!(attr, "attribute has no entry fields");
        return;
    }
    let entry = Visibility::shown_if(checked);
    view.set_entry_fields(attr, entry, entry.inverse());
}

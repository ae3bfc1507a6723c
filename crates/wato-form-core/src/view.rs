//! Page access traits.
//!
//! The resolver never touches the DOM directly. `FormView` is the small set
//! of reads and writes it needs; the browser crate implements it on top of
//! `web_sys::Document`, tests implement it with plain maps.

use crate::types::Visibility;

/// Element ids derived from attribute names.
pub mod ids {
    /// Table row of an attribute.
    pub fn row(attr: &str) -> String {
        format!("attr_{attr}")
    }

    /// Hidden input telling the server whether the attribute was shown.
    pub fn display_flag(attr: &str) -> String {
        format!("attr_display_{attr}")
    }

    /// Editable value, shown while the attribute is explicitly set.
    pub fn entry(attr: &str) -> String {
        format!("attr_entry_{attr}")
    }

    /// Inherited/default value, shown while the attribute is not set.
    pub fn default_value(attr: &str) -> String {
        format!("attr_default_{attr}")
    }
}

/// Snapshot of one tag selection row (`<tr>` with a `legend` cell).
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TagRow {
    /// Name of the enable checkbox in the legend cell.
    pub checkbox_name: String,
    /// Checked state of the enable checkbox.
    pub checkbox_checked: bool,
    /// Value of the last input of the legend cell. Disabled checkboxes are
    /// renamed to `ignored_*` and carry their state in this input.
    pub proxy_value: Option<String>,
    /// First input, or failing that first select, of the content cell.
    pub choice: Option<TagChoice>,
}

/// The value control of a tag row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TagChoice {
    Checkbox { name: String, checked: bool },
    Select { value: String },
    /// Any other input kind. Never yields a tag.
    Other,
}

/// Read/write access to an attribute dialog.
///
/// Missing elements are not errors: reads return `None`/`false` and writes
/// are no-ops.
pub trait FormView {
    /// Tag rows of the container with the given id, `None` if it does not exist.
    fn tag_rows(&self, container_id: &str) -> Option<Vec<TagRow>>;

    /// Whether the row of the attribute exists.
    fn has_attribute_row(&self, attr: &str) -> bool;

    /// Show or hide the row of the attribute.
    fn set_attribute_row(&mut self, attr: &str, visibility: Visibility);

    /// Write the display flag of the attribute, creating the hidden input on
    /// first use.
    fn set_display_flag(&mut self, attr: &str, visibility: Visibility);

    /// Set the enable checkbox of the attribute row.
    fn set_attribute_checked(&mut self, attr: &str, checked: bool);

    /// Title of the topic the attribute row belongs to.
    fn attribute_topic(&self, attr: &str) -> Option<String>;

    /// Whether the attribute has the editable/default field pair. Attributes
    /// that can never be edited are rendered without it.
    fn has_entry_fields(&self, attr: &str) -> bool;

    /// Show or hide the editable and default fields of the attribute.
    fn set_entry_fields(&mut self, attr: &str, entry: Visibility, default: Visibility);

    /// Titles of the `nform` sections directly below the form, in document
    /// order. `None` if the form does not exist.
    fn form_sections(&self, form_id: &str) -> Option<Vec<Option<String>>>;

    /// Show or hide the `index`th `nform` section of the form.
    fn set_form_section(&mut self, form_id: &str, index: usize, visibility: Visibility);
}

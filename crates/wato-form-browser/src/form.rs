//! DOM implementation of `FormView`.
//!
//! # DOM Requirements
//!
//! - Tag containers are tables whose first child is the row group. Tag rows
//!   are `<tr>` whose first cell has class `legend` (enable checkbox, plus a
//!   trailing proxy input when disabled) and whose second cell holds the
//!   value control.
//! - Attribute rows have id `attr_<name>`; the first row of their row group
//!   carries the topic title. The enable checkbox is the first child of the
//!   second node of the legend cell.
//! - Dialog forms hold their topics as direct `nform` children whose first
//!   row carries the title.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, Node};

use wato_form_core::{FormView, TagChoice, TagRow, Visibility, ids};

use crate::dom::{child_elements, child_node, first_by_tag, last_by_tag, set_display};

/// Class of the legend cell of tag rows.
const LEGEND_CLASS: &str = "legend";
/// Class of the topic sections of a dialog form.
const SECTION_CLASS: &str = "nform";

/// The attribute dialog of a document.
pub struct DomFormView {
    document: Document,
}

impl DomFormView {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// View of the current window's document.
    pub fn from_window() -> Option<Self> {
        crate::dom::document().map(Self::new)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn set_display_by_id(&self, id: &str, visibility: Visibility) {
        if let Some(element) = self.element(id) {
            set_display(&element, visibility.css_display());
        }
    }

    fn sections(&self, form_id: &str) -> Option<impl Iterator<Item = Element> + use<>> {
        let form = self.element(form_id)?;
        Some(child_elements(&form).filter(|e| e.class_name() == SECTION_CLASS))
    }

    fn enable_checkbox(&self, attr: &str) -> Option<HtmlInputElement> {
        let row = self.element(&ids::row(attr))?;
        let legend = row.first_child()?;
        let holder = child_node(&legend, 1)?;
        holder.first_child()?.dyn_into::<HtmlInputElement>().ok()
    }
}

/// Read one `<tr>` of a tag container.
fn read_tag_row(tr: &Element) -> Option<TagRow> {
    let mut cells = child_elements(tr);
    let legend = cells.next()?;
    if legend.class_name() != LEGEND_CLASS {
        return None;
    }
    let checkbox = first_by_tag(&legend, "input")?.dyn_into::<HtmlInputElement>().ok()?;
    let proxy_value = last_by_tag(&legend, "input")
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value());

    let choice = cells.next().and_then(|content| read_tag_choice(&content));

    Some(TagRow {
        checkbox_name: checkbox.name(),
        checkbox_checked: checkbox.checked(),
        proxy_value,
        choice,
    })
}

fn read_tag_choice(content: &Element) -> Option<TagChoice> {
    let control = first_by_tag(content, "input").or_else(|| first_by_tag(content, "select"))?;
    if let Some(input) = control.dyn_ref::<HtmlInputElement>() {
        if input.type_() == "checkbox" {
            return Some(TagChoice::Checkbox {
                name: input.name(),
                checked: input.checked(),
            });
        }
        return Some(TagChoice::Other);
    }
    if let Some(select) = control.dyn_ref::<HtmlSelectElement>() {
        return Some(TagChoice::Select {
            value: select.value(),
        });
    }
    Some(TagChoice::Other)
}

fn section_title(section: &Element) -> Option<String> {
    let body = section.first_child()?;
    body.first_child()?.text_content()
}

impl FormView for DomFormView {
    fn tag_rows(&self, container_id: &str) -> Option<Vec<TagRow>> {
        let container = self.element(container_id)?;
        let Some(body) = container.first_element_child() else {
            return Some(Vec::new());
        };
        let rows = child_elements(&body)
            .filter(|e| e.tag_name().eq_ignore_ascii_case("tr"))
            .filter_map(|tr| read_tag_row(&tr))
            .collect();
        Some(rows)
    }

    fn has_attribute_row(&self, attr: &str) -> bool {
        self.element(&ids::row(attr)).is_some()
    }

    fn set_attribute_row(&mut self, attr: &str, visibility: Visibility) {
        self.set_display_by_id(&ids::row(attr), visibility);
    }

    fn set_display_flag(&mut self, attr: &str, visibility: Visibility) {
        let id = ids::display_flag(attr);
        let flag = match self.element(&id) {
            Some(existing) => existing.dyn_into::<HtmlInputElement>().ok(),
            None => create_display_flag(&self.document, &id, &ids::row(attr)),
        };
        match flag {
            Some(flag) => flag.set_value(visibility.display_flag()),
            None => tracing::trace!(attr, "no display flag input"),
        }
    }

    fn set_attribute_checked(&mut self, attr: &str, checked: bool) {
        match self.enable_checkbox(attr) {
            Some(checkbox) => checkbox.set_checked(checked),
            None => tracing::trace!(attr, "attribute row without enable checkbox"),
        }
    }

    fn attribute_topic(&self, attr: &str) -> Option<String> {
        let row = self.element(&ids::row(attr))?;
        let body: Node = row.parent_node()?;
        body.first_child()?.text_content()
    }

    fn has_entry_fields(&self, attr: &str) -> bool {
        self.element(&ids::entry(attr)).is_some()
    }

    fn set_entry_fields(&mut self, attr: &str, entry: Visibility, default: Visibility) {
        self.set_display_by_id(&ids::entry(attr), entry);
        self.set_display_by_id(&ids::default_value(attr), default);
    }

    fn form_sections(&self, form_id: &str) -> Option<Vec<Option<String>>> {
        Some(self.sections(form_id)?.map(|s| section_title(&s)).collect())
    }

    fn set_form_section(&mut self, form_id: &str, index: usize, visibility: Visibility) {
        if let Some(section) = self.sections(form_id).and_then(|mut s| s.nth(index)) {
            set_display(&section, visibility.css_display());
        }
    }
}

/// Append the hidden `attr_display_*` input to the attribute row.
fn create_display_flag(document: &Document, id: &str, row_id: &str) -> Option<HtmlInputElement> {
    let row = document.get_element_by_id(row_id)?;
    let input = document
        .create_element("input")
        .ok()?
        .dyn_into::<HtmlInputElement>()
        .ok()?;
    input.set_name(id);
    input.set_id(id);
    input.set_type("hidden");
    input.set_class_name("text");
    row.append_child(&input).ok()?;
    Some(input)
}

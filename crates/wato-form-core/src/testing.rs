//! In-memory `FormView` and `FolderView` for tests.

use std::collections::{HashMap, HashSet};

use crate::folder::FolderView;
use crate::types::Visibility;
use crate::view::{FormView, TagChoice, TagRow};

impl TagRow {
    pub(crate) fn select(checkbox_name: &str, checked: bool, value: &str) -> Self {
        TagRow {
            checkbox_name: checkbox_name.into(),
            checkbox_checked: checked,
            proxy_value: None,
            choice: Some(TagChoice::Select {
                value: value.into(),
            }),
        }
    }

    pub(crate) fn checkbox(checkbox_name: &str, checked: bool, name: &str, value_checked: bool) -> Self {
        TagRow {
            checkbox_name: checkbox_name.into(),
            checkbox_checked: checked,
            proxy_value: None,
            choice: Some(TagChoice::Checkbox {
                name: name.into(),
                checked: value_checked,
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct FakeRow {
    pub topic: Option<String>,
    pub display: Visibility,
    pub checked: bool,
    /// `None` until the resolver first writes it.
    pub display_flag: Option<&'static str>,
    /// `(entry, default)` display, absent for fixed attributes.
    pub entry_fields: Option<(Visibility, Visibility)>,
}

#[derive(Debug, Default)]
pub(crate) struct FakeForm {
    pub tag_containers: HashMap<String, Vec<TagRow>>,
    pub rows: HashMap<String, FakeRow>,
    /// Form id to `(title, display)` of each section.
    pub forms: HashMap<String, Vec<(Option<String>, Visibility)>>,
    /// Number of entry field writes, per attribute.
    pub entry_writes: HashMap<String, usize>,
}

impl FakeForm {
    pub fn add_tag_row(&mut self, container: &str, row: TagRow) {
        self.tag_containers
            .entry(container.to_string())
            .or_default()
            .push(row);
    }

    /// Add an editable attribute row, enabled and with its entry field shown.
    pub fn add_attribute(&mut self, attr: &str, topic: &str) {
        self.rows.insert(
            attr.to_string(),
            FakeRow {
                topic: Some(topic.to_string()),
                display: Visibility::Shown,
                checked: true,
                display_flag: None,
                entry_fields: Some((Visibility::Shown, Visibility::Hidden)),
            },
        );
    }

    /// Add a row without the editable/default field pair.
    pub fn add_fixed_attribute(&mut self, attr: &str, topic: &str) {
        self.add_attribute(attr, topic);
        if let Some(row) = self.rows.get_mut(attr) {
            row.entry_fields = None;
        }
    }

    pub fn add_form(&mut self, form_id: &str, sections: &[&str]) {
        self.forms.insert(
            form_id.to_string(),
            sections
                .iter()
                .map(|title| (Some(title.to_string()), Visibility::Shown))
                .collect(),
        );
    }

    pub fn row(&self, attr: &str) -> &FakeRow {
        &self.rows[attr]
    }

    pub fn section(&self, form_id: &str, title: &str) -> Visibility {
        self.forms[form_id]
            .iter()
            .find(|(t, _)| t.as_deref() == Some(title))
            .map(|(_, v)| *v)
            .expect("section exists")
    }
}

impl FormView for FakeForm {
    fn tag_rows(&self, container_id: &str) -> Option<Vec<TagRow>> {
        self.tag_containers.get(container_id).cloned()
    }

    fn has_attribute_row(&self, attr: &str) -> bool {
        self.rows.contains_key(attr)
    }

    fn set_attribute_row(&mut self, attr: &str, visibility: Visibility) {
        if let Some(row) = self.rows.get_mut(attr) {
            row.display = visibility;
        }
    }

    fn set_display_flag(&mut self, attr: &str, visibility: Visibility) {
        if let Some(row) = self.rows.get_mut(attr) {
            row.display_flag = Some(visibility.display_flag());
        }
    }

    fn set_attribute_checked(&mut self, attr: &str, checked: bool) {
        if let Some(row) = self.rows.get_mut(attr) {
            row.checked = checked;
        }
    }

    fn attribute_topic(&self, attr: &str) -> Option<String> {
        self.rows.get(attr)?.topic.clone()
    }

    fn has_entry_fields(&self, attr: &str) -> bool {
        self.rows
            .get(attr)
            .is_some_and(|row| row.entry_fields.is_some())
    }

    fn set_entry_fields(&mut self, attr: &str, entry: Visibility, default: Visibility) {
        if let Some(fields) = self.rows.get_mut(attr).and_then(|r| r.entry_fields.as_mut()) {
            *fields = (entry, default);
            *self.entry_writes.entry(attr.to_string()).or_default() += 1;
        }
    }

    fn form_sections(&self, form_id: &str) -> Option<Vec<Option<String>>> {
        let sections = self.forms.get(form_id)?;
        Some(sections.iter().map(|(title, _)| title.clone()).collect())
    }

    fn set_form_section(&mut self, form_id: &str, index: usize, visibility: Visibility) {
        if let Some(section) = self.forms.get_mut(form_id).and_then(|s| s.get_mut(index)) {
            section.1 = visibility;
        }
    }
}

/// Folder list stand-in recording icon and dialog state.
#[derive(Debug, Default)]
pub(crate) struct FakeFolders {
    pub icons: HashMap<String, &'static str>,
    pub open: HashSet<String>,
    pub dialogs: HashMap<String, Visibility>,
}

impl FolderView for FakeFolders {
    fn set_icon_display(&mut self, element_id: &str, display: &'static str) {
        if let Some(icon) = self.icons.get_mut(element_id) {
            *icon = display;
        }
    }

    fn set_open(&mut self, folder_id: &str, open: bool) {
        if open {
            self.open.insert(folder_id.to_string());
        } else {
            self.open.remove(folder_id);
        }
    }

    fn hide_move_dialog(&mut self, element_id: &str) {
        if let Some(dialog) = self.dialogs.get_mut(element_id) {
            *dialog = Visibility::Hidden;
        }
    }
}

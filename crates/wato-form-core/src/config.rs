//! Page configuration for the attribute dialogs.
//!
//! `DialogProperties` is rendered by the server into the page once and never
//! changes afterwards. `PageLayout` names the elements the resolver scans.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::ConfigError;

/// Visibility rules for the attributes of one edit dialog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogProperties {
    /// Attributes subject to visibility rules, evaluated in this order.
    pub check_attributes: Vec<SmolStr>,
    /// Attributes that are never shown.
    pub hide_attributes: Vec<SmolStr>,
    /// Role rules per attribute. A leading `!` negates the rule.
    pub depends_on_roles: HashMap<SmolStr, Vec<SmolStr>>,
    /// Tag rules per attribute. A leading `!` negates the rule.
    pub depends_on_tags: HashMap<SmolStr, Vec<SmolStr>>,
    /// Auxiliary tags implied by selecting a tag.
    pub aux_tags_by_tag: HashMap<SmolStr, Vec<SmolStr>>,
    /// Roles of the user viewing the page.
    pub user_roles: Vec<SmolStr>,
    /// Tag inherited from the parent folder, keyed by `attr_<tag group>`.
    /// `None` when the parent sets nothing.
    pub inherited_tags: HashMap<SmolStr, Option<SmolStr>>,
    /// Topics that are collapsed entirely when none of their attributes is shown.
    pub volatile_topics: Vec<SmolStr>,
}

impl DialogProperties {
    /// Decode the properties object as rendered into the page.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_hidden_attribute(&self, attr: &str) -> bool {
        self.hide_attributes.iter().any(|a| a == attr)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.user_roles.iter().any(|r| r == role)
    }

    /// Auxiliary tags configured for `tag`, empty if none.
    pub fn aux_tags(&self, tag: &str) -> &[SmolStr] {
        self.aux_tags_by_tag
            .get(tag)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Non-null inherited tag for the given `attr_*` identifier.
    pub fn inherited_tag(&self, attr_ident: &str) -> Option<&SmolStr> {
        self.inherited_tags.get(attr_ident)?.as_ref()
    }
}

/// Element ids of the page regions the resolver works on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLayout {
    /// Tables holding tag selection rows.
    pub tag_containers: Vec<SmolStr>,
    /// Candidate ids of the dialog form. The first one present is used.
    pub forms: Vec<SmolStr>,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            tag_containers: vec![
                SmolStr::new_static("wato_host_tags"),
                SmolStr::new_static("data_sources"),
                SmolStr::new_static("address"),
            ],
            forms: vec![
                SmolStr::new_static("form_edit_host"),
                SmolStr::new_static("form_editfolder"),
            ],
        }
    }
}

impl PageLayout {
    /// Build a layout, rejecting empty id lists.
    pub fn new(
        tag_containers: impl IntoIterator<Item = impl Into<SmolStr>>,
        forms: impl IntoIterator<Item = impl Into<SmolStr>>,
    ) -> Result<Self, ConfigError> {
        let tag_containers: Vec<SmolStr> = tag_containers.into_iter().map(Into::into).collect();
        let forms: Vec<SmolStr> = forms.into_iter().map(Into::into).collect();
        if tag_containers.is_empty() {
            return Err(ConfigError::EmptyLayout("tag container"));
        }
        if forms.is_empty() {
            return Err(ConfigError::EmptyLayout("form"));
        }
        Ok(Self {
            tag_containers,
            forms,
        })
    }
}

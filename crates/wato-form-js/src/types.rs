//! Types exposed to JavaScript via wasm-bindgen.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

use wato_form_core::{ConfigError, DialogProperties, PageLayout};

/// Dialog properties as rendered into the page.
///
/// Mirrors `DialogProperties` for the TypeScript declarations. Missing
/// fields default to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(default)]
pub struct JsDialogProperties {
    pub check_attributes: Vec<String>,
    pub hide_attributes: Vec<String>,
    pub depends_on_roles: HashMap<String, Vec<String>>,
    pub depends_on_tags: HashMap<String, Vec<String>>,
    pub aux_tags_by_tag: HashMap<String, Vec<String>>,
    pub user_roles: Vec<String>,
    pub inherited_tags: HashMap<String, Option<String>>,
    pub volatile_topics: Vec<String>,
}

fn convert_map(map: HashMap<String, Vec<String>>) -> HashMap<wato_form_core::SmolStr, Vec<wato_form_core::SmolStr>> {
    map.into_iter()
        .map(|(k, v)| (k.into(), v.into_iter().map(Into::into).collect()))
        .collect()
}

impl From<JsDialogProperties> for DialogProperties {
    fn from(js: JsDialogProperties) -> Self {
        DialogProperties {
            check_attributes: js.check_attributes.into_iter().map(Into::into).collect(),
            hide_attributes: js.hide_attributes.into_iter().map(Into::into).collect(),
            depends_on_roles: convert_map(js.depends_on_roles),
            depends_on_tags: convert_map(js.depends_on_tags),
            aux_tags_by_tag: convert_map(js.aux_tags_by_tag),
            user_roles: js.user_roles.into_iter().map(Into::into).collect(),
            inherited_tags: js
                .inherited_tags
                .into_iter()
                .map(|(k, v)| (k.into(), v.map(Into::into)))
                .collect(),
            volatile_topics: js.volatile_topics.into_iter().map(Into::into).collect(),
        }
    }
}

/// Element ids scanned by the resolver.
#[derive(Debug, Clone, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsPageLayout {
    pub tag_containers: Vec<String>,
    pub forms: Vec<String>,
}

impl TryFrom<JsPageLayout> for PageLayout {
    type Error = ConfigError;

    fn try_from(js: JsPageLayout) -> Result<Self, Self::Error> {
        PageLayout::new(js.tag_containers, js.forms)
    }
}

//! AttributeDialog - the visibility resolver bound to the page.

use wasm_bindgen::prelude::*;
use web_sys::HtmlInputElement;

use wato_form_browser::DomFormView;
use wato_form_core::{AttributeResolver, DialogProperties, PageLayout, Visibility, effective_tags};

use crate::types::{JsDialogProperties, JsPageLayout};

/// Attribute visibility handling of one host or folder edit dialog.
#[wasm_bindgen]
pub struct AttributeDialog {
    resolver: AttributeResolver,
}

#[wasm_bindgen]
impl AttributeDialog {
    /// Create the dialog handler from the properties object of the page.
    #[wasm_bindgen(constructor)]
    pub fn new(properties: JsDialogProperties) -> AttributeDialog {
        Self::from_properties(properties.into())
    }

    /// Create the dialog handler from the JSON encoded properties.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<AttributeDialog, JsError> {
        let props = DialogProperties::from_json(json).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self::from_properties(props))
    }

    /// Replace the element ids the dialog scans.
    #[wasm_bindgen(js_name = setLayout)]
    pub fn set_layout(&mut self, layout: JsPageLayout) -> Result<(), JsError> {
        let layout = PageLayout::try_from(layout).map_err(|e| JsError::new(&e.to_string()))?;
        self.resolver = self.resolver.clone().with_layout(layout);
        Ok(())
    }

    /// Recompute which attributes are shown. Wired to every tag control.
    ///
    /// Returns the names of the hidden attributes.
    #[wasm_bindgen(js_name = fixVisibility)]
    pub fn fix_visibility(&self) -> Vec<String> {
        let Some(mut view) = DomFormView::from_window() else {
            return Vec::new();
        };
        let pass = self.resolver.fix_visibility(&mut view);
        pass.decisions
            .into_iter()
            .filter(|(_, v)| *v == Visibility::Hidden)
            .map(|(attr, _)| attr.to_string())
            .collect()
    }

    /// Tags currently in effect on the page, `null` entries included.
    #[wasm_bindgen(js_name = effectiveTags)]
    pub fn effective_tags(&self) -> Result<JsValue, JsError> {
        let Some(view) = DomFormView::from_window() else {
            return Ok(JsValue::NULL);
        };
        let tags = effective_tags(&view, self.resolver.properties(), self.resolver.layout());
        serde_wasm_bindgen::to_value(tags.entries())
            .map_err(|e| JsError::new(&format!("Failed to serialize tags: {}", e)))
    }

    /// Swap the editable and default field of an attribute. Wired to the
    /// enable checkbox of each attribute row.
    #[wasm_bindgen(js_name = toggleAttribute)]
    pub fn toggle_attribute(&self, checkbox: &HtmlInputElement, attrname: &str) {
        let Some(mut view) = DomFormView::from_window() else {
            return;
        };
        self.resolver
            .toggle_attribute(&mut view, attrname, checkbox.checked());
    }
}

impl AttributeDialog {
    pub fn from_properties(props: DialogProperties) -> Self {
        tracing::debug!(
            attributes = props.check_attributes.len(),
            "attribute dialog prepared"
        );
        Self {
            resolver: AttributeResolver::new(props),
        }
    }

    pub fn resolver(&self) -> &AttributeResolver {
        &self.resolver
    }
}

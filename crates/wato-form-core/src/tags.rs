//! Effective tag set of the current form state.

use smol_str::SmolStr;

use crate::config::{DialogProperties, PageLayout};
use crate::view::{FormView, TagChoice, TagRow};

/// Prefix of a legend checkbox that was rendered disabled.
const IGNORED_PREFIX: &str = "ignored_";
/// Everything up to and including this marker is stripped from the legend
/// checkbox name to get the tag group.
const CHANGE_MARKER: &str = "_change_";
/// Length of the `tag_` prefix of tag checkbox names.
const TAG_CHECKBOX_PREFIX_LEN: usize = 4;

/// Ordered tag ids selected in the form, including auxiliary tags.
///
/// Entries are `None` for rows that resolve to no tag. Those never match a
/// rule.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectiveTags(Vec<Option<SmolStr>>);

impl EffectiveTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().flatten().any(|t| t == tag)
    }

    /// Append a resolved row value followed by its auxiliary tags.
    pub fn push(&mut self, tag: Option<SmolStr>, props: &DialogProperties) {
        let aux = tag.as_deref().map(|t| props.aux_tags(t)).unwrap_or_default();
        self.0.push(tag);
        self.0.extend(aux.iter().cloned().map(Some));
    }

    pub fn entries(&self) -> &[Option<SmolStr>] {
        &self.0
    }

    /// Non-null tags in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().flatten().map(SmolStr::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<SmolStr> for EffectiveTags {
    fn from_iter<I: IntoIterator<Item = SmolStr>>(iter: I) -> Self {
        Self(iter.into_iter().map(Some).collect())
    }
}

impl TagRow {
    /// Whether the attribute of this row is explicitly set in the form.
    pub fn is_enabled(&self) -> bool {
        if self.checkbox_name.starts_with(IGNORED_PREFIX) {
            self.proxy_value.as_deref() == Some("on")
        } else {
            self.checkbox_checked
        }
    }

    /// `attr_<tag group>` key used by the inherited tag map.
    pub fn attr_ident(&self) -> String {
        let group = self
            .checkbox_name
            .rsplit_once(CHANGE_MARKER)
            .map_or(self.checkbox_name.as_str(), |(_, group)| group);
        format!("attr_{group}")
    }

    /// Tag contributed by the row.
    ///
    /// The outer `None` means the row contributes nothing at all (enabled
    /// but without a value control).
    pub fn resolve(&self, props: &DialogProperties) -> Option<Option<SmolStr>> {
        if !self.is_enabled() {
            return Some(props.inherited_tag(&self.attr_ident()).cloned());
        }
        let tag = match self.choice.as_ref()? {
            TagChoice::Checkbox { name, checked } if *checked => Some(SmolStr::from_iter(
                name.chars().skip(TAG_CHECKBOX_PREFIX_LEN),
            )),
            TagChoice::Select { value } => Some(SmolStr::new(value)),
            TagChoice::Checkbox { .. } | TagChoice::Other => None,
        };
        Some(tag)
    }
}

/// Collect the effective tags from all tag containers of the layout.
pub fn effective_tags(
    view: &impl FormView,
    props: &DialogProperties,
    layout: &PageLayout,
) -> EffectiveTags {
    let mut tags = EffectiveTags::new();
    for container in &layout.tag_containers {
        let Some(rows) = view.tag_rows(container) else {
            tracing::trace!(container = %container, "tag container not on page");
            continue;
        };
        for row in rows {
            let Some(tag) = row.resolve(props) else {
                tracing::trace!(checkbox = %row.checkbox_name, "tag row without value control");
                continue;
            };
            tags.push(tag, props);
        }
    }
    tracing::debug!(tags = ?tags.entries(), "effective tags");
    tags
}

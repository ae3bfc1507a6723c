//! Attribute visibility resolution.
//!
//! Decides for every rule-bound attribute whether its row is shown, applies
//! the decision to the page and collapses topics that end up empty.
//!
//! # Precedence
//!
//! Decisions come from an ordered list of evaluators, each returning
//! `Some(visibility)` to decide or `None` to defer:
//!
//! 1. explicitly hidden attributes
//! 2. role rules
//! 3. tag rules against the effective tag set
//!
//! An attribute no evaluator decides on is shown.

use smol_str::SmolStr;

use crate::config::{DialogProperties, PageLayout};
use crate::rule;
use crate::tags::{EffectiveTags, effective_tags};
use crate::toggle::toggle_attribute;
use crate::types::Visibility;
use crate::view::FormView;


/// Inputs of one attribute decision.
pub struct AttributeContext<'a> {
    pub attr: &'a str,
    pub props: &'a DialogProperties,
    pub tags: &'a EffectiveTags,
}

/// One step of the precedence chain.
pub type RuleEvaluator = fn(&AttributeContext<'_>) -> Option<Visibility>;

/// Evaluators in precedence order.
pub const EVALUATORS: [RuleEvaluator; 3] = [explicit_hide, role_rules, tag_rules];

fn explicit_hide(ctx: &AttributeContext<'_>) -> Option<Visibility> {
    ctx.props
        .is_hidden_attribute(ctx.attr)
        .then_some(Visibility::Hidden)
}

fn role_rules(ctx: &AttributeContext<'_>) -> Option<Visibility> {
    let rules = ctx.props.depends_on_roles.get(ctx.attr)?;
    rule::any_fails(rules, |role| ctx.props.has_role(role)).then_some(Visibility::Hidden)
}

fn tag_rules(ctx: &AttributeContext<'_>) -> Option<Visibility> {
    let rules = ctx.props.depends_on_tags.get(ctx.attr)?;
    rule::any_fails(rules, |tag| ctx.tags.contains(tag)).then_some(Visibility::Hidden)
}

/// Outcome of a visibility pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilityPass {
    pub tags: EffectiveTags,
    /// Decision per configured attribute, in configuration order.
    pub decisions: Vec<(SmolStr, Visibility)>,
    /// Volatile topics without any shown attribute.
    pub collapsed_topics: Vec<SmolStr>,
    /// Form whose sections were updated, if any was found.
    pub form: Option<SmolStr>,
}

impl VisibilityPass {
    pub fn visibility(&self, attr: &str) -> Option<Visibility> {
        self.decisions
            .iter()
            .find(|(a, _)| a == attr)
            .map(|(_, v)| *v)
    }
}

/// Visibility resolver for one edit dialog.
///
/// Built once per page from the properties the server rendered.
#[derive(Debug, Clone)]
pub struct AttributeResolver {
    props: DialogProperties,
    layout: PageLayout,
}

impl AttributeResolver {
    pub fn new(props: DialogProperties) -> Self {
        Self {
            props,
            layout: PageLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn properties(&self) -> &DialogProperties {
        &self.props
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Visibility of one attribute for the given tag set.
    pub fn decide(&self, attr: &str, tags: &EffectiveTags) -> Visibility {
        let ctx = AttributeContext {
            attr,
            props: &self.props,
            tags,
        };
        EVALUATORS
            .iter()
            .find_map(|evaluate| evaluate(&ctx))
            .unwrap_or_default()
    }

    /// Recompute and apply the visibility of all rule-bound attributes.
    pub fn fix_visibility(&self, view: &mut impl FormView) -> VisibilityPass {
        let tags = effective_tags(view, &self.props, &self.layout);
        let mut collapsed: Vec<SmolStr> = self.props.volatile_topics.clone();
        let mut decisions = Vec::with_capacity(self.props.check_attributes.len());

        for attr in &self.props.check_attributes {
            let visibility = self.decide(attr, &tags);
            decisions.push((attr.clone(), visibility));

            if !view.has_attribute_row(attr) {
                tracing::trace!(attr = %attr, "attribute row not on page");
                continue;
            }
            view.set_attribute_row(attr, visibility);
            view.set_display_flag(attr, visibility);

            match visibility {
                Visibility::Hidden => {
                    view.set_attribute_checked(attr, false);
                    toggle_attribute(view, attr, false);
                }
                Visibility::Shown => {
                    if let Some(topic) = view.attribute_topic(attr) {
                        collapsed.retain(|t| *t != topic);
                    }
                }
            }
        }

        let form = self.apply_topics(view, &collapsed);
        tracing::debug!(
            attributes = decisions.len(),
            collapsed = ?collapsed,
            form = ?form,
            "attribute visibility fixed"
        );

        VisibilityPass {
            tags,
            decisions,
            collapsed_topics: collapsed,
            form,
        }
    }

    /// Show or hide the sections of the first form present on the page.
    fn apply_topics(&self, view: &mut impl FormView, collapsed: &[SmolStr]) -> Option<SmolStr> {
        let (form_id, sections) = self
            .layout
            .forms
            .iter()
            .find_map(|id| view.form_sections(id).map(|s| (id.clone(), s)))?;

        for (index, title) in sections.iter().enumerate() {
            let hidden = title
                .as_deref()
                .is_some_and(|title| collapsed.iter().any(|t| t == title));
            view.set_form_section(&form_id, index, Visibility::shown_if(!hidden));
        }
        Some(form_id)
    }

    /// Apply the state of an attribute's enable checkbox to its fields.
    pub fn toggle_attribute(&self, view: &mut impl FormView, attr: &str, checked: bool) {
        toggle_attribute(view, attr, checked);
    }
}

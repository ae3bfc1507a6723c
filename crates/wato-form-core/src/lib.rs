//! wato-form-core: attribute visibility rules for the host and folder edit
//! dialogs, without any DOM dependency.
//!
//! This crate provides:
//! - `DialogProperties` - the per-page configuration rendered by the server
//! - `FormView` / `FolderView` traits for page access
//! - `EffectiveTags` builder over the tag selection rows
//! - `AttributeResolver` - the visibility pass over all rule-bound attributes
//! - Folder list hover/click decisions and the secret generator

pub mod config;
pub mod error;
pub mod folder;
pub mod resolver;
pub mod rule;
pub mod secret;
pub mod tags;
pub mod toggle;
pub mod types;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{DialogProperties, PageLayout};
pub use error::ConfigError;
pub use folder::{
    FolderView, Hover, apply_folder_hover, container_id, folder_id, is_folder_click,
};
pub use resolver::{AttributeResolver, VisibilityPass};
pub use rule::Rule;
pub use secret::{random_secret, random_secret_with};
pub use smol_str::SmolStr;
pub use tags::{EffectiveTags, effective_tags};
pub use toggle::toggle_attribute;
pub use types::Visibility;
pub use view::{FormView, TagChoice, TagRow, ids};

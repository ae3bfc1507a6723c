//! Browser DOM layer for the WATO attribute dialogs.
//!
//! This crate implements the `wato-form-core` page traits on top of
//! `web_sys`. It assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `form`: `DomFormView`, the attribute dialog as seen by the resolver
//! - `folder`: folder list click and hover handlers
//! - `utils`: container toggle, condition-type toggle, secret fields
//!
//! # Re-exports
//!
//! This crate re-exports `wato-form-core` for convenience, so consumers
//! only need to depend on `wato-form-browser`.

// Re-export core crate
pub use wato_form_core;
pub use wato_form_core::*;

mod dom;
pub mod folder;
pub mod form;
pub mod utils;

pub use folder::{DomFolderView, open_folder, toggle_folder};
pub use form::DomFormView;
pub use utils::{randomize_secret, toggle_container, toggle_rule_condition_type};

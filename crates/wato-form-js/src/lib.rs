//! WASM bindings for the WATO attribute dialogs.
//!
//! The server-rendered host and folder pages construct one
//! `AttributeDialog` from their dialog properties and call into it from
//! their change handlers. The folder list and the remaining setup pages
//! use the free functions in `handlers`.

mod dialog;
mod handlers;
mod types;

pub use dialog::*;
pub use handlers::*;
pub use types::*;

use tracing::Level;
use tracing::subscriber::set_global_default;
use tracing_subscriber::Registry;
use tracing_subscriber::layer::SubscriberExt;
use wasm_bindgen::prelude::*;

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    let reg = Registry::default().with(wasm_layer);
    let _ = set_global_default(reg);
}

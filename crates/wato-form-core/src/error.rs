use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to decode dialog properties: {0}")]
    #[diagnostic(
        code(wato_form::config::decode),
        help("the page must render the attribute dialog properties as a JSON object")
    )]
    Decode(#[from] serde_json::Error),

    #[error("page layout has no {0} ids")]
    #[diagnostic(code(wato_form::config::empty_layout))]
    EmptyLayout(&'static str),
}

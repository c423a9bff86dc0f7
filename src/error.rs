use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::section::Section;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PageError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("anchor #{} is not mounted", .0.id())]
    MissingAnchor(Section),
    #[error("unknown section id `{0}`")]
    UnknownSection(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type PageResult<T> = Result<T, PageError>;

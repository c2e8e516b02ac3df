//! Dictionary input: where the translation resource comes from and how it is parsed.

pub mod source;
pub mod translation;

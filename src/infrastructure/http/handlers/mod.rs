//! HTTP Handlers

mod annotate;
mod ping;

pub use annotate::*;
pub use ping::*;

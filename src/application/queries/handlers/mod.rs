//! Query Handlers

mod annotate_handlers;

pub use annotate_handlers::*;

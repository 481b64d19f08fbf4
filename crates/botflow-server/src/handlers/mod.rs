//! HTTP request handlers, grouped by resource.

pub mod bots;
pub mod flows;

//! HTTP client for the botflow studio API.
//!
//! [`StudioClient`] is the persistence side of the canvas: it saves and
//! restores flow documents per bot and carries the plain bot CRUD calls the
//! studio pages need. Flow payloads are typed end to end -- saving takes a
//! [`FlowGraph`](botflow_core::FlowGraph) and viewport, restoring gives them
//! back -- so presentation state can never leak into storage and a corrupt
//! stored blob surfaces as an error instead of a broken canvas.
//!
//! Every call returns an explicit `Result`; network failures and non-2xx
//! responses are never swallowed.

pub mod client;
pub mod error;
pub mod types;

// Re-export commonly used types at the crate root.
pub use client::StudioClient;
pub use error::ClientError;
pub use types::{Bot, CreateBot, UpdateBot};

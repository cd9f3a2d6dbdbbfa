//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// An Arc-wrapped `AxumContext`; the same context is kept by `start_server`
/// so it can be shut down after the listener stops.
pub type AppState = Arc<AxumContext>;

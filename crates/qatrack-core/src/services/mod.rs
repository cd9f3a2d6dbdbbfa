//! Core services - the assignment rule engine.
//!
//! Services orchestrate between ports and domain logic. They hold no state
//! between calls beyond their repository handles and the backend deadline;
//! every fact lives in the store.

mod access_gate;
mod app_core;
mod assignment_ledger;
mod card_links;
mod deadline;
mod disable_gate;
mod progress_tracker;
mod role_resolver;
mod test_catalog;

#[cfg(test)]
pub(crate) mod test_support;

pub use access_gate::AccessGate;
pub use app_core::AppCore;
pub use assignment_ledger::AssignmentLedger;
pub use card_links::CardLinkService;
pub use deadline::Deadline;
pub use disable_gate::DisableFlagGate;
pub use progress_tracker::ProgressTracker;
pub use role_resolver::RoleResolver;
pub use test_catalog::TestCatalog;

#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::CoreConfig;
pub use domain::{
    AdminCaller, CardLink, Caller, NewTestCase, NewUser, Progress, ProgressSummary,
    ProgressUpdate, Role, TestCase, UnknownRole, User,
};
pub use ports::{
    CardLinkRepository, CoreError, ProfileRepository, ProgressRepository, Repos,
    RepositoryError, TestCaseRepository,
};
pub use services::{
    AccessGate, AppCore, AssignmentLedger, CardLinkService, Deadline, DisableFlagGate,
    ProgressTracker, RoleResolver, TestCatalog,
};

// Re-export path utilities
pub use paths::{DATA_DIR_ENV, PathError, data_root, database_path};

// Silence unused dev-dependency warnings for helpers not used by every test module
#[cfg(test)]
use tempfile as _;

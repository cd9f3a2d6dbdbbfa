//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters (CLI, Web)
//! receive an `AppCore` instance and use it to access all functionality.

use crate::config::CoreConfig;
use crate::ports::Repos;

use super::{
    AccessGate, AssignmentLedger, CardLinkService, Deadline, DisableFlagGate, ProgressTracker,
    RoleResolver, TestCatalog,
};

/// The core application facade.
///
/// Constructed once per process at the adapter's composition root with
/// concrete repositories.
///
/// # Example
///
/// ```ignore
/// let repos = CoreFactory::build_repos(&pool);
/// let core = AppCore::new(repos, CoreConfig::default());
///
/// let test = core.gate().assign_test("u-1", "TC-101").await?;
/// ```
pub struct AppCore {
    config: CoreConfig,
    roles: RoleResolver,
    ledger: AssignmentLedger,
    flags: DisableFlagGate,
    progress: ProgressTracker,
    catalog: TestCatalog,
    cards: CardLinkService,
    gate: AccessGate,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories.
    pub fn new(repos: Repos, config: CoreConfig) -> Self {
        let deadline = Deadline::from_config(&config);
        let roles = RoleResolver::new(repos.profiles.clone(), deadline);
        let ledger = AssignmentLedger::new(repos.tests.clone(), deadline);
        let flags = DisableFlagGate::new(repos.tests.clone(), deadline);
        let progress = ProgressTracker::new(
            repos.profiles,
            repos.tests.clone(),
            repos.progress,
            deadline,
        );
        let catalog = TestCatalog::new(repos.tests.clone(), deadline);
        let cards = CardLinkService::new(repos.tests, repos.card_links, deadline);
        let gate = AccessGate::new(
            roles.clone(),
            ledger.clone(),
            flags.clone(),
            progress.clone(),
            catalog.clone(),
            deadline,
        );

        Self {
            config,
            roles,
            ledger,
            flags,
            progress,
            catalog,
            cards,
            gate,
        }
    }

    pub const fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Caller-scoped operations (assign, unassign, flag changes, progress).
    pub const fn gate(&self) -> &AccessGate {
        &self.gate
    }

    pub const fn roles(&self) -> &RoleResolver {
        &self.roles
    }

    pub const fn ledger(&self) -> &AssignmentLedger {
        &self.ledger
    }

    pub const fn flags(&self) -> &DisableFlagGate {
        &self.flags
    }

    pub const fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    pub const fn catalog(&self) -> &TestCatalog {
        &self.catalog
    }

    pub const fn cards(&self) -> &CardLinkService {
        &self.cards
    }
}

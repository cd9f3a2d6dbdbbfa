//! In-memory repositories shared by the service tests.
//!
//! Each conditional update runs under one lock, which gives the same
//! all-or-nothing behavior the SQL statements have.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::domain::{
    CardLink, NewTestCase, NewUser, Progress, ProgressUpdate, Role, TestCase, User,
};
use crate::ports::{
    CardLinkRepository, ProfileRepository, ProgressRepository, Repos, RepositoryError,
    TestCaseRepository,
};

#[derive(Default)]
struct State {
    users: BTreeMap<String, User>,
    tests: BTreeMap<String, TestCase>,
    progress: BTreeMap<(String, String), Progress>,
    cards: BTreeMap<(String, String), CardLink>,
    /// Logical clock so successive writes get distinct timestamps.
    tick: i64,
}

impl State {
    fn now(&mut self) -> DateTime<Utc> {
        self.tick += 1;
        DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(self.tick)
    }

    fn is_admin(&self, id: &str) -> bool {
        self.users.get(id).is_some_and(|u| u.role.is_admin())
    }
}

/// A single in-memory store implementing every repository port.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repos(&self) -> Repos {
        let store = Arc::new(self.clone());
        Repos::new(store.clone(), store.clone(), store.clone(), store)
    }

    pub fn add_user(&self, id: &str, role: Role) -> &Self {
        let mut state = self.state.lock().unwrap();
        let created_at = state.now();
        state.users.insert(
            id.to_string(),
            User {
                id: id.to_string(),
                display_name: id.to_uppercase(),
                role,
                created_at,
            },
        );
        self
    }

    pub fn add_test(&self, id: &str) -> &Self {
        let mut state = self.state.lock().unwrap();
        let now = state.now();
        state.tests.insert(
            id.to_string(),
            TestCase {
                id: id.to_string(),
                title: format!("Title {id}"),
                category: "general".to_string(),
                description: None,
                disabled: false,
                assigned_to: None,
                created_at: now,
                updated_at: now,
            },
        );
        self
    }

    pub fn set_flag(&self, id: &str, disabled: bool) {
        let mut state = self.state.lock().unwrap();
        if let Some(t) = state.tests.get_mut(id) {
            t.disabled = disabled;
        }
    }

    pub fn set_role(&self, id: &str, role: Role) {
        let mut state = self.state.lock().unwrap();
        if let Some(u) = state.users.get_mut(id) {
            u.role = role;
        }
    }

    pub fn test(&self, id: &str) -> Option<TestCase> {
        self.state.lock().unwrap().tests.get(id).cloned()
    }
}

#[async_trait]
impl ProfileRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let mut users: Vec<User> = self.state.lock().unwrap().users.values().cloned().collect();
        users.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        Ok(users)
    }

    async fn get(&self, id: &str) -> Result<User, RepositoryError> {
        self.state
            .lock()
            .unwrap()
            .users
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("user {id}")))
    }

    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state.users.contains_key(&user.id) {
            return Err(RepositoryError::AlreadyExists(format!("user {}", user.id)));
        }
        let created_at = state.now();
        let user = User {
            id: user.id.clone(),
            display_name: user.display_name.clone(),
            role: user.role,
            created_at,
        };
        state.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }
}

#[async_trait]
impl TestCaseRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<TestCase>, RepositoryError> {
        Ok(self.state.lock().unwrap().tests.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<TestCase, RepositoryError> {
        self.state
            .lock()
            .unwrap()
            .tests
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("test {id}")))
    }

    async fn insert(&self, test: &NewTestCase) -> Result<TestCase, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        if state.tests.contains_key(&test.id) {
            return Err(RepositoryError::AlreadyExists(format!("test {}", test.id)));
        }
        let now = state.now();
        let test = TestCase {
            id: test.id.clone(),
            title: test.title.clone(),
            category: test.category.clone(),
            description: test.description.clone(),
            disabled: false,
            assigned_to: None,
            created_at: now,
            updated_at: now,
        };
        state.tests.insert(test.id.clone(), test.clone());
        Ok(test)
    }

    async fn claim(
        &self,
        test_id: &str,
        user_id: &str,
    ) -> Result<Option<TestCase>, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        if !state.users.contains_key(user_id) {
            return Err(RepositoryError::Constraint(format!("user {user_id}")));
        }
        let now = state.now();
        Ok(state
            .tests
            .get_mut(test_id)
            .filter(|t| t.is_claimable())
            .map(|t| {
                t.assigned_to = Some(user_id.to_string());
                t.updated_at = now;
                t.clone()
            }))
    }

    async fn release(
        &self,
        test_id: &str,
        user_id: &str,
    ) -> Result<Option<TestCase>, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let now = state.now();
        Ok(state
            .tests
            .get_mut(test_id)
            .filter(|t| t.is_held_by(user_id))
            .map(|t| {
                t.assigned_to = None;
                t.updated_at = now;
                t.clone()
            }))
    }

    async fn toggle_disabled(
        &self,
        test_id: &str,
        admin_id: &str,
    ) -> Result<Option<TestCase>, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        if !state.is_admin(admin_id) {
            return Ok(None);
        }
        let now = state.now();
        Ok(state.tests.get_mut(test_id).map(|t| {
            t.disabled = !t.disabled;
            t.updated_at = now;
            t.clone()
        }))
    }

    async fn set_disabled(
        &self,
        test_id: &str,
        admin_id: &str,
        disabled: bool,
    ) -> Result<Option<TestCase>, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        if !state.is_admin(admin_id) {
            return Ok(None);
        }
        let now = state.now();
        Ok(state.tests.get_mut(test_id).map(|t| {
            t.disabled = disabled;
            t.updated_at = now;
            t.clone()
        }))
    }
}

#[async_trait]
impl ProgressRepository for MemoryStore {
    async fn upsert(&self, update: &ProgressUpdate) -> Result<Progress, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        let now = state.now();
        let record = Progress {
            user_id: update.user_id.clone(),
            test_id: update.test_id.clone(),
            completed: update.completed,
            notes: update.notes.clone(),
            updated_at: now,
        };
        state.progress.insert(
            (update.user_id.clone(), update.test_id.clone()),
            record.clone(),
        );
        Ok(record)
    }

    /// Returned in key order, not recency order.
    async fn list(&self) -> Result<Vec<Progress>, RepositoryError> {
        Ok(self.state.lock().unwrap().progress.values().cloned().collect())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Progress>, RepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .progress
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CardLinkRepository for MemoryStore {
    async fn list_for_test(&self, test_id: &str) -> Result<Vec<CardLink>, RepositoryError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .cards
            .values()
            .filter(|c| c.test_id == test_id)
            .cloned()
            .collect())
    }

    async fn upsert(&self, link: &CardLink) -> Result<CardLink, RepositoryError> {
        self.state.lock().unwrap().cards.insert(
            (link.test_id.clone(), link.card_id.clone()),
            link.clone(),
        );
        Ok(link.clone())
    }

    async fn remove(&self, test_id: &str, card_id: &str) -> Result<(), RepositoryError> {
        self.state
            .lock()
            .unwrap()
            .cards
            .remove(&(test_id.to_string(), card_id.to_string()))
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("card {card_id} on {test_id}")))
    }
}

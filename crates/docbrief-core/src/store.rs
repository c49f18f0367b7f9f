//! Session-scoped storage for registered users and their summary history.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use thiserror::Error;

use docbrief_llm::SummaryResult;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("user already exists")]
    DuplicateUser,
}

/// A registered user. The password is kept only as an argon2 hash.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub email: String,
    pub hashed_password: String,
}

/// Keyed storage for users and per-user summary history.
///
/// Handlers only see this trait; the in-memory implementation can be swapped
/// for a persistent one without touching call sites. History is append-only
/// and ordered.
pub trait SessionStore: Send + Sync {
    /// Store a new user. Rejects an email that is already registered,
    /// leaving the existing record untouched.
    fn register_user(&self, user: UserRecord) -> Result<(), StoreError>;

    fn find_user(&self, email: &str) -> Option<UserRecord>;

    fn append_summary(&self, email: &str, summary: SummaryResult);

    fn summaries_for(&self, email: &str) -> Vec<SummaryResult>;
}

/// Process-lifetime store over concurrent maps. Everything is lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    users: DashMap<String, UserRecord>,
    summaries: DashMap<String, Vec<SummaryResult>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn register_user(&self, user: UserRecord) -> Result<(), StoreError> {
        // Entry keeps the check-then-insert atomic under concurrent registration.
        match self.users.entry(user.email.clone()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateUser),
            Entry::Vacant(slot) => {
                slot.insert(user);
                Ok(())
            }
        }
    }

    fn find_user(&self, email: &str) -> Option<UserRecord> {
        self.users.get(email).map(|r| r.value().clone())
    }

    fn append_summary(&self, email: &str, summary: SummaryResult) {
        self.summaries
            .entry(email.to_string())
            .or_insert_with(Vec::new)
            .push(summary);
    }

    fn summaries_for(&self, email: &str) -> Vec<SummaryResult> {
        self.summaries
            .get(email)
            .map(|r| r.value().clone())
            .unwrap_or_default()
    }
}

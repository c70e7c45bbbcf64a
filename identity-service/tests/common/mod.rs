use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use identity_service::domain::identity::errors::StoreError;
use identity_service::domain::identity::models::UserRecord;
use identity_service::domain::identity::ports::CredentialStore;

/// In-memory credential store backing the end-to-end tests.
///
/// Keyed by normalized email, single-record writes are atomic under the
/// mutex, matching the guarantees the core assumes of a real store.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    records: Mutex<HashMap<String, UserRecord>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let records = self.records.lock().unwrap();
        Ok(records.get(email).cloned())
    }

    async fn save(&self, record: UserRecord) -> Result<UserRecord, StoreError> {
        let mut records = self.records.lock().unwrap();
        records.insert(record.email.as_str().to_string(), record.clone());
        Ok(record)
    }
}

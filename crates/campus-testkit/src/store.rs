//! In-memory record store

use async_trait::async_trait;
use campus_core::{CampusError, ResourceContext, ResourceId, Result, SchoolId, UserId};
use campus_guards::{RecordStore, TenantScoped};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::marker::PhantomData;

/// Generic tenant-scoped record for guard tests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRecord {
    /// Record id
    pub id: ResourceId,
    /// Owning school
    pub school_id: Option<SchoolId>,
    /// Owning account
    pub owner: Option<UserId>,
    /// Linked accounts
    pub linked: Vec<UserId>,
    /// Payload
    pub body: String,
}

impl TestRecord {
    /// Record with a random id and no school
    pub fn new() -> Self {
        Self {
            id: ResourceId::new(uuid::Uuid::new_v4().to_string()),
            school_id: None,
            owner: None,
            linked: Vec::new(),
            body: String::new(),
        }
    }

    /// Set the id
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = ResourceId::from(id);
        self
    }

    /// Set the owning school
    pub fn in_school(mut self, school_id: SchoolId) -> Self {
        self.school_id = Some(school_id);
        self
    }

    /// Set the owning account
    pub fn owned_by(mut self, owner: &str) -> Self {
        self.owner = Some(UserId::from(owner));
        self
    }

    /// Link an account
    pub fn linked_to(mut self, user: &str) -> Self {
        self.linked.push(UserId::from(user));
        self
    }

    /// Set the payload
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }
}

impl Default for TestRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl TenantScoped for TestRecord {
    fn resource_context(&self) -> ResourceContext {
        ResourceContext {
            id: Some(self.id.clone()),
            school_id: self.school_id.clone(),
            owner_user_id: self.owner.clone(),
            linked_user_ids: self.linked.clone(),
        }
    }

    fn stamp_school(&mut self, school_id: SchoolId) {
        self.school_id = Some(school_id);
    }
}

/// Thread-safe map-backed [`RecordStore`]
///
/// Records are keyed by the id of their [`ResourceContext`]; listing is in
/// id order.
pub struct InMemoryRecordStore<R> {
    records: RwLock<BTreeMap<ResourceId, R>>,
    _record: PhantomData<fn() -> R>,
}

impl<R> InMemoryRecordStore<R>
where
    R: TenantScoped + Clone + Send + Sync,
{
    /// Empty store
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            _record: PhantomData,
        }
    }

    /// Store pre-populated with `records`, bypassing any guard
    pub fn seeded(records: impl IntoIterator<Item = R>) -> Self {
        let store = Self::new();
        {
            let mut map = store.records.write();
            for record in records {
                if let Some(id) = record.resource_context().id {
                    map.insert(id, record);
                }
            }
        }
        store
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Unguarded read, for assertions
    pub fn peek(&self, id: &ResourceId) -> Option<R> {
        self.records.read().get(id).cloned()
    }
}

impl<R> Default for InMemoryRecordStore<R>
where
    R: TenantScoped + Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

fn key_of<R: TenantScoped>(record: &R) -> Result<ResourceId> {
    record
        .resource_context()
        .id
        .ok_or_else(|| CampusError::invalid("record has no id"))
}

#[async_trait]
impl<R> RecordStore for InMemoryRecordStore<R>
where
    R: TenantScoped + Clone + Send + Sync + 'static,
{
    type Record = R;

    async fn fetch(&self, id: &ResourceId) -> Result<Option<R>> {
        Ok(self.records.read().get(id).cloned())
    }

    async fn insert(&self, record: R) -> Result<R> {
        let id = key_of(&record)?;
        let mut records = self.records.write();
        if records.contains_key(&id) {
            return Err(CampusError::storage(format!("duplicate record id: {id}")));
        }
        records.insert(id, record.clone());
        Ok(record)
    }

    async fn replace(&self, id: &ResourceId, record: R) -> Result<R> {
        let mut records = self.records.write();
        let Some(slot) = records.get_mut(id) else {
            return Err(CampusError::not_found(format!("record {id} not found")));
        };
        *slot = record.clone();
        Ok(record)
    }

    async fn remove(&self, id: &ResourceId) -> Result<()> {
        self.records
            .write()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CampusError::not_found(format!("record {id} not found")))
    }

    async fn list_for_school(&self, school_id: &SchoolId) -> Result<Vec<R>> {
        Ok(self
            .records
            .read()
            .values()
            .filter(|record| record.resource_context().school_id.as_ref() == Some(school_id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_fetch_remove() {
        let store = InMemoryRecordStore::new();
        let record = TestRecord::new().with_id("r1").with_body("hello");
        store.insert(record.clone()).await.unwrap();

        assert_eq!(store.fetch(&"r1".into()).await.unwrap(), Some(record.clone()));
        assert!(store.insert(record).await.is_err());

        store.remove(&"r1".into()).await.unwrap();
        assert!(store.is_empty());
        assert!(store.remove(&"r1".into()).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_list_for_school_filters_tenants() {
        let store = InMemoryRecordStore::seeded([
            TestRecord::new().with_id("a").in_school("S1".into()),
            TestRecord::new().with_id("b").in_school("S2".into()),
            TestRecord::new().with_id("c").in_school("S1".into()),
        ]);
        let listed = store.list_for_school(&"S1".into()).await.unwrap();
        let ids: Vec<_> = listed.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}

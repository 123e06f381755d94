//! Authorized record store wrapper
//!
//! [`GuardedStore`] sits between request handlers and a [`RecordStore`]. It
//! fetches the current snapshot of the target record, decides against it,
//! and only then forwards the read or write. Check and write are separate
//! store calls; stores that need them atomic must provide that themselves.

use crate::config::GuardConfig;
use crate::scope::{trace_outcome, RequestScope};
use async_trait::async_trait;
use campus_authorization::{ResourceAction, ResourcePolicy};
use campus_core::{AuthContext, CampusError, ResourceContext, ResourceId, Result, SchoolId};
use tracing::debug;

/// A record that belongs to one tenant
pub trait TenantScoped {
    /// Project the fields authorization decisions read
    fn resource_context(&self) -> ResourceContext;

    /// Assign the owning school
    fn stamp_school(&mut self, school_id: SchoolId);
}

/// Persistence for one record type
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Stored record type
    type Record: TenantScoped + Clone + Send + Sync;

    /// Load a record by id
    async fn fetch(&self, id: &ResourceId) -> Result<Option<Self::Record>>;

    /// Store a new record
    async fn insert(&self, record: Self::Record) -> Result<Self::Record>;

    /// Overwrite an existing record
    async fn replace(&self, id: &ResourceId, record: Self::Record) -> Result<Self::Record>;

    /// Delete a record
    async fn remove(&self, id: &ResourceId) -> Result<()>;

    /// Every record of a school
    async fn list_for_school(&self, school_id: &SchoolId) -> Result<Vec<Self::Record>>;
}

/// Record store that authorizes every call against one resource policy
pub struct GuardedStore<S, A: 'static> {
    store: S,
    policy: &'static ResourcePolicy<A>,
    config: GuardConfig,
}

impl<S, A> GuardedStore<S, A>
where
    S: RecordStore,
    A: ResourceAction,
{
    /// Guard `store` with `policy` and default configuration
    pub fn new(store: S, policy: &'static ResourcePolicy<A>) -> Self {
        Self::with_config(store, policy, GuardConfig::default())
    }

    /// Guard `store` with `policy` and explicit configuration
    pub fn with_config(store: S, policy: &'static ResourcePolicy<A>, config: GuardConfig) -> Self {
        Self {
            store,
            policy,
            config,
        }
    }

    /// The wrapped store, bypassing authorization
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Guard configuration
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Read one record
    pub async fn get(&self, scope: &RequestScope, id: &ResourceId) -> Result<S::Record> {
        let auth = scope.require_auth()?;
        let record = self.load(id).await?;
        self.enforce(auth, A::READ, Some(&snapshot(&record, id)))?;
        Ok(record)
    }

    /// Create a record in the caller's school
    ///
    /// The record is stamped with the caller's school before it is stored;
    /// a school set by the caller is overwritten.
    pub async fn create(&self, scope: &RequestScope, mut record: S::Record) -> Result<S::Record> {
        let auth = scope.require_auth()?;
        self.enforce(auth, A::CREATE, None)?;
        if let Some(school_id) = &auth.school_id {
            record.stamp_school(school_id.clone());
        }
        let stored = self.store.insert(record).await?;
        debug!(
            resource_type = self.policy.resource_type(),
            "Created guarded record"
        );
        Ok(stored)
    }

    /// Replace a record, keeping it in the school it already belongs to
    ///
    /// A replacement carrying a different id is rejected as invalid.
    pub async fn update(
        &self,
        scope: &RequestScope,
        id: &ResourceId,
        mut record: S::Record,
    ) -> Result<S::Record> {
        let auth = scope.require_auth()?;
        let current = self.load(id).await?;
        let current_ctx = snapshot(&current, id);
        self.enforce(auth, A::UPDATE, Some(&current_ctx))?;
        if let Some(other) = record.resource_context().id.filter(|other| other != id) {
            return Err(CampusError::invalid(format!(
                "{} {id} cannot be replaced by record {other}",
                self.policy.resource_type()
            )));
        }
        if let Some(school_id) = current_ctx.school_id {
            record.stamp_school(school_id);
        }
        self.store.replace(id, record).await
    }

    /// Delete a record
    pub async fn delete(&self, scope: &RequestScope, id: &ResourceId) -> Result<()> {
        let auth = scope.require_auth()?;
        let current = self.load(id).await?;
        self.enforce(auth, A::DELETE, Some(&snapshot(&current, id)))?;
        self.store.remove(id).await
    }

    /// Every record of `school_id`
    pub async fn export(&self, scope: &RequestScope, school_id: &SchoolId) -> Result<Vec<S::Record>> {
        let auth = scope.require_auth()?;
        let target = ResourceContext::in_school(school_id.clone());
        self.enforce(auth, A::EXPORT, Some(&target))?;
        self.store.list_for_school(school_id).await
    }

    async fn load(&self, id: &ResourceId) -> Result<S::Record> {
        self.store
            .fetch(id)
            .await?
            .ok_or_else(|| self.missing(id))
    }

    fn enforce(&self, auth: &AuthContext, action: A, resource: Option<&ResourceContext>) -> Result<()> {
        let outcome = self.policy.assert(auth, action, resource);
        trace_outcome(auth, action.as_str(), self.policy.resource_type(), &outcome);
        outcome.map_err(|error| {
            let existing = resource.and_then(|r| r.id.as_ref());
            match existing {
                Some(id) if self.config.conceal_existence => self.missing(id),
                _ => CampusError::from(error),
            }
        })
    }

    fn missing(&self, id: &ResourceId) -> CampusError {
        CampusError::not_found(format!("{} {id} not found", self.policy.resource_type()))
    }
}

fn snapshot<R: TenantScoped>(record: &R, id: &ResourceId) -> ResourceContext {
    let mut ctx = record.resource_context();
    if ctx.id.is_none() {
        ctx.id = Some(id.clone());
    }
    ctx
}

use crate::transport::ApiClient;
use crate::{Error, Result};
use leasedesk_engine::{FormMode, find_by_id};
use leasedesk_types::{Record, RecordId};
use serde::Serialize;
use std::marker::PhantomData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationKind {
    Created,
    Updated,
    Deleted,
}

impl MutationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationKind::Created => "created",
            MutationKind::Updated => "updated",
            MutationKind::Deleted => "deleted",
        }
    }
}

/// Outcome of a create/update/delete together with the collection as
/// re-fetched afterwards.
#[derive(Debug, Clone)]
pub struct Mutation<R> {
    pub kind: MutationKind,
    pub items: Vec<R>,
}

impl<R: Record> Mutation<R> {
    /// "Tenant created successfully"
    pub fn message(&self) -> String {
        format!("{} {} successfully", R::NOUN, self.kind.as_str())
    }
}

/// CRUD over one backend collection.
///
/// Mutations never patch a local copy: every successful write is followed by
/// a fresh `list`.
pub struct RecordOps<'a, R> {
    api: &'a ApiClient,
    _record: PhantomData<R>,
}

impl<'a, R: Record> RecordOps<'a, R> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self {
            api,
            _record: PhantomData,
        }
    }

    pub fn list(&self) -> Result<Vec<R>> {
        self.api.list::<R>()
    }

    /// The backend has no single-record endpoint, so this scans the list.
    pub fn get(&self, id: RecordId) -> Result<R> {
        let items = self.list()?;
        find_by_id(&items, id).cloned().ok_or(Error::NotFound {
            resource: R::NOUN,
            id,
        })
    }

    pub fn create(&self, draft: &R::Draft) -> Result<Mutation<R>> {
        let created = self.api.create::<R>(draft)?;
        self.refetch(MutationKind::Created, created.id())
    }

    pub fn update(&self, id: RecordId, draft: &R::Draft) -> Result<Mutation<R>> {
        self.api.update::<R>(id, draft)?;
        self.refetch(MutationKind::Updated, id)
    }

    pub fn save(&self, mode: FormMode, draft: &R::Draft) -> Result<Mutation<R>> {
        match mode {
            FormMode::Create => self.create(draft),
            FormMode::Edit(id) => self.update(id, draft),
        }
    }

    pub fn delete(&self, id: RecordId) -> Result<Mutation<R>> {
        self.api.remove::<R>(id)?;
        self.refetch(MutationKind::Deleted, id)
    }

    fn refetch(&self, kind: MutationKind, id: RecordId) -> Result<Mutation<R>> {
        tracing::debug!(
            "Re-fetching {} after {} #{} was {}",
            R::COLLECTION,
            R::NOUN,
            id,
            kind.as_str()
        );
        Ok(Mutation {
            kind,
            items: self.list()?,
        })
    }
}

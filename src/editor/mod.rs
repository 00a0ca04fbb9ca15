//! Editor state for a single record.
//!
//! An editor holds a detached copy of one record. Changes stay local until
//! `save`, which upserts the copy into its collection and reports where the
//! client should navigate next.

pub mod campaign;
pub mod categories;
pub mod form;
pub mod ordered;
pub mod page;
pub mod rich_menu;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::Entity;
use crate::store::Repository;

/// Result of a save: the stored record and the list route to return to.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveOutcome<T> {
    pub entity: T,
    pub redirect: &'static str,
}

/// Result of a local edit: the working copy and whether the action changed it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditOutcome<T> {
    pub entity: T,
    pub changed: bool,
}

/// A structured edit the client asks the server to apply to a working copy.
///
/// Nothing is persisted; the client saves the returned copy when it is done.
pub trait DraftAction<T>: DeserializeOwned + Send + 'static {
    /// Apply the edit. Returns `false` when the copy was left untouched.
    fn apply(self, draft: &mut T) -> Result<bool, AppError>;
}

#[derive(Debug, Clone)]
pub struct Editor<T: Entity> {
    draft: T,
    is_new: bool,
}

impl<T: Entity> Editor<T> {
    /// Start from a blank record.
    pub fn create() -> Self {
        Self {
            draft: T::blank(),
            is_new: true,
        }
    }

    /// Start from a client-supplied copy of a record.
    pub fn from_draft(draft: T) -> Self {
        Self {
            draft,
            is_new: false,
        }
    }

    /// Open `id` from the merged seed and persisted set. An unknown id falls
    /// back to a blank record.
    pub async fn open(repo: &Repository, id: Option<&str>) -> Result<Self, AppError> {
        let Some(id) = id else {
            return Ok(Self::create());
        };

        match repo.find::<T>(id).await? {
            Some(existing) => Ok(Self {
                draft: existing,
                is_new: false,
            }),
            None => {
                tracing::warn!(
                    kind = T::LABEL,
                    id,
                    "Record not found, opening a blank editor"
                );
                Ok(Self::create())
            }
        }
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    /// Apply a change to the local copy and hand back what the change returned.
    pub fn update<R>(&mut self, change: impl FnOnce(&mut T) -> R) -> R {
        change(&mut self.draft)
    }

    /// Run a client action against the local copy.
    pub fn apply<A: DraftAction<T>>(&mut self, action: A) -> Result<bool, AppError> {
        self.update(|draft| action.apply(draft))
    }

    pub fn into_draft(self) -> T {
        self.draft
    }

    /// Write the local copy into its collection.
    pub async fn save(self, repo: &Repository) -> Result<SaveOutcome<T>, AppError> {
        let entity = repo.upsert(self.draft).await?;
        Ok(SaveOutcome {
            entity,
            redirect: T::LIST_ROUTE,
        })
    }
}

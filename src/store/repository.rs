//! Content repository: whole-collection read-modify-write over a key/value store.
//!
//! Stored text that fails to parse is logged and treated as absent, so a
//! corrupted key heals itself on the next save.

use std::collections::HashSet;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::{merge_with_seed, upsert, KeyValueStore, SELECTED_ACCOUNT_KEY};
use crate::errors::AppError;
use crate::listing::{ListQuery, Page};
use crate::models::{now_rfc3339, Entity};

/// Repository for all content collections.
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn KeyValueStore>,
}

fn tombstone_key<T: Entity>() -> String {
    format!("{}_deleted", T::STORAGE_KEY)
}

impl Repository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read and parse a JSON document, discarding it when malformed.
    async fn read_json<V: DeserializeOwned>(&self, key: &str) -> Result<Option<V>, AppError> {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(key, error = %e, "Discarding malformed stored data");
                Ok(None)
            }
        }
    }

    async fn write_json<V: serde::Serialize + ?Sized>(
        &self,
        key: &str,
        value: &V,
    ) -> Result<(), AppError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, raw).await
    }

    // ==================== COLLECTION OPERATIONS ====================

    /// Persisted records only, without seed data.
    pub async fn load<T: Entity>(&self) -> Result<Vec<T>, AppError> {
        Ok(self
            .read_json::<Vec<T>>(T::STORAGE_KEY)
            .await?
            .unwrap_or_default())
    }

    /// Overwrite the whole persisted collection.
    pub async fn save<T: Entity>(&self, items: &[T]) -> Result<(), AppError> {
        self.write_json(T::STORAGE_KEY, items).await?;
        tracing::debug!(
            key = T::STORAGE_KEY,
            count = items.len(),
            "Saved collection"
        );
        Ok(())
    }

    async fn tombstones<T: Entity>(&self) -> Result<HashSet<String>, AppError> {
        Ok(self
            .read_json::<Vec<String>>(&tombstone_key::<T>())
            .await?
            .unwrap_or_default()
            .into_iter()
            .collect())
    }

    async fn save_tombstones<T: Entity>(&self, ids: &HashSet<String>) -> Result<(), AppError> {
        let key = tombstone_key::<T>();
        if ids.is_empty() {
            return self.store.remove(&key).await;
        }
        let mut ids: Vec<&String> = ids.iter().collect();
        ids.sort();
        self.write_json(&key, &ids).await
    }

    /// Seed records merged with persisted records, minus deleted seed records.
    pub async fn merged<T: Entity>(&self) -> Result<Vec<T>, AppError> {
        let persisted = self.load::<T>().await?;
        let hidden = self.tombstones::<T>().await?;
        Ok(merge_with_seed(T::seed(), persisted, &hidden))
    }

    /// Find a record in the merged set.
    pub async fn find<T: Entity>(&self, id: &str) -> Result<Option<T>, AppError> {
        Ok(self
            .merged::<T>()
            .await?
            .into_iter()
            .find(|e| e.id() == id))
    }

    /// Filtered, sorted, paginated view of the merged set.
    pub async fn list<T: Entity>(
        &self,
        query: &ListQuery,
        default_page_size: usize,
    ) -> Result<Page<T>, AppError> {
        let items = self.merged::<T>().await?;
        Ok(query.apply(items, default_page_size))
    }

    /// Stamp `entity`, upsert it into the persisted collection and write it back.
    pub async fn upsert<T: Entity>(&self, mut entity: T) -> Result<T, AppError> {
        entity.touch(&now_rfc3339());

        let mut items = self.load::<T>().await?;
        let inserted = upsert(&mut items, entity.clone());
        self.save(&items).await?;

        let mut hidden = self.tombstones::<T>().await?;
        if hidden.remove(entity.id()) {
            self.save_tombstones::<T>(&hidden).await?;
        }

        tracing::info!(kind = T::LABEL, id = entity.id(), inserted, "Saved record");
        Ok(entity)
    }

    /// Remove a record. Seed records are hidden with a tombstone.
    pub async fn delete<T: Entity>(&self, id: &str) -> Result<(), AppError> {
        let mut items = self.load::<T>().await?;
        let before = items.len();
        items.retain(|e| e.id() != id);
        let removed_persisted = items.len() != before;

        let is_seed = T::seed().iter().any(|e| e.id() == id);
        let mut hidden = self.tombstones::<T>().await?;

        if !removed_persisted && (!is_seed || hidden.contains(id)) {
            return Err(AppError::NotFound(format!("{} {} not found", T::LABEL, id)));
        }

        if removed_persisted {
            self.save(&items).await?;
        }
        if is_seed && hidden.insert(id.to_string()) {
            self.save_tombstones::<T>(&hidden).await?;
        }

        tracing::info!(kind = T::LABEL, id, "Deleted record");
        Ok(())
    }

    // ==================== SELECTED ACCOUNT ====================

    pub async fn selected_account_id(&self) -> Result<Option<String>, AppError> {
        self.read_json::<String>(SELECTED_ACCOUNT_KEY).await
    }

    pub async fn set_selected_account_id(&self, account_id: Option<&str>) -> Result<(), AppError> {
        match account_id {
            Some(id) => self.write_json(SELECTED_ACCOUNT_KEY, id).await,
            None => self.store.remove(SELECTED_ACCOUNT_KEY).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Banner, Campaign, Faq, Identified};
    use crate::store::MemoryStore;

    fn repo() -> (Arc<MemoryStore>, Repository) {
        let store = Arc::new(MemoryStore::new());
        (store.clone(), Repository::new(store))
    }

    #[tokio::test]
    async fn test_upsert_twice_keeps_one_record() {
        let (_, repo) = repo();
        let mut faq = Faq::blank();
        faq.question = "First".into();
        repo.upsert(faq.clone()).await.unwrap();

        faq.question = "Second".into();
        repo.upsert(faq.clone()).await.unwrap();

        let stored = repo.load::<Faq>().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].question, "Second");
        assert!(!stored[0].updated_at.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json_is_treated_as_absent() {
        let (store, repo) = repo();
        store.set("banners", "{not json".to_string()).await.unwrap();

        assert!(repo.load::<Banner>().await.unwrap().is_empty());
        assert_eq!(
            repo.merged::<Banner>().await.unwrap().len(),
            Banner::seed().len()
        );

        repo.upsert(Banner::blank()).await.unwrap();
        assert_eq!(repo.load::<Banner>().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_merged_view_overrides_seed() {
        let (_, repo) = repo();
        let seed = Campaign::seed();
        let mut edited = seed[0].clone();
        edited.title = "Edited seed".into();
        repo.upsert(edited).await.unwrap();
        let fresh = repo.upsert(Campaign::blank()).await.unwrap();

        let merged = repo.merged::<Campaign>().await.unwrap();
        assert_eq!(merged.len(), seed.len() + 1);
        assert_eq!(merged[0].title, "Edited seed");
        assert_eq!(
            merged.last().map(|c| c.id.as_str()),
            Some(fresh.id.as_str())
        );

        let mut ids: Vec<&str> = merged.iter().map(|c| c.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), merged.len());
    }

    #[tokio::test]
    async fn test_delete_persisted_record() {
        let (_, repo) = repo();
        let faq = repo.upsert(Faq::blank()).await.unwrap();
        repo.delete::<Faq>(&faq.id).await.unwrap();
        assert!(repo.find::<Faq>(&faq.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete::<Faq>(&faq.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_seed_record_and_restore() {
        let (_, repo) = repo();
        let seed = Faq::seed().remove(0);

        repo.delete::<Faq>(&seed.id).await.unwrap();
        assert!(repo.find::<Faq>(&seed.id).await.unwrap().is_none());
        assert!(repo.delete::<Faq>(&seed.id).await.is_err());

        repo.upsert(seed.clone()).await.unwrap();
        assert!(repo.find::<Faq>(&seed.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_selected_account_roundtrip() {
        let (store, repo) = repo();
        assert_eq!(repo.selected_account_id().await.unwrap(), None);

        repo.set_selected_account_id(Some("acc-001")).await.unwrap();
        assert_eq!(
            store.get(SELECTED_ACCOUNT_KEY).await.unwrap().as_deref(),
            Some("\"acc-001\"")
        );
        assert_eq!(
            repo.selected_account_id().await.unwrap().as_deref(),
            Some("acc-001")
        );

        repo.set_selected_account_id(None).await.unwrap();
        assert_eq!(repo.selected_account_id().await.unwrap(), None);
    }
}

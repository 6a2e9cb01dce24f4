use crate::client::{ApiError, TagApi};
use crate::models::Tag;
use crate::services::cache::{QueryCache, QueryKey};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Cached `GET /tags`, refetched whenever the `get-tags` query goes stale.
pub struct TagList<A> {
    api: Arc<A>,
    cache: QueryCache,
    key: QueryKey,
    tags: Mutex<Vec<Tag>>,
}

impl<A: TagApi> TagList<A> {
    pub fn new(api: Arc<A>, cache: QueryCache) -> Self {
        Self {
            api,
            cache,
            key: QueryKey::tags(),
            tags: Mutex::new(Vec::new()),
        }
    }

    pub async fn tags(&self) -> Result<Vec<Tag>, ApiError> {
        let mut tags = self.tags.lock().await;

        if self.cache.is_stale(&self.key) {
            let generation = self.cache.generation(&self.key);
            tracing::debug!("Refetching tag list (generation {})", generation);
            *tags = self.api.list_tags().await?;
            if !self.cache.mark_fresh(&self.key, generation) {
                tracing::debug!("Tag list invalidated during refetch");
            }
        }

        Ok(tags.clone())
    }
}

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    bookmarks::{
        repo::BookmarkStore,
        repo_types::{Bookmark, BookmarkChanges, NewBookmark},
    },
    error::StoreError,
};

/// Process-local bookmark store. Rows are kept in insertion order, which is
/// also creation order.
#[derive(Default)]
pub struct MemoryBookmarkStore {
    rows: RwLock<Vec<Bookmark>>,
}

impl MemoryBookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookmarkStore for MemoryBookmarkStore {
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Bookmark>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|b| b.user_id == owner_id).cloned().collect())
    }

    async fn create(&self, owner_id: Uuid, new_bookmark: NewBookmark) -> Result<Bookmark, StoreError> {
        let now = OffsetDateTime::now_utc();
        let bookmark = Bookmark {
            id: Uuid::new_v4(),
            user_id: owner_id,
            title: new_bookmark.title,
            description: new_bookmark.description,
            link: new_bookmark.link,
            created_at: now,
            updated_at: now,
        };
        self.rows.write().await.push(bookmark.clone());
        Ok(bookmark)
    }

    async fn find_owned(&self, owner_id: Uuid, id: Uuid) -> Result<Option<Bookmark>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .find(|b| b.id == id && b.user_id == owner_id)
            .cloned())
    }

    async fn update_owned(
        &self,
        owner_id: Uuid,
        id: Uuid,
        changes: BookmarkChanges,
    ) -> Result<Option<Bookmark>, StoreError> {
        let mut rows = self.rows.write().await;
        let Some(bookmark) = rows.iter_mut().find(|b| b.id == id && b.user_id == owner_id) else {
            return Ok(None);
        };
        if let Some(title) = changes.title {
            bookmark.title = title;
        }
        if let Some(description) = changes.description {
            bookmark.description = Some(description);
        }
        if let Some(link) = changes.link {
            bookmark.link = link;
        }
        bookmark.updated_at = OffsetDateTime::now_utc();
        Ok(Some(bookmark.clone()))
    }

    async fn delete_owned(&self, owner_id: Uuid, id: Uuid) -> Result<bool, StoreError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|b| !(b.id == id && b.user_id == owner_id));
        Ok(rows.len() < before)
    }
}

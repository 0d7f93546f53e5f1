use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    bookmarks::repo_types::{Bookmark, BookmarkChanges, NewBookmark},
    error::StoreError,
};

/// Persistence for bookmarks. Every lookup is keyed by owner as well as id,
/// so a row owned by someone else behaves exactly like a missing one.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// Oldest first.
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Bookmark>, StoreError>;

    async fn create(&self, owner_id: Uuid, new_bookmark: NewBookmark) -> Result<Bookmark, StoreError>;

    async fn find_owned(&self, owner_id: Uuid, id: Uuid) -> Result<Option<Bookmark>, StoreError>;

    async fn update_owned(
        &self,
        owner_id: Uuid,
        id: Uuid,
        changes: BookmarkChanges,
    ) -> Result<Option<Bookmark>, StoreError>;

    /// Returns whether a row was removed.
    async fn delete_owned(&self, owner_id: Uuid, id: Uuid) -> Result<bool, StoreError>;
}

const BOOKMARK_COLUMNS: &str = "id, user_id, title, description, link, created_at, updated_at";

#[derive(Clone)]
pub struct PgBookmarkStore {
    db: PgPool,
}

impl PgBookmarkStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookmarkStore for PgBookmarkStore {
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Bookmark>, StoreError> {
        let rows = sqlx::query_as::<_, Bookmark>(&format!(
            r#"
            SELECT {BOOKMARK_COLUMNS}
              FROM bookmarks
             WHERE user_id = $1
             ORDER BY created_at ASC, seq ASC
            "#
        ))
        .bind(owner_id)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn create(&self, owner_id: Uuid, new_bookmark: NewBookmark) -> Result<Bookmark, StoreError> {
        let row = sqlx::query_as::<_, Bookmark>(&format!(
            r#"
            INSERT INTO bookmarks (id, user_id, title, description, link)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {BOOKMARK_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(owner_id)
        .bind(&new_bookmark.title)
        .bind(&new_bookmark.description)
        .bind(&new_bookmark.link)
        .fetch_one(&self.db)
        .await?;
        Ok(row)
    }

    async fn find_owned(&self, owner_id: Uuid, id: Uuid) -> Result<Option<Bookmark>, StoreError> {
        let row = sqlx::query_as::<_, Bookmark>(&format!(
            "SELECT {BOOKMARK_COLUMNS} FROM bookmarks WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn update_owned(
        &self,
        owner_id: Uuid,
        id: Uuid,
        changes: BookmarkChanges,
    ) -> Result<Option<Bookmark>, StoreError> {
        let row = sqlx::query_as::<_, Bookmark>(&format!(
            r#"
            UPDATE bookmarks
               SET title       = COALESCE($3, title),
                   description = COALESCE($4, description),
                   link        = COALESCE($5, link),
                   updated_at  = now()
             WHERE id = $1 AND user_id = $2
            RETURNING {BOOKMARK_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(owner_id)
        .bind(changes.title)
        .bind(changes.description)
        .bind(changes.link)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }

    async fn delete_owned(&self, owner_id: Uuid, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

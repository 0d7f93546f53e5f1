use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    bookmarks::{
        dto::{CreateBookmarkDto, EditBookmarkDto},
        repo::BookmarkStore,
        repo_types::Bookmark,
    },
    error::{AppError, AppResult},
};

fn not_found() -> AppError {
    AppError::NotFound("Bookmark not found".into())
}

/// Bookmark CRUD, always scoped to the calling user.
#[derive(Clone)]
pub struct BookmarkService {
    bookmarks: Arc<dyn BookmarkStore>,
}

impl BookmarkService {
    pub fn new(bookmarks: Arc<dyn BookmarkStore>) -> Self {
        Self { bookmarks }
    }

    pub async fn list_bookmarks(&self, user_id: Uuid) -> AppResult<Vec<Bookmark>> {
        let rows = self.bookmarks.list_by_owner(user_id).await?;
        debug!(%user_id, count = rows.len(), "bookmarks listed");
        Ok(rows)
    }

    pub async fn create_bookmark(&self, user_id: Uuid, dto: CreateBookmarkDto) -> AppResult<Bookmark> {
        let new_bookmark = dto.validate()?;
        let bookmark = self.bookmarks.create(user_id, new_bookmark).await?;
        info!(%user_id, bookmark_id = %bookmark.id, "bookmark created");
        Ok(bookmark)
    }

    pub async fn get_bookmark_by_id(&self, user_id: Uuid, id: Uuid) -> AppResult<Bookmark> {
        self.bookmarks
            .find_owned(user_id, id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn edit_bookmark_by_id(
        &self,
        user_id: Uuid,
        id: Uuid,
        dto: EditBookmarkDto,
    ) -> AppResult<Bookmark> {
        let changes = dto.validate()?;
        let bookmark = self
            .bookmarks
            .update_owned(user_id, id, changes)
            .await?
            .ok_or_else(not_found)?;
        info!(%user_id, bookmark_id = %id, "bookmark updated");
        Ok(bookmark)
    }

    pub async fn delete_bookmark_by_id(&self, user_id: Uuid, id: Uuid) -> AppResult<()> {
        if !self.bookmarks.delete_owned(user_id, id).await? {
            return Err(not_found());
        }
        info!(%user_id, bookmark_id = %id, "bookmark deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmarks::memory::MemoryBookmarkStore;

    fn service() -> BookmarkService {
        BookmarkService::new(Arc::new(MemoryBookmarkStore::new()))
    }

    fn create_dto(title: &str) -> CreateBookmarkDto {
        CreateBookmarkDto {
            title: Some(title.into()),
            description: None,
            link: Some("https://www.youtube.com/watch?v=d6WC5n9G_sM".into()),
        }
    }

    #[tokio::test]
    async fn new_user_has_no_bookmarks() {
        let svc = service();
        assert!(svc.list_bookmarks(Uuid::new_v4()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let svc = service();
        let owner = Uuid::new_v4();
        let created = svc.create_bookmark(owner, create_dto("First")).await.unwrap();
        let fetched = svc.get_bookmark_by_id(owner, created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.user_id, owner);
    }

    #[tokio::test]
    async fn other_users_bookmark_is_not_found() {
        let svc = service();
        let owner = Uuid::new_v4();
        let intruder = Uuid::new_v4();
        let created = svc.create_bookmark(owner, create_dto("Private")).await.unwrap();

        let err = svc.get_bookmark_by_id(intruder, created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        let err = svc
            .edit_bookmark_by_id(intruder, created.id, EditBookmarkDto::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        let err = svc.delete_bookmark_by_id(intruder, created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn edit_applies_partial_patch() {
        let svc = service();
        let owner = Uuid::new_v4();
        let created = svc.create_bookmark(owner, create_dto("Old")).await.unwrap();
        let patch = EditBookmarkDto {
            description: Some("now with notes".into()),
            ..Default::default()
        };
        let edited = svc.edit_bookmark_by_id(owner, created.id, patch).await.unwrap();
        assert_eq!(edited.title, "Old");
        assert_eq!(edited.link, created.link);
        assert_eq!(edited.description.as_deref(), Some("now with notes"));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let svc = service();
        let owner = Uuid::new_v4();
        let created = svc.create_bookmark(owner, create_dto("Temp")).await.unwrap();
        svc.delete_bookmark_by_id(owner, created.id).await.unwrap();
        let err = svc.get_bookmark_by_id(owner, created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn invalid_create_is_rejected_before_store() {
        let svc = service();
        let owner = Uuid::new_v4();
        let err = svc
            .create_bookmark(owner, CreateBookmarkDto::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(svc.list_bookmarks(owner).await.unwrap().is_empty());
    }
}

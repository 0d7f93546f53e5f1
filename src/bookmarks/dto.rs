use serde::Deserialize;

use crate::{
    bookmarks::repo_types::{BookmarkChanges, NewBookmark},
    error::AppError,
    validation::{is_valid_link, required},
};

/// Request body for `POST /bookmarks`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateBookmarkDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

/// Request body for `PATCH /bookmarks/:id`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct EditBookmarkDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

fn checked_link(link: String) -> Result<String, AppError> {
    if is_valid_link(&link) {
        Ok(link)
    } else {
        Err(AppError::Validation("link must be a URL address".into()))
    }
}

impl CreateBookmarkDto {
    pub fn validate(self) -> Result<NewBookmark, AppError> {
        let title = required("title", self.title)?;
        let link = checked_link(required("link", self.link)?)?;
        Ok(NewBookmark {
            title,
            description: self.description,
            link,
        })
    }
}

impl EditBookmarkDto {
    pub fn validate(self) -> Result<BookmarkChanges, AppError> {
        let title = match self.title {
            Some(t) => Some(required("title", Some(t))?),
            None => None,
        };
        let link = match self.link {
            Some(l) => Some(checked_link(required("link", Some(l))?)?),
            None => None,
        };
        Ok(BookmarkChanges {
            title,
            description: self.description,
            link,
        })
    }
}

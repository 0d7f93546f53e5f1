use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    users::{
        dto::{EditUserDto, PublicUser},
        repo::UserStore,
    },
};

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub async fn get_me(&self, user_id: Uuid) -> AppResult<PublicUser> {
        match self.users.find_by_id(user_id).await? {
            Some(user) => Ok(user.into()),
            None => {
                warn!(%user_id, "authenticated user no longer exists");
                Err(AppError::NotFound("User not found".into()))
            }
        }
    }

    pub async fn edit_user(&self, user_id: Uuid, dto: EditUserDto) -> AppResult<PublicUser> {
        let changes = dto.validate()?;
        let user = self
            .users
            .update(user_id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))?;
        info!(%user_id, "user profile updated");
        Ok(user.into())
    }
}

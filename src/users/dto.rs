use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    error::AppError,
    users::repo_types::{User, UserChanges},
    validation::{is_valid_email, normalize_email},
};

/// Public part of the user returned to the client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// Request body for `PATCH /users`. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUserDto {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl EditUserDto {
    pub fn validate(self) -> Result<UserChanges, AppError> {
        let email = match self.email {
            Some(raw) => {
                let email = normalize_email(&raw);
                if !is_valid_email(&email) {
                    return Err(AppError::Validation("email must be an email".into()));
                }
                Some(email)
            }
            None => None,
        };
        Ok(UserChanges {
            email,
            first_name: self.first_name,
            last_name: self.last_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_user_never_carries_password() {
        let now = OffsetDateTime::now_utc();
        let user = User {
            id: Uuid::new_v4(),
            email: "test@example.com".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            first_name: Some("Vladimir".into()),
            last_name: None,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_string(&PublicUser::from(user.clone())).unwrap();
        assert!(json.contains("test@example.com"));
        assert!(json.contains("\"firstName\":\"Vladimir\""));
        assert!(!json.contains("argon2"));
        assert!(!json.to_lowercase().contains("password"));

        let raw = serde_json::to_string(&user).unwrap();
        assert!(!raw.contains("argon2"));
    }

    #[test]
    fn edit_dto_normalizes_and_validates_email() {
        let dto: EditUserDto =
            serde_json::from_str(r#"{"firstName":"Vladimir","email":" Vlad@CodeWithVlad.com "}"#)
                .unwrap();
        let changes = dto.validate().unwrap();
        assert_eq!(changes.email.as_deref(), Some("vlad@codewithvlad.com"));
        assert_eq!(changes.first_name.as_deref(), Some("Vladimir"));
        assert_eq!(changes.last_name, None);

        let bad: EditUserDto = serde_json::from_str(r#"{"email":"nope"}"#).unwrap();
        assert!(matches!(bad.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn edit_dto_ignores_unknown_fields_and_nulls() {
        let dto: EditUserDto =
            serde_json::from_str(r#"{"lastName":null,"password":"x","id":"y"}"#).unwrap();
        assert_eq!(dto.validate().unwrap(), UserChanges::default());
    }
}

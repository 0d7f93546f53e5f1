use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    auth::{
        dto::{AuthDto, TokenResponse},
        jwt::JwtKeys,
        password::{hash_password, verify_password},
    },
    error::{AppError, AppResult},
    users::{
        dto::PublicUser,
        repo::{UserStore, EMAIL_TAKEN},
        repo_types::NewUser,
    },
};

const BAD_CREDENTIALS: &str = "Invalid credentials";

/// Signup and signin over a [`UserStore`].
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    keys: JwtKeys,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, keys: JwtKeys) -> Self {
        Self { users, keys }
    }

    pub async fn signup(&self, dto: AuthDto) -> AppResult<PublicUser> {
        let creds = dto.validate()?;

        if self.users.find_by_email(&creds.email).await?.is_some() {
            warn!(email = %creds.email, "email already registered");
            return Err(AppError::Conflict(EMAIL_TAKEN.into()));
        }

        let password_hash = hash_password(&creds.password).await?;
        // The store's uniqueness check still decides a concurrent race.
        let user = self
            .users
            .create(NewUser {
                email: creds.email,
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, email = %user.email, "user registered");
        Ok(user.into())
    }

    pub async fn signin(&self, dto: AuthDto) -> AppResult<TokenResponse> {
        let creds = dto.validate()?;

        let Some(user) = self.users.find_by_email(&creds.email).await? else {
            warn!(email = %creds.email, "signin unknown email");
            return Err(AppError::Unauthorized(BAD_CREDENTIALS.into()));
        };

        if !verify_password(&creds.password, &user.password_hash).await? {
            warn!(user_id = %user.id, "signin invalid password");
            return Err(AppError::Unauthorized(BAD_CREDENTIALS.into()));
        }

        let access_token = self.keys.sign(user.id, &user.email)?;
        info!(user_id = %user.id, "user signed in");
        Ok(TokenResponse { access_token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, users::memory::MemoryUserStore};

    fn service() -> (AuthService, JwtKeys) {
        let keys = JwtKeys::from_config(&AppConfig::for_tests().jwt);
        let svc = AuthService::new(Arc::new(MemoryUserStore::new()), keys.clone());
        (svc, keys)
    }

    fn dto(email: &str, password: &str) -> AuthDto {
        AuthDto {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }

    #[tokio::test]
    async fn signup_then_signin_issues_verifiable_token() {
        let (svc, keys) = service();
        let user = svc.signup(dto("vlad@gmail.com", "123")).await.unwrap();
        assert_eq!(user.email, "vlad@gmail.com");

        let token = svc.signin(dto("vlad@gmail.com", "123")).await.unwrap();
        let claims = keys.verify(&token.access_token).unwrap();
        assert_eq!(claims.sub, user.id);
    }

    #[tokio::test]
    async fn duplicate_signup_is_conflict() {
        let (svc, _) = service();
        svc.signup(dto("vlad@gmail.com", "123")).await.unwrap();
        let err = svc.signup(dto("VLAD@gmail.com", "456")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn signin_with_wrong_password_or_unknown_email_is_unauthorized() {
        let (svc, _) = service();
        svc.signup(dto("vlad@gmail.com", "123")).await.unwrap();

        let wrong = svc.signin(dto("vlad@gmail.com", "nope")).await.unwrap_err();
        assert!(matches!(wrong, AppError::Unauthorized(ref m) if m == BAD_CREDENTIALS));

        let unknown = svc.signin(dto("ghost@gmail.com", "123")).await.unwrap_err();
        assert!(matches!(unknown, AppError::Unauthorized(ref m) if m == BAD_CREDENTIALS));
    }

    #[tokio::test]
    async fn invalid_input_is_validation_error() {
        let (svc, _) = service();
        let err = svc.signup(AuthDto::default()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        let err = svc.signin(dto("vlad", "123")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}

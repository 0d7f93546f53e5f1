use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    validation::{is_valid_email, normalize_email, required},
};

/// Request body for `/signup` and `/signin`.
#[derive(Debug, Default, Deserialize)]
pub struct AuthDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Validated credentials: email normalized, both fields present.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl AuthDto {
    pub fn validate(self) -> Result<Credentials, AppError> {
        let email = normalize_email(&required("email", self.email)?);
        if !is_valid_email(&email) {
            return Err(AppError::Validation("email must be an email".into()));
        }
        // Passwords are taken verbatim; only emptiness is rejected.
        let password = match self.password {
            Some(p) if !p.is_empty() => p,
            _ => return Err(AppError::Validation("password should not be empty".into())),
        };
        Ok(Credentials { email, password })
    }
}

/// Response returned after signin.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> AuthDto {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn missing_fields_are_rejected() {
        assert!(matches!(parse(r#"{"password":"123"}"#).validate(), Err(AppError::Validation(_))));
        assert!(matches!(
            parse(r#"{"email":"vlad@gmail.com"}"#).validate(),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(parse("{}").validate(), Err(AppError::Validation(_))));
        assert!(matches!(
            parse(r#"{"email":"vlad@gmail.com","password":""}"#).validate(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let err = parse(r#"{"email":"vlad","password":"123"}"#).validate().unwrap_err();
        assert_eq!(err.to_string(), "email must be an email");
    }

    #[test]
    fn short_password_is_accepted() {
        let creds = parse(r#"{"email":" Vlad@Gmail.com","password":"123"}"#)
            .validate()
            .unwrap();
        assert_eq!(creds.email, "vlad@gmail.com");
        assert_eq!(creds.password, "123");
    }

    #[test]
    fn token_response_uses_snake_case_field() {
        let json = serde_json::to_string(&TokenResponse {
            access_token: "t".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"access_token":"t"}"#);
    }
}

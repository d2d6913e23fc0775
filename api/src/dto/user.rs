use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use ph_core::domain::entities::User;
use ph_core::services::EditUser;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name, more than 3 characters
    #[validate(length(min = 4, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Profile changes; missing or empty fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl EditUserRequest {
    pub fn into_changes(self) -> EditUser {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        EditUser {
            name: present(self.name),
            email: present(self.email),
            password: present(self.password),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Body returned by `validate-token`, consumed by delegating services
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateTokenResponse {
    #[serde(rename = "isValid")]
    pub is_valid: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let request = RegisterRequest {
            name: "Ana".to_string(),
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(!fields.contains_key("password"));
    }

    #[test]
    fn test_edit_request_drops_empty_fields() {
        let request = EditUserRequest {
            name: Some("Grace Hopper".to_string()),
            email: Some("  ".to_string()),
            password: None,
        };
        let changes = request.into_changes();
        assert_eq!(changes.name.as_deref(), Some("Grace Hopper"));
        assert!(changes.email.is_none());
        assert!(changes.password.is_none());
    }

    #[test]
    fn test_validate_token_response_shape() {
        let body = serde_json::to_value(ValidateTokenResponse {
            is_valid: false,
            sub: None,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "isValid": false }));
    }
}

//! Wire types shared with the backend.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Profile returned by `GET /api/profile`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub role: String,
}

impl User {
    pub fn role(&self) -> Role {
        match self.role.as_str() {
            "Admin" => Role::Admin,
            _ => Role::User,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::User => write!(f, "User"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_ignores_password_hash() {
        let json = r#"{
            "id": 7,
            "firstname": "Ada",
            "lastname": "Lovelace",
            "email": "ada@example.com",
            "password": "$2b$12$abcdefghijklmnopqrstuv",
            "role": "Admin"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, 7);
        assert_eq!(user.role(), Role::Admin);
    }

    #[test]
    fn unknown_role_is_plain_user() {
        let user = User {
            id: 1,
            firstname: "Grace".to_string(),
            lastname: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            role: "Auditor".to_string(),
        };
        assert_eq!(user.role(), Role::User);
        assert_eq!(user.role().to_string(), "User");
    }

    #[test]
    fn register_request_uses_backend_field_names() {
        let request = RegisterRequest {
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["firstname"], "Ada");
        assert_eq!(value["lastname"], "Lovelace");
        assert_eq!(value["email"], "ada@example.com");
        assert_eq!(value["password"], "secret1");
    }
}

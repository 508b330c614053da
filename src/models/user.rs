//! User model for storage and API.

use crate::constants::UserRole;
use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};

/// User profile as returned by `/auth/me` and persisted under `user_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// User ID (UUID string)
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub role: UserRole,
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Creation timestamp (ISO 8601, as sent by the server)
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_active() -> bool {
    true
}

impl UserRecord {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Paginated user listing (admin only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserList {
    pub total: u64,
    pub users: Vec<UserRecord>,
}

/// Registration payload for `/auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub password: String,
}

/// Profile update payload for `PUT /users/me`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl RegisterRequest {
    /// Check the payload against the server's registration rules.
    pub fn validate(&self) -> Result<()> {
        let username_len = self.username.chars().count();
        if !(3..=100).contains(&username_len) {
            return Err(ClientError::Validation(
                "Username must be 3-100 characters".to_string(),
            ));
        }
        validate_email(&self.email)?;
        validate_full_name(self.full_name.as_deref())?;
        validate_password(&self.password)
    }
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.full_name.is_none() && self.password.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        validate_full_name(self.full_name.as_deref())?;
        if let Some(password) = &self.password {
            validate_password(password)?;
        }
        Ok(())
    }
}

fn validate_email(email: &str) -> Result<()> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(ClientError::Validation(format!(
            "Invalid email address: {}",
            email
        ))),
    }
}

fn validate_full_name(full_name: Option<&str>) -> Result<()> {
    match full_name {
        Some(name) if name.chars().count() > 255 => Err(ClientError::Validation(
            "Full name must be at most 255 characters".to_string(),
        )),
        _ => Ok(()),
    }
}

/// Password strength: 8-100 characters with a digit, an uppercase and a
/// lowercase letter.
pub fn validate_password(password: &str) -> Result<()> {
    let len = password.chars().count();
    if !(8..=100).contains(&len) {
        return Err(ClientError::Validation(
            "Password must be 8-100 characters".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ClientError::Validation(
            "Password must contain at least one digit".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err(ClientError::Validation(
            "Password must contain at least one uppercase letter".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err(ClientError::Validation(
            "Password must contain at least one lowercase letter".to_string(),
        ));
    }
    Ok(())
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - typed wrappers over the portal API.

pub mod auth;
pub mod calculations;
pub mod configurations;
pub mod files;
pub mod users;

pub use auth::AuthService;
pub use calculations::{CalculationQuery, CalculationsService};
pub use configurations::ConfigurationsService;
pub use files::{FileQuery, FilesService, UploadFile, UploadOutcome};
pub use users::UsersService;

use crate::error::{ClientError, Result};

/// Validate an ID for use as a single URL path segment.
pub(crate) fn path_segment(id: &str) -> Result<&str> {
    if id.is_empty() || id.contains(&['/', '?', '#', '%'][..]) || id.chars().any(char::is_whitespace) {
        return Err(ClientError::Validation(format!("Invalid ID: {:?}", id)));
    }
    Ok(id)
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User administration service. Everything except `update_profile` needs
//! the admin role server-side.

use crate::error::{ClientError, Result};
use crate::gateway::{ApiRequest, Gateway};
use crate::models::{UserList, UserRecord, UserUpdate};
use super::path_segment;

#[derive(Clone)]
pub struct UsersService {
    gateway: Gateway,
}

impl UsersService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn get_users(&self, skip: Option<u32>, limit: Option<u32>) -> Result<UserList> {
        let mut request = ApiRequest::get("/users/");
        if let Some(skip) = skip {
            request = request.query("skip", skip);
        }
        if let Some(limit) = limit {
            request = request.query("limit", limit);
        }
        self.gateway.send_json(&request).await
    }

    pub async fn get_user(&self, user_id: &str) -> Result<UserRecord> {
        let path = format!("/users/{}", path_segment(user_id)?);
        self.gateway.send_json(&ApiRequest::get(path)).await
    }

    /// Update the current user's profile and the stored user record.
    pub async fn update_profile(&self, update: &UserUpdate) -> Result<UserRecord> {
        if update.is_empty() {
            return Err(ClientError::Validation("Nothing to update".to_string()));
        }
        update.validate()?;

        let user: UserRecord = self
            .gateway
            .send_json(&ApiRequest::put("/users/me").json(update)?)
            .await?;
        self.gateway.session().set_user(&user)?;
        Ok(user)
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<()> {
        let path = format!("/users/{}", path_segment(user_id)?);
        self.gateway.send(&ApiRequest::delete(path)).await?;
        tracing::info!(user_id, "User deleted");
        Ok(())
    }

    /// Flip the user's active flag; returns the updated record.
    pub async fn toggle_user_active(&self, user_id: &str) -> Result<UserRecord> {
        let path = format!("/users/{}/toggle-active", path_segment(user_id)?);
        self.gateway.send_json(&ApiRequest::patch(path)).await
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication service.
//!
//! Handles:
//! - Login (stores the issued session)
//! - Logout (clears it)
//! - Registration with client-side validation
//! - Profile fetch (refreshes the stored user record)
//! - Explicit access token refresh

use crate::error::{ClientError, Result};
use crate::gateway::{ApiRequest, Gateway};
use crate::models::{LoginResponse, RefreshRequest, RefreshResponse, RegisterRequest, UserRecord};
use crate::session::Session;
use reqwest::StatusCode;

/// Authentication API service.
#[derive(Clone)]
pub struct AuthService {
    gateway: Gateway,
}

impl AuthService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    fn session(&self) -> &Session {
        self.gateway.session()
    }

    /// Register a new user account.
    pub async fn register(&self, request: &RegisterRequest) -> Result<UserRecord> {
        request.validate()?;

        let user: UserRecord = self
            .gateway
            .send_json(&ApiRequest::post("/auth/register").json(request)?)
            .await?;

        tracing::info!(username = %user.username, "User registered");
        Ok(user)
    }

    /// Log in with username (or email) and password and store the session.
    ///
    /// Wrong credentials surface as `ClientError::Http` with status 401 and
    /// drop whatever session was stored before. The 401 is not treated as an
    /// expired access token, so no refresh is attempted and no
    /// [`AuthEvent`](crate::gateway::AuthEvent) is emitted.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(ClientError::Validation(
                "Username and password are required".to_string(),
            ));
        }

        let request = ApiRequest::post("/auth/login")
            .form(&[("username", username), ("password", password)])
            .without_auth_recovery();
        let login: LoginResponse = match self.gateway.send_json(&request).await {
            Ok(login) => login,
            Err(e) => {
                if e.status() == Some(StatusCode::UNAUTHORIZED) {
                    tracing::info!(username, "Login rejected, clearing stored session");
                    if let Err(clear_err) = self.session().clear() {
                        tracing::warn!(error = %clear_err, "Failed to clear stale session");
                    }
                }
                return Err(e);
            }
        };

        self.session()
            .save_login(&login.access_token, &login.refresh_token, login.user.as_ref())?;

        tracing::info!(username, "Logged in, session stored");
        Ok(login)
    }

    /// Forget the local session. The server keeps no session state.
    pub fn logout(&self) -> Result<()> {
        self.session().clear()?;
        tracing::info!("Logged out");
        Ok(())
    }

    /// Fetch the current user and store it as the session's user record.
    pub async fn get_profile(&self) -> Result<UserRecord> {
        let user: UserRecord = self.gateway.send_json(&ApiRequest::get("/auth/me")).await?;
        self.session().set_user(&user)?;
        Ok(user)
    }

    /// Exchange `refresh_token` for a new access token and store it.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<String> {
        let request = ApiRequest::post("/auth/refresh").json(&RefreshRequest { refresh_token })?;
        let refreshed: RefreshResponse = self.gateway.send_json(&request).await?;
        self.session().set_access_token(&refreshed.access_token)?;
        Ok(refreshed.access_token)
    }

    /// Stored user record, if any.
    pub fn get_user(&self) -> Option<UserRecord> {
        self.session().user().ok().flatten()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.get_user().is_some_and(|u| u.is_admin())
    }
}

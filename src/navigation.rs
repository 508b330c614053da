// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login redirect on session invalidation.
//!
//! The gateway only emits [`AuthEvent`]s. Whoever owns the UI shell decides
//! what "go to login" means by implementing [`Navigator`].

use crate::gateway::AuthEvent;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// The surface that owns the current location.
pub trait Navigator: Send + Sync {
    fn current_path(&self) -> String;

    fn redirect(&self, path: &str);
}

/// Redirects to the login surface when the session is invalidated,
/// unless the current location is already the login surface.
pub struct LoginRedirector<N> {
    navigator: N,
    login_path: String,
}

impl<N: Navigator> LoginRedirector<N> {
    pub fn new(navigator: N, login_path: impl Into<String>) -> Self {
        Self {
            navigator,
            login_path: login_path.into(),
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// React to one event. Returns whether a redirect was issued.
    pub fn handle(&self, event: &AuthEvent) -> bool {
        match event {
            AuthEvent::SessionInvalidated { reason } => {
                let current = self.navigator.current_path();
                if current.contains(&self.login_path) {
                    tracing::debug!(path = %current, "Already on login, not redirecting");
                    return false;
                }
                tracing::info!(reason = %reason, from = %current, "Session invalidated, redirecting to login");
                self.navigator.redirect(&self.login_path);
                true
            }
        }
    }

    /// Handle events until the gateway (every sender) is dropped.
    pub async fn run(self, mut events: broadcast::Receiver<AuthEvent>) {
        loop {
            match events.recv().await {
                Ok(event) => {
                    self.handle(&event);
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Missed auth events");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }
}

impl<N: Navigator + 'static> LoginRedirector<N> {
    pub fn spawn(self, events: broadcast::Receiver<AuthEvent>) -> JoinHandle<()> {
        tokio::spawn(self.run(events))
    }
}

/// Navigator for non-interactive hosts: there is nowhere to go, so a
/// redirect is only logged.
#[derive(Debug, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn current_path(&self) -> String {
        String::new()
    }

    fn redirect(&self, path: &str) {
        tracing::warn!(path, "Session expired, log in again");
    }
}

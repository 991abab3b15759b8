//! Top-level view navigation.
//!
//! The client has exactly two views: the dashboard and the
//! conversation. Navigation into the conversation is gated on the
//! sign-in flag; everything else is unconditional. The controller also
//! owns the sign-in prompt flag, which is side UI state rather than a
//! navigation mode of its own.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::identity::IdentityRepository;

/// The currently displayed top-level view.
///
/// Not persisted; every client session starts on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationMode {
    /// Stats, cancelled purchases, and the create-friction entry point.
    Dashboard,
    /// One conversation with the assistant.
    Conversation,
}

impl Default for NavigationMode {
    fn default() -> Self {
        NavigationMode::Dashboard
    }
}

/// State machine for switching between the two views.
///
/// Transitions are instantaneous and deterministic; the only condition
/// anywhere is the sign-in gate on entering the conversation. The
/// machine has no terminal state and runs for the lifetime of the
/// client session.
pub struct NavigationController {
    /// Currently displayed view.
    mode: NavigationMode,
    /// Whether the sign-in prompt is currently raised.
    sign_in_prompt: bool,
    /// Shared sign-in flag, consulted on every gated transition.
    identity_repository: Arc<dyn IdentityRepository>,
}

impl NavigationController {
    /// Creates a controller starting on the dashboard.
    pub fn new(identity_repository: Arc<dyn IdentityRepository>) -> Self {
        Self {
            mode: NavigationMode::default(),
            sign_in_prompt: false,
            identity_repository,
        }
    }

    /// Returns the currently displayed view.
    pub fn mode(&self) -> NavigationMode {
        self.mode
    }

    /// Returns whether the sign-in prompt is raised.
    pub fn sign_in_prompt(&self) -> bool {
        self.sign_in_prompt
    }

    /// Requests navigation into the conversation view.
    ///
    /// Signed in: transitions to `Conversation`. Signed out: the
    /// transition is suppressed, the mode stays `Dashboard`, and the
    /// sign-in prompt is raised instead.
    ///
    /// # Returns
    ///
    /// The mode after the request.
    pub async fn request_create_friction(&mut self) -> NavigationMode {
        if self.identity_repository.is_signed_in().await {
            self.mode = NavigationMode::Conversation;
            self.sign_in_prompt = false;
        } else {
            tracing::debug!("create-friction request while signed out, raising sign-in prompt");
            self.sign_in_prompt = true;
        }
        self.mode
    }

    /// Closes the conversation view. Unconditional.
    pub fn close(&mut self) {
        self.mode = NavigationMode::Dashboard;
    }

    /// Signs the user in and clears the sign-in prompt.
    ///
    /// Signing in does NOT navigate: a second explicit
    /// `request_create_friction` is required to enter the conversation.
    pub async fn sign_in(&mut self) -> Result<()> {
        self.identity_repository.set_signed_in(true).await?;
        self.sign_in_prompt = false;
        Ok(())
    }

    /// Signs the user out.
    pub async fn sign_out(&mut self) -> Result<()> {
        self.identity_repository.set_signed_in(false).await
    }

    /// Dismisses the sign-in prompt without signing in.
    pub fn dismiss_sign_in_prompt(&mut self) {
        self.sign_in_prompt = false;
    }
}

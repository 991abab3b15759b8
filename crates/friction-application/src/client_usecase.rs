//! Client use case implementation.
//!
//! This module provides the `ClientUseCase` which wires the navigation
//! controller, the shared identity repository, and the conversation
//! engine lifecycle together into the one surface a front end talks to.

use std::sync::Arc;

use tokio::sync::RwLock;

use friction_core::catalog;
use friction_core::config::ClientConfig;
use friction_core::conversation::{ConversationEngine, Message, RecordingState};
use friction_core::error::{FrictionError, Result};
use friction_core::identity::IdentityRepository;
use friction_core::intensity::IntensityLevel;
use friction_core::navigation::{NavigationController, NavigationMode};

/// Use case for driving one client session.
///
/// # Responsibilities
///
/// - Gating navigation into the conversation view on the sign-in flag
/// - Creating a fresh conversation engine each time the view is entered
/// - Tearing the engine down (cancelling scheduled replies) on close
/// - Delegating message, intensity, and recording operations to the
///   active engine
///
/// # Thread Safety
///
/// Internal state is wrapped in `RwLock` for shared access from an
/// event-driven front end; the identity repository is shared via `Arc`.
pub struct ClientUseCase {
    /// Shared sign-in flag, also consulted by the navigation controller
    identity_repository: Arc<dyn IdentityRepository>,
    /// Top-level view state machine
    navigation: RwLock<NavigationController>,
    /// Engine of the active conversation, if the view is open
    conversation: RwLock<Option<Arc<ConversationEngine>>>,
    /// Client configuration (default intensity, reply delay)
    config: ClientConfig,
}

impl ClientUseCase {
    /// Creates a new `ClientUseCase` starting on the dashboard.
    ///
    /// # Arguments
    ///
    /// * `identity_repository` - Shared repository for the sign-in flag
    /// * `config` - Client configuration
    pub fn new(identity_repository: Arc<dyn IdentityRepository>, config: ClientConfig) -> Self {
        Self {
            navigation: RwLock::new(NavigationController::new(identity_repository.clone())),
            identity_repository,
            conversation: RwLock::new(None),
            config,
        }
    }

    /// Returns the currently displayed view.
    pub async fn mode(&self) -> NavigationMode {
        self.navigation.read().await.mode()
    }

    /// Returns whether the sign-in prompt is raised.
    pub async fn sign_in_prompt(&self) -> bool {
        self.navigation.read().await.sign_in_prompt()
    }

    /// Returns whether the user is signed in.
    pub async fn is_signed_in(&self) -> bool {
        self.identity_repository.is_signed_in().await
    }

    /// Requests navigation into the conversation view.
    ///
    /// When the gate passes, a fresh conversation engine is created,
    /// seeded with the featured product and the configured default
    /// intensity. When it does not, the sign-in prompt is raised and
    /// the mode stays `Dashboard`.
    ///
    /// # Returns
    ///
    /// The mode after the request.
    pub async fn request_create_friction(&self) -> NavigationMode {
        let mode = {
            let mut navigation = self.navigation.write().await;
            navigation.request_create_friction().await
        };

        if mode == NavigationMode::Conversation {
            let mut conversation = self.conversation.write().await;
            if conversation.is_none() {
                let engine = Arc::new(ConversationEngine::new(
                    &catalog::featured_product(),
                    self.config.default_intensity,
                    self.config.reply_delay(),
                ));
                tracing::info!(session_id = %engine.id(), "conversation opened");
                *conversation = Some(engine);
            }
        }

        mode
    }

    /// Closes the conversation view and tears down its engine.
    ///
    /// Scheduled replies that have not fired yet are cancelled; the
    /// message log is dropped with the engine. Always returns the mode
    /// to `Dashboard`.
    pub async fn close_conversation(&self) {
        self.navigation.write().await.close();

        let engine = self.conversation.write().await.take();
        if let Some(engine) = engine {
            engine.shutdown().await;
            tracing::info!(session_id = %engine.id(), "conversation closed");
        }
    }

    /// Signs the user in and clears the sign-in prompt. Never navigates.
    pub async fn sign_in(&self) -> Result<()> {
        self.navigation.write().await.sign_in().await
    }

    /// Signs the user out.
    pub async fn sign_out(&self) -> Result<()> {
        self.navigation.write().await.sign_out().await
    }

    /// Dismisses the sign-in prompt without signing in.
    pub async fn dismiss_sign_in_prompt(&self) {
        self.navigation.write().await.dismiss_sign_in_prompt();
    }

    /// Submits a user message to the active conversation.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(message))`: The appended user message
    /// - `Ok(None)`: The input was rejected (trimmed-empty)
    /// - `Err(_)`: No conversation is active
    pub async fn send_message(&self, text: &str) -> Result<Option<Message>> {
        let engine = self.active_engine().await?;
        Ok(engine.send_user_message(text).await)
    }

    /// Returns a snapshot of the active conversation's messages.
    pub async fn messages(&self) -> Result<Vec<Message>> {
        let engine = self.active_engine().await?;
        Ok(engine.messages().await)
    }

    /// Selects the intensity level for the active conversation.
    pub async fn select_intensity(&self, level: IntensityLevel) -> Result<()> {
        let engine = self.active_engine().await?;
        engine.select_intensity(level).await;
        Ok(())
    }

    /// Returns the active conversation's intensity level.
    pub async fn intensity(&self) -> Result<IntensityLevel> {
        let engine = self.active_engine().await?;
        Ok(engine.intensity().await)
    }

    /// Flips the active conversation's voice-record toggle.
    pub async fn toggle_recording(&self) -> Result<RecordingState> {
        let engine = self.active_engine().await?;
        Ok(engine.toggle_recording().await)
    }

    async fn active_engine(&self) -> Result<Arc<ConversationEngine>> {
        self.conversation
            .read()
            .await
            .clone()
            .ok_or_else(|| FrictionError::internal("No active conversation"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use friction_core::conversation::MessageRole;
    use std::sync::Mutex;
    use std::time::Duration;

    // Mock IdentityRepository for testing
    struct MockIdentityRepository {
        signed_in: Mutex<bool>,
    }

    impl MockIdentityRepository {
        fn new(signed_in: bool) -> Arc<Self> {
            Arc::new(Self {
                signed_in: Mutex::new(signed_in),
            })
        }
    }

    #[async_trait::async_trait]
    impl IdentityRepository for MockIdentityRepository {
        async fn is_signed_in(&self) -> bool {
            *self.signed_in.lock().unwrap()
        }

        async fn set_signed_in(&self, signed_in: bool) -> Result<()> {
            *self.signed_in.lock().unwrap() = signed_in;
            Ok(())
        }
    }

    fn test_config() -> ClientConfig {
        ClientConfig {
            reply_delay_ms: 50,
            ..ClientConfig::default()
        }
    }

    fn usecase(signed_in: bool) -> ClientUseCase {
        ClientUseCase::new(MockIdentityRepository::new(signed_in), test_config())
    }

    #[tokio::test]
    async fn test_gate_blocks_signed_out_user() {
        let usecase = usecase(false);

        let mode = usecase.request_create_friction().await;

        assert_eq!(mode, NavigationMode::Dashboard);
        assert!(usecase.sign_in_prompt().await);
        assert!(usecase.messages().await.is_err());
    }

    #[tokio::test]
    async fn test_signed_in_user_gets_seeded_conversation() {
        let usecase = usecase(true);

        let mode = usecase.request_create_friction().await;

        assert_eq!(mode, NavigationMode::Conversation);
        let messages = usecase.messages().await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, MessageRole::Assistant);
    }

    #[tokio::test]
    async fn test_sign_in_then_second_request_navigates() {
        let usecase = usecase(false);

        usecase.request_create_friction().await;
        usecase.sign_in().await.unwrap();
        assert_eq!(usecase.mode().await, NavigationMode::Dashboard);

        let mode = usecase.request_create_friction().await;
        assert_eq!(mode, NavigationMode::Conversation);
    }

    #[tokio::test]
    async fn test_send_and_delayed_echo() {
        let usecase = usecase(true);
        usecase.request_create_friction().await;

        let sent = usecase.send_message("Buy it anyway").await.unwrap().unwrap();
        assert_eq!(sent.text, "Buy it anyway");

        let messages = usecase.messages().await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].role, MessageRole::User);

        tokio::time::sleep(Duration::from_millis(150)).await;

        let messages = usecase.messages().await.unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].role, MessageRole::Assistant);
        assert_eq!(
            messages[2].text,
            "I received your message: \"Buy it anyway\". This is a placeholder response."
        );
    }

    #[tokio::test]
    async fn test_close_tears_down_conversation() {
        let usecase = usecase(true);
        usecase.request_create_friction().await;
        usecase.send_message("hello").await.unwrap();

        usecase.close_conversation().await;

        assert_eq!(usecase.mode().await, NavigationMode::Dashboard);
        assert!(usecase.send_message("anyone there?").await.is_err());
    }

    #[tokio::test]
    async fn test_reopening_starts_a_fresh_log() {
        let usecase = usecase(true);

        usecase.request_create_friction().await;
        usecase.send_message("first session").await.unwrap();
        usecase.close_conversation().await;

        usecase.request_create_friction().await;
        let messages = usecase.messages().await.unwrap();
        assert_eq!(messages.len(), 1, "new session starts from the seed message");
    }

    #[tokio::test]
    async fn test_intensity_defaults_from_config() {
        let usecase = ClientUseCase::new(
            MockIdentityRepository::new(true),
            ClientConfig {
                default_intensity: IntensityLevel::DevilsAdvocate,
                reply_delay_ms: 50,
            },
        );

        usecase.request_create_friction().await;
        assert_eq!(
            usecase.intensity().await.unwrap(),
            IntensityLevel::DevilsAdvocate
        );

        usecase
            .select_intensity(IntensityLevel::GentleNudge)
            .await
            .unwrap();
        assert_eq!(usecase.intensity().await.unwrap(), IntensityLevel::GentleNudge);
    }

    #[tokio::test]
    async fn test_recording_toggle_delegates() {
        let usecase = usecase(true);
        usecase.request_create_friction().await;

        assert_eq!(
            usecase.toggle_recording().await.unwrap(),
            RecordingState::Recording
        );
        assert_eq!(
            usecase.toggle_recording().await.unwrap(),
            RecordingState::Idle
        );
    }
}

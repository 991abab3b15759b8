//! Identity repository trait.

use async_trait::async_trait;

use crate::error::Result;

/// Repository for the durable sign-in flag.
///
/// This trait is the single source of truth for whether the user is
/// signed in. Consumers share one instance behind `Arc<dyn
/// IdentityRepository>`; the flag is process-wide state, not
/// per-component state.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Initialize from persisted storage once, at construction
/// - Persist every change immediately
/// - Degrade to the in-memory value on storage failure rather than
///   surface an error to callers
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// Returns whether the user is currently signed in.
    async fn is_signed_in(&self) -> bool;

    /// Updates the sign-in flag and persists it.
    ///
    /// # Arguments
    ///
    /// * `signed_in` - The new value of the flag
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Flag updated (persisted, or degraded to memory-only)
    /// - `Err(_)`: Reserved for implementations that cannot update at all
    async fn set_signed_in(&self, signed_in: bool) -> Result<()>;
}

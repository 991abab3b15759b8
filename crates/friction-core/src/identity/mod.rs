//! Identity domain module.
//!
//! The "authentication" model of this client is a single durable
//! sign-in flag: no tokens, no expiry, no provider. The repository
//! trait below is the one source of truth every consumer shares.
//!
//! # Module Structure
//!
//! - `repository`: Repository trait for the sign-in flag

mod repository;

// Re-export public API
pub use repository::IdentityRepository;

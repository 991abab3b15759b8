pub mod client_usecase;

// Re-export public API
pub use client_usecase::ClientUseCase;

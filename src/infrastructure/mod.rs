//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer and wraps
//! external collaborators.
//!
//! # Modules
//!
//! - [`persistence`] - SQLite repository implementations and pool setup
//! - [`qr`] - QR code rendering for short URLs

pub mod persistence;
pub mod qr;

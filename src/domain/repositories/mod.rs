//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the two persistent relations of the service. They are
//! implemented by concrete repositories in `crate::infrastructure::persistence`
//! and mocked via `mockall` in unit tests.
//!
//! # Available Repositories
//!
//! - [`LinkRepository`] - The `links` relation: creation, lookup, counters, deactivation
//! - [`ClickRepository`] - The `clicks` relation: append and aggregate queries
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod click_repository;
pub mod link_repository;

pub use click_repository::ClickRepository;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use link_repository::MockLinkRepository;

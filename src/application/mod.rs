//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls, validation and business rules.
//! They consume repository traits and provide a clean API for HTTP handlers
//! and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Short link creation and reuse
//! - [`services::redirect_service::RedirectService`] - Code resolution with click recording
//! - [`services::link_service::LinkService`] - Listing and deactivation
//! - [`services::analytics_service::AnalyticsService`] - Click analytics

pub mod services;

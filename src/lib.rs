//! # Shortlink
//!
//! URL shortener with click analytics and QR codes, served by Axum over SQLite.
//!
//! Requests enter through [`api`], whose handlers call the services in
//! [`application`]. Services depend only on the repository traits in
//! [`domain`]; [`infrastructure`] provides the SQLite implementations and the
//! QR renderer. [`server::run`] wires everything from a [`config::Config`].
//!
//! ```bash
//! BASE_URL="https://sho.rt" cargo run            # server on 0.0.0.0:5001
//! cargo run --bin admin -- links                 # list active links
//! ```
//!
//! Migrations in `migrations/` are applied on startup by both binaries.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod routes;
pub mod server;
pub mod state;
pub mod utils;

pub use error::AppError;
pub use state::AppState;

/// Re-exports for binaries and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AnalyticsService, LinkService, RedirectService, ShortenCommand, ShortenService,
    };
    pub use crate::domain::entities::{Click, DailyClicks, Link, NewClick, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}

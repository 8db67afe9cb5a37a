//! Links, clicks, and the storage contracts the services depend on.
//!
//! [`entities`] holds plain data; [`repositories`] defines the `LinkRepository`
//! and `ClickRepository` traits implemented in
//! [`crate::infrastructure::persistence`] and mocked in service tests.
//!
//! A redirect touches both contracts: the link is looked up and checked for
//! expiry, a click is appended, then the link's counter is incremented. See
//! [`crate::application::services::RedirectService`].

pub mod entities;
pub mod repositories;

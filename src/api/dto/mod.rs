//! Request and response bodies of the JSON API.
//!
//! Request types derive `Validate`; response types are built from service
//! results through `From` impls.

pub mod analytics;
pub mod health;
pub mod links;
pub mod shorten;

//! JSON API and redirect endpoints.
//!
//! [`handlers`] call into [`crate::application::services`] and translate
//! results into [`dto`] types; failures are returned as
//! [`crate::error::AppError`], which renders its own response.
//! [`routes`] wires the `/api` subtree and [`middleware`] holds the layers
//! shared by every route.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

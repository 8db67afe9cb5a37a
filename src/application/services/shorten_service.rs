//! Short link creation service.

use chrono::{Duration, Utc};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::qr;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code, validate_custom_code};
use crate::utils::short_url::build_short_url;
use crate::utils::url_validator::is_valid_url;

/// Maximum accepted value of `expires_in_days`.
pub const MAX_EXPIRES_IN_DAYS: i64 = 3650;

/// Input of [`ShortenService::shorten`].
#[derive(Debug, Clone, Default)]
pub struct ShortenCommand {
    pub original_url: String,
    pub custom_code: Option<String>,
    pub expires_in_days: Option<i64>,
}

/// A link together with its public short URL and QR code.
#[derive(Debug, Clone)]
pub struct LinkResult {
    pub link: Link,
    pub short_url: String,
    /// PNG QR code of `short_url` as a `data:` URI.
    pub qr_code: String,
}

/// Code generation settings.
#[derive(Debug, Clone, Copy)]
pub struct CodePolicy {
    /// Length of generated codes.
    pub length: usize,
    /// Attempts before giving up; the second half uses `length + 1`.
    pub max_attempts: usize,
}

impl Default for CodePolicy {
    fn default() -> Self {
        Self {
            length: DEFAULT_CODE_LENGTH,
            max_attempts: 10,
        }
    }
}

/// Service for creating short links.
///
/// Validates the URL, reuses an existing active link for the same URL, and
/// otherwise allocates a custom or random code. The store's uniqueness
/// constraint is the authoritative collision signal: the `find_by_code`
/// pre-check only avoids pointless inserts.
pub struct ShortenService<L: LinkRepository> {
    link_repository: Arc<L>,
    base_url: String,
    policy: CodePolicy,
}

impl<L: LinkRepository> ShortenService<L> {
    /// Creates a new shorten service.
    pub fn new(link_repository: Arc<L>, base_url: impl Into<String>, policy: CodePolicy) -> Self {
        Self {
            link_repository,
            base_url: base_url.into(),
            policy,
        }
    }

    /// Shortens a URL.
    ///
    /// # Reuse
    ///
    /// If an active link for the exact same URL exists, it is returned
    /// unchanged. `custom_code` and `expires_in_days` are ignored on reuse.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for an invalid URL, custom code or expiry
    /// - [`AppError::Conflict`] if the custom code is already taken
    /// - [`AppError::Exhausted`] if no free random code was found
    /// - [`AppError::Storage`] on database errors
    pub async fn shorten(&self, command: ShortenCommand) -> Result<LinkResult, AppError> {
        let ShortenCommand {
            original_url,
            custom_code,
            expires_in_days,
        } = command;

        if !is_valid_url(&original_url) {
            return Err(AppError::bad_request(
                "Invalid URL format",
                json!({ "original_url": original_url }),
            ));
        }

        if let Some(existing) = self
            .link_repository
            .find_active_by_original_url(&original_url)
            .await?
        {
            debug!(
                code = %existing.short_code,
                ignored_custom_code = ?custom_code,
                ignored_expires_in_days = ?expires_in_days,
                "Reusing existing link"
            );
            return self.to_result(existing);
        }

        let expires_at = match expires_in_days {
            Some(days) if !(1..=MAX_EXPIRES_IN_DAYS).contains(&days) => {
                return Err(AppError::bad_request(
                    format!("expires_in_days must be between 1 and {MAX_EXPIRES_IN_DAYS}"),
                    json!({ "expires_in_days": days }),
                ));
            }
            Some(days) => Some(Utc::now() + Duration::days(days)),
            None => None,
        };

        let link = match custom_code {
            Some(code) => {
                self.create_with_custom_code(original_url, code, expires_at)
                    .await?
            }
            None => self.create_with_generated_code(original_url, expires_at).await?,
        };

        self.to_result(link)
    }

    /// Builds the public result for a link.
    pub fn to_result(&self, link: Link) -> Result<LinkResult, AppError> {
        let short_url = build_short_url(&self.base_url, &link.short_code);
        let qr_code = qr::render_data_uri(&short_url)?;

        Ok(LinkResult {
            link,
            short_url,
            qr_code,
        })
    }

    async fn create_with_custom_code(
        &self,
        original_url: String,
        code: String,
        expires_at: Option<chrono::DateTime<Utc>>,
    ) -> Result<Link, AppError> {
        validate_custom_code(&code)?;

        if self.link_repository.find_by_code(&code).await?.is_some() {
            return Err(custom_code_conflict(&code));
        }

        let new_link = NewLink {
            original_url,
            short_code: code.clone(),
            expires_at,
        };

        match self.link_repository.create(new_link).await {
            Err(AppError::DuplicateCode { .. }) => Err(custom_code_conflict(&code)),
            other => other,
        }
    }

    async fn create_with_generated_code(
        &self,
        original_url: String,
        expires_at: Option<chrono::DateTime<Utc>>,
    ) -> Result<Link, AppError> {
        let CodePolicy {
            length,
            max_attempts,
        } = self.policy;

        for attempt in 0..max_attempts {
            let widened = attempt >= max_attempts.div_ceil(2);
            let code = generate_code(if widened { length + 1 } else { length });

            if self.link_repository.find_by_code(&code).await?.is_some() {
                warn!(%code, attempt, "Generated code collides with existing link");
                continue;
            }

            let new_link = NewLink {
                original_url: original_url.clone(),
                short_code: code,
                expires_at,
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::DuplicateCode { details, .. }) => {
                    warn!(%details, attempt, "Generated code taken concurrently");
                }
                Err(e) => return Err(e),
            }
        }

        error!(max_attempts, length, "Failed to allocate a unique short code");
        Err(AppError::exhausted(
            "Failed to generate unique code",
            json!({ "attempts": max_attempts }),
        ))
    }
}

fn custom_code_conflict(code: &str) -> AppError {
    AppError::conflict("Custom code already exists", json!({ "code": code }))
}

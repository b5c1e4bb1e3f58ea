//! Input validation utilities
//!
//! Request payloads describe their field rules declaratively through
//! [`Rules`]; the [`ValidatedJson`] extractor runs them before the handler
//! body executes and answers with a 400 envelope listing every violation.

use axum::{
    Json, async_trait,
    extract::{FromRequest, Request},
};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::sync::OnceLock;

use crate::error::{ApiError, ApiResult};

/// Payloads that can check themselves
pub trait Validate {
    fn validate(&self) -> ApiResult<()>;
}

/// Collects violations across all fields of one payload
#[derive(Debug, Default)]
pub struct Rules {
    errors: Vec<String>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the rule chain for a string field
    pub fn field<'r, 'v>(&'r mut self, name: &'static str, value: Option<&'v str>) -> FieldRules<'r, 'v> {
        FieldRules {
            name,
            value,
            errors: &mut self.errors,
            failed: false,
        }
    }

    /// Record `message` unless `condition` holds
    pub fn ensure(&mut self, condition: bool, message: impl Into<String>) -> &mut Self {
        if !condition {
            self.errors.push(message.into());
        }
        self
    }

    pub fn finish(self) -> ApiResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(self.errors))
        }
    }
}

/// Rule chain for a single field. The first failing rule wins; later rules
/// on the same field are skipped. Every rule but `required` passes on an
/// absent value.
pub struct FieldRules<'r, 'v> {
    name: &'static str,
    value: Option<&'v str>,
    errors: &'r mut Vec<String>,
    failed: bool,
}

impl FieldRules<'_, '_> {
    /// Run `predicate` on the present value; record `message` when it fails
    pub fn check(mut self, predicate: impl FnOnce(&str) -> bool, message: impl Into<String>) -> Self {
        if self.failed {
            return self;
        }
        if let Some(value) = self.value {
            if !predicate(value) {
                self.errors.push(message.into());
                self.failed = true;
            }
        }
        self
    }

    pub fn required(mut self) -> Self {
        if !self.failed && self.value.is_none_or(|v| v.trim().is_empty()) {
            self.errors.push(format!("{} is required", self.name));
            self.failed = true;
        }
        self
    }

    /// Character count within `min..=max`
    pub fn length(self, min: usize, max: usize) -> Self {
        let message = format!(
            "{} must be between {} and {} characters",
            self.name, min, max
        );
        self.check(
            |v| (min..=max).contains(&v.trim().chars().count()),
            message,
        )
    }

    pub fn max_length(self, max: usize) -> Self {
        let message = format!("{} must be at most {} characters", self.name, max);
        self.check(|v| v.chars().count() <= max, message)
    }

    pub fn email(self) -> Self {
        let message = format!("{} must be a valid email address", self.name);
        self.check(is_email, message)
    }
}

/// Email shape check
pub fn is_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    regex.is_match(email.trim())
}

/// Canonical form used for storing and looking up email addresses
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// JSON body extractor that also runs the payload's [`Validate`] rules
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state).await?;
        payload.validate()?;
        Ok(ValidatedJson(payload))
    }
}

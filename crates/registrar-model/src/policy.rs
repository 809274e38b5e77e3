// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Enrollment limits and how they are loaded.
//!
//! Loading flow:
//! 1. Start with [`EnrollmentPolicy::default()`] (10 / 250 / 10).
//! 2. If a JSON policy file exists, its fields replace the defaults; missing
//!    fields keep their default.
//! 3. Apply `REGISTRAR_*` environment overrides. Unparsable values are
//!    ignored with a warning.
//! 4. Validate.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

pub const ENV_MIN_ENROLLMENT: &str = "REGISTRAR_MIN_ENROLLMENT";
pub const ENV_MAX_ENROLLMENT: &str = "REGISTRAR_MAX_ENROLLMENT";
pub const ENV_WAITLIST_CAPACITY: &str = "REGISTRAR_WAITLIST_CAPACITY";

/// Errors raised while loading an [`EnrollmentPolicy`].
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("failed to read policy file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse policy JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid enrollment policy: {0}")]
    Invalid(&'static str),
}

/// Capacity limits applied to every enrollment roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrollmentPolicy {
    /// Smallest allowed roster capacity.
    pub min_enrollment: usize,
    /// Largest allowed roster capacity.
    pub max_enrollment: usize,
    /// Number of participants that may wait for a seat.
    pub waitlist_capacity: usize,
}

impl Default for EnrollmentPolicy {
    fn default() -> Self {
        Self {
            min_enrollment: Self::DEFAULT_MIN_ENROLLMENT,
            max_enrollment: Self::DEFAULT_MAX_ENROLLMENT,
            waitlist_capacity: Self::DEFAULT_WAITLIST_CAPACITY,
        }
    }
}

impl EnrollmentPolicy {
    pub const DEFAULT_MIN_ENROLLMENT: usize = 10;
    pub const DEFAULT_MAX_ENROLLMENT: usize = 250;
    pub const DEFAULT_WAITLIST_CAPACITY: usize = 10;

    /// Parses a policy from JSON, filling absent fields with defaults.
    pub fn from_json_str(json: &str) -> Result<Self, PolicyError> {
        let policy: Self = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Reads a policy file. A missing file yields the defaults.
    pub fn from_path<P>(path: P) -> Result<Self, PolicyError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        if !path.exists() {
            debug!(?path, "policy file not found, using defaults");
            return Ok(Self::default());
        }
        debug!(?path, "loading enrollment policy");
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Reads a policy file, then applies environment overrides.
    pub fn load<P>(path: P) -> Result<Self, PolicyError>
    where
        P: AsRef<Path>,
    {
        let policy = Self::from_path(path)?.with_env_overrides();
        policy.validate()?;
        Ok(policy)
    }

    /// Applies overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`, which maps an environment key to its
    /// value.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            let raw = lookup(key)?;
            let parsed = parse_count(&raw);
            if parsed.is_none() {
                warn!(key, value = %raw, "invalid enrollment override, ignoring");
            }
            parsed
        };

        if let Some(v) = read(ENV_MIN_ENROLLMENT) {
            self.min_enrollment = v;
        }
        if let Some(v) = read(ENV_MAX_ENROLLMENT) {
            self.max_enrollment = v;
        }
        if let Some(v) = read(ENV_WAITLIST_CAPACITY) {
            self.waitlist_capacity = v;
        }
        self
    }

    /// Rejects a zero minimum and a minimum above the maximum.
    pub fn validate(&self) -> Result<(), PolicyError> {
        match self.violation() {
            Some(reason) => Err(PolicyError::Invalid(reason)),
            None => Ok(()),
        }
    }

    /// The first limit this policy breaks, if any.
    pub fn violation(&self) -> Option<&'static str> {
        if self.min_enrollment == 0 {
            return Some("minimum enrollment must be positive");
        }
        if self.min_enrollment > self.max_enrollment {
            return Some("minimum enrollment exceeds maximum enrollment");
        }
        None
    }

    /// Returns `true` if `capacity` lies within `[min_enrollment, max_enrollment]`.
    #[inline]
    pub fn admits(&self, capacity: usize) -> bool {
        (self.min_enrollment..=self.max_enrollment).contains(&capacity)
    }
}

/// Parses a non-negative count, trimming surrounding whitespace.
pub fn parse_count(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}

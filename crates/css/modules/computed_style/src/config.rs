//! Configuration for style sharing and diagnostics.
//!
//! The fast-path inheritance table decides which inherited properties may be
//! copied without a full inherit. It can be constructed programmatically,
//! read from environment variables or loaded from JSON.

use anyhow::{Context as _, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable holding a comma separated fast-path property list.
pub const FAST_PATH_PROPERTIES_VAR: &str = "STYLE_FAST_PATH_PROPERTIES";
/// Environment variable enabling difference logging when set to `1`.
pub const LOG_DIFFERENCES_VAR: &str = "STYLE_LOG_DIFFERENCES";

/// An inherited property fast-path inheritance is allowed to copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FastPathProperty {
    /// `visibility`, stored in the inherited flag word.
    Visibility,
    /// The explicitly-set-color bit of the inherited flag word.
    ExplicitlySetColor,
    /// `color`, stored in the inherited data group.
    Color,
    /// The `:visited` variant of `color`.
    VisitedLinkColor,
}

impl FastPathProperty {
    pub const ALL: [Self; 4] = [
        Self::Visibility,
        Self::ExplicitlySetColor,
        Self::Color,
        Self::VisitedLinkColor,
    ];

    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Visibility => "visibility",
            Self::ExplicitlySetColor => "explicitly-set-color",
            Self::Color => "color",
            Self::VisitedLinkColor => "visited-link-color",
        }
    }

    /// Parse a kebab-case property name.
    #[inline]
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|property| property.name().eq_ignore_ascii_case(name))
    }

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            Self::Visibility => 1 << 0,
            Self::ExplicitlySetColor => 1 << 1,
            Self::Color => 1 << 2,
            Self::VisitedLinkColor => 1 << 3,
        }
    }
}

/// The set of properties fast-path inheritance may copy.
///
/// The default holds all four properties. A property left out of the set is
/// treated like any other inherited property: fast-path inheritance leaves it
/// alone and the non-fast-path comparison includes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<FastPathProperty>", into = "Vec<FastPathProperty>")]
pub struct FastPathPolicy {
    bits: u8,
}

impl FastPathPolicy {
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    #[inline]
    #[must_use]
    pub const fn all() -> Self {
        Self::empty()
            .with(FastPathProperty::Visibility)
            .with(FastPathProperty::ExplicitlySetColor)
            .with(FastPathProperty::Color)
            .with(FastPathProperty::VisitedLinkColor)
    }

    #[inline]
    #[must_use]
    pub const fn with(self, property: FastPathProperty) -> Self {
        Self {
            bits: self.bits | property.bit(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn without(self, property: FastPathProperty) -> Self {
        Self {
            bits: self.bits & !property.bit(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, property: FastPathProperty) -> bool {
        self.bits & property.bit() != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn iter(self) -> impl Iterator<Item = FastPathProperty> {
        FastPathProperty::ALL
            .into_iter()
            .filter(move |property| self.contains(*property))
    }

    /// Parse a comma separated list such as `visibility, color`.
    ///
    /// # Errors
    /// Returns an error naming the first entry that is not a known property.
    pub fn parse_list(list: &str) -> Result<Self> {
        list.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .try_fold(Self::empty(), |policy, entry| {
                FastPathProperty::from_name(entry)
                    .map(|property| policy.with(property))
                    .ok_or_else(|| anyhow!("unknown fast-path property `{entry}`"))
            })
    }
}

impl Default for FastPathPolicy {
    #[inline]
    fn default() -> Self {
        Self::all()
    }
}

impl From<Vec<FastPathProperty>> for FastPathPolicy {
    fn from(properties: Vec<FastPathProperty>) -> Self {
        properties
            .into_iter()
            .fold(Self::empty(), |policy, property| policy.with(property))
    }
}

impl From<FastPathPolicy> for Vec<FastPathProperty> {
    fn from(policy: FastPathPolicy) -> Self {
        policy.iter().collect()
    }
}

/// Runtime configuration for style sharing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Properties fast-path inheritance may copy.
    pub fast_path: FastPathPolicy,
    /// Whether [`log_differences_if_enabled`](crate::ComputedStyle::log_differences_if_enabled)
    /// writes anything.
    pub log_differences: bool,
}

impl StyleConfig {
    /// Construct a `StyleConfig` with explicit values.
    ///
    /// # Arguments
    ///
    /// * `fast_path` - Properties fast-path inheritance may copy
    /// * `log_differences` - Whether style differences are logged
    #[inline]
    #[must_use]
    pub const fn new(fast_path: FastPathPolicy, log_differences: bool) -> Self {
        Self {
            fast_path,
            log_differences,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `STYLE_FAST_PATH_PROPERTIES`: comma separated property names (default: all)
    /// - `STYLE_LOG_DIFFERENCES`: set to "1" to log style differences (default: disabled)
    ///
    /// # Errors
    /// Returns an error when the property list names an unknown property.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    /// Returns an error when the property list names an unknown property.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let fast_path = match lookup(FAST_PATH_PROPERTIES_VAR) {
            Some(list) => FastPathPolicy::parse_list(&list)
                .with_context(|| format!("invalid {FAST_PATH_PROPERTIES_VAR}"))?,
            None => FastPathPolicy::default(),
        };
        let log_differences = lookup(LOG_DIFFERENCES_VAR).as_deref() == Some("1");
        Ok(Self {
            fast_path,
            log_differences,
        })
    }

    /// Parse configuration from JSON, e.g.
    /// `{"fast_path": ["visibility", "color"], "log_differences": true}`.
    ///
    /// # Errors
    /// Returns an error when the text is not valid configuration JSON.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("failed to parse style configuration")
    }
}

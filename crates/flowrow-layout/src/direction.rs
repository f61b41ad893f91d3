//! Reading direction and locale resolution.
//!
//! The direction decides which edge a row grows from and, when no explicit
//! gravity is configured, which edge rows hug. It is normally resolved once
//! from the host locale when the engine is built.

use std::env;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::FlowGravity;

/// Primary language subtags written right-to-left.
const RTL_LANGUAGES: &[&str] = &[
    "ar", "arc", "ckb", "dv", "fa", "he", "iw", "ji", "ks", "ps", "sd", "ug", "ur", "yi",
];

/// Script subtags (ISO 15924) written right-to-left.
const RTL_SCRIPTS: &[&str] = &["arab", "hebr", "thaa", "syrc", "nkoo", "adlm", "rohg"];

/// Environment variables consulted by [`FlowDirection::from_env`], in priority order.
const LOCALE_ENV_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

/// Horizontal reading direction of a flow container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FlowDirection {
    /// Left to right: rows grow from the left edge.
    #[default]
    Ltr,
    /// Right to left: rows grow from the right edge.
    Rtl,
}

impl FlowDirection {
    /// Whether a BCP 47 or POSIX locale tag is written right-to-left.
    ///
    /// Accepts `ar`, `he-IL`, `fa_IR.UTF-8`, `pa-Arab-PK` and similar. An
    /// explicit script subtag takes precedence over the language.
    #[must_use]
    pub fn locale_is_rtl(locale: &str) -> bool {
        let tag = strip_posix_suffix(locale);
        let mut parts = tag.split(['-', '_']).filter(|part| !part.is_empty());
        let Some(language) = parts.next() else {
            return false;
        };

        for part in parts {
            // Script subtags are exactly four letters.
            if part.len() == 4 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                let script = part.to_ascii_lowercase();
                return RTL_SCRIPTS.contains(&script.as_str());
            }
        }

        let language = language.to_ascii_lowercase();
        RTL_LANGUAGES.contains(&language.as_str())
    }

    /// Direction for a locale tag.
    #[must_use]
    pub fn from_locale(locale: &str) -> Self {
        if Self::locale_is_rtl(locale) {
            Self::Rtl
        } else {
            Self::Ltr
        }
    }

    /// Direction for the process locale (`LC_ALL`, `LC_MESSAGES`, `LANG`).
    ///
    /// Unset, empty, `C` and `POSIX` locales resolve to [`FlowDirection::Ltr`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| env::var(key).ok())
    }

    pub(crate) fn from_env_with<F>(mut get: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        LOCALE_ENV_VARS
            .iter()
            .filter_map(|&key| get(key))
            .find(|value| !value.trim().is_empty())
            .map_or(Self::Ltr, |value| Self::from_locale(value.trim()))
    }

    /// Parse an explicit `ltr` / `rtl` override.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ltr" | "0" => Some(Self::Ltr),
            "rtl" | "1" => Some(Self::Rtl),
            _ => None,
        }
    }

    /// Flow gravity used when none is configured: rows hug the edge the
    /// reading direction starts from.
    #[must_use]
    pub const fn default_flow_gravity(self) -> FlowGravity {
        match self {
            Self::Ltr => FlowGravity::Start,
            Self::Rtl => FlowGravity::End,
        }
    }

    /// Check for right-to-left.
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// Drop the POSIX codeset and modifier (`.UTF-8`, `@euro`).
fn strip_posix_suffix(locale: &str) -> &str {
    let end = locale.find(['.', '@']).unwrap_or(locale.len());
    &locale[..end]
}

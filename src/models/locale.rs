//! Jurisdiction locale for legal minimum lookups.

use serde::{Deserialize, Serialize};

/// The jurisdiction whose legal minimums apply to a calculation.
///
/// Legal minimum break durations and overtime multiplier floors are keyed by
/// locale. Jurisdictions without a dedicated table fall back to [`Locale::Other`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// Japan (Labor Standards Act minimums).
    Japan,
    /// Vietnam (Labor Code minimums).
    Vietnam,
    /// Any other jurisdiction; conservative default minimums apply.
    #[default]
    Other,
}

impl Locale {
    /// Resolves a locale from a language/country code.
    ///
    /// Matching is case-insensitive; unrecognized codes resolve to
    /// [`Locale::Other`].
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Locale;
    ///
    /// assert_eq!(Locale::from_code("ja"), Locale::Japan);
    /// assert_eq!(Locale::from_code("VN"), Locale::Vietnam);
    /// assert_eq!(Locale::from_code("en"), Locale::Other);
    /// ```
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "ja" | "jp" => Locale::Japan,
            "vi" | "vn" => Locale::Vietnam,
            _ => Locale::Other,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::Japan => write!(f, "Japan"),
            Locale::Vietnam => write!(f, "Vietnam"),
            Locale::Other => write!(f, "Other"),
        }
    }
}

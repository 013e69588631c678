//! Data categories and their default masking rules.
//!
//! This module provides:
//!
//! - [`DataCategory`]: the logical classification of a sensitive value
//!   (phone number, national ID, email, or a caller-defined custom format).
//!
//! - **Default rules**: each built-in category maps to a default
//!   [`MaskRule`] via [`DataCategory::default_mask_rule`]. The mapping is
//!   pure and never fails; unknown category names are rejected at the
//!   [`FromStr`] boundary instead.

use std::fmt;
use std::str::FromStr;

use crate::mask::{MASK_CHAR, MaskRule};

/// The kind of sensitive data a value holds.
///
/// The category selects the masking algorithm applied while the value is
/// hidden. `Custom` defers to a caller-supplied [`MaskRule`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DataCategory {
    /// Phone number: keeps the first 3 and last 4 digits
    /// (e.g., `"13812345678"` → `"138****5678"`).
    #[default]
    Phone,
    /// Fixed-format national ID of 15 or 18 characters: keeps the first 4 and
    /// last 4 (e.g., `"110101199001011234"` → `"1101**********1234"`).
    NationalId,
    /// Email address: masks the local part, preserves the domain
    /// (e.g., `"example@email.com"` → `"****@email.com"`).
    Email,
    /// Caller-defined format, masked per the instance's [`MaskRule`].
    Custom,
}

impl DataCategory {
    /// Returns the default masking rule for this category.
    ///
    /// `Custom` has no default (the rule is caller-supplied), so it returns
    /// `None`. For the built-in categories the prefix/suffix spans document
    /// the kept segments; the fixed-format algorithms in [`crate::mask`]
    /// derive the actual masked span from the value at format time.
    #[must_use]
    pub fn default_mask_rule(self) -> Option<MaskRule> {
        match self {
            Self::Phone => Some(MaskRule::new(3, 4, MASK_CHAR)),
            Self::NationalId => Some(MaskRule::new(4, 4, MASK_CHAR)),
            Self::Email => Some(MaskRule::new(0, 0, MASK_CHAR)),
            Self::Custom => None,
        }
    }

    /// The category's canonical name, as accepted by [`FromStr`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::NationalId => "national_id",
            Self::Email => "email",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for DataCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category name is not recognized.
///
/// This is the boundary where invalid classifications are rejected; the
/// masking and default-rule paths never see an unknown category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown data category: {0:?}")]
pub struct ParseCategoryError(String);

impl FromStr for DataCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "phone" => Ok(Self::Phone),
            "national_id" | "id_card" => Ok(Self::NationalId),
            "email" => Ok(Self::Email),
            "custom" => Ok(Self::Custom),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DataCategory;
    use crate::mask::MaskRule;

    #[test]
    fn builtin_categories_have_default_rules() {
        assert_eq!(
            DataCategory::Phone.default_mask_rule(),
            Some(MaskRule::new(3, 4, '*'))
        );
        assert_eq!(
            DataCategory::NationalId.default_mask_rule(),
            Some(MaskRule::new(4, 4, '*'))
        );
        assert_eq!(
            DataCategory::Email.default_mask_rule(),
            Some(MaskRule::new(0, 0, '*'))
        );
    }

    #[test]
    fn custom_category_has_no_default_rule() {
        assert_eq!(DataCategory::Custom.default_mask_rule(), None);
    }

    #[test]
    fn category_names_round_trip() {
        for category in [
            DataCategory::Phone,
            DataCategory::NationalId,
            DataCategory::Email,
            DataCategory::Custom,
        ] {
            assert_eq!(category.as_str().parse::<DataCategory>(), Ok(category));
        }
    }

    #[test]
    fn unknown_category_names_are_rejected() {
        assert!("passport".parse::<DataCategory>().is_err());
        assert!("".parse::<DataCategory>().is_err());
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!("Phone".parse::<DataCategory>(), Ok(DataCategory::Phone));
        assert_eq!(
            " NATIONAL_ID ".parse::<DataCategory>(),
            Ok(DataCategory::NationalId)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn category_serializes_to_snake_case() {
        let json = serde_json::to_string(&DataCategory::NationalId).unwrap();
        assert_eq!(json, "\"national_id\"");
    }
}

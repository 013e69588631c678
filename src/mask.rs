//! Masking strategies for sensitive strings.
//!
//! This module provides [`MaskRule`] and the per-category masking functions.
//! Masking functions are pure string transformations: they operate on Unicode
//! scalar values, always allocate a new `String`, and are total over every
//! string input (a value too short to mask meaningfully is returned
//! unchanged). They do not decide *whether* to mask; that decision lives in
//! [`crate::value::SensitiveValue`].

use std::iter::repeat_n;

use crate::category::DataCategory;

/// Default character used to mask sensitive characters.
pub const MASK_CHAR: char = '*';

/// Rule describing which segments of a value stay visible when masked.
///
/// Used directly only for [`DataCategory::Custom`]; the built-in categories
/// have fixed-format algorithms and take their defaults from
/// [`DataCategory::default_mask_rule`].
///
/// If `prefix_keep + suffix_keep` covers or exceeds the value length, the
/// value is returned unmasked (no negative-length mask segment is ever
/// constructed).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaskRule {
    /// Number of leading characters to keep visible.
    prefix_keep: usize,
    /// Number of trailing characters to keep visible.
    suffix_keep: usize,
    /// Symbol used to mask the interior.
    mask_char: char,
}

impl MaskRule {
    /// Constructs a rule keeping the first `prefix_keep` and last
    /// `suffix_keep` scalar values visible.
    #[must_use]
    pub const fn new(prefix_keep: usize, suffix_keep: usize, mask_char: char) -> Self {
        Self {
            prefix_keep,
            suffix_keep,
            mask_char,
        }
    }

    /// Uses a specific masking character.
    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// Number of leading characters kept visible.
    pub fn prefix_keep(&self) -> usize {
        self.prefix_keep
    }

    /// Number of trailing characters kept visible.
    pub fn suffix_keep(&self) -> usize {
        self.suffix_keep
    }

    /// The masking character.
    pub fn mask_char(&self) -> char {
        self.mask_char
    }
}

impl Default for MaskRule {
    /// Keeps the first 3 and last 4 characters, masking with [`MASK_CHAR`].
    fn default() -> Self {
        Self::new(3, 4, MASK_CHAR)
    }
}

/// Masks `clear` according to its category.
///
/// `rule` is consulted only for [`DataCategory::Custom`]; the built-in
/// categories carry their own fixed-format algorithms, so callers pass the
/// category default (see [`DataCategory::default_mask_rule`]) to pick the
/// masking character.
#[must_use]
pub fn mask(clear: &str, category: DataCategory, rule: &MaskRule) -> String {
    match category {
        DataCategory::Phone => mask_phone(clear, rule.mask_char),
        DataCategory::NationalId => mask_national_id(clear, rule.mask_char),
        DataCategory::Email => mask_email(clear, rule.mask_char),
        DataCategory::Custom => mask_custom(clear, rule),
    }
}

/// Masks a phone number, keeping the first 3 and last 4 digits.
///
/// Non-digit characters are stripped before masking. An 11-digit number masks
/// positions `[3, 7)`; any longer number keeps the first 3 and last 4 digits
/// with exactly 4 mask characters between them. Inputs shorter than 7
/// characters (or whose digit count is 7 or fewer) are returned unchanged.
///
/// ```
/// use disclosable::{MASK_CHAR, mask_phone};
///
/// assert_eq!(mask_phone("13812345678", MASK_CHAR), "138****5678");
/// assert_eq!(mask_phone("555-12", MASK_CHAR), "555-12");
/// ```
#[must_use]
pub fn mask_phone(phone: &str, mask_char: char) -> String {
    if phone.chars().count() < 7 {
        return phone.to_string();
    }

    let digits: Vec<char> = phone.chars().filter(char::is_ascii_digit).collect();
    let total = digits.len();

    if total == 11 {
        // Standard mobile number: 138****5678
        let mut out = String::with_capacity(total);
        out.extend(&digits[..3]);
        out.extend(repeat_n(mask_char, 4));
        out.extend(&digits[7..]);
        out
    } else if total > 7 {
        // Other formats: first 3 and last 4 digits around a fixed 4-char mask
        let mut out = String::with_capacity(11);
        out.extend(&digits[..3]);
        out.extend(repeat_n(mask_char, 4));
        out.extend(&digits[total - 4..]);
        out
    } else {
        phone.to_string()
    }
}

/// Masks a fixed-format national ID, keeping the first 4 and last 4
/// characters.
///
/// The value is trimmed and uppercased first. A 15-character ID masks the
/// middle 7 characters; an 18-character ID masks the middle 10. Any other
/// length is returned unchanged — the thresholds are exact, this is a
/// fixed-format domestic ID rule, not a general heuristic.
#[must_use]
pub fn mask_national_id(id: &str, mask_char: char) -> String {
    let cleaned: Vec<char> = id.trim().chars().flat_map(char::to_uppercase).collect();
    let total = cleaned.len();

    let masked_span = match total {
        15 => 7,
        18 => 10,
        _ => return id.to_string(),
    };

    let mut out = String::with_capacity(total);
    out.extend(&cleaned[..4]);
    out.extend(repeat_n(mask_char, masked_span));
    out.extend(&cleaned[4 + masked_span..]);
    out
}

/// Masks the local part of an email address, preserving the domain.
///
/// The local part is always replaced with exactly 4 mask characters
/// regardless of its length. Values without an `@`, or where `@` is the first
/// character, are returned unchanged.
///
/// ```
/// use disclosable::{MASK_CHAR, mask_email};
///
/// assert_eq!(mask_email("example@email.com", MASK_CHAR), "****@email.com");
/// ```
#[must_use]
pub fn mask_email(email: &str, mask_char: char) -> String {
    match email.find('@') {
        None | Some(0) => email.to_string(),
        Some(at) => {
            let mut out: String = repeat_n(mask_char, 4).collect();
            out.push_str(&email[at..]);
            out
        }
    }
}

/// Masks a value according to a caller-supplied [`MaskRule`].
///
/// The interior is replaced with exactly `len - prefix_keep - suffix_keep`
/// mask characters, so the output always has the same length as the input.
/// If the kept segments cover the whole value, it is returned unchanged.
#[must_use]
pub fn mask_custom(text: &str, rule: &MaskRule) -> String {
    let chars: Vec<char> = text.chars().collect();
    let total = chars.len();

    if total <= rule.prefix_keep.saturating_add(rule.suffix_keep) {
        return text.to_string();
    }

    let interior = total - rule.prefix_keep - rule.suffix_keep;
    let mut out = String::with_capacity(total);
    out.extend(&chars[..rule.prefix_keep]);
    out.extend(repeat_n(rule.mask_char, interior));
    out.extend(&chars[total - rule.suffix_keep..]);
    out
}

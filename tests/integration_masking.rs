//! End-to-end masking scenarios through the public API.
//!
//! Each case binds a value, leaves it hidden, and checks the rendered text
//! against the expected masked form for its category.

use disclosable::{DataCategory, MaskRule, NO_DATA_PLACEHOLDER, SensitiveValue};

#[test]
fn phone_renders_with_middle_masked() {
    let mut field = SensitiveValue::new(DataCategory::Phone);
    field.set_value("13812345678");
    assert_eq!(field.display_text(), "138****5678");
}

#[test]
fn national_id_renders_with_middle_masked() {
    let mut field = SensitiveValue::new(DataCategory::NationalId);
    field.set_value("110101199001011234");
    assert_eq!(field.display_text(), "1101**********1234");
}

#[test]
fn email_renders_with_local_part_masked() {
    let mut field = SensitiveValue::new(DataCategory::Email);
    field.set_value("example@email.com");
    assert_eq!(field.display_text(), "****@email.com");
}

#[test]
fn custom_rule_renders_with_interior_masked() {
    let mut field =
        SensitiveValue::new(DataCategory::Custom).with_mask_rule(MaskRule::new(2, 3, '#'));
    field.set_value("ABCDEFGHIJK");
    assert_eq!(field.display_text(), "AB######IJK");
}

#[test]
fn empty_value_renders_placeholder_and_cannot_be_toggled() {
    let mut field = SensitiveValue::new(DataCategory::Phone);
    field.set_value("");

    assert_eq!(field.display_text(), NO_DATA_PLACEHOLDER);
    field.toggle();
    assert!(!field.is_disclosed());
    assert_eq!(field.display_text(), NO_DATA_PLACEHOLDER);
}

#[test]
fn values_too_short_to_mask_render_unchanged() {
    let mut field = SensitiveValue::new(DataCategory::Phone);
    field.set_value("555-12");
    assert_eq!(field.display_text(), "555-12");

    let mut field = SensitiveValue::new(DataCategory::NationalId);
    field.set_value("12345");
    assert_eq!(field.display_text(), "12345");

    let mut field = SensitiveValue::new(DataCategory::Email);
    field.set_value("not-an-email");
    assert_eq!(field.display_text(), "not-an-email");
}

#[test]
fn masked_and_disclosed_renders_differ_only_in_masking() {
    let mut field = SensitiveValue::new(DataCategory::NationalId);
    field.set_value("110101199001011234");

    let masked = field.display_text();
    field.toggle();
    let disclosed = field.display_text();

    assert_eq!(masked.len(), disclosed.len());
    assert_eq!(&masked[..4], &disclosed[..4]);
    assert_eq!(&masked[14..], &disclosed[14..]);
    assert_eq!(&masked[4..14], "**********");
}

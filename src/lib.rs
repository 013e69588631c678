//! Masked display and on-demand disclosure of sensitive values.
//!
//! This crate separates:
//! - **Categories**: what kind of sensitive data a value is (e.g., `Phone`,
//!   `NationalId`, `Email`), each mapped to a default masking rule.
//! - **Masking**: pure string transformations that redact a cleartext value.
//! - **Disclosure**: a per-slot state machine that decides whether a value is
//!   rendered masked or in full, with an edge-triggered change callback.
//!
//! A bound value may be cleartext or an encrypted blob. The [`Cipher`]
//! collaborator sniffs and decrypts blobs on demand; decryption failures
//! degrade to rendering the stored value as-is, never to an error.
//!
//! What this crate does:
//! - holds one sensitive value per display slot and computes its display text
//! - masks phone numbers, national IDs, emails, and custom-rule values
//! - transparently decrypts encrypted values before masking or disclosure
//!
//! What it does not do:
//! - render anything (adapt [`SensitiveValue`] to your UI toolkit at the
//!   boundary)
//! - persist disclosure preferences
//! - design a cipher (the bundled [`AesGcmCipher`] is one implementation of
//!   the [`Cipher`] contract)
//!
//! # Example
//!
//! ```rust
//! use disclosable::{DataCategory, SensitiveValue};
//!
//! let mut field = SensitiveValue::new(DataCategory::Phone);
//! field.set_value("13812345678");
//! assert_eq!(field.display_text(), "138****5678");
//!
//! field.toggle();
//! assert_eq!(field.display_text(), "13812345678");
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
pub mod category;
pub mod cipher;
pub mod mask;
pub mod value;

// Re-exports from category module
pub use category::{DataCategory, ParseCategoryError};
// Re-exports from cipher module
#[cfg(feature = "aes")]
pub use cipher::aes::{AesGcmCipher, KEY_SIZE};
pub use cipher::{Cipher, CipherError, resolve_cleartext};
// Re-exports from mask module
pub use mask::{
    MASK_CHAR, MaskRule, mask, mask_custom, mask_email, mask_national_id, mask_phone,
};
// Re-exports from value module
pub use value::{NO_DATA_PLACEHOLDER, SensitiveValue};

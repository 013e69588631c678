//! The per-slot sensitive value and its disclosure state machine.
//!
//! A [`SensitiveValue`] is owned by one display slot (e.g., one list row) for
//! the slot's lifetime. It holds the stored value, tracks hidden/visible
//! state, and computes the display text: placeholder when empty, masked when
//! hidden, cleartext when disclosed. Encrypted values are resolved through
//! the configured [`Cipher`] on every render, so masking always operates on
//! decrypted data.
//!
//! Two rules here encode an actual privacy requirement rather than
//! incidental behavior:
//!
//! - binding a new value always resets the state to hidden, so a recycled
//!   slot never defaults to disclosing the new entity's data;
//! - the change callback is edge-triggered: it fires exactly when visibility
//!   changes, never for requests that leave the state as it was.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::category::DataCategory;
use crate::cipher::{Cipher, resolve_cleartext};
use crate::mask::{MaskRule, mask};

/// Fixed rendering for the "no data" state.
pub const NO_DATA_PLACEHOLDER: &str = "[NO DATA]";

type DisclosureCallback = Box<dyn FnMut(bool)>;

/// A sensitive value bound to one display slot.
///
/// The stored value may be cleartext or an encrypted blob; rendering resolves
/// it through the configured cipher either way. The value starts hidden and
/// becomes visible only via an explicit [`toggle`](Self::toggle) or
/// [`set_disclosed`](Self::set_disclosed) request, and never while locked or
/// empty.
///
/// # Example
///
/// ```rust
/// use disclosable::{DataCategory, MaskRule, SensitiveValue};
///
/// let mut field = SensitiveValue::new(DataCategory::Custom)
///     .with_mask_rule(MaskRule::new(2, 3, '#'));
/// field.set_value("ABCDEFGHIJK");
/// assert_eq!(field.display_text(), "AB######IJK");
/// ```
pub struct SensitiveValue {
    /// Last value set by the caller; cleartext or an encrypted blob.
    raw: Option<String>,
    category: DataCategory,
    /// Effective only while `category` is `Custom`.
    mask_rule: MaskRule,
    disclosed: bool,
    locked: bool,
    /// Incremented on every bind, so asynchronous hosts can discard renders
    /// that started against a superseded value.
    generation: u64,
    placeholder: Cow<'static, str>,
    cipher: Option<Arc<dyn Cipher>>,
    on_change: Option<DisclosureCallback>,
}

impl SensitiveValue {
    /// Creates an empty, hidden, unlocked value for the given category.
    #[must_use]
    pub fn new(category: DataCategory) -> Self {
        Self {
            raw: None,
            category,
            mask_rule: MaskRule::default(),
            disclosed: false,
            locked: false,
            generation: 0,
            placeholder: Cow::Borrowed(NO_DATA_PLACEHOLDER),
            cipher: None,
            on_change: None,
        }
    }

    /// Resolves stored values through `cipher` before masking or disclosure.
    ///
    /// Without a cipher, every stored value is treated as cleartext.
    #[must_use]
    pub fn with_cipher(mut self, cipher: Arc<dyn Cipher>) -> Self {
        self.cipher = Some(cipher);
        self
    }

    /// Uses a custom masking rule (effective for [`DataCategory::Custom`]).
    #[must_use]
    pub fn with_mask_rule(mut self, rule: MaskRule) -> Self {
        self.mask_rule = rule;
        self
    }

    /// Uses a custom "no data" placeholder.
    #[must_use]
    pub fn with_placeholder<P>(mut self, placeholder: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        self.placeholder = placeholder.into();
        self
    }

    /// Starts with toggling locked.
    #[must_use]
    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Binds a new stored value.
    ///
    /// Always resets the state to hidden, regardless of the previous state. A
    /// newly bound value is never shown by default.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.raw = Some(value.into());
        self.generation = self.generation.wrapping_add(1);
        self.transition(false);
    }

    /// Clears the value to the initial state: no data, hidden, unlocked.
    ///
    /// Used when a display slot is recycled for a different entity. The
    /// registered callback survives the reset (the slot's wiring does not
    /// change when its content does).
    pub fn reset(&mut self) {
        self.raw = None;
        self.locked = false;
        self.generation = self.generation.wrapping_add(1);
        self.transition(false);
    }

    /// Changes the data category.
    pub fn set_category(&mut self, category: DataCategory) {
        self.category = category;
    }

    /// Changes the custom masking rule.
    pub fn set_mask_rule(&mut self, rule: MaskRule) {
        self.mask_rule = rule;
    }

    /// Locks or unlocks toggling. While locked, visibility requests are
    /// ignored and the state stays fixed at its current value.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Flips between hidden and visible.
    ///
    /// No-op (no state change, no callback) while locked or empty.
    pub fn toggle(&mut self) {
        if self.locked || !self.has_value() {
            return;
        }
        self.transition(!self.disclosed);
    }

    /// Forces the visibility state.
    ///
    /// No-op while locked or empty. Requests that leave the state unchanged
    /// do not invoke the callback.
    pub fn set_disclosed(&mut self, disclosed: bool) {
        if self.locked || !self.has_value() {
            return;
        }
        self.transition(disclosed);
    }

    /// Registers the disclosure-change callback, replacing any previous one.
    ///
    /// The callback receives the new visibility and fires exactly once per
    /// effective change, whatever caused it.
    pub fn on_disclosure_changed<F>(&mut self, callback: F)
    where
        F: FnMut(bool) + 'static,
    {
        self.on_change = Some(Box::new(callback));
    }

    /// Removes the disclosure-change callback.
    pub fn clear_disclosure_callback(&mut self) {
        self.on_change = None;
    }

    /// The stored value as set by the caller (cleartext or encrypted blob).
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Whether the cleartext is currently exposed.
    #[must_use]
    pub fn is_disclosed(&self) -> bool {
        self.disclosed
    }

    /// Whether toggling is currently locked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The current data category.
    #[must_use]
    pub fn category(&self) -> DataCategory {
        self.category
    }

    /// The custom masking rule.
    #[must_use]
    pub fn mask_rule(&self) -> MaskRule {
        self.mask_rule
    }

    /// The bind generation, incremented on every [`set_value`](Self::set_value)
    /// and [`reset`](Self::reset).
    ///
    /// Hosts that resolve cleartext asynchronously capture this before
    /// starting and drop the result if it no longer matches.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Computes the text to display.
    ///
    /// Empty values render the placeholder regardless of disclosure state.
    /// Otherwise the stored value is resolved to cleartext (decrypting if
    /// needed) and returned in full when disclosed, masked per category when
    /// hidden. This path never fails: decryption problems degrade to the
    /// stored value and the masking functions are total.
    #[must_use]
    pub fn display_text(&self) -> String {
        let Some(raw) = self.raw.as_deref().filter(|value| !value.is_empty()) else {
            return self.placeholder.clone().into_owned();
        };

        let clear = match self.cipher.as_deref() {
            Some(cipher) => resolve_cleartext(cipher, raw),
            None => raw.to_string(),
        };

        if self.disclosed {
            clear
        } else {
            mask(&clear, self.category, &self.effective_mask_rule())
        }
    }

    fn has_value(&self) -> bool {
        self.raw.as_deref().is_some_and(|value| !value.is_empty())
    }

    fn effective_mask_rule(&self) -> MaskRule {
        self.category
            .default_mask_rule()
            .unwrap_or(self.mask_rule)
    }

    /// Moves to the requested visibility, firing the callback only on an
    /// effective change.
    fn transition(&mut self, disclosed: bool) {
        if self.disclosed == disclosed {
            return;
        }
        self.disclosed = disclosed;
        #[cfg(feature = "tracing")]
        tracing::debug!(disclosed, "disclosure state changed");
        if let Some(callback) = self.on_change.as_mut() {
            callback(disclosed);
        }
    }
}

impl Default for SensitiveValue {
    fn default() -> Self {
        Self::new(DataCategory::default())
    }
}

// The stored value never appears in debug output.
impl fmt::Debug for SensitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SensitiveValue")
            .field("category", &self.category)
            .field("has_value", &self.has_value())
            .field("disclosed", &self.disclosed)
            .field("locked", &self.locked)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{NO_DATA_PLACEHOLDER, SensitiveValue};
    use crate::category::DataCategory;
    use crate::mask::MaskRule;

    fn recorded(field: &mut SensitiveValue) -> Rc<RefCell<Vec<bool>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        field.on_disclosure_changed(move |visible| sink.borrow_mut().push(visible));
        events
    }

    #[test]
    fn starts_hidden_and_empty() {
        let field = SensitiveValue::new(DataCategory::Phone);
        assert!(!field.is_disclosed());
        assert_eq!(field.value(), None);
        assert_eq!(field.display_text(), NO_DATA_PLACEHOLDER);
    }

    #[test]
    fn set_value_always_resets_to_hidden() {
        let mut field = SensitiveValue::new(DataCategory::Phone);
        field.set_value("13812345678");
        field.toggle();
        assert!(field.is_disclosed());

        field.set_value("13900000000");
        assert!(!field.is_disclosed());
        assert_eq!(field.display_text(), "139****0000");
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut field = SensitiveValue::new(DataCategory::Phone);
        field.set_value("13812345678");

        field.toggle();
        assert_eq!(field.display_text(), "13812345678");
        field.toggle();
        assert_eq!(field.display_text(), "138****5678");
    }

    #[test]
    fn locked_instance_ignores_visibility_requests() {
        let mut field = SensitiveValue::new(DataCategory::Phone).with_locked(true);
        field.set_value("13812345678");
        let events = recorded(&mut field);

        field.toggle();
        field.set_disclosed(true);

        assert!(!field.is_disclosed());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn lock_freezes_state_at_current_value() {
        let mut field = SensitiveValue::new(DataCategory::Phone);
        field.set_value("13812345678");
        field.toggle();
        field.set_locked(true);

        field.toggle();
        field.set_disclosed(false);
        assert!(field.is_disclosed());

        field.set_locked(false);
        field.toggle();
        assert!(!field.is_disclosed());
    }

    #[test]
    fn callback_is_edge_triggered() {
        let mut field = SensitiveValue::new(DataCategory::Phone);
        field.set_value("13812345678");
        let events = recorded(&mut field);

        field.set_disclosed(true);
        field.set_disclosed(true); // level, not edge: must not fire again
        field.set_disclosed(false);
        field.set_disclosed(false);

        assert_eq!(*events.borrow(), vec![true, false]);
    }

    #[test]
    fn rebinding_a_visible_value_reports_the_hide() {
        let mut field = SensitiveValue::new(DataCategory::Phone);
        field.set_value("13812345678");
        let events = recorded(&mut field);

        field.set_disclosed(true);
        field.set_value("13900000000"); // reset to hidden is a visibility change

        assert_eq!(*events.borrow(), vec![true, false]);
    }

    #[test]
    fn last_callback_registration_wins() {
        let mut field = SensitiveValue::new(DataCategory::Phone);
        field.set_value("13812345678");

        let first = Rc::new(RefCell::new(0u32));
        let counter = Rc::clone(&first);
        field.on_disclosure_changed(move |_| *counter.borrow_mut() += 1);

        let second = Rc::new(RefCell::new(0u32));
        let counter = Rc::clone(&second);
        field.on_disclosure_changed(move |_| *counter.borrow_mut() += 1);

        field.toggle();
        assert_eq!(*first.borrow(), 0);
        assert_eq!(*second.borrow(), 1);
    }

    #[test]
    fn empty_value_renders_placeholder_and_disables_toggling() {
        let mut field = SensitiveValue::new(DataCategory::Email);
        field.set_value("");
        let events = recorded(&mut field);

        assert_eq!(field.display_text(), NO_DATA_PLACEHOLDER);
        field.toggle();
        field.set_disclosed(true);

        assert!(!field.is_disclosed());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn placeholder_is_configurable() {
        let field = SensitiveValue::new(DataCategory::Phone).with_placeholder("--");
        assert_eq!(field.display_text(), "--");
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut field = SensitiveValue::new(DataCategory::Phone);
        field.set_value("13812345678");
        field.toggle();
        field.set_locked(true);

        field.reset();

        assert_eq!(field.value(), None);
        assert!(!field.is_disclosed());
        assert!(!field.is_locked());
        assert_eq!(field.display_text(), NO_DATA_PLACEHOLDER);
    }

    #[test]
    fn generation_increments_on_every_bind() {
        let mut field = SensitiveValue::new(DataCategory::Phone);
        let start = field.generation();

        field.set_value("a");
        field.set_value("b");
        field.reset();

        assert_eq!(field.generation(), start + 3);
    }

    #[test]
    fn custom_category_uses_instance_rule() {
        let mut field = SensitiveValue::new(DataCategory::Custom)
            .with_mask_rule(MaskRule::new(2, 3, '#'));
        field.set_value("ABCDEFGHIJK");
        assert_eq!(field.display_text(), "AB######IJK");
    }

    #[test]
    fn builtin_categories_ignore_instance_rule() {
        let mut field = SensitiveValue::new(DataCategory::Phone)
            .with_mask_rule(MaskRule::new(0, 0, '#'));
        field.set_value("13812345678");
        assert_eq!(field.display_text(), "138****5678");
    }

    #[test]
    fn category_change_applies_on_next_render() {
        let mut field = SensitiveValue::new(DataCategory::Phone);
        field.set_value("example@email.com");
        field.set_category(DataCategory::Email);
        assert_eq!(field.display_text(), "****@email.com");
    }

    #[test]
    fn debug_output_never_contains_the_value() {
        let mut field = SensitiveValue::new(DataCategory::Phone);
        field.set_value("13812345678");
        field.toggle();

        let debug = format!("{field:?}");
        assert!(!debug.contains("13812345678"));
        assert!(debug.contains("has_value: true"));
    }
}

//! The "quantity to order" text field.

/// Text shown before the user touches the field.
pub const PLACEHOLDER: &str = "0";

/// Raw field text paired with its integer reading.
///
/// `parsed` is `None` whenever the text is not an integer (empty, letters,
/// out of range); that state is never an error, it just disables ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityInput {
    raw: String,
    parsed: Option<i32>,
}

impl QuantityInput {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = raw.parse().ok();
        Self { raw, parsed }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn parsed(&self) -> Option<i32> {
        self.parsed
    }

    /// The amount to order, if the text is a non-negative integer.
    pub fn ordered_quantity(&self) -> Option<i32> {
        self.parsed.filter(|q| *q >= 0)
    }

    /// Reading used by the place-order button: non-numbers count as zero.
    pub fn affordance_value(&self) -> i32 {
        self.parsed.unwrap_or(0)
    }
}

impl Default for QuantityInput {
    fn default() -> Self {
        Self::new(PLACEHOLDER)
    }
}

/// Remembers whether the field currently holds focus, so focus acquisition
/// is reported once per gain rather than on every focus callback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusTracker {
    has_focus: bool,
}

impl FocusTracker {
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Feed a focus callback. Returns `true` exactly when focus was just gained.
    pub fn on_focus_changed(&mut self, is_focused: bool) -> bool {
        match (is_focused, self.has_focus) {
            (true, false) => {
                self.has_focus = true;
                true
            }
            (false, _) => {
                self.has_focus = false;
                false
            }
            (true, true) => false,
        }
    }
}

/// Quantity input plus focus state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuantityField {
    input: QuantityInput,
    focus: FocusTracker,
}

impl QuantityField {
    pub fn input(&self) -> &QuantityInput {
        &self.input
    }

    pub fn has_focus(&self) -> bool {
        self.focus.has_focus()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.input = QuantityInput::new(text);
    }

    /// Gaining focus empties the field so the user types over the placeholder.
    pub fn on_focus_changed(&mut self, is_focused: bool) {
        if self.focus.on_focus_changed(is_focused) {
            self.set_text("");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers_and_flags_everything_else() {
        assert_eq!(QuantityInput::new("4").parsed(), Some(4));
        assert_eq!(QuantityInput::new("-3").parsed(), Some(-3));
        assert_eq!(QuantityInput::new("").parsed(), None);
        assert_eq!(QuantityInput::new("4.5").parsed(), None);
        assert_eq!(QuantityInput::new("abc").parsed(), None);
        assert_eq!(QuantityInput::new("99999999999").parsed(), None);
    }

    #[test]
    fn negative_text_is_not_an_orderable_quantity() {
        let input = QuantityInput::new("-3");
        assert_eq!(input.ordered_quantity(), None);
        assert_eq!(input.affordance_value(), -3);
        assert_eq!(QuantityInput::new("x").affordance_value(), 0);
        assert_eq!(QuantityInput::new("0").ordered_quantity(), Some(0));
    }

    #[test]
    fn starts_at_placeholder() {
        let field = QuantityField::default();
        assert_eq!(field.input().raw(), "0");
        assert!(!field.has_focus());
    }

    #[test]
    fn first_focus_clears_once() {
        let mut field = QuantityField::default();

        field.on_focus_changed(true);
        assert_eq!(field.input().raw(), "");
        assert!(field.has_focus());

        field.set_text("4");
        field.on_focus_changed(true);
        assert_eq!(field.input().raw(), "4");
    }

    #[test]
    fn losing_focus_rearms_the_clear() {
        let mut field = QuantityField::default();
        field.on_focus_changed(true);
        field.set_text("4");

        field.on_focus_changed(false);
        assert_eq!(field.input().raw(), "4");
        assert!(!field.has_focus());

        field.on_focus_changed(true);
        assert_eq!(field.input().raw(), "");
    }
}

/// Progressive reveal of a line of text, one character per tick.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypingState {
    chars: Vec<char>,
    shown: usize,
}

impl TypingState {
    /// Nothing shown yet.
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    /// Reveal one more character. Returns false once everything is shown.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.shown += 1;
        true
    }

    /// The revealed prefix.
    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.shown >= self.chars.len()
    }

    /// Swap in new text and start over from nothing.
    pub fn restart(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.shown = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_one_char_per_advance() {
        let mut typing = TypingState::new("ls");
        assert_eq!(typing.visible(), "");
        assert!(typing.advance());
        assert_eq!(typing.visible(), "l");
        assert!(typing.advance());
        assert!(typing.is_complete());
        assert!(!typing.advance());
        assert_eq!(typing.visible(), "ls");
    }

    #[test]
    fn test_advance_after_complete_changes_nothing() {
        let mut typing = TypingState::new("cd");
        while typing.advance() {}
        let finished = typing.clone();
        for _ in 0..3 {
            assert!(!typing.advance());
        }
        assert_eq!(typing, finished);
        assert_eq!(typing.visible(), "cd");
    }

    #[test]
    fn test_multibyte_text() {
        let mut typing = TypingState::new("ミ✓");
        typing.advance();
        assert_eq!(typing.visible(), "ミ");
    }

    #[test]
    fn test_restart_resets() {
        let mut typing = TypingState::new("abc");
        typing.advance();
        typing.restart("xy");
        assert_eq!(typing.visible(), "");
        assert!(!typing.is_complete());
    }

    #[test]
    fn test_empty_text_is_complete() {
        assert!(TypingState::new("").is_complete());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_full_reveal_matches_input(text in "\\PC{0,40}") {
            let mut typing = TypingState::new(&text);
            let mut ticks = 0;
            while typing.advance() {
                ticks += 1;
            }
            prop_assert_eq!(ticks, text.chars().count());
            prop_assert_eq!(typing.visible(), text);
        }
    }
}

//! Trigger scanning (character-class pre-check).
//!
//! Most tables are written for one script. A Chinese→Spanish table run over a
//! file that has no CJK left in it should not pay for a substring search per
//! rule. The scan summarizes a text as a [`CharClass`] mask; a rule is only
//! searched for when every class its pattern needs is present.
//!
//! ## Invariant
//!
//! The mask held by [`TriggerInfo`] is always a *superset* of the classes in
//! the current text. Replacing text can only remove classes, and the substituter
//! adds the replacement's classes after each firing rule, so a cascade (a later
//! rule matching text an earlier replacement inserted) is never skipped. False
//! positives only cost a search.

use bitflags::bitflags;

bitflags! {
    /// Coarse character classes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharClass: u8 {
        const ASCII_ALPHA = 1 << 0;
        const ASCII_DIGIT = 1 << 1;
        /// Whitespace, punctuation and control characters below U+0080.
        const ASCII_OTHER = 1 << 2;
        /// Latin-1 supplement and Latin Extended-A/B (accented letters, `×`).
        const LATIN       = 1 << 3;
        /// CJK ideographs, kana, CJK punctuation and full-width forms.
        const CJK         = 1 << 4;
        const OTHER       = 1 << 5;
    }
}

impl CharClass {
    pub fn of_char(c: char) -> Self {
        match c {
            'a'..='z' | 'A'..='Z' => CharClass::ASCII_ALPHA,
            '0'..='9' => CharClass::ASCII_DIGIT,
            '\0'..='\x7f' => CharClass::ASCII_OTHER,
            '\u{80}'..='\u{24f}' => CharClass::LATIN,
            '\u{3000}'..='\u{30ff}'
            | '\u{3400}'..='\u{4dbf}'
            | '\u{4e00}'..='\u{9fff}'
            | '\u{f900}'..='\u{faff}'
            | '\u{ff00}'..='\u{ffef}'
            | '\u{20000}'..='\u{2ffff}' => CharClass::CJK,
            _ => CharClass::OTHER,
        }
    }

    /// Union of the classes of every character in `text`.
    pub fn scan(text: &str) -> Self {
        let mut mask = CharClass::empty();
        for c in text.chars() {
            mask |= CharClass::of_char(c);
            if mask.is_all() {
                break;
            }
        }
        mask
    }
}

/// Classes present in the text being rewritten.
#[derive(Debug, Clone, Copy)]
pub struct TriggerInfo {
    pub classes: CharClass,
}

impl TriggerInfo {
    pub fn scan(input: &str) -> Self {
        TriggerInfo { classes: CharClass::scan(input) }
    }

    /// Whether a pattern needing `needs` could occur in the text.
    pub fn admits(&self, needs: CharClass) -> bool {
        self.classes.contains(needs)
    }

    /// Record that text with `classes` was inserted.
    pub fn absorb(&mut self, classes: CharClass) {
        self.classes |= classes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_scripts() {
        assert_eq!(CharClass::of_char('k'), CharClass::ASCII_ALPHA);
        assert_eq!(CharClass::of_char('7'), CharClass::ASCII_DIGIT);
        assert_eq!(CharClass::of_char('('), CharClass::ASCII_OTHER);
        assert_eq!(CharClass::of_char('í'), CharClass::LATIN);
        assert_eq!(CharClass::of_char('×'), CharClass::LATIN);
        assert_eq!(CharClass::of_char('速'), CharClass::CJK);
        assert_eq!(CharClass::of_char('：'), CharClass::CJK);
        assert_eq!(CharClass::of_char('—'), CharClass::OTHER);
    }

    #[test]
    fn scan_unions_classes() {
        let mask = CharClass::scan("速率Solicitud:");
        assert_eq!(mask, CharClass::CJK | CharClass::ASCII_ALPHA | CharClass::ASCII_OTHER);
        assert!(CharClass::scan("").is_empty());
    }

    #[test]
    fn admits_only_when_all_needed_classes_present() {
        let mut info = TriggerInfo::scan("TokenLimit");
        assert!(info.admits(CharClass::ASCII_ALPHA));
        assert!(!info.admits(CharClass::CJK | CharClass::ASCII_ALPHA));
        info.absorb(CharClass::CJK);
        assert!(info.admits(CharClass::CJK | CharClass::ASCII_ALPHA));
    }

    #[test]
    fn empty_needs_is_always_admitted() {
        assert!(TriggerInfo::scan("").admits(CharClass::empty()));
    }
}

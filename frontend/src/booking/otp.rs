use once_cell::sync::Lazy;
use regex::Regex;

pub const OTP_LENGTH: usize = 6;

static PASTED_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{6}$").unwrap());

/// Six single-digit slots and the slot that should hold focus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OtpEntry {
    slots: [String; OTP_LENGTH],
    focus: usize,
}

impl OtpEntry {
    pub fn slots(&self) -> &[String; OTP_LENGTH] {
        &self.slots
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn code(&self) -> String {
        self.slots.concat()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_empty())
    }

    /// Typing into slot `index`. Returns the code when the last slot completes it.
    pub fn input(&mut self, index: usize, value: &str) -> Option<String> {
        if index >= OTP_LENGTH || !value.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        self.slots[index] = value.chars().take(1).collect();

        if !value.is_empty() && index < OTP_LENGTH - 1 {
            self.focus = index + 1;
        }

        if index == OTP_LENGTH - 1 && self.is_complete() {
            return Some(self.code());
        }
        None
    }

    /// Backspace on an empty slot steps back one slot.
    pub fn backspace(&mut self, index: usize) {
        if index < OTP_LENGTH && index > 0 && self.slots[index].is_empty() {
            self.focus = index - 1;
        }
    }

    /// A pasted six-digit code fills every slot and is handed back for verification.
    pub fn paste(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if !PASTED_CODE_RE.is_match(text) {
            return None;
        }
        for (slot, digit) in self.slots.iter_mut().zip(text.chars()) {
            *slot = digit.to_string();
        }
        self.focus = OTP_LENGTH - 1;
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_advances_focus_and_completes_on_last_slot() {
        let mut entry = OtpEntry::default();
        for (i, digit) in ["1", "2", "3", "4", "5"].iter().enumerate() {
            assert_eq!(entry.input(i, digit), None);
            assert_eq!(entry.focus(), i + 1);
        }
        assert_eq!(entry.input(5, "6"), Some("123456".to_string()));
        assert_eq!(entry.focus(), 5);
    }

    #[test]
    fn last_slot_with_gap_does_not_verify() {
        let mut entry = OtpEntry::default();
        entry.input(0, "1");
        assert_eq!(entry.input(5, "9"), None);
        assert_eq!(entry.code(), "19");
    }

    #[test]
    fn non_digits_are_ignored() {
        let mut entry = OtpEntry::default();
        assert_eq!(entry.input(0, "a"), None);
        assert_eq!(entry.slots()[0], "");
        assert_eq!(entry.focus(), 0);
    }

    #[test]
    fn only_first_character_is_kept() {
        let mut entry = OtpEntry::default();
        entry.input(2, "78");
        assert_eq!(entry.slots()[2], "7");
    }

    #[test]
    fn clearing_a_slot_keeps_focus() {
        let mut entry = OtpEntry::default();
        entry.input(0, "4");
        entry.input(1, "");
        assert_eq!(entry.focus(), 1);
        assert_eq!(entry.slots()[1], "");
    }

    #[test]
    fn backspace_on_empty_slot_moves_back() {
        let mut entry = OtpEntry::default();
        entry.input(0, "4");
        entry.backspace(1);
        assert_eq!(entry.focus(), 0);
        entry.backspace(0);
        assert_eq!(entry.focus(), 0);
    }

    #[test]
    fn backspace_on_filled_slot_stays() {
        let mut entry = OtpEntry::default();
        entry.input(0, "4");
        entry.input(1, "5");
        entry.backspace(1);
        assert_eq!(entry.focus(), 2);
    }

    #[test]
    fn pasting_six_digits_fills_all_slots() {
        let mut entry = OtpEntry::default();
        assert_eq!(entry.paste("654321"), Some("654321".to_string()));
        assert_eq!(entry.slots().concat(), "654321");
        assert_eq!(entry.focus(), 5);
    }

    #[test]
    fn pasting_anything_else_is_ignored() {
        let mut entry = OtpEntry::default();
        assert_eq!(entry.paste("65432"), None);
        assert_eq!(entry.paste("65432a"), None);
        assert_eq!(entry.paste("6543210"), None);
        assert_eq!(entry.code(), "");
        assert_eq!(entry.paste(" 111111\n"), Some("111111".to_string()));
    }

    #[test]
    fn pasting_non_ascii_digits_is_ignored() {
        let mut entry = OtpEntry::default();
        assert_eq!(entry.paste("١٢٣٤٥٦"), None);
        assert_eq!(entry.paste("६५४३२१"), None);
        assert_eq!(entry.code(), "");
        assert_eq!(entry.focus(), 0);
    }
}

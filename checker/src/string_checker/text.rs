use super::non_blank;
use super::within;
use super::StringChecker;
use crate::errors::CheckFailure;
use crate::region;

const CARD_DIGITS: usize = 16;
const CARD_GROUPS: usize = 4;
const CARD_GROUP_DIGITS: usize = 4;
const GROUPED_CARD_LENGTH: usize = CARD_DIGITS + CARD_GROUPS - 1;

impl StringChecker {
    /// Accept any text that is not empty or whitespace only.
    ///
    /// The captured string is the input as given, untrimmed.
    pub fn parse_valid_string(&self, input: &str) -> Result<String, CheckFailure> {
        self.finish("string", non_blank(input).map(str::to_string))
    }

    /// Accept non-blank text of exactly `length` characters.
    pub fn parse_string_of_length(&self, input: &str, length: usize) -> Result<String, CheckFailure> {
        let result = non_blank(input).and_then(|text| {
            if text.chars().count() == length {
                Ok(text.to_string())
            } else {
                Err(CheckFailure::WrongLength { expected: length })
            }
        });
        self.finish("string", result)
    }

    pub fn is_valid_string(&self, input: &str) -> bool {
        self.parse_valid_string(input).is_ok()
    }

    pub fn is_string_of_length(&self, input: &str, length: usize) -> bool {
        self.parse_string_of_length(input, length).is_ok()
    }

    /// Capture the first character of any non-blank input.
    ///
    /// Longer input is accepted; only its first character is kept, and the
    /// input is not trimmed first.
    pub fn parse_character(&self, input: &str) -> Result<char, CheckFailure> {
        self.finish("char", character(input))
    }

    pub fn parse_character_between(
        &self,
        input: &str,
        from: char,
        to: char,
    ) -> Result<char, CheckFailure> {
        self.finish("char", character(input).and_then(|value| within(value, from, to)))
    }

    pub fn is_character(&self, input: &str) -> bool {
        self.parse_character(input).is_ok()
    }

    pub fn is_character_between(&self, input: &str, from: char, to: char) -> bool {
        self.parse_character_between(input, from, to).is_ok()
    }

    /// Accept a 16 digit card number, either contiguous or written as four
    /// hyphen-separated groups of four digits.
    ///
    /// # Returns
    /// The trimmed card number as written
    pub fn parse_card_number(&self, input: &str) -> Result<String, CheckFailure> {
        let result = non_blank(input).and_then(|text| {
            let trimmed = text.trim();
            if is_card_number(trimmed) {
                Ok(trimmed.to_string())
            } else {
                Err(CheckFailure::NotCardNumber {
                    input: trimmed.to_string(),
                })
            }
        });
        self.finish("card", result)
    }

    pub fn is_card_number(&self, input: &str) -> bool {
        self.parse_card_number(input).is_ok()
    }

    /// Accept `local@domain` where both parts are non-empty, there is exactly
    /// one `@`, and the domain contains at least one `.`.
    ///
    /// Nothing else about the address is validated.
    pub fn parse_email(&self, input: &str) -> Result<String, CheckFailure> {
        let result = non_blank(input).and_then(|text| {
            let trimmed = text.trim();
            if is_email(trimmed) {
                Ok(trimmed.to_string())
            } else {
                Err(CheckFailure::NotEmail {
                    input: trimmed.to_string(),
                })
            }
        });
        self.finish("email", result)
    }

    pub fn is_email(&self, input: &str) -> bool {
        self.parse_email(input).is_ok()
    }

    /// Accept a two-letter US state, commonwealth, territory or federal
    /// district code. Whitespace anywhere is ignored and case is folded.
    ///
    /// # Returns
    /// The normalized upper-case code
    pub fn parse_state_abbreviation(&self, input: &str) -> Result<String, CheckFailure> {
        let result = non_blank(input).and_then(|text| {
            let code = region::normalize(text);
            if region::is_known(&code) {
                Ok(code)
            } else {
                Err(CheckFailure::UnknownRegion { input: code })
            }
        });
        self.finish("region", result)
    }

    pub fn is_state_abbreviation(&self, input: &str) -> bool {
        self.parse_state_abbreviation(input).is_ok()
    }
}

fn character(input: &str) -> Result<char, CheckFailure> {
    non_blank(input)?.chars().next().ok_or(CheckFailure::Blank)
}

fn all_digits(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit())
}

fn is_card_number(text: &str) -> bool {
    match text.chars().count() {
        CARD_DIGITS => all_digits(text),
        GROUPED_CARD_LENGTH => {
            let groups: Vec<&str> = text.split('-').collect();
            groups.len() == CARD_GROUPS
                && groups
                    .iter()
                    .all(|group| group.len() == CARD_GROUP_DIGITS && all_digits(group))
        }
        _ => false,
    }
}

fn is_email(text: &str) -> bool {
    let mut parts = text.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && domain.contains('.')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> StringChecker {
        StringChecker::without_diagnostics()
    }

    #[test]
    fn test_valid_string_keeps_input_untrimmed() {
        assert_eq!(checker().parse_valid_string("  hi "), Ok("  hi ".to_string()));
        assert_eq!(checker().parse_valid_string(" \t\n"), Err(CheckFailure::Blank));
        assert!(!checker().is_valid_string(""));
    }

    #[test]
    fn test_string_length_mismatch_fails() {
        assert!(checker().is_string_of_length("abcd", 4));
        assert_eq!(
            checker().parse_string_of_length("abc", 4),
            Err(CheckFailure::WrongLength { expected: 4 })
        );
        // Same result whether or not diagnostics are on.
        assert!(!checker().verbose().is_string_of_length("abc", 4));
    }

    #[test]
    fn test_string_length_counts_characters_not_bytes() {
        assert!(checker().is_string_of_length("héllo", 5));
    }

    #[test]
    fn test_character_takes_first_of_longer_input() {
        assert_eq!(checker().parse_character("xyz"), Ok('x'));
        assert_eq!(checker().parse_character(" z"), Ok(' '));
        assert_eq!(checker().parse_character(""), Err(CheckFailure::Blank));
    }

    #[test]
    fn test_character_range_swaps_bounds() {
        assert!(checker().is_character_between("c", 'a', 'f'));
        assert!(checker().is_character_between("c", 'f', 'a'));
        assert!(!checker().is_character_between("z", 'a', 'f'));
    }

    #[test]
    fn test_card_numbers() {
        assert!(checker().is_card_number("1234567812345678"));
        assert!(checker().is_card_number("1234-5678-1234-5678"));
        assert!(checker().is_card_number(" 1234-5678-1234-5678 "));
        assert!(!checker().is_card_number("1234-5678-1234-567"));
        assert!(!checker().is_card_number("123456781234567"));
        assert!(!checker().is_card_number("1234 5678 1234 5678"));
        assert!(!checker().is_card_number("12345-678-1234-5678"));
        assert!(!checker().is_card_number("+234567812345678"));
    }

    #[test]
    fn test_card_number_captures_trimmed_text() {
        assert_eq!(
            checker().parse_card_number(" 1234567812345678\n"),
            Ok("1234567812345678".to_string())
        );
    }

    #[test]
    fn test_emails() {
        assert!(checker().is_email("a@b.com"));
        assert!(checker().is_email(" first.last@mail.example.org "));
        assert!(!checker().is_email("a@@b.com"));
        assert!(!checker().is_email("ab.com"));
        assert!(!checker().is_email("a@bcom"));
        assert!(!checker().is_email("@b.com"));
        assert!(!checker().is_email("a@b.com@"));
    }

    #[test]
    fn test_state_abbreviations() {
        assert_eq!(checker().parse_state_abbreviation(" ca "), Ok("CA".to_string()));
        assert!(checker().is_state_abbreviation("n y"));
        assert!(checker().is_state_abbreviation("pr"));
        assert!(!checker().is_state_abbreviation("ZZ"));
        assert!(!checker().is_state_abbreviation("CAL"));
    }

    #[test]
    fn test_unknown_region_lists_acceptable_codes() {
        let failure = checker().parse_state_abbreviation("zz").unwrap_err();
        let message = failure.to_string();

        assert!(message.starts_with("ZZ is not a valid US State"));
        assert!(message.contains("AL AK AZ"));
        assert!(message.ends_with("PR VI"));
    }
}

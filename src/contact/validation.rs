use regex::Regex;
use std::sync::OnceLock;

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;
// Whitespace as browsers trim and match it: Unicode spaces and line breaks
// plus U+FEFF, but not U+0085.
const SPACE_CLASS: &str =
    r"\t\n\x0B\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        let part = format!("[^{SPACE_CLASS}@]+");
        Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("valid email pattern")
    })
}

fn is_space(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

// Lengths are counted in UTF-16 units, so an astral character weighs two.
fn trimmed_len(value: &str) -> usize {
    value.trim_matches(is_space).encode_utf16().count()
}

pub fn validate_name(name: &str) -> bool {
    trimmed_len(name) >= MIN_NAME_CHARS
}

// something@something.something, no whitespace and no extra `@`
pub fn validate_email(email: &str) -> bool {
    email_regex().is_match(email)
}

pub fn validate_message(message: &str) -> bool {
    trimmed_len(message) >= MIN_MESSAGE_CHARS
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    // error slot is `<id>-error`
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    pub fn error_message(self) -> &'static str {
        match self {
            Field::Name => "Name must be at least 2 characters",
            Field::Email => "Please enter a valid email address",
            Field::Message => "Message must be at least 10 characters",
        }
    }

    pub fn is_valid(self, value: &str) -> bool {
        match self {
            Field::Name => validate_name(value),
            Field::Email => validate_email(value),
            Field::Message => validate_message(value),
        }
    }

    pub fn check(self, value: &str) -> Option<&'static str> {
        (!self.is_valid(value)).then(|| self.error_message())
    }

    // while typing, an empty field is never flagged
    pub fn check_live(self, value: &str) -> Option<&'static str> {
        if value.is_empty() {
            None
        } else {
            self.check(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_needs_two_trimmed_chars() {
        assert!(!validate_name(""));
        assert!(!validate_name("A"));
        assert!(!validate_name("   A   "));
        assert!(validate_name("Al"));
        assert!(validate_name("  Alice "));
        assert!(validate_name("Åo"));
    }

    #[test]
    fn name_matches_trimmed_length_rule() {
        let cases = [
            ("", false),
            (" ", false),
            ("a", false),
            (" ab ", true),
            ("\tx\n", false),
            ("xyz", true),
            ("é", false),
            ("éé", true),
            ("  \u{00a0}q ", false),
            ("\u{3000}q\u{2029}", false),
            // astral characters are two UTF-16 units
            ("😀", true),
            (" 😀 ", true),
            // U+FEFF is trimmed, U+0085 is not
            ("\u{feff}a", false),
            ("a\u{feff}\u{feff}", false),
            ("\u{85}a", true),
        ];
        for (s, expected) in cases {
            assert_eq!(validate_name(s), expected, "{s:?}");
        }
    }

    #[test]
    fn message_needs_ten_trimmed_chars() {
        assert!(!validate_message("short"));
        assert!(!validate_message("   123456789   "));
        assert!(validate_message("1234567890"));
        assert!(validate_message("Hello there!"));
        assert!(validate_message("😀😀😀😀😀"));
        assert!(!validate_message("😀😀😀😀x"));
        assert!(!validate_message("\u{feff}123456789\u{feff}"));
        for (s, expected) in [
            ("", false),
            ("         x", false),
            ("0123456789 ", true),
            (" 012345678 ", false),
        ] {
            assert_eq!(validate_message(s), expected, "{s:?}");
        }
    }

    #[test]
    fn email_structure() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("alice@example.com"));
        assert!(validate_email("first.last@mail.example.org"));
        assert!(!validate_email("bad"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("a@@b.co"));
        assert!(!validate_email("a b@c.de"));
        assert!(!validate_email("@b.co"));
        assert!(!validate_email("a@b."));
        assert!(!validate_email(" a@b.co"));
        assert!(!validate_email("a\u{feff}b@c.de"));
        assert!(!validate_email("a@b.c\u{3000}"));
        assert!(validate_email("a\u{85}b@c.de"));
    }

    #[test]
    fn live_check_ignores_empty_fields() {
        for field in Field::ALL {
            assert_eq!(field.check_live(""), None);
            assert_eq!(field.check(""), Some(field.error_message()));
        }
        assert_eq!(Field::Name.check_live("A"), Some("Name must be at least 2 characters"));
        assert_eq!(Field::Email.check_live("alice@example.com"), None);
    }
}

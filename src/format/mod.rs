//! Input masks for the form fields on the playground page.
//!
//! Each mask takes whatever the user typed and returns the canonical text;
//! applying it twice gives the same result.

pub(crate) const PHONE_COUNTRIES: [&str; 7] = ["+1", "+33", "+44", "+49", "+65", "+81", "+84"];

fn digits(raw: &str, max: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// North-American numbers get `(555) 123-4567`; other countries keep up to
/// 12 digits but only the first ten are shown in the mask.
pub(crate) fn format_phone(raw: &str, country: &str) -> String {
    let max = if country == "+1" { 10 } else { 12 };
    let d = digits(raw, max);
    let n = d.len();

    let p1 = &d[..n.min(3)];
    if n <= 3 {
        return p1.to_string();
    }
    let p2 = &d[3..n.min(6)];
    if n <= 6 {
        return format!("({p1}) {p2}");
    }
    let p3 = &d[6..n.min(10)];
    format!("({p1}) {p2}-{p3}")
}

pub(crate) fn format_card(raw: &str) -> String {
    let d = digits(raw, 16);
    d.as_bytes()
        .chunks(4)
        .map(|c| String::from_utf8_lossy(c).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn format_cvc(raw: &str) -> String {
    digits(raw, 4)
}

pub(crate) fn format_currency(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let mut parts = cleaned.split('.');
    let whole: String = parts.next().unwrap_or_default().chars().take(9).collect();
    let fraction: String = parts.next().unwrap_or_default().chars().take(2).collect();

    if fraction.is_empty() {
        whole
    } else {
        format!("{whole}.{fraction}")
    }
}

/// Typed quantity; anything without digits reads as zero.
pub(crate) fn parse_quantity(raw: &str) -> u32 {
    let d: String = raw.chars().filter(char::is_ascii_digit).collect();
    d.parse().unwrap_or(if d.is_empty() { 0 } else { u32::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_us() {
        assert_eq!(format_phone("", "+1"), "");
        assert_eq!(format_phone("55", "+1"), "55");
        assert_eq!(format_phone("555", "+1"), "555");
        assert_eq!(format_phone("5551", "+1"), "(555) 1");
        assert_eq!(format_phone("555123", "+1"), "(555) 123");
        assert_eq!(format_phone("5551234", "+1"), "(555) 123-4");
        assert_eq!(format_phone("555-123-4567 ext 99", "+1"), "(555) 123-4567");
    }

    #[test]
    fn test_phone_is_idempotent() {
        for raw in ["5", "5551", "5551234567", "+44 20 7946 0958"] {
            for country in ["+1", "+44"] {
                let once = format_phone(raw, country);
                assert_eq!(format_phone(&once, country), once, "{raw} {country}");
            }
        }
    }

    #[test]
    fn test_phone_other_country_caps_display_at_ten() {
        assert_eq!(format_phone("841234567890", "+84"), "(841) 234-5678");
    }

    #[test]
    fn test_card_groups() {
        assert_eq!(format_card(""), "");
        assert_eq!(format_card("4242"), "4242");
        assert_eq!(format_card("42424"), "4242 4");
        assert_eq!(
            format_card("4242-4242-4242-4242-999"),
            "4242 4242 4242 4242"
        );
    }

    #[test]
    fn test_cvc() {
        assert_eq!(format_cvc("12a3"), "123");
        assert_eq!(format_cvc("123456"), "1234");
    }

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(""), "");
        assert_eq!(format_currency("$1,234.5"), "1234.5");
        assert_eq!(format_currency("12.345"), "12.34");
        assert_eq!(format_currency("12."), "12");
        assert_eq!(format_currency(".5"), ".5");
        assert_eq!(format_currency("1234567890123"), "123456789");
        assert_eq!(format_currency("1.2.3"), "1.2");
    }

    #[test]
    fn test_quantity() {
        assert_eq!(parse_quantity("12"), 12);
        assert_eq!(parse_quantity("1a2"), 12);
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("abc"), 0);
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Small text helpers for user-facing replies.

/// Uppercase the first character, keeping the rest as typed.
///
/// Works on multi-byte characters (the bot speaks Russian).
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format a kcal amount rounded to one decimal, without a trailing `.0`.
pub fn fmt_kcal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.1}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_ascii() {
        assert_eq!(capitalize("banana"), "Banana");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalize_cyrillic() {
        assert_eq!(capitalize("банан"), "Банан");
        assert_eq!(capitalize("беговые лыжи"), "Беговые лыжи");
    }

    #[test]
    fn test_fmt_kcal() {
        assert_eq!(fmt_kcal(450.0), "450");
        assert_eq!(fmt_kcal(133.5), "133.5");
        // accumulated float noise collapses back to one decimal
        assert_eq!(fmt_kcal(300.70000000000005), "300.7");
        assert_eq!(fmt_kcal(0.0), "0");
    }
}

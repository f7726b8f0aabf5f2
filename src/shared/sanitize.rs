use lazy_static::lazy_static;
use regex::Regex;

use crate::shared::constants::MAX_INPUT_LENGTH;

lazy_static! {
    /// Script-capable URL schemes and inline event-handler attributes
    /// - Matches: "javascript:", "DATA:", "vbScript:", "onclick=", "onMouseOver="
    static ref UNSAFE_PATTERN_REGEX: Regex =
        Regex::new(r"(?i)javascript:|data:|vbscript:|on[a-z0-9_]+=").unwrap();
}

/// Entities produced by [`sanitize_input`]. An `&` already starting one of
/// these is left alone, so sanitizing twice changes nothing.
const HTML_ENTITIES: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&#x27;"];

/// Clean free text for display in an HTML context.
///
/// Escapes `& < > " '`, strips script schemes and `on<event>=` attributes,
/// trims surrounding whitespace and bounds the result to
/// [`MAX_INPUT_LENGTH`] characters. Total: never fails, empty in gives
/// empty out.
pub fn sanitize_input(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let escaped = escape_html(input);
    let stripped = strip_unsafe_patterns(escaped);
    truncate_chars(stripped.trim(), MAX_INPUT_LENGTH)
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (idx, ch) in input.char_indices() {
        match ch {
            '&' if starts_with_entity(&input[idx..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

fn starts_with_entity(s: &str) -> bool {
    HTML_ENTITIES.iter().any(|entity| s.starts_with(entity))
}

// Removing one match can join its neighbours into a new one
// ("javajavascript:script:"), so strip until nothing matches.
fn strip_unsafe_patterns(mut text: String) -> String {
    while UNSAFE_PATTERN_REGEX.is_match(&text) {
        text = UNSAFE_PATTERN_REGEX.replace_all(&text, "").into_owned();
    }
    text
}

fn truncate_chars(input: &str, max_chars: usize) -> String {
    let mut out = match input.char_indices().nth(max_chars) {
        Some((cut, _)) => input[..cut].to_string(),
        None => return input.to_string(),
    };

    // never leave half an entity at the tail
    if let Some(amp) = out.rfind('&') {
        if !out[amp..].contains(';') {
            out.truncate(amp);
        }
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::lorem::en::Sentence;
    use fake::Fake;

    fn has_raw_special_chars(s: &str) -> bool {
        s.char_indices().any(|(idx, ch)| match ch {
            '&' => !starts_with_entity(&s[idx..]),
            '<' | '>' | '"' | '\'' => true,
            _ => false,
        })
    }

    #[test]
    fn test_escapes_html_characters() {
        assert_eq!(
            sanitize_input(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_strips_script_schemes_case_insensitively() {
        assert_eq!(sanitize_input("JavaScript:alert(1)"), "alert(1)");
        assert_eq!(sanitize_input("see data:text/html"), "see text/html");
        assert_eq!(sanitize_input("VBSCRIPT:msgbox"), "msgbox");
    }

    #[test]
    fn test_strips_event_handler_attributes() {
        assert_eq!(
            sanitize_input(r#"<img src=x onerror="alert(1)">"#),
            "&lt;img src=x &quot;alert(1)&quot;&gt;"
        );
        assert_eq!(sanitize_input("x OnMouseOver=y"), "x y");
    }

    #[test]
    fn test_strips_patterns_rebuilt_by_removal() {
        assert_eq!(sanitize_input("javajavascript:script:go"), "go");
        assert_eq!(sanitize_input("oonclick=nclick=x"), "x");
    }

    #[test]
    fn test_trims_and_handles_empty_input() {
        assert_eq!(sanitize_input(""), "");
        assert_eq!(sanitize_input("   "), "");
        assert_eq!(sanitize_input("  Ana  "), "Ana");
    }

    #[test]
    fn test_truncates_to_max_length() {
        let long = "é".repeat(MAX_INPUT_LENGTH + 40);
        let out = sanitize_input(&long);
        assert_eq!(out.chars().count(), MAX_INPUT_LENGTH);
    }

    #[test]
    fn test_truncation_never_splits_an_entity() {
        // 498 letters followed by '&' escapes to "&amp;" straddling the limit
        let input = format!("{}&&&", "a".repeat(MAX_INPUT_LENGTH - 2));
        let out = sanitize_input(&input);
        assert!(out.chars().count() <= MAX_INPUT_LENGTH);
        assert!(!has_raw_special_chars(&out));
        assert_eq!(out, "a".repeat(MAX_INPUT_LENGTH - 2));
    }

    #[test]
    fn test_output_is_bounded_and_has_no_raw_specials() {
        let repeated = "<>&\"'".repeat(200);
        let inputs = [
            "<script>alert('x')</script>",
            "\"quoted\" & 'single'",
            repeated.as_str(),
            "onload=javascript:data:vbscript:",
            "&amp; already & escaped &lt;",
            "&#x27",
        ];
        for input in inputs {
            let out = sanitize_input(input);
            assert!(out.chars().count() <= MAX_INPUT_LENGTH, "too long: {input}");
            assert!(!has_raw_special_chars(&out), "raw char left in {out:?}");
        }
    }

    #[test]
    fn test_idempotent_on_safe_input() {
        for _ in 0..50 {
            let sentence: String = Sentence(3..12).fake();
            let once = sanitize_input(&sentence);
            assert_eq!(sanitize_input(&once), once);
        }
    }

    const HOSTILE_FRAGMENTS: [&str; 22] = [
        "<", ">", "&", "\"", "'", ";", ":", "=", " ", "é",
        "javascript:", "DATA:", "vbscript:", "java", "script", "on", "click",
        "onload=", "&amp;", "&lt", "&#x27;", "aaaaaaaaaaaaaaaaaaaa",
    ];

    fn hostile_input() -> String {
        let count: usize = (1..60).fake();
        (0..count)
            .map(|_| HOSTILE_FRAGMENTS[(0..HOSTILE_FRAGMENTS.len()).fake::<usize>()])
            .collect()
    }

    #[test]
    fn test_generated_hostile_input_is_bounded_escaped_and_stable() {
        for _ in 0..300 {
            let input = hostile_input();
            let once = sanitize_input(&input);

            assert!(once.chars().count() <= MAX_INPUT_LENGTH, "too long for {input:?}");
            assert!(!has_raw_special_chars(&once), "raw char left in {once:?}");
            assert!(!UNSAFE_PATTERN_REGEX.is_match(&once), "pattern left in {once:?}");
            assert_eq!(sanitize_input(&once), once, "not stable for {input:?}");
        }
    }

    #[test]
    fn test_idempotent_on_escaped_output() {
        let once = sanitize_input(r#"Tom & "Jerry" <3 it's great"#);
        assert_eq!(sanitize_input(&once), once);
    }
}

//! Cleanup rules applied to AI output before it leaves the service.
//!
//! Enhanced free text goes through `clean_enhanced_text`; extracted resume
//! fields go through `clean_extracted_text` (same rules, quotes kept).

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

fn dashes() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // hyphen-minus, en dash, em dash
    RE.get_or_init(|| Regex::new(r"[\-\x{2013}\x{2014}]").expect("valid dash pattern"))
}

fn emoji() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\x{1F300}-\x{1F9FF}]").expect("valid emoji pattern"))
}

fn quotes() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // straight, curly double/single quotes and backtick
    RE.get_or_init(|| {
        Regex::new(r#"["'`\x{201C}\x{201D}\x{2018}\x{2019}]"#).expect("valid quote pattern")
    })
}

fn whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"))
}

/// Dashes become a space so `Led–team` reads `Led team` after collapsing.
pub fn strip_dashes(text: &str) -> String {
    dashes().replace_all(text, " ").into_owned()
}

pub fn strip_emoji(text: &str) -> String {
    emoji().replace_all(text, "").into_owned()
}

pub fn strip_quotes(text: &str) -> String {
    quotes().replace_all(text, "").into_owned()
}

/// Collapses whitespace runs to a single space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    whitespace().replace_all(text, " ").trim().to_string()
}

/// Full pipeline for enhancer output: dashes, emoji, quotes, whitespace.
pub fn clean_enhanced_text(text: &str) -> String {
    let text = strip_dashes(text.trim());
    let text = strip_emoji(&text);
    let text = strip_quotes(&text);
    collapse_whitespace(&text)
}

/// Pipeline for extracted fields: dashes, emoji, whitespace. Quotes are kept.
pub fn clean_extracted_text(text: &str) -> String {
    let text = strip_dashes(text);
    let text = strip_emoji(&text);
    collapse_whitespace(&text)
}

/// Applies `clean_extracted_text` to every string value in the tree.
/// Object keys are left untouched.
pub fn sanitize_value(value: &mut Value) {
    match value {
        Value::String(s) => *s = clean_extracted_text(s),
        Value::Array(items) => items.iter_mut().for_each(sanitize_value),
        Value::Object(map) => map.values_mut().for_each(sanitize_value),
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FORBIDDEN: &[char] = &['-', '\u{2013}', '\u{2014}', '"', '\'', '`'];

    fn has_emoji(text: &str) -> bool {
        text.chars().any(|c| ('\u{1F300}'..='\u{1F9FF}').contains(&c))
    }

    #[test]
    fn test_dashes_separate_words() {
        assert_eq!(
            clean_enhanced_text("Led–team of 5—engineers"),
            "Led team of 5 engineers"
        );
    }

    #[test]
    fn test_full_pipeline_strips_everything() {
        let input = "  \"Results-driven\" engineer 🚀 with `Rust` — it's   great 🎉\n\n";
        let out = clean_enhanced_text(input);
        assert!(!out.contains(FORBIDDEN));
        assert!(!has_emoji(&out));
        assert_eq!(out, "Results driven engineer with Rust its great");
    }

    #[test]
    fn test_curly_quotes_removed() {
        assert_eq!(clean_enhanced_text("\u{201C}Hi\u{201D} \u{2018}there\u{2019}"), "Hi there");
    }

    #[test]
    fn test_emoji_outside_range_is_kept() {
        // U+2764 (heavy heart) sits outside the stripped block
        assert_eq!(strip_emoji("love \u{2764}"), "love \u{2764}");
        assert_eq!(strip_emoji("party \u{1F389}"), "party ");
    }

    #[test]
    fn test_cleanup_is_idempotent() {
        let inputs = [
            "Led–team of 5—engineers",
            "  a\t\tb \n c  ",
            "\"quoted\" 🚀 - — –",
            "",
            "plain text already clean.",
        ];
        for input in inputs {
            let once = clean_enhanced_text(input);
            assert_eq!(clean_enhanced_text(&once), once);
            let once = clean_extracted_text(input);
            assert_eq!(clean_extracted_text(&once), once);
        }
    }

    #[test]
    fn test_extracted_text_keeps_quotes() {
        assert_eq!(clean_extracted_text("O'Brien — \"Co-founder\""), "O'Brien \"Co founder\"");
    }

    #[test]
    fn test_sanitize_value_walks_nested_strings_only() {
        let mut value = json!({
            "full-name": "Jane  Doe",
            "skills": ["Front-end", "CI/CD 🚀"],
            "experience": [{"start_date": "2020-01", "is_current": true, "years": 3}],
            "image": null
        });
        sanitize_value(&mut value);
        assert_eq!(
            value,
            json!({
                "full-name": "Jane Doe",
                "skills": ["Front end", "CI/CD"],
                "experience": [{"start_date": "2020 01", "is_current": true, "years": 3}],
                "image": null
            })
        );
    }
}

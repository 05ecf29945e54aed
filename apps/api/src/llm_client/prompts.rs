// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it;
// this file holds the pieces they have in common.

/// Formatting rules for free-text rewrites. Substituted for `{formatting_rules}`.
pub const PLAIN_TEXT_RULES: &str = "\
STRICT FORMATTING RULES:
- NO hyphens or dashes of any kind (-, –, —)
- NO emojis or special characters
- NO bullet points or lists
- NO quotation marks around the output
- Use only standard alphanumeric characters, commas, periods, and spaces
- Output plain text only with no formatting, markdown, or code blocks";

/// Formatting rules for text extracted into JSON fields.
pub const EXTRACTED_TEXT_RULES: &str = "\
STRICT FORMATTING RULES FOR EXTRACTED TEXT:
- NO hyphens or dashes in the extracted content
- NO emojis or special characters
- Replace any dashes with spaces or remove them appropriately
- Use only standard alphanumeric characters and basic punctuation";

/// Fills a prompt template. Placeholders are `{name}`.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{name}}}"), value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_replaces_every_placeholder() {
        let out = render("{a} and {b} and {a}", &[("a", "x"), ("b", "y")]);
        assert_eq!(out, "x and y and x");
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        assert_eq!(render("{missing}", &[("a", "x")]), "{missing}");
    }
}

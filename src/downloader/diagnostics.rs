// Error message diagnostics - turns raw yt-dlp failures into user-facing text
//
// Rules are checked in order and the first one whose pattern occurs in the
// message wins. Anything that matches no rule is passed through as-is.

/// A single (pattern, replacement) rewrite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageRule {
    /// Case-sensitive substring looked for in the raw message
    pub pattern: &'static str,
    /// Text that replaces the whole message on match
    pub replacement: &'static str,
}

pub const MESSAGE_RULES: &[MessageRule] = &[
    MessageRule {
        pattern: "Video unavailable",
        replacement: "This video is unavailable. It might be private or deleted.",
    },
    MessageRule {
        pattern: "Sign in",
        replacement: "This video requires sign-in. Please try a different video.",
    },
];

/// Find the first rule matching `message`
pub fn match_rule<'a>(rules: &'a [MessageRule], message: &str) -> Option<&'a MessageRule> {
    rules.iter().find(|rule| message.contains(rule.pattern))
}

/// Apply `rules` to `message`
pub fn apply_rules(rules: &[MessageRule], message: &str) -> String {
    match match_rule(rules, message) {
        Some(rule) => rule.replacement.to_string(),
        None => message.trim().to_string(),
    }
}

/// Sanitize an extractor failure message with the built-in rules
pub fn sanitize_message(message: &str) -> String {
    apply_rules(MESSAGE_RULES, message)
}

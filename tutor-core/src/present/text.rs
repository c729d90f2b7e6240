use regex::Regex;
use std::sync::OnceLock;

static EMOJI: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_RUN: OnceLock<Regex> = OnceLock::new();

fn emoji() -> &'static Regex {
    EMOJI.get_or_init(|| Regex::new(r"[\x{1F300}-\x{1FAFF}]").expect("valid emoji pattern"))
}

fn whitespace_run() -> &'static Regex {
    WHITESPACE_RUN.get_or_init(|| Regex::new(r"\s{2,}").expect("valid whitespace pattern"))
}

/// Drop pictographs (U+1F300..U+1FAFF), collapse whitespace runs and trim.
pub fn strip_emoji(text: &str) -> String {
    let stripped = emoji().replace_all(text, "");
    whitespace_run().replace_all(&stripped, " ").trim().to_string()
}

/// Text safe for the built-in PDF fonts: no emoji, no no-break spaces.
pub fn safe_text(text: &str) -> String {
    strip_emoji(text).replace('\u{a0}', " ").trim().to_string()
}

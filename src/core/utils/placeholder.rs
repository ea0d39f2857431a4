//! Positional placeholders (`%1` .. `%99`, localized `%L1`) and the plural
//! count placeholder (`%n`, `%Ln`).

use std::{collections::BTreeSet, sync::LazyLock};

use regex::{Captures, Regex};

static POSITIONAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%L?([0-9]{1,2})").unwrap());

static COUNT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%L?n").unwrap());

/// Replace `%N` with `args[N-1]` in a single pass.
///
/// Placeholders without a matching argument (including `%0`) are left as
/// they are. Substituted text is not scanned again, so an argument that
/// itself contains `%1` stays literal.
pub fn substitute<S: AsRef<str>>(text: &str, args: &[S]) -> String {
    if args.is_empty() {
        return text.to_string();
    }
    POSITIONAL_REGEX
        .replace_all(text, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .filter(|index| *index >= 1)
                .and_then(|index| args.get(index - 1))
                .map(|arg| arg.as_ref().to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Replace `%n` with the plural count.
pub fn substitute_count(text: &str, count: i64) -> String {
    COUNT_REGEX
        .replace_all(text, count.to_string().as_str())
        .into_owned()
}

/// Indices of the positional placeholders used in `text`.
pub fn placeholders(text: &str) -> BTreeSet<usize> {
    POSITIONAL_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse::<usize>().ok())
        .filter(|index| *index >= 1)
        .collect()
}

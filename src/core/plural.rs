//! Plural form selection.
//!
//! Numerus messages store one translation per plural form of the target
//! language. The rule maps a count to the index of the form to display.

/// Plural rule family of a language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PluralRule {
    /// No plural distinction (Chinese, Japanese, Korean, ...).
    Single,
    /// `1` vs everything else (English, German, Spanish, ...).
    #[default]
    English,
    /// `0` and `1` vs everything else.
    French,
    /// one / few / many with the 11–14 exception (Russian, Serbian, ...).
    Slavic,
    /// `1` / `2..=4` / others.
    Czech,
    /// `1` / few (ending in 2–4 except 12–14) / many.
    Polish,
}

impl PluralRule {
    /// Pick the rule for a language tag such as `sr_RS`, `pt-BR` or `de`.
    ///
    /// Unknown languages use the English rule.
    pub fn for_language(tag: &str) -> Self {
        Self::for_known_language(tag).unwrap_or_default()
    }

    /// Like `for_language`, but `None` for languages without a known rule.
    pub fn for_known_language(tag: &str) -> Option<Self> {
        let normalized = tag.replace('-', "_").to_lowercase();
        if normalized == "pt_br" {
            return Some(PluralRule::French);
        }
        let language = normalized.split('_').next().unwrap_or("");
        let rule = match language {
            "ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms" | "lo" | "my" => PluralRule::Single,
            "en" | "de" | "nl" | "sv" | "da" | "no" | "nb" | "nn" | "fi" | "et" | "el" | "he"
            | "it" | "es" | "pt" | "ca" | "hu" | "tr" | "bg" | "eu" | "gl" | "af" | "eo" => {
                PluralRule::English
            }
            "fr" | "oc" | "ak" | "am" | "ln" | "mg" | "ti" => PluralRule::French,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" | "sh" => PluralRule::Slavic,
            "cs" | "sk" => PluralRule::Czech,
            "pl" => PluralRule::Polish,
            _ => return None,
        };
        Some(rule)
    }

    /// Number of forms a complete numerus translation has.
    pub fn form_count(&self) -> usize {
        match self {
            PluralRule::Single => 1,
            PluralRule::English | PluralRule::French => 2,
            PluralRule::Slavic | PluralRule::Czech | PluralRule::Polish => 3,
        }
    }

    /// Index of the form to use for `count`.
    pub fn form_index(&self, count: i64) -> usize {
        let n = count.unsigned_abs();
        let (mod10, mod100) = (n % 10, n % 100);
        match self {
            PluralRule::Single => 0,
            PluralRule::English => usize::from(n != 1),
            PluralRule::French => usize::from(n > 1),
            PluralRule::Slavic => {
                if mod10 == 1 && mod100 != 11 {
                    0
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Czech => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
            PluralRule::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    1
                } else {
                    2
                }
            }
        }
    }
}

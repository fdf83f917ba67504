//! Numerus (plural) form selection.
//!
//! A numerus message stores one translation per plural form of the target
//! language. The rule for a language decides how many forms exist and which
//! one a count `n` selects. The rule families match the ones Qt Linguist
//! uses when it asks translators for numerus forms.

/// Plural rule family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PluralRule {
    /// One form for every count (Japanese, Chinese, Korean, ...).
    Single,
    /// `n == 1` → form 0, otherwise form 1 (German, English, ...).
    #[default]
    OneOther,
    /// `n <= 1` → form 0, otherwise form 1 (French, Brazilian Portuguese).
    ZeroOne,
    /// Russian, Ukrainian, Belarusian, Serbian, Croatian: 1/21/31, 2-4/22-24, rest.
    EastSlavic,
    /// Polish: 1, 2-4/22-24 (not 12-14), rest.
    Polish,
    /// Czech, Slovak: 1, 2-4, rest.
    CzechSlovak,
}

impl PluralRule {
    /// Rule for a catalog language such as `de_DE`, `pt-BR` or `ru`.
    ///
    /// Unknown or missing languages use [`PluralRule::OneOther`].
    pub fn for_language(language: &str) -> Self {
        let normalized = language.trim().to_ascii_lowercase().replace('-', "_");
        if normalized == "pt_br" {
            return PluralRule::ZeroOne;
        }

        let primary = normalized.split('_').next().unwrap_or_default();
        match primary {
            "ja" | "zh" | "ko" | "vi" | "th" | "id" | "ms" | "lo" | "my" => PluralRule::Single,
            "fr" | "oc" | "ln" | "fil" | "tl" => PluralRule::ZeroOne,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => PluralRule::EastSlavic,
            "pl" => PluralRule::Polish,
            "cs" | "sk" => PluralRule::CzechSlovak,
            _ => PluralRule::OneOther,
        }
    }

    /// Number of numerus forms a translation must provide.
    pub fn form_count(self) -> usize {
        match self {
            PluralRule::Single => 1,
            PluralRule::OneOther | PluralRule::ZeroOne => 2,
            PluralRule::EastSlavic | PluralRule::Polish | PluralRule::CzechSlovak => 3,
        }
    }

    /// Index of the form used for count `n`.
    pub fn form_index(self, n: u64) -> usize {
        let mod10 = n % 10;
        let mod100 = n % 100;
        let few = (2..=4).contains(&mod10) && !(12..=14).contains(&mod100);

        match self {
            PluralRule::Single => 0,
            PluralRule::OneOther => usize::from(n != 1),
            PluralRule::ZeroOne => usize::from(n > 1),
            PluralRule::EastSlavic => {
                if mod10 == 1 && mod100 != 11 {
                    0
                } else if few {
                    1
                } else {
                    2
                }
            }
            PluralRule::Polish => {
                if n == 1 {
                    0
                } else if few {
                    1
                } else {
                    2
                }
            }
            PluralRule::CzechSlovak => match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            },
        }
    }
}

/// Pick the form for `n`, falling back to the last form when the catalog
/// provides fewer forms than the rule expects.
pub fn select_form(forms: &[String], rule: PluralRule, n: u64) -> Option<&str> {
    let index = rule.form_index(n);
    forms
        .get(index)
        .or_else(|| forms.last())
        .map(String::as_str)
}

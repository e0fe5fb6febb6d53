//! Localized labels for the stats card.

pub const FALLBACK_LOCALE: &str = "en";

/// Locales whose labels run long enough to push the value column right.
pub const LONG_LOCALES: &[&str] = &[
    "az", "bg", "cs", "de", "el", "es", "fil", "fi", "fr", "hu", "id", "ja", "ml", "my", "nl",
    "pl", "pt-br", "pt-pt", "ru", "sr", "sr-latn", "sw", "ta", "uk-ua", "uz", "zh-tw",
];

pub fn is_long_locale(locale: Option<&str>) -> bool {
    locale.is_some_and(|l| LONG_LOCALES.contains(&l))
}

/// `(key, [(locale, text)])`. `{name}` and `{apostrophe}` are substituted.
const TRANSLATIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "statcard.title",
        &[
            ("en", "{name}'{apostrophe} GitHub Stats"),
            ("de", "{name}'{apostrophe} GitHub-Statistiken"),
        ],
    ),
    (
        "statcard.ranktitle",
        &[
            ("en", "{name}'{apostrophe} GitHub Rank"),
            ("de", "{name}'{apostrophe} GitHub-Rang"),
        ],
    ),
    (
        "statcard.totalstars",
        &[("en", "Total Stars Earned"), ("de", "Insgesamt erhaltene Sterne")],
    ),
    (
        "statcard.commits",
        &[("en", "Total Commits"), ("de", "Anzahl Commits")],
    ),
    (
        "statcard.commits-in-year",
        &[
            ("en", "Total Commits in {year}"),
            ("de", "Anzahl Commits im Jahr {year}"),
        ],
    ),
    ("statcard.prs", &[("en", "Total PRs"), ("de", "PRs Insgesamt")]),
    (
        "statcard.prs-merged",
        &[("en", "Total PRs Merged"), ("de", "Zusammengeführte PRs")],
    ),
    (
        "statcard.prs-merged-percentage",
        &[
            ("en", "Merged PRs Percentage"),
            ("de", "Prozentsatz zusammengeführter PRs"),
        ],
    ),
    (
        "statcard.reviews",
        &[("en", "Total PRs Reviewed"), ("de", "Überprüfte PRs")],
    ),
    (
        "statcard.issues",
        &[("en", "Total Issues"), ("de", "Anzahl Issues")],
    ),
    (
        "statcard.discussions-started",
        &[
            ("en", "Total Discussions Started"),
            ("de", "Gestartete Diskussionen"),
        ],
    ),
    (
        "statcard.discussions-answered",
        &[
            ("en", "Total Discussions Answered"),
            ("de", "Beantwortete Diskussionen"),
        ],
    ),
    (
        "statcard.contribs",
        &[
            ("en", "Contributed to (last year)"),
            ("de", "Beigetragen zu (letztes Jahr)"),
        ],
    ),
    ("statcard.top", &[("en", "Top"), ("de", "Top")]),
];

pub struct I18n {
    locale: String,
    name: String,
    apostrophe: &'static str,
}

impl I18n {
    /// `name` is substituted verbatim; escaping happens where text meets markup.
    pub fn new(locale: Option<&str>, name: &str) -> Self {
        let locale = match locale {
            Some(l) if is_supported(l) => l.to_string(),
            Some(l) => {
                log::warn!("locale '{l}' has no stats card translations, using {FALLBACK_LOCALE}");
                FALLBACK_LOCALE.to_string()
            }
            None => FALLBACK_LOCALE.to_string(),
        };
        let apostrophe = if name.to_lowercase().ends_with(['x', 's']) {
            ""
        } else {
            "s"
        };
        Self {
            locale,
            name: name.to_string(),
            apostrophe,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Looks up `key`, falling back to English and finally to the key itself.
    pub fn t(&self, key: &str) -> String {
        let Some((_, texts)) = TRANSLATIONS.iter().find(|(k, _)| *k == key) else {
            log::warn!("missing translation key '{key}'");
            return key.to_string();
        };
        let text = lookup(texts, &self.locale)
            .or_else(|| lookup(texts, FALLBACK_LOCALE))
            .unwrap_or(key);
        text.replace("{name}", &self.name)
            .replace("{apostrophe}", self.apostrophe)
    }
}

fn lookup<'a>(texts: &[(&str, &'a str)], locale: &str) -> Option<&'a str> {
    texts.iter().find(|(l, _)| *l == locale).map(|(_, t)| *t)
}

fn is_supported(locale: &str) -> bool {
    TRANSLATIONS[0].1.iter().any(|(l, _)| *l == locale)
}

#[cfg(test)]
#[path = "i18n_tests.rs"]
mod tests;

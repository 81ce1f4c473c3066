use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Locales the DiaCare front end ships translations for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
    Fr,
    De,
    Zh,
    Ar,
    Hi,
    Uz,
    Ru,
}

impl Locale {
    pub const ALL: [Locale; 9] = [
        Locale::En,
        Locale::Es,
        Locale::Fr,
        Locale::De,
        Locale::Zh,
        Locale::Ar,
        Locale::Hi,
        Locale::Uz,
        Locale::Ru,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::De => "de",
            Locale::Zh => "zh",
            Locale::Ar => "ar",
            Locale::Hi => "hi",
            Locale::Uz => "uz",
            Locale::Ru => "ru",
        }
    }

    /// English name of the language, as used inside prompts.
    pub fn language_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Spanish",
            Locale::Fr => "French",
            Locale::De => "German",
            Locale::Zh => "Chinese",
            Locale::Ar => "Arabic",
            Locale::Hi => "Hindi",
            Locale::Uz => "Uzbek",
            Locale::Ru => "Russian",
        }
    }

    /// Picks the best supported locale from an `Accept-Language` header value.
    ///
    /// Entries are ranked by their `q` weight; region subtags are ignored
    /// (`es-MX` matches `es`). Falls back to the default locale.
    pub fn from_accept_language(header: &str) -> Locale {
        let mut ranked: Vec<(f32, usize, Locale)> = header
            .split(',')
            .enumerate()
            .filter_map(|(position, entry)| {
                let mut parts = entry.trim().split(';');
                let tag = parts.next()?.trim();
                let quality = parts
                    .find_map(|param| param.trim().strip_prefix("q="))
                    .and_then(|q| q.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);
                let primary = tag.split(['-', '_']).next()?;
                let locale = primary.parse::<Locale>().ok()?;
                (quality > 0.0).then_some((quality, position, locale))
            })
            .collect();

        ranked.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));
        ranked
            .first()
            .map(|(_, _, locale)| *locale)
            .unwrap_or_default()
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code() == code)
            .ok_or_else(|| format!("unsupported locale: {s}"))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

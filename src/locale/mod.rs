//! Language table: flags, keyboard layouts, and localized messages
//!
//! Purely static data consumed by the engine (input filtering) and the
//! presentation layer (keyboard, messages). Adding a language means adding
//! one enum variant and one table entry.

use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// On-screen keyboard control glyph: delete last letter
pub const KEY_DELETE: char = '⌫';

/// On-screen keyboard control glyph: submit the row
pub const KEY_SUBMIT: char = '⏎';

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Language {
    #[value(name = "se")]
    Se,
    #[value(name = "enGB")]
    EnGb,
    #[value(name = "enUS")]
    EnUs,
    #[value(name = "es")]
    Es,
}

/// Presentation data for one language
pub struct Locale {
    /// Flag glyph shown in the language switcher
    pub flag: &'static str,
    /// Keyboard key glyphs in layout order, including ⌫ and ⏎
    pub keys: &'static str,
    /// Shown after a rejected guess, prefixed with the guess itself
    pub word_not_found: &'static str,
    pub won: &'static str,
    pub lost: &'static str,
    pub copied: &'static str,
    /// Label for the guess input
    pub guess_label: &'static str,
    /// Shown when the word list cannot be loaded; submission is blocked
    pub dictionary_unavailable: &'static str,
}

const SE: Locale = Locale {
    flag: "🇸🇪",
    keys: "qwertyuiopåasdfghjklöä⌫zxcvbnm⏎",
    word_not_found: "finns inte i ordlistan",
    won: "Bra jobbat! Tryck s för att dela 📋",
    lost: "Bättre lycka imorn!",
    copied: "Kopierat och redo att dela! 📋",
    guess_label: "Gissning",
    dictionary_unavailable: "ordlistan kunde inte laddas",
};

const EN_GB: Locale = Locale {
    flag: "🇬🇧",
    keys: "qwertyuiopasdfghjklzxcvbnm⌫⏎",
    word_not_found: "is not in the dictionary",
    won: "Good work! Press s to share 📋",
    lost: "Better luck tomorrow!",
    copied: "Copied and ready to share! 📋",
    guess_label: "Guess",
    dictionary_unavailable: "the dictionary could not be loaded",
};

const EN_US: Locale = Locale {
    flag: "🇺🇸",
    keys: "qwertyuiopasdfghjklzxcvbnm⌫⏎",
    word_not_found: "is not in the dictionary",
    won: "Good work! Press s to share 📋",
    lost: "Better luck tomorrow!",
    copied: "Copied and ready to share! 📋",
    guess_label: "Guess",
    dictionary_unavailable: "the dictionary could not be loaded",
};

const ES: Locale = Locale {
    flag: "🇪🇸",
    keys: "qwertyuiopasdfghjklñzxcvbnmáéíóú⌫⏎",
    word_not_found: "no está en el diccionario",
    won: "¡Buen trabajo! Pulsa s para compartir 📋",
    lost: "¡Mucha suerte para mañana!",
    copied: "¡Copiado y listo para compartir! 📋",
    guess_label: "Conjetura",
    dictionary_unavailable: "no se pudo cargar el diccionario",
};

impl Language {
    /// Every supported language, in switcher display order
    pub const ALL: [Self; 4] = [Self::Se, Self::EnGb, Self::EnUs, Self::Es];

    /// Fallback when nothing is persisted
    pub const DEFAULT: Self = Self::EnGb;

    /// Stable language code used in persistence keys and word-list file names
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Se => "se",
            Self::EnGb => "enGB",
            Self::EnUs => "enUS",
            Self::Es => "es",
        }
    }

    /// The language's static locale entry
    #[must_use]
    pub const fn locale(self) -> &'static Locale {
        match self {
            Self::Se => &SE,
            Self::EnGb => &EN_GB,
            Self::EnUs => &EN_US,
            Self::Es => &ES,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error type for unknown language codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown language code: {}", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

impl Locale {
    /// Letter glyphs of the keyboard, control keys excluded
    pub fn alphabet(&self) -> impl Iterator<Item = char> + '_ {
        self.keys
            .chars()
            .filter(|&c| c != KEY_DELETE && c != KEY_SUBMIT)
    }

    /// Whether a character (case-insensitively) belongs to this alphabet
    #[must_use]
    pub fn allows(&self, c: char) -> bool {
        c.to_lowercase().all(|lc| self.alphabet().any(|k| k == lc))
    }
}

//! List supported languages

use crate::locale::Language;
use colored::Colorize;

/// Print every supported language, marking the active one
pub fn run_languages(active: Language) {
    for language in Language::ALL {
        let marker = if language == active { "*" } else { " " };
        let line = format!("{marker} {} {}", language.locale().flag, language.code());
        if language == active {
            println!("{}", line.bold());
        } else {
            println!("{line}");
        }
    }
}

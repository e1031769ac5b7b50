// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language metadata for the language selector.
//!
//! Names and scripts for the codes CivicVoice Et ships catalogs for. Codes
//! are ISO 639-1 except Sidaamu Afoo, which only has the ISO 639-3 `sid`.
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

use serde::Serialize;

/// Writing system a language is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Latin,
    Ethiopic,
}

/// Returns the English name of a supported language code.
///
/// # Examples
/// ```
/// assert_eq!(civicvoice_i18n::i18n::language_name("am"), Some("Amharic"));
/// assert_eq!(civicvoice_i18n::i18n::language_name("xx"), None);
/// ```
pub fn language_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "am" => Some("Amharic"),
        "om" => Some("Oromo"),
        "ti" => Some("Tigrinya"),
        "so" => Some("Somali"),
        "aa" => Some("Afar"),
        "sid" => Some("Sidamo"),
        _ => None,
    }
}

/// Returns the name of a language written in its own script.
///
/// Used by the language selector so readers find their language without
/// knowing its English name.
pub fn native_name(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some("English"),
        "am" => Some("አማርኛ"),
        "om" => Some("Afaan Oromoo"),
        "ti" => Some("ትግርኛ"),
        "so" => Some("Soomaali"),
        "aa" => Some("Qafaraf"),
        "sid" => Some("Sidaamu Afoo"),
        _ => None,
    }
}

/// Script the interface copy of a language is written in.
pub fn script(code: &str) -> Option<Script> {
    match code {
        "am" | "ti" => Some(Script::Ethiopic),
        "en" | "om" | "so" | "aa" | "sid" => Some(Script::Latin),
        _ => None,
    }
}

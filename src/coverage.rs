// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation coverage report
//!
//! Counts, per language, how many declared keys have their own translation
//! and which ones fall back to English.

use crate::i18n::{self, Key, Lang, Script};
use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

/// Coverage at or above this percentage is reported as OK.
pub const OK_THRESHOLD: f64 = 80.0;

#[derive(Debug, Clone, Serialize)]
pub struct LanguageCoverage {
    pub code: String,
    pub name: String,
    pub script: Option<Script>,
    pub translated: usize,
    pub total: usize,
    pub percent: f64,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    pub created_at: String,
    pub total_keys: usize,
    pub languages: Vec<LanguageCoverage>,
}

impl CoverageReport {
    pub fn language(&self, lang: Lang) -> Option<&LanguageCoverage> {
        self.languages.iter().find(|entry| entry.code == lang.code())
    }
}

/// Build the coverage report for every supported language.
pub fn report() -> CoverageReport {
    let total = Key::ALL.len();
    let languages = Lang::all()
        .iter()
        .map(|&lang| {
            let translated = i18n::translated_keys(lang);
            let missing = Key::ALL
                .iter()
                .filter(|key| !translated.contains(*key))
                .map(|key| key.as_str().to_string())
                .collect();
            LanguageCoverage {
                code: lang.code().to_string(),
                name: i18n::language_name(lang.code())
                    .unwrap_or("unknown")
                    .to_string(),
                script: i18n::script(lang.code()),
                translated: translated.len(),
                total,
                percent: percent(translated.len(), total),
                missing,
            }
        })
        .collect();

    CoverageReport {
        created_at: chrono::Utc::now().to_rfc3339(),
        total_keys: total,
        languages,
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (part as f64 / total as f64) * 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CoverageFormat {
    Text,
    Json,
    Yaml,
}

impl CoverageFormat {
    pub fn render(&self, report: &CoverageReport) -> Result<String> {
        match self {
            CoverageFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            CoverageFormat::Yaml => Ok(serde_yaml::to_string(report)?),
            CoverageFormat::Text => Ok(format_text(report)),
        }
    }
}

fn format_text(report: &CoverageReport) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "translation coverage ({} keys)",
        report.total_keys
    ));
    lines.push(String::new());
    for entry in &report.languages {
        let tag = if entry.percent >= OK_THRESHOLD {
            "OK".green()
        } else {
            "WARN".yellow()
        };
        lines.push(format!(
            "  [{}] {:4} {:10} {:>3}/{:<3} {:5.1}%",
            tag, entry.code, entry.name, entry.translated, entry.total, entry.percent
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_complete() {
        let report = report();
        let en = report.language(Lang::En).unwrap();
        assert_eq!(en.translated, en.total);
        assert!(en.missing.is_empty());
        assert_eq!(en.percent, 100.0);
    }

    #[test]
    fn oromo_reports_missing_feedback_nav() {
        let report = report();
        let om = report.language(Lang::Om).unwrap();
        assert!(om.missing.iter().any(|k| k == "nav.feedback"));
        assert_eq!(om.translated + om.missing.len(), om.total);
    }

    #[test]
    fn every_language_is_listed() {
        assert_eq!(report().languages.len(), Lang::all().len());
    }

    #[test]
    fn json_output_is_parseable() {
        let rendered = CoverageFormat::Json.render(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["total_keys"].as_u64(), Some(Key::ALL.len() as u64));
    }

    #[test]
    fn json_output_names_script() {
        let rendered = CoverageFormat::Json.render(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        let languages = value["languages"].as_array().unwrap();
        let script_of = |code: &str| {
            languages
                .iter()
                .find(|entry| entry["code"] == code)
                .map(|entry| entry["script"].clone())
                .unwrap()
        };
        assert_eq!(script_of("am"), "ethiopic");
        assert_eq!(script_of("ti"), "ethiopic");
        assert_eq!(script_of("om"), "latin");
    }
}

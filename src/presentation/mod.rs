// SPDX-License-Identifier: PMPL-1.0-or-later

//! Presentation policy applied to the hosting document.
//!
//! Text direction is pinned to left-to-right for every language so layout
//! stays put. Amharic additionally gets a scoped style element that adjusts
//! font features and direction on text-bearing elements only.
//!
//! The override has two states, absent and present. Entering Amharic removes
//! any existing override and installs a fresh one, so reapplying never
//! duplicates it. Leaving Amharic does not remove it unless
//! [`PresentationPolicy::clear_stale_override`] is set.

use crate::i18n::{Lang, LanguageTag};

/// Element id of the Amharic style override.
pub const OVERRIDE_STYLE_ID: &str = "civicvoice-amharic-text";

/// Language that receives the style override.
pub const OVERRIDE_LANGUAGE: Lang = Lang::Am;

/// Text-bearing elements only; layout containers are left alone.
const OVERRIDE_CSS: &str = "\
p, h1, h2, h3, h4, h5, h6, span, a, label, button, li, td, th, \
input, textarea, select, option, small, strong, em {
  font-feature-settings: \"kern\" 1, \"liga\" 0;
  direction: ltr;
  unicode-bidi: isolate;
}";

/// Document direction. Every supported language is laid out left-to-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
}

impl TextDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
        }
    }
}

/// The rendering target the policy mutates.
pub trait DocumentSurface {
    /// Set the document-level direction attribute.
    fn set_direction(&mut self, direction: TextDirection);

    /// Remove every style element with `id`. Returns whether one existed.
    fn remove_style(&mut self, id: &str) -> bool;

    /// Append a style element.
    fn insert_style(&mut self, id: &str, css: &str);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentationPolicy {
    /// Remove the override when a non-Amharic language is applied.
    pub clear_stale_override: bool,
}

/// Apply the presentation policy for `tag` to `surface`.
///
/// Called once at startup and after every language change.
pub fn apply_presentation_policy<D: DocumentSurface + ?Sized>(
    surface: &mut D,
    tag: &LanguageTag,
    policy: PresentationPolicy,
) {
    surface.set_direction(TextDirection::Ltr);

    if tag.is(OVERRIDE_LANGUAGE) {
        surface.remove_style(OVERRIDE_STYLE_ID);
        surface.insert_style(OVERRIDE_STYLE_ID, OVERRIDE_CSS);
        log::debug!("installed {} style override", OVERRIDE_LANGUAGE);
    } else if policy.clear_stale_override && surface.remove_style(OVERRIDE_STYLE_ID) {
        log::debug!("removed stale {} style override", OVERRIDE_LANGUAGE);
    }
}

/// In-memory document head, for hosts without a real DOM and for tests.
#[derive(Debug, Clone, Default)]
pub struct HeadlessDocument {
    direction: Option<TextDirection>,
    styles: Vec<(String, String)>,
}

impl HeadlessDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(&self) -> Option<TextDirection> {
        self.direction
    }

    /// Number of style elements carrying `id`.
    pub fn style_count(&self, id: &str) -> usize {
        self.styles.iter().filter(|(sid, _)| sid == id).count()
    }

    pub fn has_override(&self) -> bool {
        self.style_count(OVERRIDE_STYLE_ID) > 0
    }

    /// Render the `<html>` attributes and `<head>` style elements.
    pub fn to_html(&self, lang: &LanguageTag) -> String {
        let mut out = String::new();
        out.push_str(&format!("<html lang=\"{}\"", escape_attr(lang.as_str())));
        if let Some(direction) = self.direction {
            out.push_str(&format!(" dir=\"{}\"", direction.as_str()));
        }
        out.push_str(">\n<head>\n");
        for (id, css) in &self.styles {
            out.push_str(&format!("<style id=\"{}\">\n{}\n</style>\n", escape_attr(id), css));
        }
        out.push_str("</head>\n");
        out
    }
}

impl DocumentSurface for HeadlessDocument {
    fn set_direction(&mut self, direction: TextDirection) {
        self.direction = Some(direction);
    }

    fn remove_style(&mut self, id: &str) -> bool {
        let before = self.styles.len();
        self.styles.retain(|(sid, _)| sid != id);
        self.styles.len() != before
    }

    fn insert_style(&mut self, id: &str, css: &str) {
        self.styles.push((id.to_string(), css.to_string()));
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation catalog for CivicVoice Et.
//!
//! Every key is declared once in the `keys!` invocation below together with
//! its English text, so the English table cannot be missing a key: adding a
//! [`Key`] without English copy does not compile. The other languages carry
//! partial `const` tables and fall back to English per key.
//!
//! ## Adding a new language
//!
//! 1. Add a variant to [`Lang`] and its arms in `code()` / `from_code()`
//! 2. Create a `const XX: &[(Key, &str)]` table below
//! 3. Add `Lang::Xx => XX` to the match in `catalog_for()`
//! 4. Add names and script in `iso639.rs`
//!
//! ## Adding a new key
//!
//! 1. Add a line to the `keys!` invocation (variant, dotted key, English)
//! 2. Add translations where known; missing ones fall back to English

use serde::{Deserialize, Serialize};

/// Supported interface languages.
///
/// Amharic is the designated language for the presentation override (see
/// `presentation`). English is the fallback and its table is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Am,
    Om,
    Ti,
    So,
    Aa,
    Sid,
}

impl Lang {
    /// ISO 639 code for this language (639-1 where one exists).
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Am => "am",
            Lang::Om => "om",
            Lang::Ti => "ti",
            Lang::So => "so",
            Lang::Aa => "aa",
            Lang::Sid => "sid",
        }
    }

    /// Parse a language code. Case-sensitive; returns `None` for anything
    /// outside the supported set.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "am" => Some(Lang::Am),
            "om" => Some(Lang::Om),
            "ti" => Some(Lang::Ti),
            "so" => Some(Lang::So),
            "aa" => Some(Lang::Aa),
            "sid" => Some(Lang::Sid),
            _ => None,
        }
    }

    /// All supported languages, in selector order.
    pub fn all() -> &'static [Lang] {
        &[
            Lang::En,
            Lang::Am,
            Lang::Om,
            Lang::Ti,
            Lang::So,
            Lang::Aa,
            Lang::Sid,
        ]
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::En
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The language value a session actually holds.
///
/// The setter and the startup reader do not validate codes, so the active
/// value may be a code outside [`Lang`]. Such a tag has no sub-table and
/// every lookup under it resolves through English.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LanguageTag {
    Known(Lang),
    Unknown(String),
}

impl LanguageTag {
    /// Wrap a raw code without rejecting it.
    pub fn parse(code: &str) -> Self {
        match Lang::from_code(code) {
            Some(lang) => LanguageTag::Known(lang),
            None => LanguageTag::Unknown(code.to_string()),
        }
    }

    /// The raw code, exactly as it would be persisted.
    pub fn as_str(&self) -> &str {
        match self {
            LanguageTag::Known(lang) => lang.code(),
            LanguageTag::Unknown(code) => code,
        }
    }

    pub fn lang(&self) -> Option<Lang> {
        match self {
            LanguageTag::Known(lang) => Some(*lang),
            LanguageTag::Unknown(_) => None,
        }
    }

    pub fn is(&self, lang: Lang) -> bool {
        self.lang() == Some(lang)
    }
}

impl Default for LanguageTag {
    fn default() -> Self {
        LanguageTag::Known(Lang::default())
    }
}

impl From<Lang> for LanguageTag {
    fn from(lang: Lang) -> Self {
        LanguageTag::Known(lang)
    }
}

impl From<&str> for LanguageTag {
    fn from(code: &str) -> Self {
        LanguageTag::parse(code)
    }
}

impl From<String> for LanguageTag {
    fn from(code: String) -> Self {
        match Lang::from_code(&code) {
            Some(lang) => LanguageTag::Known(lang),
            None => LanguageTag::Unknown(code),
        }
    }
}

impl std::fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Keys and English (source language) ─────────────────────────────

macro_rules! keys {
    ($($variant:ident => $key:literal : $english:literal,)*) => {
        /// A translation key. Declared together with its English text.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Key {
            $($variant,)*
        }

        impl Key {
            /// Every declared key, in declaration order.
            pub const ALL: &'static [Key] = &[$(Key::$variant,)*];

            /// The dotted key string, e.g. `"nav.home"`.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Key::$variant => $key,)*
                }
            }

            /// Resolve a dotted key string. `None` for undeclared keys.
            pub fn parse(value: &str) -> Option<Key> {
                match value {
                    $($key => Some(Key::$variant),)*
                    _ => None,
                }
            }

            /// English copy; always present.
            pub fn english(self) -> &'static str {
                match self {
                    $(Key::$variant => $english,)*
                }
            }
        }
    };
}

keys! {
    AppName => "app.name": "CivicVoice Et",
    AppTagline => "app.tagline": "Your voice shapes public service",
    // Navigation
    NavHome => "nav.home": "Home",
    NavFeedback => "nav.feedback": "Give Feedback",
    NavSectors => "nav.sectors": "Sectors",
    NavAbout => "nav.about": "About",
    NavContact => "nav.contact": "Contact",
    NavFaq => "nav.faq": "FAQ",
    NavLogin => "nav.login": "Login",
    NavRegister => "nav.register": "Register",
    NavLogout => "nav.logout": "Logout",
    NavDashboard => "nav.dashboard": "Dashboard",
    NavLanguage => "nav.language": "Language",
    // Home page
    HomeHeroTitle => "home.hero_title": "Make Your Voice Heard",
    HomeHeroSubtitle => "home.hero_subtitle": "Share feedback on government services and help improve them for everyone.",
    HomeCtaFeedback => "home.cta_feedback": "Submit Feedback",
    HomeCtaLearn => "home.cta_learn": "Learn More",
    HomeStatsSubmissions => "home.stats_submissions": "Feedback Submitted",
    HomeStatsInstitutions => "home.stats_institutions": "Institutions",
    HomeStatsResolved => "home.stats_resolved": "Issues Resolved",
    // Feedback form
    FeedbackTitle => "feedback.title": "Submit Feedback",
    FeedbackSector => "feedback.sector": "Sector",
    FeedbackInstitution => "feedback.institution": "Institution",
    FeedbackSelectSector => "feedback.select_sector": "Select a sector",
    FeedbackSelectInstitution => "feedback.select_institution": "Select an institution",
    FeedbackRating => "feedback.rating": "Rating",
    FeedbackSubject => "feedback.subject": "Subject",
    FeedbackMessage => "feedback.message": "Your Feedback",
    FeedbackAttachment => "feedback.attachment": "Attachment (optional)",
    FeedbackAnonymous => "feedback.anonymous": "Submit anonymously",
    FeedbackSubmit => "feedback.submit": "Submit",
    FeedbackSubmitting => "feedback.submitting": "Submitting...",
    FeedbackSuccess => "feedback.success": "Thank you! Your feedback has been submitted.",
    FeedbackError => "feedback.error": "Failed to submit feedback. Please try again.",
    FeedbackCharsLeft => "feedback.chars_left": "{value} characters remaining",
    // Rating scale
    RatingVeryPoor => "rating.1": "Very Poor",
    RatingPoor => "rating.2": "Poor",
    RatingAverage => "rating.3": "Average",
    RatingGood => "rating.4": "Good",
    RatingExcellent => "rating.5": "Excellent",
    // Sectors
    SectorHealth => "sector.health": "Health",
    SectorEducation => "sector.education": "Education",
    SectorTransport => "sector.transport": "Transport",
    SectorWater => "sector.water": "Water & Sanitation",
    SectorElectricity => "sector.electricity": "Electricity",
    SectorJustice => "sector.justice": "Justice",
    SectorRevenue => "sector.revenue": "Revenue & Customs",
    SectorAgriculture => "sector.agriculture": "Agriculture",
    // Authentication
    AuthLoginTitle => "auth.login_title": "Sign in to your account",
    AuthRegisterTitle => "auth.register_title": "Create an account",
    AuthFullName => "auth.full_name": "Full Name",
    AuthEmail => "auth.email": "Email",
    AuthPhone => "auth.phone": "Phone Number",
    AuthPassword => "auth.password": "Password",
    AuthConfirmPassword => "auth.confirm_password": "Confirm Password",
    AuthRegion => "auth.region": "Region",
    AuthSubmitLogin => "auth.submit_login": "Sign In",
    AuthSubmitRegister => "auth.submit_register": "Create Account",
    AuthNoAccount => "auth.no_account": "Don't have an account?",
    AuthHaveAccount => "auth.have_account": "Already have an account?",
    AuthInvalidCredentials => "auth.invalid_credentials": "Invalid email or password",
    AuthPasswordMismatch => "auth.password_mismatch": "Passwords do not match",
    AuthWelcome => "auth.welcome": "Welcome back, {value}",
    // Admin dashboard
    DashboardTitle => "dashboard.title": "Admin Dashboard",
    DashboardTotalFeedback => "dashboard.total_feedback": "Total Feedback",
    DashboardAverageRating => "dashboard.average_rating": "Average Rating",
    DashboardBySector => "dashboard.by_sector": "Feedback by Sector",
    DashboardRecent => "dashboard.recent": "Recent Submissions",
    DashboardPending => "dashboard.pending": "Pending Review",
    DashboardNoData => "dashboard.no_data": "No feedback yet",
    // Static pages
    AboutTitle => "about.title": "About CivicVoice",
    AboutMission => "about.mission": "Our Mission",
    AboutBody => "about.body": "CivicVoice Et connects citizens with the institutions that serve them, turning everyday experiences into actionable feedback.",
    ContactTitle => "contact.title": "Contact Us",
    ContactAddress => "contact.address": "Address",
    ContactSend => "contact.send": "Send Message",
    FooterRights => "footer.rights": "All rights reserved.",
    FooterPrivacy => "footer.privacy": "Privacy Policy",
    FooterTerms => "footer.terms": "Terms of Service",
    // Common
    CommonLoading => "common.loading": "Loading...",
    CommonError => "common.error": "Something went wrong",
    CommonRetry => "common.retry": "Retry",
    CommonCancel => "common.cancel": "Cancel",
    CommonSave => "common.save": "Save",
    CommonSearch => "common.search": "Search",
    CommonBack => "common.back": "Back",
    CommonRequired => "common.required": "This field is required",
    CommonOffline => "common.offline": "Server unavailable. Showing saved data.",
}

/// Marker that callers replace with a runtime value (see [`fill`]).
pub const SENTINEL: &str = "{value}";

// ─── Translation Lookup ─────────────────────────────────────────────

/// Exact match in one language's table, without fallback.
pub fn lookup(lang: Lang, key: Key) -> Option<&'static str> {
    if lang == Lang::En {
        return Some(key.english());
    }
    catalog_for(lang)
        .iter()
        .find(|(k, _)| *k == key)
        .map(|&(_, v)| v)
}

/// Typed lookup: the language's text, else English.
pub fn text(lang: Lang, key: Key) -> &'static str {
    lookup(lang, key).unwrap_or_else(|| key.english())
}

/// Look up a dotted key under the given language tag.
///
/// Precedence: the tag's own table, then English, then the key itself
/// verbatim, so a missing translation is visible instead of blank. An
/// unknown tag has no table and goes straight to English.
///
/// ```
/// use civicvoice_i18n::i18n::{translate, Lang, LanguageTag};
/// assert_eq!(translate(&Lang::En.into(), "nav.home"), "Home");
/// assert_eq!(translate(&Lang::Om.into(), "nav.feedback"), "Give Feedback");
/// assert_eq!(translate(&LanguageTag::parse("xx"), "missing.key"), "missing.key");
/// ```
pub fn translate<'a>(tag: &LanguageTag, key: &'a str) -> &'a str {
    let Some(parsed) = Key::parse(key) else {
        return key;
    };
    match tag.lang() {
        Some(lang) => text(lang, parsed),
        None => parsed.english(),
    }
}

/// Like [`translate`], but returns `fallback` when no real translation
/// exists (the chain produced an empty string or the key itself).
pub fn translate_or<'a>(tag: &LanguageTag, key: &'a str, fallback: &'a str) -> &'a str {
    let found = translate(tag, key);
    if found.is_empty() || found == key {
        fallback
    } else {
        found
    }
}

/// Replace the first [`SENTINEL`] in `template` with `value`.
///
/// There is one substitution point per string. A value that itself contains
/// the sentinel is not expanded again, and a second sentinel in the template
/// is left in place.
pub fn fill(template: &str, value: &str) -> String {
    template.replacen(SENTINEL, value, 1)
}

fn catalog_for(lang: Lang) -> &'static [(Key, &'static str)] {
    match lang {
        Lang::En => &[],
        Lang::Am => AM,
        Lang::Om => OM,
        Lang::Ti => TI,
        Lang::So => SO,
        Lang::Aa => AA,
        Lang::Sid => SID,
    }
}

/// Keys with their own entry in `lang`'s table. English covers every key.
pub fn translated_keys(lang: Lang) -> Vec<Key> {
    if lang == Lang::En {
        return Key::ALL.to_vec();
    }
    let mut keys: Vec<Key> = catalog_for(lang).iter().map(|&(k, _)| k).collect();
    keys.sort();
    keys.dedup();
    keys
}

// ─── Amharic ────────────────────────────────────────────────────────

const AM: &[(Key, &str)] = &[
    (Key::AppTagline, "ድምጽዎ የህዝብ አገልግሎትን ይቀርጻል"),
    (Key::NavHome, "መነሻ"),
    (Key::NavFeedback, "አስተያየት ይስጡ"),
    (Key::NavSectors, "ዘርፎች"),
    (Key::NavAbout, "ስለ እኛ"),
    (Key::NavContact, "ያግኙን"),
    (Key::NavFaq, "ተደጋግመው የሚጠየቁ ጥያቄዎች"),
    (Key::NavLogin, "ግባ"),
    (Key::NavRegister, "ተመዝገብ"),
    (Key::NavLogout, "ውጣ"),
    (Key::NavDashboard, "ዳሽቦርድ"),
    (Key::NavLanguage, "ቋንቋ"),
    (Key::HomeHeroTitle, "ድምጽዎን ያሰሙ"),
    (Key::HomeHeroSubtitle, "ስለ መንግስት አገልግሎቶች አስተያየትዎን ያጋሩ እና ለሁሉም እንዲሻሻሉ ያግዙ።"),
    (Key::HomeCtaFeedback, "አስተያየት ያስገቡ"),
    (Key::HomeCtaLearn, "ተጨማሪ ይወቁ"),
    (Key::HomeStatsSubmissions, "የቀረቡ አስተያየቶች"),
    (Key::HomeStatsInstitutions, "ተቋማት"),
    (Key::HomeStatsResolved, "የተፈቱ ጉዳዮች"),
    (Key::FeedbackTitle, "አስተያየት ያስገቡ"),
    (Key::FeedbackSector, "ዘርፍ"),
    (Key::FeedbackInstitution, "ተቋም"),
    (Key::FeedbackSelectSector, "ዘርፍ ይምረጡ"),
    (Key::FeedbackSelectInstitution, "ተቋም ይምረጡ"),
    (Key::FeedbackRating, "ደረጃ"),
    (Key::FeedbackSubject, "ርዕስ"),
    (Key::FeedbackMessage, "አስተያየትዎ"),
    (Key::FeedbackAttachment, "አባሪ (አማራጭ)"),
    (Key::FeedbackAnonymous, "ማንነትን ሳይገልጹ ያስገቡ"),
    (Key::FeedbackSubmit, "አስገባ"),
    (Key::FeedbackSubmitting, "በማስገባት ላይ..."),
    (Key::FeedbackSuccess, "እናመሰግናለን! አስተያየትዎ ገብቷል።"),
    (Key::FeedbackError, "አስተያየቱን ማስገባት አልተቻለም። እባክዎ እንደገና ይሞክሩ።"),
    (Key::FeedbackCharsLeft, "{value} ቁምፊዎች ቀርተዋል"),
    (Key::RatingVeryPoor, "በጣም ደካማ"),
    (Key::RatingPoor, "ደካማ"),
    (Key::RatingAverage, "መካከለኛ"),
    (Key::RatingGood, "ጥሩ"),
    (Key::RatingExcellent, "በጣም ጥሩ"),
    (Key::SectorHealth, "ጤና"),
    (Key::SectorEducation, "ትምህርት"),
    (Key::SectorTransport, "ትራንስፖርት"),
    (Key::SectorWater, "ውሃ እና ሳኒቴሽን"),
    (Key::SectorElectricity, "ኤሌክትሪክ"),
    (Key::SectorJustice, "ፍትህ"),
    (Key::SectorRevenue, "ገቢዎች እና ጉምሩክ"),
    (Key::SectorAgriculture, "ግብርና"),
    (Key::AuthLoginTitle, "ወደ መለያዎ ይግቡ"),
    (Key::AuthRegisterTitle, "መለያ ይፍጠሩ"),
    (Key::AuthFullName, "ሙሉ ስም"),
    (Key::AuthEmail, "ኢሜይል"),
    (Key::AuthPhone, "ስልክ ቁጥር"),
    (Key::AuthPassword, "የይለፍ ቃል"),
    (Key::AuthConfirmPassword, "የይለፍ ቃል ያረጋግጡ"),
    (Key::AuthRegion, "ክልል"),
    (Key::AuthSubmitLogin, "ግባ"),
    (Key::AuthSubmitRegister, "መለያ ፍጠር"),
    (Key::AuthNoAccount, "መለያ የለዎትም?"),
    (Key::AuthHaveAccount, "መለያ አለዎት?"),
    (Key::AuthInvalidCredentials, "ልክ ያልሆነ ኢሜይል ወይም የይለፍ ቃል"),
    (Key::AuthPasswordMismatch, "የይለፍ ቃሎቹ አይመሳሰሉም"),
    (Key::AuthWelcome, "እንኳን ደህና መጡ፣ {value}"),
    (Key::DashboardTitle, "የአስተዳዳሪ ዳሽቦርድ"),
    (Key::DashboardTotalFeedback, "ጠቅላላ አስተያየቶች"),
    (Key::DashboardAverageRating, "አማካይ ደረጃ"),
    (Key::DashboardBySector, "አስተያየቶች በዘርፍ"),
    (Key::DashboardRecent, "የቅርብ ጊዜ አስተያየቶች"),
    (Key::DashboardPending, "በግምገማ ላይ"),
    (Key::DashboardNoData, "እስካሁን ምንም አስተያየት የለም"),
    (Key::AboutTitle, "ስለ ሲቪክቮይስ"),
    (Key::AboutMission, "ተልዕኳችን"),
    (Key::ContactTitle, "ያግኙን"),
    (Key::ContactAddress, "አድራሻ"),
    (Key::ContactSend, "መልዕክት ላክ"),
    (Key::FooterRights, "መብቱ በህግ የተጠበቀ ነው።"),
    (Key::FooterPrivacy, "የግላዊነት ፖሊሲ"),
    (Key::FooterTerms, "የአገልግሎት ውል"),
    (Key::CommonLoading, "በመጫን ላይ..."),
    (Key::CommonError, "የሆነ ችግር ተፈጥሯል"),
    (Key::CommonRetry, "እንደገና ሞክር"),
    (Key::CommonCancel, "ሰርዝ"),
    (Key::CommonSave, "አስቀምጥ"),
    (Key::CommonSearch, "ፈልግ"),
    (Key::CommonBack, "ተመለስ"),
    (Key::CommonRequired, "ይህ መስክ አስፈላጊ ነው"),
    (Key::CommonOffline, "አገልጋዩ አይገኝም። የተቀመጠ መረጃ እየታየ ነው።"),
];

// ─── Afaan Oromoo ───────────────────────────────────────────────────

const OM: &[(Key, &str)] = &[
    (Key::NavHome, "Fuula Jalqabaa"),
    (Key::NavSectors, "Dameewwan"),
    (Key::NavAbout, "Waa'ee Keenya"),
    (Key::NavContact, "Nu Quunnamaa"),
    (Key::NavLogin, "Seeni"),
    (Key::NavRegister, "Galmaa'i"),
    (Key::NavLogout, "Ba'i"),
    (Key::NavLanguage, "Afaan"),
    (Key::HomeHeroTitle, "Sagalee Kee Dhageessisi"),
    (Key::HomeCtaLearn, "Dabalata Baradhu"),
    (Key::FeedbackSector, "Damee"),
    (Key::FeedbackInstitution, "Dhaabbata"),
    (Key::FeedbackRating, "Sadarkaa"),
    (Key::FeedbackSubmit, "Ergi"),
    (Key::SectorHealth, "Fayyaa"),
    (Key::SectorEducation, "Barnoota"),
    (Key::SectorWater, "Bishaan fi Qulqullina"),
    (Key::SectorAgriculture, "Qonna"),
    (Key::AuthFullName, "Maqaa Guutuu"),
    (Key::AuthEmail, "Imeelii"),
    (Key::AuthPassword, "Jecha Icciitii"),
    (Key::CommonLoading, "Fe'aa jira..."),
    (Key::CommonCancel, "Haqi"),
    (Key::CommonSave, "Olkaa'i"),
    (Key::CommonSearch, "Barbaadi"),
    (Key::CommonBack, "Deebi'i"),
];

// ─── Tigrinya ───────────────────────────────────────────────────────

const TI: &[(Key, &str)] = &[
    (Key::NavHome, "መበገሲ"),
    (Key::NavFeedback, "ርእይቶ ሃቡ"),
    (Key::NavAbout, "ብዛዕባና"),
    (Key::NavContact, "ርኸቡና"),
    (Key::NavLogin, "እቶ"),
    (Key::NavRegister, "ተመዝገብ"),
    (Key::NavLogout, "ውጻእ"),
    (Key::NavLanguage, "ቋንቋ"),
    (Key::FeedbackSector, "ዘርፊ"),
    (Key::FeedbackInstitution, "ትካል"),
    (Key::FeedbackSubmit, "ኣእቱ"),
    (Key::SectorHealth, "ጥዕና"),
    (Key::SectorEducation, "ትምህርቲ"),
    (Key::SectorAgriculture, "ሕርሻ"),
    (Key::CommonLoading, "ይጽዕን ኣሎ..."),
    (Key::CommonCancel, "ሰርዝ"),
    (Key::CommonSearch, "ድለ"),
];

// ─── Somali ─────────────────────────────────────────────────────────

const SO: &[(Key, &str)] = &[
    (Key::NavHome, "Hoyga"),
    (Key::NavFeedback, "Bixi Jawaab Celin"),
    (Key::NavAbout, "Nagu Saabsan"),
    (Key::NavContact, "Nala Soo Xiriir"),
    (Key::NavLogin, "Gal"),
    (Key::NavRegister, "Is Diiwaangeli"),
    (Key::NavLogout, "Ka Bax"),
    (Key::NavDashboard, "Dashboodhka"),
    (Key::NavLanguage, "Luqadda"),
    (Key::FeedbackSector, "Qaybta"),
    (Key::FeedbackInstitution, "Hay'adda"),
    (Key::FeedbackRating, "Qiimeyn"),
    (Key::FeedbackSubmit, "Gudbi"),
    (Key::SectorHealth, "Caafimaadka"),
    (Key::SectorEducation, "Waxbarashada"),
    (Key::SectorTransport, "Gaadiidka"),
    (Key::SectorAgriculture, "Beeraha"),
    (Key::AuthEmail, "Iimayl"),
    (Key::AuthPassword, "Furaha Sirta"),
    (Key::AuthPhone, "Lambarka Taleefanka"),
    (Key::CommonLoading, "Waa la soo rarayaa..."),
    (Key::CommonCancel, "Jooji"),
    (Key::CommonSave, "Keydi"),
    (Key::CommonSearch, "Raadi"),
    (Key::CommonBack, "Dib u noqo"),
];

// ─── Afar ───────────────────────────────────────────────────────────

const AA: &[(Key, &str)] = &[
    (Key::NavHome, "Buxa"),
    (Key::NavAbout, "Nee Baxsa"),
    (Key::NavLanguage, "Af"),
    (Key::SectorHealth, "Qaafiyat"),
];

// ─── Sidaamu Afoo ───────────────────────────────────────────────────

const SID: &[(Key, &str)] = &[
    (Key::NavHome, "Mine"),
    (Key::NavLanguage, "Afoo"),
    (Key::SectorHealth, "Fayya"),
    (Key::SectorEducation, "Rosiisha"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_keys_all_resolve() {
        for key in Key::ALL {
            let result = text(Lang::En, *key);
            assert!(!result.is_empty(), "EN key '{}' should resolve", key.as_str());
        }
    }

    #[test]
    fn dotted_keys_are_unique_and_parse_back() {
        let mut seen = std::collections::HashSet::new();
        for key in Key::ALL {
            assert!(seen.insert(key.as_str()), "duplicate key {}", key.as_str());
            assert_eq!(Key::parse(key.as_str()), Some(*key));
        }
    }

    #[test]
    fn partial_tables_have_no_duplicate_entries() {
        for lang in Lang::all() {
            let table = catalog_for(*lang);
            assert_eq!(
                translated_keys(*lang).len(),
                if *lang == Lang::En { Key::ALL.len() } else { table.len() },
                "{:?} table lists a key twice",
                lang
            );
        }
    }

    #[test]
    fn amharic_lookup() {
        assert_eq!(text(Lang::Am, Key::NavHome), "መነሻ");
        assert_eq!(lookup(Lang::Am, Key::AppName), None);
        assert_eq!(text(Lang::Am, Key::AppName), "CivicVoice Et");
    }

    #[test]
    fn oromo_lacks_feedback_nav() {
        assert_eq!(lookup(Lang::Om, Key::NavFeedback), None);
        assert_eq!(text(Lang::Om, Key::NavFeedback), "Give Feedback");
    }

    #[test]
    fn unknown_tag_falls_through_to_english() {
        let tag = LanguageTag::parse("fr");
        assert_eq!(translate(&tag, "nav.home"), "Home");
    }

    #[test]
    fn unknown_key_returns_key() {
        assert_eq!(translate(&Lang::Am.into(), "nonexistent.key"), "nonexistent.key");
        assert_eq!(translate(&Lang::En.into(), ""), "");
    }

    #[test]
    fn translate_or_uses_fallback_only_when_missing() {
        let en = LanguageTag::from(Lang::En);
        assert_eq!(translate_or(&en, "nonexistent.key", "Default Text"), "Default Text");
        assert_eq!(translate_or(&en, "", "Default Text"), "Default Text");
        assert_eq!(translate_or(&en, "nav.home", "Default Text"), "Home");
    }

    #[test]
    fn fill_replaces_only_first_sentinel() {
        assert_eq!(
            fill(text(Lang::En, Key::AuthWelcome), "Abebe"),
            "Welcome back, Abebe"
        );
        assert_eq!(fill("{value} and {value}", "x"), "x and {value}");
        assert_eq!(fill("no marker", "x"), "no marker");
    }

    #[test]
    fn lang_roundtrip() {
        for lang in Lang::all() {
            let parsed = Lang::from_code(lang.code()).expect("should parse");
            assert_eq!(*lang, parsed);
        }
        assert_eq!(Lang::from_code("AM"), None);
    }

    #[test]
    fn language_tag_keeps_raw_code() {
        let tag = LanguageTag::from("zz".to_string());
        assert_eq!(tag.as_str(), "zz");
        assert_eq!(tag.lang(), None);
        assert!(LanguageTag::parse("am").is(Lang::Am));
    }
}

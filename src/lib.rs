// SPDX-License-Identifier: PMPL-1.0-or-later

//! CivicVoice Et localization core.
//!
//! The citizen-feedback frontend renders every string through this crate.
//!
//! PILLARS:
//! 1. **i18n**: the immutable translation table and its fallback chain
//!    (active language, then English, then the key itself).
//! 2. **session**: the active language for one session, read from durable
//!    storage at startup and written through on every change.
//! 3. **presentation**: the document policy run after each change (text
//!    direction pinned to LTR, Amharic style override).
//!
//! `host` composes the three for a UI layer.

pub mod config;
pub mod coverage;
pub mod error;
pub mod host;
pub mod i18n;
pub mod presentation;
pub mod session;
pub mod storage;

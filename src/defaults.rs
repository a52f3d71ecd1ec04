//! Default values for lflist-sync configuration.
//!
//! These reproduce the stock sync job; every value can be overridden from a
//! YAML configuration file.

use std::path::PathBuf;

/// Sections to publish, in output order.
pub const PRIORITY_TABLE: [&str; 21] = [
    "2024.12 TCG",
    "2005.4 GOAT",
    "2024.10.01 Rush Prereleases",
    "2024.07 Speed Duel",
    "2024.09 Traditional",
    "2024.09 World",
    "Edison(PreErrata)",
    "2014.4 HAT",
    "JTP (Original)",
    "GX-Marzo-2008",
    "2011.09 Tengu Plant",
    "MD 08.2024",
    "2024.05 TDG",
    "2019.10 Eterno",
    "2015.4 Duel Terminal",
    "2008.03 DAD Return",
    "MDC - Evolution S6",
    "2024.10 KS",
    "2024.9 TCG KS",
    "2025.01 OCG",
    "JTP (AllCards)",
];

/// Repository holding the authoritative list file.
pub const AUTHORITATIVE_URL: &str = "https://github.com/fallenstardust/YGOMobile-cn-ko-en";

/// Path of the authoritative list file inside its repository.
pub const AUTHORITATIVE_FILE: &str = "mobile/assets/data/conf/lflist.conf";

/// Directory sources consulted after the authoritative file, as (name, url).
pub const FALLBACK_SOURCES: [(&str, &str); 2] = [
    ("comparison", "https://github.com/termitaklk/lflist"),
    ("ignis", "https://github.com/ProjectIgnis/LFLists"),
];

pub const DESTINATION_URL: &str = "https://github.com/termitaklk/koishi-Iflist-clients";
pub const DESTINATION_BRANCH: &str = "main";
pub const DESTINATION_REMOTE: &str = "origin";
pub const OUTPUT_FILE: &str = "lflist.conf";
pub const COMMIT_MESSAGE: &str = "Update lflist.conf with the latest changes";
pub const COMMITTER_NAME: &str = "GitHub Action";
pub const COMMITTER_EMAIL: &str = "action@github.com";

/// Environment variable carrying the destination push token.
pub const TOKEN_ENV: &str = "TOKEN";

/// Returns the default work directory for clones and staged output.
///
/// Uses the platform cache directory (`~/.cache/lflist-sync` on Linux) and
/// falls back to `.lflist-sync` in the current directory.
pub fn default_workdir() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("lflist-sync"))
        .unwrap_or_else(|| PathBuf::from(".lflist-sync"))
}

use std::path::Path;

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};

use super::schema::Settings;

/// Path inclusion rules: a blacklist that always wins and a whitelist that,
/// when non-empty, a path must match at least once.
///
/// Matching is case-insensitive and runs on the path with `\` normalized to
/// `/`, so the same patterns work for Windows and Unix sources.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    whitelist: Vec<Regex>,
    blacklist: Vec<Regex>,
}

impl Filter {
    pub fn new<S: AsRef<str>>(whitelist: &[S], blacklist: &[S]) -> Result<Self> {
        Ok(Self {
            whitelist: compile(whitelist)?,
            blacklist: compile(blacklist)?,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::new(&settings.effective_whitelist(), &settings.file_blacklist)
    }

    pub fn blacklisted(&self, path: &Path) -> bool {
        let path = normalize(path);
        self.blacklist.iter().any(|re| re.is_match(&path))
    }

    pub fn file_allowed(&self, path: &Path) -> bool {
        if self.blacklisted(path) {
            return false;
        }
        if self.whitelist.is_empty() {
            return true;
        }
        let path = normalize(path);
        self.whitelist.iter().any(|re| re.is_match(&path))
    }
}

fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| {
            let p = p.as_ref();
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .map_err(|source| Error::Pattern {
                    pattern: p.to_string(),
                    source,
                })
        })
        .collect()
}

fn normalize(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

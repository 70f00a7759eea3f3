//! Rule types

use regex::Regex;

use crate::config::RuleToggles;

/// Which switch, if any, controls a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleGate {
    /// Always applied
    Always,
    Boardgames,
    Kids,
    Racing,
    Sports,
    Rereleases,
    Video,
}

impl RuleGate {
    /// Whether the rule runs under the given toggles.
    pub fn enabled(self, toggles: &RuleToggles) -> bool {
        match self {
            Self::Always => true,
            Self::Boardgames => toggles.boardgames,
            Self::Kids => toggles.kids,
            Self::Racing => toggles.racing,
            Self::Sports => toggles.sports,
            Self::Rereleases => toggles.rereleases,
            Self::Video => toggles.video,
        }
    }
}

/// A named exclusion rule over raw entry names.
#[derive(Debug, Clone)]
pub struct CategoryRule {
    /// Stable identifier used in logs
    pub name: &'static str,
    /// Switch controlling the rule
    pub gate: RuleGate,
    pattern: &'static Regex,
}

impl CategoryRule {
    pub fn new(name: &'static str, gate: RuleGate, pattern: &'static Regex) -> Self {
        Self {
            name,
            gate,
            pattern,
        }
    }

    /// True if the entry should be excluded by this rule.
    pub fn matches(&self, entry: &str) -> bool {
        self.pattern.is_match(entry)
    }
}

//! List building: classification, revision resolution and override merge

use std::collections::BTreeSet;

use crate::config::RuleToggles;
use crate::normalize::NameNormalizer;
use crate::revision::RevisionResolver;
use crate::rules::RuleSet;
use crate::store::{CategoryLists, ListStore, Overrides};
use crate::Result;

/// Produces the final include/exclude partition of a category.
#[derive(Debug, Clone)]
pub struct ListBuilder {
    rules: RuleSet,
    normalizer: NameNormalizer,
    resolver: RevisionResolver,
    toggles: RuleToggles,
}

impl ListBuilder {
    pub fn new(toggles: RuleToggles) -> Self {
        Self {
            rules: RuleSet::builtin(),
            normalizer: NameNormalizer::new(),
            resolver: RevisionResolver::new(),
            toggles,
        }
    }

    /// Compute the final lists from a directory listing and its overrides.
    ///
    /// Custom-include entries always end up in the include list, even when a
    /// rule or the custom-exclude file names them too.
    pub fn partition<I, S>(&self, raw_entries: I, overrides: &Overrides) -> CategoryLists
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let classification = self
            .rules
            .classify(raw_entries, &self.normalizer, &self.toggles);
        let resolution = self
            .resolver
            .resolve(&classification.include, &classification.entries);

        let mut exclude: BTreeSet<String> = classification.exclude;
        exclude.extend(resolution.exclude);
        exclude.extend(overrides.exclude.iter().cloned());

        let mut include: BTreeSet<String> =
            resolution.include.difference(&exclude).cloned().collect();
        include.extend(overrides.include.iter().cloned());

        let exclude: BTreeSet<String> = exclude.difference(&include).cloned().collect();

        CategoryLists {
            include: include.into_iter().collect(),
            exclude: exclude.into_iter().collect(),
        }
    }

    /// Classify the category directory behind `store` and persist the lists.
    pub fn build(&self, category: &str, store: &ListStore) -> Result<CategoryLists> {
        let raw = store.raw_entries()?;
        let overrides = store.read_overrides()?;
        let lists = self.partition(&raw, &overrides);

        store.write_lists(&lists)?;
        tracing::info!(
            "{category}: whitelist generated ({} entries)",
            lists.include.len()
        );
        tracing::info!(
            "{category}: blacklist generated ({} entries)",
            lists.exclude.len()
        );

        Ok(lists)
    }
}

impl Default for ListBuilder {
    fn default() -> Self {
        Self::new(RuleToggles::default())
    }
}

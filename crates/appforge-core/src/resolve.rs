//! Dependency resolution
//!
//! A `DependencySet` is an ordered sequence of package names built in three
//! layers with one fixed order: framework defaults, then add-on packages,
//! then user-supplied extras. Catalog-driven additions are deduplicated
//! against the whole set (first occurrence wins). User extras are only
//! deduplicated against the original default list.

use crate::catalog::Framework;

#[derive(Debug, Clone)]
pub struct DependencySet {
    items: Vec<String>,
    defaults_len: usize,
}

impl DependencySet {
    /// Start from the framework's default dependency list, order preserved.
    pub fn for_framework(framework: Framework) -> Self {
        Self::from_defaults(framework.default_dependencies())
    }

    pub fn from_defaults(defaults: &[&str]) -> Self {
        let items: Vec<String> = defaults.iter().map(|d| d.to_string()).collect();
        let defaults_len = items.len();
        Self {
            items,
            defaults_len,
        }
    }

    /// Append a catalog-driven package, silently dropping duplicates.
    pub fn add(&mut self, dependency: &str) {
        if !self.items.iter().any(|d| d == dependency) {
            self.items.push(dependency.to_string());
        }
    }

    pub fn extend_from(&mut self, dependencies: &[String]) {
        for dependency in dependencies {
            self.add(dependency);
        }
    }

    /// Merge the user's free-text extra-dependency input.
    ///
    /// Commas are normalized to spaces, the input is split on whitespace,
    /// and empty tokens are discarded. A token is appended unless it is
    /// already present in the original default list; tokens are not checked
    /// against each other or against add-on packages.
    pub fn merge_extra_input(&mut self, raw: &str) {
        let normalized = raw.replace(',', " ");
        let defaults = &self.items[..self.defaults_len];
        let additions: Vec<String> = normalized
            .split_whitespace()
            .filter(|token| !defaults.iter().any(|d| d == token))
            .map(str::to_string)
            .collect();
        self.items.extend(additions);
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Space-joined list, as handed to the package manager.
    pub fn join(&self) -> String {
        self.items.join(" ")
    }
}

/// `resolve(framework, rawExtraInput) -> DependencySet`
///
/// The add-on-free shape of the resolver: defaults plus user extras.
/// The full pipeline inserts add-on packages between the two layers.
pub fn resolve(framework: Framework, raw_extra: &str) -> DependencySet {
    let mut set = DependencySet::for_framework(framework);
    set.merge_extra_input(raw_extra);
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(set: &DependencySet) -> Vec<&str> {
        set.as_slice().iter().map(String::as_str).collect()
    }

    #[test]
    fn empty_extra_input_returns_defaults_in_order() {
        for framework in Framework::ALL {
            let set = resolve(framework, "");
            assert_eq!(names(&set), framework.default_dependencies());
        }
    }

    #[test]
    fn whitespace_only_input_yields_no_additions() {
        let set = resolve(Framework::Express, "   \t  ");
        assert_eq!(names(&set), Framework::Express.default_dependencies());
    }

    #[test]
    fn commas_are_equivalent_to_spaces() {
        let with_commas = resolve(Framework::React, "lodash, axios");
        let with_spaces = resolve(Framework::React, "lodash axios");
        assert_eq!(with_commas.as_slice(), with_spaces.as_slice());
    }

    #[test]
    fn default_tokens_never_appear_twice() {
        let set = resolve(Framework::Express, "express express lodash express");
        assert_eq!(names(&set), ["express", "dotenv", "cors", "lodash"]);
    }

    #[test]
    fn user_tokens_are_not_deduplicated_against_each_other() {
        let set = resolve(Framework::Express, "lodash lodash");
        assert_eq!(names(&set), ["express", "dotenv", "cors", "lodash", "lodash"]);
    }

    #[test]
    fn addon_packages_deduplicate_first_occurrence_wins() {
        let mut set = DependencySet::for_framework(Framework::Express);
        set.add("sequelize");
        set.add("pg");
        set.add("sequelize");
        set.add("express");
        assert_eq!(names(&set), ["express", "dotenv", "cors", "sequelize", "pg"]);
    }

    #[test]
    fn extras_merge_after_addons_but_dedupe_against_defaults_only() {
        let mut set = DependencySet::for_framework(Framework::React);
        set.add("bootstrap");
        set.merge_extra_input("bootstrap react lodash");
        assert_eq!(
            names(&set),
            ["react", "react-dom", "react-scripts", "bootstrap", "bootstrap", "lodash"]
        );
    }

    #[test]
    fn join_is_space_delimited() {
        let set = resolve(Framework::Hapi, "lodash");
        assert_eq!(set.join(), "@hapi/hapi dotenv lodash");
    }
}

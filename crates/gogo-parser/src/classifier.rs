use crate::patterns::{CategoryPatterns, PatternLibrary};
use gogo_common::Category;
use regex::Captures;
use tracing::debug;

/// Maps raw command text to exactly one category.
///
/// Categories are tested in library order and patterns within a category in
/// list order; the first match wins. Text matching nothing is `Unknown`.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    library: &'a PatternLibrary,
}

impl Default for Classifier<'static> {
    fn default() -> Self {
        Self::new(PatternLibrary::builtin())
    }
}

impl<'a> Classifier<'a> {
    pub fn new(library: &'a PatternLibrary) -> Self {
        Self { library }
    }

    pub fn classify(&self, command: &str) -> Category {
        let category = self
            .first_match(command)
            .map(|(entry, _)| entry.category)
            .unwrap_or(Category::Unknown);
        debug!(%category, command, "classified command");
        category
    }

    /// The winning entry and its captures, if any pattern matches.
    pub fn first_match<'h>(
        &self,
        command: &'h str,
    ) -> Option<(&'a CategoryPatterns, Captures<'h>)> {
        self.library
            .entries()
            .iter()
            .find_map(|entry| entry.first_match(command).map(|caps| (entry, caps)))
    }
}

/// Classify with the builtin pattern library.
pub fn classify(command: &str) -> Category {
    Classifier::default().classify(command)
}

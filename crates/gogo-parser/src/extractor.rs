use crate::patterns::PatternLibrary;
use gogo_common::Category;
use tracing::debug;

/// Pulls the detail (destination, search term, tab or page name) out of a
/// command by re-applying the category's patterns.
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'a> {
    library: &'a PatternLibrary,
}

impl Default for Extractor<'static> {
    fn default() -> Self {
        Self::new(PatternLibrary::builtin())
    }
}

impl<'a> Extractor<'a> {
    pub fn new(library: &'a PatternLibrary) -> Self {
        Self { library }
    }

    /// Never fails: returns `command` unchanged when nothing can be captured.
    pub fn extract(&self, command: &str, category: Category) -> String {
        let Some(entry) = self.library.get(category) else {
            return command.to_string();
        };

        let detail = entry
            .first_match(command)
            .and_then(|caps| entry.capture.select(&caps).map(clean_detail))
            .filter(|d| !d.is_empty());

        match detail {
            Some(d) => d,
            None => {
                debug!(%category, command, "no capture, falling back to raw command");
                command.to_string()
            }
        }
    }
}

/// Extract with the builtin pattern library.
pub fn extract(command: &str, category: Category) -> String {
    Extractor::default().extract(command, category)
}

fn clean_detail(raw: &str) -> String {
    raw.trim()
        .trim_end_matches(['?', '!', '.'])
        .trim_end()
        .to_string()
}

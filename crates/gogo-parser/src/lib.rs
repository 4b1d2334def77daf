pub mod classifier;
pub mod extractor;
pub mod patterns;

pub use classifier::{classify, Classifier};
pub use extractor::{extract, Extractor};
pub use patterns::{CaptureSelection, CategoryPatterns, PatternError, PatternLibrary};

use gogo_common::{ClassifiedCommand, Command};

/// Run a command through classification and extraction.
pub fn process(library: &PatternLibrary, command: Command) -> ClassifiedCommand {
    let category = Classifier::new(library).classify(command.text());
    let detail = Extractor::new(library).extract(command.text(), category);
    ClassifiedCommand {
        command,
        category,
        detail,
    }
}

/// Shorthand for [`process`] with the builtin library on freshly received text.
pub fn process_text(text: &str) -> ClassifiedCommand {
    process(PatternLibrary::builtin(), Command::new(text))
}

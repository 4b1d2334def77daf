//! Pattern library
//!
//! An ordered table of `(category, patterns)` entries. Entry order is the
//! classification priority: specific command shapes ("open the X tab") sit
//! before looser ones ("go to X") so the looser pattern cannot swallow them.

use gogo_common::Category;
use lazy_static::lazy_static;
use regex::{Captures, Regex, RegexBuilder};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid pattern for {category}: {pattern}: {source}")]
    InvalidRegex {
        category: Category,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Category {0} appears more than once in the pattern library")]
    DuplicateCategory(Category),

    #[error("The unknown category is the fallback and cannot carry patterns")]
    UnknownCategory,

    #[error("No patterns given for {0}")]
    Empty(Category),
}

/// Which capture group carries the meaningful detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureSelection {
    /// The detail leads the command ("find <coffee shops> near me").
    First,
    /// The detail trails extra words ("navigate to <the airport>").
    Last,
}

impl CaptureSelection {
    pub fn select<'h>(&self, caps: &Captures<'h>) -> Option<&'h str> {
        let mut groups = caps
            .iter()
            .skip(1)
            .flatten()
            .map(|m| m.as_str())
            .filter(|s| !s.trim().is_empty());
        match self {
            CaptureSelection::First => groups.next(),
            CaptureSelection::Last => groups.last(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CategoryPatterns {
    pub category: Category,
    pub capture: CaptureSelection,
    pub patterns: Vec<Regex>,
}

impl CategoryPatterns {
    /// First pattern (in list order) matching `command`.
    pub fn first_match<'h>(&self, command: &'h str) -> Option<Captures<'h>> {
        self.patterns.iter().find_map(|re| re.captures(command))
    }
}

/// Pattern definition as plain data: category, capture selection, regex sources.
pub type PatternDefinition<'a> = (Category, CaptureSelection, &'a [&'a str]);

#[derive(Debug, Clone)]
pub struct PatternLibrary {
    entries: Vec<CategoryPatterns>,
}

impl PatternLibrary {
    /// Build a library from definitions; definition order becomes priority order.
    /// Patterns are compiled case-insensitive.
    pub fn from_definitions(definitions: &[PatternDefinition<'_>]) -> Result<Self, PatternError> {
        let mut entries: Vec<CategoryPatterns> = Vec::with_capacity(definitions.len());

        for (category, capture, sources) in definitions {
            if *category == Category::Unknown {
                return Err(PatternError::UnknownCategory);
            }
            if entries.iter().any(|e| e.category == *category) {
                return Err(PatternError::DuplicateCategory(*category));
            }
            if sources.is_empty() {
                return Err(PatternError::Empty(*category));
            }

            let patterns = sources
                .iter()
                .map(|src| {
                    RegexBuilder::new(src)
                        .case_insensitive(true)
                        .build()
                        .map_err(|source| PatternError::InvalidRegex {
                            category: *category,
                            pattern: src.to_string(),
                            source,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;

            entries.push(CategoryPatterns {
                category: *category,
                capture: *capture,
                patterns,
            });
        }

        Ok(Self { entries })
    }

    pub fn builtin() -> &'static PatternLibrary {
        &BUILTIN
    }

    pub fn entries(&self) -> &[CategoryPatterns] {
        &self.entries
    }

    pub fn get(&self, category: Category) -> Option<&CategoryPatterns> {
        self.entries.iter().find(|e| e.category == category)
    }

    /// Categories in the order they are tested.
    pub fn priority(&self) -> Vec<Category> {
        self.entries.iter().map(|e| e.category).collect()
    }
}

const TAB_CONTROL: &[&str] = &[
    r"\b(?:open|switch\s+to|go\s+to|change\s+to|show(?:\s+me)?|select)\s+(?:the\s+)?(\w+)\s+tab(?:\s+please)?\s*[.!?]*\s*$",
    r"^\s*(?:the\s+)?(\w+)\s+tab\s*[.!?]*\s*$",
];

const APP_NAVIGATION: &[&str] = &[
    r"\b(?:open|go\s+to|take\s+me\s+to|show(?:\s+me)?|navigate\s+to|bring\s+up)\s+(?:the\s+|my\s+)?(\w+(?:\s+\w+)?)\s+(?:page|screen|section)(?:\s+please)?\s*[.!?]*\s*$",
    r"^\s*(?:open|launch|show(?:\s+me)?)\s+(?:the\s+|my\s+)?(home|map|explore|rides?|cargo|delivery|transport|transit|provider|driver|wallet|admin|analytics|assistant|chat)\s*[.!?]*\s*$",
];

const WEB_NAVIGATION: &[&str] = &[
    r"\bsearch\s+(?:on\s+)?(?:the\s+web|the\s+internet|online|google|web)\s+for\s+(.+)$",
    r"\bopen\s+(?:a\s+)?(?:new\s+)?(?:browser\s+)?tab\s+(for|with|about)\s+(.+)$",
    r"^\s*(?:google|look\s+up\s+online)\s+(.+)$",
];

const NAVIGATION: &[&str] = &[
    r"\b(navigate|take\s+me|drive\s+me|get\s+me|directions|route|go)\s+to\s+(.+)$",
    r"\bhow\s+(?:do|can)\s+i\s+get\s+to\s+(.+)$",
    r"\b(book\s+a\s+ride|ride|trip)\s+to\s+(.+)$",
];

const SEARCH: &[&str] = &[
    r"^\s*(?:find|search\s+for|search|look\s+for|locate)\s+(?:me\s+)?(.+?)(?:\s+(?:near\s+me|nearby|around\s+here))?\s*[.!?]*\s*$",
    r"\bwhere\s+(?:is|are)\s+(?:the\s+)?(?:nearest|closest)\s+(.+?)\s*[.!?]*\s*$",
    r"\bshow\s+me\s+(?:nearby|the\s+nearest)\s+(.+?)\s*[.!?]*\s*$",
];

const SETTINGS: &[&str] = &[
    r"\b(settings?|preferences|configure|dark\s+mode|light\s+mode|language|notifications)\b",
];

const HELP: &[&str] = &[
    r"\b(help|what\s+can\s+you\s+do|how\s+does\s+this\s+work|commands)\b",
];

/// Builtin definitions in classification priority order.
pub const BUILTIN_DEFINITIONS: &[PatternDefinition<'static>] = &[
    (Category::TabControl, CaptureSelection::First, TAB_CONTROL),
    (Category::AppNavigation, CaptureSelection::First, APP_NAVIGATION),
    (Category::WebNavigation, CaptureSelection::Last, WEB_NAVIGATION),
    (Category::Navigation, CaptureSelection::Last, NAVIGATION),
    (Category::Search, CaptureSelection::First, SEARCH),
    (Category::Settings, CaptureSelection::First, SETTINGS),
    (Category::Help, CaptureSelection::First, HELP),
];

lazy_static! {
    static ref BUILTIN: PatternLibrary = PatternLibrary::from_definitions(BUILTIN_DEFINITIONS)
        .expect("builtin command patterns must compile");
}

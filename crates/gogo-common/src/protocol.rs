use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Command classes the assistant recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Navigation,
    Search,
    Settings,
    Help,
    TabControl,
    AppNavigation,
    WebNavigation,
    Unknown,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Navigation,
        Category::Search,
        Category::Settings,
        Category::Help,
        Category::TabControl,
        Category::AppNavigation,
        Category::WebNavigation,
        Category::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Navigation => "navigation",
            Category::Search => "search",
            Category::Settings => "settings",
            Category::Help => "help",
            Category::TabControl => "tab_control",
            Category::AppNavigation => "app_navigation",
            Category::WebNavigation => "web_navigation",
            Category::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A raw command as received from the chat or voice input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    text: String,
    received_at: DateTime<Utc>,
}

impl Command {
    pub fn new(text: impl Into<String>) -> Self {
        Self::received_at(text, Utc::now())
    }

    pub fn received_at(text: impl Into<String>, received_at: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            received_at,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.received_at
    }
}

/// A command annotated with its resolved category and extracted detail.
///
/// `detail` equals the raw command text when no capture group matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedCommand {
    pub command: Command,
    pub category: Category,
    pub detail: String,
}

impl ClassifiedCommand {
    /// True when the extractor fell back to the raw text.
    pub fn detail_is_fallback(&self) -> bool {
        self.detail == self.command.text()
    }
}

/// Side effects the dispatcher asks a navigator to perform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NavAction {
    RedirectPage { path: String },
    ActivateTab { tab: String },
    OpenExternal { url: String },
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavAction::RedirectPage { path } => write!(f, "redirect {}", path),
            NavAction::ActivateTab { tab } => write!(f, "activate tab {}", tab),
            NavAction::OpenExternal { url } => write!(f, "open {}", url),
        }
    }
}

/// Result of dispatching one classified command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchOutcome {
    /// Human-readable confirmation shown in the chat.
    pub response: String,
    /// Side effects actually performed, in order.
    pub actions: Vec<NavAction>,
    /// False when the target could not be resolved or the command was not understood.
    pub resolved: bool,
}

impl DispatchOutcome {
    pub fn reply(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            actions: Vec::new(),
            resolved: true,
        }
    }

    pub fn unresolved(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            actions: Vec::new(),
            resolved: false,
        }
    }

    pub fn with_action(mut self, action: NavAction) -> Self {
        self.actions.push(action);
        self
    }

    pub fn redirect_path(&self) -> Option<&str> {
        self.actions.iter().find_map(|a| match a {
            NavAction::RedirectPage { path } => Some(path.as_str()),
            _ => None,
        })
    }
}

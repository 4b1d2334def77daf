//! Routes a classified command to its side effect and builds the reply text.

use crate::config::AssistantConfig;
use crate::navigator::{Navigator, NavigatorError};
use gogo_common::{Category, DispatchOutcome, NavAction};
use std::collections::BTreeMap;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Navigation failed: {0}")]
    Navigator(#[from] NavigatorError),
}

const SETTINGS_REPLY: &str = "You can change your language, notifications and theme on the \
Settings page. Say \"open the settings page\" to go there.";

const HELP_REPLY: &str = "I can plan routes (\"navigate to the airport\"), find places \
(\"find coffee shops\"), open pages (\"go to the cargo page\"), switch transport tabs \
(\"open the bus tab\") and search the web (\"search the web for restaurants in Berlin\").";

const UNKNOWN_REPLY: &str =
    "I didn't understand that. Try \"help\" to see what I can do.";

pub struct Dispatcher {
    routes: BTreeMap<String, String>,
    tabs: BTreeMap<String, String>,
    tab_host_path: String,
    search_url: String,
    web_search_enabled: bool,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(&AssistantConfig::default())
    }
}

impl Dispatcher {
    pub fn new(config: &AssistantConfig) -> Self {
        Self {
            routes: lowercase_keys(&config.routes),
            tabs: lowercase_keys(&config.tabs),
            tab_host_path: config.tab_host_path.clone(),
            search_url: config.search_url.clone(),
            web_search_enabled: config.features.web_search_enabled,
        }
    }

    pub async fn dispatch<N: Navigator + ?Sized>(
        &self,
        category: Category,
        detail: &str,
        navigator: &mut N,
    ) -> Result<DispatchOutcome, DispatchError> {
        debug!(%category, detail, "dispatching");
        match category {
            Category::Navigation => Ok(DispatchOutcome::reply(format!(
                "Planning a route to {}. Open the map to compare ride options.",
                detail
            ))),
            Category::Search => Ok(DispatchOutcome::reply(format!(
                "Searching for {} near you...",
                detail
            ))),
            Category::Settings => Ok(DispatchOutcome::reply(SETTINGS_REPLY)),
            Category::Help => Ok(DispatchOutcome::reply(HELP_REPLY)),
            Category::TabControl => self.switch_tab(detail, navigator).await,
            Category::AppNavigation => self.open_page(detail, navigator).await,
            Category::WebNavigation => self.search_web(detail, navigator).await,
            Category::Unknown => Ok(DispatchOutcome::unresolved(UNKNOWN_REPLY)),
        }
    }

    /// Route table lookup. Returns the matched name and its path.
    pub fn resolve_route(&self, destination: &str) -> Option<(String, &str)> {
        let name = normalize_target(destination, &["page", "screen", "section"]);
        self.routes
            .get(&name)
            .map(|path| (name, path.as_str()))
    }

    /// Tab alias lookup. Returns the tab element id.
    pub fn resolve_tab(&self, name: &str) -> Option<&str> {
        let name = normalize_target(name, &["tab"]);
        self.tabs.get(&name).map(String::as_str)
    }

    pub fn search_url_for(&self, term: &str) -> String {
        format!("{}{}", self.search_url, urlencoding::encode(term.trim()))
    }

    async fn switch_tab<N: Navigator + ?Sized>(
        &self,
        detail: &str,
        navigator: &mut N,
    ) -> Result<DispatchOutcome, DispatchError> {
        let Some(tab) = self.resolve_tab(detail) else {
            let mut known: Vec<&str> = self.tabs.values().map(String::as_str).collect();
            known.sort_unstable();
            known.dedup();
            return Ok(DispatchOutcome::unresolved(format!(
                "I couldn't find a tab called \"{}\". Available tabs: {}.",
                detail,
                known.join(", ")
            )));
        };

        if navigator.current_path().await != self.tab_host_path {
            let action = NavAction::RedirectPage {
                path: self.tab_host_path.clone(),
            };
            navigator.perform(&action).await?;
            info!(tab, path = %self.tab_host_path, "redirected to tab host");
            return Ok(DispatchOutcome::reply(format!(
                "The {} tab is on the transport page, so I'm taking you there. \
                 Ask again once it has loaded.",
                tab
            ))
            .with_action(action));
        }

        let action = NavAction::ActivateTab {
            tab: tab.to_string(),
        };
        if navigator.perform(&action).await? {
            info!(tab, "activated tab");
            Ok(DispatchOutcome::reply(format!("Switched to the {} tab.", tab)).with_action(action))
        } else {
            Ok(DispatchOutcome::unresolved(format!(
                "I couldn't find the {} tab on this page.",
                tab
            )))
        }
    }

    async fn open_page<N: Navigator + ?Sized>(
        &self,
        detail: &str,
        navigator: &mut N,
    ) -> Result<DispatchOutcome, DispatchError> {
        let Some((name, path)) = self.resolve_route(detail) else {
            return Ok(DispatchOutcome::unresolved(format!(
                "Sorry, I couldn't find a page called \"{}\".",
                detail
            )));
        };

        let action = NavAction::RedirectPage {
            path: path.to_string(),
        };
        navigator.perform(&action).await?;
        info!(page = %name, path, "redirected");
        Ok(DispatchOutcome::reply(format!("Navigating to {}...", name)).with_action(action))
    }

    async fn search_web<N: Navigator + ?Sized>(
        &self,
        detail: &str,
        navigator: &mut N,
    ) -> Result<DispatchOutcome, DispatchError> {
        if !self.web_search_enabled {
            return Ok(DispatchOutcome::unresolved(
                "Web search is turned off in your settings.",
            ));
        }

        let action = NavAction::OpenExternal {
            url: self.search_url_for(detail),
        };
        navigator.perform(&action).await?;
        info!(%action, "opened web search");
        Ok(DispatchOutcome::reply(format!(
            "I've opened a new tab with web results for \"{}\".",
            detail.trim()
        ))
        .with_action(action))
    }
}

fn lowercase_keys(table: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    table
        .iter()
        .map(|(k, v)| (normalize_target(k, &[]), v.clone()))
        .collect()
}

/// Lowercase, collapse whitespace, drop a leading article and a trailing noun.
fn normalize_target(raw: &str, trailing: &[&str]) -> String {
    let mut words: Vec<String> = raw
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|w| !w.is_empty())
        .collect();

    if words.len() > 1 && matches!(words[0].as_str(), "the" | "my" | "a") {
        words.remove(0);
    }
    if words.len() > 1 && trailing.contains(&words[words.len() - 1].as_str()) {
        words.pop();
    }
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_target() {
        assert_eq!(normalize_target("  The Cargo  page ", &["page"]), "cargo");
        assert_eq!(normalize_target("public   transport", &["page"]), "public transport");
        assert_eq!(normalize_target("bus tab", &["tab"]), "bus");
        assert_eq!(normalize_target("page", &["page"]), "page");
        assert_eq!(normalize_target("wallet!", &[]), "wallet");
    }

    #[test]
    fn test_search_url_encodes_term() {
        let dispatcher = Dispatcher::default();
        assert_eq!(
            dispatcher.search_url_for("restaurants in Berlin"),
            "https://www.google.com/search?q=restaurants%20in%20Berlin"
        );
        assert_eq!(
            dispatcher.search_url_for("fish & chips"),
            "https://www.google.com/search?q=fish%20%26%20chips"
        );
    }
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub providers: ProviderCredentials,
    /// Page name -> app path. Replaces the builtin table when given.
    #[serde(default = "default_routes")]
    pub routes: BTreeMap<String, String>,
    /// Spoken tab name -> tab element id.
    #[serde(default = "default_tabs")]
    pub tabs: BTreeMap<String, String>,
    /// The view that hosts the transport tabs.
    #[serde(default = "default_tab_host_path")]
    pub tab_host_path: String,
    /// Prefix the URL-encoded search term is appended to.
    #[serde(default = "default_search_url")]
    pub search_url: String,
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            features: FeatureFlags::default(),
            providers: ProviderCredentials::default(),
            routes: default_routes(),
            tabs: default_tabs(),
            tab_host_path: default_tab_host_path(),
            search_url: default_search_url(),
            log_path: default_log_path(),
        }
    }
}

fn default_routes() -> BTreeMap<String, String> {
    [
        ("home", "/"),
        ("map", "/map"),
        ("explore", "/map"),
        ("ride", "/ride"),
        ("rides", "/ride"),
        ("cargo", "/cargo"),
        ("delivery", "/cargo"),
        ("transport", "/transport"),
        ("transit", "/transport"),
        ("public transport", "/transport"),
        ("provider", "/provider"),
        ("driver", "/provider"),
        ("wallet", "/admin/wallet"),
        ("admin", "/admin/wallet"),
        ("analytics", "/admin/analytics"),
        ("assistant", "/assistant"),
        ("chat", "/assistant"),
        ("settings", "/settings"),
    ]
    .into_iter()
    .map(|(name, path)| (name.to_string(), path.to_string()))
    .collect()
}

fn default_tabs() -> BTreeMap<String, String> {
    [
        ("bus", "bus"),
        ("buses", "bus"),
        ("train", "train"),
        ("trains", "train"),
        ("rail", "train"),
        ("metro", "metro"),
        ("subway", "metro"),
        ("underground", "metro"),
        ("tram", "tram"),
        ("trams", "tram"),
        ("ferry", "ferry"),
        ("ferries", "ferry"),
        ("boat", "ferry"),
    ]
    .into_iter()
    .map(|(alias, id)| (alias.to_string(), id.to_string()))
    .collect()
}

fn default_tab_host_path() -> String {
    "/transport".to_string()
}

fn default_search_url() -> String {
    "https://www.google.com/search?q=".to_string()
}

fn default_log_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".gogo").join("interactions.jsonl"),
        None => PathBuf::from("./gogo-interactions.jsonl"),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureFlags {
    #[serde(default)]
    pub voice_enabled: bool,
    #[serde(default = "default_true")]
    pub logging_enabled: bool,
    #[serde(default = "default_true")]
    pub web_search_enabled: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            voice_enabled: false,
            logging_enabled: true,
            web_search_enabled: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Placeholder credentials for the map, assistant and speech providers.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ProviderCredentials {
    #[serde(default)]
    pub maps_api_key: Option<String>,
    #[serde(default)]
    pub assistant_api_key: Option<String>,
    #[serde(default)]
    pub speech_api_key: Option<String>,
}

impl fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(key: &Option<String>) -> &'static str {
            if key.is_some() { "<redacted>" } else { "<unset>" }
        }
        f.debug_struct("ProviderCredentials")
            .field("maps_api_key", &redact(&self.maps_api_key))
            .field("assistant_api_key", &redact(&self.assistant_api_key))
            .field("speech_api_key", &redact(&self.speech_api_key))
            .finish()
    }
}

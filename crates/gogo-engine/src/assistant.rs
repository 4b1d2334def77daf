//! Top-level chat handler for the assistant overlay.
//!
//! `Assistant::handle` runs the full pipeline for one command:
//! classify → extract → dispatch → log → (optionally) speak.
//! It never returns an error; failures inside dispatch become an apology
//! reply and a log entry with `success = false`.

use crate::config::{AssistantConfig, FeatureFlags};
use crate::dispatcher::Dispatcher;
use crate::monitor::{InteractionStore, Monitor};
use crate::navigator::{Navigator, Speaker};
use gogo_common::{Category, Command, InteractionLog, NavAction};
use gogo_parser::PatternLibrary;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

const APOLOGY: &str = "Sorry, something went wrong while handling that. Please try again.";

/// What the chat shows for one processed command.
#[derive(Debug, Clone)]
pub struct AssistantReply {
    pub category: Category,
    pub detail: String,
    pub response: String,
    pub actions: Vec<NavAction>,
    /// False only when processing failed.
    pub success: bool,
    /// False when the command was not understood or its target was not found.
    pub resolved: bool,
    pub processing_time_ms: u64,
}

pub struct Assistant<N: Navigator> {
    library: PatternLibrary,
    dispatcher: Dispatcher,
    navigator: N,
    monitor: Monitor,
    speaker: Option<Arc<dyn Speaker>>,
    features: FeatureFlags,
    user_id: Option<String>,
    session_id: Option<String>,
}

impl<N: Navigator> Assistant<N> {
    pub fn new(config: &AssistantConfig, navigator: N, store: Arc<dyn InteractionStore>) -> Self {
        Self {
            library: PatternLibrary::builtin().clone(),
            dispatcher: Dispatcher::new(config),
            navigator,
            monitor: Monitor::new(store),
            speaker: None,
            features: config.features.clone(),
            user_id: None,
            session_id: None,
        }
    }

    pub fn with_library(mut self, library: PatternLibrary) -> Self {
        self.library = library;
        self
    }

    pub fn with_speaker(mut self, speaker: Arc<dyn Speaker>) -> Self {
        self.speaker = Some(speaker);
        self
    }

    pub fn with_identity(mut self, user_id: Option<String>, session_id: Option<String>) -> Self {
        self.user_id = user_id;
        self.session_id = session_id;
        self
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn monitor(&self) -> &Monitor {
        &self.monitor
    }

    pub async fn handle(&mut self, text: &str) -> AssistantReply {
        let started = Instant::now();
        let classified = gogo_parser::process(&self.library, Command::new(text));

        let result = self
            .dispatcher
            .dispatch(classified.category, &classified.detail, &mut self.navigator)
            .await;

        let (response, actions, resolved, error) = match result {
            Ok(outcome) => (outcome.response, outcome.actions, outcome.resolved, None),
            Err(e) => {
                warn!(command = text, error = %e, "command processing failed");
                (APOLOGY.to_string(), Vec::new(), false, Some(e.to_string()))
            }
        };

        let processing_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let success = error.is_none();

        if self.features.logging_enabled {
            let mut log = InteractionLog::new(text, response.as_str(), classified.category, success)
                .with_duration_ms(processing_time_ms)
                .with_user(self.user_id.clone())
                .with_session(self.session_id.clone())
                .at(classified.command.timestamp());
            if let Some(e) = &error {
                log = log.with_error(e.as_str());
            }
            if let Err(e) = self.monitor.record(log) {
                warn!(error = %e, "failed to record interaction");
            }
        }

        if self.features.voice_enabled {
            self.announce(&response);
        }

        AssistantReply {
            category: classified.category,
            detail: classified.detail,
            response,
            actions,
            success,
            resolved,
            processing_time_ms,
        }
    }

    fn announce(&self, response: &str) {
        let Some(speaker) = &self.speaker else {
            return;
        };
        let speaker = Arc::clone(speaker);
        let text = response.to_string();
        tokio::spawn(async move {
            if let Err(e) = speaker.speak(&text).await {
                debug!(error = %e, "speech output failed");
            }
        });
    }
}

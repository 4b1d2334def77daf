use crate::protocol::Category;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One processed command. Created once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionLog {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub command: String,
    pub response: String,
    pub category: Category,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub processing_time_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl InteractionLog {
    pub fn new(
        command: impl Into<String>,
        response: impl Into<String>,
        category: Category,
        success: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            command: command.into(),
            response: response.into(),
            category,
            success,
            error: None,
            processing_time_ms: 0,
            user_id: None,
            session_id: None,
        }
    }

    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_duration_ms(mut self, ms: u64) -> Self {
        self.processing_time_ms = ms;
        self
    }

    pub fn with_user(mut self, user_id: Option<String>) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn with_session(mut self, session_id: Option<String>) -> Self {
        self.session_id = session_id;
        self
    }
}

/// Lookback windows offered by the admin analytics view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricsWindow {
    Day,
    Week,
    Month,
    Quarter,
}

impl MetricsWindow {
    pub fn days(&self) -> u32 {
        match self {
            MetricsWindow::Day => 1,
            MetricsWindow::Week => 7,
            MetricsWindow::Month => 30,
            MetricsWindow::Quarter => 90,
        }
    }

    pub fn from_days(days: u32) -> Option<Self> {
        match days {
            1 => Some(MetricsWindow::Day),
            7 => Some(MetricsWindow::Week),
            30 => Some(MetricsWindow::Month),
            90 => Some(MetricsWindow::Quarter),
            _ => None,
        }
    }
}

/// Aggregates derived from the interaction log, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateMetrics {
    pub window_days: u32,
    pub total_interactions: usize,
    pub successful_interactions: usize,
    pub failed_interactions: usize,
    pub success_rate: f64,
    pub average_response_time_ms: f64,
    pub category_distribution: BTreeMap<Category, usize>,
    pub daily_counts: BTreeMap<NaiveDate, usize>,
    /// Most frequent error messages, most frequent first.
    pub top_errors: Vec<(String, usize)>,
}

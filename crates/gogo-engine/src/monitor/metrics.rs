use chrono::{DateTime, Days, Duration, Utc};
use gogo_common::{AggregateMetrics, InteractionLog};
use std::collections::{BTreeMap, HashMap};

const TOP_ERRORS: usize = 5;

/// Days before `now` that get a zero entry in `daily_counts`.
pub const MAX_FILLED_DAYS: u64 = 366;

/// Reduce the logs with `timestamp >= now - window_days` into aggregate metrics.
///
/// `daily_counts` holds an entry for every calendar day (UTC) from the cutoff
/// through `now`, zero when nothing was logged that day. Zero entries reach
/// back at most [`MAX_FILLED_DAYS`]; older days only appear when they have logs.
/// A window reaching past the earliest representable time covers everything.
pub fn aggregate(logs: &[InteractionLog], window_days: u32, now: DateTime<Utc>) -> AggregateMetrics {
    let cutoff = Duration::try_days(i64::from(window_days))
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    let in_window: Vec<&InteractionLog> = logs.iter().filter(|l| l.timestamp >= cutoff).collect();

    let total = in_window.len();
    let successful = in_window.iter().filter(|l| l.success).count();
    let total_ms: u64 = in_window.iter().map(|l| l.processing_time_ms).sum();

    let mut category_distribution = BTreeMap::new();
    for log in &in_window {
        *category_distribution.entry(log.category).or_insert(0) += 1;
    }

    let mut daily_counts = BTreeMap::new();
    let today = now.date_naive();
    let mut day = today
        .checked_sub_days(Days::new(MAX_FILLED_DAYS))
        .map_or(cutoff.date_naive(), |floor| floor.max(cutoff.date_naive()));
    while day <= today {
        daily_counts.insert(day, 0);
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    for log in &in_window {
        *daily_counts.entry(log.timestamp.date_naive()).or_insert(0) += 1;
    }

    let mut error_counts: HashMap<&str, usize> = HashMap::new();
    for log in &in_window {
        if let Some(err) = &log.error {
            *error_counts.entry(err.as_str()).or_default() += 1;
        }
    }
    let mut top_errors: Vec<(String, usize)> = error_counts
        .into_iter()
        .map(|(e, n)| (e.to_string(), n))
        .collect();
    top_errors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    top_errors.truncate(TOP_ERRORS);

    let (success_rate, average_response_time_ms) = if total == 0 {
        (0.0, 0.0)
    } else {
        (
            successful as f64 / total as f64,
            total_ms as f64 / total as f64,
        )
    };

    AggregateMetrics {
        window_days,
        total_interactions: total,
        successful_interactions: successful,
        failed_interactions: total - successful,
        success_rate,
        average_response_time_ms,
        category_distribution,
        daily_counts,
        top_errors,
    }
}

pub mod interaction;
pub mod protocol;

pub use interaction::{AggregateMetrics, InteractionLog, MetricsWindow};
pub use protocol::{Category, ClassifiedCommand, Command, DispatchOutcome, NavAction};

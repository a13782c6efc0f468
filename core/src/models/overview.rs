//! Account-overview summary model.

use serde::Deserialize;

/// Top-level overview metrics. Every field is optional on the wire; consumers
/// substitute their own zero defaults when rendering.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverviewResponse {
    pub mrr: Option<f64>,
    pub revenue: Option<f64>,
    pub active_subscribers_count: Option<i64>,
    pub active_trials_count: Option<i64>,
    pub active_users_count: Option<i64>,
    pub installs_count: Option<i64>,
}

//! Scatter/gather aggregation for the overview dashboard.
//!
//! # Design
//! One foundational overview fetch plus one chart fetch per configured card,
//! all issued concurrently and all awaited before the aggregate returns — a
//! failing chart never cancels its siblings. Error policy is deliberately
//! asymmetric: the overview call failing fails the whole aggregate, while a
//! chart failure is recorded only in that card's slot so the caller can
//! degrade per section. Each card writes to its own slot in the output
//! vector (aligned with the input order), so concurrent completion needs no
//! shared mutable state.

use futures::future::join_all;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{ChartName, ChartPoint, ChartRequest, ChartResolution, OverviewResponse};

/// One configured dashboard card: which chart to fetch and which row index
/// holds the card's metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardConfig {
    pub name: ChartName,
    /// Index into each chart row for this card's value; index 0 is always
    /// the timestamp.
    pub value_index: usize,
    pub resolution: ChartResolution,
    pub start_date: String,
    pub end_date: String,
}

impl CardConfig {
    fn chart_request(&self) -> ChartRequest {
        ChartRequest {
            name: self.name,
            resolution: self.resolution,
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        }
    }
}

/// Aggregate result: the overview plus one result per card, in input order.
#[derive(Debug)]
pub struct Dashboard {
    pub overview: OverviewResponse,
    pub charts: Vec<Result<Vec<ChartPoint>, ApiError>>,
}

/// Fetch the overview and every card's chart concurrently.
///
/// Completes only after every sub-call has finished. Returns `Err` only when
/// the overview fetch itself failed; per-card failures live in
/// [`Dashboard::charts`].
pub async fn fetch_dashboard(
    client: &ApiClient,
    cards: &[CardConfig],
) -> Result<Dashboard, ApiError> {
    let overview_call = client.overview();
    let chart_calls = join_all(cards.iter().map(|card| fetch_card(client, card)));

    let (overview, charts) = futures::join!(overview_call, chart_calls);
    Ok(Dashboard {
        overview: overview?.unwrap_or_default(),
        charts,
    })
}

async fn fetch_card(client: &ApiClient, card: &CardConfig) -> Result<Vec<ChartPoint>, ApiError> {
    let response = client.charts(card.chart_request()).await?;
    Ok(response
        .map(|chart| chart.points(card.value_index))
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_builds_its_chart_request() {
        let card = CardConfig {
            name: ChartName::Revenue,
            value_index: 2,
            resolution: ChartResolution::Month,
            start_date: "2024-01-01".to_string(),
            end_date: "2024-06-30".to_string(),
        };
        let request = card.chart_request();
        assert_eq!(request.name, ChartName::Revenue);
        assert_eq!(request.resolution, ChartResolution::Month);
        assert_eq!(request.start_date, "2024-01-01");
    }
}

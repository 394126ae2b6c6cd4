use axum::extract::{Query, State};
use axum::Json;
use metrics::counter;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::Profit;
use crate::pnl::{self, SortMetric};
use crate::AppState;

#[derive(Deserialize)]
pub struct PnlParams {
    pub from: Option<String>,
    pub to: Option<String>,
    #[serde(rename = "marketId")]
    pub market_id: Option<String>,
    pub sort: Option<String>,
}

/// Leaderboard row as it goes over the wire: USD values rounded to the
/// two-decimal display convention.
#[derive(Serialize)]
struct ProfitView {
    #[serde(rename = "net profit")]
    net_profit: f64,
    #[serde(rename = "gross profit")]
    gross_profit: f64,
    #[serde(rename = "total fees")]
    total_fees: f64,
    #[serde(rename = "open fee")]
    open_fee: f64,
}

impl From<&Profit> for ProfitView {
    fn from(profit: &Profit) -> Self {
        let to_display = |d: rust_decimal::Decimal| d.round_dp(2).to_f64().unwrap_or(0.0);
        Self {
            net_profit: to_display(profit.net),
            gross_profit: to_display(profit.gross),
            total_fees: to_display(profit.total_fees),
            open_fee: to_display(profit.open_fee),
        }
    }
}

/// `GET /api/pnl?from=&to=&marketId=&sort=`
///
/// Fetches the trade window, aggregates per-owner profit and returns an
/// owner → profit object ordered by the chosen metric (descending).
pub async fn leaderboard(
    State(state): State<AppState>,
    Query(params): Query<PnlParams>,
) -> Result<Json<serde_json::Map<String, serde_json::Value>>, AppError> {
    let from = parse_timestamp(params.from.as_deref())?;
    let to = parse_timestamp(params.to.as_deref())?;

    let metric = match params.sort.as_deref() {
        None | Some("net") => SortMetric::NetProfit,
        Some("gross") => SortMetric::GrossProfit,
        Some(_) => {
            return Err(AppError::BadRequest(
                "Invalid sort metric. Allowed: net, gross".into(),
            ))
        }
    };

    counter!("pnl_requests_total").increment(1);

    let mut trades = state.history.fetch_window(from, to).await?;
    if let Some(market_id) = params.market_id.as_deref().filter(|m| !m.is_empty()) {
        trades.retain(|t| t.market == market_id);
    }

    let by_owner = pnl::aggregate(&trades, &state.registry);
    let sorted = pnl::sort_leaderboard(by_owner, metric);

    // serde_json's preserve_order keeps the leaderboard ordering on the wire.
    let mut body = serde_json::Map::with_capacity(sorted.len());
    for (owner, profit) in &sorted {
        let view = serde_json::to_value(ProfitView::from(profit)).map_err(anyhow::Error::from)?;
        body.insert(owner.clone(), view);
    }

    Ok(Json(body))
}

fn parse_timestamp(raw: Option<&str>) -> Result<i64, AppError> {
    raw.and_then(|s| s.parse::<i64>().ok())
        .ok_or_else(AppError::invalid_query)
}

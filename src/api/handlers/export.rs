use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use metrics::counter;

use crate::errors::AppError;
use crate::export;
use crate::AppState;

/// `GET /api/traders/{address}/trades.csv`
///
/// A trader's complete raw history (unfiltered by any window) as a CSV
/// attachment.
pub async fn trader_csv(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Response, AppError> {
    let trades = state.history.fetch_user_history(&address).await?;
    let csv_bytes = export::trades_to_csv(&trades, &state.registry)?;

    counter!("csv_exports_total").increment(1);
    tracing::info!(owner = %address, rows = trades.len(), "trade history exported");

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"trading_history_{address}.csv\""),
        ),
    ];

    Ok((headers, csv_bytes).into_response())
}

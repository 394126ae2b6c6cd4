use axum::extract::Query;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::errors::AppError;
use crate::oracle;

#[derive(Deserialize)]
pub struct OracleParams {
    pub data: Option<String>,
}

/// `GET /api/oracle/timestamp?data=<hex>`
///
/// Decodes a backup-oracle instruction payload into its observation time.
pub async fn timestamp(
    Query(params): Query<OracleParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let data = params
        .data
        .as_deref()
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing data parameter".into()))?;

    let decoded = oracle::decode_timestamp_hex(data)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    Ok(Json(json!({
        "unix": decoded.timestamp(),
        "utc": decoded.to_rfc2822(),
    })))
}

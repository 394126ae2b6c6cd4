//! Backup-oracle instruction decoding.
//!
//! The venue's backup oracle posts a transaction whose first instruction
//! payload ends with the observation time: a little-endian u64 of Unix
//! seconds in the trailing 8 bytes. This module is independent of the
//! aggregation core; it only parses bytes.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("payload too short: need at least 8 bytes, got {0}")]
    TooShort(usize),

    #[error("invalid hex payload: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("timestamp out of range: {0}")]
    OutOfRange(u64),
}

/// Decode the observation timestamp from a raw instruction payload.
pub fn decode_timestamp(data: &[u8]) -> Result<DateTime<Utc>, OracleError> {
    if data.len() < 8 {
        return Err(OracleError::TooShort(data.len()));
    }

    let mut tail = [0u8; 8];
    tail.copy_from_slice(&data[data.len() - 8..]);
    let seconds = u64::from_le_bytes(tail);

    i64::try_from(seconds)
        .ok()
        .and_then(|s| DateTime::from_timestamp(s, 0))
        .ok_or(OracleError::OutOfRange(seconds))
}

/// Hex front door for the HTTP handler; tolerates a `0x` prefix.
pub fn decode_timestamp_hex(payload: &str) -> Result<DateTime<Utc>, OracleError> {
    let cleaned = payload.trim().trim_start_matches("0x");
    let bytes = hex::decode(cleaned)?;
    decode_timestamp(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_trailing_le_u64() {
        // 1700000000 = 0x6553F100, little-endian in the last 8 bytes,
        // preceded by instruction discriminator noise.
        let mut data = vec![0xde, 0xad, 0xbe, 0xef];
        data.extend_from_slice(&1_700_000_000u64.to_le_bytes());

        let ts = decode_timestamp(&data).unwrap();
        assert_eq!(ts.timestamp(), 1_700_000_000);
    }

    #[test]
    fn exactly_eight_bytes_is_enough() {
        let ts = decode_timestamp(&0u64.to_le_bytes()).unwrap();
        assert_eq!(ts.timestamp(), 0);
    }

    #[test]
    fn short_payload_errors() {
        let err = decode_timestamp(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, OracleError::TooShort(3)));
    }

    #[test]
    fn hex_front_door() {
        let hex_payload = hex::encode(1_700_000_000u64.to_le_bytes());
        let ts = decode_timestamp_hex(&hex_payload).unwrap();
        assert_eq!(ts.timestamp(), 1_700_000_000);

        let prefixed = format!("0x{hex_payload}");
        assert_eq!(decode_timestamp_hex(&prefixed).unwrap().timestamp(), 1_700_000_000);
    }

    #[test]
    fn bad_hex_errors() {
        assert!(matches!(
            decode_timestamp_hex("zz").unwrap_err(),
            OracleError::InvalidHex(_)
        ));
    }

    #[test]
    fn unrepresentable_timestamp_errors() {
        let err = decode_timestamp(&u64::MAX.to_le_bytes()).unwrap_err();
        assert!(matches!(err, OracleError::OutOfRange(_)));
    }
}

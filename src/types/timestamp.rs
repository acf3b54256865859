//! Codec for the exchange timestamp format.
//!
//! Bittrex sends naive timestamps such as `2014-07-09T03:21:20.08`: no zone,
//! optional fraction of up to nine digits. An empty string means "no value".

use serde::{Deserialize, Deserializer, Serializer, de};
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::BittrexError;

const WHOLE_SECONDS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Length of `YYYY-MM-DDTHH:MM:SS`.
const WIRE_LEN: usize = 19;

/// Decode a wire timestamp. `""` decodes to `None`.
///
/// # Example
///
/// ```rust
/// use bittrex_api_client::types::timestamp::parse_timestamp;
///
/// let ts = parse_timestamp("2014-07-09T03:21:20.08").unwrap().unwrap();
/// assert_eq!(ts.millisecond(), 80);
/// assert!(parse_timestamp("").unwrap().is_none());
/// assert!(parse_timestamp("09/07/2014").is_err());
/// ```
pub fn parse_timestamp(value: &str) -> Result<Option<PrimitiveDateTime>, BittrexError> {
    if value.is_empty() {
        return Ok(None);
    }

    let invalid = || BittrexError::Timestamp {
        value: value.to_string(),
    };

    let (whole, fraction) = match value.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (value, None),
    };

    // `[year]` alone would also take `+2014` or a five-digit year.
    let negative = whole.starts_with('-');
    let unsigned = whole.strip_prefix('-').unwrap_or(whole);
    if unsigned.len() != WIRE_LEN || !unsigned.as_bytes()[0].is_ascii_digit() {
        return Err(invalid());
    }

    let mut parsed = PrimitiveDateTime::parse(whole, WHOLE_SECONDS).map_err(|_| invalid())?;
    if negative && parsed.year() == 0 {
        return Err(invalid());
    }

    if let Some(fraction) = fraction {
        if fraction.is_empty() || fraction.len() > 9 || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let nanos: u32 = format!("{fraction:0<9}").parse().map_err(|_| invalid())?;
        parsed = parsed.replace_nanosecond(nanos).map_err(|_| invalid())?;
    }

    Ok(Some(parsed))
}

/// Encode a timestamp in the wire format. `None` encodes to `""`.
///
/// The fraction is only written when non-zero, without trailing zeros.
/// Negative years are written as `-YYYY`, which [`parse_timestamp`] reads back.
pub fn format_timestamp(value: Option<&PrimitiveDateTime>) -> String {
    let Some(ts) = value else {
        return String::new();
    };

    let sign = if ts.year() < 0 { "-" } else { "" };
    let mut out = format!(
        "{sign}{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
        ts.year().unsigned_abs(),
        u8::from(ts.month()),
        ts.day(),
        ts.hour(),
        ts.minute(),
        ts.second()
    );

    let nanos = ts.nanosecond();
    if nanos != 0 {
        let digits = format!("{nanos:09}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }

    out
}

/// Serde adapter for `Option<PrimitiveDateTime>` fields.
///
/// Accepts a timestamp string, `""` or `null` on input; always writes a string.
pub mod wire_timestamp {
    use super::*;

    /// Serialize using [`format_timestamp`].
    pub fn serialize<S>(value: &Option<PrimitiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_timestamp(value.as_ref()))
    }

    /// Deserialize using [`parse_timestamp`].
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<PrimitiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse_timestamp(&raw).map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}

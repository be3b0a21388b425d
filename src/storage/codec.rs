//! Versioned on-disk envelope for a batch of records.
//!
//! Every file is framed as
//! `[magic "PSTR"][u16 version BE][u32 payload len BE][u32 CRC32 BE][bincode payload]`.
//! The payload carries the write timestamp and the records in order.

use super::error::{DecodeError, Result, StoreError};
use super::record::Record;
use bincode::Options;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MAGIC: [u8; 4] = *b"PSTR";
pub const FORMAT_VERSION: u16 = 1;
pub const HEADER_LEN: usize = 14;

const MAX_PAYLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// A decoded batch file.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BatchFile {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub written_at: DateTime<Utc>,
    pub records: Vec<Record>,
}

// Serialized shape must stay identical to `BatchFile`.
#[derive(Serialize)]
struct BatchFileRef<'a> {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    written_at: DateTime<Utc>,
    records: &'a [Record],
}

fn payload_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(MAX_PAYLOAD_BYTES)
        .reject_trailing_bytes()
}

pub fn encode_batch(records: &[Record]) -> Result<Vec<u8>> {
    encode_batch_at(records, Utc::now())
}

pub fn encode_batch_at(records: &[Record], written_at: DateTime<Utc>) -> Result<Vec<u8>> {
    let payload = payload_options()
        .serialize(&BatchFileRef { written_at, records })
        .map_err(StoreError::Encoding)?;
    let len = u32::try_from(payload.len()).map_err(|_| {
        StoreError::Encoding(Box::new(bincode::ErrorKind::SizeLimit))
    })?;
    let crc = crc32fast::hash(&payload);

    let mut framed = Vec::with_capacity(HEADER_LEN + payload.len());
    framed.extend_from_slice(&MAGIC);
    framed.extend_from_slice(&FORMAT_VERSION.to_be_bytes());
    framed.extend_from_slice(&len.to_be_bytes());
    framed.extend_from_slice(&crc.to_be_bytes());
    framed.extend_from_slice(&payload);
    Ok(framed)
}

pub fn decode_batch(data: &[u8]) -> Result<Vec<Record>> {
    Ok(decode_envelope(data)?.records)
}

/// Validate the header and checksum, then decode the payload.
///
/// Nothing is returned unless the whole input checks out.
pub fn decode_envelope(data: &[u8]) -> Result<BatchFile> {
    if data.is_empty() {
        return Err(DecodeError::Empty.into());
    }
    if data.len() < HEADER_LEN {
        return Err(DecodeError::Truncated {
            expected: HEADER_LEN,
            actual: data.len(),
        }
        .into());
    }
    if data[0..4] != MAGIC {
        return Err(DecodeError::BadMagic.into());
    }

    let version = u16::from_be_bytes([data[4], data[5]]);
    if version != FORMAT_VERSION {
        return Err(DecodeError::UnsupportedVersion(version).into());
    }

    let len = u32::from_be_bytes([data[6], data[7], data[8], data[9]]) as usize;
    let stored_crc = u32::from_be_bytes([data[10], data[11], data[12], data[13]]);

    let payload = &data[HEADER_LEN..];
    if payload.len() < len {
        return Err(DecodeError::Truncated {
            expected: HEADER_LEN + len,
            actual: data.len(),
        }
        .into());
    }
    if payload.len() > len {
        return Err(DecodeError::TrailingBytes {
            extra: payload.len() - len,
        }
        .into());
    }

    let computed_crc = crc32fast::hash(payload);
    if computed_crc != stored_crc {
        return Err(DecodeError::ChecksumMismatch {
            stored: stored_crc,
            computed: computed_crc,
        }
        .into());
    }

    payload_options()
        .deserialize::<BatchFile>(payload)
        .map_err(|e| DecodeError::Payload(e).into())
}

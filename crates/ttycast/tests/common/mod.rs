//! Shared helpers for integration tests.

#![allow(dead_code)]

use serde_json::Value;

/// Encode one ttyrec record.
pub fn record(secs: u32, micros: u32, payload: &[u8]) -> Vec<u8> {
    header(secs, micros, payload.len() as u32)
        .into_iter()
        .chain(payload.iter().copied())
        .collect()
}

/// Encode a bare record header.
pub fn header(secs: u32, micros: u32, len: u32) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(12);
    bytes.extend_from_slice(&secs.to_le_bytes());
    bytes.extend_from_slice(&micros.to_le_bytes());
    bytes.extend_from_slice(&len.to_le_bytes());
    bytes
}

/// Encode a sequence of records.
pub fn recording(records: &[(u32, u32, &[u8])]) -> Vec<u8> {
    records
        .iter()
        .flat_map(|(secs, micros, payload)| record(*secs, *micros, payload))
        .collect()
}

/// Convert with default settings and parse the JSON result.
pub fn convert_json(bytes: &[u8]) -> Value {
    let mut out = Vec::new();
    ttycast::convert_to(bytes, &mut out, &ttycast::CastConfig::default())
        .expect("conversion failed");
    serde_json::from_slice(&out).expect("output is not valid JSON")
}

/// Delays of every frame in a parsed document.
pub fn delays(doc: &Value) -> Vec<f64> {
    doc["stdout"]
        .as_array()
        .expect("stdout is an array")
        .iter()
        .map(|frame| frame[0].as_f64().expect("delay is a number"))
        .collect()
}

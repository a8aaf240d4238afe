//! Integration tests for JSON byte escaping.

use ttycast::{escape, escape_bytes};

#[test]
fn documented_examples() {
    assert_eq!(escape(0x08), "\\b");
    assert_eq!(escape(0x0a), "\\n");
    assert_eq!(escape(0x22), "\\\"");
    assert_eq!(escape(0x5c), "\\\\");
    assert_eq!(escape(0x41), "A");
    assert_eq!(escape(0x1b), "\\u001b");
    assert_eq!(escape(0x7f), "\\u007f");
}

#[test]
fn full_control_range() {
    let short = [
        (0x08, "\\b"),
        (0x09, "\\t"),
        (0x0a, "\\n"),
        (0x0c, "\\f"),
        (0x0d, "\\r"),
    ];
    for byte in 0..0x20_u8 {
        let expected = short
            .iter()
            .find(|(b, _)| *b == byte)
            .map_or_else(|| format!("\\u{byte:04x}"), |(_, s)| (*s).to_string());
        assert_eq!(escape(byte).as_bytes(), expected.as_bytes(), "byte {byte:#04x}");
    }
}

#[test]
fn unicode_escapes_are_lowercase() {
    assert_eq!(escape(0x1a), "\\u001a");
    assert_eq!(escape(0x1f), "\\u001f");
}

#[test]
fn every_ascii_payload_is_a_json_string() {
    let payload: Vec<u8> = (0..0x80).collect();
    let mut quoted = vec![b'"'];
    quoted.extend(escape_bytes(&payload));
    quoted.push(b'"');

    let parsed: String = serde_json::from_slice(&quoted).unwrap();
    assert_eq!(parsed.as_bytes(), payload.as_slice());
}

#[test]
fn utf8_text_survives() {
    let text = "╭─ naïve café ─╮";
    let escaped = escape_bytes(text.as_bytes());
    assert_eq!(escaped, text.as_bytes());
}

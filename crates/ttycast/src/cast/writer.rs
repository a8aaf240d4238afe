//! Asciicast v1 JSON serialization.
//!
//! Fields are written in a fixed order (`version`, `width`, `height`,
//! `command`, `title`, `stdout`, `duration`) so identical input always
//! yields identical bytes. Numbers and header strings go through
//! `serde_json`; frame text is already escaped and is copied verbatim.

use std::io::Write;

use serde::Serialize;

use super::format::Cast;
use crate::error::{CastError, Result};

/// Separators for one output style.
struct Layout {
    newline: &'static str,
    field_pad: &'static str,
    frame_pad: &'static str,
    separator: &'static str,
}

const COMPACT: Layout = Layout {
    newline: "",
    field_pad: "",
    frame_pad: "",
    separator: ", ",
};

const PRETTY: Layout = Layout {
    newline: "\n",
    field_pad: "  ",
    frame_pad: "    ",
    separator: ",\n",
};

/// Write a cast as one JSON document followed by a newline.
///
/// The document is rendered in memory first and handed to `writer` in a
/// single call.
pub fn write_cast<W: Write>(writer: &mut W, cast: &Cast, pretty: bool) -> Result<()> {
    let layout = if pretty { &PRETTY } else { &COMPACT };
    let text_len: usize = cast.frames.iter().map(|f| f.text.len() + 32).sum();
    let mut out = Vec::with_capacity(text_len + 256);
    render(&mut out, cast, layout)?;

    writer
        .write_all(&out)
        .map_err(|e| CastError::io_context("writing asciicast document", e))?;
    writer
        .flush()
        .map_err(|e| CastError::io_context("flushing asciicast document", e))
}

fn render(out: &mut Vec<u8>, cast: &Cast, layout: &Layout) -> Result<()> {
    let header = &cast.header;
    let sep = layout.separator;

    write!(out, "{{{}", layout.newline)?;
    field(out, layout, "version", &header.version)?;
    out.extend_from_slice(sep.as_bytes());
    field(out, layout, "width", &header.width)?;
    out.extend_from_slice(sep.as_bytes());
    field(out, layout, "height", &header.height)?;
    out.extend_from_slice(sep.as_bytes());
    field(out, layout, "command", &header.command)?;
    out.extend_from_slice(sep.as_bytes());
    field(out, layout, "title", &header.title)?;
    out.extend_from_slice(sep.as_bytes());

    write!(out, "{}\"stdout\": [", layout.field_pad)?;
    if !cast.frames.is_empty() {
        out.extend_from_slice(layout.newline.as_bytes());
        for (i, frame) in cast.frames.iter().enumerate() {
            if i > 0 {
                out.extend_from_slice(sep.as_bytes());
            }
            write!(out, "{}[", layout.frame_pad)?;
            serde_json::to_writer(&mut *out, &frame.delay)?;
            out.extend_from_slice(b", \"");
            out.extend_from_slice(&frame.text);
            out.extend_from_slice(b"\"]");
        }
        write!(out, "{}{}", layout.newline, layout.field_pad)?;
    }
    out.push(b']');
    out.extend_from_slice(sep.as_bytes());

    field(out, layout, "duration", &cast.duration)?;
    writeln!(out, "{}}}", layout.newline)?;
    Ok(())
}

fn field<T: Serialize + ?Sized>(
    out: &mut Vec<u8>,
    layout: &Layout,
    key: &str,
    value: &T,
) -> Result<()> {
    write!(out, "{}\"{key}\": ", layout.field_pad)?;
    serde_json::to_writer(&mut *out, value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cast::{CastHeader, Frame};

    fn sample() -> Cast {
        let mut cast = Cast::new(CastHeader::default());
        cast.frames.push(Frame::new(0.0, b"$ "));
        cast.frames.push(Frame::new(0.7, b"ls\r\n"));
        cast.duration = 0.7;
        cast
    }

    fn render_string(cast: &Cast, pretty: bool) -> String {
        let mut buf = Vec::new();
        write_cast(&mut buf, cast, pretty).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn compact_layout() {
        assert_eq!(
            render_string(&sample(), false),
            "{\"version\": 1, \"width\": 80, \"height\": 24, \"command\": \"\", \
             \"title\": \"\", \"stdout\": [[0.0, \"$ \"], [0.7, \"ls\\r\\n\"]], \
             \"duration\": 0.7}\n"
        );
    }

    #[test]
    fn pretty_layout() {
        let expected = r#"{
  "version": 1,
  "width": 80,
  "height": 24,
  "command": "",
  "title": "",
  "stdout": [
    [0.0, "$ "],
    [0.7, "ls\r\n"]
  ],
  "duration": 0.7
}
"#;
        assert_eq!(render_string(&sample(), true), expected);
    }

    #[test]
    fn empty_stdout() {
        let cast = Cast::new(CastHeader::default());
        let json = render_string(&cast, false);
        assert!(json.contains("\"stdout\": [], \"duration\": 0.0}"));
        let pretty = render_string(&cast, true);
        assert!(pretty.contains("  \"stdout\": [],\n"));
    }

    #[test]
    fn output_is_valid_json() {
        let mut cast = sample();
        cast.header.title = "quote \" and \\ and \u{1b}".to_string();
        cast.frames.push(Frame::new(-1.0, b"\x1b[2J\x00\x7f\"\\"));
        for pretty in [false, true] {
            let value: serde_json::Value =
                serde_json::from_str(&render_string(&cast, pretty)).unwrap();
            assert_eq!(value["title"], "quote \" and \\ and \u{1b}");
            assert_eq!(value["stdout"][2][0], -1.0);
            assert_eq!(value["stdout"][2][1], "\u{1b}[2J\u{0}\u{7f}\"\\");
        }
    }

    #[test]
    fn high_bytes_are_copied_verbatim() {
        let mut cast = Cast::new(CastHeader::default());
        cast.frames.push(Frame::new(0.0, "é".as_bytes()));
        cast.frames.push(Frame::new(0.0, &[0xff, 0x80]));
        let mut buf = Vec::new();
        write_cast(&mut buf, &cast, false).unwrap();

        let needle = b"[0.0, \"\xc3\xa9\"], [0.0, \"\xff\x80\"]";
        assert!(buf.windows(needle.len()).any(|w| w == needle));
    }

    #[test]
    fn sink_errors_are_reported() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let err = write_cast(&mut Broken, &sample(), false).unwrap_err();
        assert!(err.to_string().starts_with("writing asciicast document"));
    }
}

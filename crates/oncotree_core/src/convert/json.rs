//! Pretty JSON with ASCII-only output.
//!
//! Written files match those of the Python converter byte for byte:
//! two-space indentation and every character outside printable ASCII
//! escaped as `\uXXXX` (UTF-16 surrogate pairs above the BMP).

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::Serializer;

/// Serialize `value` as indented, ASCII-only JSON.
pub fn to_ascii_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, AsciiFormatter::default());
    value.serialize(&mut ser)?;
    // Only ASCII bytes are ever written
    Ok(String::from_utf8_lossy(&out).into_owned())
}

#[derive(Default)]
struct AsciiFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl Formatter for AsciiFormatter<'_> {
    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if (' '..='~').contains(&ch) {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_ascii_is_escaped() {
        let out = to_ascii_json(&json!({"display": "Ménétrier disease"})).unwrap();
        assert_eq!(out, "{\n  \"display\": \"M\\u00e9n\\u00e9trier disease\"\n}");
    }

    #[test]
    fn astral_characters_use_surrogate_pairs() {
        let out = to_ascii_json(&json!("\u{1F9EC}")).unwrap();
        assert_eq!(out, "\"\\ud83e\\uddec\"");
    }

    #[test]
    fn layout_matches_two_space_indent() {
        let value = json!({"concept": [{"code": "TISSUE"}], "count": 1, "empty": []});
        let out = to_ascii_json(&value).unwrap();
        assert_eq!(
            out,
            "{\n  \"concept\": [\n    {\n      \"code\": \"TISSUE\"\n    }\n  ],\n  \"count\": 1,\n  \"empty\": []\n}"
        );
        assert_eq!(serde_json::from_str::<serde_json::Value>(&out).unwrap(), value);
    }

    #[test]
    fn escapes_and_delete_char_stay_escaped() {
        let out = to_ascii_json(&json!("a\"b\\c\n\u{7f}")).unwrap();
        assert_eq!(out, "\"a\\\"b\\\\c\\n\\u007f\"");
    }
}

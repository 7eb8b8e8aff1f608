//! Output formatting for CLI tools.
//!
//! Supports human-readable, JSON, and raw output formats.

use crate::cli::args::OutputFormat;
use crate::cli::hints;
use crate::{Error, Message, Oid, Pdu, Tag, Value, Variable};
use serde::Serialize;
use std::io::{self, Write};

/// A decoded packet, ready for output.
#[derive(Debug, Serialize)]
pub struct PacketResult {
    pub version: String,
    pub community: String,
    pub pdu_type: String,
    pub request_id: i32,
    pub error_status: String,
    pub error_index: i32,
    pub results: Vec<VariableResult>,
}

/// A single decoded (or failed) variable.
#[derive(Debug, Serialize)]
pub struct VariableResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(rename = "type")]
    pub value_type: String,
    pub value: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_hex: Option<String>,
    pub size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Output context for formatting.
pub struct OutputContext {
    pub format: OutputFormat,
    pub show_hints: bool,
    pub force_hex: bool,
}

impl OutputContext {
    /// Create a new output context with default settings.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            show_hints: true,
            force_hex: false,
        }
    }

    /// Build the output model for a decoded message.
    ///
    /// Each VarBind is decoded independently; failures become entries with
    /// `error` set.
    pub fn build_packet(&self, msg: &Message, pdu: &Pdu) -> PacketResult {
        let results = pdu
            .varbinds
            .iter()
            .zip(pdu.decode_variables())
            .map(|(vb, result)| {
                let size = vb.value.content.len();
                self.build_variable(Some(&vb.name), vb.value.tag, size, result)
            })
            .collect();

        PacketResult {
            version: msg.version.to_string(),
            community: String::from_utf8_lossy(&msg.community).into_owned(),
            pdu_type: pdu.pdu_type.to_string(),
            request_id: pdu.request_id,
            error_status: pdu.status().to_string(),
            error_index: pdu.error_index,
            results,
        }
    }

    /// Build the output model for one value decode.
    pub fn build_variable(
        &self,
        name: Option<&Oid>,
        tag: u8,
        size: usize,
        result: Result<Variable, Error>,
    ) -> VariableResult {
        let oid = name.map(ToString::to_string);
        let hint = match name {
            Some(name) if self.show_hints => hints::describe(name),
            _ => None,
        };

        match result {
            Ok(var) => {
                let (value_type, value, formatted, raw_hex) =
                    format_value(&var, self.force_hex);
                VariableResult {
                    oid,
                    hint,
                    value_type,
                    value,
                    formatted,
                    raw_hex,
                    size: var.size,
                    error: None,
                }
            }
            Err(err) => VariableResult {
                oid,
                hint,
                value_type: tag_name(tag),
                value: serde_json::Value::Null,
                formatted: None,
                raw_hex: None,
                size,
                error: Some(err.to_string()),
            },
        }
    }

    /// Write a decoded packet.
    pub fn write_packet<W: Write>(&self, w: &mut W, packet: &PacketResult) -> io::Result<()> {
        match self.format {
            OutputFormat::Human => self.write_human(w, &packet.results),
            OutputFormat::Json => write_json(w, packet),
            OutputFormat::Raw => self.write_raw(w, &packet.results),
        }
    }

    /// Write standalone value decodes.
    pub fn write_variables<W: Write>(
        &self,
        w: &mut W,
        results: &[VariableResult],
    ) -> io::Result<()> {
        match self.format {
            OutputFormat::Human => self.write_human(w, results),
            OutputFormat::Json => write_json(w, &results),
            OutputFormat::Raw => self.write_raw(w, results),
        }
    }

    fn write_human<W: Write>(&self, w: &mut W, results: &[VariableResult]) -> io::Result<()> {
        for var in results {
            if let Some(ref oid) = var.oid {
                if let Some(ref hint) = var.hint {
                    write!(w, "{} ({}) = ", oid, hint)?;
                } else {
                    write!(w, "{} = ", oid)?;
                }
            }

            write!(w, "{}: ", var.value_type)?;

            if let Some(ref err) = var.error {
                writeln!(w, "<error: {}>", err)?;
            } else if let Some(ref formatted) = var.formatted {
                writeln!(w, "{}", formatted)?;
            } else {
                match &var.value {
                    serde_json::Value::String(s) => writeln!(w, "\"{}\"", s)?,
                    serde_json::Value::Null => writeln!(w)?,
                    other => writeln!(w, "{}", other)?,
                }
            }
        }
        Ok(())
    }

    fn write_raw<W: Write>(&self, w: &mut W, results: &[VariableResult]) -> io::Result<()> {
        for var in results {
            let value_str = match &var.value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Null => String::new(),
                other => other.to_string(),
            };
            match &var.oid {
                Some(oid) => writeln!(w, "{}\t{}", oid, value_str)?,
                None => writeln!(w, "{}", value_str)?,
            }
        }
        Ok(())
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    writeln!(w, "{}", json)
}

/// Write message envelope details to stderr.
pub fn write_verbose_packet(packet: &PacketResult) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "--- Message ---");
    let _ = writeln!(stderr, "Version:     {}", packet.version);
    let _ = writeln!(stderr, "Community:   {}", packet.community);
    let _ = writeln!(stderr, "PDU:         {}", packet.pdu_type);
    let _ = writeln!(stderr, "Request ID:  {}", packet.request_id);
    let _ = writeln!(
        stderr,
        "Error:       {} (index {})",
        packet.error_status, packet.error_index
    );
    let _ = writeln!(stderr, "VarBinds:    {}", packet.results.len());
    for var in &packet.results {
        let oid = var.oid.as_deref().unwrap_or("-");
        let _ = writeln!(stderr, "  {} ({}, {} bytes)", oid, var.value_type, var.size);
    }
    let _ = writeln!(stderr);
}

/// Display name for a tag byte, including ones outside [`Tag`].
fn tag_name(tag: u8) -> String {
    match Tag::from_u8(tag) {
        Some(t) => t.to_string(),
        None => format!("Unknown(0x{:02X})", tag),
    }
}

/// Format a value, returning (type_name, json_value, formatted_string, raw_hex).
fn format_value(
    var: &Variable,
    force_hex: bool,
) -> (String, serde_json::Value, Option<String>, Option<String>) {
    let type_name = var.value_type.to_string();

    match (&var.value, var.value_type) {
        (Value::Integer(v), Tag::Counter32 | Tag::Gauge32) => match var.value.as_u32() {
            Some(u) => (type_name, u.into(), None, None),
            None => (type_name, (*v).into(), None, None),
        },

        (Value::Integer(v), Tag::TimeTicks) => match var.value.as_u32() {
            Some(ticks) => (
                type_name,
                ticks.into(),
                Some(format!("({}) {}", ticks, format_timeticks(ticks))),
                None,
            ),
            None => (type_name, (*v).into(), None, None),
        },

        (Value::Integer(v), _) => (type_name, (*v).into(), None, None),

        (Value::Unsigned(v), _) => (type_name, (*v).into(), None, None),

        (Value::OctetString(bytes), _) => {
            let raw_hex = hex_string(bytes);

            if force_hex || !is_printable(bytes) {
                (
                    "Hex-STRING".into(),
                    serde_json::Value::String(raw_hex.clone()),
                    Some(format_hex_string(bytes)),
                    Some(raw_hex),
                )
            } else {
                let s = String::from_utf8_lossy(bytes);
                (
                    "STRING".into(),
                    serde_json::Value::String(s.into_owned()),
                    None,
                    Some(raw_hex),
                )
            }
        }

        (Value::ObjectIdentifier(oid), _) => {
            let formatted = hints::describe(oid).map(|h| format!("{} ({})", oid, h));
            (
                "OID".into(),
                serde_json::Value::String(oid.to_string()),
                formatted,
                None,
            )
        }

        (Value::Raw(bytes), _) => {
            let hex = hex_string(bytes);
            (
                type_name,
                serde_json::Value::String(hex.clone()),
                Some(format_hex_string(bytes)),
                Some(hex),
            )
        }

        (Value::Absent, _) => (
            type_name,
            serde_json::Value::Null,
            Some("(absent)".into()),
            None,
        ),
    }
}

/// Check if bytes are printable ASCII/UTF-8.
fn is_printable(bytes: &[u8]) -> bool {
    match std::str::from_utf8(bytes) {
        Ok(s) => s
            .chars()
            .all(|c| c.is_ascii_graphic() || c.is_ascii_whitespace()),
        Err(_) => false,
    }
}

/// Format bytes as hex string (lowercase, no separator).
fn hex_string(bytes: &[u8]) -> String {
    crate::cli::hex::encode_hex(bytes)
}

/// Format bytes as spaced hex for display.
fn format_hex_string(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format TimeTicks as human-readable duration.
fn format_timeticks(centiseconds: u32) -> String {
    let total_seconds = centiseconds / 100;
    let cs = centiseconds % 100;

    let days = total_seconds / 86400;
    let hours = (total_seconds % 86400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if days > 0 {
        format!(
            "{}d {:02}:{:02}:{:02}.{:02}",
            days, hours, minutes, seconds, cs
        )
    } else {
        format!("{:02}:{:02}:{:02}.{:02}", hours, minutes, seconds, cs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode_value, oid};

    fn render(ctx: &OutputContext, results: &[VariableResult]) -> String {
        let mut out = Vec::new();
        ctx.write_variables(&mut out, results).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_timeticks() {
        // 1 day, 10 hours, 17 minutes, 36.78 seconds
        assert_eq!(format_timeticks(12345678), "1d 10:17:36.78");
        assert_eq!(format_timeticks(360000), "01:00:00.00");
        assert_eq!(format_timeticks(0), "00:00:00.00");
    }

    #[test]
    fn test_is_printable() {
        assert!(is_printable(b"Hello World"));
        assert!(is_printable(b"Line 1\nLine 2"));
        assert!(is_printable(b""));
        assert!(!is_printable(&[0x00, 0x01, 0x02]));
        assert!(!is_printable(&[0x80, 0x81]));
    }

    #[test]
    fn test_format_hex_string() {
        assert_eq!(format_hex_string(&[0x00, 0x1A, 0x2B]), "00 1A 2B");
    }

    #[test]
    fn test_human_output() {
        let ctx = OutputContext::new(OutputFormat::Human);
        let name = oid!(1, 3, 6, 1, 2, 1, 1, 3, 0);
        let var = ctx.build_variable(Some(&name), 0x43, 3, decode_value(0x43, &[0x01, 0xE2, 0x40]));
        assert_eq!(
            render(&ctx, &[var]),
            "1.3.6.1.2.1.1.3.0 (sysUpTime.0) = TimeTicks: (123456) 00:20:34.56\n"
        );
    }

    #[test]
    fn test_counter32_without_pad_shows_unsigned() {
        let ctx = OutputContext::new(OutputFormat::Raw);
        let var = ctx.build_variable(None, 0x41, 4, decode_value(0x41, &[0xFF, 0xFF, 0xFF, 0xFF]));
        assert_eq!(var.value, serde_json::json!(4294967295u32));
        assert_eq!(render(&ctx, &[var]), "4294967295\n");
    }

    #[test]
    fn test_timeticks_without_pad_matches_across_formats() {
        let content = [0xFF, 0xFF, 0xFF, 0xFF];
        let raw = OutputContext::new(OutputFormat::Raw);
        let var = raw.build_variable(None, 0x43, 4, decode_value(0x43, &content));
        assert_eq!(var.value, serde_json::json!(4294967295u32));
        assert_eq!(render(&raw, &[var]), "4294967295\n");

        let human = OutputContext::new(OutputFormat::Human);
        let var = human.build_variable(None, 0x43, 4, decode_value(0x43, &content));
        assert_eq!(
            render(&human, &[var]),
            "TimeTicks: (4294967295) 497d 02:27:52.95\n"
        );
    }

    #[test]
    fn test_error_entry() {
        let ctx = OutputContext::new(OutputFormat::Human);
        let name = oid!(1, 3, 6, 1, 2, 1, 1, 99, 0);
        let var = ctx.build_variable(Some(&name), 0x80, 0, decode_value(0x80, &[]));
        assert_eq!(var.value_type, "noSuchObject");
        assert!(var.error.is_some());
        assert!(render(&ctx, &[var]).starts_with("1.3.6.1.2.1.1.99.0 = noSuchObject: <error: "));

        let var = ctx.build_variable(None, 0xFF, 1, decode_value(0xFF, &[0x00]));
        assert_eq!(var.value_type, "Unknown(0xFF)");
        assert_eq!(var.size, 1);
    }

    #[test]
    fn test_octet_string_hex_fallback() {
        let ctx = OutputContext::new(OutputFormat::Human);
        let var = ctx.build_variable(None, 0x04, 2, decode_value(0x04, &[0x00, 0x1A]));
        assert_eq!(var.value_type, "Hex-STRING");
        assert_eq!(render(&ctx, &[var]), "Hex-STRING: 00 1A\n");

        let var = ctx.build_variable(None, 0x04, 2, decode_value(0x04, b"hi"));
        assert_eq!(render(&ctx, &[var]), "STRING: \"hi\"\n");
    }

    #[test]
    fn test_json_output() {
        let ctx = OutputContext::new(OutputFormat::Json);
        let var = ctx.build_variable(None, 0x46, 1, decode_value(0x46, &[0x80]));
        let parsed: serde_json::Value = serde_json::from_str(&render(&ctx, &[var])).unwrap();
        assert_eq!(parsed[0]["type"], "Counter64");
        assert_eq!(parsed[0]["value"], 128);
        assert_eq!(parsed[0]["size"], 1);
        assert!(parsed[0].get("oid").is_none());
    }
}

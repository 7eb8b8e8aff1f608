//! Command-line argument structures for the `snmp-decode` tool.

use clap::{Parser, ValueEnum};

/// Output format for CLI tools.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output with type information.
    #[default]
    Human,
    /// JSON output for scripting.
    Json,
    /// Raw tab-separated output for scripting.
    Raw,
}

/// Input selection.
#[derive(Debug, Parser)]
pub struct DecodeArgs {
    /// Decode each input as the content octets of a single value with this tag
    /// (e.g. 0x43 or 67) instead of as a full SNMP message.
    #[arg(long = "tag", value_name = "TAG", value_parser = parse_tag)]
    pub tag: Option<u8>,

    /// Hex-encoded input; whitespace and ':' separators are allowed.
    /// Reads one input per line from stdin when omitted.
    #[arg(value_name = "HEX")]
    pub inputs: Vec<String>,
}

/// Output formatting and logging arguments.
#[derive(Debug, Parser)]
pub struct OutputArgs {
    /// Output format: human, json, or raw.
    #[arg(short = 'O', long = "output", default_value = "human")]
    pub format: OutputFormat,

    /// Show message envelope details.
    #[arg(long = "verbose")]
    pub verbose: bool,

    /// Always display OctetString as hex.
    #[arg(long = "hex")]
    pub hex: bool,

    /// Disable well-known OID name hints.
    #[arg(long = "no-hints")]
    pub no_hints: bool,

    /// Enable debug logging (snmp_ber=debug).
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Enable trace logging (snmp_ber=trace).
    #[arg(short = 'D', long = "trace")]
    pub trace: bool,
}

impl OutputArgs {
    /// Initialize tracing based on debug/trace flags.
    ///
    /// Log output goes to stderr so it never mixes with decoded results.
    pub fn init_tracing(&self) {
        use tracing_subscriber::EnvFilter;

        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(self.log_filter()))
            .with_writer(std::io::stderr)
            .try_init();
    }

    fn log_filter(&self) -> &'static str {
        if self.trace {
            "snmp_ber=trace"
        } else if self.debug {
            "snmp_ber=debug"
        } else {
            "snmp_ber=warn"
        }
    }
}

/// Parse a tag byte given as `0x`-prefixed hex or decimal.
pub fn parse_tag(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid tag '{}': {}", s, e))
}

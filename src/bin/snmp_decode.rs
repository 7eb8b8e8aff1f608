//! snmp-decode: Decode captured SNMP packets or single BER values.
//!
//! Part of the snmp-ber CLI utilities.

use bytes::Bytes;
use clap::Parser;
use snmp_ber::cli::args::{DecodeArgs, OutputArgs};
use snmp_ber::cli::hex::decode_hex;
use snmp_ber::cli::output::{OutputContext, write_verbose_packet};
use snmp_ber::{Message, decode_value};
use std::io::{self, BufRead};
use std::process::ExitCode;

/// Decode hex-encoded SNMP v1/v2c messages, or single values with --tag.
#[derive(Debug, Parser)]
#[command(name = "snmp-decode", version, about)]
struct Args {
    #[command(flatten)]
    decode: DecodeArgs,

    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();

    args.output.init_tracing();

    let inputs = if args.decode.inputs.is_empty() {
        match read_stdin() {
            Ok(lines) => lines,
            Err(e) => {
                eprintln!("Error reading stdin: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        args.decode.inputs.clone()
    };

    let ctx = OutputContext {
        format: args.output.format,
        show_hints: !args.output.no_hints,
        force_hex: args.output.hex,
    };

    let mut failed = false;
    for input in &inputs {
        if let Err(e) = run_one(&ctx, &args, input) {
            eprintln!("Error: {}", e);
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn read_stdin() -> io::Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
        .collect()
}

fn run_one(
    ctx: &OutputContext,
    args: &Args,
    input: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = decode_hex(input)?;
    let mut stdout = io::stdout().lock();

    if let Some(tag) = args.decode.tag {
        let size = data.len();
        let result = ctx.build_variable(None, tag, size, decode_value(tag, &data));
        ctx.write_variables(&mut stdout, std::slice::from_ref(&result))?;
        return match result.error {
            Some(err) => Err(err.into()),
            None => Ok(()),
        };
    }

    let msg = Message::decode(Bytes::from(data))?;
    let pdu = msg.pdu()?;
    let packet = ctx.build_packet(&msg, &pdu);

    if args.output.verbose {
        write_verbose_packet(&packet);
    }

    ctx.write_packet(&mut stdout, &packet)?;
    Ok(())
}

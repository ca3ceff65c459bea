#![forbid(unsafe_code)]

use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use st_scancode::{is_break, key, to_ps2, ScancodeSet, SET1_TO_SET2, ST_TO_SET1};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "st2ps2",
    about = "Translate Atari ST keyboard scancodes into PS/2 Set 1 / Set 2 byte sequences."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Translate raw ST scancode bytes.
    Translate(TranslateArgs),
    /// Print the ST -> Set 1 and Set 1 -> Set 2 lookup tables.
    Tables {
        /// Emit JSON instead of a text table
        #[arg(long, action = clap::ArgAction::SetTrue)]
        json: bool,
    },
}

#[derive(Debug, Args)]
struct TranslateArgs {
    /// Target scancode set (1, 2, set1 or set2)
    #[arg(long, default_value = "2")]
    set: ScancodeSet,

    /// Print the zero payload for keys without a PS/2 mapping instead of "-"
    #[arg(long, action = clap::ArgAction::SetTrue)]
    emit_unmapped: bool,

    /// Emit JSON records instead of one line per byte
    #[arg(long, action = clap::ArgAction::SetTrue)]
    json: bool,

    /// Raw ST bytes in hex (`1e`, `0x9E`). Read whitespace-separated from stdin when omitted.
    bytes: Vec<String>,
}

#[derive(Debug, Serialize)]
struct TranslationRecord {
    input: u8,
    key: u8,
    #[serde(rename = "break")]
    is_break: bool,
    unmapped: bool,
    bytes: Vec<u8>,
    packed: u32,
}

#[derive(Debug, Serialize)]
struct TablesDump {
    st_to_set1: Vec<u8>,
    set1_to_set2: Vec<u8>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.command {
        Command::Translate(args) => translate(args, &mut out)?,
        Command::Tables { json } => tables(json, &mut out)?,
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

fn parse_byte(token: &str) -> Result<u8> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u8::from_str_radix(digits, 16).with_context(|| format!("invalid hex byte {token:?}"))
}

fn read_input(args: &TranslateArgs) -> Result<Vec<u8>> {
    if !args.bytes.is_empty() {
        return args.bytes.iter().map(|t| parse_byte(t)).collect();
    }

    let mut bytes = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("read stdin")?;
        for token in line.split_whitespace() {
            bytes.push(parse_byte(token)?);
        }
    }
    Ok(bytes)
}

fn translate(args: TranslateArgs, out: &mut impl Write) -> Result<()> {
    let input = read_input(&args)?;
    tracing::debug!(count = input.len(), set = %args.set, "translating");

    let records: Vec<TranslationRecord> = input
        .iter()
        .map(|&code| {
            let seq = to_ps2(code, args.set);
            let unmapped = seq.is_unmapped();
            if unmapped {
                tracing::info!("key {:#04x} has no PS/2 mapping", key(code));
            }
            let bytes = if unmapped && !args.emit_unmapped {
                Vec::new()
            } else {
                seq.bytes().to_vec()
            };
            TranslationRecord {
                input: code,
                key: key(code),
                is_break: is_break(code),
                unmapped,
                bytes,
                packed: seq.packed(),
            }
        })
        .collect();

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &records).context("write json")?;
        writeln!(out)?;
        return Ok(());
    }

    for record in &records {
        if record.bytes.is_empty() {
            writeln!(out, "-")?;
            continue;
        }
        let hex: Vec<String> = record.bytes.iter().map(|b| format!("{b:02x}")).collect();
        writeln!(out, "{}", hex.join(" "))?;
    }
    Ok(())
}

fn tables(json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        let dump = TablesDump {
            st_to_set1: ST_TO_SET1.to_vec(),
            set1_to_set2: SET1_TO_SET2.to_vec(),
        };
        serde_json::to_writer_pretty(&mut *out, &dump).context("write json")?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "idx  st>set1  set1>set2")?;
    for (idx, (st, set2)) in ST_TO_SET1.iter().zip(SET1_TO_SET2.iter()).enumerate() {
        writeln!(out, "{idx:02x}   {st:02x}       {set2:02x}")?;
    }
    Ok(())
}

//! Dump the contents of a FIT file as readable text or JSON.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use pignon::{DataMessage, DecodeOptions, Decoder, MessageKey, Value};

#[derive(Parser)]
#[command(version, about = "Dump the contents of a FIT file.")]
struct Args {
    /// FIT file to decode.
    file: PathBuf,

    /// Write output here instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format.
    #[arg(short = 't', long = "type", value_enum, default_value_t = Format::Readable)]
    format: Format,

    /// Only dump messages with this profile name or global number.
    #[arg(short, long)]
    name: Option<String>,

    /// Continue past CRC mismatches.
    #[arg(long)]
    ignore_crc: bool,

    /// Increase log verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Readable,
    Json,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_writer(io::stderr)
        .init();

    let file = File::open(&args.file)
        .with_context(|| format!("opening {}", args.file.display()))?;
    let options = DecodeOptions::default().verify_crc(!args.ignore_crc);
    let mut decoder = Decoder::with_options(io::BufReader::new(file), options)
        .with_context(|| format!("reading {}", args.file.display()))?;

    let mut out: BufWriter<Box<dyn Write>> = BufWriter::new(match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    });

    let key = args.name.as_deref().map(|name| match name.parse::<u16>() {
        Ok(num) => MessageKey::Number(num),
        Err(_) => MessageKey::Name(name.to_owned()),
    });
    let messages = match key {
        Some(key) => decoder.messages_named(key),
        None => decoder.messages(),
    };

    match args.format {
        Format::Readable => {
            for (index, message) in messages.enumerate() {
                write_readable(&mut out, index, &message?)?;
            }
        }
        Format::Json => {
            let mut all = Vec::new();
            for message in messages {
                all.push(message_json(&message?));
            }
            serde_json::to_writer_pretty(&mut out, &serde_json::Value::Array(all))?;
            out.write_all(b"\n")?;
        }
    }
    out.flush()?;
    Ok(())
}

fn write_readable(out: &mut impl Write, index: usize, message: &DataMessage) -> anyhow::Result<()> {
    writeln!(out, "{}. {} (#{})", index, message.name, message.num)?;
    for field in &message.fields {
        match (&field.value, field.units.as_deref()) {
            (Some(value), Some(units)) => writeln!(out, " * {}: {} [{}]", field.name, value, units)?,
            (Some(value), None) => writeln!(out, " * {}: {}", field.name, value)?,
            (None, _) => writeln!(out, " * {}: -", field.name)?,
        }
    }
    Ok(())
}

fn message_json(message: &DataMessage) -> serde_json::Value {
    let fields: Vec<serde_json::Value> = message
        .fields
        .iter()
        .map(|field| {
            serde_json::json!({
                "name": field.name,
                "value": value_json(field.value.as_ref()),
                "units": field.units,
            })
        })
        .collect();
    serde_json::json!({
        "name": message.name,
        "num": message.num,
        "fields": fields,
    })
}

fn value_json(value: Option<&Value>) -> serde_json::Value {
    use serde_json::json;

    match value {
        None => serde_json::Value::Null,
        Some(Value::Byte(bytes)) => json!(bytes),
        Some(Value::SInt8(v)) => json!(v),
        Some(Value::UInt8(v)) => json!(v),
        Some(Value::SInt16(v)) => json!(v),
        Some(Value::UInt16(v)) => json!(v),
        Some(Value::SInt32(v)) => json!(v),
        Some(Value::UInt32(v)) => json!(v),
        Some(Value::SInt64(v)) => json!(v),
        Some(Value::UInt64(v)) => json!(v),
        Some(Value::Float32(v)) => json!(v),
        Some(Value::Float64(v)) => json!(v),
        Some(Value::String(v)) => json!(v),
        Some(Value::Name(v)) => json!(v),
        Some(Value::Bool(v)) => json!(v),
        Some(Value::Timestamp(v)) => json!(v.to_rfc3339()),
        Some(Value::LocalTimestamp(v)) => json!(v.format("%Y-%m-%dT%H:%M:%S").to_string()),
        Some(Value::Array(values)) => {
            serde_json::Value::Array(values.iter().map(|v| value_json(Some(v))).collect())
        }
    }
}

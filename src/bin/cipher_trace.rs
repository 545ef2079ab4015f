// src/bin/cipher_trace.rs
//! cipher-trace: run a classical cipher and print how it got there
//!
//! Usage:
//!   cipher-trace list
//!   cipher-trace rule <cipher>
//!   cipher-trace keygen <cipher> [text]
//!   cipher-trace encrypt|decrypt <cipher> <key> <text...> [--json] [--no-vis]
//!
//! `<cipher>` is a display name or slug; `-` picks the configured default.

use anyhow::{bail, Context, Result};
use cipher_trace::config::Config;
use cipher_trace::key_ops::random_key_for;
use cipher_trace::{
    load_config, render_steps, report_to_json, CipherKind, CipherRegistry, ClassicalCipher, Direction, TraceFormat,
    TraceReport,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
usage: cipher-trace list
       cipher-trace rule <cipher>
       cipher-trace keygen <cipher> [text]
       cipher-trace encrypt|decrypt <cipher> <key> <text...> [--json] [--no-vis]";

fn main() -> Result<()> {
    let config = load_config();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let registry = CipherRegistry::standard();

    match args.first().map(String::as_str) {
        Some("list") => list(&registry),
        Some("rule") => {
            let kind = resolve(&registry, config, args.get(1).map(String::as_str))?;
            println!("{kind}\n\n{}", kind.mathematical_rule());
            Ok(())
        }
        Some("keygen") => {
            let kind = resolve(&registry, config, args.get(1).map(String::as_str))?;
            let text = args.get(2..).map(|rest| rest.join(" ")).unwrap_or_default();
            let key = random_key_for(kind, &text).with_context(|| format!("Cannot generate a key for {kind}"))?;
            println!("{key}");
            Ok(())
        }
        Some("encrypt") => run(&registry, config, Direction::Encrypt, &args[1..]),
        Some("decrypt") => run(&registry, config, Direction::Decrypt, &args[1..]),
        Some("-h" | "--help" | "help") => {
            println!("{USAGE}");
            Ok(())
        }
        Some(other) => bail!("Unknown command '{other}'\n{USAGE}"),
        None => bail!("{USAGE}"),
    }
}

fn list(registry: &CipherRegistry) -> Result<()> {
    for kind in registry {
        println!("{:<16} {}", kind.slug(), kind.name());
    }
    Ok(())
}

fn resolve(registry: &CipherRegistry, config: &Config, name: Option<&str>) -> Result<CipherKind> {
    match name {
        None | Some("-") => Ok(config.cli.default_cipher),
        Some(name) => Ok(registry.resolve(name)?),
    }
}

fn run(registry: &CipherRegistry, config: &Config, direction: Direction, args: &[String]) -> Result<()> {
    let mut json = config.trace.format == TraceFormat::Json;
    let mut show_visualization = config.trace.show_visualization;
    let mut positional = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            "--no-vis" => show_visualization = false,
            _ => positional.push(arg.as_str()),
        }
    }

    let [cipher, key, text @ ..] = positional.as_slice() else {
        bail!("Missing cipher or key\n{USAGE}");
    };
    if text.is_empty() {
        bail!("Missing text\n{USAGE}");
    }
    let kind = resolve(registry, config, Some(*cipher))?;
    let text = text.join(" ");

    debug!(cipher = %kind, ?direction, json, "running");
    let report = TraceReport::build(kind, direction, &text, key).with_context(|| format!("{kind} rejected the input"))?;

    if json {
        println!("{}", report_to_json(&report)?);
    } else {
        println!("{kind} ({direction:?})\n");
        print!("{}", render_steps(&report.steps, show_visualization));
        println!("\nResult: {}", report.output);
    }
    info!(cipher = %kind, steps = report.steps.len(), "done");
    Ok(())
}

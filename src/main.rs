//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `whois_lookup` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the lookup result
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use whois_lookup::config::{Opt, LOOKUP_FAILED_MESSAGE};
use whois_lookup::initialization::init_logger_with;
use whois_lookup::{handle, lookup_whois, Config, LookupEvent, ServiceSource};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();
    let config = Config::from(&opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run(&opt, &config).await {
        Ok(output) => {
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("whois_lookup error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Produces the text to print. Lookup failures are part of the text; only an
/// unusable event is an error.
async fn run(opt: &Opt, config: &Config) -> Result<String> {
    let event = match (&opt.event, &opt.address) {
        (Some(json), _) => LookupEvent::from_json(json).context("Failed to decode --event")?,
        (None, Some(address)) => LookupEvent {
            address: address.clone(),
        },
        (None, None) => anyhow::bail!("an address or --event is required"),
    };

    if opt.raw {
        let address = event.address.trim();
        let raw = lookup_whois(address, &ServiceSource::new(), config.timeout())
            .await
            .unwrap_or_else(|e| {
                log::warn!("WHOIS lookup failed for {}: {}", address, e);
                LOOKUP_FAILED_MESSAGE.to_string()
            });
        return Ok(raw);
    }

    Ok(handle(&event, config).await)
}

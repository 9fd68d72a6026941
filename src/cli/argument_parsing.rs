use clap::Parser;
use std::path::PathBuf;

fn parse_currency_sign(s: &str) -> Result<String, String> {
    if s.is_empty() || s.chars().any(char::is_whitespace) {
        return Err(format!(
            "Could not use currency sign {:?}: it must be non-empty and without spaces, eg. C$ or €",
            s
        ));
    }

    Ok(s.to_string())
}

/// Drives an in-memory wallet ledger from commands read on stdin or from a script.
#[derive(Parser, Debug)]
#[command(version)]
pub struct SessionOptions {
    /// Read commands from this file instead of stdin
    #[arg(short = 's', long, env = "WALLETBOOK_SCRIPT")]
    pub script: Option<PathBuf>,

    /// Sign shown in front of the balance
    #[arg(long, env = "WALLETBOOK_BALANCE_CURRENCY", default_value = "C$", value_parser = parse_currency_sign)]
    pub balance_currency: String,

    /// Sign shown after each transaction amount
    #[arg(long, env = "WALLETBOOK_AMOUNT_CURRENCY", default_value = "€", value_parser = parse_currency_sign)]
    pub amount_currency: String,

    /// Seed for generated ids and "add-money" amounts
    #[arg(long, env = "WALLETBOOK_SEED")]
    pub seed: Option<u64>,

    /// Log filter, overrides RUST_LOG (eg. walletbook=debug)
    #[arg(long)]
    pub log_level: Option<String>,
}

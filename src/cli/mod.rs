use std::fs::File;
use std::io::{self, BufReader};
use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use argument_parsing::SessionOptions;
use crate::amounts::{Currencies, Currency};
use crate::clock::LocalClock;
use crate::ledger::Ledger;
use crate::logging;
use session::Session;

mod argument_parsing;
mod commands;
mod formatting;
mod session;

pub fn run_session() -> Result<()> {
    let arguments = SessionOptions::parse();
    logging::init(arguments.log_level.as_deref());

    let rng = match arguments.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let currencies = Currencies {
        balance: Currency::prefixed(arguments.balance_currency),
        transaction: Currency::suffixed(arguments.amount_currency),
    };
    let mut session = Session::new(Ledger::new(), LocalClock, rng, currencies);

    let stdout = io::stdout();
    let mut output = stdout.lock();
    match &arguments.script {
        Some(path) => {
            let script = File::open(path)
                .with_context(|| format!("Could not open script {}", path.display()))?;
            session.run(BufReader::new(script), &mut output)
        }
        None => session.run(io::stdin().lock(), &mut output),
    }
}

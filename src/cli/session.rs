use std::io::{BufRead, Write};
use anyhow::{Context, Result};
use rand::Rng;
use tracing::{info, warn};
use crate::add_money::{random_id, random_transaction};
use crate::amounts::Currencies;
use crate::amounts::Figure;
use crate::cli::commands::{Command, CommandError, HELP};
use crate::cli::formatting::{format_balance, format_home_screen, format_summary, format_transaction};
use crate::clock::Clock;
use crate::ledger::Ledger;
use crate::summary::Summary;
use crate::transaction::Transaction;

pub enum Reply {
    Output(String),
    Rejected(CommandError),
    Quit,
}

/// Owns the session's ledger and applies commands to it one at a time.
pub struct Session<C: Clock, R: Rng> {
    ledger: Ledger,
    clock: C,
    rng: R,
    currencies: Currencies,
}

impl<C: Clock, R: Rng> Session<C, R> {
    pub fn new(ledger: Ledger, clock: C, rng: R, currencies: Currencies) -> Self {
        Session {
            ledger,
            clock,
            rng,
            currencies,
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        let reply = match command {
            Command::AddMoney => {
                let transaction = random_transaction(&mut self.rng, &self.clock);
                info!(id = %transaction.id, amount = %transaction.amount, "adding money");
                self.admit(transaction)
            }
            Command::Run { id, amount, title } => {
                let id = id.unwrap_or_else(|| random_id(&mut self.rng));
                if self.ledger.find(&id).is_some() {
                    warn!(%id, "transaction id already held, keeping both");
                }
                self.admit(Transaction::new(id, amount, title, self.clock.now()))
            }
            Command::Clear => {
                self.ledger.clear_transactions();
                Reply::Output("Transactions cleared".to_string())
            }
            Command::Balance => Reply::Output(format_balance(&self.ledger, &self.currencies)),
            Command::Home => Reply::Output(format_home_screen(&self.ledger, &self.currencies)),
            Command::Summary => {
                Reply::Output(format_summary(&Summary::of(&self.ledger), &self.currencies))
            }
            Command::Export => {
                let transactions: Vec<&Transaction> = self.ledger.transactions().collect();
                let json = serde_json::to_string_pretty(&transactions)
                    .context("Could not export transactions")?;
                Reply::Output(json)
            }
            Command::Help => Reply::Output(format!("{}\n\nRelease: {}", HELP, env!("RELEASE"))),
            Command::Quit => Reply::Quit,
        };

        Ok(reply)
    }

    // Balance and credit/debit totals must stay within Decimal range
    fn fits(&self, amount: Figure) -> bool {
        let summary = Summary::of(&self.ledger);
        let total = if amount.is_sign_negative() { summary.debits } else { summary.credits };

        self.ledger.balance().checked_add(amount).is_some() && total.checked_add(amount).is_some()
    }

    fn admit(&mut self, transaction: Transaction) -> Reply {
        if !self.fits(transaction.amount) {
            warn!(id = %transaction.id, amount = %transaction.amount, "amount out of range");
            return Reply::Rejected(CommandError::AmountOutOfRange(transaction.amount));
        }

        let output = format_transaction(&transaction, &self.currencies);
        self.ledger.run_transaction(transaction);
        Reply::Output(output)
    }

    /// Stops at end of input or `quit`, then prints the home screen.
    pub fn run<I: BufRead, W: Write>(&mut self, input: I, output: &mut W) -> Result<()> {
        info!("session started");

        for (index, line) in input.lines().enumerate() {
            let line = line.context("Could not read command")?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(error) => {
                    warn!(line = index + 1, %error, "skipping command");
                    writeln!(output, "Error on line {}: {}", index + 1, error)?;
                    continue;
                }
            };

            match self.execute(command)? {
                Reply::Output(text) => writeln!(output, "{}", text)?,
                Reply::Rejected(error) => writeln!(output, "Error on line {}: {}", index + 1, error)?,
                Reply::Quit => break,
            }
        }

        writeln!(output, "{}", format_home_screen(&self.ledger, &self.currencies))?;
        info!(
            state = ?self.ledger.state(),
            transactions = self.ledger.len(),
            balance = %self.ledger.balance(),
            "session ended"
        );
        Ok(())
    }
}

#[cfg(test)]
impl<C: Clock, R: Rng> Session<C, R> {
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

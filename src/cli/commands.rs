use std::str::FromStr;
use rust_decimal::Decimal;
use thiserror::Error;
use crate::amounts::Figure;
use crate::transaction::TransactionId;

pub const HELP: &str = "Commands:
  add-money                        add a random credit or debit
  run <amount> [title...]          run a transaction with a generated id
  run-id <id> <amount> [title...]  run a transaction with the given id
  clear                            remove every transaction
  balance                          show the balance
  home                             show the balance and transactions
  summary                          show credits, debits and outflow share
  export                           print the transactions as JSON
  help                             show this message
  quit                             end the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddMoney,
    Run {
        id: Option<TransactionId>,
        amount: Figure,
        title: String,
    },
    Clear,
    Balance,
    Home,
    Summary,
    Export,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`, type `help` for the list of commands")]
    Unknown(String),
    #[error("`{command}` is missing its {argument} argument")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("could not decode amount `{0}`: expected a decimal number, eg. -40 or 12.50")]
    InvalidAmount(String),
    #[error("amount `{0}` would take the wallet totals out of range")]
    AmountOutOfRange(Figure),
}

fn parse_amount(raw_amount: &str) -> Result<Figure, CommandError> {
    Decimal::from_str_exact(raw_amount).map_err(|_| CommandError::InvalidAmount(raw_amount.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(CommandError::Empty);
        };

        let command = match name {
            "add-money" => Command::AddMoney,
            "run" => {
                let raw_amount = words.next().ok_or(CommandError::MissingArgument {
                    command: "run",
                    argument: "amount",
                })?;
                Command::Run {
                    id: None,
                    amount: parse_amount(raw_amount)?,
                    title: words.collect::<Vec<_>>().join(" "),
                }
            }
            "run-id" => {
                let id = words.next().ok_or(CommandError::MissingArgument {
                    command: "run-id",
                    argument: "id",
                })?;
                let raw_amount = words.next().ok_or(CommandError::MissingArgument {
                    command: "run-id",
                    argument: "amount",
                })?;
                Command::Run {
                    id: Some(id.to_string()),
                    amount: parse_amount(raw_amount)?,
                    title: words.collect::<Vec<_>>().join(" "),
                }
            }
            "clear" => Command::Clear,
            "balance" => Command::Balance,
            "home" => Command::Home,
            "summary" => Command::Summary,
            "export" => Command::Export,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            unknown => return Err(CommandError::Unknown(unknown.to_string())),
        };

        Ok(command)
    }
}

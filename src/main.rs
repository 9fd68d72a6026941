mod add_money;
mod amounts;
mod cli;
mod clock;
mod ledger;
mod logging;
mod summary;
mod transaction;

use crate::cli::run_session;

fn main() -> anyhow::Result<()> {
    run_session()
}

use comfy_table::Table;
use crate::amounts::Currencies;
use crate::ledger::Ledger;
use crate::summary::Summary;
use crate::transaction::Transaction;

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn marker(transaction: &Transaction) -> &'static str {
    if transaction.is_credit() { "+" } else { "-" }
}

pub fn format_balance(ledger: &Ledger, currencies: &Currencies) -> String {
    currencies.balance.amount(ledger.balance()).to_string()
}

pub fn format_transaction(transaction: &Transaction, currencies: &Currencies) -> String {
    format!(
        "{} {}: {}",
        marker(transaction),
        transaction.title,
        currencies.transaction.amount(transaction.amount)
    )
}

pub fn format_home_screen(ledger: &Ledger, currencies: &Currencies) -> String {
    let mut components = vec![title(&format!("Balance: {}", format_balance(ledger, currencies)))];

    let content = if !ledger.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["+/-", "Title", "Date", "Amount"]);

        for transaction in ledger.transactions() {
            table.add_row(vec![
                marker(transaction).to_string(),
                transaction.title.clone(),
                transaction.date.format(DATE_FORMAT).to_string(),
                currencies.transaction.amount(transaction.amount).to_string(),
            ]);
        }

        table.to_string()
    } else {
        "No transactions yet".to_string()
    };
    components.push(format!("{}\n{}", title("Transactions"), content));

    components.join("\n\n")
}

pub fn format_summary(summary: &Summary, currencies: &Currencies) -> String {
    let outflow_share = match summary.outflow_share {
        Some(share) => format!("{}%", share),
        None => "-".to_string(),
    };

    let mut table = Table::new();
    table.set_header(vec!["Transactions", "Credits", "Debits", "Balance", "Outflow share"]);
    table.add_row(vec![
        summary.count.to_string(),
        currencies.transaction.amount(summary.credits).to_string(),
        currencies.transaction.amount(summary.debits).to_string(),
        currencies.balance.amount(summary.balance).to_string(),
        outflow_share,
    ]);

    format!("{}\n{}", title("Summary"), table)
}

fn title(string: &str) -> String {
    let string_length = string.chars().count();
    string.to_string() + "\n" + &"=".repeat(string_length)
}

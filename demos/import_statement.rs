//! Import a bank statement and record a transaction by hand

use bigdecimal::BigDecimal;
use finance_ledger::utils::MemoryStorage;
use finance_ledger::{Ledger, LedgerError, NewTransaction, TransactionType};
use tracing_subscriber::EnvFilter;

const STATEMENT: &str = "title,type,value,category
Salary,income,5000,Job
Rent,outcome,1200,House
Groceries,outcome,180.40,Food
,outcome,99,Food
Freelance,income,750,Job
";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let storage = MemoryStorage::new();
    let mut ledger = Ledger::new(storage);

    let path = std::env::temp_dir().join("finance-ledger-statement.csv");
    std::fs::write(&path, STATEMENT)?;

    println!("Importing {}...", path.display());
    let imported = ledger.import_transactions(&path).await?;
    for transaction in &imported {
        println!(
            "  {:<10} {:>8} {:>10}  [{}]",
            transaction.title,
            transaction.transaction_type,
            transaction.value,
            transaction.category.title
        );
    }

    let laptop = NewTransaction::new(
        "Laptop",
        BigDecimal::from(9000),
        TransactionType::Outcome,
        "Gadgets",
    );
    match ledger.create_transaction(laptop).await {
        Err(LedgerError::InsufficientBalance {
            requested,
            available,
        }) => println!("\nCannot spend {requested}, only {available} available"),
        other => {
            other?;
        }
    }

    let statement = ledger.statement().await?;
    println!(
        "\nIncome {}  Outcome {}  Total {}",
        statement.balance.income, statement.balance.outcome, statement.balance.total
    );
    println!("{}", serde_json::to_string_pretty(&statement)?);

    Ok(())
}

use anyhow::{bail, Context, Result};
use chrono::Utc;
use std::env;
use std::fs;
use tracing::{error, info, warn};

use recordkeeper::logging::init_logging;
use recordkeeper::{
    ensure_sample_file, increase_stock, read_students_from_file, remove_item,
    write_report_to_file, Account, AppConfig, BankTransferProcessor, CryptoWalletProcessor,
    ElectronicItem, FinanceLedger, GradingError, InventoryItem, InventoryLogger, LoadOutcome,
    MobileMoneyProcessor, Transaction, TransactionProcessor, WarehouseManager,
};

const USAGE: &str = "usage: recordkeeper [--config <file>] [finance|inventory|grades|warehouse|all]";

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let (config, program) = parse_args(&args)?;

    match program.as_str() {
        "finance" => run_finance(&config)?,
        "inventory" => run_inventory(&config)?,
        "grades" => run_grades(&config)?,
        "warehouse" => run_warehouse()?,
        "all" => {
            run_finance(&config)?;
            run_inventory(&config)?;
            run_grades(&config)?;
            run_warehouse()?;
        }
        other => bail!("unknown program '{}'\n{}", other, USAGE),
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<(AppConfig, String)> {
    let mut config_path = None;
    let mut program = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config requires a file path")?;
                config_path = Some(path.clone());
            }
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            name if program.is_none() => program = Some(name.to_string()),
            extra => bail!("unexpected argument '{}'\n{}", extra, USAGE),
        }
    }

    let config = match config_path {
        Some(path) => AppConfig::load_from_file(&path)?,
        None => AppConfig::default(),
    };

    Ok((config.apply_env(), program.unwrap_or_else(|| "all".to_string())))
}

// ============================================================================
// FINANCE
// ============================================================================

fn run_finance(config: &AppConfig) -> Result<()> {
    println!("\n💸 Finance Management");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let account = Account::savings(&config.account_number, config.opening_balance);
    let mut ledger = FinanceLedger::new(account);
    let now = Utc::now();

    let mobile = MobileMoneyProcessor;
    let bank = BankTransferProcessor;
    let crypto = CryptoWalletProcessor;

    let postings: Vec<(&dyn TransactionProcessor, Transaction)> = vec![
        (&mobile as &dyn TransactionProcessor, Transaction::new(1, now, 150.0, "Groceries")),
        (&bank as &dyn TransactionProcessor, Transaction::new(2, now, 200.0, "Utilities")),
        (&crypto as &dyn TransactionProcessor, Transaction::new(3, now, 50.0, "Entertainment")),
    ];

    for (processor, tx) in postings {
        let id = tx.id;
        match ledger.record(processor, tx) {
            Ok(posting) => {
                println!("{}", posting.receipt);
                println!("Transaction applied. Updated Balance: ${:.2}", posting.balance);
            }
            Err(e) => warn!(transaction = id, "transaction not applied: {}", e),
        }
    }

    println!("\n--- All Transactions ---");
    for tx in ledger.transactions() {
        println!("{}", tx);
    }

    info!(
        account = %ledger.account().account_number,
        balance = ledger.account().balance(),
        "finance run complete"
    );
    Ok(())
}

// ============================================================================
// INVENTORY
// ============================================================================

fn run_inventory(config: &AppConfig) -> Result<()> {
    println!("\n📒 Inventory Records");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let now = Utc::now();
    let mut logger = InventoryLogger::new(&config.inventory_path);
    logger.add(InventoryItem::new(1, "Laptop", 10, now));
    logger.add(InventoryItem::new(2, "Mouse", 50, now));
    logger.add(InventoryItem::new(3, "Keyboard", 30, now));
    logger.add(InventoryItem::new(4, "Monitor", 15, now));
    logger.add(InventoryItem::new(5, "Printer", 5, now));

    match logger.save_to_file() {
        Ok(()) => info!(path = ?logger.file_path(), "inventory saved"),
        Err(e) => error!("error saving inventory: {:#}", e),
    }

    // Fresh logger, as a new session would start
    let mut logger: InventoryLogger<InventoryItem> = InventoryLogger::new(&config.inventory_path);
    match logger.load_from_file() {
        Ok(LoadOutcome::Loaded(count)) => info!(count, path = ?logger.file_path(), "inventory loaded"),
        Ok(LoadOutcome::Missing) => warn!(path = ?logger.file_path(), "no inventory file found"),
        Err(e) => error!("error loading inventory: {:#}", e),
    }

    println!("\n--- Inventory Items ---");
    for item in logger.get_all() {
        println!("{}", item);
    }

    Ok(())
}

// ============================================================================
// GRADES
// ============================================================================

fn run_grades(config: &AppConfig) -> Result<()> {
    println!("\n🎓 School Grading");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if ensure_sample_file(&config.students_path)
        .with_context(|| format!("Failed to create sample file: {:?}", config.students_path))?
    {
        info!(path = ?config.students_path, "sample student file created");
    }

    let result = read_students_from_file(&config.students_path)
        .and_then(|students| write_report_to_file(&students, &config.report_path));

    match result {
        Ok(()) => {
            let report = fs::read_to_string(&config.report_path)
                .with_context(|| format!("Failed to read report: {:?}", config.report_path))?;
            println!("Report generated successfully! Contents:");
            print!("{}", report);
        }
        Err(GradingError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            error!(path = ?config.students_path, "input file not found");
        }
        Err(e) => error!("{}", e),
    }

    Ok(())
}

// ============================================================================
// WAREHOUSE
// ============================================================================

fn run_warehouse() -> Result<()> {
    println!("\n🏭 Warehouse Inventory");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut manager = WarehouseManager::new();
    manager.seed_data(Utc::now().date_naive())?;

    println!("--- Grocery Items ---");
    for item in manager.groceries().list_all() {
        println!("{}", item);
    }

    println!("\n--- Electronic Items ---");
    for item in manager.electronics().list_all() {
        println!("{}", item);
    }

    println!("\n--- Stock Operations ---");
    match increase_stock(manager.electronics_mut(), 1, 5) {
        Ok(change) => println!("Stock increased for {}. New quantity: {}", change.name, change.quantity),
        Err(e) => warn!("error increasing stock: {}", e),
    }
    match remove_item(manager.groceries_mut(), 102) {
        Ok(item) => println!("Item with ID {} removed successfully.", item.id),
        Err(e) => warn!("error removing item: {}", e),
    }

    println!("\n--- Testing Errors ---");
    if let Err(e) = manager
        .electronics_mut()
        .insert(ElectronicItem::new(1, "Tablet", 5, "Apple", 12))
    {
        println!("Error: {}", e);
    }
    if let Err(e) = remove_item(manager.groceries_mut(), 999) {
        println!("Error: {}", e);
    }
    if let Err(e) = manager.electronics_mut().update_quantity(2, -5) {
        println!("Error: {}", e);
    }

    Ok(())
}

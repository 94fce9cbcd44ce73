use std::fs::File;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use uuid::Uuid;

use crate::application::ExpenseService;
use crate::domain::{Expense, ExpenseId};
use crate::io::Exporter;

/// Outlay - In-memory Expense Ledger
#[derive(Parser)]
#[command(name = "outlay")]
#[command(about = "An in-memory expense ledger with a scripted demo and an interactive shell")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a scripted walkthrough of the ledger operations
    Demo,

    /// Start an interactive session on a fresh ledger
    Shell,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Demo => run_demo(),
            Commands::Shell => run_shell(self.verbose),
        }
    }
}

/// Scripted walkthrough exercising every public operation, for manual
/// inspection of the output.
fn run_demo() -> Result<()> {
    let mut service = ExpenseService::new();

    let groceries = service.add_expense("Groceries".into(), 500000.00);
    service.add_expense("cosmetics".into(), 260000.00);
    service.add_expense("toiletries".into(), 20000.0);

    println!("All expenses:");
    println!("{}", serde_json::to_string_pretty(&service.to_records())?);

    let found = service.get_expense(groceries.id)?;
    println!("\nFound expense by id {}:", groceries.id);
    println!("{}", serde_json::to_string_pretty(&found.to_record())?);

    let matches = service.find_by_title("groceries");
    println!("\nExpenses titled 'groceries' (case-insensitive): {}", matches.len());

    let removed = service.remove_expense(groceries.id)?;
    println!("\nExpenses after removing '{}':", removed.title);
    println!("{}", serde_json::to_string_pretty(&service.to_records())?);

    Ok(())
}

enum ShellOutcome {
    Continue,
    Quit,
}

/// Interactive line loop on a fresh ledger. Errors are printed and the
/// session keeps going; the ledger lives only as long as the process.
fn run_shell(verbose: bool) -> Result<()> {
    let mut service = ExpenseService::new();
    let stdin = io::stdin();

    println!("Interactive expense ledger. Type 'help' for commands, 'quit' to leave.");

    loop {
        print!("outlay> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            break;
        }

        match dispatch(&mut service, &line, verbose) {
            Ok(ShellOutcome::Continue) => {}
            Ok(ShellOutcome::Quit) => break,
            Err(err) => eprintln!("Error: {:#}", err),
        }
    }

    Ok(())
}

fn dispatch(service: &mut ExpenseService, line: &str, verbose: bool) -> Result<ShellOutcome> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(ShellOutcome::Continue);
    };
    let args: Vec<&str> = parts.collect();

    match command {
        "add" => run_add(service, &args, verbose)?,
        "list" => run_list(service),
        "show" => run_show(service, &args)?,
        "update" => run_update(service, &args)?,
        "find" => run_find(service, &args)?,
        "remove" => run_remove(service, &args, verbose)?,
        "export" => run_export(service, &args)?,
        "help" => print_help(),
        "quit" | "exit" => return Ok(ShellOutcome::Quit),
        _ => bail!("Unknown command '{}'. Type 'help' for commands", command),
    }

    Ok(ShellOutcome::Continue)
}

fn run_add(service: &mut ExpenseService, args: &[&str], verbose: bool) -> Result<()> {
    let (amount, title) = match args {
        [amount, title @ ..] if !title.is_empty() => (*amount, title.join(" ")),
        _ => bail!("Usage: add <amount> <title>"),
    };

    let amount: f64 = amount
        .parse()
        .context("Invalid amount format. Use '50.00' or '50'")?;

    let expense = service.add_expense(title, amount);
    println!("Added expense: {} ({})", expense.title, expense.id);

    if verbose {
        eprintln!("[shell] ledger now holds {} expense(s)", service.list_expenses().len());
    }
    Ok(())
}

fn run_list(service: &ExpenseService) {
    let expenses = service.list_expenses();
    if expenses.is_empty() {
        println!("No expenses recorded.");
    } else {
        print_expense_table(expenses);
    }
}

fn run_show(service: &ExpenseService, args: &[&str]) -> Result<()> {
    let [id] = args else {
        bail!("Usage: show <id>");
    };

    let expense = service.get_expense(parse_expense_id(id)?)?;
    println!("{}", serde_json::to_string_pretty(&expense.to_record())?);
    Ok(())
}

fn run_update(service: &mut ExpenseService, args: &[&str]) -> Result<()> {
    let (id, field, value) = match args {
        [id, field, value @ ..] if !value.is_empty() => (*id, *field, value.join(" ")),
        _ => bail!("Usage: update <id> title <new title> | update <id> amount <value>"),
    };
    let id = parse_expense_id(id)?;

    let expense = match field {
        "title" => service.update_expense(id, Some(value), None)?,
        "amount" => {
            let amount: f64 = value
                .parse()
                .context("Invalid amount format. Use '50.00' or '50'")?;
            service.update_expense(id, None, Some(amount))?
        }
        _ => bail!("Unknown field '{}'. Valid fields: title, amount", field),
    };

    println!(
        "Updated expense: {} ({:.2}), last modified {}",
        expense.title,
        expense.amount,
        expense.to_record().updated_at
    );
    Ok(())
}

fn run_find(service: &ExpenseService, args: &[&str]) -> Result<()> {
    if args.is_empty() {
        bail!("Usage: find <title>");
    }
    let title = args.join(" ");

    let matches = service.find_by_title(&title);
    if matches.is_empty() {
        println!("No expenses titled '{}'.", title);
    } else {
        print_expense_table(&matches);
    }
    Ok(())
}

fn run_remove(service: &mut ExpenseService, args: &[&str], verbose: bool) -> Result<()> {
    let [id] = args else {
        bail!("Usage: remove <id>");
    };

    let removed = service.remove_expense(parse_expense_id(id)?)?;
    println!("Removed expense: {} ({:.2})", removed.title, removed.amount);

    if verbose {
        eprintln!("[shell] ledger now holds {} expense(s)", service.list_expenses().len());
    }
    Ok(())
}

fn run_export(service: &ExpenseService, args: &[&str]) -> Result<()> {
    let [format, path] = args else {
        bail!("Usage: export <csv|json> <path>");
    };

    let exporter = Exporter::new(service);
    let file = File::create(path).with_context(|| format!("Failed to create '{}'", path))?;

    match *format {
        "csv" => {
            let count = exporter.export_csv(file)?;
            println!("Exported {} expense(s) to {}", count, path);
        }
        "json" => {
            let snapshot = exporter.export_json(file)?;
            println!("Exported {} expense(s) to {}", snapshot.expenses.len(), path);
        }
        _ => bail!("Unknown export format '{}'. Valid formats: csv, json", format),
    }
    Ok(())
}

fn print_expense_table(expenses: &[Expense]) {
    println!("{:<36} {:<24} {:>14}", "ID", "TITLE", "AMOUNT");
    println!("{}", "-".repeat(76));
    for expense in expenses {
        println!(
            "{:<36} {:<24} {:>14.2}",
            expense.id,
            truncate(&expense.title, 24),
            expense.amount
        );
    }
}

fn print_help() {
    println!("Commands:");
    println!("  add <amount> <title>      Record a new expense");
    println!("  list                      List all expenses in insertion order");
    println!("  show <id>                 Show one expense as JSON");
    println!("  update <id> title <text>  Rename an expense");
    println!("  update <id> amount <n>    Change an expense amount");
    println!("  find <title>              Find expenses by title (case-insensitive)");
    println!("  remove <id>               Remove an expense");
    println!("  export <csv|json> <path>  Write the ledger to a file");
    println!("  quit                      Leave the session");
}

fn parse_expense_id(input: &str) -> Result<ExpenseId> {
    Uuid::parse_str(input).context("Invalid expense ID format (expected UUID)")
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

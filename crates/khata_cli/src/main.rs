//! CLI summary probe.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `khata_core` wiring.
//! - Open (or create) a ledger database and print its dashboard totals.
//! - Supply the interactive confirmation gate for destructive operations.

use khata_core::db::open_db;
use khata_core::{
    default_log_level, init_logging, summarize, ConfirmGate, LedgerStore, SqliteKvStore,
};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

/// Yes/no gate backed by stdin. Anything but an explicit yes declines,
/// so a closed or empty stdin never mutates state.
struct StdinConfirm;

impl ConfirmGate for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_affirmative(&answer),
            Err(_) => false,
        }
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Starts rolling file logs under `<base_dir>/logs`.
fn setup_logging(base_dir: &Path) -> Result<(), String> {
    let log_dir = base_dir.join("logs");
    let log_dir = log_dir
        .to_str()
        .ok_or_else(|| "log directory path is not valid UTF-8".to_string())?;
    init_logging(default_log_level(), log_dir)
}

fn main() -> ExitCode {
    // A probe run without logs is still useful, so logging failures only
    // warn on stderr.
    match std::env::current_dir() {
        Ok(cwd) => {
            if let Err(err) = setup_logging(&cwd) {
                eprintln!("logging disabled: {err}");
            }
        }
        Err(err) => eprintln!("logging disabled: {err}"),
    }

    let db_path = std::env::args().nth(1).unwrap_or_else(|| "khata.db".to_string());

    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("failed to open ledger database `{db_path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    let kv = match SqliteKvStore::try_new(conn) {
        Ok(kv) => kv,
        Err(err) => {
            eprintln!("failed to attach key-value store: {err}");
            return ExitCode::FAILURE;
        }
    };

    // The summary path reads only; StdinConfirm is consulted once a
    // destructive operation is wired in.
    let store = LedgerStore::open(kv, StdinConfirm);
    let summary = summarize(store.students(), store.expenses());

    println!("khata_core version={}", khata_core::core_version());
    println!("students={}", summary.student_count);
    println!("total_fees={}", summary.total_fees);
    println!("total_collected={}", summary.total_collected);
    println!("total_expenses={}", summary.total_expenses);
    println!("net_balance={}", summary.net_balance);

    ExitCode::SUCCESS
}

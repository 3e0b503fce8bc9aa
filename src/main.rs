//! sqldrift CLI
//!
//! Diffs two SQL schema dumps and prints (or writes) an up/down migration.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use sqldrift::prelude::*;

/// Generate a SQL migration by diffing two schema files.
#[derive(Parser)]
#[command(name = "sqldrift")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Old schema dump.
    old_schema: PathBuf,

    /// New schema dump.
    new_schema: PathBuf,

    /// SQL dialect: sqlite, postgresql, ... (anything but "sqlite" is
    /// treated as generic).
    #[arg(long, default_value = "sqlite")]
    dialect: String,

    /// Show changes without generating a migration.
    #[arg(long)]
    dry_run: bool,

    /// Write the migration to a file instead of standard output.
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    // clap exits 2 on usage errors by default; this tool reports missing
    // arguments with exit code 1, keeping --help/--version at 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
            let _ = err.print();
            return code;
        }
    };

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    // Diagnostics are best-effort; ignore an already-set subscriber.
    let _ = tracing::subscriber::set_global_default(subscriber);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let old_schema = load_schema(&cli.old_schema)?;
    let new_schema = load_schema(&cli.new_schema)?;
    let changes = diff_schemas(&old_schema, &new_schema);

    if changes.is_empty() {
        println!("No changes detected between schemas.");
        return Ok(());
    }

    if cli.dry_run {
        println!("=== DRY RUN ===");
        println!();
        for line in changes.summary() {
            println!("{line}");
        }
        return Ok(());
    }

    let dialect = Dialect::from_name(&cli.dialect);
    debug!(%dialect, "rendering migration");
    let migration = render_migration(&changes, dialect);

    if let Some(path) = &cli.output {
        std::fs::write(path, &migration)?;
        info!("Migration written to {}", path.display());
    } else {
        print!("{migration}");
    }

    Ok(())
}

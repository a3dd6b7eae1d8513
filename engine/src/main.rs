//! GOOGLIA CLI - run the boleto demo flows from a terminal
//!
//! ```bash
//! googlia check a.pdf b.txt            # Intake only: accepted / rejected files
//! googlia process a.pdf b.png          # Intake + mock processing, live status
//! googlia process a.pdf --json         # Print records as JSON
//! googlia process a.pdf --export       # Also run the simulated export
//! googlia login -e me@x.com -p secret  # Simulated sign-in
//! ```
//!
//! Timings come from `GOOGLIA_*` variables (a `.env` file is honored),
//! log verbosity from `RUST_LOG`.

use clap::{Parser, Subcommand};
use googlia::{
    drive_completions, export_all, sign_in, ConsoleNotifier, Credentials, FileCandidate,
    PipelineConfig, Session, TokioTimer,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "googlia")]
#[command(about = "Boleto processing demo, headless", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate files against the intake rules
    Check {
        /// Files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Submit files to the mock pipeline and wait for every record
    Process {
        /// Files to process
        files: Vec<PathBuf>,

        /// Print the final records as JSON
        #[arg(long)]
        json: bool,

        /// Run the simulated export once everything completed
        #[arg(long)]
        export: bool,
    },

    /// Simulated sign-in
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match PipelineConfig::from_env() {
        Ok(config) => match cli.command {
            Commands::Check { files } => cmd_check(&files, &config),
            Commands::Process { files, json, export } => {
                cmd_process(&files, &config, json, export).await
            }
            Commands::Login { email, password } => cmd_login(email, password, &config).await,
        },
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn load_candidates(files: &[PathBuf]) -> Result<Vec<FileCandidate>, Box<dyn std::error::Error>> {
    files
        .iter()
        .map(|path| {
            FileCandidate::from_path(path).map_err(|e| -> Box<dyn std::error::Error> {
                format!("{}: {}", path.display(), e).into()
            })
        })
        .collect()
}

fn cmd_check(files: &[PathBuf], config: &PipelineConfig) -> Result<(), Box<dyn std::error::Error>> {
    let candidates = load_candidates(files)?;
    let mut session = Session::mock(config);
    let report = session.select(candidates, &ConsoleNotifier);

    eprintln!("📋 Intake results:");
    for file in session.selection().files() {
        println!(
            "  ✅ {} ({}, {})",
            file.name,
            file.media_type,
            googlia::format_file_size(file.size)
        );
    }
    for rejected in &report.rejected {
        println!("  ❌ {} ({:?})", rejected.name, rejected.rejection);
    }
    eprintln!(
        "\n📊 {} accepted, {} rejected",
        report.accepted,
        report.rejected.len()
    );

    Ok(())
}

async fn cmd_process(
    files: &[PathBuf],
    config: &PipelineConfig,
    json: bool,
    export: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let candidates = load_candidates(files)?;
    let mut session = Session::mock(config);

    session.select(candidates, &ConsoleNotifier);
    let tasks = session.process(&ConsoleNotifier);
    if tasks.is_empty() {
        return Ok(());
    }

    eprintln!("⏳ Processing {} file(s)...", tasks.len());
    drive_completions(&mut session, tasks, &TokioTimer, |session, id, _| {
        let counts = session.pipeline().counts();
        let name = session
            .pipeline()
            .get(id)
            .map(|r| r.file_name.as_str())
            .unwrap_or("?");
        eprintln!("   ✓ {} concluído ({}/{})", name, counts.completed, counts.total);
    })
    .await;

    if json {
        println!("{}", serde_json::to_string_pretty(session.pipeline().records())?);
    } else {
        print_records(&session);
    }

    if export {
        let records = session.pipeline().records();
        let summary = export_all(records, &TokioTimer, &ConsoleNotifier, config.export_delay).await?;
        eprintln!("📦 {} record(s) exported", summary.exported);
    }

    Ok(())
}

fn print_records(session: &Session<googlia::MockSource>) {
    println!(
        "\n{:<12} {:<24} {:<14} {:<12} {:<10} {}",
        "NÚMERO", "ARQUIVO", "VALOR", "VENCIMENTO", "STATUS", "PROCESSADO EM"
    );
    for record in session.pipeline().records() {
        println!(
            "{:<12} {:<24} {:<14} {:<12} {:<10} {}",
            record.number,
            truncate(&record.file_name, 24),
            record.face_value,
            record.due_date,
            record.status.as_str(),
            record.created_at_display()
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max - 1).collect();
        format!("{}…", head)
    }
}

async fn cmd_login(
    email: String,
    password: String,
    config: &PipelineConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let credentials = Credentials::new(email, password);
    eprintln!("🔑 Entrando...");
    let route = sign_in(&credentials, &TokioTimer, &ConsoleNotifier, config.login_delay).await?;
    println!("➡️  {}", route);
    Ok(())
}

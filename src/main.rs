use chrono::Local;
use clap::{Parser, Subcommand};
use entity_store::application::finance::FinanceApp;
use entity_store::application::grading::StudentResultProcessor;
use entity_store::application::health::HealthSystemApp;
use entity_store::application::inventory_logger::{DecodePolicy, InventoryApp};
use entity_store::application::warehouse::WarehouseManager;
use entity_store::domain::ports::{EntityId, ReportSink};
use entity_store::interfaces::report::report_writer::ReportWriter;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run sample transactions through the processors and a savings account
    Finance,
    /// List patients and their prescriptions
    Health {
        /// Only show prescriptions for this patient id
        #[arg(long)]
        patient: Option<EntityId>,
    },
    /// Seed the warehouse and exercise its failure cases
    Warehouse,
    /// Grade a student score file and write the report
    Grades {
        /// Input file with `id,name,score` lines
        input: PathBuf,
        /// Report destination
        output: PathBuf,
    },
    /// Save sample inventory to a JSON-lines file and load it back
    Inventory {
        /// Inventory log file
        store: PathBuf,
        /// Fail on the first malformed line instead of skipping it
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let today = Local::now().date_naive();
    let lines = match cli.command {
        Command::Finance => FinanceApp::new(today).run().into_diagnostic()?,
        Command::Health { patient } => {
            let mut app = HealthSystemApp::new();
            app.seed_data().into_diagnostic()?;
            app.build_prescription_map();

            match patient {
                Some(id) => app.prescription_lines(id).into_diagnostic()?,
                None => {
                    let mut lines = app.patient_lines();
                    for id in app.patients().iter().map(|p| p.id) {
                        lines.extend(app.prescription_lines(id).into_diagnostic()?);
                    }
                    lines
                }
            }
        }
        Command::Warehouse => WarehouseManager::new().run().into_diagnostic()?,
        Command::Grades { input, output } => {
            let file = File::open(&input).into_diagnostic()?;
            let mut sink = ReportWriter::create(&output).into_diagnostic()?;
            let summary = StudentResultProcessor::new()
                .process(file, &mut sink)
                .into_diagnostic()?;
            vec![format!(
                "Report written to {} ({} student(s), {} line(s) skipped)",
                output.display(),
                summary.written,
                summary.skipped
            )]
        }
        Command::Inventory { store, strict } => {
            let policy = if strict {
                DecodePolicy::Abort
            } else {
                DecodePolicy::Skip
            };
            InventoryApp::new(store).run(today, policy).into_diagnostic()?
        }
    };

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());
    writer.write_lines(&lines).into_diagnostic()?;

    Ok(())
}

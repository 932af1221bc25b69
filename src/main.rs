// ==========================================
// Pantry Labels - command line entry point
// ==========================================

use anyhow::{Context, Result};
use clap::Parser;
use pantry_labels::config::{ConfigManager, RoleDetection};
use pantry_labels::engine::{discover_inputs, label_table, LabelRun};
use pantry_labels::render::{LabelSheetRenderer, PdfSheetWriter, SheetWriter};
use pantry_labels::logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version)]
/// Makes printable guest labels from pantry inventory and guest-list exports.
struct Args {
    /// Input files (inventory, delivery and pickup exports). When omitted,
    /// matching files in the current directory are used.
    files: Vec<PathBuf>,

    #[arg(short, long, default_value = ".")]
    /// Directory the PDFs and reports are written to.
    output_dir: PathBuf,

    #[arg(short, long)]
    /// JSON configuration file.
    config: Option<PathBuf>,

    #[arg(long, value_name = "filename|header")]
    /// How input files are recognized (overrides the config file).
    roles: Option<RoleDetection>,

    #[arg(long)]
    /// Runs everything but writes no files.
    dry_run: bool,

    #[arg(long, value_name = "PATH")]
    /// Writes a single framed calibration label and exits.
    sample_label: Option<PathBuf>,

    #[arg(long)]
    /// Prints how many labels each item count gets and exits.
    label_table: bool,

    #[arg(long)]
    /// Logs as JSON lines.
    log_json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.log_json {
        logging::init_json();
    } else {
        logging::init();
    }

    if args.label_table {
        for (items, labels) in label_table() {
            println!("{} is {} labels", items, labels);
        }
        return Ok(());
    }

    if let Some(path) = &args.sample_label {
        let sheet = LabelSheetRenderer::default().sample_sheet();
        PdfSheetWriter::new("Sample label")
            .write_sheet(&sheet, path)
            .with_context(|| format!("could not write sample label {}", path.display()))?;
        println!("Sample label written to {}", path.display());
        return Ok(());
    }

    let mut config = ConfigManager::load(args.config.as_deref())?;
    if let Some(roles) = args.roles {
        config.role_detection = roles;
    }

    let files = if args.files.is_empty() {
        let cwd = std::env::current_dir().context("could not read the current directory")?;
        discover_inputs(&cwd, &config.discovery_extensions)
            .with_context(|| format!("could not list {}", cwd.display()))?
    } else {
        args.files
    };

    let summary = LabelRun::new(config)
        .dry_run(args.dry_run)
        .process_files(&files, &args.output_dir)?;

    for warning in &summary.warnings {
        println!("{}", warning);
    }
    for status in &summary.statuses {
        println!("{}", status);
    }
    Ok(())
}

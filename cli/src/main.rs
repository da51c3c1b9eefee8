//! kbpress CLI - knowledge-base assembly and PDF rendering

use std::path::{Path, PathBuf};

use chrono::Local;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use kbpress::{discover, LineClassifier, RenderOptions};

#[derive(Parser)]
#[command(name = "kbpress")]
#[command(author = "File Easy Accountancy")]
#[command(version)]
#[command(about = "Assemble and render the File Easy knowledge base", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the dated knowledge-base document from the service manifest
    Assemble {
        /// Service manifest file
        #[arg(long, value_name = "FILE", default_value = "services.manifest.json")]
        manifest: PathBuf,

        /// Output directory (defaults to Downloads)
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Render a knowledge-base document to PDF
    Render {
        /// Input document (discovered by date convention if not given)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (defaults to the dated PDF name next to the input)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Directory to search for input documents (defaults to Downloads)
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Assemble {
            manifest,
            output_dir,
        }) => cmd_assemble(&manifest, output_dir.as_deref()),
        Some(Commands::Render { input, output, dir }) => {
            cmd_render(input.as_deref(), output.as_deref(), dir.as_deref())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        // Default behavior: render with date-convention discovery
        None => cmd_render(None, None, None),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_assemble(
    manifest: &Path,
    output_dir: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let services = kbpress::load_manifest(manifest)?;
    let dir = output_dir
        .map(|p| p.to_path_buf())
        .unwrap_or_else(discover::default_search_dir);
    let today = Local::now().date_naive();

    let report = kbpress::assemble::write_document(&services, &dir, today)?;

    println!(
        "{} {}",
        "✓ Knowledge base created:".green(),
        report.path.display()
    );
    println!(
        "{} {}",
        "✓ Total services documented:".green(),
        report.service_count
    );
    println!(
        "{} {}",
        "✓ Categories covered:".green(),
        report.category_count
    );
    println!(
        "\n{}: {:.1} KB",
        "File size".bold(),
        report.bytes as f64 / 1024.0
    );

    Ok(())
}

fn cmd_render(
    input: Option<&Path>,
    output: Option<&Path>,
    dir: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = dir
        .map(|p| p.to_path_buf())
        .unwrap_or_else(discover::default_search_dir);
    let today = Local::now().date_naive();

    let input = match input {
        Some(path) => path.to_path_buf(),
        None => discover::find_input(&dir, today)?,
    };

    let output = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| dir.join(discover::pdf_filename(today)));

    println!(
        "Converting {} to PDF...",
        input
            .file_name()
            .unwrap_or(input.as_os_str())
            .to_string_lossy()
    );

    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Reading document...");
    let text = std::fs::read_to_string(&input)?;
    pb.inc(1);

    pb.set_message("Classifying lines...");
    let blocks = LineClassifier::new().classify(&text);
    pb.inc(1);

    pb.set_message("Compiling PDF...");
    let options = RenderOptions::default();
    let pdf = kbpress::render::to_pdf(&blocks, &options)?;
    pb.inc(1);

    pb.set_message("Writing output...");
    std::fs::write(&output, &pdf)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!(
        "\n{}",
        "✅ PDF Knowledge Base Created Successfully!".green().bold()
    );
    println!(
        "{}: {}",
        "File".bold(),
        output
            .file_name()
            .unwrap_or(output.as_os_str())
            .to_string_lossy()
    );
    println!("{}: {}", "Location".bold(), output.display());
    println!(
        "{}: {:.2} MB",
        "Size".bold(),
        pdf.len() as f64 / 1024.0 / 1024.0
    );

    Ok(())
}

fn cmd_version() {
    println!("kbpress {}", env!("CARGO_PKG_VERSION"));
    println!("Knowledge-base assembly and Markdown-to-PDF rendering");
}

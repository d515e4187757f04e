//! texweave CLI - render or build the sample document gallery

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use texweave::{gallery, BuildOptions, OutputOptions};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "texweave")]
#[command(version)]
#[command(about = "texweave self test - render the sample documents", long_about = None)]
struct Cli {
    /// Sample number to run (see --list)
    #[arg(short = 'n', long, default_value = "1")]
    testnum: String,

    /// Generate the .tex source
    #[arg(short, long)]
    tex: bool,

    /// Build a PDF with pdflatex
    #[arg(short, long)]
    pdf: bool,

    /// File location for the output
    #[arg(short, long)]
    filename: Option<PathBuf>,

    /// Open the file when done
    #[arg(short, long)]
    open: bool,

    /// Print the .tex source to stdout
    #[arg(short = 'P', long)]
    print: bool,

    /// Overwrite an existing output file
    #[arg(long)]
    force: bool,

    /// List the available samples
    #[arg(short, long)]
    list: bool,
}

#[cfg(feature = "cli")]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.list {
        println!("Available tests:");
        for (i, sample) in gallery::SAMPLES.iter().enumerate() {
            println!("{}: {} - {}", i, sample.name, sample.description);
        }
        return;
    }

    let index: usize = match cli.testnum.trim().parse() {
        Ok(n) => n,
        Err(e) => {
            eprintln!("Error: Invalid test num '{}'. Entry must be a number: {}", cli.testnum, e);
            std::process::exit(2);
        }
    };

    let Some(sample) = gallery::sample(index) else {
        eprintln!(
            "Error: Requested test num is out of range. Num available tests: {}",
            gallery::SAMPLES.len()
        );
        std::process::exit(2);
    };

    let assets = std::env::current_dir().unwrap_or_default();
    let doc = sample.build_in(&assets);
    log::debug!("Built sample {} ({})", index, sample.name);

    let mut failed = false;

    if cli.tex {
        let options = OutputOptions {
            filename: cli.filename.clone(),
            force: cli.force,
            open_when_done: cli.open,
        };
        let output = doc.tex_with(&options);
        for issue in &output.issues {
            eprintln!("Error: {}", issue);
        }
        failed |= !output.is_success();

        if cli.print {
            println!("{}", output.latex);
        }
    }

    if cli.pdf {
        let options = BuildOptions {
            output: cli.filename.clone(),
            force: cli.force,
            open_when_done: cli.open,
            ..Default::default()
        };
        match doc.pdf(&options) {
            Ok(report) => {
                for issue in &report.issues {
                    eprintln!("Error: {}", issue);
                }
                if let Some(pdf) = &report.pdf {
                    eprintln!("PDF: {}", pdf.display());
                }
                failed |= !report.is_success();
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install texweave --features cli");
    eprintln!("  texweave [-n NUM] [--tex] [--pdf] [-f PATH] [--open] [--print] [--force] [--list]");
    std::process::exit(1);
}

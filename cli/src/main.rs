//! todoc CLI - Word document assembly tool

mod manifest;

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;

use todoc::{
    classify, validate, Classified, DirectorySaver, DocBuilder, FileResolver, JsonFormat,
    LayoutConfig, Saver, TimeoutResolver,
};

use manifest::Manifest;

#[derive(Parser)]
#[command(name = "todoc")]
#[command(author = "todoc contributors")]
#[command(version)]
#[command(about = "Assemble Word-compatible documents from JSON manifests", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a document from a manifest
    Build {
        /// Manifest JSON file
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,

        /// Output file (defaults to the manifest name in the current directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Layout JSON file, overrides the manifest layout
        #[arg(long, value_name = "FILE")]
        layout: Option<PathBuf>,

        /// Seconds to wait for each image
        #[arg(long, default_value = "10", env = "TODOC_IMAGE_TIMEOUT")]
        image_timeout: u64,

        /// Print the pending entries as JSON instead of building
        #[arg(long)]
        dump: bool,
    },

    /// Show how a piece of content would be stored
    Check {
        /// Text or markup to classify
        #[arg(value_name = "CONTENT")]
        content: String,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Build {
            manifest,
            output,
            layout,
            image_timeout,
            dump,
        }) => cmd_build(
            &manifest,
            output.as_deref(),
            layout.as_deref(),
            Duration::from_secs(image_timeout),
            dump,
        ),
        Some(Commands::Check { content }) => cmd_check(&content),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: todoc build <MANIFEST> [-o FILE]".yellow());
            println!("       todoc --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_build(
    manifest_path: &Path,
    output: Option<&Path>,
    layout_path: Option<&Path>,
    image_timeout: Duration,
    dump: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let manifest = Manifest::from_file(manifest_path)?;
    log::debug!(
        "Loaded {} with {} insertions",
        manifest_path.display(),
        manifest.entries.len()
    );
    let layout = match layout_path {
        Some(path) => Some(LayoutConfig::from_file(path)?),
        None => manifest.layout.clone(),
    };

    // Relative image paths are resolved next to the manifest
    let base_dir = manifest_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let resolver = TimeoutResolver::new(FileResolver::with_base_dir(base_dir), image_timeout);

    let mut builder = DocBuilder::new().with_metadata(manifest.metadata.clone());

    let rt = tokio::runtime::Runtime::new()?;
    let rejections = rt.block_on(manifest.apply(&mut builder, &resolver));

    for rejection in &rejections {
        eprintln!(
            "{} #{} {}: {}",
            "Skipped".yellow(),
            rejection.index + 1,
            rejection.label,
            rejection.error
        );
    }

    if dump {
        println!("{}", builder.to_json(JsonFormat::Pretty)?);
        return Ok(());
    }

    let name = output
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .or(manifest.name.clone());
    let dir = output
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let saver = DirectorySaver::new(dir).create_missing();

    let doc = builder.build(name.as_deref(), layout.as_ref());
    for warning in &doc.warnings {
        eprintln!("{} {}", "Layout".yellow(), warning);
    }
    let path = saver.save(&doc.bytes, &doc.file_name)?;

    println!("{} {}", "Saved to".green(), path.display());
    println!(
        "  {} {} header, {} footer, {} body entries",
        "├─".dimmed(),
        doc.stats.header_entries,
        doc.stats.footer_entries,
        doc.stats.body_entries
    );
    println!(
        "  {} {} pages, {} images",
        "├─".dimmed(),
        doc.stats.page_count,
        doc.stats.image_count
    );
    println!("  {} {} bytes", "└─".dimmed(), doc.len());

    if !rejections.is_empty() {
        println!(
            "\n{} {} of {} insertions skipped",
            "Warning:".yellow().bold(),
            rejections.len(),
            manifest.entries.len()
        );
    }

    Ok(())
}

fn cmd_check(content: &str) -> Result<(), Box<dyn std::error::Error>> {
    let validation = validate(content);

    println!("{}", "Markup Check".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!(
        "{}: {}",
        "Well-formed".bold(),
        if validation.well_formed { "Yes" } else { "No" }
    );
    if let Some(ref name) = validation.unknown_element {
        println!("{}: <{}>", "Unknown element".bold(), name);
    }

    match classify(content) {
        Ok(Classified::Markup(markup)) => {
            println!("{}: {}", "Stored as".bold(), "markup".green());
            println!("{}", markup);
        }
        Ok(Classified::Text(text)) => {
            println!("{}: {}", "Stored as".bold(), "escaped text".green());
            println!("{}", text);
        }
        Err(e) => println!("{}: {}", "Rejected".red().bold(), e),
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "todoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Word-compatible document assembly tool");
    println!();
    println!("License: MIT");
}

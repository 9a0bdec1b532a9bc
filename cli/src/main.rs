//! docreflow CLI - restructure converter-produced HTML

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docreflow::{
    CleanupOptions, CleanupPreset, ConvertOptions, ConverterRegistry, JsonFormat, ParseOptions,
    Reflow, RenderOptions,
};

#[derive(Parser)]
#[command(name = "docreflow")]
#[command(version)]
#[command(about = "Restructure converter-produced HTML into publishable HTML", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a file or every HTML file in a directory
    Convert {
        /// Input HTML file or directory
        #[arg(value_name = "PATH")]
        input: PathBuf,

        /// Output directory for the generated HTML and JSON files
        #[arg(long, value_name = "DIR", env = "DOCREFLOW_HTML_PATH")]
        html_path: PathBuf,

        /// Static path images are published under
        #[arg(long, value_name = "URL", env = "DOCREFLOW_IMAGE_PATH_STATIC")]
        image_path_static: Option<String>,

        /// Keep going on unknown list markers and duplicate footnotes
        #[arg(long)]
        lenient: bool,

        /// Convert one document at a time
        #[arg(long)]
        sequential: bool,

        /// Write compact metadata JSON
        #[arg(long)]
        compact_json: bool,

        /// Text cleanup preset
        #[arg(long, value_enum)]
        cleanup: Option<CleanupLevel>,
    },

    /// Restructure a single file and print the HTML
    Html {
        /// Input HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Static path images are published under
        #[arg(long, value_name = "URL", env = "DOCREFLOW_IMAGE_PATH_STATIC")]
        image_path_static: Option<String>,

        /// Keep going on unknown list markers and duplicate footnotes
        #[arg(long)]
        lenient: bool,
    },

    /// Print the metadata of a file as JSON
    Meta {
        /// Input HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document information
    Info {
        /// Input HTML file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum CleanupLevel {
    /// Entity decoding and whitespace only
    Minimal,
    /// Also normalize Unicode (default)
    Standard,
}

impl From<CleanupLevel> for CleanupPreset {
    fn from(level: CleanupLevel) -> Self {
        match level {
            CleanupLevel::Minimal => CleanupPreset::Minimal,
            CleanupLevel::Standard => CleanupPreset::Standard,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input,
            html_path,
            image_path_static,
            lenient,
            sequential,
            compact_json,
            cleanup,
        } => {
            let options = build_options(
                image_path_static,
                lenient,
                sequential,
                compact_json,
                cleanup,
            );
            cmd_convert(&input, &html_path, &options)
        }
        Commands::Html {
            input,
            output,
            image_path_static,
            lenient,
        } => cmd_html(&input, output.as_deref(), image_path_static, lenient),
        Commands::Meta { input, compact } => cmd_meta(&input, compact),
        Commands::Info { input } => cmd_info(&input),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_options(
    image_path_static: Option<String>,
    lenient: bool,
    sequential: bool,
    compact_json: bool,
    cleanup: Option<CleanupLevel>,
) -> ConvertOptions {
    let mut parse = ParseOptions::new().with_parallel(!sequential);
    if lenient {
        parse = parse.lenient();
    }
    if let Some(level) = cleanup {
        parse = parse.with_cleanup(CleanupOptions::from_preset(level.into()));
    }

    let mut render = RenderOptions::new();
    if let Some(base) = image_path_static {
        render = render.with_image_base(base);
    }
    if compact_json {
        render = render.with_json_format(JsonFormat::Compact);
    }

    ConvertOptions::new()
        .with_parse_options(parse)
        .with_render_options(render)
}

fn cmd_convert(
    input: &Path,
    output_dir: &Path,
    options: &ConvertOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let registry = ConverterRegistry::with_defaults();

    let paths = if input.is_dir() {
        registry.collect_inputs(input)?
    } else {
        vec![input.to_path_buf()]
    };

    if paths.is_empty() {
        println!("{} {}", "No HTML files found in".yellow(), input.display());
        return Ok(());
    }

    log::info!(
        "converting {} document(s) into {}",
        paths.len(),
        output_dir.display()
    );

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let results = registry.convert_batch(&paths, options, |path| {
        pb.set_message(path.display().to_string());
        pb.inc(1);
    });
    pb.finish_with_message("Done!");

    let mut failed = 0;
    println!("\n{}", "Output files:".green().bold());
    for (path, result) in paths.iter().zip(results) {
        match result.and_then(|r| r.write_to(output_dir, &options.render)) {
            Ok((html, json)) => {
                println!("  {} {}", "├─".dimmed(), html.display());
                println!("  {} {}", "└─".dimmed(), json.display());
            }
            Err(e) => {
                failed += 1;
                eprintln!("  {} {}: {}", "✗".red(), path.display(), e);
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} documents failed", failed, paths.len()).into());
    }

    Ok(())
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    image_path_static: Option<String>,
    lenient: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut reflow = Reflow::new();
    if lenient {
        reflow = reflow.lenient();
    }
    if let Some(base) = image_path_static {
        reflow = reflow.with_image_base(base);
    }

    let html = reflow.process_file(input)?.to_html();

    if let Some(path) = output {
        fs::write(path, &html)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", html);
    }

    Ok(())
}

fn cmd_meta(input: &Path, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    // Lenient: metadata is wanted even when the body is malformed
    let json = Reflow::new().lenient().process_file(input)?.to_json(format)?;
    println!("{}", json);

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let result = Reflow::new().lenient().process_file(input)?;
    let metadata = &result.document().metadata;
    let stats = result.stats();

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    for (label, value) in metadata.fields() {
        if !value.is_empty() {
            println!("{}: {}", label.bold(), value);
        }
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!(
        "{}: {} ({} items)",
        "Lists".bold(),
        stats.list_count,
        stats.list_item_count
    );
    println!("{}: {}", "Images".bold(), stats.image_count);
    println!(
        "{}: {} found, {} linked, {} skipped",
        "Footnotes".bold(),
        stats.footnotes_found,
        stats.footnotes_linked,
        stats.footnotes_skipped
    );

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docreflow".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Restructure converter-produced HTML into publishable HTML");
    println!();
    println!("License: MIT");
}

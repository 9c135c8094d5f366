//! eocr CLI - OCR result container tool

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use eocr::render::{to_json, to_text};
use eocr::{
    compare_documents, read_file, sniff, sniff_path, write_file, Codec, Decoded, Document,
    FormatId, FormatRegistry, JsonFormat, LayoutOptions, TextOptions,
};

#[derive(Parser)]
#[command(name = "eocr")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Inspect, verify and generate OCR result containers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show container information
    Info {
        /// Input container file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Check header and checksum of one or more containers
    Verify {
        /// Input container files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Identify the container format from the file header
    Sniff {
        /// Input files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Lay out a text file as an OCR document
    FromText {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output container (defaults to the input with an .eocr extension)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Maximum symbols per line
        #[arg(short, long, env = "EOCR_LINE_LENGTH", default_value_t = 80)]
        line_length: i64,

        /// Maximum lines per page
        #[arg(short, long, env = "EOCR_PAGE_LENGTH", default_value_t = 200)]
        page_length: i64,
    },

    /// Export a container as plain text
    Text {
        /// Input container file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Text inserted between pages
        #[arg(long, value_name = "TEXT")]
        page_separator: Option<String>,

        /// Drop carriage returns
        #[arg(long)]
        strip_cr: bool,
    },

    /// Export a container as JSON
    Json {
        /// Input container file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Compare two containers
    Compare {
        /// Container under test
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Reference container
        #[arg(value_name = "REFERENCE")]
        reference: PathBuf,
    },

    /// Show version information
    Version,
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Info { input } => cmd_info(&input),
        Commands::Verify { inputs } => cmd_verify(&inputs),
        Commands::Sniff { inputs } => cmd_sniff(&inputs),
        Commands::FromText {
            input,
            output,
            line_length,
            page_length,
        } => cmd_from_text(&input, output.as_deref(), line_length, page_length),
        Commands::Text {
            input,
            output,
            page_separator,
            strip_cr,
        } => cmd_text(&input, output.as_deref(), page_separator, strip_cr),
        Commands::Json {
            input,
            output,
            compact,
        } => cmd_json(&input, output.as_deref(), compact),
        Commands::Compare { input, reference } => cmd_compare(&input, &reference),
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

fn write_output(output: Option<&Path>, content: &str) -> CliResult {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_info(input: &Path) -> CliResult {
    let data = fs::read(input)?;
    let format = sniff(&data);
    let decoded = Codec::new().decode_outcome(&data)?;

    println!("{}", "Container Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    if format.is_legacy() {
        println!("{}: {}", "Note".bold(), "legacy header".yellow());
    }
    println!("{}: {} bytes", "Size".bold(), data.len());

    let doc = match decoded {
        Decoded::Empty => {
            println!("{}: {}", "Content".bold(), "empty".yellow());
            return Ok(());
        }
        Decoded::Populated(doc) => doc,
    };

    println!("{}: {}", "Version".bold(), doc.version);
    if let Some(hash) = doc.content_hash_hex() {
        println!("{}: {}", "MD5".bold(), hash);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Pages".bold(), doc.page_count());
    println!("{}: {}", "Characters".bold(), doc.character_count());
    println!("{}: {}", "Tables".bold(), doc.tables.len());
    println!("{}: {}", "Table cells".bold(), doc.table_cells.len());

    for (index, page) in doc.pages.iter().enumerate() {
        println!(
            "  {} page {}: {}x{} @ {} dpi, {} characters",
            "├─".dimmed(),
            index + 1,
            page.width,
            page.height,
            page.dpi_x,
            page.character_count()
        );
    }

    Ok(())
}

fn cmd_verify(inputs: &[PathBuf]) -> CliResult {
    let mut failures = 0;
    for input in inputs {
        let data = fs::read(input)?;
        match eocr::verify(&data) {
            Ok(()) => println!("{} {}", "OK".green().bold(), input.display()),
            Err(e) => {
                failures += 1;
                println!("{} {}: {}", "FAIL".red().bold(), input.display(), e);
            }
        }
    }

    if failures > 0 {
        return Err(format!(
            "{} of {} containers failed verification",
            failures,
            inputs.len()
        )
        .into());
    }
    Ok(())
}

fn cmd_sniff(inputs: &[PathBuf]) -> CliResult {
    for input in inputs {
        let format = sniff_path(input)?;
        let label = match format {
            FormatId::Unknown => "unknown".yellow(),
            id if id.is_legacy() => format!("{} (legacy)", id).as_str().normal(),
            id => id.to_string().as_str().green(),
        };
        println!("{}: {}", input.display(), label);
    }
    Ok(())
}

fn read_input_text(input: &Path) -> io::Result<String> {
    if input.as_os_str() == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        Ok(content)
    } else {
        fs::read_to_string(input)
    }
}

fn default_output(input: &Path) -> PathBuf {
    let extension = FormatRegistry::standard()
        .lookup(FormatId::Eocr)
        .map_or("eocr", |info| info.extension);
    if input.as_os_str() == "-" {
        PathBuf::from("stdin").with_extension(extension)
    } else {
        input.with_extension(extension)
    }
}

fn cmd_from_text(
    input: &Path,
    output: Option<&Path>,
    line_length: i64,
    page_length: i64,
) -> CliResult {
    let content = read_input_text(input)?;
    let options = LayoutOptions::from_args(&[line_length, page_length])?;
    log::debug!(
        "Laying out {} bytes at {}x{}",
        content.len(),
        options.line_length,
        options.page_length
    );
    let doc = eocr::from_text(&content, &options)?;

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output(input));
    write_file(&output, &doc)?;

    println!(
        "{} {} ({} pages, {} characters)",
        "Saved to".green(),
        output.display(),
        doc.page_count(),
        doc.character_count()
    );
    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    page_separator: Option<String>,
    strip_cr: bool,
) -> CliResult {
    let doc = read_file(input)?;

    let mut options = TextOptions::new().with_strip_carriage_returns(strip_cr);
    if let Some(separator) = page_separator {
        options = options.with_page_separator(separator);
    }

    let text = to_text(&doc, &options)?;
    write_output(output, &text)
}

fn cmd_json(input: &Path, output: Option<&Path>, compact: bool) -> CliResult {
    let doc = read_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = to_json(&doc, format)?;
    write_output(output, &json)
}

fn cmd_compare(input: &Path, reference: &Path) -> CliResult {
    let input_doc: Document = read_file(input)?;
    let reference_doc: Document = read_file(reference)?;

    compare_documents(&input_doc, &reference_doc)?;
    println!("{} documents are identical", "OK".green().bold());
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "eocr".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("OCR result container tool");
    println!();
    println!("License: MIT");
}

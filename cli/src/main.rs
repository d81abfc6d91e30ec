//! mdtex CLI - Markdown to LaTeX conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use mdtex::{cache_key, ConvertOptions, Converter, RenderOptions};

#[derive(Parser)]
#[command(name = "mdtex")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert Markdown documents to LaTeX", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Markdown file to a complete LaTeX document
    #[command(alias = "c")]
    Convert {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (defaults to the input path with a .tex extension)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print the document to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Disable the conversion cache
        #[arg(long)]
        no_cache: bool,

        /// Cache directory
        #[arg(
            long,
            value_name = "DIR",
            env = "MDTEX_CACHE_DIR",
            default_value = ".mdtex-cache"
        )]
        cache_dir: PathBuf,

        /// Document title (defaults to the input file stem)
        #[arg(long)]
        title: Option<String>,

        /// Trim trailing table-cell separators for strict LaTeX compilers
        #[arg(long)]
        trim_table_cells: bool,
    },

    /// Print the content-derived cache key for a Markdown file
    Key {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            stdout,
            no_cache,
            cache_dir,
            title,
            trim_table_cells,
        } => cmd_convert(
            &input,
            output.as_deref(),
            stdout,
            no_cache,
            &cache_dir,
            title,
            trim_table_cells,
        ),
        Commands::Key { input } => cmd_key(&input),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    stdout: bool,
    no_cache: bool,
    cache_dir: &Path,
    title: Option<String>,
    trim_table_cells: bool,
) -> mdtex::Result<()> {
    let content = fs::read_to_string(input)?;

    let title = title.unwrap_or_else(|| {
        input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Converted Document".to_string())
    });
    let render = RenderOptions::new()
        .with_title(title)
        .with_trimmed_table_cells(trim_table_cells);
    let options = ConvertOptions::new().with_render_options(render);

    let mut converter = Converter::new().with_options(options);
    if !no_cache {
        log::debug!("using cache directory {}", cache_dir.display());
        converter = converter.with_fs_cache(cache_dir)?;
    }

    let latex = converter.convert(&content)?;

    if stdout {
        println!("{latex}");
        return Ok(());
    }

    let out_path = match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension("tex"),
    };
    fs::write(&out_path, &latex)?;
    println!(
        "{} {} -> {}",
        "converted".green().bold(),
        input.display(),
        out_path.display()
    );
    Ok(())
}

fn cmd_key(input: &Path) -> mdtex::Result<()> {
    let content = fs::read_to_string(input)?;
    println!("{}", cache_key(&content));
    Ok(())
}

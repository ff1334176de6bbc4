//! docucomment — render docu comments from Daedalus sources.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `docucomment < externals.d`
//! - **file mode**: `docucomment -o docs/externals scripts/*.d`

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use docucomment::{logging, parse_source, render, Document, ParseOptions, RenderOptions, DEFAULT_MARKER};
use std::collections::HashSet;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "docucomment",
    about = "Convert docu comments (description, @param, @return) into Markdown, HTML or JSON"
)]
struct Cli {
    /// Input files (glob patterns and directories supported). If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), html, json, comment
    #[arg(short = 'f', long, env = "DOCUCOMMENT_FORMAT", default_value = "markdown")]
    format: String,

    /// Comment marker stripped from each line
    #[arg(short = 'm', long, env = "DOCUCOMMENT_MARKER", default_value = DEFAULT_MARKER)]
    marker: String,

    /// Prepend an index of documented functions (markdown only)
    #[arg(long)]
    index: bool,

    /// Abort on the first file that cannot be read or parsed
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if cli.marker.trim().is_empty() {
        bail!("--marker must not be empty");
    }

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

fn parse_options(cli: &Cli) -> ParseOptions {
    ParseOptions::with_marker(cli.marker.trim())
}

fn render_options(cli: &Cli) -> RenderOptions {
    RenderOptions {
        marker: cli.marker.trim().to_string(),
        index: cli.index,
    }
}

/// stdin mode: read from stdin, write the rendered document to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let renderer = render::create_renderer(&cli.format, &render_options(cli))?;
    let doc = parse_source(&input, &parse_options(cli)).context("failed to parse stdin")?;
    tracing::info!(comments = doc.comments.len(), "parsed stdin");
    print!("{}", renderer.render(&doc)?);
    Ok(())
}

/// file mode: one output file per input file in the output directory.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    let renderer = render::create_renderer(&cli.format, &render_options(cli))?;
    let ext = renderer.file_extension();
    let parse_options = parse_options(cli);

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;
    let mut used_names = HashSet::new();

    for path in &input_files {
        let parsed = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))
            .and_then(|content| {
                parse_source(&content, &parse_options)
                    .with_context(|| format!("failed to parse {}", path.display()))
            });

        let doc = match parsed {
            Ok(doc) => doc,
            Err(e) if cli.strict => return Err(e),
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %format_args!("{:#}", e), "skipping file");
                continue;
            }
        };

        if doc.is_empty() {
            tracing::info!(file = %path.display(), "no docu comments, skipping");
            continue;
        }

        let stem = derive_output_name(path);
        let name = claim_output_name(stem.clone(), &mut used_names);
        if name != stem {
            tracing::warn!(file = %path.display(), output = %name, "output name already used, renaming");
        }
        let doc = Document {
            title: Some(name.clone()),
            ..doc
        };
        let out_path = output_dir.join(format!("{}.{}", name, ext));

        fs::write(&out_path, renderer.render(&doc)?)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        tracing::info!(
            file = %path.display(),
            output = %out_path.display(),
            comments = doc.comments.len(),
            "rendered"
        );
    }

    Ok(())
}

/// File extensions recognized as Daedalus sources when scanning directories.
const SUPPORTED_EXTENSIONS: &[&str] = &["d", "dae"];

/// Expand glob patterns into a list of real file paths.
/// Bare directory paths are scanned (non-recursively) for supported files.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                let supported = p
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext));
                if p.is_file() && supported {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            tracing::warn!(pattern = %pattern, "no files matched");
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Output file name (without extension): "scripts/externals.d" → "externals"
fn derive_output_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Reserve an output name, appending `_1`, `_2`, ... when it is taken.
fn claim_output_name(name: String, used: &mut HashSet<String>) -> String {
    let mut candidate = name.clone();
    let mut n = 1;
    while used.contains(&candidate) {
        candidate = format!("{}_{}", name, n);
        n += 1;
    }
    used.insert(candidate.clone());
    candidate
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use php_ast::ast::{self, sexpr::SExprFormatter};
use php_ast::{ParserOptions, Program};
use rayon::prelude::*;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Sexpr,
    Json,
}

#[derive(Parser)]
#[command(name = "php-ast")]
#[command(about = "Dump the syntax tree of PHP files", long_about = None)]
struct Cli {
    /// Files or directories to parse; directories are searched for .php files
    #[arg(name = "PATH", required = true)]
    paths: Vec<PathBuf>,

    #[arg(long, value_enum, default_value = "sexpr")]
    format: Format,

    /// Print node positions (sexpr only)
    #[arg(long)]
    positions: bool,

    /// Do not attach comments to nodes
    #[arg(long)]
    no_comments: bool,

    /// Accept `<?` as an open tag
    #[arg(long)]
    short_open_tag: bool,
}

struct Parsed {
    path: PathBuf,
    program: Program,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = ParserOptions::new()
        .short_open_tag(cli.short_open_tag)
        .attach_comments(!cli.no_comments);

    let files = collect_files(&cli.paths);
    debug!(count = files.len(), "parsing files");

    // rayon keeps the input order in collect
    let parsed = files
        .par_iter()
        .map(|path| parse_file(path, options))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut failed = 0;
    for Parsed { path, program } in &parsed {
        println!("// {}", path.display());
        match cli.format {
            Format::Sexpr => {
                let mut formatter = SExprFormatter::new()
                    .with_positions(cli.positions)
                    .with_comments(!cli.no_comments);
                program.root.walk(&mut formatter);
                println!("{}", formatter.finish());
            }
            Format::Json => {
                let json = ast::to_json(&program.root)
                    .with_context(|| format!("serializing {}", path.display()))?;
                println!("{json}");
            }
        }

        if program.has_errors() {
            failed += 1;
            for error in &program.errors {
                eprintln!("{}: {error}", path.display());
            }
        }
    }

    if failed > 0 {
        warn!(failed, "files with parse errors");
        std::process::exit(1);
    }

    Ok(())
}

fn collect_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(php_files(path));
        } else {
            files.push(path.clone());
        }
    }
    files
}

/// `.php` files under `dir`, sorted. Entries that cannot be read are logged
/// and skipped.
fn php_files(dir: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(%err, "skipping unreadable entry");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "php"))
        .collect();
    found.sort();
    found
}

fn parse_file(path: &Path, options: ParserOptions) -> anyhow::Result<Parsed> {
    let source = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let program = php_ast::Parser::with_options(&source, options).parse_program();
    Ok(Parsed {
        path: path.to_path_buf(),
        program,
    })
}

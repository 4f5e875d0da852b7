//! Lexvec CLI — interactive explorer for word-embedding files.
//!
//! Two modes:
//! - **REPL mode**: `lexvec FILE` — interactive prompt (if stdin is a TTY)
//! - **Pipe mode**: `echo "syn queen" | lexvec FILE` — line-by-line from stdin
//!
//! `lexvec FILE --cut N` instead writes a head-truncated copy of FILE and
//! exits; useful for cutting multi-gigabyte embedding files down to an
//! interactive size.

mod commands;
mod parse;
mod repl;

use clap::Parser;
use lexvec_engine::DEFAULT_DIMENSION;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lexvec", about = "Explore word-embedding similarity")]
struct Cli {
    /// Vector data file (.vec files carry a count/dimension header)
    file: PathBuf,

    /// Vector dimension the store is configured for
    #[arg(long, default_value_t = DEFAULT_DIMENSION)]
    dimension: usize,

    /// Write a copy cut to the first N entries and exit
    #[arg(long, value_name = "N")]
    cut: Option<usize>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(limit) = cli.cut {
        let dst = lexvec_loader::cut_file_name(&cli.file, limit);
        if let Err(e) = lexvec_loader::truncate_to(&cli.file, &dst, limit) {
            eprintln!("cut failed: {e}");
            process::exit(1);
        }
        println!("wrote {}", dst.display());
        return;
    }

    let store = match lexvec_loader::load_path(&cli.file, cli.dimension) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("failed to load {}: {e}", cli.file.display());
            process::exit(1);
        }
    };
    println!(
        "loaded {} vectors of dimension {}",
        store.len(),
        store.dimension()
    );

    if std::io::stdin().is_terminal() {
        repl::run_repl(&store);
    } else {
        process::exit(repl::run_pipe(&store));
    }
}

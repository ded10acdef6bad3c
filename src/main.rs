//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::fs::File;
use std::io::{self, Write};
use std::process::exit;

use log::{info, warn, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use hufftree::huffman_coding::code_table::TreeStats;
use hufftree::huffman_coding::huffman::build_tree;
use hufftree::huffman_coding::render::render;
use hufftree::tools::cli::{huffopts_init, HuffOpts};
use hufftree::tools::freq_count::tabulate;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace. The cli narrows this down.
    // Logs go to stderr so stdout only carries the tree.
    if TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("warning: could not start the logger");
    }

    let opts = huffopts_init();
    info!("Log level set to {}", opts.verbose);

    if let Err(e) = run(&opts) {
        eprintln!("error: {}", e);
        exit(1);
    }
}

/// Count, build and print. Returns an error only for I/O failures.
fn run(opts: &HuffOpts) -> io::Result<()> {
    let fin = File::open(&opts.file).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("cannot open {}: {}", opts.file.display(), e),
        )
    })?;
    let freqs = tabulate(fin).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("cannot read {}: {}", opts.file.display(), e),
        )
    })?;
    info!(
        "Read {} bytes from {}, {} distinct symbols",
        freqs.total(),
        opts.file.display(),
        freqs.distinct()
    );

    let root = match build_tree(&freqs) {
        Some(root) => root,
        None => {
            warn!("A tree has not been constructed.");
            println!("No data: {} is empty, no tree was built.", opts.file.display());
            return Ok(());
        }
    };
    info!(
        "Built tree with {} leaves, depth {}. Rendering as {:?} ({})",
        root.leaf_count(),
        root.depth(),
        opts.layout,
        opts.style
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(render(&root, opts.layout, opts.style).as_bytes())?;

    if opts.stats {
        let stats = TreeStats::from_tree(&root);
        writeln!(out)?;
        writeln!(out, "bytes:           {}", stats.total)?;
        writeln!(out, "symbols:         {}", stats.symbols)?;
        writeln!(out, "tree depth:      {}", stats.depth)?;
        writeln!(out, "encoded bits:    {}", stats.weighted_bits)?;
        writeln!(out, "bits per symbol: {:.3}", stats.bits_per_symbol())?;
    }
    out.flush()
}

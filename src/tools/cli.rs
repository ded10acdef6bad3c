use std::ffi::OsString;
use std::path::PathBuf;
use std::process::exit;
use std::{fmt::Display, fmt::Formatter};

use clap::Parser;

use crate::huffman_coding::render::{Layout, Style};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    fn from_flags(quiet: bool, count: u8) -> Self {
        if quiet {
            return Verbosity::Quiet;
        }
        match count {
            0 => Verbosity::Warnings,
            1 => Verbosity::Info,
            2 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

impl Display for Verbosity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    name = "hufftree",
    version,
    about = "Build the Huffman tree of a file and print it",
    long_about = None)]
pub struct Args {
    /// File to analyze
    #[clap(value_parser)]
    pub file: PathBuf,

    /// Print one `symbol: code` line per leaf instead of the tree diagram
    #[clap(short = 'l', long = "list", action)]
    pub list: bool,

    /// Glyphs used to draw the tree diagram
    #[clap(long, value_enum, default_value_t = Style::Ascii)]
    pub style: Style,

    /// Print tree statistics after the tree
    #[clap(short = 's', long = "stats", action)]
    pub stats: bool,

    /// Sets verbosity. -v shows progress, -vvv traces every merge
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log messages
    #[clap(short = 'q', long = "quiet", action)]
    pub quiet: bool,
}

/// Every user settable option that controls program behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffOpts {
    /// Name of the file to read for input
    pub file: PathBuf,
    /// Flat list or diagram
    pub layout: Layout,
    /// Diagram glyphs
    pub style: Style,
    /// Print the summary after the tree
    pub stats: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            file: PathBuf::new(),
            layout: Layout::Diagram,
            style: Style::Ascii,
            stats: false,
            verbose: Verbosity::Warnings,
        }
    }

    /// Parse options from an argument list. The first item is the program name.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Args::try_parse_from(args)?;
        Ok(Self::from(args))
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Args> for HuffOpts {
    fn from(args: Args) -> Self {
        Self {
            file: args.file,
            layout: if args.list {
                Layout::List
            } else {
                Layout::Diagram
            },
            style: args.style,
            stats: args.stats,
            verbose: Verbosity::from_flags(args.quiet, args.verbose),
        }
    }
}

/// Read the command line. A usage error prints the usage to stderr and exits with status 1;
/// --help and --version print to stdout and exit with status 0.
pub fn huffopts_init() -> HuffOpts {
    let opts = match HuffOpts::try_from_args(std::env::args_os()) {
        Ok(opts) => opts,
        Err(e) if e.use_stderr() => {
            eprint!("{}", e);
            exit(1);
        }
        Err(e) => e.exit(),
    };
    // Set the log level
    log::set_max_level(opts.verbose.level_filter());
    opts
}

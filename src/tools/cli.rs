use std::path::PathBuf;
use std::{fmt::Display, fmt::Formatter};

use clap::Parser;
use log::{info, LevelFilter};

/// Default location of the dictionary file written by encode and read by decode.
pub const DEFAULT_DICTIONARY: &str = "codes.dict";

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Log filter matching this verbosity.
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Off,
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// Encode or Decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Options controlling one run of the coder.
#[derive(Debug, Clone)]
pub struct ShannonOpts {
    /// Encode/Decode
    pub op_mode: Mode,
    /// Where the code table is written (encode) or read from (decode)
    pub dictionary: PathBuf,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl ShannonOpts {
    pub fn new() -> Self {
        Self {
            op_mode: Mode::Encode,
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            verbose: Verbosity::Warnings,
        }
    }
}

impl Default for ShannonOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Shannon-Fano entropy coder",
    long_about = "
    Reads raw bytes from standard input and writes the result to standard output.

    Encoding builds a prefix-free Shannon-Fano code from the symbol frequencies of the input,
    stores the code table in the dictionary file and emits the packed bit stream.
    Decoding reads the code table back from the dictionary file and restores the original bytes."
)]
pub struct Args {
    /// Encode standard input (the default)
    #[clap(short = 'e', long = "encode")]
    encode: bool,

    /// Decode standard input using the dictionary file
    #[clap(short = 'd', long = "decode", conflicts_with = "encode")]
    decode: bool,

    /// Dictionary file holding the code table
    #[clap(short = 'D', long = "dictionary", default_value = DEFAULT_DICTIONARY)]
    dictionary: PathBuf,

    /// Suppress all log output
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Sets verbosity. -v shows progress, -vvv is chatty
    #[clap(short = 'v', action = clap::ArgAction::Count)]
    v: u8,
}

impl From<Args> for ShannonOpts {
    fn from(args: Args) -> Self {
        let mut opts = ShannonOpts::new();
        // -e and -d conflict, so at most one is set.
        if args.decode && !args.encode {
            opts.op_mode = Mode::Decode
        };
        opts.dictionary = args.dictionary;
        opts.verbose = match (args.quiet, args.v) {
            (true, _) => Verbosity::Quiet,
            (false, 0) => Verbosity::Warnings,
            (false, 1) => Verbosity::Info,
            (false, 2) => Verbosity::Debug,
            (false, _) => Verbosity::Trace,
        };
        opts
    }
}

/// Parse the process arguments into ShannonOpts and set the log level. Exits with a usage
/// message on bad arguments.
pub fn shannon_opts_init() -> ShannonOpts {
    let opts = ShannonOpts::from(Args::parse());
    log::set_max_level(opts.verbose.level_filter());

    info!("---- Shannon-Fano Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Dictionary file is {}", opts.dictionary.display());
    info!("---- Shannon-Fano Initialization End ----");
    opts
}

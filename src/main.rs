//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use std::io;
use std::process::ExitCode;

use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use shannon_fano::run;
use shannon_fano::tools::cli::shannon_opts_init;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> ExitCode {
    // Log to stderr, stdout carries the coded data. The level is narrowed once the options are read.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("shannon-fano: logger unavailable: {}", e);
    }

    let opts = shannon_opts_init();

    match run(&opts, &mut io::stdin().lock(), &mut io::stdout().lock()) {
        Ok(()) => {
            info!("Done.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            if log::max_level() >= LevelFilter::Error {
                error!("{} failed: {}", opts.op_mode, e);
            } else {
                eprintln!("shannon-fano: {} failed: {}", opts.op_mode, e);
            }
            ExitCode::FAILURE
        }
    }
}

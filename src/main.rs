use std::{
    io::{self, Read, Write},
    process::ExitCode,
};

use clap::Parser;
use octconf::{translate_with, xml::element::Layout};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// octconf translates a configuration program read from standard input into
/// XML on standard output. Values logged by `print` go to standard error.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Emits the XML without indentation.
    #[arg(short, long)]
    compact: bool,

    /// Does not write the print log to standard error.
    #[arg(short, long)]
    quiet: bool,
}

/// Installs a stderr log subscriber, but only when `RUST_LOG` asks for one,
/// so that standard error otherwise carries nothing but the print log.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    let mut source = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut source) {
        eprintln!("error: failed to read standard input: {e}");
        return ExitCode::FAILURE;
    }

    let layout = if args.compact { Layout::Compact } else { Layout::Indented };
    let translation = match translate_with(&source, layout) {
        Ok(translation) => translation,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        },
    };

    if !args.quiet {
        for line in &translation.print_log {
            eprintln!("{line}");
        }
    }

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(translation.xml.as_bytes())
                          .and_then(|()| stdout.flush())
    {
        eprintln!("error: failed to write output: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

use std::fs;

use clap::Parser;
use forma::{ChainOptions, order_demonstration, order_source};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// forma orders Conway-style numeric forms such as `{0|1}` together with
/// plain integers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells forma to read values from a file instead of the argument.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Rejects forms whose left elements are not all below their right
    /// elements.
    #[arg(short, long)]
    strict: bool,

    /// Raises log verbosity; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Values to order, e.g. "{|} {0|1} -1 2". Without it, a built-in
    /// demonstration list is ordered.
    contents: Option<String>,
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_env("FORMA_LOG").unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr))
                                  .with(env_filter)
                                  .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let Some(contents) = args.contents else {
        println!("{}", order_demonstration());
        return;
    };

    let source = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    let options = ChainOptions { strict: args.strict };
    match order_source(&source, &options) {
        Ok(chain) => println!("{chain}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

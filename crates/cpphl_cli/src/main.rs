mod args;
mod commands;

use tracing_subscriber::EnvFilter;

use crate::args::{parse_args, usage};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() {
    let args = match parse_args(std::env::args().skip(1).collect()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    init_logging(args.verbose);

    let result = match args.cmd.as_str() {
        "html" => commands::html::run(&args),
        "fragments" => commands::fragments::run(&args),
        "check" => commands::check::run(&args),
        "keywords" => commands::keywords::run(&args),
        other => Err(format!("Unknown command: {other}\n{}", usage())),
    };
    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }
}

/// Logs go to stderr; `CPPHL_LOG` takes an `EnvFilter` directive string.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("CPPHL_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

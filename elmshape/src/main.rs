use anyhow::Context;
use elmshape_backend::{check, DiagnosticsContext, Failure, ValidType};
use elmshape_log::*;
use pico_args::Arguments;
use rustc_version_runtime::version_meta;
use std::{env::current_exe, fs, path::PathBuf, process::exit};

const PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug)]
struct Args {
    debug: bool,
    help: bool,
    no_color: bool,
    verbose: bool,
    version: bool,
    source_file: Option<String>,
}

fn process_args() -> Result<Args, pico_args::Error> {
    let mut args = Arguments::from_env();

    Ok(Args {
        debug: args.contains(["-d", "--debug"]),
        help: args.contains(["-h", "--help"]),
        no_color: args.contains("--no-color"),
        verbose: args.contains(["-v", "--verbose"]),
        version: args.contains(["-V", "--version"]),
        source_file: args.free_from_str()?,
    })
}

fn usage() -> String {
    let current_exe = current_exe().unwrap_or_else(|_| PathBuf::from(PACKAGE_NAME));
    let filename = current_exe
        .file_name()
        .map_or_else(|| PACKAGE_NAME.into(), |name| name.to_string_lossy());

    format!(
        concat!(
            "Usage: {} [options] file\n",
            "Options:\n",
            "   -d, --debug - print the type model in its raw form\n",
            "   -h, --help - view help\n",
            "   --no-color - don't colour diagnostics\n",
            "   -v, --verbose - enable verbose output\n",
            "   -V, --version - show version\n",
        ),
        filename
    )
}

fn read_source(path: &str) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("couldn't read {}", path))
}

fn print_types(types: &[ValidType], debug: bool) {
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            println!();
        }

        if debug {
            println!("{:#?}", ty);
        } else {
            println!("{}", ty);
        }
    }
}

/// The closing line printed after a file's diagnostics.
fn summary(failure: &Failure, origin: &str) -> String {
    let s_if_plural = if failure.len() == 1 { "" } else { "s" };

    match failure {
        Failure::Syntax(_) => {
            format!("couldn't parse {} due to {} syntax error{}", origin, failure.len(), s_if_plural)
        },

        Failure::Invalid(_) => format!("found {} problem{} in {}", failure.len(), s_if_plural, origin),
    }
}

fn report(failure: &Failure, source: &str, origin: &str, colour: bool) {
    let ctx = DiagnosticsContext::new(source, Some(origin.to_owned())).with_colour(colour);

    for diagnostic in failure.diagnostics(&ctx) {
        diagnostic.emit();
    }

    error!("{}", summary(failure, origin));
}

fn main() {
    let args = match process_args() {
        Ok(args) => args,

        Err(pico_args::Error::UnusedArgsLeft(args)) => {
            let s_if_plural = if args.len() == 1 { "" } else { "s" };

            error!("unknown argument{}: {}", s_if_plural, args.join(", "));

            eprintln!("{}", usage());
            exit(1);
        },

        Err(err) => {
            error!("{}", err);
            eprintln!("{}", usage());
            exit(1);
        },
    };

    if args.no_color {
        disable_colour();
    }

    set_verbose(args.verbose);

    if args.help {
        println!("{}", usage());
        return;
    } else if args.version || args.verbose {
        println!("{} {}", PACKAGE_NAME, VERSION);

        if args.verbose {
            println!("Compiled with {}", version_meta().short_version_string);
        }

        if args.version {
            return;
        }
    }

    let source_file = args.source_file.unwrap_or_else(|| {
        error!("no source file provided");
        eprintln!("{}", usage());
        exit(1);
    });

    let source = match read_source(&source_file) {
        Ok(res) => res,

        Err(err) => {
            error!("{:#}", err);
            exit(2);
        },
    };

    if args.verbose {
        info!("checking {}...", source_file);
    }

    match check(&source) {
        Ok(types) => {
            trace!("found {} type declarations", types.len());
            print_types(&types, args.debug);
        },

        Err(failure) => {
            report(&failure, &source, &source_file, !args.no_color);
            exit(2);
        },
    }
}

//! HDLC - handle resolver CLI.

use hdlc::commands::{
    check_file, list_modules, parse_check_args, parse_handle, report_error, resolve_handles,
    CliError, ResolveOptions,
};

fn main() {
    hdlc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "resolve" => {
            let mut options = ResolveOptions::default();
            let mut handles = Vec::new();

            for arg in args.iter().skip(2) {
                if arg == "--no-parallel" {
                    options.parallel = false;
                } else if arg == "--fail-fast" {
                    options.fail_fast = true;
                } else if arg == "--verbose" || arg == "-v" {
                    options.verbose = true;
                } else if arg.starts_with("--") {
                    eprintln!("error: unknown option '{arg}'");
                    std::process::exit(1);
                } else {
                    handles.push(arg.clone());
                }
            }

            if handles.is_empty() {
                eprintln!("Usage: hdlc resolve <handle>... [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --no-parallel   Resolve handles one at a time");
                eprintln!("  --fail-fast     Stop at the first failure");
                eprintln!("  -v, --verbose   Show kind, type and members");
                std::process::exit(1);
            }

            resolve_handles(&handles, &options)
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: hdlc parse <handle>");
                eprintln!("Example: hdlc parse asyncio.tasks#Task.cancel");
                std::process::exit(1);
            }
            parse_handle(&args[2])
        }
        "check" => match parse_check_args(&args[2..]) {
            Ok((path, options)) => check_file(path, &options),
            Err(err) => {
                report_error(&err);
                eprintln!("Usage: hdlc check <file> [--no-parallel] [--fail-fast] [-v]");
                std::process::exit(1);
            }
        },
        "modules" => list_modules(),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("hdlc {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        exit_with(&err);
    }
}

fn exit_with(err: &CliError) -> ! {
    report_error(err);
    std::process::exit(1);
}

fn print_usage() {
    println!("hdlc - resolve `module.path#attr.chain` handles");
    println!();
    println!("Usage: hdlc <command> [options]");
    println!();
    println!("Commands:");
    println!("  resolve <handle>...  Resolve handles against the built-in modules");
    println!("  parse <handle>       Show how a handle splits (no imports)");
    println!("  check <file>         Resolve every handle listed in a file");
    println!("  modules              List the built-in modules");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Resolve/check options:");
    println!("  --no-parallel        Resolve handles one at a time");
    println!("  --fail-fast          Stop at the first failure");
    println!("  -v, --verbose        Show kind, type and members");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable logging (e.g. RUST_LOG=hdl_runtime=debug)");
    println!("  HDLC_LOG_TREE        Render log spans as a tree");
}

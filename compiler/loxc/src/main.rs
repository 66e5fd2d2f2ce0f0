//! Lox front-end CLI.

use loxc::commands::{
    check_file, explain_error, first_positional, lex_file, parse_check_options, EXIT_FAILURE,
};

fn main() {
    loxc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let status = match command.as_str() {
        "lex" => {
            let Some(path) = first_positional(&args[2..]) else {
                eprintln!("Usage: lox lex <file.lox>");
                std::process::exit(EXIT_FAILURE);
            };
            lex_file(path)
        }
        "check" => {
            let options = match parse_check_options(&args[2..]) {
                Ok(options) => options,
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(EXIT_FAILURE);
                }
            };
            let Some(path) = first_positional(&args[2..]) else {
                eprintln!("Usage: lox check <file.lox> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --color=<mode>       Color output: auto, always, never");
                eprintln!("  --error-limit=<n>    Stop after n errors (0 = unlimited)");
                eprintln!("  --no-dedup           Show repeated identical errors");
                std::process::exit(EXIT_FAILURE);
            };
            check_file(path, &options)
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: lox explain <ERROR_CODE>");
                eprintln!("Example: lox explain E0002");
                std::process::exit(EXIT_FAILURE);
            }
            explain_error(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("lox {}", env!("CARGO_PKG_VERSION"));
            0
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            EXIT_FAILURE
        }
    };

    std::process::exit(status);
}

fn print_usage() {
    println!("Lox front end");
    println!();
    println!("Usage: lox <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.lox>       Tokenize and display tokens");
    println!("  check <file.lox>     Report lexical errors as diagnostics");
    println!("  explain <code>       Explain an error code (e.g., E0002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Check options:");
    println!("  --color=<mode>       Color output: auto, always, never");
    println!("  --error-limit=<n>    Stop after n errors (0 = unlimited, default 10)");
    println!("  --no-dedup           Show repeated identical errors");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=debug) to enable tracing output.");
}

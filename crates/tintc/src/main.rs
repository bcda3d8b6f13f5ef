//! Tint CLI
//!
//! One-shot front end for the tag highlighter: scans a file and reports
//! colorized ranges, renders them with ANSI colors, or checks tag balance.

use tintc::commands::{check_file, render_ansi, scan_file, CliOptions};

fn main() {
    tintc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "scan" | "ansi" | "check" => {
            let mut options = CliOptions::default();
            let mut file = None;

            for arg in args.iter().skip(2) {
                if let Some(path) = arg.strip_prefix("--config=") {
                    options.config_path = Some(path.into());
                } else if !arg.starts_with('-') && file.is_none() {
                    file = Some(arg.clone());
                } else {
                    eprintln!("error: unrecognized argument `{arg}`");
                    std::process::exit(1);
                }
            }

            let Some(path) = file else {
                eprintln!("Usage: tint {command} <file> [--config=<settings.json>]");
                std::process::exit(1);
            };

            let outcome = match command.as_str() {
                "scan" => scan_file(&path, &options),
                "ansi" => render_ansi(&path, &options),
                _ => check_file(&path, &options),
            };

            match outcome {
                Ok(code) => std::process::exit(code),
                Err(err) => {
                    report_error(&err);
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("error: unknown command `{command}`");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn report_error(err: &dyn std::error::Error) {
    eprintln!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}

fn print_usage() {
    println!("Tint - rainbow highlighting for markup tags");
    println!();
    println!("Usage:");
    println!("  tint scan <file>   List colorized ranges as line:col pairs");
    println!("  tint ansi <file>   Render the file with ANSI tag colors");
    println!("  tint check <file>  Report tags left open at end of file");
    println!();
    println!("Options:");
    println!("  --config=<path>    JSON settings file (colors, ignoredTags)");
    println!();
    println!("Supported file types: .html, .htm, .jsx, .tsx");
}

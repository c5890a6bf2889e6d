//! Tally Language CLI
//!
//! Command-line interface for the Tally lexer: dumps the token stream for a
//! file, or tokenizes lines interactively.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

use tally_lang::{tokenize, Diagnostic, VERSION};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() == 1 {
        // No arguments: start REPL
        println!("Tally v{} - Lexer", VERSION);
        println!("Type 'exit' to quit\n");
        repl();
        return;
    }

    let mut show_help = false;
    let mut filename: Option<&String> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--help" | "-h" => show_help = true,
            _ if arg.starts_with('-') => {
                eprintln!("Unknown flag: {}", arg);
                print_usage();
                process::exit(1);
            }
            _ => filename = Some(arg),
        }
    }

    if show_help {
        print_help();
        return;
    }

    if let Some(file) = filename {
        if let Err(e) = lex_file(file) {
            eprintln!("{}", e);
            process::exit(1);
        }
    } else {
        eprintln!("Error: No input file specified");
        print_usage();
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: tally [OPTIONS] [script]");
    eprintln!("       tally --help");
}

fn print_help() {
    println!("Tally v{} - A small expression-oriented language", VERSION);
    println!();
    println!("USAGE:");
    println!("    tally [OPTIONS] [script]");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help      Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    tally script.tly    Show tokens from lexing a script");
    println!("    tally               Start interactive token REPL");
}

/// Lex a script and print its token stream
///
/// On a lexical error the diagnostic report is the error string the caller
/// prints before exiting nonzero.
fn lex_file(filename: &str) -> Result<(), String> {
    let source = fs::read_to_string(filename)
        .map_err(|e| format!("Failed to read file '{}': {}", filename, e))?;

    let tokens = tokenize(&source, filename)
        .map_err(|e| Diagnostic::with_source(e, filename, &source).format())?;

    println!("Tokens for '{}':", filename);
    println!("{}", "=".repeat(60));

    for (i, token) in tokens.iter().enumerate() {
        println!("{:4}: {:10} | {:?}", i, token.kind.to_string(), token.lexeme);
    }

    println!("{}", "=".repeat(60));
    println!("Total tokens: {}", tokens.len());

    Ok(())
}

/// Start an interactive REPL that tokenizes each input line
fn repl() {
    let mut line_number = 1;

    loop {
        print!("tally:{} > ", line_number);
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {
                let input = input.trim();

                if input == "exit" || input == "quit" {
                    break;
                }

                if input.is_empty() {
                    continue;
                }

                match tokenize(input, "stdin") {
                    Ok(tokens) => {
                        for token in &tokens {
                            println!("  {:10} | {:?}", token.kind.to_string(), token.lexeme);
                        }
                    }
                    Err(e) => eprintln!("{}", Diagnostic::with_source(e, "stdin", input).format()),
                }

                line_number += 1;
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }

    println!("\nGoodbye!");
}

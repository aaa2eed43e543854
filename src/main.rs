use std::{fs, process::ExitCode};

use clap::Parser;
use monkey::{
    config::Config, interpreter::evaluator::core::Evaluator, parse_program, repl::Repl,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// monkey is a tree-walking interpreter for the Monkey programming language.
///
/// Without arguments it starts an interactive shell.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells monkey to read CONTENTS as a file path instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the parsed program in its fully parenthesized form before its
    /// value.
    #[arg(short, long)]
    dump_ast: bool,

    /// Neither loads nor saves the shell history file.
    #[arg(long)]
    no_history: bool,

    /// Script to evaluate. Starts the shell when omitted.
    contents: Option<String>,
}

/// Installs a stderr log subscriber when `RUST_LOG` is set.
///
/// Enable with `RUST_LOG=monkey=debug` or `RUST_LOG=monkey=trace`.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_target(true)
                                                        .with_level(true)
                                                        .with_writer(std::io::stderr))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let mut config = Config::new().with_dump_ast(args.dump_ast);
    if args.no_history {
        config = config.without_history();
    }

    match args.contents {
        Some(contents) => run_script(&config, args.file, contents),
        None => run_shell(config),
    }
}

fn run_shell(config: Config) -> ExitCode {
    let user = std::env::var("USER").or_else(|_| std::env::var("USERNAME"))
                                    .unwrap_or_else(|_| "there".to_owned());
    println!("Hello {user}! This is the Monkey programming language!");
    println!("Feel free to type in commands (:q to quit)");

    match Repl::new(config).and_then(|mut repl| repl.start()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ReadlineError: {e}");
            ExitCode::FAILURE
        },
    }
}

fn run_script(config: &Config, is_file: bool, contents: String) -> ExitCode {
    let script = if is_file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    let program = match parse_program(&script) {
        Ok(program) => program,
        Err(errors) => {
            for error in &errors {
                eprintln!("{error}");
            }
            return ExitCode::FAILURE;
        },
    };

    if config.dump_ast {
        println!("AST: {program}");
    }

    match Evaluator::new().eval_program(&program) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        },
    }
}

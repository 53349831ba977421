use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use log::LevelFilter;
use semant::{
    ast::symbol::Symbol,
    errors::errors::SemantError,
    lexer::lexer::tokenize,
    parser::parser::parse,
    render_error,
    type_checker::type_checker::type_check,
};

/// Type checks a source file and reports every static semantic error.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Source file to check
    file: PathBuf,

    /// Trace every node the checker visits
    #[arg(short, long)]
    verbose: bool,

    /// Name of the entry function
    #[arg(long, default_value = "main")]
    entry: String,

    /// Print the type-annotated AST when checking succeeds
    #[arg(long)]
    emit_typed_ast: bool,
}

const EXIT_FAILURE: u8 = 1;
const EXIT_INTERNAL: u8 = 2;
const EXIT_NO_INPUT: u8 = 66;

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            LevelFilter::Trace
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let file_name = args.file.to_string_lossy().to_string();

    let source = match read_to_string(&args.file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_name, error);
            return ExitCode::from(EXIT_NO_INPUT);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone()) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprint!("{}", render_error(&error, &file_name, &source));
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    log::info!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let mut program = match parse(tokens) {
        Ok(program) => program,
        Err(error) => {
            eprint!("{}", render_error(&error, &file_name, &source));
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    log::info!("Parsed in {:?}", parse_start.elapsed());

    let type_check_start = Instant::now();
    let type_checker = match type_check(&mut program, Symbol::intern(&args.entry)) {
        Ok(type_checker) => type_checker,
        Err(error) => {
            eprintln!("{}", SemantError::from(error));
            return ExitCode::from(EXIT_INTERNAL);
        }
    };

    log::info!("Type checked in {:?}", type_check_start.elapsed());

    if type_checker.diagnostics.has_errors() {
        for line in type_checker.diagnostics.render() {
            eprintln!("{}", line);
        }
        eprintln!("{}", SemantError::Halted(type_checker.diagnostics));
        return ExitCode::from(EXIT_FAILURE);
    }

    if args.emit_typed_ast {
        println!("{:#?}", program);
    }

    log::info!("Total time: {:?}", start.elapsed());
    ExitCode::SUCCESS
}

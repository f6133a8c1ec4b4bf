use lex::Lexer;
use parse::Parser;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser as ClapParser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(ClapParser, Debug)]
#[command(name = "monkey", version, about = "Lexer and parser driver for monkey source files")]
struct Monkey {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every token in a source file.
    Lex(LexArgs),
    /// Run the parser over a source file.
    Parse(ParseArgs),
}

#[derive(Args, Debug)]
struct LexArgs {
    source: PathBuf,
}

#[derive(Args, Debug)]
struct ParseArgs {
    source: PathBuf,
}

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_source(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading source");
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn main() -> Result<()> {
    let monkey = Monkey::parse();
    init_tracing(monkey.verbose);

    match &monkey.command {
        Command::Lex(args) => {
            let content = read_source(&args.source)?;
            let mut out = BufWriter::new(io::stdout().lock());
            for token in Lexer::new(&content).tokens() {
                writeln!(out, "{:?}", token)?;
            }
            out.flush()?;
        }
        Command::Parse(args) => {
            let content = read_source(&args.source)?;
            let mut parser = Parser::new(Lexer::new(&content));
            let program = parser
                .parse_program()
                .with_context(|| format!("failed to parse {}", args.source.display()))?;
            println!("{:#?}", program);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Monkey::command().debug_assert();
    }

    #[test]
    fn lex_command() {
        let monkey = Monkey::try_parse_from(["monkey", "lex", "main.mk"]).unwrap();

        assert_eq!(monkey.verbose, 0);
        match monkey.command {
            Command::Lex(args) => assert_eq!(args.source, PathBuf::from("main.mk")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn verbose_is_global_and_counted() {
        let monkey = Monkey::try_parse_from(["monkey", "parse", "main.mk", "-vv"]).unwrap();

        assert_eq!(monkey.verbose, 2);
        assert!(matches!(monkey.command, Command::Parse(_)));
    }

    #[test]
    fn missing_source_is_rejected() {
        assert!(Monkey::try_parse_from(["monkey", "lex"]).is_err());
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "debug");
        assert_eq!(level_for(2), "trace");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn read_missing_source() {
        let err = read_source(Path::new("does/not/exist.mk")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.mk"));
    }
}

//! tableparse - run the sample table-driven grammars

mod parse;
mod repl;
mod table;
mod tokens;

use clap::Parser;
use log::LevelFilter;

/// Run the sample table-driven grammars.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Args {
    /// Log more, repeat for more detail. `RUST_LOG` overrides this.
    #[clap(short, long, global = true, parse(from_occurrences))]
    verbose: usize,

    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Table(table::Table),
    Parse(parse::Parse),
    Tokens(tokens::Tokens),
    Repl(repl::ReplArgs),
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match &args.command {
        Command::Table(table) => table.run(),
        Command::Parse(parse) => parse.run(),
        Command::Tokens(tokens) => tokens.run(),
        Command::Repl(repl) => repl.run(),
    }
}

//! Parse input taken from the command line, printing the result.

use grammars::GrammarName;

/// Parse the input with a grammar and print the result
#[derive(clap::Parser)]
pub struct Parse {
    /// The grammar to use: select, assignment or builder
    grammar: GrammarName,

    /// The text to parse
    input: String,
}

impl Parse {
    /// Run the subcommand, parsing and printing the result.
    pub(crate) fn run(&self) {
        let grammar = self.grammar.load();

        match grammar.parse(&self.input) {
            Ok(result) => println!("{}", result),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

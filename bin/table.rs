//! Print a grammar's state table.

use std::io;

use grammars::GrammarName;

/// Print a grammar's state table, one transition per line
#[derive(clap::Parser)]
pub struct Table {
    /// The grammar to print: select, assignment or builder
    grammar: GrammarName,
}

impl Table {
    pub(crate) fn run(&self) {
        let grammar = self.grammar.load();
        let stdout = io::stdout();

        if let Err(e) = grammar.print_state_table(&mut stdout.lock()) {
            eprintln!("Error: cannot write the state table: {}", e);
            std::process::exit(1);
        }
    }
}

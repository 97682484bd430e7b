//! Show how input is broken into tokens.

use grammars::GrammarName;
use parser::lexer::Lexer;

/// Print each token of the input with its kind
#[derive(clap::Parser)]
pub struct Tokens {
    /// The text to break into tokens
    input: String,

    /// Use this grammar's vocabulary and special characters
    #[clap(short, long, conflicts_with = "special")]
    grammar: Option<GrammarName>,

    /// The characters which are split out as their own tokens
    #[clap(short, long)]
    special: Option<String>,
}

impl Tokens {
    pub(crate) fn run(&self) {
        let lexer = match (&self.grammar, &self.special) {
            (Some(grammar), _) => grammar.load().lexer().clone(),
            (None, Some(special)) => {
                Lexer::default().with_special_chars(special.chars())
            }
            (None, None) => Lexer::default(),
        };

        for token in lexer.tokenize(&self.input) {
            println!("{:<10} {}", token.kind().name(), token);
        }
    }
}

//! An interactive mode.

use grammars::{GrammarName, LoadedGrammar};
use rustyline::{error::ReadlineError, Editor};

/// Parse each line typed with a grammar
#[derive(clap::Parser)]
pub struct ReplArgs {
    /// The grammar to use: select, assignment or builder
    grammar: GrammarName,
}

impl ReplArgs {
    /// Run a repl with the given settings.
    pub fn run(&self) {
        let repl = Repl::new(self.grammar);
        repl.start()
    }
}

struct Repl {
    editor: Editor<()>,
    grammar: LoadedGrammar,
}

impl Repl {
    /// The prompt used to ask for more input.
    const PROMPT: &'static str = ">>> ";

    /// Lines which are the result of a parse begin with this.
    const RESULT_PROMPT: &'static str = "//> ";

    fn new(grammar: GrammarName) -> Self {
        Repl {
            editor: Editor::<()>::new(),
            grammar: grammar.load(),
        }
    }

    fn start(mut self) {
        loop {
            match self.step() {
                Ok(()) => continue,
                Err(ReplError::Clear) => continue,
                Err(ReplError::Exit) => break,
                Err(ReplError::Readline(e)) => {
                    println!("{}", e);
                    println!("  (press control-d to exit)");
                }
                Err(other) => {
                    println!("{}", other);
                }
            }
        }
    }

    fn step(&mut self) -> Result<(), ReplError> {
        let input = self.read()?;

        if input.trim().is_empty() {
            return Ok(());
        }

        self.editor.add_history_entry(input.as_str());

        let result = self.grammar.parse(&input)?;
        println!("{}{}", Repl::RESULT_PROMPT, result);

        Ok(())
    }

    fn read(&mut self) -> Result<String, ReplError> {
        let line = self.editor.readline(Repl::PROMPT);
        match line {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted) => {
                // User hit Control-C
                Err(ReplError::Clear)
            }

            Err(ReadlineError::Eof) => {
                // User hit Control-D at end of line, to exit.
                Err(ReplError::Exit)
            }

            Err(e) => Err(ReplError::Readline(e)),
        }
    }
}

#[derive(Debug)]
enum ReplError {
    Clear,
    Exit,

    Readline(ReadlineError),
    Parse(parser::Error),
}

impl std::error::Error for ReplError {}

impl std::fmt::Display for ReplError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplError::Clear => write!(f, "^C"),
            ReplError::Exit => write!(f, "^D"),
            ReplError::Readline(e) => write!(f, "{}", e),
            ReplError::Parse(e) => write!(f, "error: {}", e),
        }
    }
}

impl From<parser::Error> for ReplError {
    fn from(e: parser::Error) -> Self {
        ReplError::Parse(e)
    }
}

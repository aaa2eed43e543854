use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::{debug, warn};

use crate::{
    config::Config,
    interpreter::{evaluator::core::Evaluator, parser::core::parse},
};

/// Header printed above syntax diagnostics.
pub const PARSE_ERROR_HEADER: &str = "Woops! We ran into some monkey business here!\n parser errors:";

/// Shell command that leaves the loop.
const QUIT_COMMAND: &str = ":q";
/// Shell command that lists the current bindings.
const ENV_COMMAND: &str = ":env";
/// Shell command that drops every binding.
const RESET_COMMAND: &str = ":reset";

/// The interactive read-evaluate-print loop.
///
/// Every line is evaluated against the same [`Evaluator`], so `let`
/// bindings survive from one line to the next.
pub struct Repl {
    editor:    DefaultEditor,
    evaluator: Evaluator,
    config:    Config,
}

impl Repl {
    /// Creates a shell and loads the history file, if one is configured.
    ///
    /// # Errors
    /// Fails if the line editor cannot be set up for the terminal.
    pub fn new(config: Config) -> rustyline::Result<Self> {
        let mut editor = DefaultEditor::new()?;
        if let Some(path) = &config.history_file
           && let Err(e) = editor.load_history(path)
        {
            debug!(path = %path.display(), error = %e, "no history loaded");
        }

        Ok(Self { editor,
                  evaluator: Evaluator::new(),
                  config })
    }

    /// Runs the loop until `:q`, end of input, or a terminal error.
    ///
    /// Ctrl-C abandons the current line and shows a fresh prompt.
    pub fn start(&mut self) -> rustyline::Result<()> {
        loop {
            match self.editor.readline(&self.config.prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    self.editor.add_history_entry(line)?;

                    match line {
                        QUIT_COMMAND => break,
                        ENV_COMMAND => self.print_bindings(),
                        RESET_COMMAND => self.evaluator.environment.clear(),
                        _ => println!("{}", Self::render(&mut self.evaluator, line, self.config.dump_ast)),
                    }
                },
                Err(ReadlineError::Interrupted) => {},
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    fn print_bindings(&self) {
        for (name, value) in self.evaluator.environment.bindings() {
            println!("{name} = {value}");
        }
    }

    /// Evaluates one chunk of input and returns the text the shell prints
    /// for it.
    ///
    /// The text is the value's display form. If the input has syntax errors,
    /// it is instead a header followed by one tab-indented diagnostic per
    /// line, and nothing is evaluated. A runtime fault renders as
    /// `ERROR: <message>`.
    ///
    /// ## Example
    /// ```
    /// use monkey::{interpreter::evaluator::core::Evaluator, repl::Repl};
    ///
    /// let mut evaluator = Evaluator::new();
    ///
    /// assert_eq!(Repl::render(&mut evaluator, "let x = 2;", false), "null");
    /// assert_eq!(Repl::render(&mut evaluator, "x * 21", false), "42");
    /// assert_eq!(Repl::render(&mut evaluator, "x / 0", false), "ERROR: division by zero: 2 / 0");
    /// ```
    pub fn render(evaluator: &mut Evaluator, source: &str, dump_ast: bool) -> String {
        let (program, errors) = parse(source);
        if !errors.is_empty() {
            let mut out = PARSE_ERROR_HEADER.to_owned();
            for error in &errors {
                out.push_str("\n\t");
                out.push_str(&error.to_string());
            }
            return out;
        }

        let mut out = String::new();
        if dump_ast {
            out.push_str(&format!("AST: {program}\n"));
        }
        match evaluator.eval_program(&program) {
            Ok(value) => out.push_str(&value.to_string()),
            Err(e) => out.push_str(&format!("ERROR: {e}")),
        }
        out
    }
}

impl Drop for Repl {
    fn drop(&mut self) {
        if let Some(path) = &self.config.history_file
           && let Err(e) = self.editor.save_history(path)
        {
            warn!(path = %path.display(), error = %e, "failed to save history");
        }
    }
}

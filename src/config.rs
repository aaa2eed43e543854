use std::path::PathBuf;

/// Name of the shell history file inside the home directory.
pub const HISTORY_FILE_NAME: &str = ".monkey_history";

/// Settings of the interactive shell and of script runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prompt printed before each shell line.
    pub prompt:       String,
    /// Print the canonical form of each parsed program before its value.
    pub dump_ast:     bool,
    /// Where shell history is loaded from and saved to. `None` disables it.
    pub history_file: Option<PathBuf>,
}

impl Config {
    /// The default configuration: `>> ` prompt, no tree dumps, and history in
    /// the user's home directory when one can be found.
    #[must_use]
    pub fn new() -> Self {
        Self { prompt:       ">> ".to_owned(),
               dump_ast:     false,
               history_file: dirs::home_dir().map(|home| home.join(HISTORY_FILE_NAME)), }
    }

    /// Sets whether parsed programs are printed.
    #[must_use]
    pub fn with_dump_ast(mut self, dump_ast: bool) -> Self {
        self.dump_ast = dump_ast;
        self
    }

    /// Turns shell history off.
    #[must_use]
    pub fn without_history(mut self) -> Self {
        self.history_file = None;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

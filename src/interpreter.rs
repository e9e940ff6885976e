use crate::command::{CommandFactory, ExitCode};
use crate::env::Environment;
use crate::tokenizer;
use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::Write;

/// Exit code reported when the command name matches no registry entry.
const UNRECOGNIZED: ExitCode = 127;

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports commands defined in this crate — see `BuiltinCommand`.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// A minimal shell interpreter that executes built-in commands in-process.
///
/// The interpreter maintains an [`Environment`] and an ordered list of
/// [`CommandFactory`] objects. The list is the command registry: it is built
/// once, never mutated afterwards, and scanned front to back on every
/// dispatch, so the first factory that recognizes a name wins. See
/// [`Default`] for the built-in registry included out of the box.
///
/// Example
/// ```
/// use minishell::Interpreter;
/// let mut sh = Interpreter::default();
/// let code = sh.run("pwd", &[]).unwrap();
/// assert_eq!(code, 0);
/// ```
pub struct Interpreter {
    env: Environment,
    commands: Vec<Box<dyn CommandFactory>>,
}

impl Interpreter {
    /// Create a new interpreter with a custom set of command factories.
    pub fn new(commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self {
            env: Environment::new(),
            commands,
        }
    }

    /// Run a single command invocation by name with arguments, using the
    /// process stdout and stderr.
    pub fn run(&mut self, name: &str, args: &[&str]) -> Result<ExitCode> {
        let mut stdout = std::io::stdout();
        let mut stderr = std::io::stderr();
        self.run_with_output(name, args, &mut stdout, &mut stderr)
    }

    /// Run a single command invocation, writing command output to `stdout`
    /// and diagnostics to `stderr`.
    ///
    /// The registry is scanned in order and the first factory that recognizes
    /// `name` gets the single invocation. When no factory matches, exactly
    /// one "Unrecognized input" line goes to `stderr` and the call returns
    /// exit code 127; an unknown command is never an `Err` and never stops
    /// the read loop.
    pub fn run_with_output(
        &mut self,
        name: &str,
        args: &[&str],
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<ExitCode> {
        for factory in &self.commands {
            if let Some(cmd) = factory.try_create(&self.env, name, args) {
                return cmd.execute(stdout, stderr, &mut self.env);
            }
        }
        writeln!(stderr, "Unrecognized input")?;
        Ok(UNRECOGNIZED)
    }

    /// Executes one raw input line: tokenize, then dispatch the first token
    /// as the command name.
    ///
    /// A line that tokenizes to nothing (empty or all blanks) never reaches
    /// the registry: no handler runs, nothing is written to either stream,
    /// and the call returns exit code 0. The trailing newline is expected to
    /// be stripped already.
    pub fn run_line(
        &mut self,
        line: &str,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<ExitCode> {
        let tokens = tokenizer::split_line(line, tokenizer::MAX_ARGS);
        let Some((name, rest)) = tokens.split_first() else {
            return Ok(0);
        };
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        self.run_with_output(name, &args, stdout, stderr)
    }

    /// The interactive Read-Eval-Print Loop.
    ///
    /// Reads one line at a time and hands it to [`Interpreter::run_line`].
    /// The loop ends on end of input, on Ctrl-C, or after a command requests
    /// termination via [`Environment::should_exit`](crate::env::Environment).
    pub fn repl(&mut self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;

        while !self.env.should_exit {
            let line = match rl.readline("%> ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            };

            let mut stdout = std::io::stdout();
            let mut stderr = std::io::stderr();
            if let Err(e) = self.run_line(&line, &mut stdout, &mut stderr) {
                eprintln!("{}", e);
            }
        }

        Ok(())
    }
}

impl Default for Interpreter {
    /// Create an interpreter with the built-in registry: `pwd`, `cd`, `ls`
    /// and `exit`.
    fn default() -> Self {
        use crate::builtin::*;
        Self::new(vec![
            Box::new(Factory::<Pwd>::default()),
            Box::new(Factory::<Cd>::default()),
            Box::new(Factory::<Ls>::default()),
            Box::new(Factory::<Exit>::default()),
        ])
    }
}

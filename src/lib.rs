//! A tiny interactive shell built entirely from in-process commands.
//!
//! The crate reads a line of input, splits it into whitespace-delimited
//! tokens, and dispatches the first token to one of a small fixed set of
//! built-ins (`cd`, `ls`, `pwd`, `exit`). No external processes are ever
//! spawned. It is intentionally small and easy to read, suitable for
//! coursework and experiments with tokenization and table-driven dispatch.
//!
//! The main entry point is [`Interpreter`], which holds the command registry
//! and the mutable [`env::Environment`]. The public modules [`tokenizer`],
//! [`command`] and [`env`] expose the building blocks for implementing your
//! own commands and driving the interpreter from a custom read loop.

mod builtin;
pub mod command;
pub mod env;
mod interpreter;
pub mod tokenizer;

/// Just a convenient re-export of the interactive command runner.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::Interpreter;

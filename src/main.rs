use anyhow::Result;
use minishell::Interpreter;

fn main() -> Result<()> {
    Interpreter::default().repl()
}

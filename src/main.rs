use clap::Parser;
use rustyline::{error::ReadlineError, DefaultEditor};
use tally::evaluate_line;

/// tally is an easy to use command line calculator for basic arithmetic
/// expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates a single expression and exits instead of starting an
    /// interactive session.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(expression) = args.expression {
        match evaluate_line(&expression) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    if let Err(e) = repl() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Runs the interactive session: one expression per line, until the user
/// types `exit` or closes the input.
fn repl() -> rustyline::Result<()> {
    println!("---------- tally ----------");
    println!("Type 'exit' to quit.");

    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line.eq_ignore_ascii_case("exit") {
                    break;
                }
                rl.add_history_entry(line)?;

                // A failed line never ends the session.
                match evaluate_line(line) {
                    Ok(value) => println!("{value}"),
                    Err(e) => eprintln!("{e}"),
                }
            },
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

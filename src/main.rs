//! Interactive prompt for sqlbyte.
//!
//! Usage:
//!   sqlbyte [--prompt `<text>`]   - read statements from stdin until `.exit` or EOF
//!   sqlbyte -c `<statement>`      - check a single statement and exit

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Arg, Command};
use sqlbyte::{tokenize, validate, Token, TokenType};

const DEFAULT_PROMPT: &str = "repl> ";

fn main() -> Result<()> {
    let matches = Command::new("sqlbyte")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenizes and checks SELECT / INSERT statements")
        .arg(
            Arg::new("prompt")
                .long("prompt")
                .help("Prompt printed before each line")
                .default_value(DEFAULT_PROMPT),
        )
        .arg(
            Arg::new("command")
                .long("command")
                .short('c')
                .help("Check one statement and exit instead of starting the prompt"),
        )
        .get_matches();

    if let Some(statement) = matches.get_one::<String>("command") {
        let valid = run_line(statement, &mut io::stdout(), &mut io::stderr())?;
        if !valid {
            std::process::exit(1);
        }
        return Ok(());
    }

    let prompt = matches
        .get_one::<String>("prompt")
        .map(String::as_str)
        .unwrap_or(DEFAULT_PROMPT);
    repl(prompt)
}

fn repl(prompt: &str) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let mut input = String::new();

    loop {
        write!(stdout, "{prompt}")?;
        stdout.flush().context("flush prompt")?;

        input.clear();
        if stdin.lock().read_line(&mut input).context("read line from stdin")? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }
        if line == ".exit" {
            return Ok(());
        }
        run_line(line, &mut stdout, &mut stderr)?;
    }
}

/// Tokenizes and validates one line, printing the outcome. Returns whether it was valid.
fn run_line(line: &str, out: &mut impl Write, err: &mut impl Write) -> Result<bool> {
    let tokens = tokenize(line);

    let valid = match validate(&tokens) {
        Ok(()) => {
            writeln!(out, "{}", render(&tokens))?;
            true
        }
        Err(e) => {
            writeln!(err, "Error: {e}")?;
            false
        }
    };

    // INSERT lines are always echoed, whatever the outcome.
    if tokens.first().is_some_and(|t| t.is(TokenType::Insert)) {
        writeln!(out, "{}", render(&tokens))?;
    }
    Ok(valid)
}

fn render(tokens: &[Token]) -> String {
    let items: Vec<String> = tokens.iter().map(Token::to_string).collect();
    format!("[{}]", items.join(", "))
}

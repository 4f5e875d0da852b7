//! Interactive and pipe-mode command loops.

use crate::commands::{execute, Outcome};
use crate::parse::parse_line;
use lexvec_engine::VectorStore;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::BufRead;

const PROMPT: &str = "lexvec> ";

enum LineOutcome {
    Continue,
    ParseError,
    Quit,
}

/// Run one line through parse + execute.
fn handle_line(store: &VectorStore, line: &str) -> LineOutcome {
    match parse_line(line) {
        Ok(None) => LineOutcome::Continue,
        Ok(Some(command)) => match execute(store, command) {
            Outcome::Output(text) => {
                println!("{text}");
                LineOutcome::Continue
            }
            Outcome::Quit => LineOutcome::Quit,
        },
        Err(message) => {
            println!("{message}");
            LineOutcome::ParseError
        }
    }
}

/// Interactive prompt with line editing and history.
pub fn run_repl(store: &VectorStore) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("failed to start line editor: {e}");
            return;
        }
    };
    let history = history_path();
    if let Some(path) = &history {
        let _ = editor.load_history(path);
    }

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(&line);
                }
                if let LineOutcome::Quit = handle_line(store, &line) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("read error: {e}");
                break;
            }
        }
    }

    if let Some(path) = &history {
        let _ = editor.save_history(path);
    }
}

/// Line-by-line execution from stdin (non-TTY input).
///
/// Returns a process exit code: 0 unless a line failed to parse.
pub fn run_pipe(store: &VectorStore) -> i32 {
    let stdin = std::io::stdin();
    let mut exit_code = 0;
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("read error: {e}");
                return 1;
            }
        };
        match handle_line(store, &line) {
            LineOutcome::Continue => {}
            LineOutcome::ParseError => exit_code = 1,
            LineOutcome::Quit => break,
        }
    }
    exit_code
}

fn history_path() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME").map(|home| std::path::Path::new(&home).join(".lexvec_history"))
}

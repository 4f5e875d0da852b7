//! Line → Command conversion.
//!
//! REPL input is whitespace-tokenized; the first token picks the verb and
//! the rest form its arguments. A term may be a bare word or a bracketed
//! expression (`[ king - man + woman ]`); the brackets delimit the
//! expression inside the larger command, and the closing bracket is the
//! boundary marker the evaluator stops at
//! ([`EXPRESSION_BOUNDARY`](lexvec_engine::EXPRESSION_BOUNDARY)).

use lexvec_engine::EXPRESSION_BOUNDARY;

/// Default synonym threshold when the user gives none.
pub const DEFAULT_THRESHOLD: f32 = 0.6;

/// Default result count for `top`.
pub const DEFAULT_TOP_K: usize = 3;

/// A query term: either a stored name or an expression over stored names.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// A single name, resolved directly.
    Word(String),
    /// Expression body tokens, handed to the evaluator (boundary excluded).
    Expression(Vec<String>),
}

/// One parsed REPL command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `comp A B` — similarity between two terms.
    Comp {
        /// Left term
        left: Term,
        /// Right term
        right: Term,
    },
    /// `syn TERM [threshold]` — threshold synonym search.
    Syn {
        /// Query term
        term: Term,
        /// Minimum similarity (strict)
        threshold: f32,
    },
    /// `top TERM [k]` — bounded top-k retrieval.
    Top {
        /// Query term
        term: Term,
        /// Result count
        k: usize,
    },
    /// `info` — store statistics.
    Info,
    /// `help [command]`
    Help {
        /// Specific command to describe, or all of them.
        command: Option<String>,
    },
    /// `exit` / `quit`
    Quit,
}

/// Parse one input line.
///
/// Returns `Ok(None)` for a blank line and `Err(message)` with a
/// user-facing reason for anything malformed.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&verb, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match verb {
        "comp" => {
            let (left, rest) = take_term(args).map_err(|e| format!("comp: {e}"))?;
            let (right, rest) = take_term(rest).map_err(|e| format!("comp: {e}"))?;
            if !rest.is_empty() {
                return Err(format!("comp: unexpected trailing input '{}'", rest.join(" ")));
            }
            Command::Comp { left, right }
        }
        "syn" => {
            let (term, rest) = take_term(args).map_err(|e| format!("syn: {e}"))?;
            let threshold = match rest {
                [] => DEFAULT_THRESHOLD,
                [value] => value
                    .parse::<f32>()
                    .map_err(|_| format!("syn: bad threshold '{value}'"))?,
                _ => return Err("syn: too many arguments".to_string()),
            };
            Command::Syn { term, threshold }
        }
        "top" => {
            let (term, rest) = take_term(args).map_err(|e| format!("top: {e}"))?;
            let k = match rest {
                [] => DEFAULT_TOP_K,
                [value] => value
                    .parse::<usize>()
                    .map_err(|_| format!("top: bad count '{value}'"))?,
                _ => return Err("top: too many arguments".to_string()),
            };
            Command::Top { term, k }
        }
        "info" => Command::Info,
        "help" => Command::Help {
            command: args.first().map(|s| s.to_string()),
        },
        "exit" | "quit" => Command::Quit,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };

    Ok(Some(command))
}

/// Take one term off the front of the argument list.
///
/// `[` opens an expression running to the matching `]`; anything else is a
/// bare word.
fn take_term<'a>(args: &'a [&'a str]) -> Result<(Term, &'a [&'a str]), String> {
    match args.split_first() {
        None => Err("missing argument".to_string()),
        Some((&"[", rest)) => {
            let close = rest
                .iter()
                .position(|&t| t == EXPRESSION_BOUNDARY)
                .ok_or_else(|| {
                    format!("unterminated expression (missing '{EXPRESSION_BOUNDARY}')")
                })?;
            if close == 0 {
                return Err("empty expression".to_string());
            }
            let body = rest[..close].iter().map(|s| s.to_string()).collect();
            Ok((Term::Expression(body), &rest[close + 1..]))
        }
        Some((&word, rest)) => Ok((Term::Word(word.to_string()), rest)),
    }
}

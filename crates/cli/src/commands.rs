//! Command execution against the store.
//!
//! Each command renders to a String; errors come back as user-facing
//! messages (the engine itself never prints).

use crate::parse::{Command, Term};
use lexvec_core::VectorResult;
use lexvec_engine::{cosine_similarity, VectorStore};
use std::fmt::Write as _;

/// Outcome of running one command.
pub enum Outcome {
    /// Text to print.
    Output(String),
    /// User asked to leave.
    Quit,
}

/// Execute a parsed command. Engine errors are rendered into the output
/// along with a usage reminder for the verb that failed.
pub fn execute(store: &VectorStore, command: Command) -> Outcome {
    match command {
        Command::Quit => Outcome::Quit,
        Command::Info => Outcome::Output(format!(
            "{} vectors of dimension {}",
            store.len(),
            store.dimension()
        )),
        Command::Help { command } => Outcome::Output(help_text(command.as_deref())),
        Command::Comp { left, right } => report("comp", run_comp(store, &left, &right)),
        Command::Syn { term, threshold } => report("syn", run_syn(store, &term, threshold)),
        Command::Top { term, k } => report("top", run_top(store, &term, k)),
    }
}

fn report(verb: &str, result: VectorResult<String>) -> Outcome {
    match result {
        Ok(output) => Outcome::Output(output),
        // An unresolved word is a vocabulary miss, not command misuse; the
        // usage reminder would point the user at the wrong problem.
        Err(e) if e.is_unknown_name() => {
            Outcome::Output(format!("{e} (word is not in the loaded vectors)"))
        }
        Err(e) => Outcome::Output(format!("{e}\n{}", usage(verb))),
    }
}

/// Resolve a term to a concrete vector.
fn term_vector(store: &VectorStore, term: &Term) -> VectorResult<Vec<f32>> {
    match term {
        Term::Word(name) => Ok(store.resolve(name)?.to_vec()),
        Term::Expression(tokens) => {
            store.vector_from_expression(tokens.iter().map(String::as_str))
        }
    }
}

fn run_comp(store: &VectorStore, left: &Term, right: &Term) -> VectorResult<String> {
    let a = term_vector(store, left)?;
    let b = term_vector(store, right)?;
    let score = cosine_similarity(&a, &b)?;
    Ok(format!("Similarity : {score:.2}"))
}

fn run_syn(store: &VectorStore, term: &Term, threshold: f32) -> VectorResult<String> {
    // `syn word` excludes the word itself; an expression has no name to
    // exclude.
    let results = match term {
        Term::Word(name) => store.find_synonyms_by_word(name, threshold)?,
        Term::Expression(_) => {
            let query = term_vector(store, term)?;
            store.find_synonyms(&query, threshold, None)?
        }
    };

    if results.is_empty() {
        return Ok("no synonyms above threshold".to_string());
    }
    let mut out = String::new();
    for entry in &results {
        writeln!(out, "{entry}").ok();
    }
    out.truncate(out.trim_end().len());
    Ok(out)
}

fn run_top(store: &VectorStore, term: &Term, k: usize) -> VectorResult<String> {
    let query = term_vector(store, term)?;
    let results = store.find_similar(&query, k)?;

    let mut out = String::new();
    for entry in &results {
        writeln!(out, "{entry}").ok();
    }
    out.truncate(out.trim_end().len());
    Ok(out)
}

fn usage(verb: &str) -> String {
    format!("valid usage:\n{}", help_text(Some(verb)))
}

/// Help text for one command, or all of them.
pub fn help_text(command: Option<&str>) -> String {
    let all = command.is_none();
    let command = command.unwrap_or("");
    let mut out = String::new();

    if all {
        out.push_str("Valid commands:\n");
    }
    if all || command == "comp" {
        out.push_str(
            "comp WORD1 WORD2 -> similarity of WORD1 and WORD2\n\
             \tExample: comp queen king\n\
             comp [ EXPR ] WORD -> either side may be an expression\n\
             \tExample: comp [ king - man + woman ] queen\n",
        );
    }
    if all || command == "syn" {
        out.push_str(
            "syn WORD [MIN_SIMILARITY] -> synonyms scoring above MIN_SIMILARITY (default 0.6)\n\
             \tExample: syn queen 0.7\n\
             syn [ EXPR ] [MIN_SIMILARITY] -> synonyms of an expression\n\
             \tExample: syn [ queen - woman ] 0.7\n",
        );
    }
    if all || command == "top" {
        out.push_str(
            "top WORD [K] -> K nearest entries (default 3)\n\
             \tExample: top queen 5\n",
        );
    }
    if all || command == "info" {
        out.push_str("info -> store statistics\n");
    }
    if all || command == "help" {
        out.push_str("help [COMMAND] -> this text\n");
    }
    if all || command == "exit" || command == "quit" {
        out.push_str("exit -> leave the program\n");
    }
    if out.is_empty() {
        out = format!("no such command '{command}'\n");
    }
    out.truncate(out.trim_end().len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_line;

    fn store() -> VectorStore {
        let mut store = VectorStore::new(3);
        store.add("king", vec![1.0, 1.0, 0.1]).unwrap();
        store.add("man", vec![1.0, 0.0, 0.1]).unwrap();
        store.add("queen", vec![-1.0, 1.0, -0.1]).unwrap();
        store.add("woman", vec![-1.0, 0.0, -0.1]).unwrap();
        store
    }

    fn run(store: &VectorStore, line: &str) -> String {
        let cmd = parse_line(line).unwrap().unwrap();
        match execute(store, cmd) {
            Outcome::Output(s) => s,
            Outcome::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn comp_words() {
        let out = run(&store(), "comp king king");
        assert_eq!(out, "Similarity : 1.00");
    }

    #[test]
    fn comp_expression_finds_queen() {
        let out = run(&store(), "comp [ king - man + woman ] queen");
        assert_eq!(out, "Similarity : 1.00");
    }

    #[test]
    fn syn_expression_lists_matches() {
        let out = run(&store(), "syn [ king - man + woman ] 0.9");
        assert!(out.starts_with("queen : "));
    }

    #[test]
    fn top_pads_with_sentinels() {
        let out = run(&store(), "top king 5");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("king : 1.00"));
        assert_eq!(*lines.last().unwrap(), "- : 0.00");
    }

    #[test]
    fn unknown_word_gets_vocabulary_hint_not_usage() {
        let out = run(&store(), "syn emperor");
        assert!(out.contains("unknown name: emperor"));
        assert!(out.contains("not in the loaded vectors"));
        assert!(!out.contains("valid usage"));
    }

    #[test]
    fn malformed_expression_reports_error_and_usage() {
        let out = run(&store(), "syn [ king man ]");
        assert!(out.contains("invalid expression"));
        assert!(out.contains("valid usage"));
    }

    #[test]
    fn info_reports_counts() {
        let out = run(&store(), "info");
        assert_eq!(out, "4 vectors of dimension 3");
    }

    #[test]
    fn quit_command() {
        let cmd = parse_line("exit").unwrap().unwrap();
        assert!(matches!(execute(&store(), cmd), Outcome::Quit));
    }

    #[test]
    fn help_for_unknown_command() {
        let out = help_text(Some("plot"));
        assert!(out.contains("no such command"));
    }
}

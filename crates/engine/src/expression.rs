//! Vector expression evaluation
//!
//! Evaluates analogical expressions like `king - man + woman` over the
//! store: a flat token sequence of names joined by `+`/`-`, walked left to
//! right, with the running vector normalized at the end so results are
//! directly comparable by cosine similarity regardless of magnitude drift.
//!
//! The walk is a two-state machine:
//!
//! - `ExpectOperand` (initial, and after an operator): the next token must
//!   be a name. Ending here is a dangling operator (or an empty
//!   expression) and fails.
//! - `ExpectOperator` (after an operand has been applied): the next token
//!   must be `+`, `-`, the boundary marker, or end of input. A bare name
//!   here (operand after operand) fails.
//!
//! The boundary marker `]` terminates the walk without consuming further
//! tokens; it belongs to the outer command syntax, not the mathematics.

use crate::similarity::normalize;
use crate::store::VectorStore;
use lexvec_core::{VectorError, VectorResult};

/// Token that ends an expression embedded in a larger command.
pub const EXPRESSION_BOUNDARY: &str = "]";

/// Walk state. `ExpectOperand` carries the operator the next name will be
/// applied with, so an operand can never be reached without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectOperand(Op),
    ExpectOperator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
}

impl VectorStore {
    /// Evaluate a token sequence into one normalized vector.
    ///
    /// `tokens` is the pre-tokenized expression body: the first token a
    /// name, then alternating operator/name pairs, optionally terminated by
    /// [`EXPRESSION_BOUNDARY`].
    ///
    /// # Errors
    /// - `UnknownName` if any name token has no entry.
    /// - `InvalidExpression` for a malformed sequence: empty input, operand
    ///   after operand, unsupported operator, dangling operator at the end.
    /// - `DegenerateVector` if the arithmetic cancels to the zero vector.
    ///
    /// # Example
    ///
    /// ```
    /// # use lexvec_engine::VectorStore;
    /// let mut store = VectorStore::new(2);
    /// store.add("king", vec![1.0, 1.0])?;
    /// store.add("man", vec![1.0, 0.0])?;
    /// store.add("woman", vec![-1.0, 0.0])?;
    /// let v = store.vector_from_expression(["king", "-", "man", "+", "woman"])?;
    /// assert_eq!(v.len(), 2);
    /// # Ok::<(), lexvec_core::VectorError>(())
    /// ```
    pub fn vector_from_expression<'a, I>(&self, tokens: I) -> VectorResult<Vec<f32>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut iter = tokens.into_iter();

        // token[0] seeds the running vector; there is no pending operator yet.
        let first = match iter.next() {
            Some(t) if t != EXPRESSION_BOUNDARY => t,
            _ => {
                return Err(VectorError::InvalidExpression {
                    reason: "empty expression".to_string(),
                })
            }
        };
        if first == "+" || first == "-" {
            return Err(VectorError::InvalidExpression {
                reason: format!("operator '{first}' where a name was expected"),
            });
        }
        let mut acc = self.resolve(first)?.to_vec();

        let mut state = State::ExpectOperator;
        for token in iter {
            if token == EXPRESSION_BOUNDARY {
                break;
            }
            state = match state {
                State::ExpectOperator => match token {
                    "+" => State::ExpectOperand(Op::Add),
                    "-" => State::ExpectOperand(Op::Sub),
                    _ => {
                        return Err(VectorError::InvalidExpression {
                            reason: format!("expected '+' or '-', got '{token}'"),
                        })
                    }
                },
                State::ExpectOperand(op) => {
                    if token == "+" || token == "-" {
                        return Err(VectorError::InvalidExpression {
                            reason: format!("operator '{token}' where a name was expected"),
                        });
                    }
                    let vector = self.resolve(token)?;
                    for (a, b) in acc.iter_mut().zip(vector.iter()) {
                        match op {
                            Op::Add => *a += b,
                            Op::Sub => *a -= b,
                        }
                    }
                    State::ExpectOperator
                }
            };
        }

        // Only ExpectOperator is a valid terminal state.
        if let State::ExpectOperand(_) = state {
            return Err(VectorError::InvalidExpression {
                reason: "dangling operator at end of expression".to_string(),
            });
        }

        normalize(&acc)
    }
}

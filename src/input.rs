//! Operator input validation and conversion.
//!
//! The operator types one line of comma-separated sales figures. Validation
//! is a pure predicate over the raw tokens: it reports whether the line is
//! exactly six integers and why not, but hands nothing back on success.
//! Conversion is a separate step run by the caller once validation has
//! passed, so the integers used for arithmetic always come from one place.

use thiserror::Error;

use crate::models::{SalesRecord, ITEM_COUNT};

/// Why an input line was rejected. Recovered locally by the re-prompt loop,
/// never propagated further.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("'{token}' is not a whole number")]
    NotANumber { token: String },
    #[error("exactly {ITEM_COUNT} values required, you provided {found}")]
    WrongCount { found: usize },
}

/// Split one line of operator input into raw tokens.
///
/// Splits on commas only. A trailing newline from the console read is
/// stripped; everything else is kept verbatim for validation to judge.
pub fn split_tokens(line: &str) -> Vec<&str> {
    line.trim_end_matches(['\r', '\n']).split(',').collect()
}

/// Check that the tokens form exactly six integers.
///
/// Tokens are trimmed before the parse, so `"10, 20, 30, 40, 50, 60"` is
/// valid the way an operator expects; whitespace inside a number is still
/// not numeric. Parse failures take precedence over the count check, so
/// `"1,x,3"` reports the bad token rather than the wrong count. An empty
/// line splits into one empty token and fails the parse.
pub fn validate(tokens: &[&str]) -> Result<(), InputError> {
    for token in tokens {
        if token.trim().parse::<i64>().is_err() {
            return Err(InputError::NotANumber {
                token: token.trim().to_string(),
            });
        }
    }

    if tokens.len() != ITEM_COUNT {
        return Err(InputError::WrongCount {
            found: tokens.len(),
        });
    }

    Ok(())
}

/// Convert validated tokens into a sales record.
///
/// Idempotent over the same tokens; callers run it once, immediately after
/// [`validate`] succeeds.
pub fn parse_record(tokens: &[&str]) -> Result<SalesRecord, InputError> {
    if tokens.len() != ITEM_COUNT {
        return Err(InputError::WrongCount {
            found: tokens.len(),
        });
    }

    let mut values = [0i64; ITEM_COUNT];
    for (slot, token) in values.iter_mut().zip(tokens) {
        *slot = token
            .trim()
            .parse::<i64>()
            .map_err(|_| InputError::NotANumber {
                token: token.trim().to_string(),
            })?;
    }
    Ok(SalesRecord::new(values))
}

use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;

/// Atomic composition of one substance: element symbol -> number of atoms.
pub type Composition = HashMap<String, usize>;

/// error types for formula parsing
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FormulaError {
    #[error("Empty formula")]
    EmptyFormula,
    #[error("Invalid characters in formula: {0}")]
    InvalidCharacters(String),
    #[error("Unmatched closing parenthesis in formula: {0}")]
    UnmatchedClosingParen(String),
    #[error("Unmatched opening parenthesis in formula: {0}")]
    UnmatchedOpeningParen(String),
    #[error("Unexpected number in formula: {0}")]
    UnexpectedNumber(String),
}

/// cut the formula into tokens: element symbols (one uppercase letter optionally
/// followed by one lowercase letter), integer literals and brackets. The tokens
/// glued back together must give exactly the original string, otherwise the
/// formula contains something we do not understand.
fn tokenize(formula: &str) -> Result<Vec<String>, FormulaError> {
    let token_re = Regex::new(r"[A-Z][a-z]?|\d+|\(|\)").unwrap();
    let tokens: Vec<String> = token_re
        .find_iter(formula)
        .map(|m| m.as_str().to_string())
        .collect();
    if tokens.is_empty() {
        return Err(FormulaError::EmptyFormula);
    }
    if tokens.concat() != formula {
        return Err(FormulaError::InvalidCharacters(formula.to_string()));
    }
    Ok(tokens)
}

fn is_number(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_digit())
}

/// walk the token stream with a stack of partial compositions: '(' opens a new
/// frame, ')' closes it, multiplies every count in the frame by the number that
/// follows the bracket (1 if absent) and folds the counts into the frame below.
/// Counts add up when an element appears several times, as in C5H6OOH.
fn parse_tokens(tokens: &[String], formula: &str) -> Result<Composition, FormulaError> {
    let mut stack: Vec<Composition> = vec![HashMap::new()];
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "(" {
            stack.push(HashMap::new());
            i += 1;
        } else if token == ")" {
            if stack.len() == 1 {
                return Err(FormulaError::UnmatchedClosingParen(formula.to_string()));
            }
            let group = stack.pop().unwrap();
            i += 1;
            let mut multiplier = 1;
            if i < tokens.len() && is_number(&tokens[i]) {
                multiplier = tokens[i].parse().unwrap();
                i += 1;
            }
            let top = stack.last_mut().unwrap();
            for (element, count) in group {
                *top.entry(element).or_insert(0) += count * multiplier;
            }
        } else if is_number(token) {
            // a bare number with no element or bracket in front of it
            return Err(FormulaError::UnexpectedNumber(formula.to_string()));
        } else {
            i += 1;
            let mut count = 1;
            if i < tokens.len() && is_number(&tokens[i]) {
                count = tokens[i].parse().unwrap();
                i += 1;
            }
            *stack.last_mut().unwrap().entry(token.clone()).or_insert(0) += count;
        }
    }
    if stack.len() != 1 {
        return Err(FormulaError::UnmatchedOpeningParen(formula.to_string()));
    }
    Ok(stack.pop().unwrap())
}

/// Parse a chemical formula and return a map of elements and their counts.
pub fn parse_formula(formula: &str) -> Result<Composition, FormulaError> {
    let formula = formula.trim();
    if formula.is_empty() {
        return Err(FormulaError::EmptyFormula);
    }
    let tokens = tokenize(formula)?;
    parse_tokens(&tokens, formula)
}

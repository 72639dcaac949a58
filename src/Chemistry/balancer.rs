use crate::Chemistry::formula_parser::{Composition, FormulaError, parse_formula};
use log::{debug, info};
use nalgebra::DMatrix;
use std::collections::HashSet;
use thiserror::Error;

/// error types for reaction balancing
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum BalanceError {
    #[error(transparent)]
    Formula(#[from] FormulaError),
    #[error("Reaction must contain '->' or '='")]
    MissingArrow,
    #[error("Empty reaction side")]
    EmptySide,
    #[error("No balancing solution found")]
    NoSolution,
}

/// One side of a reaction: (raw term, atomic composition) in declaration order.
pub type Side = Vec<(String, Composition)>;

fn parse_side(side: &str) -> Result<Side, BalanceError> {
    let parts: Vec<&str> = side
        .split('+')
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        return Err(BalanceError::EmptySide);
    }
    let mut terms = Vec::new();
    for part in parts {
        terms.push((part.to_string(), parse_formula(part)?));
    }
    Ok(terms)
}

/// Split a reaction string on the first '->' (checked before '=') and parse
/// every '+'-joined term of both sides.
pub fn parse_reaction(reaction: &str) -> Result<(Side, Side), BalanceError> {
    let (left, right) = if let Some((l, r)) = reaction.split_once("->") {
        (l, r)
    } else if let Some((l, r)) = reaction.split_once('=') {
        (l, r)
    } else {
        return Err(BalanceError::MissingArrow);
    };
    Ok((parse_side(left)?, parse_side(right)?))
}

/// Build the stoichiometric matrix: one row per element (sorted
/// lexicographically), one column per substance, left terms then right terms,
/// right-side entries negated so that element balance reads matrix * coeffs = 0.
pub fn stoichiometric_matrix(left: &Side, right: &Side) -> (DMatrix<f64>, Vec<String>) {
    let mut element_set: HashSet<String> = HashSet::new();
    for (_, composition) in left.iter().chain(right.iter()) {
        element_set.extend(composition.keys().cloned());
    }
    let mut elements: Vec<String> = element_set.into_iter().collect();
    elements.sort();

    let num_rows = elements.len();
    let num_cols = left.len() + right.len();
    let mut matrix = DMatrix::zeros(num_rows, num_cols);
    for (i, element) in elements.iter().enumerate() {
        for (j, (_, composition)) in left.iter().enumerate() {
            if let Some(&count) = composition.get(element) {
                matrix[(i, j)] = count as f64;
            }
        }
        for (j, (_, composition)) in right.iter().enumerate() {
            if let Some(&count) = composition.get(element) {
                matrix[(i, left.len() + j)] = -(count as f64);
            }
        }
    }
    (matrix, elements)
}

fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 { 0 } else { (a / gcd(a, b) * b).abs() }
}

/// divide the row by the gcd of its entries to keep the numbers small
fn reduce_row(row: &mut [i64]) {
    let g = row.iter().fold(0, |acc, &v| gcd(acc, v));
    if g > 1 {
        for v in row.iter_mut() {
            *v /= g;
        }
    }
}

/// Exact null-space vector of an integer-valued matrix, found by fraction-free
/// Gaussian elimination. The elimination order is fixed: columns are processed
/// left to right and the pivot is the first unused row with a nonzero entry, so
/// the same matrix always yields the same vector. The returned vector is built
/// from the first free column, every other free column set to zero. None when
/// the matrix has full column rank (only the trivial solution).
fn null_space_vector(matrix: &DMatrix<f64>) -> Option<Vec<i64>> {
    let rows = matrix.nrows();
    let cols = matrix.ncols();
    let mut m: Vec<Vec<i64>> = (0..rows)
        .map(|i| (0..cols).map(|j| matrix[(i, j)].round() as i64).collect())
        .collect();

    let mut pivot_cols: Vec<usize> = Vec::new();
    for col in 0..cols {
        let pivot_row = pivot_cols.len();
        if pivot_row == rows {
            break;
        }
        let Some(r) = (pivot_row..rows).find(|&r| m[r][col] != 0) else {
            continue;
        };
        m.swap(pivot_row, r);
        reduce_row(&mut m[pivot_row]);
        let pivot = m[pivot_row].clone();
        for r2 in 0..rows {
            if r2 != pivot_row && m[r2][col] != 0 {
                let b = m[r2][col];
                for j in 0..cols {
                    m[r2][j] = m[r2][j] * pivot[col] - pivot[j] * b;
                }
                reduce_row(&mut m[r2]);
            }
        }
        pivot_cols.push(col);
    }

    let free_col = (0..cols).find(|c| !pivot_cols.contains(c))?;

    let scale = pivot_cols
        .iter()
        .enumerate()
        .fold(1, |acc, (i, &p)| lcm(acc, m[i][p]));
    let mut solution = vec![0i64; cols];
    solution[free_col] = scale;
    for (i, &p) in pivot_cols.iter().enumerate() {
        solution[p] = -m[i][free_col] * (scale / m[i][p]);
    }
    Some(solution)
}

/// Smallest positive integer coefficient vector for the parsed reaction, left
/// terms then right terms. Fails when the null space is empty, when the vector
/// degenerates to zero, and when it keeps both signs even after global negation
/// (such a reaction is chemically inconsistent and has no physical balancing).
pub fn balance_terms(left: &Side, right: &Side) -> Result<Vec<i64>, BalanceError> {
    let (matrix, elements) = stoichiometric_matrix(left, right);
    debug!(
        "stoichiometric matrix for elements {:?}:\n{}",
        elements, matrix
    );
    let mut coeffs = null_space_vector(&matrix).ok_or(BalanceError::NoSolution)?;
    if coeffs.iter().all(|&c| c == 0) {
        return Err(BalanceError::NoSolution);
    }
    if coeffs.iter().any(|&c| c < 0) {
        for c in coeffs.iter_mut() {
            *c = -*c;
        }
    }
    if coeffs.iter().any(|&c| c < 0) {
        return Err(BalanceError::NoSolution);
    }
    let g = coeffs.iter().fold(0, |acc, &c| gcd(acc, c));
    if g > 1 {
        for c in coeffs.iter_mut() {
            *c /= g;
        }
    }
    Ok(coeffs)
}

fn format_term(coeff: i64, formula: &str) -> String {
    if coeff == 1 {
        formula.to_string()
    } else {
        format!("{}{}", coeff, formula)
    }
}

/// Balance a reaction equation and render it back as a string, e.g.
/// "H2 + O2 -> H2O" becomes "2H2 + O2 -> 2H2O". Coefficients equal to 1 are
/// omitted, sides are joined with ' -> ' whatever arrow the input used.
pub fn balance_equation(reaction: &str) -> Result<String, BalanceError> {
    let (left, right) = parse_reaction(reaction)?;
    let coeffs = balance_terms(&left, &right)?;
    let (left_coeffs, right_coeffs) = coeffs.split_at(left.len());

    let left_str = left
        .iter()
        .zip(left_coeffs)
        .map(|((name, _), &c)| format_term(c, name))
        .collect::<Vec<_>>()
        .join(" + ");
    let right_str = right
        .iter()
        .zip(right_coeffs)
        .map(|((name, _), &c)| format_term(c, name))
        .collect::<Vec<_>>()
        .join(" + ");
    let balanced = format!("{} -> {}", left_str, right_str);
    info!("balanced '{}' as '{}'", reaction.trim(), balanced);
    Ok(balanced)
}

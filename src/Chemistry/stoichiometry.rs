use crate::Chemistry::balancer::{BalanceError, Side, balance_terms};
use crate::Chemistry::formula_parser::parse_formula;
use crate::Chemistry::molmass::molar_mass_of_composition;
use log::{info, warn};
use prettytable::{Cell, Row, Table};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// error types for reaction table construction; these never reach the caller
/// of render_stoichiometry, they are downgraded to an ok = false result
#[derive(Debug, Error)]
pub enum StoichiometryError {
    #[error("Reaction is empty")]
    EmptyReaction,
    #[error("Reaction must contain '->' or '='")]
    MissingArrow,
    #[error("Reaction must have reactants and products")]
    MissingSide,
    #[error(transparent)]
    Balance(#[from] BalanceError),
}

/// One row of the stoichiometry table. n is always moles, m is always grams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRow {
    pub name: String,
    pub side: String,
    pub coeff: f64,
    pub molar_mass: Option<f64>,
    pub input_n: Option<f64>,
    pub input_m: Option<f64>,
    pub calc_n: Option<f64>,
    pub calc_m: Option<f64>,
    pub status: String,
}

/// Full result handed to the frontend. ok = false carries a human-readable
/// error and an empty species list, so there is always something to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoichiometryResult {
    pub ok: bool,
    pub error: Option<String>,
    pub balanced: Option<String>,
    pub equation_latex: Option<String>,
    pub species: Vec<SpeciesRow>,
}

impl StoichiometryResult {
    fn failed(error: String) -> Self {
        Self {
            ok: false,
            error: Some(error),
            balanced: None,
            equation_latex: None,
            species: Vec::new(),
        }
    }
}

/// drop a trailing state suffix like (aq), (s), (l), (g)
fn clean_formula(term: &str) -> String {
    let state_re = Regex::new(r"(?i)\((aq|s|l|g)\)\s*$").unwrap();
    state_re.replace(term, "").trim().to_string()
}

/// drop a leading numeric coefficient, then the state suffix
fn strip_coeff(part: &str) -> String {
    let coeff_re = Regex::new(r"^\s*[0-9]+(\.[0-9]+)?\s*").unwrap();
    clean_formula(coeff_re.replace(part, "").trim())
}

fn split_reaction(reaction: &str) -> Result<(Vec<String>, Vec<String>), StoichiometryError> {
    if reaction.trim().is_empty() {
        return Err(StoichiometryError::EmptyReaction);
    }
    let (left, right) = reaction
        .split_once("->")
        .or_else(|| reaction.split_once('='))
        .ok_or(StoichiometryError::MissingArrow)?;

    let left_parts: Vec<String> = left
        .split('+')
        .filter(|p| !p.trim().is_empty())
        .map(strip_coeff)
        .collect();
    let right_parts: Vec<String> = right
        .split('+')
        .filter(|p| !p.trim().is_empty())
        .map(strip_coeff)
        .collect();
    if left_parts.is_empty() || right_parts.is_empty() {
        return Err(StoichiometryError::MissingSide);
    }
    Ok((left_parts, right_parts))
}

/// lenient numeric reading for values typed into a widget: numbers pass
/// through, strings tolerate a comma decimal separator, everything non-finite
/// or unparsable becomes None
fn to_float(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => {
            let cleaned = s.trim().replace(',', ".");
            if cleaned.is_empty() {
                return None;
            }
            cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
        }
        _ => None,
    }
}

/// Accepts either a map {species: {n, m}} (a bare number is taken as n) or a
/// list of {species|name, n, m} records, as the notebook frontend sends them.
fn normalize_inputs(inputs: Option<&Value>) -> HashMap<String, (Option<f64>, Option<f64>)> {
    let mut normalized = HashMap::new();
    match inputs {
        Some(Value::Object(map)) => {
            for (species, payload) in map {
                if species.is_empty() {
                    continue;
                }
                let entry = match payload {
                    Value::Object(fields) => (to_float(fields.get("n")), to_float(fields.get("m"))),
                    other => (to_float(Some(other)), None),
                };
                normalized.insert(species.clone(), entry);
            }
        }
        Some(Value::Array(items)) => {
            for item in items {
                let Value::Object(fields) = item else {
                    continue;
                };
                let species = fields
                    .get("species")
                    .or_else(|| fields.get("name"))
                    .and_then(|v| v.as_str());
                let Some(species) = species else {
                    continue;
                };
                if species.is_empty() {
                    continue;
                }
                normalized.insert(
                    species.to_string(),
                    (to_float(fields.get("n")), to_float(fields.get("m"))),
                );
            }
        }
        _ => {}
    }
    normalized
}

fn relative_diff(a: f64, b: f64) -> f64 {
    (a - b).abs() / a.abs().max(b.abs()).max(1.0)
}

/// format a coefficient for display: nothing when it is 1, an integer when it
/// is within 1e-9 of a whole number, its decimal text otherwise
fn fmt_coeff(value: f64) -> String {
    if (value - 1.0).abs() < 1e-9 {
        String::new()
    } else if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{}", value)
    }
}

/// subscript the digit runs of a formula for display markup,
/// e.g. "Ca(NO3)2" -> "Ca(NO_{3})_{2}"
fn latex_name(formula: &str) -> String {
    let mut out = String::new();
    let mut digits = String::new();
    for c in formula.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
        } else {
            if !digits.is_empty() {
                out.push_str(&format!("_{{{}}}", digits));
                digits.clear();
            }
            out.push(c);
        }
    }
    if !digits.is_empty() {
        out.push_str(&format!("_{{{}}}", digits));
    }
    out
}

fn build_table(
    reaction: &str,
    inputs: Option<&Value>,
) -> Result<StoichiometryResult, StoichiometryError> {
    let (left_names, right_names) = split_reaction(reaction)?;

    let mut left_side: Side = Vec::new();
    for name in &left_names {
        left_side.push((name.clone(), parse_formula(name).map_err(BalanceError::from)?));
    }
    let mut right_side: Side = Vec::new();
    for name in &right_names {
        right_side.push((name.clone(), parse_formula(name).map_err(BalanceError::from)?));
    }
    let coeff_vector = balance_terms(&left_side, &right_side)?;

    // species listed twice collapse to one key, the last coefficient wins
    let mut coeffs: HashMap<String, f64> = HashMap::new();
    let mut molar_masses: HashMap<String, Option<f64>> = HashMap::new();
    let ordered: Vec<(String, &str)> = left_names
        .iter()
        .map(|n| (n.clone(), "reactant"))
        .chain(right_names.iter().map(|n| (n.clone(), "product")))
        .collect();
    for ((name, composition), coeff) in left_side.iter().chain(right_side.iter()).zip(&coeff_vector)
    {
        coeffs.insert(name.clone(), *coeff as f64);
        molar_masses.insert(name.clone(), molar_mass_of_composition(composition));
    }

    let mut inputs_map = normalize_inputs(inputs);
    inputs_map.retain(|species, _| {
        let known = coeffs.contains_key(species);
        if !known {
            warn!("discarding input for {}: not present in the reaction", species);
        }
        known
    });

    // derive moles from mass where possible, then find the limiting extent
    let mut computed: HashMap<String, (Option<f64>, Option<f64>)> = HashMap::new();
    let mut extents: Vec<f64> = Vec::new();
    for (name, _side) in &ordered {
        let (mut input_n, input_m) = inputs_map.get(name).copied().unwrap_or((None, None));
        let molar_mass = molar_masses.get(name).copied().flatten();
        if input_n.is_none() {
            if let (Some(m), Some(mm)) = (input_m, molar_mass) {
                if mm != 0.0 {
                    input_n = Some(m / mm);
                }
            }
        }
        computed.insert(name.clone(), (input_n, input_m));
        if let Some(n) = input_n {
            let coeff = coeffs.get(name).copied().unwrap_or(0.0);
            if coeff > 0.0 {
                extents.push(n / coeff);
            }
        }
    }
    let extent = extents.iter().copied().fold(None, |acc: Option<f64>, e| {
        Some(acc.map_or(e, |a| a.min(e)))
    });

    let mut species_rows = Vec::new();
    for (name, side) in &ordered {
        let coeff = coeffs.get(name).copied().unwrap_or(0.0);
        let molar_mass = molar_masses.get(name).copied().flatten();
        let (input_n, input_m) = computed.get(name).copied().unwrap_or((None, None));

        let calc_n = extent.map(|e| coeff * e);
        let calc_m = match (calc_n, molar_mass) {
            (Some(n), Some(mm)) => Some(n * mm),
            _ => None,
        };

        let mut status = "ok";
        if let (Some(a), Some(b)) = (input_n, calc_n) {
            if relative_diff(a, b) > 1e-3 {
                status = "mismatch";
            }
        }
        if let (Some(a), Some(b)) = (input_m, calc_m) {
            if relative_diff(a, b) > 1e-3 {
                status = "mismatch";
            }
        }

        species_rows.push(SpeciesRow {
            name: name.clone(),
            side: side.to_string(),
            coeff,
            molar_mass,
            input_n,
            input_m,
            calc_n,
            calc_m,
            status: status.to_string(),
        });
    }

    let fmt_term = |name: &String| format!("{}{}", fmt_coeff(coeffs[name]), name);
    let balanced = format!(
        "{} -> {}",
        left_names.iter().map(&fmt_term).collect::<Vec<_>>().join(" + "),
        right_names.iter().map(&fmt_term).collect::<Vec<_>>().join(" + ")
    );
    let fmt_latex = |name: &String| format!("{}{}", fmt_coeff(coeffs[name]), latex_name(name));
    let equation_latex = format!(
        "{} \\rightarrow {}",
        left_names.iter().map(&fmt_latex).collect::<Vec<_>>().join(" + "),
        right_names.iter().map(&fmt_latex).collect::<Vec<_>>().join(" + ")
    );
    info!(
        "stoichiometry table for '{}': extent {:?}",
        balanced, extent
    );

    Ok(StoichiometryResult {
        ok: true,
        error: None,
        balanced: Some(balanced),
        equation_latex: Some(equation_latex),
        species: species_rows,
    })
}

/// Return stoichiometry table data for frontend rendering. Parse and balancing
/// failures come back as ok = false with a message, never as an Err.
pub fn render_stoichiometry(reaction: &str, inputs: Option<&Value>) -> StoichiometryResult {
    match build_table(reaction, inputs) {
        Ok(result) => result,
        Err(err) => {
            warn!("stoichiometry failed for '{}': {}", reaction, err);
            StoichiometryResult::failed(err.to_string())
        }
    }
}

fn fmt_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.4}", v),
        None => "-".to_string(),
    }
}

/// Print the species rows as a table to stdout.
pub fn pretty_print_stoichiometry(result: &StoichiometryResult) {
    if !result.ok {
        println!(
            "stoichiometry failed: {}",
            result.error.as_deref().unwrap_or("unknown error")
        );
        return;
    }
    if let Some(balanced) = &result.balanced {
        println!("{}", balanced);
    }
    let mut table = Table::new();
    let header = [
        "species", "side", "coeff", "M, g/mol", "n given", "m given", "n expected", "m expected",
        "status",
    ];
    table.add_row(Row::new(header.iter().map(|h| Cell::new(h)).collect()));
    for row in &result.species {
        table.add_row(Row::new(vec![
            Cell::new(&row.name),
            Cell::new(&row.side),
            Cell::new(&fmt_coeff(row.coeff)),
            Cell::new(&fmt_cell(row.molar_mass)),
            Cell::new(&fmt_cell(row.input_n)),
            Cell::new(&fmt_cell(row.input_m)),
            Cell::new(&fmt_cell(row.calc_n)),
            Cell::new(&fmt_cell(row.calc_m)),
            Cell::new(&row.status),
        ]));
    }
    table.printstd();
}

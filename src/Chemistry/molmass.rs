use crate::Chemistry::formula_parser::{Composition, FormulaError, parse_formula};
use crate::Chemistry::periodic_table::atomic_mass;
use log::warn;

/// Sum of atomic masses over the composition, g/mol. Returns None if any
/// element is missing from the periodic table, the caller decides what to do
/// with a substance of unknown mass.
pub fn molar_mass_of_composition(composition: &Composition) -> Option<f64> {
    let mut molar_mass = 0.0;
    for (element, count) in composition {
        match atomic_mass(element) {
            Some(mass) => molar_mass += mass * *count as f64,
            None => {
                warn!("unknown element {}: molar mass unavailable", element);
                return None;
            }
        }
    }
    Some(molar_mass)
}

/// Function to calculate the molar mass of a substance given its chemical formula
pub fn calculate_molar_mass(
    formula: &str,
) -> Result<(Option<f64>, Composition), FormulaError> {
    let composition = parse_formula(formula)?;
    let molar_mass = molar_mass_of_composition(&composition);
    Ok((molar_mass, composition))
}

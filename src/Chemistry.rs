/// Static table of chemical elements and their standard atomic masses,
/// with lookup by element symbol.
pub mod periodic_table;
/// eng
/// The module takes a chemical formula given as a String (brackets and nested
/// groups with multipliers are allowed, e.g. "Ca(NO3)2") and produces the atomic
/// composition of the substance: a map from element symbol to the number of atoms.
/// Any character that is not an element symbol, a digit or a bracket is rejected,
/// as well as unbalanced brackets and stray numbers.
///
///  # Examples
/// ```
/// use StoiChem::Chemistry::formula_parser::parse_formula;
/// let composition = parse_formula("Mg(OH)2").unwrap();
/// assert_eq!(composition.get("Mg"), Some(&1));
/// assert_eq!(composition.get("O"), Some(&2));
/// assert_eq!(composition.get("H"), Some(&2));
/// ```
pub mod formula_parser;
/// Module to calculate the molar mass of a chemical formula from its atomic
/// composition. Unknown elements do not fail the calculation - the molar mass
/// just becomes None for that substance.
///
///  # Examples
/// ```
/// use StoiChem::Chemistry::molmass::calculate_molar_mass;
/// let (molar_mass, element_composition) = calculate_molar_mass("C6H8O6").unwrap();
/// println!("Element counts: {:?}", element_composition);
/// println!("Molar mass: {:?} g/mol", molar_mass);
/// assert!((molar_mass.unwrap() - 176.12).abs() < 1e-1);
/// ```
pub mod molmass;
/// eng
/// The module takes a reaction equation given as a String, where both sides are
/// lists of formulae joined by '+' and separated by '->' or '=', and returns the
/// same equation with the smallest positive integer coefficients inserted.
/// The process is as follows:
/// 1) both sides are parsed into atomic compositions
/// 2) the stoichiometric matrix is built: one row per element, one column per
/// substance, product entries taken with a minus sign
/// 3) the null space of this matrix is computed exactly over the integers with a
/// fixed elimination order, so the same equation always gets the same answer
/// 4) the resulting vector is scaled to the smallest positive integers
///
///  # Examples
/// ```
/// use StoiChem::Chemistry::balancer::balance_equation;
/// let balanced = balance_equation("H2 + O2 -> H2O").unwrap();
/// assert_eq!(balanced, "2H2 + O2 -> 2H2O");
/// ```
pub mod balancer;
/// eng
/// The module takes a reaction equation and optional experimental inputs (moles
/// and/or mass per substance) and produces a stoichiometry table: balanced
/// coefficients, molar masses, the reaction extent inferred from the limiting
/// substance, expected moles and masses for every substance and a per-row
/// ok/mismatch status against the supplied values. Designed for interactive
/// display, so it never returns an error: a reaction that cannot be balanced
/// produces a result with ok = false and a message instead.
///
///  # Examples
/// ```
/// use StoiChem::Chemistry::stoichiometry::render_stoichiometry;
/// use serde_json::json;
/// let inputs = json!({"H2": {"n": 2.0}, "O2": {"n": 1.0}});
/// let result = render_stoichiometry("H2 + O2 -> H2O", Some(&inputs));
/// assert!(result.ok);
/// assert_eq!(result.balanced.unwrap(), "2H2 + O2 -> 2H2O");
/// ```
pub mod stoichiometry;
mod balancer_tests;

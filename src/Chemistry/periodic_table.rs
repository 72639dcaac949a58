// Define a struct to hold element data
pub struct Element {
    pub symbol: &'static str,
    pub atomic_mass: f64,
}

// Standard atomic masses for the elements a student lab actually meets.
pub const ELEMENTS: &[Element] = &[
    Element { symbol: "H", atomic_mass: 1.008 },
    Element { symbol: "He", atomic_mass: 4.0026 },
    Element { symbol: "Li", atomic_mass: 6.94 },
    Element { symbol: "Be", atomic_mass: 9.0122 },
    Element { symbol: "B", atomic_mass: 10.81 },
    Element { symbol: "C", atomic_mass: 12.011 },
    Element { symbol: "N", atomic_mass: 14.007 },
    Element { symbol: "O", atomic_mass: 15.999 },
    Element { symbol: "F", atomic_mass: 18.998 },
    Element { symbol: "Ne", atomic_mass: 20.18 },
    Element { symbol: "Na", atomic_mass: 22.99 },
    Element { symbol: "Mg", atomic_mass: 24.305 },
    Element { symbol: "Al", atomic_mass: 26.982 },
    Element { symbol: "Si", atomic_mass: 28.085 },
    Element { symbol: "P", atomic_mass: 30.974 },
    Element { symbol: "S", atomic_mass: 32.06 },
    Element { symbol: "Cl", atomic_mass: 35.45 },
    Element { symbol: "Ar", atomic_mass: 39.948 },
    Element { symbol: "K", atomic_mass: 39.098 },
    Element { symbol: "Ca", atomic_mass: 40.078 },
    Element { symbol: "Sc", atomic_mass: 44.956 },
    Element { symbol: "Ti", atomic_mass: 47.867 },
    Element { symbol: "V", atomic_mass: 50.942 },
    Element { symbol: "Cr", atomic_mass: 51.996 },
    Element { symbol: "Mn", atomic_mass: 54.938 },
    Element { symbol: "Fe", atomic_mass: 55.845 },
    Element { symbol: "Co", atomic_mass: 58.933 },
    Element { symbol: "Ni", atomic_mass: 58.693 },
    Element { symbol: "Cu", atomic_mass: 63.546 },
    Element { symbol: "Zn", atomic_mass: 65.38 },
    Element { symbol: "Ga", atomic_mass: 69.723 },
    Element { symbol: "Ge", atomic_mass: 72.63 },
    Element { symbol: "As", atomic_mass: 74.922 },
    Element { symbol: "Se", atomic_mass: 78.971 },
    Element { symbol: "Br", atomic_mass: 79.904 },
    Element { symbol: "Kr", atomic_mass: 83.798 },
    Element { symbol: "Rb", atomic_mass: 85.468 },
    Element { symbol: "Sr", atomic_mass: 87.62 },
    Element { symbol: "Y", atomic_mass: 88.906 },
    Element { symbol: "Zr", atomic_mass: 91.224 },
    Element { symbol: "Nb", atomic_mass: 92.906 },
    Element { symbol: "Mo", atomic_mass: 95.95 },
    Element { symbol: "Ru", atomic_mass: 101.07 },
    Element { symbol: "Rh", atomic_mass: 102.91 },
    Element { symbol: "Pd", atomic_mass: 106.42 },
    Element { symbol: "Ag", atomic_mass: 107.87 },
    Element { symbol: "Cd", atomic_mass: 112.41 },
    Element { symbol: "In", atomic_mass: 114.82 },
    Element { symbol: "Sn", atomic_mass: 118.71 },
    Element { symbol: "Sb", atomic_mass: 121.76 },
    Element { symbol: "Te", atomic_mass: 127.6 },
    Element { symbol: "I", atomic_mass: 126.9 },
    Element { symbol: "Xe", atomic_mass: 131.29 },
    Element { symbol: "Cs", atomic_mass: 132.91 },
    Element { symbol: "Ba", atomic_mass: 137.33 },
    Element { symbol: "W", atomic_mass: 183.84 },
    Element { symbol: "Pt", atomic_mass: 195.08 },
    Element { symbol: "Au", atomic_mass: 196.97 },
    Element { symbol: "Hg", atomic_mass: 200.59 },
    Element { symbol: "Pb", atomic_mass: 207.2 },
    Element { symbol: "Bi", atomic_mass: 208.98 },
    // Add more elements here...
];

/// Look up the standard atomic mass by element symbol (e.g. "C", "Fe").
pub fn atomic_mass(symbol: &str) -> Option<f64> {
    ELEMENTS
        .iter()
        .find(|e| e.symbol == symbol)
        .map(|e| e.atomic_mass)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atomic_mass_lookup() {
        assert!((atomic_mass("H").unwrap() - 1.008).abs() < 1e-6);
        assert!((atomic_mass("Fe").unwrap() - 55.845).abs() < 1e-6);
        assert!((atomic_mass("Pb").unwrap() - 207.2).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_symbol_returns_none() {
        assert!(atomic_mass("Zz").is_none());
        assert!(atomic_mass("").is_none());
        // symbols are case sensitive: "h" is not hydrogen
        assert!(atomic_mass("h").is_none());
    }
}

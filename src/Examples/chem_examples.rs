use crate::Chemistry::balancer::balance_equation;
use crate::Chemistry::molmass::calculate_molar_mass;
use crate::Chemistry::stoichiometry::{pretty_print_stoichiometry, render_stoichiometry};
use approx::assert_relative_eq;
use serde_json::json;

pub fn chem_examples(chemtask: usize) {
    //

    match chemtask {
        0 => {
            // balancing a few classroom reactions
            let reactions = vec![
                "H2 + O2 -> H2O",
                "Fe + O2 -> Fe2O3",
                "CH4 + O2 -> CO2 + H2O",
                "Ca(OH)2 + H3PO4 -> Ca3(PO4)2 + H2O",
                "KMnO4 + HCl -> KCl + MnCl2 + H2O + Cl2",
            ];
            for reaction in reactions {
                let balanced = balance_equation(reaction).unwrap();
                println!("{}  =>  {}", reaction, balanced);
            }
            let (molar_mass, composition) = calculate_molar_mass("Ca(NO3)2").unwrap();
            println!("Element counts: {:?}", composition);
            println!("Molar mass: {:?} g/mol", molar_mass);
            assert_relative_eq!(molar_mass.unwrap(), 164.09, epsilon = 1e-1);
        }

        1 => {
            // a stoichiometry table for burning hydrogen: 2 mol of H2 and
            // 5 mol of O2, so H2 is the limiting reagent and the O2 row is
            // flagged as a mismatch
            let inputs = json!({"H2": {"n": 2.0}, "O2": {"n": 5.0}});
            let result = render_stoichiometry("H2(g) + O2(g) -> H2O(l)", Some(&inputs));
            pretty_print_stoichiometry(&result);
            let water = result.species.iter().find(|s| s.name == "H2O").unwrap();
            assert_relative_eq!(water.calc_n.unwrap(), 2.0, epsilon = 1e-9);
            assert_relative_eq!(water.calc_m.unwrap(), 36.03, epsilon = 1e-1);
        }

        2 => {
            // a reaction that cannot be balanced comes back as a soft failure
            // the frontend can render
            let result = render_stoichiometry("Na -> Cl", None);
            println!("{}", serde_json::to_string_pretty(&result).unwrap());
        }
        _ => {
            println!("no such example: {}", chemtask);
        }
    }
}

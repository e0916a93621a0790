use crate::Elements::reference_data::ReferenceData;

pub const EXAMPLES_COUNT: usize = 6;

pub fn balance_examples(task: usize, data: &ReferenceData) {
    //
    match task {
        0 => {
            // simple combustion: coefficients, matrix and reference data of every element
            use crate::Balancer::equation::balance;
            use crate::report::build_report;
            let balanced = balance("C3H8+O2", "CO2+H2O").unwrap();
            assert_eq!(balanced.coefficients, vec![1, 5, 3, 4]);
            balanced.matrix.pretty_print(&balanced.species());
            let report = build_report(balanced, data);
            report.pretty_print(data);
        }
        1 => {
            // groups and brackets
            use crate::Balancer::equation::balance;
            let tasks = vec![
                ("Ca(OH)2+H3PO4", "Ca3(PO4)2+H2O"),
                ("(NH4)2Cr2O7", "Cr2O3+N2+H2O"),
                ("Ca3(PO4)2+SiO2+C", "CaSiO3+P4+CO"),
                ("K4[Fe(CN)6]+H2SO4+H2O", "K2SO4+FeSO4+(NH4)2SO4+CO"),
            ];
            for (reactants, products) in tasks {
                let balanced = balance(reactants, products).unwrap();
                println!("{}", balanced);
            }
        }
        2 => {
            // one-line equations with arrows and state marks
            use crate::Balancer::equation::balance_equation_str;
            let tasks = vec![
                "Cu + HNO3 -> Cu(NO3)2 + NO + H2O",
                "NH3(g) + O2(g) => NO(g) + H2O(l)",
                "C8H18 + O2 = CO2 + H2O",
                "Zn(s) + HCl(aq) → ZnCl2(aq) + H2(g)",
            ];
            for equation in tasks {
                let balanced = balance_equation_str(equation).unwrap();
                balanced.pretty_print();
            }
        }
        3 => {
            // equations without a unique answer
            use crate::Balancer::equation::balance;
            for (reactants, products) in [("H2+O2", "H2O+H2O2"), ("Fe", "O2"), ("H2O+H2", "O2")] {
                match balance(reactants, products) {
                    Ok(balanced) => println!("{}", balanced),
                    Err(e) => println!("{} -> {}: {}", reactants, products, e),
                }
            }
        }
        4 => {
            // exact null space of the stoichiometric matrix, before normalisation
            use crate::Balancer::null_space::null_space;
            use crate::Balancer::stoichiometry_matrix::StoichiometryMatrix;
            let reactants = vec!["KMnO4".to_string(), "HCl".to_string()];
            let products: Vec<String> = ["KCl", "MnCl2", "H2O", "Cl2"]
                .iter()
                .map(|s| s.to_string())
                .collect();
            let matrix = StoichiometryMatrix::from_species(&reactants, &products).unwrap();
            let basis = null_space(&matrix.element_rows(), matrix.species_count());
            for vector in basis {
                let entries: Vec<String> = vector.iter().map(|x| x.to_string()).collect();
                println!("null space vector: [{}]", entries.join(", "));
            }
        }
        5 => {
            // element properties and plot series for a set of symbols
            use crate::Elements::element_properties::Property;
            let symbols: Vec<String> = ["Fe", "Cu", "Zn", "Ag", "Au"]
                .iter()
                .map(|s| s.to_string())
                .collect();
            data.pretty_print_properties(&symbols);
            for property in Property::ALL {
                println!("{}: {:?}", property.label(), data.property_series(&symbols, property));
            }
        }
        _ => {
            println!("no such example, choose 0..{}", EXAMPLES_COUNT - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_examples_run() {
        let data =
            ReferenceData::load(concat!(env!("CARGO_MANIFEST_DIR"), "/data/elements_base.json"))
                .unwrap();
        for task in 0..EXAMPLES_COUNT {
            balance_examples(task, &data);
        }
    }
}

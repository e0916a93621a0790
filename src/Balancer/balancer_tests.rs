/////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
/////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Balancer::equation::{BalancedEquation, balance, balance_equation_str};
    use crate::Balancer::errors::BalanceError;
    use crate::Balancer::rational::gcd_of_integers;
    use num_bigint::BigInt;

    // conservation, minimality and positivity of a balanced equation
    fn check_properties(balanced: &BalancedEquation) {
        assert!(
            balanced.matrix.is_conserved(&balanced.coefficients),
            "{} does not conserve atoms",
            balanced
        );
        let as_big: Vec<BigInt> = balanced
            .coefficients
            .iter()
            .map(|&x| BigInt::from(x))
            .collect();
        assert_eq!(gcd_of_integers(&as_big), BigInt::from(1));
        assert!(balanced.reactant_coefficients().iter().all(|&c| c > 0));
        assert!(balanced.product_coefficients().iter().all(|&c| c > 0));
    }

    #[test]
    fn test_water() {
        let balanced = balance("H2+O2", "H2O").unwrap();
        assert_eq!(balanced.coefficients, vec![2, 1, 2]);
        assert_eq!(balanced.equation_string(), "2H2 + 1O2 -> 2H2O");
        check_properties(&balanced);
    }

    #[test]
    fn test_sodium_chloride() {
        let balanced = balance("Na+Cl2", "NaCl").unwrap();
        assert_eq!(balanced.coefficients, vec![2, 1, 2]);
        check_properties(&balanced);
    }

    #[test]
    fn test_propane_combustion() {
        let balanced = balance("C3H8+O2", "CO2+H2O").unwrap();
        assert_eq!(balanced.coefficients, vec![1, 5, 3, 4]);
        assert_eq!(balanced.equation_string(), "1C3H8 + 5O2 -> 3CO2 + 4H2O");
        check_properties(&balanced);
    }

    #[test]
    fn test_elements_on_one_side_only() {
        assert_eq!(balance("Fe", "O2"), Err(BalanceError::Unbalanceable));
    }

    #[test]
    fn test_equations_with_groups() {
        let cases: Vec<(&str, &str, Vec<i64>)> = vec![
            ("Ca(OH)2+H3PO4", "Ca3(PO4)2+H2O", vec![3, 2, 1, 6]),
            ("Al+O2", "Al2O3", vec![4, 3, 2]),
            ("Fe2O3+CO", "Fe+CO2", vec![1, 3, 2, 3]),
            ("KMnO4+HCl", "KCl+MnCl2+H2O+Cl2", vec![2, 16, 2, 2, 8, 5]),
            ("(NH4)2Cr2O7", "Cr2O3+N2+H2O", vec![1, 1, 1, 4]),
            ("C6H12O6+O2", "CO2+H2O", vec![1, 6, 6, 6]),
            ("K4[Fe(CN)6]+H2SO4+H2O", "K2SO4+FeSO4+(NH4)2SO4+CO", vec![1, 6, 6, 2, 1, 3, 6]),
        ];
        for (reactants, products, expected) in cases {
            let balanced = balance(reactants, products).unwrap();
            assert_eq!(
                balanced.coefficients, expected,
                "{} -> {}",
                reactants, products
            );
            check_properties(&balanced);
        }
    }

    #[test]
    fn test_whitespace_and_leading_coefficients_are_tolerated() {
        let balanced = balance(" 2H2 + O2 ", " 5 H2O ").unwrap();
        assert_eq!(balanced.coefficients, vec![2, 1, 2]);
        assert_eq!(balanced.equation_string(), "2H2 + 1O2 -> 2H2O");
    }

    #[test]
    fn test_state_marks() {
        let balanced = balance_equation_str("CH4(g) + O2(g) -> CO2(g) + H2O(l)").unwrap();
        assert_eq!(balanced.coefficients, vec![1, 2, 1, 2]);
        assert_eq!(
            balanced.equation_string(),
            "1CH4(g) + 2O2(g) -> 1CO2(g) + 2H2O(l)"
        );
    }

    #[test]
    fn test_underdetermined() {
        assert_eq!(
            balance("H2+O2", "H2O+H2O2"),
            Err(BalanceError::Underdetermined { dimension: 2 })
        );
        // the same species twice
        assert_eq!(
            balance("H2O", "O2+H2+H2"),
            Err(BalanceError::Underdetermined { dimension: 2 })
        );
    }

    #[test]
    fn test_inconsistent_sign() {
        // N2 takes no part: its coefficient is forced to zero
        assert_eq!(
            balance("H2+O2+N2", "H2O"),
            Err(BalanceError::InconsistentSign)
        );
        // H2 is written as a reactant but is produced
        assert_eq!(balance("H2O+H2", "O2"), Err(BalanceError::InconsistentSign));
    }

    #[test]
    fn test_parse_errors_abort_the_request() {
        assert!(matches!(
            balance("H2+o2", "H2O"),
            Err(BalanceError::ParseError { .. })
        ));
        assert!(matches!(
            balance("", "H2O"),
            Err(BalanceError::ParseError { .. })
        ));
        // a non-ASCII digit is not a count
        assert!(matches!(
            balance("H\u{0662}+O2", "H2O"),
            Err(BalanceError::ParseError { .. })
        ));
        assert!(matches!(
            balance_equation_str("H2 + O2 H2O"),
            Err(BalanceError::ParseError { .. })
        ));
        // a failed request leaves nothing behind
        assert_eq!(balance("H2+O2", "H2O").unwrap().coefficients, vec![2, 1, 2]);
    }

    #[test]
    fn test_element_discovery_order() {
        let balanced = balance("NaOH+HCl", "NaCl+H2O").unwrap();
        assert_eq!(
            balanced.elements,
            vec![
                "Na".to_string(),
                "O".to_string(),
                "H".to_string(),
                "Cl".to_string()
            ]
        );
        assert_eq!(balanced.coefficients, vec![1, 1, 1, 1]);
    }
}

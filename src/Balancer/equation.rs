use crate::Balancer::errors::BalanceError;
use crate::Balancer::normalizer::normalize;
use crate::Balancer::null_space::solve;
use crate::Balancer::stoichiometry_matrix::StoichiometryMatrix;
use log::info;
use prettytable::{Table, row};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static ARROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"->|=>|→|=").expect("arrow pattern is valid"));
static LEADING_COEFFICIENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+").expect("coefficient pattern is valid"));

/// Result of balancing: species in input order (reactants first), their coefficients,
/// the elements met during parsing (in order of discovery) and the stoichiometric matrix
#[derive(Debug, Clone, PartialEq)]
pub struct BalancedEquation {
    pub reactants: Vec<String>,
    pub products: Vec<String>,
    pub coefficients: Vec<i64>,
    pub elements: Vec<String>,
    pub matrix: StoichiometryMatrix,
}

impl BalancedEquation {
    pub fn reactant_coefficients(&self) -> &[i64] {
        &self.coefficients[..self.reactants.len()]
    }

    pub fn product_coefficients(&self) -> &[i64] {
        &self.coefficients[self.reactants.len()..]
    }

    /// all species, reactants then products
    pub fn species(&self) -> Vec<String> {
        self.reactants
            .iter()
            .chain(self.products.iter())
            .cloned()
            .collect()
    }

    /// "<coef><formula> + ... -> <coef><formula> + ...", coefficients equal to 1 are shown too
    pub fn equation_string(&self) -> String {
        let side = |formulas: &[String], coefficients: &[i64]| -> String {
            formulas
                .iter()
                .zip(coefficients)
                .map(|(formula, coefficient)| format!("{}{}", coefficient, formula))
                .collect::<Vec<_>>()
                .join(" + ")
        };
        format!(
            "{} -> {}",
            side(&self.reactants, self.reactant_coefficients()),
            side(&self.products, self.product_coefficients())
        )
    }

    pub fn pretty_print(&self) {
        println!("__________balanced equation__________");
        println!("{}", self.equation_string());
        let mut table = Table::new();
        table.add_row(row!["species", "side", "coefficient"]);
        for (formula, coefficient) in self.reactants.iter().zip(self.reactant_coefficients()) {
            table.add_row(row![formula, "reactant", coefficient]);
        }
        for (formula, coefficient) in self.products.iter().zip(self.product_coefficients()) {
            table.add_row(row![formula, "product", coefficient]);
        }
        table.printstd();
    }
}

impl fmt::Display for BalancedEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.equation_string())
    }
}

/// Splits one side of the equation ("Na + Cl2") into species. Whitespace is dropped,
/// a leading coefficient of a species is discarded
pub fn split_species(side: &str) -> Result<Vec<String>, BalanceError> {
    let side: String = side.chars().filter(|c| !c.is_whitespace()).collect();
    if side.is_empty() {
        return Err(BalanceError::parse(&side, "no species on this side of the equation"));
    }
    side.split('+')
        .map(|species| {
            let species = LEADING_COEFFICIENT.replace(species, "").into_owned();
            if species.is_empty() {
                Err(BalanceError::parse(&side, "empty species between '+' signs"))
            } else {
                Ok(species)
            }
        })
        .collect()
}

/// Splits "<reactants> -> <products>" at the single arrow (->, =>, → or =)
pub fn split_equation(equation: &str) -> Result<(String, String), BalanceError> {
    let arrows: Vec<_> = ARROW.find_iter(equation).collect();
    match arrows.as_slice() {
        [arrow] => Ok((
            equation[..arrow.start()].to_string(),
            equation[arrow.end()..].to_string(),
        )),
        [] => Err(BalanceError::parse(equation, "no arrow between reactants and products")),
        _ => Err(BalanceError::parse(equation, "more than one arrow in the equation")),
    }
}

/// Balances the equation given as two '+'-delimited lists of skeletal formulas
/// # Example
/// ```
/// use ChemBalance::Balancer::equation::balance;
/// let balanced = balance("H2+O2", "H2O").unwrap();
/// assert_eq!(balanced.coefficients, vec![2, 1, 2]);
/// assert_eq!(balanced.to_string(), "2H2 + 1O2 -> 2H2O");
/// ```
pub fn balance(reactants: &str, products: &str) -> Result<BalancedEquation, BalanceError> {
    info!("balancing: {} -> {}", reactants, products);
    let reactants = split_species(reactants)?;
    let products = split_species(products)?;

    let matrix = StoichiometryMatrix::from_species(&reactants, &products)?;
    let vector = solve(&matrix.element_rows(), matrix.species_count())?;
    let coefficients = normalize(&vector, reactants.len())?;
    matrix.check_conservation(&coefficients)?;

    let balanced = BalancedEquation {
        reactants,
        products,
        coefficients,
        elements: matrix.elements.clone(),
        matrix,
    };
    info!("balanced: {}", balanced);
    Ok(balanced)
}

/// Balances an equation written on one line, e.g. "C3H8 + O2 -> CO2 + H2O"
pub fn balance_equation_str(equation: &str) -> Result<BalancedEquation, BalanceError> {
    let (reactants, products) = split_equation(equation)?;
    balance(&reactants, &products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_species() {
        assert_eq!(
            split_species(" Na + Cl2 ").unwrap(),
            vec!["Na".to_string(), "Cl2".to_string()]
        );
        assert_eq!(
            split_species("2H2+O2").unwrap(),
            vec!["H2".to_string(), "O2".to_string()]
        );
        assert!(split_species("").is_err());
        assert!(split_species("H2++O2").is_err());
        assert!(split_species("H2+").is_err());
    }

    #[test]
    fn test_split_equation() {
        assert_eq!(
            split_equation("H2 + O2 -> H2O").unwrap(),
            ("H2 + O2 ".to_string(), " H2O".to_string())
        );
        assert_eq!(
            split_equation("H2+O2=H2O").unwrap(),
            ("H2+O2".to_string(), "H2O".to_string())
        );
        assert_eq!(
            split_equation("H2+O2=>H2O").unwrap(),
            ("H2+O2".to_string(), "H2O".to_string())
        );
        assert_eq!(
            split_equation("H2+O2→H2O").unwrap(),
            ("H2+O2".to_string(), "H2O".to_string())
        );
        assert!(split_equation("H2+O2 H2O").is_err());
        assert!(split_equation("H2 -> O2 -> H2O").is_err());
    }

    #[test]
    fn test_equation_string_and_sides() {
        let balanced = balance("H2+O2", "H2O").unwrap();
        assert_eq!(balanced.equation_string(), "2H2 + 1O2 -> 2H2O");
        assert_eq!(balanced.reactant_coefficients(), &[2, 1]);
        assert_eq!(balanced.product_coefficients(), &[2]);
        assert_eq!(
            balanced.species(),
            vec!["H2".to_string(), "O2".to_string(), "H2O".to_string()]
        );
        assert_eq!(balanced.elements, vec!["H".to_string(), "O".to_string()]);
    }

    #[test]
    fn test_balance_equation_str() {
        let balanced = balance_equation_str("Na + Cl2 -> NaCl").unwrap();
        assert_eq!(balanced.coefficients, vec![2, 1, 2]);
        assert_eq!(balanced.to_string(), "2Na + 1Cl2 -> 2NaCl");
    }
}

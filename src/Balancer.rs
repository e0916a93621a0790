/// Module to decompose a chemical formula into its atomic composition.
/// Handles element symbols with optional counts, parenthesized and bracketed groups
/// with multipliers (any depth of nesting), a tolerated leading coefficient and a
/// trailing state mark like (g) or (aq). Parsing is strict: anything that is not an
/// element symbol, a count or a group is reported as BalanceError::ParseError
///
///  # Examples
/// ```
/// use ChemBalance::Balancer::formula_parser::parse_formula;
/// let composition = parse_formula("Mg(OH)2").unwrap();
/// assert_eq!(composition.get("O"), Some(&2));
/// assert_eq!(composition.get("H"), Some(&2));
/// assert_eq!(composition.get("Mg"), Some(&1));
/// ```
pub mod formula_parser;
/// Builder of the stoichiometric matrix: rows are species (reactants first, then products),
/// columns are elements in order of their discovery. Reactants contribute positive counts,
/// products negative ones. Counts are accumulated sparsely and the dense matrix is
/// allocated once, when the element vocabulary is final
pub mod stoichiometry_matrix;
/// exact arithmetic helpers over arbitrary-precision rationals
pub mod rational;
/// Exact null space of an integer matrix by Gauss-Jordan elimination over rationals.
/// A well-posed chemical equation has a one-dimensional null space; zero and higher
/// dimensions are reported as Unbalanceable and Underdetermined
pub mod null_space;
/// scaling of the rational null-space vector to the minimal vector of positive integers
pub mod normalizer;
/// Chemical equation: splits reactant/product strings into species, runs the whole
/// pipeline (parser -> matrix -> null space -> normalizer) and renders the balanced equation
///
///  # Examples
/// ```
/// use ChemBalance::Balancer::equation::balance;
/// let balanced = balance("C3H8+O2", "CO2+H2O").unwrap();
/// assert_eq!(balanced.coefficients, vec![1, 5, 3, 4]);
/// assert_eq!(balanced.equation_string(), "1C3H8 + 5O2 -> 3CO2 + 4H2O");
/// ```
pub mod equation;
pub mod errors;
#[cfg(test)]
mod balancer_tests;

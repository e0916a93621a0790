use thiserror::Error;

/// errors of a single balancing request. None of them touches process-wide state,
/// so a corrected request can be submitted right after a failed one
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    #[error("cannot parse formula '{formula}': {reason}")]
    ParseError { formula: String, reason: String },
    #[error("equation cannot be balanced: no combination of species conserves every element")]
    Unbalanceable,
    #[error(
        "equation is underdetermined: {dimension} independent balances exist, coefficients are not unique"
    )]
    Underdetermined { dimension: usize },
    #[error("coefficients cannot be made positive for every species")]
    InconsistentSign,
    #[error("coefficient does not fit into a 64-bit integer")]
    CoefficientOverflow,
    #[error("computed coefficients do not conserve element '{element}'")]
    ConservationViolated { element: String },
}

impl BalanceError {
    pub fn parse(formula: &str, reason: impl Into<String>) -> Self {
        BalanceError::ParseError {
            formula: formula.to_string(),
            reason: reason.into(),
        }
    }
}

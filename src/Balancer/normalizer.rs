use crate::Balancer::errors::BalanceError;
use crate::Balancer::rational::{is_positive, reduce_by_gcd, scale_to_integers, to_i64};
use log::{debug, warn};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;

/// Turns the rational null-space vector into the minimal vector of positive integers.
///
/// 1) multiply by the lcm of all denominators, every entry becomes an integer;
/// 2) divide by the gcd of those integers, the vector becomes minimal;
/// 3) if every reactant (the first `reactant_count` entries) is negative, negate the vector.
///
/// Reactants of mixed sign, or any entry that is not strictly positive after step 3,
/// mean there is no physically meaningful balance: BalanceError::InconsistentSign
pub fn normalize(vector: &[BigRational], reactant_count: usize) -> Result<Vec<i64>, BalanceError> {
    let scaled = scale_to_integers(vector);
    let mut integers = reduce_by_gcd(&scaled);
    debug!("scaled: {:?}, reduced: {:?}", scaled, integers);

    let reactants = &integers[..reactant_count.min(integers.len())];
    if !reactants.is_empty() && reactants.iter().all(|x| x.is_negative()) {
        integers = integers.iter().map(|x| -x).collect();
    }
    orient_check(&integers, reactant_count)?;

    integers
        .iter()
        .map(|x| to_i64(x).ok_or(BalanceError::CoefficientOverflow))
        .collect()
}

fn orient_check(integers: &[BigInt], reactant_count: usize) -> Result<(), BalanceError> {
    if let Some(position) = integers.iter().position(|x| !is_positive(x)) {
        let side = if position < reactant_count {
            "reactant"
        } else {
            "product"
        };
        warn!(
            "coefficient {} of {} {} is not positive",
            integers[position], side, position
        );
        return Err(BalanceError::InconsistentSign);
    }
    Ok(())
}

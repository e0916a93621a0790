//! Module to decompose a chemical formula into element counts
//!
//! Formula grammar understood by the parser:
//!  formula := [coefficient] item* [state]
//!  item    := Element [count] | "(" item+ ")" [count] | "[" item+ "]" [count]
//!  Element := uppercase letter, optionally followed by one lowercase letter
//!  state   := "(g)" | "(l)" | "(s)" | "(aq)"
//! Groups nest to any depth, the count after a group multiplies every element inside it.

use crate::Balancer::errors::BalanceError;
use crate::Balancer::stoichiometry_matrix::{MatrixBuilder, Side};
use log::debug;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// element-symbol tokenizer: one uppercase letter, optionally one lowercase letter, then the count.
/// Counts are ASCII digits only
static ELEMENT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z][a-z]?)([0-9]*)").expect("element token pattern is valid"));
static LEADING_COEFFICIENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+").expect("coefficient pattern is valid"));
static STATE_MARK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((g|l|s|aq)\)$").expect("state mark pattern is valid"));

/// Removes whitespace, a leading stoichiometric coefficient (skeletal input should not have one,
/// but it is tolerated and discarded) and a trailing phase mark such as (g) or (aq)
pub fn clean_formula(formula: &str) -> String {
    let formula: String = formula.chars().filter(|c| !c.is_whitespace()).collect();
    let formula = LEADING_COEFFICIENT.replace(&formula, "");
    STATE_MARK.replace(&formula, "").into_owned()
}

/// Parses a chemical formula and returns a map of elements and their counts
/// # Example
/// ```
/// use ChemBalance::Balancer::formula_parser::parse_formula;
/// let counts = parse_formula("H2O").unwrap();
/// assert_eq!(counts.get("H"), Some(&2));
/// assert_eq!(counts.get("O"), Some(&1));
/// ```
pub fn parse_formula(formula: &str) -> Result<BTreeMap<String, i64>, BalanceError> {
    let cleaned = clean_formula(formula);
    if cleaned.is_empty() {
        return Err(BalanceError::parse(formula, "formula is empty"));
    }
    let mut counts = BTreeMap::new();
    find_symbols(formula, &cleaned, 1, &mut |symbol: &str, count: i64| {
        let total = counts.entry(symbol.to_string()).or_insert(0i64);
        *total = total
            .checked_add(count)
            .ok_or_else(|| BalanceError::parse(formula, "element count is too large"))?;
        Ok(())
    })?;
    debug!("formula {} parsed into {:?}", formula, counts);
    Ok(counts)
}

/// Parses a formula of the species with index `species_index` and adds its element counts
/// directly into the matrix builder, with the sign of the side of the equation
pub fn add_species_counts(
    formula: &str,
    species_index: usize,
    side: Side,
    builder: &mut MatrixBuilder,
) -> Result<(), BalanceError> {
    let cleaned = clean_formula(formula);
    if cleaned.is_empty() {
        return Err(BalanceError::parse(formula, "formula is empty"));
    }
    builder.add_species(species_index)?;
    find_symbols(formula, &cleaned, 1, &mut |symbol: &str, count: i64| {
        builder.add_count(symbol, species_index, count, side)
    })
}

// Walks a segment of the formula left to right. Groups recurse with their multiplier combined with
// the multiplier of the caller; element tokens are reported to `sink` already multiplied.
// `formula` is the whole formula as the user typed it, used only in error messages
fn find_symbols<F>(
    formula: &str,
    segment: &str,
    multiplier: i64,
    sink: &mut F,
) -> Result<(), BalanceError>
where
    F: FnMut(&str, i64) -> Result<(), BalanceError>,
{
    let mut pos = 0;
    while pos < segment.len() {
        let rest = &segment[pos..];
        let Some(c) = rest.chars().next() else {
            break;
        };
        match c {
            '(' | '[' => {
                let close = matching_bracket(formula, rest)?;
                let inner = &rest[1..close];
                if inner.is_empty() {
                    return Err(BalanceError::parse(formula, "empty group"));
                }
                let (group_multiplier, digits_len) = read_count(formula, &rest[close + 1..])?;
                let combined = multiplier
                    .checked_mul(group_multiplier)
                    .ok_or_else(|| BalanceError::parse(formula, "group multiplier is too large"))?;
                find_symbols(formula, inner, combined, sink)?;
                pos += close + 1 + digits_len;
            }
            ')' | ']' => {
                return Err(BalanceError::parse(
                    formula,
                    format!("unmatched closing bracket '{}'", c),
                ));
            }
            c if c.is_ascii_uppercase() => {
                let Some(caps) = ELEMENT_TOKEN.captures(rest) else {
                    return Err(BalanceError::parse(formula, "element symbol expected"));
                };
                let symbol = caps.get(1).map_or("", |m| m.as_str());
                let digits = caps.get(2).map_or("", |m| m.as_str());
                let (count, _) = read_count(formula, digits)?;
                let count = count
                    .checked_mul(multiplier)
                    .ok_or_else(|| BalanceError::parse(formula, "element count is too large"))?;
                sink(symbol, count)?;
                pos += caps.get(0).map_or(rest.len(), |m| m.end());
            }
            c if c.is_ascii_digit() => {
                return Err(BalanceError::parse(
                    formula,
                    format!("count '{}' does not follow an element or a group", c),
                ));
            }
            c => {
                return Err(BalanceError::parse(
                    formula,
                    format!("unexpected character '{}'", c),
                ));
            }
        }
    }
    Ok(())
}

/// index (in `rest`) of the bracket closing the one `rest` starts with
fn matching_bracket(formula: &str, rest: &str) -> Result<usize, BalanceError> {
    let mut open_brackets = Vec::new();
    for (i, c) in rest.char_indices() {
        match c {
            '(' | '[' => open_brackets.push(c),
            ')' | ']' => {
                let Some(open) = open_brackets.pop() else {
                    return Err(BalanceError::parse(formula, "unbalanced brackets"));
                };
                if !matches!((open, c), ('(', ')') | ('[', ']')) {
                    return Err(BalanceError::parse(
                        formula,
                        format!("bracket '{}' closed by '{}'", open, c),
                    ));
                }
                if open_brackets.is_empty() {
                    return Ok(i);
                }
            }
            _ => {}
        }
    }
    Err(BalanceError::parse(formula, "bracket is never closed"))
}

/// Reads the digit run at the start of `text`. Returns the count (1 when there are no digits)
/// and the number of bytes consumed
fn read_count(formula: &str, text: &str) -> Result<(i64, usize), BalanceError> {
    let digits_len = text.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return Ok((1, 0));
    }
    let count: i64 = text[..digits_len]
        .parse()
        .map_err(|_| BalanceError::parse(formula, format!("count '{}' is too large", &text[..digits_len])))?;
    if count == 0 {
        return Err(BalanceError::parse(formula, "zero count"));
    }
    Ok((count, digits_len))
}

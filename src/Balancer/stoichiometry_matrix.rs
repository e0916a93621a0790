use crate::Balancer::errors::BalanceError;
use crate::Balancer::formula_parser::add_species_counts;
use log::{debug, info};
use nalgebra::DMatrix;
use prettytable::{Cell, Row, Table};
use std::collections::HashMap;

/// side of the equation a species belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Reactant,
    Product,
}

impl Side {
    /// reactants add to the balance, products consume from it
    pub fn sign(&self) -> i64 {
        match self {
            Side::Reactant => 1,
            Side::Product => -1,
        }
    }
}

/// First pass of matrix construction: collects the element vocabulary in order of discovery
/// and sparse per-species counts. Nothing is padded, the dense matrix is allocated in build()
#[derive(Debug, Clone, Default)]
pub struct MatrixBuilder {
    elements: Vec<String>,
    columns: HashMap<String, usize>,
    // per species: (column, signed count)
    rows: Vec<Vec<(usize, i64)>>,
}

impl MatrixBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// registers a species row. Species are numbered contiguously: reactants 0..R-1, then products
    pub fn add_species(&mut self, species_index: usize) -> Result<(), BalanceError> {
        if species_index < self.rows.len() {
            return Ok(());
        }
        if species_index == self.rows.len() {
            self.rows.push(Vec::new());
            return Ok(());
        }
        Err(BalanceError::parse(
            "",
            format!(
                "species {} added before species {}",
                species_index,
                self.rows.len()
            ),
        ))
    }

    /// adds `count` atoms of `symbol` to the species, with the sign of its side
    pub fn add_count(
        &mut self,
        symbol: &str,
        species_index: usize,
        count: i64,
        side: Side,
    ) -> Result<(), BalanceError> {
        self.add_species(species_index)?;
        let column = self.column(symbol);
        self.rows[species_index].push((column, count * side.sign()));
        Ok(())
    }

    fn column(&mut self, symbol: &str) -> usize {
        if let Some(&column) = self.columns.get(symbol) {
            return column;
        }
        let column = self.elements.len();
        debug!("new element {} registered at column {}", symbol, column);
        self.elements.push(symbol.to_string());
        self.columns.insert(symbol.to_string(), column);
        column
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    pub fn species_count(&self) -> usize {
        self.rows.len()
    }

    /// Second pass: the vocabulary is final, allocate the dense matrix once and fill it
    pub fn build(self) -> Result<StoichiometryMatrix, BalanceError> {
        let mut matrix = DMatrix::<i64>::zeros(self.rows.len(), self.elements.len());
        for (species, row) in self.rows.iter().enumerate() {
            for &(column, count) in row {
                matrix[(species, column)] =
                    matrix[(species, column)].checked_add(count).ok_or_else(|| {
                        BalanceError::parse(
                            &self.elements[column],
                            "total element count is too large",
                        )
                    })?;
            }
        }
        Ok(StoichiometryMatrix {
            matrix,
            elements: self.elements,
        })
    }
}

/// Stoichiometric matrix of an equation: rows are species, columns are elements
/// in order of discovery, entries are signed atom counts
#[derive(Debug, Clone, PartialEq)]
pub struct StoichiometryMatrix {
    pub matrix: DMatrix<i64>,
    pub elements: Vec<String>,
}

impl StoichiometryMatrix {
    /// Parses every species and assembles the matrix. Reactants get indices 0..R-1,
    /// products R..R+P-1
    pub fn from_species(
        reactants: &[String],
        products: &[String],
    ) -> Result<StoichiometryMatrix, BalanceError> {
        let mut builder = MatrixBuilder::new();
        for (i, formula) in reactants.iter().enumerate() {
            add_species_counts(formula, i, Side::Reactant, &mut builder)?;
        }
        for (i, formula) in products.iter().enumerate() {
            add_species_counts(formula, i + reactants.len(), Side::Product, &mut builder)?;
        }
        let matrix = builder.build()?;
        info!(
            "stoichiometric matrix built: {} species, {} elements {:?}",
            matrix.species_count(),
            matrix.element_count(),
            matrix.elements
        );
        Ok(matrix)
    }

    pub fn species_count(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn element_count(&self) -> usize {
        self.matrix.ncols()
    }

    /// signed count of `symbol` in the species, 0 if the element does not occur in the equation
    pub fn count(&self, species_index: usize, symbol: &str) -> i64 {
        match self.elements.iter().position(|el| el == symbol) {
            Some(column) if species_index < self.species_count() => {
                self.matrix[(species_index, column)]
            }
            _ => 0,
        }
    }

    /// transposed matrix (rows are elements, columns are species), the form the null space is taken of
    pub fn element_rows(&self) -> Vec<Vec<i64>> {
        self.matrix
            .transpose()
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    /// exact check that every element is conserved by the coefficients
    pub fn check_conservation(&self, coefficients: &[i64]) -> Result<(), BalanceError> {
        for (column, element) in self.elements.iter().enumerate() {
            let balance: i128 = self
                .matrix
                .column(column)
                .iter()
                .zip(coefficients)
                .map(|(&count, &coeff)| count as i128 * coeff as i128)
                .sum();
            if balance != 0 || coefficients.len() != self.species_count() {
                return Err(BalanceError::ConservationViolated {
                    element: element.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn is_conserved(&self, coefficients: &[i64]) -> bool {
        self.check_conservation(coefficients).is_ok()
    }

    /// Prints the matrix with species names as rows and elements as columns
    pub fn pretty_print(&self, species: &[String]) {
        let mut table = Table::new();
        let mut header = vec![Cell::new("species")];
        header.extend(self.elements.iter().map(|el| Cell::new(el)));
        table.add_row(Row::new(header));
        for i in 0..self.species_count() {
            let name = species.get(i).map(|s| s.as_str()).unwrap_or("?");
            let mut cells = vec![Cell::new(name)];
            cells.extend(
                self.matrix
                    .row(i)
                    .iter()
                    .map(|count| Cell::new(&count.to_string())),
            );
            table.add_row(Row::new(cells));
        }
        table.printstd();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_count_discovery_order() {
        let mut builder = MatrixBuilder::new();
        builder.add_count("O", 0, 2, Side::Reactant).unwrap();
        builder.add_count("Na", 1, 1, Side::Reactant).unwrap();
        builder.add_count("O", 2, 1, Side::Product).unwrap();
        builder.add_count("Na", 2, 2, Side::Product).unwrap();
        assert_eq!(builder.elements(), &["O".to_string(), "Na".to_string()]);
        assert_eq!(builder.species_count(), 3);
        let matrix = builder.build().unwrap();
        // rectangular even though Na was discovered after the first row
        assert_eq!(matrix.matrix.shape(), (3, 2));
        assert_eq!(matrix.matrix[(0, 1)], 0);
        assert_eq!(matrix.matrix[(1, 1)], 1);
        assert_eq!(matrix.matrix[(2, 0)], -1);
        assert_eq!(matrix.matrix[(2, 1)], -2);
    }

    #[test]
    fn test_repeated_counts_accumulate() {
        let mut builder = MatrixBuilder::new();
        builder.add_count("H", 0, 6, Side::Reactant).unwrap();
        builder.add_count("H", 0, 1, Side::Reactant).unwrap();
        let matrix = builder.build().unwrap();
        assert_eq!(matrix.count(0, "H"), 7);
    }

    #[test]
    fn test_species_gap_is_rejected() {
        let mut builder = MatrixBuilder::new();
        builder.add_count("H", 0, 2, Side::Reactant).unwrap();
        assert!(builder.add_count("H", 2, 2, Side::Product).is_err());
    }

    #[test]
    fn test_from_species_and_transpose() {
        let matrix =
            StoichiometryMatrix::from_species(&strings(&["H2", "O2"]), &strings(&["H2O"])).unwrap();
        assert_eq!(matrix.elements, strings(&["H", "O"]));
        assert_eq!(matrix.species_count(), 3);
        assert_eq!(matrix.element_count(), 2);
        assert_eq!(
            matrix.element_rows(),
            vec![vec![2, 0, -2], vec![0, 2, -1]]
        );
        assert!(matrix.is_conserved(&[2, 1, 2]));
        assert!(!matrix.is_conserved(&[1, 1, 1]));
        assert_eq!(
            matrix.check_conservation(&[1, 1, 2]),
            Err(BalanceError::ConservationViolated {
                element: "H".to_string()
            })
        );
    }

    #[test]
    fn test_from_species_propagates_parse_errors() {
        let result = StoichiometryMatrix::from_species(&strings(&["H2", "o2"]), &strings(&["H2O"]));
        assert!(matches!(result, Err(BalanceError::ParseError { .. })));
    }
}

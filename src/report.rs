//! # Balance Report
//!
//! Joins a balanced equation with the element reference data: the property rows of every
//! element met in the equation, the molar masses of the species and the mass balance,
//! and the sorted property series handed to plotting.
//!
//! Elements missing from the reference data do not fail the report: their rows are omitted,
//! the symbols are listed in `missing_symbols`, and the molar masses are not computed.

use crate::Balancer::equation::BalancedEquation;
use crate::Balancer::formula_parser::parse_formula;
use crate::Elements::element_properties::{ElementProperties, Property};
use crate::Elements::reference_data::ReferenceData;
use log::{info, warn};
use prettytable::{Table, row};

#[derive(Debug, Clone)]
pub struct BalanceReport {
    pub equation: BalancedEquation,
    /// rows of the known elements, in order of discovery
    pub properties: Vec<ElementProperties>,
    pub missing_symbols: Vec<String>,
    /// g/mol of every species, reactants then products; None if an element is unknown
    pub molar_masses: Option<Vec<f64>>,
}

pub fn build_report(equation: BalancedEquation, data: &ReferenceData) -> BalanceReport {
    let properties: Vec<ElementProperties> = data
        .properties_for(&equation.elements)
        .into_iter()
        .cloned()
        .collect();
    let missing_symbols = data.missing_symbols(&equation.elements);
    let molar_masses = if missing_symbols.is_empty() {
        species_molar_masses(&equation, data)
    } else {
        warn!(
            "molar masses are not computed, unknown elements: {}",
            missing_symbols.join(", ")
        );
        None
    };
    info!("report for {} ready", equation);
    BalanceReport {
        equation,
        properties,
        missing_symbols,
        molar_masses,
    }
}

fn species_molar_masses(equation: &BalancedEquation, data: &ReferenceData) -> Option<Vec<f64>> {
    let mut masses = Vec::new();
    for species in equation.species() {
        let mass = parse_formula(&species)
            .map_err(|e| e.to_string())
            .and_then(|composition| data.molar_mass(&composition).map_err(|e| e.to_string()));
        match mass {
            Ok(mass) => masses.push(mass),
            Err(e) => {
                warn!("molar mass of '{}' is not computed: {}", species, e);
                return None;
            }
        }
    }
    Some(masses)
}

impl BalanceReport {
    /// total mass of the reactants, sum of coefficient * molar mass
    pub fn reactant_mass(&self) -> Option<f64> {
        let masses = self.molar_masses.as_ref()?;
        let coefficients = self.equation.reactant_coefficients();
        Some(
            masses[..coefficients.len()]
                .iter()
                .zip(coefficients)
                .map(|(m, &c)| m * c as f64)
                .sum(),
        )
    }

    pub fn product_mass(&self) -> Option<f64> {
        let masses = self.molar_masses.as_ref()?;
        let coefficients = self.equation.product_coefficients();
        Some(
            masses[self.equation.reactants.len()..]
                .iter()
                .zip(coefficients)
                .map(|(m, &c)| m * c as f64)
                .sum(),
        )
    }

    /// (symbol, value) pairs ascending by value for each plotted property with at least one value
    pub fn property_series(&self, data: &ReferenceData) -> Vec<(Property, Vec<(String, f64)>)> {
        Property::ALL
            .iter()
            .map(|&property| (property, data.property_series(&self.equation.elements, property)))
            .filter(|(_, series)| !series.is_empty())
            .collect()
    }

    pub fn pretty_print(&self, data: &ReferenceData) {
        self.equation.pretty_print();
        if let Some(masses) = &self.molar_masses {
            println!("__________molar masses, g/mol__________");
            let mut table = Table::new();
            table.add_row(row!["species", "molar mass", "coefficient", "mass"]);
            for ((species, mass), coefficient) in self
                .equation
                .species()
                .iter()
                .zip(masses)
                .zip(&self.equation.coefficients)
            {
                table.add_row(row![
                    species,
                    format!("{:.4}", mass),
                    coefficient,
                    format!("{:.4}", mass * *coefficient as f64)
                ]);
            }
            table.printstd();
            if let (Some(left), Some(right)) = (self.reactant_mass(), self.product_mass()) {
                println!("reactants: {:.4} g, products: {:.4} g", left, right);
            }
        }
        let known: Vec<String> = self.properties.iter().map(|el| el.symbol.clone()).collect();
        data.pretty_print_properties(&known);
        if !self.missing_symbols.is_empty() {
            println!(
                "no reference data for: {}",
                self.missing_symbols.join(", ")
            );
        }
        for (property, series) in self.property_series(data) {
            let line: Vec<String> = series
                .iter()
                .map(|(symbol, value)| format!("{} {}", symbol, value))
                .collect();
            println!("{}: {}", property.label(), line.join(", "));
        }
    }
}

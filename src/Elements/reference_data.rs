//! # Element Reference Data
//!
//! ## Purpose
//! Read-only store of element properties, keyed by symbol. It is loaded once, before any
//! equation is balanced, and never changes afterwards. The balancer only looks up the
//! symbols it met while parsing.
//!
//! ## Key Features
//! - **Lookup**: symbol -> row; an unknown symbol is `SymbolNotFound`, a non-fatal error
//! - **Table rows**: properties of the requested symbols, unknown symbols are skipped
//! - **Plot series**: (symbol, value) pairs of one property, sorted by value
//! - **Molar mass**: from an element composition and the atomic masses
//! - **Process-wide instance**: `init_reference_data` / `reference_data`, backed by `OnceLock`

use crate::Elements::element_properties::{ElementProperties, Property, TABLE_COLUMNS};
use crate::Utils::load_from_file::{LoadData, validate_elements};
use log::{info, warn};
use prettytable::{Cell, Row, Table};
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceDataError {
    /// fatal at startup: no request is served without the dataset
    #[error("reference data unavailable: {0}")]
    ReferenceDataUnavailable(String),
    /// non-fatal: the row of the element is omitted
    #[error("element '{0}' not found in reference data")]
    SymbolNotFound(String),
}

#[derive(Debug, Clone)]
pub struct ReferenceData {
    elements: Vec<ElementProperties>,
    index: HashMap<String, usize>,
}

impl ReferenceData {
    /// Builds the store from rows already in memory. Rows must be non-empty with unique symbols
    pub fn from_elements(elements: Vec<ElementProperties>) -> Result<Self, ReferenceDataError> {
        validate_elements(&elements).map_err(ReferenceDataError::ReferenceDataUnavailable)?;
        let index = elements
            .iter()
            .enumerate()
            .map(|(i, el)| (el.symbol.clone(), i))
            .collect();
        Ok(Self { elements, index })
    }

    /// Loads the dataset from a JSON file
    pub fn load(file_name: &str) -> Result<Self, ReferenceDataError> {
        let elements = LoadData::new(file_name.to_string())
            .load_elements()
            .map_err(ReferenceDataError::ReferenceDataUnavailable)?;
        let data = Self::from_elements(elements)?;
        info!("reference data: {} elements from '{}'", data.len(), file_name);
        Ok(data)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn lookup(&self, symbol: &str) -> Result<&ElementProperties, ReferenceDataError> {
        self.index
            .get(symbol)
            .map(|&i| &self.elements[i])
            .ok_or_else(|| ReferenceDataError::SymbolNotFound(symbol.to_string()))
    }

    /// Rows of the given symbols in the given order. Unknown symbols are logged and skipped
    pub fn properties_for(&self, symbols: &[String]) -> Vec<&ElementProperties> {
        symbols
            .iter()
            .filter_map(|symbol| match self.lookup(symbol) {
                Ok(properties) => Some(properties),
                Err(e) => {
                    warn!("{}, row omitted", e);
                    None
                }
            })
            .collect()
    }

    pub fn missing_symbols(&self, symbols: &[String]) -> Vec<String> {
        symbols
            .iter()
            .filter(|symbol| !self.index.contains_key(symbol.as_str()))
            .cloned()
            .collect()
    }

    /// (symbol, value) pairs of one property for the given symbols, ascending by value.
    /// Unknown symbols and missing values are left out
    pub fn property_series(&self, symbols: &[String], property: Property) -> Vec<(String, f64)> {
        let mut series: Vec<(String, f64)> = self
            .properties_for(symbols)
            .into_iter()
            .filter_map(|el| el.property(property).map(|value| (el.symbol.clone(), value)))
            .collect();
        series.sort_by(|a, b| a.1.total_cmp(&b.1));
        series
    }

    /// molar mass (g/mol) of a composition {element: count}
    pub fn molar_mass(&self, composition: &BTreeMap<String, i64>) -> Result<f64, ReferenceDataError> {
        composition
            .iter()
            .map(|(symbol, &count)| Ok(self.lookup(symbol)?.atomic_mass * count as f64))
            .sum()
    }

    /// Prints the properties table (all columns except the colour) for the given symbols
    pub fn pretty_print_properties(&self, symbols: &[String]) {
        println!("__________properties of elements__________");
        let mut table = Table::new();
        table.add_row(Row::new(
            TABLE_COLUMNS.iter().map(|column| Cell::new(column)).collect(),
        ));
        for properties in self.properties_for(symbols) {
            table.add_row(Row::new(
                properties
                    .table_row()
                    .iter()
                    .map(|value| Cell::new(value))
                    .collect(),
            ));
        }
        table.printstd();
    }
}

/// process-wide dataset, set once at startup
static REFERENCE_DATA: OnceLock<ReferenceData> = OnceLock::new();

/// Loads the dataset into the process-wide slot. Later calls return the data loaded first
pub fn init_reference_data(file_name: &str) -> Result<&'static ReferenceData, ReferenceDataError> {
    if let Some(data) = REFERENCE_DATA.get() {
        return Ok(data);
    }
    let data = ReferenceData::load(file_name)?;
    Ok(REFERENCE_DATA.get_or_init(|| data))
}

pub fn reference_data() -> Option<&'static ReferenceData> {
    REFERENCE_DATA.get()
}

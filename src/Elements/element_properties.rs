use serde::{Deserialize, Serialize};

/// One row of the element reference dataset. Field names follow the PubChem periodic table columns.
/// Only the atomic number, symbol, name and mass are mandatory, any other property may be missing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElementProperties {
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
    pub atomic_mass: f64,
    /// colour for rendering, never shown in tables or plots
    #[serde(rename = "CPKHexColor", default)]
    pub cpk_hex_color: Option<String>,
    #[serde(default)]
    pub electronegativity: Option<f64>,
    /// pm
    #[serde(default)]
    pub atomic_radius: Option<f64>,
    /// eV
    #[serde(default)]
    pub ionization_energy: Option<f64>,
    /// eV
    #[serde(default)]
    pub electron_affinity: Option<f64>,
    /// K
    #[serde(default)]
    pub melting_point: Option<f64>,
    /// K
    #[serde(default)]
    pub boiling_point: Option<f64>,
    /// g/cm3
    #[serde(default)]
    pub density: Option<f64>,
    #[serde(default)]
    pub standard_state: Option<String>,
    #[serde(default)]
    pub group_block: Option<String>,
}

/// columns of the properties table: every column of the dataset except the colour
pub const TABLE_COLUMNS: [&str; 13] = [
    "AtomicNumber",
    "Symbol",
    "Name",
    "AtomicMass",
    "Electronegativity",
    "AtomicRadius",
    "IonizationEnergy",
    "ElectronAffinity",
    "MeltingPoint",
    "BoilingPoint",
    "Density",
    "StandardState",
    "GroupBlock",
];

fn optional<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

impl ElementProperties {
    /// values in the order of TABLE_COLUMNS, missing values are empty strings
    pub fn table_row(&self) -> Vec<String> {
        vec![
            self.atomic_number.to_string(),
            self.symbol.clone(),
            self.name.clone(),
            self.atomic_mass.to_string(),
            optional(&self.electronegativity),
            optional(&self.atomic_radius),
            optional(&self.ionization_energy),
            optional(&self.electron_affinity),
            optional(&self.melting_point),
            optional(&self.boiling_point),
            optional(&self.density),
            optional(&self.standard_state),
            optional(&self.group_block),
        ]
    }

    pub fn property(&self, property: Property) -> Option<f64> {
        match property {
            Property::AtomicNumber => Some(self.atomic_number as f64),
            Property::AtomicMass => Some(self.atomic_mass),
            Property::Electronegativity => self.electronegativity,
            Property::AtomicRadius => self.atomic_radius,
            Property::IonizationEnergy => self.ionization_energy,
            Property::ElectronAffinity => self.electron_affinity,
            Property::MeltingPoint => self.melting_point,
            Property::BoilingPoint => self.boiling_point,
            Property::Density => self.density,
        }
    }
}

/// numeric properties offered to the plotting front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    AtomicNumber,
    AtomicMass,
    Electronegativity,
    AtomicRadius,
    IonizationEnergy,
    ElectronAffinity,
    MeltingPoint,
    BoilingPoint,
    Density,
}

impl Property {
    pub const ALL: [Property; 9] = [
        Property::AtomicNumber,
        Property::AtomicMass,
        Property::Electronegativity,
        Property::AtomicRadius,
        Property::IonizationEnergy,
        Property::ElectronAffinity,
        Property::MeltingPoint,
        Property::BoilingPoint,
        Property::Density,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Property::AtomicNumber => "Atomic Number",
            Property::AtomicMass => "Atomic Mass",
            Property::Electronegativity => "Electronegativity",
            Property::AtomicRadius => "Atomic Radius",
            Property::IonizationEnergy => "Ionization Energy",
            Property::ElectronAffinity => "Electron Affinity",
            Property::MeltingPoint => "Melting Point",
            Property::BoilingPoint => "Boiling Point",
            Property::Density => "Density",
        }
    }
}

/// one row of the element dataset and the numeric properties offered for plotting
pub mod element_properties;
/// read-only store of element rows: lookup by symbol, property series, molar masses
pub mod reference_data;

/// loading and validation of the element reference dataset (JSON array of PubChem-style rows)
pub mod load_from_file;

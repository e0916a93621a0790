/// worked balancing tasks, numbered, for the examples menu
pub mod balance_examples;

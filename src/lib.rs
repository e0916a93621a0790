#[allow(non_snake_case)]
pub mod Balancer;
#[allow(non_snake_case)]
pub mod Elements;
#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Utils;
pub mod cli;
pub mod library_manager;
pub mod report;

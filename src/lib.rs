pub mod check;
pub mod config;
pub mod graph;
pub mod rng;
pub mod testcase;

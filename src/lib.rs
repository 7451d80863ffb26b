pub mod affiliate;
pub mod catalog;
pub mod config;
pub mod fetcher;
pub mod model;
pub mod normalizer;
pub mod parser;
pub mod utils;

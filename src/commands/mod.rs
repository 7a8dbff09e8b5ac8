pub mod config;
pub mod glossary;
pub mod shots;

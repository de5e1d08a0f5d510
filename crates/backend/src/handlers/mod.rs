pub mod a001_configuration;
pub mod u002_production_report;

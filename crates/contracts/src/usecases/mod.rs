pub mod u001_save_configuration;
pub mod u002_production_report;

pub mod u002_production_report;

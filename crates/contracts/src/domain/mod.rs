pub mod a001_configuration_document;
pub mod a002_configuration_parameter;
pub mod common;

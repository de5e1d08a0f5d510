pub mod a001_configuration_document;

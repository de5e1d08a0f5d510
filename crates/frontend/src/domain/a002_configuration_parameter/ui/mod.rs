pub mod row;

pub use row::ParameterRow;

//! Configuration parameters: catalog build, row projection, name filter
//! and edit collection.

pub mod aggregate;
pub mod row;
pub mod values;

pub use aggregate::{build_catalog, Catalog, ParamKind, ParameterDefinition, RawParam, SelectOption};
pub use row::{filter, render, ControlSpec, DisplayRow};
pub use values::{collect, ControlValue, ControlValues, EditResult};

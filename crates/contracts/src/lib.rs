//! Types and UI-free logic shared by the Hednova backend and frontend

pub mod domain;
pub mod shared;
pub mod usecases;

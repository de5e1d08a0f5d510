pub mod button;
pub mod checkbox;
pub mod input;
pub mod select;

pub use button::Button;
pub use checkbox::Switch;
pub use input::{Input, NumberInput};
pub use select::Select;

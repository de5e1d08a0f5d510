pub mod menu;
pub mod text_fold;
pub mod toast;

pub mod page_header;
pub mod search_box;
pub mod toast;
pub mod ui;

pub mod search_select;
pub mod ui;

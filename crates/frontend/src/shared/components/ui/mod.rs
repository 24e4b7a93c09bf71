pub mod input;
pub mod select;

pub use input::TextField;
pub use select::OptionSelect;

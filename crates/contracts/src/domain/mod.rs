pub mod a001_user;
pub mod a002_house;
pub mod common;

pub mod house_status;
pub mod user_status;

pub use house_status::HouseStatus;
pub use user_status::UserStatus;

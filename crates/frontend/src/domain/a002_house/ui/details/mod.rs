mod model;
mod view;
mod view_model;

pub use view::HouseDetails;
pub use view_model::HouseDetailsVm;

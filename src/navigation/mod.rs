pub mod route;
pub mod smooth;
pub mod transition;

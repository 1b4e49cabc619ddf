pub mod blog;
pub mod post;
pub mod source;

pub mod command;
pub mod state;

pub mod boundary;
pub mod shell;
pub mod theme;

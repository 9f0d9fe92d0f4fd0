pub mod cli;
pub mod constants;
pub mod settings;

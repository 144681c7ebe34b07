pub mod cli;
pub mod commands;
pub mod promoter;
pub mod utils;
pub mod writers;

pub mod args;
pub mod cli_controller;

//! Integration tests for the rendstress payload generator

mod config_integration;
mod generate_cli;
mod orchestrator;
mod test_utils;

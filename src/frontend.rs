pub mod cli;
pub mod config;
pub mod demos;
pub mod plan;
pub mod runner;


pub const OUTPUT_FILE_SUFFIX: &str = "mission_tasks.json";

pub mod changelog;
pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod logging;
pub mod output;
pub mod render;
pub mod run;

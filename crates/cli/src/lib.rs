//! Infrastructure shared by Kollect command-line programs.

pub mod config;

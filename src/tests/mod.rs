#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

pub mod config_tests;
pub mod integration_tests;
pub mod scheduler_tests;
pub mod shapes_tests;

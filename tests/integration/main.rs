//! Integration tests for gitmaster

mod helpers;

mod cli_test;
mod clipboard_test;
mod config_test;
mod lessons_test;
mod player_test;

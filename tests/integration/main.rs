//! Integration tests for runnerdeck.

mod helpers;

mod animator_test;
mod cli_test;
mod config_test;
mod timeline_test;

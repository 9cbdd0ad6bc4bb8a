mod config_tests;
mod factorial_tests;

mod event_tests;
mod utils;

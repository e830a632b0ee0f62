mod common;
mod evaluation_parser_tests;
mod probe_tests;
mod session_store_tests;

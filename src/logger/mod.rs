pub mod logging;
pub mod summary_printer;

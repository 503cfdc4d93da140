pub mod args;
pub mod commands;
pub mod console;
pub mod trace_init;

pub mod config_ops;
pub mod replace_ops;

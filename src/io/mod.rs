pub mod config_io;

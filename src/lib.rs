pub mod component;
pub mod config;
pub mod init;
pub mod layout;
pub mod signal;
pub mod tools;

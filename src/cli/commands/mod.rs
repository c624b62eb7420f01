pub mod archive;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod new;
pub mod reset;
pub mod set;
pub mod show;

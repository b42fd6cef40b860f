pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod holiday;
pub mod init;
pub mod list;
pub mod log;
pub mod report;
pub mod session;

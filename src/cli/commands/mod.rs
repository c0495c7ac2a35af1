pub mod backup;
pub mod dept;
pub mod export;
pub mod init;
pub mod log;
pub mod status;
pub mod toggle;
pub mod watch;
pub mod week;

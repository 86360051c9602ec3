pub mod backup;
pub mod call;
pub mod calls;
pub mod config;
pub mod db;
pub mod export;
pub mod industry;
pub mod ingest;
pub mod init;
pub mod list;
pub mod metrics;
pub mod save;
pub mod status;

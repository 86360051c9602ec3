pub mod call_log;
pub mod client;
pub mod company;
pub mod overrides;
pub mod status;

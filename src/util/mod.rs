pub mod error;
pub mod logger;
pub mod pushover;
pub mod storage;

pub mod config;
pub mod logging;

pub mod dataset;
pub mod fetch;
pub mod names;
pub mod pipeline;
pub mod planner;
pub mod renew;
pub mod resolver;
pub mod storage;
pub mod transcode;
pub mod upstream;
pub mod worker;

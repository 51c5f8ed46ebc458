pub mod config;
pub mod logging;

pub mod http;
pub mod location;
pub mod mutation;
pub mod page;
pub mod search;
pub mod table;

pub mod ad;
pub mod config;

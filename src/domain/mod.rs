pub mod ad;
pub mod category;
pub mod types;

//----------------------------------------
// dataset mod
//----------------------------------------
pub mod error;
pub mod histogram;
pub mod load;
pub mod profile;
pub mod registry;
pub mod types;

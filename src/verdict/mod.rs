//----------------------------------------
// verdict mod
//----------------------------------------
pub mod accept_reject;
pub mod types;

pub use accept_reject::evaluate;

//----------------------------------------
// hypothesis mod
//----------------------------------------
pub mod evaluate;
pub mod one_sided;
pub mod two_sided;
pub mod types;

//----------------------------------------
// summary mod
//----------------------------------------
pub mod annotation;
pub mod format;
pub mod screen_reader;
pub mod statements;

pub mod ticker;
pub mod weather;

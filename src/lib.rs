pub mod error;
pub mod heap;
pub mod menu;
pub mod source;

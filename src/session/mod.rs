pub mod input;
pub mod mode;
pub mod result;
pub mod target;
pub mod tracker;

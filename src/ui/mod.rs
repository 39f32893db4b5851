pub mod components;
pub mod layout;
pub mod screen;
pub mod theme;

pub mod backdrop;
pub mod content;
pub mod header;
pub mod mobile_menu;
pub mod shape;

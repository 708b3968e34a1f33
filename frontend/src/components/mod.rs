pub mod common;
pub mod icons;
pub mod theme;

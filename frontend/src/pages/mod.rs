pub mod hero;

pub use hero::*;

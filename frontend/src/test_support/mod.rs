#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr {
    pub use crate::prerender::{render_to_string, with_runtime};
}

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    config::RuntimeConfig,
    pages::HomePage,
    state::theme::{provide_theme, Theme},
};

const SCRIPT_FONT_HREF: &str = "https://fonts.googleapis.com/css2?family=Pacifico&display=swap";

#[cfg(target_arch = "wasm32")]
pub fn mount_app(config: RuntimeConfig) {
    mount_to_body(move || app_root(config));
}

/// Document title and the script font stylesheet. Needs a meta context.
#[component]
pub fn AppHead() -> impl IntoView {
    view! {
        <Title text="Kokonut UI"/>
        <Link rel="stylesheet" href=SCRIPT_FONT_HREF/>
    }
}

pub fn app_root(config: RuntimeConfig) -> impl IntoView {
    provide_meta_context();
    provide_theme(Theme::from_config(&config));
    view! {
        <AppHead/>
        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
            </Routes>
        </Router>
    }
}

use crate::config;
use leptos::*;

pub mod components;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::HeroPanel;
pub use utils::HeroCopy;
pub use view_model::{HeroAction, HeroActions};

/// Animated landing hero. Copy falls back to runtime config, then to the
/// Kokonut defaults; button callbacks are optional.
#[component]
pub fn HeroGeometric(
    #[prop(optional, into)] badge: Option<String>,
    #[prop(optional, into)] title1: Option<String>,
    #[prop(optional, into)] title2: Option<String>,
    #[prop(optional, into)] on_sign_in: Option<Callback<()>>,
    #[prop(optional, into)] on_sign_up: Option<Callback<()>>,
    #[prop(optional, into)] on_get_started: Option<Callback<()>>,
    #[prop(optional, into)] on_learn_more: Option<Callback<()>>,
) -> impl IntoView {
    let copy = HeroCopy::resolve(badge, title1, title2, &config::runtime_config());
    let actions = HeroActions {
        sign_in: on_sign_in,
        sign_up: on_sign_up,
        get_started: on_get_started,
        learn_more: on_learn_more,
    };

    view! { <HeroPanel copy=copy actions=actions/> }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <HeroGeometric/> }
}

use crate::components::icons::{MoonIcon, SunIcon};
use crate::state::theme::use_theme;
use crate::theme::Palette;
use crate::utils::classes::cn;
use leptos::*;

#[component]
pub fn ThemeToggle(#[prop(into)] palette: Signal<Palette>) -> impl IntoView {
    let theme_state = use_theme();
    let is_dark = theme_state.is_dark();

    let on_click = move |_| {
        theme_state.toggle();
    };

    view! {
        <button
            type="button"
            class=move || cn(["p-2 rounded-full transition-colors duration-300", palette.get().toggle])
            on:click=on_click
            aria-label="Toggle theme"
        >
            <span class="sr-only">"Toggle theme"</span>
            <Show when=move || is_dark.get() fallback=|| view! { <MoonIcon/> }>
                <SunIcon/>
            </Show>
        </button>
    }
}

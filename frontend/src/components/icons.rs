//! Inline copies of the lucide icons used in the header.

use leptos::*;

#[component]
fn IconFrame(name: &'static str, size: u32, children: Children) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class=format!("lucide lucide-{}", name)
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {children()}
        </svg>
    }
}

#[component]
pub fn SunIcon(#[prop(default = 18)] size: u32) -> impl IntoView {
    view! {
        <IconFrame name="sun" size=size>
            <circle cx="12" cy="12" r="4"/>
            <path d="M12 2v2"/>
            <path d="M12 20v2"/>
            <path d="m4.93 4.93 1.41 1.41"/>
            <path d="m17.66 17.66 1.41 1.41"/>
            <path d="M2 12h2"/>
            <path d="M20 12h2"/>
            <path d="m6.34 17.66-1.41 1.41"/>
            <path d="m19.07 4.93-1.41 1.41"/>
        </IconFrame>
    }
}

#[component]
pub fn MoonIcon(#[prop(default = 18)] size: u32) -> impl IntoView {
    view! {
        <IconFrame name="moon" size=size>
            <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>
        </IconFrame>
    }
}

#[component]
pub fn MenuIcon(#[prop(default = 24)] size: u32) -> impl IntoView {
    view! {
        <IconFrame name="menu" size=size>
            <line x1="4" x2="20" y1="12" y2="12"/>
            <line x1="4" x2="20" y1="6" y2="6"/>
            <line x1="4" x2="20" y1="18" y2="18"/>
        </IconFrame>
    }
}

#[component]
pub fn CloseIcon(#[prop(default = 24)] size: u32) -> impl IntoView {
    view! {
        <IconFrame name="x" size=size>
            <path d="M18 6 6 18"/>
            <path d="m6 6 12 12"/>
        </IconFrame>
    }
}

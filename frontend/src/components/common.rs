use crate::utils::classes::cn;
use leptos::*;

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Secondary,
    Outline,
}

impl ButtonVariant {
    /// Shape and elevation only. Text, border and hover colours come from the
    /// caller's class so the two never compete in one attribute.
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "shadow",
            ButtonVariant::Secondary => "bg-secondary shadow-sm hover:bg-secondary/80",
            ButtonVariant::Outline => "border bg-transparent shadow-sm",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
}

impl ButtonSize {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonSize::Default => "h-9 px-4 py-2",
            ButtonSize::Sm => "h-8 rounded-md px-3 text-xs",
            ButtonSize::Lg => "h-10 rounded-md px-8",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional, into)] variant: MaybeSignal<ButtonVariant>,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional, into)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || cn([BUTTON_BASE, variant.get().classes(), size.classes(), class.get().as_str()])
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

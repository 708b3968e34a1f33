use crate::components::{
    common::{Button, ButtonSize},
    icons::{CloseIcon, MenuIcon},
    theme::ThemeToggle,
};
use crate::pages::hero::{
    utils::{BRAND_NAME, NAV_ITEMS, SCRIPT_FONT},
    view_model::{HeroAction, HeroActions, HeroViewModel},
};
use crate::utils::classes::cn;
use leptos::*;

#[component]
pub fn HeroHeader(vm: HeroViewModel, actions: HeroActions) -> impl IntoView {
    let palette = vm.palette;
    let menu = vm.menu;
    let menu_open = menu.is_open();

    let secondary_variant = Signal::derive(move || palette.get().secondary_variant);
    let sign_in_class = Signal::derive(move || {
        cn(["transition-colors duration-300", palette.get().secondary_action])
    });
    let sign_up_class = Signal::derive(move || {
        cn(["transition-colors duration-300", palette.get().primary_action])
    });

    view! {
        <div class=move || cn(["fixed top-0 left-0 right-0 z-50 py-4 px-6 transition-colors duration-300", palette.get().nav_bar])>
            <div class="container mx-auto flex items-center justify-between">
                <div class="flex items-center">
                    <div class=move || cn(["w-10 h-10 rounded-full flex items-center justify-center mr-2", palette.get().logo_mark])>
                        <span class=move || cn([SCRIPT_FONT, "text-xl", palette.get().logo_text])>"K"</span>
                    </div>
                    <span class=move || cn(["font-semibold text-lg", palette.get().logo_text])>{BRAND_NAME}</span>
                </div>

                <nav class="hidden md:flex items-center space-x-8">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href
                                    data-nav="desktop"
                                    class=move || cn(["text-sm font-medium transition-colors duration-200", palette.get().nav_link])
                                >
                                    {item.name}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="hidden md:flex items-center space-x-3">
                    <Button
                        variant=secondary_variant
                        size=ButtonSize::Sm
                        class=sign_in_class
                        on_click=actions.on_click(HeroAction::SignIn)
                    >
                        "Sign In"
                    </Button>
                    <Button
                        size=ButtonSize::Sm
                        class=sign_up_class
                        on_click=actions.on_click(HeroAction::SignUp)
                    >
                        "Sign Up"
                    </Button>
                    <ThemeToggle palette=palette/>
                </div>

                <div class="flex md:hidden items-center space-x-3">
                    <ThemeToggle palette=palette/>
                    <button
                        type="button"
                        class=move || cn(["p-2 rounded-md transition-colors duration-300", palette.get().menu_button])
                        aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                        aria-expanded=move || menu_open.get().to_string()
                        aria-controls="mobile-menu"
                        on:click=move |_| menu.toggle()
                    >
                        <Show when=move || menu_open.get() fallback=|| view! { <MenuIcon/> }>
                            <CloseIcon/>
                        </Show>
                    </button>
                </div>
            </div>
        </div>
    }
}

use crate::components::common::Button;
use crate::pages::hero::{
    utils::NAV_ITEMS,
    view_model::{HeroAction, HeroActions, HeroViewModel},
};
use crate::utils::classes::cn;
use leptos::*;

/// Full-screen nav overlay for narrow layouts. Visibility is driven only by
/// the menu flag and the viewport.
#[component]
pub fn MobileMenu(vm: HeroViewModel, actions: HeroActions) -> impl IntoView {
    let palette = vm.palette;

    view! {
        <Show when=move || vm.show_mobile_menu()>
            <div
                id="mobile-menu"
                class=move || cn(["fixed inset-0 z-40 pt-20 px-4 transition-colors duration-300 md:hidden", palette.get().overlay])
            >
                <div class="flex flex-col space-y-4">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=item.href
                                    data-nav="mobile"
                                    class=move || cn(["py-2 text-lg font-medium transition-colors duration-200", palette.get().nav_link])
                                >
                                    {item.name}
                                </a>
                            }
                        })
                        .collect_view()}
                    <div class="flex flex-col space-y-3 pt-4" data-menu-actions="">
                        <Button
                            variant=Signal::derive(move || palette.get().secondary_variant)
                            class=Signal::derive(move || cn(["w-full transition-colors duration-300", palette.get().secondary_action]))
                            on_click=actions.on_click(HeroAction::SignIn)
                        >
                            "Sign In"
                        </Button>
                        <Button
                            class=Signal::derive(move || cn(["w-full transition-colors duration-300", palette.get().primary_action]))
                            on_click=actions.on_click(HeroAction::SignUp)
                        >
                            "Sign Up"
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

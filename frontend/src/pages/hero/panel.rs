use crate::pages::hero::{
    components::{
        backdrop::{HeroBackdrop, HeroVignette},
        content::HeroContent,
        header::HeroHeader,
        mobile_menu::MobileMenu,
    },
    utils::HeroCopy,
    view_model::{use_hero_view_model, HeroActions},
};
use crate::utils::classes::cn;
use leptos::*;

#[component]
pub fn HeroPanel(copy: HeroCopy, actions: HeroActions) -> impl IntoView {
    let vm = use_hero_view_model();
    let palette = vm.palette;
    let elapsed = vm.clock.elapsed();
    let theme = vm.theme.current();

    view! {
        <div
            class=move || cn(["relative min-h-screen w-full flex flex-col items-center justify-center overflow-hidden transition-colors duration-300", palette.get().page])
            data-theme=move || theme.get().name()
        >
            <HeroHeader vm=vm actions=actions/>
            <MobileMenu vm=vm actions=actions/>
            <HeroBackdrop palette=palette elapsed=elapsed/>
            <HeroContent copy=copy palette=palette elapsed=elapsed actions=actions/>
            <HeroVignette palette=palette/>
        </div>
    }
}

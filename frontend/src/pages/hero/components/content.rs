use crate::components::common::{Button, ButtonSize};
use crate::pages::hero::{
    utils::{fade_up_frame, HeroCopy, BADGE_ICON_URL, DEFAULT_BADGE, SCRIPT_FONT, SUBTEXT},
    view_model::{HeroAction, HeroActions},
};
use crate::theme::Palette;
use crate::utils::classes::cn;
use leptos::*;

#[component]
pub fn HeroContent(
    copy: HeroCopy,
    #[prop(into)] palette: Signal<Palette>,
    #[prop(into)] elapsed: Signal<f64>,
    actions: HeroActions,
) -> impl IntoView {
    let HeroCopy {
        badge,
        title1,
        title2,
    } = copy;
    // Groups enter in order: badge, headline, subtext, CTAs.
    let fade_up = move |index: usize| move || fade_up_frame(index, elapsed.get()).to_style();

    view! {
        <div class="relative z-10 container mx-auto px-4 md:px-6 mt-20">
            <div class="max-w-3xl mx-auto text-center">
                <div
                    style=fade_up(0)
                    class=move || cn(["inline-flex items-center gap-2 px-3 py-1 rounded-full border mb-8 md:mb-12 transition-colors duration-300", palette.get().badge])
                >
                    <img src=BADGE_ICON_URL alt=DEFAULT_BADGE width="20" height="20"/>
                    <span class=move || cn(["text-sm tracking-wide transition-colors duration-300", palette.get().badge_text])>
                        {badge}
                    </span>
                </div>

                <div style=fade_up(1)>
                    <h1 class="text-4xl sm:text-6xl md:text-8xl font-bold mb-6 md:mb-8 tracking-tight">
                        <span class=move || cn(["bg-clip-text text-transparent transition-colors duration-300", palette.get().title_primary])>
                            {title1}
                        </span>
                        <br/>
                        <span class=move || cn(["bg-clip-text text-transparent transition-colors duration-300", palette.get().title_accent, SCRIPT_FONT])>
                            {title2}
                        </span>
                    </h1>
                </div>

                <div style=fade_up(2)>
                    <p class=move || cn(["text-base sm:text-lg md:text-xl mb-8 leading-relaxed font-light tracking-wide max-w-xl mx-auto px-4 transition-colors duration-300", palette.get().subtext])>
                        {SUBTEXT}
                    </p>
                </div>

                <div style=fade_up(3)>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <Button
                            size=ButtonSize::Lg
                            class=Signal::derive(move || cn(["transition-colors duration-300", palette.get().primary_action]))
                            on_click=actions.on_click(HeroAction::GetStarted)
                        >
                            "Get Started"
                        </Button>
                        <Button
                            variant=Signal::derive(move || palette.get().secondary_variant)
                            size=ButtonSize::Lg
                            class=Signal::derive(move || cn(["transition-colors duration-300", palette.get().secondary_action]))
                            on_click=actions.on_click(HeroAction::LearnMore)
                        >
                            "Learn More"
                        </Button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use crate::theme::{DARK, LIGHT};

    fn copy(badge: &str, title1: &str, title2: &str) -> HeroCopy {
        HeroCopy {
            badge: badge.into(),
            title1: title1.into(),
            title2: title2.into(),
        }
    }

    #[test]
    fn content_renders_copy_and_ctas() {
        let html = render_to_string(move || {
            view! {
                <HeroContent
                    copy=HeroCopy::default()
                    palette=Signal::derive(|| LIGHT)
                    elapsed=Signal::derive(|| 0.0)
                    actions=HeroActions::default()
                />
            }
        });
        assert!(html.contains("Kokonut UI"));
        assert!(html.contains("Elevate Your"));
        assert!(html.contains("Digital Vision"));
        assert!(html.contains(SUBTEXT));
        assert!(html.contains("Get Started"));
        assert!(html.contains("Learn More"));
        assert!(html.contains("https://kokonutui.com/logo.svg"));
        assert_eq!(html.matches("opacity: 0; transform: translateY(30px)").count(), 4);
    }

    #[test]
    fn content_stagger_reveals_groups_in_order() {
        let html = render_to_string(move || {
            view! {
                <HeroContent
                    copy=copy("Badge C", "Title A", "Title B")
                    palette=Signal::derive(|| DARK)
                    elapsed=Signal::derive(|| 1.6)
                    actions=HeroActions::default()
                />
            }
        });
        for text in ["Badge C", "Title A", "Title B"] {
            assert!(html.contains(text), "{text}");
        }
        assert!(!html.contains("Elevate Your"));
        assert_eq!(html.matches("opacity: 1; transform: translateY(0px)").count(), 1);
        assert!(html.contains("text-white/40"));
        assert!(html.contains("from-purple-300 via-white/90 to-pink-300"));
    }
}

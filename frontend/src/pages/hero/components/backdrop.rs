use super::shape::ElegantShape;
use crate::pages::hero::utils::SHAPES;
use crate::theme::Palette;
use crate::utils::classes::cn;
use leptos::*;

#[component]
pub fn HeroBackdrop(
    #[prop(into)] palette: Signal<Palette>,
    #[prop(into)] elapsed: Signal<f64>,
) -> impl IntoView {
    view! {
        <div class=move || cn(["absolute inset-0 blur-3xl transition-colors duration-300", palette.get().glow])></div>
        <div class="absolute inset-0 overflow-hidden">
            {SHAPES
                .into_iter()
                .map(|spec| view! { <ElegantShape spec=spec palette=palette elapsed=elapsed/> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn HeroVignette(#[prop(into)] palette: Signal<Palette>) -> impl IntoView {
    view! {
        <div class=move || cn(["absolute inset-0 pointer-events-none transition-colors duration-300", palette.get().vignette])></div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use crate::theme::LIGHT;

    #[test]
    fn backdrop_renders_five_shapes() {
        let html = render_to_string(move || {
            view! { <HeroBackdrop palette=Signal::derive(|| LIGHT) elapsed=Signal::derive(|| 0.0)/> }
        });
        assert_eq!(html.matches("data-shape=").count(), 5);
        for accent in ["purple", "pink", "blue", "teal", "amber"] {
            assert!(html.contains(&format!("data-shape=\"{accent}\"")), "{accent}");
        }
        assert!(html.contains("from-purple-200/[0.3]"));
    }
}

use crate::motion::css_number;
use crate::pages::hero::utils::{float_offset, ShapeSpec};
use crate::theme::Palette;
use crate::utils::classes::cn;
use leptos::*;

#[component]
pub fn ElegantShape(
    spec: ShapeSpec,
    #[prop(into)] palette: Signal<Palette>,
    #[prop(into)] elapsed: Signal<f64>,
) -> impl IntoView {
    let entrance_style = move || spec.entrance_frame(elapsed.get()).to_style();
    let float_style = move || {
        format!(
            "width: {}px; height: {}px; transform: translateY({}px)",
            spec.width,
            spec.height,
            css_number(float_offset(elapsed.get()))
        )
    };
    let surface_class = move || {
        let palette = palette.get();
        cn([
            "absolute inset-0 rounded-full",
            "bg-gradient-to-r to-transparent",
            palette.accent_gradient(spec.accent),
            palette.shape_surface,
            palette.shape_overlay,
        ])
    };

    view! {
        <div class=cn(["absolute", spec.position]) style=entrance_style data-shape=spec.accent.name()>
            <div class="relative" style=float_style>
                <div class=surface_class></div>
            </div>
        </div>
    }
}

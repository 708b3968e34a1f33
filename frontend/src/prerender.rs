use crate::router::AppHead;
use leptos::*;
use leptos_meta::{provide_meta_context, use_head};

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = leptos::create_runtime();
    let result = f();
    runtime.dispose();
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Static HTML document of the hero at its first animation frame, with the
/// page title and font link in `<head>`.
pub fn prerender_home() -> String {
    leptos_reactive::suppress_resource_load(true);
    let document = with_runtime(|| {
        provide_meta_context();
        let body = view! {
            <AppHead/>
            <crate::pages::HomePage/>
        }
        .into_view()
        .render_to_string()
        .to_string();
        let head = use_head().dehydrate();
        format!(r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"/>{head}</head><body>{body}</body></html>"#)
    });
    leptos_reactive::suppress_resource_load(false);
    document
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prerender_contains_first_frame() {
        let html = prerender_home();
        assert!(html.contains("Elevate Your"));
        assert!(html.contains("opacity: 0; transform: translateY(-150px)"));
    }

    #[test]
    fn prerender_fills_document_head() {
        let html = prerender_home();
        let head_end = html.find("</head>").unwrap();
        let head = &html[..head_end];
        assert!(head.contains("<title>Kokonut UI</title>"), "{head}");
        assert!(head.contains("family=Pacifico"), "{head}");
        assert!(html[head_end..].contains("data-theme=\"light\""));
    }
}

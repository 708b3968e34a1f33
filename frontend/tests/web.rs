#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use hero_frontend::state::theme::{provide_theme, Theme};
use hero_frontend::state::viewport::{provide_viewport, Viewport};
use hero_frontend::HeroGeometric;
use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn mount_hero(viewport: Viewport) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let host: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    document.body().unwrap().append_child(&host).unwrap();
    mount_to(host.clone(), move || {
        provide_viewport(viewport);
        view! { <HeroGeometric/> }
    });
    host
}

fn click(host: &HtmlElement, selector: &str) {
    host.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("missing {selector}"))
        .unchecked_into::<HtmlElement>()
        .click();
}

fn root(host: &HtmlElement) -> Element {
    host.first_element_child().unwrap()
}

async fn settle() {
    TimeoutFuture::new(0).await;
}

#[wasm_bindgen_test]
async fn theme_toggle_switches_and_restores_background() {
    let host = mount_hero(Viewport::Wide);
    let initial = root(&host).class_name();
    assert!(initial.contains("bg-gray-50"));

    click(&host, "button[aria-label='Toggle theme']");
    settle().await;
    assert!(root(&host).class_name().contains("bg-[#030303]"));
    assert_eq!(root(&host).get_attribute("data-theme").as_deref(), Some("dark"));

    click(&host, "button[aria-label='Toggle theme']");
    settle().await;
    assert_eq!(root(&host).class_name(), initial);
}

#[wasm_bindgen_test]
async fn hamburger_opens_and_close_icon_dismisses_overlay() {
    let host = mount_hero(Viewport::Narrow);
    assert!(host.query_selector("#mobile-menu").unwrap().is_none());

    click(&host, "button[aria-controls='mobile-menu']");
    settle().await;
    let overlay = host.query_selector("#mobile-menu").unwrap().expect("overlay");
    assert_eq!(overlay.query_selector_all("a[data-nav='mobile']").unwrap().length(), 4);
    assert_eq!(overlay.query_selector_all("[data-menu-actions] button").unwrap().length(), 2);

    click(&host, "button[aria-controls='mobile-menu']");
    settle().await;
    assert!(host.query_selector("#mobile-menu").unwrap().is_none());
}

#[wasm_bindgen_test]
async fn shapes_animate_after_mount() {
    let host = mount_hero(Viewport::Wide);
    TimeoutFuture::new(400).await;
    let shape = host.query_selector("[data-shape='purple']").unwrap().expect("shape");
    let style = shape.get_attribute("style").unwrap_or_default();
    assert!(!style.contains("translateY(-150px)"), "{style}");
}

fn root_is_dark() -> bool {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .document_element()
        .unwrap()
        .class_list()
        .contains("dark")
}

#[wasm_bindgen_test]
async fn unmounting_dark_hero_clears_root_class() {
    let document = web_sys::window().unwrap().document().unwrap();
    let host: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    document.body().unwrap().append_child(&host).unwrap();
    let visible = create_rw_signal(true);
    mount_to(host.clone(), move || {
        provide_viewport(Viewport::Wide);
        provide_theme(Theme::Dark);
        view! {
            <Show when=move || visible.get()>
                <HeroGeometric/>
            </Show>
        }
    });
    settle().await;
    assert!(root_is_dark());

    visible.set(false);
    settle().await;
    assert!(host.query_selector("[data-theme]").unwrap().is_none());
    assert!(!root_is_dark());
}

use leptos::*;

/// Matches Tailwind's `md` breakpoint.
pub const WIDE_QUERY: &str = "(min-width: 768px)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewport {
    #[default]
    Narrow,
    Wide,
}

impl Viewport {
    pub fn from_wide_match(matches: bool) -> Self {
        if matches {
            Viewport::Wide
        } else {
            Viewport::Narrow
        }
    }

    pub fn is_narrow(&self) -> bool {
        matches!(self, Viewport::Narrow)
    }
}

#[derive(Clone, Copy)]
pub struct ViewportState {
    pub viewport: RwSignal<Viewport>,
}

impl ViewportState {
    pub fn current(&self) -> ReadSignal<Viewport> {
        self.viewport.read_only()
    }
}

pub fn provide_viewport(initial: Viewport) -> ViewportState {
    let state = ViewportState {
        viewport: create_rw_signal(initial),
    };
    provide_context(state);
    state
}

/// Returns the viewport in scope; otherwise starts tracking the media query.
pub fn use_viewport() -> ViewportState {
    match use_context::<ViewportState>() {
        Some(state) => state,
        None => {
            let state = provide_viewport(Viewport::default());
            media::watch(state);
            state
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod media {
    use super::{Viewport, ViewportState, WIDE_QUERY};
    use leptos::*;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    pub fn watch(state: ViewportState) {
        let list = match web_sys::window().and_then(|w| w.match_media(WIDE_QUERY).ok().flatten()) {
            Some(list) => list,
            None => {
                log::warn!("media query {WIDE_QUERY} unavailable, assuming narrow layout");
                return;
            }
        };
        state.viewport.set(Viewport::from_wide_match(list.matches()));

        let signal = state.viewport;
        let closure = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
            signal.set(Viewport::from_wide_match(event.matches()));
        }) as Box<dyn FnMut(_)>);
        if list
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("could not listen for viewport changes");
            return;
        }

        on_cleanup(move || {
            let _ = list.remove_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            drop(closure);
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod media {
    use super::ViewportState;

    pub fn watch(_state: ViewportState) {}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn host_viewport_defaults_to_narrow() {
        with_runtime(|| {
            assert_eq!(use_viewport().current().get(), Viewport::Narrow);
        });
    }

    #[test]
    fn provided_viewport_wins() {
        with_runtime(|| {
            provide_viewport(Viewport::Wide);
            assert!(!use_viewport().current().get().is_narrow());
        });
    }

    #[test]
    fn media_match_maps_to_layout() {
        assert_eq!(Viewport::from_wide_match(true), Viewport::Wide);
        assert_eq!(Viewport::from_wide_match(false), Viewport::Narrow);
    }
}

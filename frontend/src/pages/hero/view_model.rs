use crate::motion::{use_animation_clock, AnimationClock};
use crate::state::{
    menu::{use_menu, MenuState},
    theme::{use_theme, ThemeState},
    viewport::{use_viewport, ViewportState},
};
use crate::theme::{clear_root_class, sync_root_class, Palette};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroAction {
    SignIn,
    SignUp,
    GetStarted,
    LearnMore,
}

/// Optional handlers for the hero's buttons. Unhandled buttons stay inert.
#[derive(Clone, Copy, Default)]
pub struct HeroActions {
    pub sign_in: Option<Callback<()>>,
    pub sign_up: Option<Callback<()>>,
    pub get_started: Option<Callback<()>>,
    pub learn_more: Option<Callback<()>>,
}

impl HeroActions {
    fn handler(&self, action: HeroAction) -> Option<Callback<()>> {
        match action {
            HeroAction::SignIn => self.sign_in,
            HeroAction::SignUp => self.sign_up,
            HeroAction::GetStarted => self.get_started,
            HeroAction::LearnMore => self.learn_more,
        }
    }

    pub fn fire(&self, action: HeroAction) {
        match self.handler(action) {
            Some(handler) => handler.call(()),
            None => log::debug!("{action:?} clicked without a handler"),
        }
    }

    pub fn on_click(&self, action: HeroAction) -> Callback<ev::MouseEvent> {
        let actions = *self;
        Callback::new(move |_: ev::MouseEvent| actions.fire(action))
    }
}

#[derive(Clone, Copy)]
pub struct HeroViewModel {
    pub theme: ThemeState,
    pub menu: MenuState,
    pub viewport: ViewportState,
    pub clock: AnimationClock,
    pub palette: Memo<Palette>,
}

impl HeroViewModel {
    pub fn show_mobile_menu(&self) -> bool {
        self.menu.is_open().get() && self.viewport.current().get().is_narrow()
    }
}

pub fn use_hero_view_model() -> HeroViewModel {
    let theme = use_theme();
    let menu = use_menu();
    let viewport = use_viewport();
    let clock = use_animation_clock();

    let current = theme.current();
    let palette = create_memo(move |_| Palette::for_theme(current.get()));
    create_effect(move |_| sync_root_class(current.get()));
    on_cleanup(clear_root_class);

    HeroViewModel {
        theme,
        menu,
        viewport,
        clock,
        palette,
    }
}

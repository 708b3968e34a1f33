use crate::config::RuntimeConfig;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Initial theme for a page load; `dark: true` in the runtime config starts dark.
    pub fn from_config(config: &RuntimeConfig) -> Self {
        if config.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: RwSignal<Theme>,
}

impl ThemeState {
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: create_rw_signal(initial),
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        log::debug!("theme switched to {}", next.name());
        self.set_theme(next);
    }

    pub fn current(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }

    pub fn is_dark(&self) -> Signal<bool> {
        let theme = self.theme;
        Signal::derive(move || theme.get().is_dark())
    }
}

pub fn provide_theme(initial: Theme) -> ThemeState {
    let state = ThemeState::new(initial);
    provide_context(state);
    state
}

pub fn use_theme() -> ThemeState {
    match use_context::<ThemeState>() {
        Some(state) => state,
        None => provide_theme(Theme::default()),
    }
}

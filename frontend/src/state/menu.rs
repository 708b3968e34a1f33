use leptos::*;

#[derive(Clone, Copy)]
pub struct MenuState {
    pub open: RwSignal<bool>,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            open: create_rw_signal(false),
        }
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    pub fn is_open(&self) -> ReadSignal<bool> {
        self.open.read_only()
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_menu() -> MenuState {
    match use_context::<MenuState>() {
        Some(state) => state,
        None => {
            let state = MenuState::new();
            provide_context(state);
            state
        }
    }
}

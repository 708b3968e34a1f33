use leptos::*;

/// Shared time base for every animation under one mounted hero.
///
/// Elapsed time is `now - origin` in seconds. In the browser a driver
/// advances `now` on a fixed interval from mount until the owning scope is
/// cleaned up; elsewhere the clock only moves when ticked.
#[derive(Clone, Copy)]
pub struct AnimationClock {
    now: RwSignal<f64>,
    origin: RwSignal<f64>,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self {
            now: create_rw_signal(0.0),
            origin: create_rw_signal(0.0),
        }
    }

    pub fn elapsed(&self) -> Signal<f64> {
        let clock = *self;
        Signal::derive(move || (clock.now.get() - clock.origin.get()).max(0.0))
    }

    pub fn elapsed_untracked(&self) -> f64 {
        (self.now.get_untracked() - self.origin.get_untracked()).max(0.0)
    }

    pub fn tick(&self, now: f64) {
        self.now.set(now);
    }

    /// Replays every animation from its first frame.
    pub fn restart(&self) {
        self.origin.set(self.now.get_untracked());
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_animation_clock() -> AnimationClock {
    let clock = AnimationClock::new();
    provide_context(clock);
    clock
}

/// Returns the clock in scope, creating and starting one if none exists.
pub fn use_animation_clock() -> AnimationClock {
    match use_context::<AnimationClock>() {
        Some(clock) => clock,
        None => {
            let clock = provide_animation_clock();
            driver::start(clock);
            clock
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod driver {
    use super::AnimationClock;
    use gloo_timers::callback::Interval;
    use leptos::*;

    pub const FRAME_INTERVAL_MS: u32 = 16;

    fn now_secs() -> Option<f64> {
        web_sys::window()?.performance().map(|p| p.now() / 1000.0)
    }

    pub fn start(clock: AnimationClock) {
        let Some(start) = now_secs() else {
            log::warn!("performance clock unavailable, animations stay on their first frame");
            return;
        };
        clock.now.set(start);
        clock.origin.set(start);

        let interval = Interval::new(FRAME_INTERVAL_MS, move || {
            if let Some(now) = now_secs() {
                clock.tick(now);
            }
        });
        log::debug!("animation clock started");

        on_cleanup(move || {
            drop(interval);
            log::debug!("animation clock stopped");
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod driver {
    use super::AnimationClock;

    pub fn start(_clock: AnimationClock) {}
}

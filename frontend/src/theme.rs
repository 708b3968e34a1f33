use crate::components::common::ButtonVariant;
use crate::pages::hero::utils::Accent;
use crate::state::theme::Theme;

/// Every theme-dependent class used by the hero, resolved for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub theme: Theme,
    pub page: &'static str,
    pub nav_bar: &'static str,
    pub logo_mark: &'static str,
    pub logo_text: &'static str,
    pub nav_link: &'static str,
    pub secondary_variant: ButtonVariant,
    pub secondary_action: &'static str,
    pub primary_action: &'static str,
    pub toggle: &'static str,
    pub menu_button: &'static str,
    pub overlay: &'static str,
    pub glow: &'static str,
    pub shape_surface: &'static str,
    pub shape_overlay: &'static str,
    pub badge: &'static str,
    pub badge_text: &'static str,
    pub title_primary: &'static str,
    pub title_accent: &'static str,
    pub subtext: &'static str,
    pub vignette: &'static str,
}

pub const LIGHT: Palette = Palette {
    theme: Theme::Light,
    page: "bg-gray-50",
    nav_bar: "bg-gray-50/80 backdrop-blur-md",
    logo_mark: "bg-gray-200",
    logo_text: "text-gray-800",
    nav_link: "text-gray-600 hover:text-gray-900",
    secondary_variant: ButtonVariant::Secondary,
    secondary_action: "text-gray-700",
    primary_action: "bg-gray-900 text-white hover:bg-gray-800",
    toggle: "bg-gray-200 text-gray-800 hover:bg-gray-300",
    menu_button: "text-gray-800",
    overlay: "bg-gray-50",
    glow: "bg-gradient-to-br from-purple-200/[0.3] via-transparent to-pink-200/[0.3]",
    shape_surface: "backdrop-blur-[2px] border-2 border-black/[0.08] shadow-[0_8px_32px_0_rgba(0,0,0,0.05)]",
    shape_overlay: "after:absolute after:inset-0 after:rounded-full after:bg-[radial-gradient(circle_at_50%_50%,rgba(0,0,0,0.05),transparent_70%)]",
    badge: "bg-black/[0.02] border-black/[0.05]",
    badge_text: "text-black/60",
    title_primary: "bg-gradient-to-b from-gray-900 to-gray-700",
    title_accent: "bg-gradient-to-r from-purple-600 via-gray-800 to-pink-600",
    subtext: "text-black/60",
    vignette: "bg-gradient-to-t from-gray-50 via-transparent to-gray-50/80",
};

pub const DARK: Palette = Palette {
    theme: Theme::Dark,
    page: "bg-[#030303] dark",
    nav_bar: "bg-[#030303]/80 backdrop-blur-md",
    logo_mark: "bg-white/10",
    logo_text: "text-white",
    nav_link: "text-white/70 hover:text-white",
    secondary_variant: ButtonVariant::Outline,
    secondary_action: "text-white border-white/20 hover:bg-white/10",
    primary_action: "bg-white text-gray-900 hover:bg-white/90",
    toggle: "bg-white/10 text-white hover:bg-white/20",
    menu_button: "text-white",
    overlay: "bg-[#030303]",
    glow: "bg-gradient-to-br from-purple-500/[0.07] via-transparent to-pink-500/[0.07]",
    shape_surface: "backdrop-blur-[2px] border-2 border-white/[0.15] shadow-[0_8px_32px_0_rgba(255,255,255,0.1)]",
    shape_overlay: "after:absolute after:inset-0 after:rounded-full after:bg-[radial-gradient(circle_at_50%_50%,rgba(255,255,255,0.2),transparent_70%)]",
    badge: "bg-white/[0.03] border-white/[0.08]",
    badge_text: "text-white/60",
    title_primary: "bg-gradient-to-b from-white to-white/80",
    title_accent: "bg-gradient-to-r from-purple-300 via-white/90 to-pink-300",
    subtext: "text-white/40",
    vignette: "bg-gradient-to-t from-[#030303] via-transparent to-[#030303]/80",
};

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    // Class names stay literal so the Tailwind scanner can see them.
    pub fn accent_gradient(&self, accent: Accent) -> &'static str {
        match (self.theme, accent) {
            (Theme::Dark, Accent::Purple) => "from-purple-500/[0.12]",
            (Theme::Dark, Accent::Pink) => "from-pink-500/[0.12]",
            (Theme::Dark, Accent::Blue) => "from-blue-500/[0.12]",
            (Theme::Dark, Accent::Teal) => "from-teal-500/[0.12]",
            (Theme::Dark, Accent::Amber) => "from-amber-500/[0.12]",
            (Theme::Light, Accent::Purple) => "from-purple-300/[0.2]",
            (Theme::Light, Accent::Pink) => "from-pink-300/[0.2]",
            (Theme::Light, Accent::Blue) => "from-blue-300/[0.2]",
            (Theme::Light, Accent::Teal) => "from-teal-300/[0.2]",
            (Theme::Light, Accent::Amber) => "from-amber-300/[0.2]",
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use crate::state::theme::Theme;

    pub fn sync_root_class(theme: Theme) {
        let Some(html) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let list = html.class_list();
        let result = list
            .remove_1(Theme::Dark.as_class())
            .and_then(|_| match theme.as_class() {
                "" => Ok(()),
                class => list.add_1(class),
            });
        if result.is_err() {
            log::warn!("could not update the root theme class");
        }
    }
}

/// Mirrors the theme onto `<html>` so `dark:` variants outside the hero follow it.
#[cfg(target_arch = "wasm32")]
pub use wasm::sync_root_class;

#[cfg(not(target_arch = "wasm32"))]
pub fn sync_root_class(_theme: crate::state::theme::Theme) {}

/// Drops the `dark` class a mounted hero put on `<html>`.
pub fn clear_root_class() {
    sync_root_class(crate::state::theme::Theme::Light);
}

// theme.rs - Light/dark colour scheme
//
// The resolved state lives on <html>: the `dark` class plus `data-theme`
// naming the code-block theme. Only a dark/light flip needs the guard class;
// a code-theme-only fix is applied unguarded on the next frame.

use crate::config::ThemeMode;
use crate::dom::{Dom, Region};

pub const DARK_CLASS: &str = "dark";
pub const THEME_GUARD: &str = "is-theme-transitioning";
pub const CODE_THEME_ATTR: &str = "data-theme";
pub const CODE_THEME_DARK: &str = "github-dark";
pub const CODE_THEME_LIGHT: &str = "github-light";

/// Fully resolved theme to write on the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTarget {
    pub dark: bool,
    /// Whether the `dark` class has to change.
    pub flip: bool,
}

impl ThemeTarget {
    pub fn code_theme(&self) -> &'static str {
        if self.dark { CODE_THEME_DARK } else { CODE_THEME_LIGHT }
    }
}

/// Resolve `system` against the OS preference.
pub fn resolves_dark(mode: ThemeMode, dom: &impl Dom) -> bool {
    match mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::System => dom.prefers_dark(),
    }
}

/// Compare the page against `mode`. `None` when nothing would change.
pub fn plan(mode: ThemeMode, dom: &impl Dom) -> Option<ThemeTarget> {
    let current_dark = dom.has_class(Region::Root, DARK_CLASS);
    let current_code = dom.attribute(Region::Root, CODE_THEME_ATTR);

    let dark = resolves_dark(mode, dom);
    let target = ThemeTarget { dark, flip: current_dark != dark };

    if !target.flip && current_code.as_deref() == Some(target.code_theme()) {
        return None;
    }
    Some(target)
}

/// Frame-1 mutation.
pub fn apply(target: ThemeTarget, dom: &mut impl Dom) {
    if target.flip {
        if target.dark {
            dom.add_class(Region::Root, DARK_CLASS);
        } else {
            dom.remove_class(Region::Root, DARK_CLASS);
        }
    }
    dom.set_attribute(Region::Root, CODE_THEME_ATTR, target.code_theme());
}

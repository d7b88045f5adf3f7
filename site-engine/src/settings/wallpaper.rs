// wallpaper.rs - Banner / fullscreen / none page background
//
// `data-wallpaper-mode` on <html> is written as soon as a change is
// requested; everything else waits for the guarded frame. Each step checks
// that its element exists and skips quietly otherwise.

use crate::config::{
    BANNER_HEIGHT, COMPACT_TOP, MAIN_PANEL_OVERLAPS_BANNER_HEIGHT, MOBILE_BREAKPOINT,
    NavbarTransparency, SiteConfig, WallpaperMode,
};
use crate::dom::{Dom, Hook, Region};

pub const WALLPAPER_GUARD: &str = "is-wallpaper-transitioning";
pub const WALLPAPER_ATTR: &str = "data-wallpaper-mode";
pub const NAVBAR_ATTR: &str = "data-transparent-mode";

const ENABLE_BANNER: &str = "enable-banner";
const TRANSPARENT: &str = "wallpaper-transparent";
const HIDDEN: &str = "hidden";
const MOBILE_HIDE_BANNER: &str = "mobile-hide-banner";
const MOBILE_MAIN_NO_BANNER: &str = "mobile-main-no-banner";
const NO_BANNER_LAYOUT: &str = "no-banner-layout";
const NAVBAR_CLASSES: [&str; 3] =
    ["navbar-transparent-semi", "navbar-transparent-full", "navbar-transparent-semifull"];

/// Mode currently on the page, or the site default when unmarked.
pub fn current_mode(dom: &impl Dom, site: &SiteConfig) -> WallpaperMode {
    dom.attribute(Region::Root, WALLPAPER_ATTR)
        .and_then(|m| m.parse().ok())
        .unwrap_or(site.wallpaper.mode)
}

pub fn is_home(path: &str) -> bool {
    path.is_empty() || path == "/"
}

/// Below the desktop breakpoint and off the home page the banner is never
/// shown, whatever the configured mode.
pub fn banner_suppressed(dom: &impl Dom) -> bool {
    dom.viewport_width() < MOBILE_BREAKPOINT && !is_home(&dom.pathname())
}

/// Where the main content panel starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainOffset {
    /// Tucked under the banner: `calc(35vh - 3rem)`.
    UnderBanner,
    /// Banner hidden on mobile; compact top with `mobile-main-no-banner`.
    MobileNoBanner,
    /// No banner at all; compact top with `no-banner-layout`.
    Compact,
}

impl MainOffset {
    pub fn for_mode(mode: WallpaperMode, banner_hidden: bool) -> Self {
        match mode {
            WallpaperMode::Banner if banner_hidden => MainOffset::MobileNoBanner,
            WallpaperMode::Banner => MainOffset::UnderBanner,
            WallpaperMode::Fullscreen | WallpaperMode::None => MainOffset::Compact,
        }
    }

    pub fn top(&self) -> String {
        match self {
            MainOffset::UnderBanner => {
                format!("calc({BANNER_HEIGHT}vh - {MAIN_PANEL_OVERLAPS_BANNER_HEIGHT}rem)")
            }
            MainOffset::MobileNoBanner | MainOffset::Compact => COMPACT_TOP.to_owned(),
        }
    }

    fn class(&self) -> Option<&'static str> {
        match self {
            MainOffset::UnderBanner => None,
            MainOffset::MobileNoBanner => Some(MOBILE_MAIN_NO_BANNER),
            MainOffset::Compact => Some(NO_BANNER_LAYOUT),
        }
    }
}

/// Guarded-frame mutation for `mode`.
pub fn apply(mode: WallpaperMode, site: &SiteConfig, dom: &mut impl Dom) {
    dom.remove_classes(Region::Body, &[ENABLE_BANNER, TRANSPARENT]);

    match mode {
        WallpaperMode::Banner => {
            dom.add_class(Region::Body, ENABLE_BANNER);
            show_banner(dom);
        }
        WallpaperMode::Fullscreen => {
            dom.add_class(Region::Body, TRANSPARENT);
            show_fullscreen(dom);
        }
        WallpaperMode::None => hide_all(dom),
    }

    update_navbar(mode, site, dom);

    if mode == WallpaperMode::Fullscreen {
        dom.invoke(Hook::FullscreenWallpaperCarousel);
    }
    log::debug!("wallpaper mode applied: {mode}");
}

fn show_banner(dom: &mut impl Dom) {
    dom.add_class(Region::FullscreenWallpaper, HIDDEN);

    if dom.exists(Region::BannerWrapper) {
        dom.remove_classes(Region::BannerWrapper, &[HIDDEN, "opacity-0", MOBILE_HIDE_BANNER]);
        dom.add_class(Region::BannerWrapper, "opacity-100");
        dom.remove_class(Region::MainContent, MOBILE_MAIN_NO_BANNER);
        dom.set_style(Region::MainContent, "top", "");

        if banner_suppressed(&*dom) {
            dom.add_class(Region::BannerWrapper, MOBILE_HIDE_BANNER);
        }

        reveal(dom, Region::Banner);
        if dom.exists(Region::BannerCarousel) {
            if !dom.invoke(Hook::BannerCarousel) {
                reset_carousel(dom);
            }
        } else {
            reveal(dom, Region::MobileBanner);
        }
    }

    position_main(WallpaperMode::Banner, dom);
}

fn show_fullscreen(dom: &mut impl Dom) {
    dom.remove_classes(Region::FullscreenWallpaper, &[HIDDEN, "opacity-0"]);
    dom.add_class(Region::FullscreenWallpaper, "opacity-100");
    dom.add_class(Region::BannerWrapper, HIDDEN);
    dom.add_class(Region::MainContent, TRANSPARENT);
    position_main(WallpaperMode::Fullscreen, dom);
}

fn hide_all(dom: &mut impl Dom) {
    dom.add_class(Region::BannerWrapper, HIDDEN);
    dom.add_class(Region::FullscreenWallpaper, HIDDEN);
    position_main(WallpaperMode::None, dom);
    dom.remove_class(Region::MainContent, TRANSPARENT);
}

fn reveal(dom: &mut impl Dom, region: Region) {
    dom.remove_classes(region, &["opacity-0", "scale-105"]);
    dom.add_class(region, "opacity-100");
}

/// First slide visible, the rest parked. Single-slide carousels are left alone.
fn reset_carousel(dom: &mut impl Dom) {
    let n = dom.carousel_len();
    if n <= 1 {
        return;
    }
    for i in 0..n {
        let item = Region::CarouselItem(i);
        if i == 0 {
            dom.add_classes(item, &["opacity-100", "scale-100"]);
            dom.remove_classes(item, &["opacity-0", "scale-110"]);
        } else {
            dom.add_classes(item, &["opacity-0", "scale-110"]);
            dom.remove_classes(item, &["opacity-100", "scale-100"]);
        }
    }
}

fn position_main(mode: WallpaperMode, dom: &mut impl Dom) {
    if !dom.exists(Region::MainContent) {
        return;
    }
    dom.remove_classes(Region::MainContent, &[MOBILE_MAIN_NO_BANNER, NO_BANNER_LAYOUT]);

    let hidden =
        banner_suppressed(&*dom) || dom.has_class(Region::BannerWrapper, MOBILE_HIDE_BANNER);
    let offset = MainOffset::for_mode(mode, hidden);
    if let Some(class) = offset.class() {
        dom.add_class(Region::MainContent, class);
    }
    dom.set_style(Region::MainContent, "top", &offset.top());
}

fn update_navbar(mode: WallpaperMode, site: &SiteConfig, dom: &mut impl Dom) {
    if !dom.exists(Region::Navbar) {
        return;
    }
    let transparency = site.navbar_transparency(mode);
    dom.set_attribute(Region::Navbar, NAVBAR_ATTR, transparency.as_str());
    dom.remove_classes(Region::Navbar, &NAVBAR_CLASSES);

    if transparency == NavbarTransparency::Semifull {
        dom.invoke(Hook::SemifullScrollDetection);
    }
}

// config.rs - Site and particle configuration
//
// Supplied by the page as JSON (camelCase keys, same shape as the site
// config object). Everything here is plain data; behaviour lives in
// `engine` and `settings`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::language;

// Layout constants (vh / rem)
pub const BANNER_HEIGHT: u32 = 35;
pub const MAIN_PANEL_OVERLAPS_BANNER_HEIGHT: u32 = 3;
pub const COMPACT_TOP: &str = "5.5rem";
pub const MOBILE_BREAKPOINT: f64 = 1024.0;

pub const DEFAULT_HUE: i32 = 250;
pub const PARTICLE_IMAGE: &str = "/particle.png";

/// Inclusive-exclusive sampling range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Map a unit draw `u` in [0, 1) onto the range.
    #[inline]
    pub fn sample(&self, u: f64) -> f64 {
        self.min + u * (self.max - self.min)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeedConfig {
    pub horizontal: Range,
    pub vertical: Range,
    pub rotation: f64,
    pub fade_speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleConfig {
    pub enable: bool,
    pub particle_num: usize,
    /// Respawns allowed per particle; -1 means unlimited.
    pub limit_times: i32,
    pub z_index: i32,
    pub size: Range,
    pub opacity: Range,
    pub speed: SpeedConfig,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            enable: true,
            particle_num: 12,
            limit_times: -1,
            z_index: 100,
            size: Range::new(0.1, 0.4),
            opacity: Range::new(0.2, 0.8),
            speed: SpeedConfig {
                horizontal: Range::new(-1.7, -1.2),
                vertical: Range::new(0.4, 0.8),
                rotation: 0.12,
                fade_speed: 0.08,
            },
        }
    }
}

impl ParticleConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json).map_err(|e| EngineError::Config(e.to_string()))
    }
}

// ============================================================================
// Modes
// ============================================================================

/// Colour scheme preference. `System` is resolved at apply time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    System,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallpaperMode {
    Fullscreen,
    Banner,
    None,
}

impl WallpaperMode {
    pub fn as_str(self) -> &'static str {
        match self {
            WallpaperMode::Fullscreen => "fullscreen",
            WallpaperMode::Banner => "banner",
            WallpaperMode::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarTransparency {
    #[default]
    Semi,
    Full,
    Semifull,
}

impl NavbarTransparency {
    pub fn as_str(self) -> &'static str {
        match self {
            NavbarTransparency::Semi => "semi",
            NavbarTransparency::Full => "full",
            NavbarTransparency::Semifull => "semifull",
        }
    }
}

macro_rules! impl_mode_str {
    ($ty:ident { $($name:literal => $variant:ident),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = EngineError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok($ty::$variant),)+
                    other => Err(EngineError::UnknownMode(other.to_owned())),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_mode_str!(ThemeMode { "light" => Light, "dark" => Dark, "system" => System });
impl_mode_str!(WallpaperMode { "fullscreen" => Fullscreen, "banner" => Banner, "none" => None });
impl_mode_str!(NavbarTransparency { "semi" => Semi, "full" => Full, "semifull" => Semifull });

// ============================================================================
// Site config
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarConfig {
    #[serde(default)]
    pub transparent_mode: Option<NavbarTransparency>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallpaperVariant {
    #[serde(default)]
    pub navbar: Option<NavbarConfig>,
}

impl WallpaperVariant {
    fn transparency(variant: Option<&Self>) -> NavbarTransparency {
        variant
            .and_then(|v| v.navbar.as_ref())
            .and_then(|n| n.transparent_mode)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallpaperConfig {
    pub mode: WallpaperMode,
    #[serde(default)]
    pub banner: Option<WallpaperVariant>,
    #[serde(default)]
    pub fullscreen: Option<WallpaperVariant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub default_theme: ThemeMode,
    pub wallpaper: WallpaperConfig,
    #[serde(default)]
    pub lang: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_theme: ThemeMode::System,
            wallpaper: WallpaperConfig {
                mode: WallpaperMode::Banner,
                banner: None,
                fullscreen: None,
            },
            lang: None,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json).map_err(|e| EngineError::Config(e.to_string()))
    }

    /// BCP 47 locale for the configured language, `en-US` when unset or
    /// unsupported.
    pub fn locale(&self) -> &'static str {
        language::locale_for(self.lang.as_deref())
    }

    /// Navbar transparency for a wallpaper mode. Fullscreen has its own
    /// branch; banner and none share the banner settings.
    pub fn navbar_transparency(&self, mode: WallpaperMode) -> NavbarTransparency {
        match mode {
            WallpaperMode::Fullscreen => {
                WallpaperVariant::transparency(self.wallpaper.fullscreen.as_ref())
            }
            WallpaperMode::Banner | WallpaperMode::None => {
                WallpaperVariant::transparency(self.wallpaper.banner.as_ref())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn particle_config_reads_camel_case() {
        let json = r#"{
            "enable": true,
            "particleNum": 3,
            "limitTimes": 0,
            "zIndex": 50,
            "size": { "min": 0.5, "max": 1.0 },
            "opacity": { "min": 0.3, "max": 0.9 },
            "speed": {
                "horizontal": { "min": -1.0, "max": 1.0 },
                "vertical": { "min": 0.5, "max": 1.5 },
                "rotation": 0.2,
                "fadeSpeed": 0.1
            }
        }"#;
        let cfg = ParticleConfig::from_json(json).unwrap();
        assert_eq!(cfg.particle_num, 3);
        assert_eq!(cfg.limit_times, 0);
        assert_eq!(cfg.z_index, 50);
        assert_eq!(cfg.speed.fade_speed, 0.1);
        assert_eq!(cfg.size, Range::new(0.5, 1.0));
    }

    #[test]
    fn malformed_config_is_reported() {
        let err = ParticleConfig::from_json("{\"enable\": 1}").unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn navbar_transparency_uses_mode_branch() {
        let json = r#"{
            "defaultTheme": "dark",
            "wallpaper": {
                "mode": "banner",
                "banner": { "navbar": { "transparentMode": "semifull" } },
                "fullscreen": { "navbar": { "transparentMode": "full" } }
            }
        }"#;
        let site = SiteConfig::from_json(json).unwrap();
        assert_eq!(site.default_theme, ThemeMode::Dark);
        assert_eq!(site.navbar_transparency(WallpaperMode::Fullscreen), NavbarTransparency::Full);
        assert_eq!(site.navbar_transparency(WallpaperMode::Banner), NavbarTransparency::Semifull);
        assert_eq!(site.navbar_transparency(WallpaperMode::None), NavbarTransparency::Semifull);
    }

    #[test]
    fn navbar_transparency_defaults_to_semi() {
        let site = SiteConfig::default();
        assert_eq!(site.navbar_transparency(WallpaperMode::Fullscreen), NavbarTransparency::Semi);
    }

    #[test]
    fn site_locale_comes_from_lang() {
        let site = SiteConfig::from_json(
            r#"{ "defaultTheme": "light", "wallpaper": { "mode": "none" }, "lang": "ko" }"#,
        )
        .unwrap();
        assert_eq!(site.locale(), "ko-KR");
        assert_eq!(SiteConfig::default().locale(), "en-US");
    }

    #[test]
    fn mode_strings() {
        assert_eq!("system".parse::<ThemeMode>().unwrap(), ThemeMode::System);
        assert_eq!(WallpaperMode::None.to_string(), "none");
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn range_sample_spans_bounds() {
        let r = Range::new(2.0, 6.0);
        assert_eq!(r.sample(0.0), 2.0);
        assert_eq!(r.sample(0.5), 4.0);
    }
}

// dom.rs - Page surface used by the theme and wallpaper settings
//
// Elements are addressed by role, not by handle. Implementations treat a
// missing element as a silent no-op on every call.

/// Page elements the settings touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// `<html>`
    Root,
    Body,
    /// `#config-carrier`
    ConfigCarrier,
    /// `#banner-wrapper`
    BannerWrapper,
    /// `#banner`
    Banner,
    /// `#banner-carousel`
    BannerCarousel,
    /// n-th `.carousel-item` inside `#banner-carousel`
    CarouselItem(usize),
    /// Single-image banner shown below the desktop breakpoint
    MobileBanner,
    /// `#navbar`
    Navbar,
    /// `[data-fullscreen-wallpaper]`
    FullscreenWallpaper,
    /// `.absolute.w-full.z-30`
    MainContent,
}

/// Initializers other components may register on `window`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    BannerCarousel,
    FullscreenWallpaperCarousel,
    SemifullScrollDetection,
}

impl Hook {
    pub fn global_name(self) -> &'static str {
        match self {
            Hook::BannerCarousel => "initBannerCarousel",
            Hook::FullscreenWallpaperCarousel => "initFullscreenWallpaperCarousel",
            Hook::SemifullScrollDetection => "initSemifullScrollDetection",
        }
    }
}

pub trait Dom {
    fn exists(&self, region: Region) -> bool;
    fn has_class(&self, region: Region, class: &str) -> bool;
    fn add_class(&mut self, region: Region, class: &str);
    fn remove_class(&mut self, region: Region, class: &str);
    fn attribute(&self, region: Region, name: &str) -> Option<String>;
    fn set_attribute(&mut self, region: Region, name: &str, value: &str);
    /// Inline style; an empty value clears the property.
    fn set_style(&mut self, region: Region, property: &str, value: &str);
    fn carousel_len(&self) -> usize;
    /// Logical viewport width in CSS px.
    fn viewport_width(&self) -> f64;
    fn pathname(&self) -> String;
    /// `prefers-color-scheme: dark`
    fn prefers_dark(&self) -> bool;
    /// Call a registered hook. `false` when nothing is registered.
    fn invoke(&mut self, hook: Hook) -> bool;

    fn add_classes(&mut self, region: Region, classes: &[&str]) {
        for class in classes {
            self.add_class(region, class);
        }
    }

    fn remove_classes(&mut self, region: Region, classes: &[&str]) {
        for class in classes {
            self.remove_class(region, class);
        }
    }
}

/// Client-side key/value flags (localStorage in the browser).
pub trait Store {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

    #[derive(Debug, Default, Clone)]
    pub struct Element {
        pub classes: BTreeSet<String>,
        pub attrs: BTreeMap<String, String>,
        pub style: BTreeMap<String, String>,
    }

    /// In-memory page. Only regions passed to `with` exist.
    pub struct FakeDom {
        pub elements: HashMap<Region, Element>,
        pub width: f64,
        pub path: String,
        pub dark_os: bool,
        pub hooks: HashSet<Hook>,
        pub calls: Vec<Hook>,
        /// (region, class, added) for every class mutation
        pub class_log: Vec<(Region, String, bool)>,
        pub writes: usize,
    }

    impl FakeDom {
        pub fn new() -> Self {
            Self {
                elements: HashMap::new(),
                width: 1440.0,
                path: "/".to_owned(),
                dark_os: false,
                hooks: HashSet::new(),
                calls: Vec::new(),
                class_log: Vec::new(),
                writes: 0,
            }
        }

        pub fn with(mut self, regions: &[Region]) -> Self {
            for r in regions {
                self.elements.entry(*r).or_default();
            }
            self
        }

        /// A full theme page: every region plus `carousel` items.
        pub fn page(carousel: usize) -> Self {
            let mut dom = Self::new().with(&[
                Region::Root,
                Region::Body,
                Region::ConfigCarrier,
                Region::BannerWrapper,
                Region::Banner,
                Region::Navbar,
                Region::FullscreenWallpaper,
                Region::MainContent,
            ]);
            if carousel > 0 {
                dom = dom.with(&[Region::BannerCarousel]);
                for i in 0..carousel {
                    dom = dom.with(&[Region::CarouselItem(i)]);
                }
            }
            dom
        }

        pub fn classes(&self, region: Region) -> Vec<&str> {
            self.elements
                .get(&region)
                .map(|e| e.classes.iter().map(String::as_str).collect())
                .unwrap_or_default()
        }

        pub fn style(&self, region: Region, property: &str) -> Option<&str> {
            self.elements.get(&region)?.style.get(property).map(String::as_str)
        }
    }

    impl Dom for FakeDom {
        fn exists(&self, region: Region) -> bool {
            self.elements.contains_key(&region)
        }

        fn has_class(&self, region: Region, class: &str) -> bool {
            self.elements.get(&region).is_some_and(|e| e.classes.contains(class))
        }

        fn add_class(&mut self, region: Region, class: &str) {
            if let Some(e) = self.elements.get_mut(&region) {
                e.classes.insert(class.to_owned());
                self.class_log.push((region, class.to_owned(), true));
                self.writes += 1;
            }
        }

        fn remove_class(&mut self, region: Region, class: &str) {
            if let Some(e) = self.elements.get_mut(&region) {
                e.classes.remove(class);
                self.class_log.push((region, class.to_owned(), false));
                self.writes += 1;
            }
        }

        fn attribute(&self, region: Region, name: &str) -> Option<String> {
            self.elements.get(&region)?.attrs.get(name).cloned()
        }

        fn set_attribute(&mut self, region: Region, name: &str, value: &str) {
            if let Some(e) = self.elements.get_mut(&region) {
                e.attrs.insert(name.to_owned(), value.to_owned());
                self.writes += 1;
            }
        }

        fn set_style(&mut self, region: Region, property: &str, value: &str) {
            if let Some(e) = self.elements.get_mut(&region) {
                if value.is_empty() {
                    e.style.remove(property);
                } else {
                    e.style.insert(property.to_owned(), value.to_owned());
                }
                self.writes += 1;
            }
        }

        fn carousel_len(&self) -> usize {
            self.elements.keys().filter(|r| matches!(r, Region::CarouselItem(_))).count()
        }

        fn viewport_width(&self) -> f64 {
            self.width
        }

        fn pathname(&self) -> String {
            self.path.clone()
        }

        fn prefers_dark(&self) -> bool {
            self.dark_os
        }

        fn invoke(&mut self, hook: Hook) -> bool {
            if self.hooks.contains(&hook) {
                self.calls.push(hook);
                true
            } else {
                false
            }
        }
    }

    #[derive(Debug, Default)]
    pub struct MemoryStore {
        pub entries: HashMap<String, String>,
    }

    impl Store for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.entries.insert(key.to_owned(), value.to_owned());
        }
    }
}

// hue.rs - Accent hue
//
// Stored as a decimal string; the default comes from the server-rendered
// config carrier. Reads take the leading integer, so "42px" is 42.

use crate::config::DEFAULT_HUE;
use crate::dom::{Dom, Region, Store};

use super::HUE_KEY;

/// Optional sign followed by at least one digit; trailing junk is ignored.
fn leading_int(raw: &str) -> Option<i32> {
    let s = raw.trim_start();
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let end = s.len() - unsigned.len() + digits;
    s[..end].parse().ok()
}

pub fn default_hue(dom: &impl Dom) -> i32 {
    dom.attribute(Region::ConfigCarrier, "data-hue")
        .and_then(|h| leading_int(&h))
        .unwrap_or(DEFAULT_HUE)
}

pub fn hue(store: &impl Store, dom: &impl Dom) -> i32 {
    store
        .get(HUE_KEY)
        .and_then(|h| leading_int(&h))
        .unwrap_or_else(|| default_hue(dom))
}

/// Persist and push `--hue` onto :root.
pub fn set_hue(store: &mut impl Store, dom: &mut impl Dom, hue: i32) {
    let value = hue.to_string();
    store.set(HUE_KEY, &value);
    dom.set_style(Region::Root, "--hue", &value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::testing::{FakeDom, MemoryStore};

    #[test]
    fn default_reads_carrier_then_fallback() {
        let mut dom = FakeDom::new().with(&[Region::ConfigCarrier]);
        assert_eq!(default_hue(&dom), 250);
        dom.set_attribute(Region::ConfigCarrier, "data-hue", "120");
        assert_eq!(default_hue(&dom), 120);
        assert_eq!(default_hue(&FakeDom::new()), 250);
    }

    #[test]
    fn stored_hue_wins() {
        let dom = FakeDom::new();
        let mut store = MemoryStore::default();
        assert_eq!(hue(&store, &dom), 250);
        store.set(HUE_KEY, "42");
        assert_eq!(hue(&store, &dom), 42);
    }

    #[test]
    fn reads_take_the_leading_integer() {
        let dom = FakeDom::new();
        let mut store = MemoryStore::default();
        store.set(HUE_KEY, " 42px");
        assert_eq!(hue(&store, &dom), 42);
        store.set(HUE_KEY, "-15deg");
        assert_eq!(hue(&store, &dom), -15);
        store.set(HUE_KEY, "px42");
        assert_eq!(hue(&store, &dom), 250);
        store.set(HUE_KEY, "+");
        assert_eq!(hue(&store, &dom), 250);
    }

    #[test]
    fn set_hue_persists_and_styles_root() {
        let mut dom = FakeDom::new().with(&[Region::Root]);
        let mut store = MemoryStore::default();
        set_hue(&mut store, &mut dom, 300);
        assert_eq!(store.get(HUE_KEY).as_deref(), Some("300"));
        assert_eq!(dom.style(Region::Root, "--hue"), Some("300"));
    }
}

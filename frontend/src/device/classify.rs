use serde::Serialize;

use crate::config::{
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, DESKTOP_MIN_WIDTH, TABLET_MIN_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceType {
    pub fn from_width(width: u32) -> Self {
        if width < TABLET_MIN_WIDTH {
            DeviceType::Mobile
        } else if width < DESKTOP_MIN_WIDTH {
            DeviceType::Tablet
        } else {
            DeviceType::Desktop
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        if height > width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

/// One measurement of the viewport and everything derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceSnapshot {
    pub width: u32,
    pub height: u32,
    pub device_type: DeviceType,
    pub orientation: Orientation,
    pub has_touch: bool,
}

impl DeviceSnapshot {
    pub fn is_mobile(&self) -> bool {
        self.device_type == DeviceType::Mobile
    }

    pub fn is_tablet(&self) -> bool {
        self.device_type == DeviceType::Tablet
    }

    pub fn is_desktop(&self) -> bool {
        self.device_type == DeviceType::Desktop
    }
}

impl Default for DeviceSnapshot {
    fn default() -> Self {
        classify(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT, false)
    }
}

pub fn classify(width: u32, height: u32, has_touch: bool) -> DeviceSnapshot {
    DeviceSnapshot {
        width,
        height,
        device_type: DeviceType::from_width(width),
        orientation: Orientation::from_dimensions(width, height),
        has_touch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn exactly_one_category(s: &DeviceSnapshot) -> bool {
        [s.is_mobile(), s.is_tablet(), s.is_desktop()]
            .iter()
            .filter(|flag| **flag)
            .count()
            == 1
    }

    #[test]
    fn phone_held_upright() {
        let s = classify(500, 900, true);
        assert_eq!(s.device_type, DeviceType::Mobile);
        assert_eq!(s.orientation, Orientation::Portrait);
        assert!(s.is_mobile());
        assert!(s.has_touch);
    }

    #[test]
    fn small_tablet_on_its_side() {
        let s = classify(800, 600, false);
        assert_eq!(s.device_type, DeviceType::Tablet);
        assert_eq!(s.orientation, Orientation::Landscape);
    }

    #[test]
    fn full_hd_monitor() {
        let s = classify(1920, 1080, false);
        assert_eq!(s.device_type, DeviceType::Desktop);
        assert_eq!(s.orientation, Orientation::Landscape);
        assert!(s.is_desktop());
    }

    #[test]
    fn breakpoints_are_inclusive_at_the_lower_edge() {
        assert_eq!(DeviceType::from_width(0), DeviceType::Mobile);
        assert_eq!(DeviceType::from_width(767), DeviceType::Mobile);
        assert_eq!(DeviceType::from_width(768), DeviceType::Tablet);
        assert_eq!(DeviceType::from_width(1023), DeviceType::Tablet);
        assert_eq!(DeviceType::from_width(1024), DeviceType::Desktop);
        assert_eq!(DeviceType::from_width(u32::MAX), DeviceType::Desktop);
    }

    #[test]
    fn square_viewport_is_landscape() {
        assert_eq!(classify(900, 900, false).orientation, Orientation::Landscape);
    }

    #[test]
    fn default_is_untouched_full_hd_desktop() {
        let s = DeviceSnapshot::default();
        assert_eq!((s.width, s.height), (1920, 1080));
        assert!(s.is_desktop());
        assert!(!s.has_touch);
        assert_eq!(s.orientation, Orientation::Landscape);
    }

    #[test]
    fn snapshot_serializes_with_lowercase_tags() {
        let json = serde_json::to_string(&classify(500, 900, true)).unwrap();
        assert_eq!(
            json,
            r#"{"width":500,"height":900,"device_type":"mobile","orientation":"portrait","has_touch":true}"#
        );
    }

    proptest! {
        #[test]
        fn narrow_widths_are_mobile(w in 0u32..768, h in any::<u32>(), t in any::<bool>()) {
            let s = classify(w, h, t);
            prop_assert!(s.is_mobile());
            prop_assert!(!s.is_tablet() && !s.is_desktop());
        }

        #[test]
        fn middle_widths_are_tablet(w in 768u32..1024, h in any::<u32>(), t in any::<bool>()) {
            prop_assert_eq!(classify(w, h, t).device_type, DeviceType::Tablet);
        }

        #[test]
        fn wide_widths_are_desktop(w in 1024u32.., h in any::<u32>(), t in any::<bool>()) {
            prop_assert_eq!(classify(w, h, t).device_type, DeviceType::Desktop);
        }

        #[test]
        fn taller_than_wide_is_portrait(w in any::<u32>(), h in any::<u32>()) {
            let expected = if h > w { Orientation::Portrait } else { Orientation::Landscape };
            prop_assert_eq!(classify(w, h, false).orientation, expected);
        }

        #[test]
        fn one_category_at_a_time(w in any::<u32>(), h in any::<u32>(), t in any::<bool>()) {
            prop_assert!(exactly_one_category(&classify(w, h, t)));
        }

        #[test]
        fn classification_is_idempotent(w in any::<u32>(), h in any::<u32>(), t in any::<bool>()) {
            prop_assert_eq!(classify(w, h, t), classify(w, h, t));
        }
    }
}

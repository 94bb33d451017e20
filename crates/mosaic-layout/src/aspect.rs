#![forbid(unsafe_code)]

//! Aspect collection and group profiling.

use mosaic_core::media::EXTREME_RATIO;
use mosaic_core::{MediaRef, ShapeProfile};

/// Collected aspect data for one group.
#[derive(Debug, Clone, PartialEq)]
pub struct AspectSet {
    /// Per-item width/height ratios, in item order. Always finite and > 0.
    pub ratios: Vec<f64>,
    /// Shape tendency of the group.
    pub profile: ShapeProfile,
    /// Whether an extreme ratio forces the general search even for small
    /// groups; the closed forms assume moderate proportions.
    pub force_search: bool,
}

/// Derive ratios and the shape profile for a group.
pub(crate) fn collect(items: &[MediaRef]) -> AspectSet {
    let ratios: Vec<f64> = items.iter().map(MediaRef::aspect_ratio).collect();
    let force_search = ratios.iter().any(|&r| r > EXTREME_RATIO);
    let profile = ShapeProfile::from_ratios(&ratios);
    AspectSet {
        ratios,
        profile,
        force_search,
    }
}

#[cfg(test)]
mod tests {
    use super::collect;
    use mosaic_core::{MediaRef, Shape};

    #[test]
    fn ratios_follow_item_order() {
        let items = [MediaRef::new(200, 100), MediaRef::new(100, 200)];
        let set = collect(&items);
        assert_eq!(set.ratios, vec![2.0, 0.5]);
        assert_eq!(set.profile.get(0), Some(Shape::Wide));
        assert_eq!(set.profile.get(1), Some(Shape::Narrow));
    }

    #[test]
    fn extreme_ratio_forces_search() {
        let tame = [MediaRef::new(100, 100), MediaRef::new(150, 100)];
        assert!(!collect(&tame).force_search);

        let panorama = [MediaRef::new(100, 100), MediaRef::new(500, 100)];
        assert!(collect(&panorama).force_search);
    }

    #[test]
    fn ratio_of_two_is_not_extreme() {
        let items = [MediaRef::new(200, 100)];
        assert!(!collect(&items).force_search);
    }

    #[test]
    fn unknown_dimensions_default_square() {
        let items = [MediaRef::new(0, 0)];
        let set = collect(&items);
        assert_eq!(set.ratios, vec![1.0]);
        assert_eq!(set.profile.get(0), Some(Shape::Square));
    }
}

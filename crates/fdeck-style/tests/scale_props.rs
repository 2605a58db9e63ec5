//! Property tests for brand color parsing and scale derivation.

use fdeck_style::{ColorScale, Rgb, ScaleStep};
use proptest::prelude::*;

proptest! {
    #[test]
    fn hex_round_trips(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let color = Rgb::new(r, g, b);
        prop_assert_eq!(Rgb::from_hex(&color.to_hex()), Ok(color));
    }

    #[test]
    fn derive_is_deterministic(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let base = Rgb::new(r, g, b);
        prop_assert_eq!(ColorScale::derive(base), ColorScale::derive(base));
    }

    #[test]
    fn midpoint_is_identity(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let base = Rgb::new(r, g, b);
        prop_assert_eq!(ColorScale::derive(base).get(ScaleStep::S500), base);
    }

    #[test]
    fn scale_is_total(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let scale = ColorScale::derive(Rgb::new(r, g, b));
        prop_assert_eq!(scale.entries().count(), 10);
        prop_assert_eq!(scale.css_variables().len(), 10);
    }

    /// Channels never move toward white as keys ascend: every channel is
    /// monotone non-increasing from step 50 down to step 900. Equality
    /// only occurs where clamping or rounding collapses adjacent steps.
    #[test]
    fn channels_monotone_across_keys(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let scale = ColorScale::derive(Rgb::new(r, g, b));
        let mut previous: Option<Rgb> = None;
        for (_, color) in scale.entries() {
            if let Some(prev) = previous {
                prop_assert!(color.r <= prev.r);
                prop_assert!(color.g <= prev.g);
                prop_assert!(color.b <= prev.b);
            }
            previous = Some(color);
        }
    }

    /// Away from the channel bounds, the extremes are strict: the 50
    /// step is strictly lighter and the 900 step strictly darker than
    /// the brand color. Channel value 1 is excluded because 1 * 0.6
    /// rounds straight back to 1.
    #[test]
    fn extremes_are_strict_off_bounds(r in 2u8..=254, g in 2u8..=254, b in 2u8..=254) {
        let base = Rgb::new(r, g, b);
        let scale = ColorScale::derive(base);
        let light = scale.get(ScaleStep::S50);
        let dark = scale.get(ScaleStep::S900);
        prop_assert!(light.r > base.r && light.g > base.g && light.b > base.b);
        prop_assert!(dark.r < base.r && dark.g < base.g && dark.b < base.b);
    }
}

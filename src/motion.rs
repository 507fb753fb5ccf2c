//! Scroll-driven decoration for the hero section.
//!
//! Everything here is a pure function of the last observed vertical scroll
//! offset. Nothing is stored; the view recomputes the transforms whenever the
//! offset signal changes.

/// Decorative shapes whose transform follows the scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    AmberPrism,
    CyanPrism,
    CyanOrb,
    PurpleOrb,
}

impl Decoration {
    pub const ALL: [Decoration; 4] = [
        Decoration::AmberPrism,
        Decoration::CyanPrism,
        Decoration::CyanOrb,
        Decoration::PurpleOrb,
    ];

    /// CSS `transform` value at the given scroll offset.
    pub fn transform(self, scroll_y: f64) -> String {
        match self {
            Decoration::AmberPrism => format!(
                "translate3d(-50%, -50%, 0) rotate({}deg)",
                prism_angle(45.0, 0.05, scroll_y)
            ),
            Decoration::CyanPrism => format!(
                "translate3d(50%, -50%, 0) rotate({}deg)",
                prism_angle(12.0, -0.03, scroll_y)
            ),
            Decoration::CyanOrb => {
                let (x, y) = orb_offset(30.0, 20.0, 0.0, scroll_y);
                format!("translate3d({}px, {}px, 0)", x, y)
            }
            Decoration::PurpleOrb => {
                let (x, y) = orb_offset(25.0, 20.0, 1.0, scroll_y);
                format!("translate3d({}px, {}px, 0)", x, y)
            }
        }
    }
}

fn prism_angle(base: f64, rate: f64, scroll_y: f64) -> f64 {
    base + scroll_y * rate
}

/// Elliptical drift: x swings with `sin`, y with `cos`.
fn orb_offset(x_amp: f64, y_amp: f64, phase: f64, scroll_y: f64) -> (f64, f64) {
    let t = scroll_y * 0.01;
    ((t + phase).sin() * x_amp, t.cos() * y_amp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_prisms_at_rest() {
        assert_eq!(
            Decoration::AmberPrism.transform(0.0),
            "translate3d(-50%, -50%, 0) rotate(45deg)"
        );
        assert_eq!(
            Decoration::CyanPrism.transform(0.0),
            "translate3d(50%, -50%, 0) rotate(12deg)"
        );
    }

    #[test]
    fn test_prisms_rotate_in_opposite_directions() {
        assert!(close(prism_angle(45.0, 0.05, 200.0), 55.0));
        assert!(close(prism_angle(12.0, -0.03, 200.0), 6.0));
        assert_eq!(
            Decoration::AmberPrism.transform(200.0),
            "translate3d(-50%, -50%, 0) rotate(55deg)"
        );
    }

    #[test]
    fn test_orbs_at_rest() {
        let (x, y) = orb_offset(30.0, 20.0, 0.0, 0.0);
        assert!(close(x, 0.0));
        assert!(close(y, 20.0));

        let (x, y) = orb_offset(25.0, 20.0, 1.0, 0.0);
        assert!(close(x, 1f64.sin() * 25.0));
        assert!(close(y, 20.0));
    }

    #[test]
    fn test_orbs_stay_within_amplitude() {
        for step in 0..500 {
            let scroll_y = step as f64 * 37.0;
            let (x, y) = orb_offset(30.0, 20.0, 0.0, scroll_y);
            assert!(x.abs() <= 30.0 && y.abs() <= 20.0);
        }
    }

    #[test]
    fn test_every_decoration_renders() {
        for deco in Decoration::ALL {
            let css = deco.transform(123.0);
            assert!(css.starts_with("translate3d("));
        }
    }
}

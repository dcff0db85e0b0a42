//! Keeping objects inside the play area
//!
//! Despite the name, positions are clamped, not teleported to the opposite
//! edge: an object that reaches a border stops there and drops into its
//! standing pose.

use glam::Vec2;

use crate::surface::Surface;

/// The two capabilities [`wrap_position`] needs from a game object
pub trait Standable {
    /// Collision radius in pixels
    fn radius(&self) -> f32;

    /// Switch to the standing/idle visual state
    fn set_stand(&mut self);
}

/// Clamp `position` so a circle of the object's radius stays on `surface`.
///
/// Each axis is checked independently and calls [`Standable::set_stand`]
/// when it clamps, so a corner hit calls it twice. The input is not
/// modified; the clamped position is returned.
///
/// If the surface is narrower (or shorter) than the object's diameter the
/// clamp range `[r, w - r]` is inverted. The lower bound is tested first, so
/// a position below `r` comes back as `r` and one above `w - r` (but not
/// below `r`) comes back as `w - r`. No attempt is made to center it.
pub fn wrap_position<O>(position: Vec2, surface: &Surface, object: &mut O) -> Vec2
where
    O: Standable + ?Sized,
{
    let Vec2 { mut x, mut y } = position;
    let (w, h) = (surface.width() as f32, surface.height() as f32);
    let r = object.radius();

    if x < r {
        x = r;
        object.set_stand();
    } else if x > w - r {
        x = w - r;
        object.set_stand();
    }

    if y < r {
        y = r;
        object.set_stand();
    } else if y > h - r {
        y = h - r;
        object.set_stand();
    }

    Vec2::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        radius: f32,
        stands: u32,
    }

    impl Probe {
        fn new(radius: f32) -> Self {
            Self { radius, stands: 0 }
        }
    }

    impl Standable for Probe {
        fn radius(&self) -> f32 {
            self.radius
        }

        fn set_stand(&mut self) {
            self.stands += 1;
        }
    }

    #[test]
    fn test_inside_is_unchanged() {
        let screen = Surface::new(800, 600);
        let mut probe = Probe::new(20.0);
        let pos = Vec2::new(400.0, 300.0);

        assert_eq!(wrap_position(pos, &screen, &mut probe), pos);
        assert_eq!(probe.stands, 0);
    }

    #[test]
    fn test_exactly_on_bound_is_unchanged() {
        let screen = Surface::new(800, 600);
        let mut probe = Probe::new(20.0);
        let pos = Vec2::new(20.0, 580.0);

        assert_eq!(wrap_position(pos, &screen, &mut probe), pos);
        assert_eq!(probe.stands, 0);
    }

    #[test]
    fn test_left_edge_clamps_and_stands() {
        let screen = Surface::new(800, 600);
        let mut probe = Probe::new(20.0);

        let out = wrap_position(Vec2::new(-5.0, 300.0), &screen, &mut probe);
        assert_eq!(out, Vec2::new(20.0, 300.0));
        assert_eq!(probe.stands, 1);
    }

    #[test]
    fn test_bottom_edge_clamps_and_stands() {
        let screen = Surface::new(800, 600);
        let mut probe = Probe::new(20.0);

        let out = wrap_position(Vec2::new(100.0, 650.0), &screen, &mut probe);
        assert_eq!(out, Vec2::new(100.0, 580.0));
        assert_eq!(probe.stands, 1);
    }

    #[test]
    fn test_corner_stands_twice() {
        let screen = Surface::new(800, 600);
        let mut probe = Probe::new(10.0);

        let out = wrap_position(Vec2::new(900.0, -40.0), &screen, &mut probe);
        assert_eq!(out, Vec2::new(790.0, 10.0));
        assert_eq!(probe.stands, 2);
    }

    #[test]
    fn test_inverted_range_prefers_lower_bound() {
        // 10px wide, radius 8: range [8, 2] is inverted
        let screen = Surface::new(10, 100);
        let mut probe = Probe::new(8.0);

        let out = wrap_position(Vec2::new(5.0, 50.0), &screen, &mut probe);
        assert_eq!(out.x, 8.0);

        let out = wrap_position(Vec2::new(9.0, 50.0), &screen, &mut probe);
        assert_eq!(out.x, 2.0);
        assert_eq!(probe.stands, 2);
    }

    #[test]
    fn test_works_through_trait_object() {
        let screen = Surface::new(50, 50);
        let mut probe = Probe::new(5.0);
        let object: &mut dyn Standable = &mut probe;

        let out = wrap_position(Vec2::new(60.0, 25.0), &screen, object);
        assert_eq!(out, Vec2::new(45.0, 25.0));
        assert_eq!(probe.stands, 1);
    }
}

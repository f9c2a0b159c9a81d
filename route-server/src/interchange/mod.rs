//! Interchange detection between lines.
//!
//! Lines meet where their station records sit close enough together to
//! change on foot. There is no explicit interchange relation in the data;
//! the policy here decides from geometry alone whether two records on
//! different lines form an interchange.

use crate::domain::Position;

/// Default interchange radius: 200 metres.
pub const DEFAULT_TRANSFER_RADIUS_KM: f64 = 0.2;

/// Decides whether two positions are close enough to change lines.
///
/// Implementations must be symmetric: `is_interchange(a, b)` must equal
/// `is_interchange(b, a)`. The graph builder relies on this to add
/// transfer edges in both directions.
pub trait InterchangePolicy {
    fn is_interchange(&self, a: Position, b: Position) -> bool;
}

/// Interchange when two positions are within a fixed great-circle radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WithinRadius {
    radius_km: f64,
}

impl WithinRadius {
    /// Create a policy with the given radius in kilometres.
    ///
    /// Negative or non-finite radii are clamped to zero, which only
    /// matches coincident positions.
    pub fn new(radius_km: f64) -> Self {
        let radius_km = if radius_km.is_finite() && radius_km > 0.0 {
            radius_km
        } else {
            0.0
        };
        Self { radius_km }
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }
}

impl Default for WithinRadius {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSFER_RADIUS_KM)
    }
}

impl InterchangePolicy for WithinRadius {
    fn is_interchange(&self, a: Position, b: Position) -> bool {
        a.distance_km(&b) <= self.radius_km
    }
}

/// Any symmetric predicate over two positions can act as a policy.
impl<F> InterchangePolicy for F
where
    F: Fn(Position, Position) -> bool,
{
    fn is_interchange(&self, a: Position, b: Position) -> bool {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(lon: f64, lat: f64) -> Position {
        Position::new(lon, lat).unwrap()
    }

    // 0.001 degrees of latitude is ~111 m
    const NEAR: f64 = 0.001;
    // 0.003 degrees of latitude is ~334 m
    const FAR: f64 = 0.003;

    #[test]
    fn default_radius() {
        assert_eq!(WithinRadius::default().radius_km(), 0.2);
    }

    #[test]
    fn coincident_positions_interchange() {
        let p = pos(29.0, 41.0);
        assert!(WithinRadius::default().is_interchange(p, p));
        assert!(WithinRadius::new(0.0).is_interchange(p, p));
    }

    #[test]
    fn near_and_far() {
        let policy = WithinRadius::default();
        let a = pos(29.0, 41.0);

        assert!(policy.is_interchange(a, pos(29.0, 41.0 + NEAR)));
        assert!(!policy.is_interchange(a, pos(29.0, 41.0 + FAR)));
    }

    #[test]
    fn symmetric() {
        let policy = WithinRadius::default();
        let a = pos(29.0, 41.0);
        let b = pos(29.0, 41.0 + NEAR);
        assert_eq!(policy.is_interchange(a, b), policy.is_interchange(b, a));
    }

    #[test]
    fn invalid_radius_clamped() {
        assert_eq!(WithinRadius::new(-1.0).radius_km(), 0.0);
        assert_eq!(WithinRadius::new(f64::NAN).radius_km(), 0.0);
    }

    #[test]
    fn closure_policy() {
        let never = |_: Position, _: Position| false;
        let p = pos(29.0, 41.0);
        assert!(!never.is_interchange(p, p));
    }
}

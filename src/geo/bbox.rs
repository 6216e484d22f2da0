//! Rectangular lat/lon boxes and ordered first-match rule tables.

use crate::types::Coordinate;

/// Inclusive latitude/longitude rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    pub const fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Self {
        Self {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        }
    }

    pub fn contains(&self, coord: &Coordinate) -> bool {
        (self.lat_min..=self.lat_max).contains(&coord.latitude)
            && (self.lon_min..=self.lon_max).contains(&coord.longitude)
    }
}

/// Whether any box in the set contains the coordinate.
pub fn any_contains(boxes: &[BoundingBox], coord: &Coordinate) -> bool {
    boxes.iter().any(|b| b.contains(coord))
}

/// One row of an ordered classification table.
#[derive(Debug, Clone, Copy)]
pub struct Rule<T: 'static> {
    pub result: T,
    pub boxes: &'static [BoundingBox],
}

/// Evaluate rules top to bottom; the first rule with a matching box wins.
pub fn first_match<T: Copy>(rules: &[Rule<T>], coord: &Coordinate, default: T) -> T {
    rules
        .iter()
        .find(|rule| any_contains(rule.boxes, coord))
        .map_or(default, |rule| rule.result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: &[BoundingBox] = &[BoundingBox::new(0.0, 10.0, 0.0, 10.0)];
    const B: &[BoundingBox] = &[BoundingBox::new(5.0, 15.0, 5.0, 15.0)];

    fn c(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn bounds_are_inclusive() {
        let b = BoundingBox::new(0.0, 10.0, 0.0, 10.0);
        assert!(b.contains(&c(0.0, 0.0)));
        assert!(b.contains(&c(10.0, 10.0)));
        assert!(!b.contains(&c(10.01, 5.0)));
    }

    #[test]
    fn precedence_resolves_overlap() {
        let rules = [Rule { result: 'a', boxes: A }, Rule { result: 'b', boxes: B }];
        assert_eq!(first_match(&rules, &c(7.0, 7.0), 'z'), 'a');

        let reversed = [Rule { result: 'b', boxes: B }, Rule { result: 'a', boxes: A }];
        assert_eq!(first_match(&reversed, &c(7.0, 7.0), 'z'), 'b');
    }

    #[test]
    fn falls_back_to_default() {
        let rules = [Rule { result: 'a', boxes: A }];
        assert_eq!(first_match(&rules, &c(50.0, 50.0), 'z'), 'z');
    }
}

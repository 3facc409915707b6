use crate::geo::haversine::haversine_distance_meters;
use crate::model::unit::{Cost, WALKING_SPEED_MPS};

/// `h(n, goal) = haversine(n.coord, goal) / WALKING_SPEED_MPS`. Admissible
/// because walking is never faster than riding transit, and consistent because
/// haversine distance obeys the triangle inequality on the sphere.
pub fn heuristic(node_coord: (f64, f64), goal_coord: (f64, f64)) -> Cost {
    let seconds = haversine_distance_meters(node_coord, goal_coord).as_f64() / WALKING_SPEED_MPS;
    Cost::new(seconds.round() as u64)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_at_the_goal() {
        assert_eq!(heuristic((1.0, 2.0), (1.0, 2.0)), Cost::ZERO);
    }

    #[test]
    fn grows_with_distance() {
        let near = heuristic((0.0, 0.0), (0.0, 0.01));
        let far = heuristic((0.0, 0.0), (0.0, 0.1));
        assert!(far > near);
    }
}

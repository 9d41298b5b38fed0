use trekgrid_core::Resources;

/// Blended cost of moving from `current` to `prospective` resources.
///
/// Each resource contributes the whole percentage of its current reserve
/// that the step consumes, `floor((1 - prospective / max(1, current)) * 100)`,
/// and the two percentages are summed. The arithmetic is done in `f64` and
/// floored, so `(100, 100) -> (90, 90)` costs `9 + 9 = 18`, not `20`.
///
/// A reserve of zero is treated as one, which makes any step from an empty
/// reserve very expensive instead of dividing by zero.
pub fn relative_cost(current: Resources, prospective: Resources) -> i32 {
    percent_spent(current.health, prospective.health)
        + percent_spent(current.moves, prospective.moves)
}

#[inline]
fn percent_spent(current: i32, prospective: i32) -> i32 {
    let fraction = 1.0 - f64::from(prospective) / f64::from(current.max(1));
    (fraction * 100.0).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(health: i32, moves: i32) -> Resources {
        Resources::new(health, moves)
    }

    #[test]
    fn ten_percent_each_floors_to_eighteen() {
        assert_eq!(relative_cost(r(100, 100), r(90, 90)), 18);
    }

    #[test]
    fn halving_is_scale_invariant() {
        let a = relative_cost(r(100, 100), r(50, 50));
        let b = relative_cost(r(50, 50), r(25, 25));
        let c = relative_cost(r(4, 4), r(2, 2));
        assert_eq!(a, 100);
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn neutral_step_is_free() {
        assert_eq!(relative_cost(r(200, 450), r(200, 450)), 0);
    }

    #[test]
    fn plain_step_from_standard_budget() {
        // 1 - 449/450 = 0.00222.. -> 0 whole percent
        assert_eq!(relative_cost(r(200, 450), r(200, 449)), 0);
        // 1 - 150/200 = 0.25 and 1 - 440/450 = 0.0222..
        assert_eq!(relative_cost(r(200, 450), r(150, 440)), 27);
    }

    #[test]
    fn empty_reserve_is_clamped() {
        // moves 0 -> 0 counts as spending the whole clamped reserve
        assert_eq!(relative_cost(r(10, 0), r(5, 0)), 50 + 100);
    }
}

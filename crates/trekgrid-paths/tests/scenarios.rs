//! End-to-end routes on small hand-made grids.

use trekgrid_core::{Budget, Coord, Resources, TileGrid};
use trekgrid_paths::{SearchError, find_path};

fn grid(rows: &[&str]) -> TileGrid {
    TileGrid::from_rows(rows).unwrap()
}

fn path(v: &[(i32, i32)]) -> Vec<Coord> {
    v.iter().copied().map(Coord::from).collect()
}

#[test]
fn simple_avoidable_hazard() {
    let route = find_path(&grid(&["AE", "LB"]), Budget::new(200, 450))
        .unwrap()
        .unwrap();
    assert_eq!(route.path, path(&[(0, 0), (0, 1), (1, 1)]));
    assert_eq!(route.resources, Resources::new(200, 448));
}

#[test]
fn no_path_when_hazards_exhaust_health() {
    let result = find_path(&grid(&["AL", "LB"]), Budget::new(1, 450));
    assert_eq!(result, Ok(None));
}

#[test]
fn no_path_when_moves_run_out() {
    let result = find_path(&grid(&["AL", "LB"]), Budget::new(200, 1));
    assert_eq!(result, Ok(None));
}

#[test]
fn hazard_shortcut_when_detour_exhausts_moves() {
    let route = find_path(&grid(&["ALB", "MMM"]), Budget::new(200, 11))
        .unwrap()
        .unwrap();
    assert_eq!(route.path, path(&[(0, 0), (0, 1), (0, 2)]));
    assert_eq!(route.resources, Resources::new(150, 0));
}

#[test]
fn long_way_round_when_hazard_exhausts_health() {
    let route = find_path(&grid(&["ALB", "EEE"]), Budget::new(50, 450))
        .unwrap()
        .unwrap();
    assert_eq!(
        route.path,
        path(&[(0, 0), (1, 0), (1, 1), (1, 2), (0, 2)])
    );
    assert_eq!(route.resources, Resources::new(50, 446));
}

#[test]
fn speeder_when_moves_are_short() {
    let route = find_path(&grid(&["AEE", "ESE", "EEB"]), Budget::new(10, 3))
        .unwrap()
        .unwrap();
    assert_eq!(
        route.path,
        path(&[(0, 0), (0, 1), (1, 1), (1, 2), (2, 2)])
    );
    assert_eq!(route.resources, Resources::new(5, 0));
}

#[test]
fn free_steps_tie_break_on_position() {
    // With a full budget every plain step floors to zero cost, so equal
    // scores are resolved by coordinate and the walk hugs the top row.
    let route = find_path(&grid(&["EEE", "BEA"]), Budget::STANDARD)
        .unwrap()
        .unwrap();
    assert_eq!(route.path, path(&[(1, 2), (0, 2), (0, 1), (0, 0), (1, 0)]));
    assert_eq!(route.resources, Resources::new(200, 446));
}

#[test]
fn structural_failure_precedes_exhaustion() {
    // even with nothing to spend, a missing goal is reported as such
    let result = find_path(&grid(&["AL", "LE"]), Budget::new(1, 0));
    assert_eq!(result, Err(SearchError::MissingGoal));
}

#[test]
fn mixed_terrain_route() {
    let g = grid(&[
        "AESEMEE", "EMLEESE", "SEEMEEL", "EELESEE", "MEESELB",
    ]);
    let route = find_path(&g, Budget::new(120, 40)).unwrap().unwrap();
    assert_eq!(
        route.path,
        path(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (0, 3),
            (1, 3),
            (1, 4),
            (2, 4),
            (2, 5),
            (3, 5),
            (3, 6),
            (4, 6),
        ])
    );
    assert_eq!(route.resources, Resources::new(115, 31));

    for _ in 0..5 {
        assert_eq!(find_path(&g, Budget::new(120, 40)).unwrap(), Some(route.clone()));
    }
}

#[test]
fn superseded_entries_do_not_leak_resources() {
    // (2, 1) is queued from (1, 1), then improved from (2, 0); the stale
    // entry must not decide the resources carried to the goal
    let g = grid(&["ALEES", "MELSM", "SESEE", "EEEEB"]);
    let route = find_path(&g, Budget::new(114, 26)).unwrap().unwrap();
    assert_eq!(
        route.path,
        path(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (2, 3), (2, 4), (3, 4)])
    );
    assert_eq!(route.resources, Resources::new(94, 17));
}

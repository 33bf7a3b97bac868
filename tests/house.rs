use glam::Vec2;
use pacman_core::{
    constants::GHOST_HOUSE_SPEED,
    entity::{
        ghost::{Elroy, Ghost, GhostId, GhostState},
        Actor,
    },
    map::{direction::Direction, world::Layout},
    systems::house::{self, GhostHouse, ReleaseReason},
};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

fn ghosts() -> [Ghost; 4] {
    let layout = Layout::arcade();
    GhostId::ALL.map(|id| Ghost::new(id, &layout))
}

fn eat(house: &mut GhostHouse, ghosts: &[Ghost; 4], count: u32) {
    for _ in 0..count {
        house.on_food_eaten(ghosts);
    }
}

#[test]
fn test_only_blinky_starts_outside() {
    let ghosts = ghosts();
    assert_eq!(ghosts[GhostId::Blinky.index()].state, GhostState::Hunting);
    for id in [GhostId::Pinky, GhostId::Inky, GhostId::Clyde] {
        assert_eq!(ghosts[id.index()].state, GhostState::Locked);
    }
    assert_eq!(GhostHouse::next_locked(&ghosts), Some(GhostId::Pinky));
}

#[test]
fn test_private_counters_on_level_one() {
    let mut ghosts = ghosts();
    let mut house = GhostHouse::default();

    assert_eq!(
        house.release_check(&ghosts, 1, 0),
        Some((GhostId::Pinky, ReleaseReason::PrivateDotCounter { count: 0, limit: 0 }))
    );
    house::release_ghost(&mut ghosts, GhostId::Pinky);
    assert_eq!(ghosts[GhostId::Pinky.index()].state, GhostState::LeavingHouse);

    eat(&mut house, &ghosts, 29);
    assert_eq!(house.release_check(&ghosts, 1, 0), None);
    eat(&mut house, &ghosts, 1);
    assert_eq!(
        house.release_check(&ghosts, 1, 0),
        Some((GhostId::Inky, ReleaseReason::PrivateDotCounter { count: 30, limit: 30 }))
    );
    house::release_ghost(&mut ghosts, GhostId::Inky);

    // Food eaten while Inky was next did not count for Clyde.
    assert_eq!(house.dot_counter(GhostId::Clyde), 0);
    eat(&mut house, &ghosts, 59);
    assert_eq!(house.release_check(&ghosts, 1, 0), None);
    eat(&mut house, &ghosts, 1);
    assert_eq!(
        house.release_check(&ghosts, 1, 0),
        Some((GhostId::Clyde, ReleaseReason::PrivateDotCounter { count: 60, limit: 60 }))
    );
    house::release_ghost(&mut ghosts, GhostId::Clyde);
    assert_eq!(house.release_check(&ghosts, 1, 0), None);
}

#[test]
fn test_later_levels_release_sooner() {
    let mut ghosts = ghosts();
    let house = GhostHouse::default();

    house::release_ghost(&mut ghosts, GhostId::Pinky);
    assert_eq!(
        house.release_check(&ghosts, 2, 0),
        Some((GhostId::Inky, ReleaseReason::PrivateDotCounter { count: 0, limit: 0 }))
    );
    house::release_ghost(&mut ghosts, GhostId::Inky);
    assert_eq!(house.release_check(&ghosts, 2, 0), None);
    assert_eq!(
        house.release_check(&ghosts, 3, 0),
        Some((GhostId::Clyde, ReleaseReason::PrivateDotCounter { count: 0, limit: 0 }))
    );
}

#[test]
fn test_global_counter_after_death() {
    let mut ghosts = ghosts();
    let mut house = GhostHouse::default();
    house.enable_global_counter();
    assert_eq!(house.global_dot_counter(), Some(0));

    eat(&mut house, &ghosts, 6);
    assert_eq!(house.release_check(&ghosts, 1, 0), None);
    eat(&mut house, &ghosts, 1);
    assert_eq!(
        house.release_check(&ghosts, 1, 0),
        Some((GhostId::Pinky, ReleaseReason::GlobalDotCounter { count: 7, limit: 7 }))
    );
    house::release_ghost(&mut ghosts, GhostId::Pinky);

    eat(&mut house, &ghosts, 10);
    assert_eq!(
        house.release_check(&ghosts, 1, 0),
        Some((GhostId::Inky, ReleaseReason::GlobalDotCounter { count: 17, limit: 17 }))
    );
    house::release_ghost(&mut ghosts, GhostId::Inky);

    // Clyde never leaves on the global counter, which gives up at 32.
    eat(&mut house, &ghosts, 14);
    assert_eq!(house.global_dot_counter(), Some(31));
    assert_eq!(house.release_check(&ghosts, 1, 0), None);
    eat(&mut house, &ghosts, 1);
    assert_eq!(house.global_dot_counter(), None);

    // Back on the private counter, which did not move meanwhile.
    assert_eq!(house.dot_counter(GhostId::Clyde), 0);
    eat(&mut house, &ghosts, 60);
    assert_eq!(
        house.release_check(&ghosts, 1, 0),
        Some((GhostId::Clyde, ReleaseReason::PrivateDotCounter { count: 60, limit: 60 }))
    );
}

#[test]
fn test_level_reset_disables_global_counter() {
    let mut house = GhostHouse::default();
    house.enable_global_counter();
    house.reset_for_level();
    assert_eq!(house.global_dot_counter(), None);
    assert_eq!(house.dot_counter(GhostId::Inky), 0);
}

#[test]
fn test_starving_pac_releases_next_ghost() {
    let mut ghosts = ghosts();
    let house = GhostHouse::default();
    house::release_ghost(&mut ghosts, GhostId::Pinky);

    assert_eq!(house.release_check(&ghosts, 1, 239), None);
    assert_eq!(
        house.release_check(&ghosts, 1, 240),
        Some((GhostId::Inky, ReleaseReason::Starving { ticks: 240, limit: 240 }))
    );
    assert_eq!(house::starving_limit(4), 240);
    assert_eq!(house::starving_limit(5), 180);
}

#[test]
fn test_releasing_clyde_resumes_elroy() {
    let mut ghosts = ghosts();
    ghosts[GhostId::Blinky.index()].elroy = Elroy::Suspended(2);

    house::release_ghost(&mut ghosts, GhostId::Pinky);
    house::release_ghost(&mut ghosts, GhostId::Inky);
    assert_eq!(ghosts[GhostId::Blinky.index()].elroy, Elroy::Suspended(2));

    house::release_ghost(&mut ghosts, GhostId::Clyde);
    assert_eq!(ghosts[GhostId::Blinky.index()].elroy, Elroy::Active(2));
    assert_eq!(ghosts[GhostId::Blinky.index()].elroy.level(), 2);
}

#[test]
fn test_bounce_stays_near_seat() {
    let seat = Vec2::new(96.0, 140.0);
    let mut actor = Actor::new(seat, Direction::Up);

    let mut lowest = seat.y;
    let mut highest = seat.y;
    for _ in 0..200 {
        house::bounce(&mut actor, seat);
        lowest = lowest.min(actor.position.y);
        highest = highest.max(actor.position.y);
        assert_eq!(actor.position.x, seat.x);
    }
    assert_that(&(lowest < seat.y)).is_true();
    assert_that(&(highest > seat.y)).is_true();
    assert_that(&(seat.y - lowest <= 5.0)).is_true();
    assert_that(&(highest - seat.y <= 5.0)).is_true();
}

#[test]
fn test_enter_walks_down_then_across() {
    let entry = Vec2::new(112.0, 116.0);
    let seat = Vec2::new(128.0, 140.0);
    let mut actor = Actor::new(entry, Direction::Down);

    let mut ticks = 0;
    while !house::enter(&mut actor, seat) {
        if actor.position.y < seat.y {
            assert_eq!(actor.position.x, entry.x);
            assert_eq!(actor.direction, Direction::Down);
        }
        assert_eq!(actor.speed, GHOST_HOUSE_SPEED);
        ticks += 1;
        assert_that(&ticks).is_less_than(100);
    }
    assert_eq!(actor.position, seat);
    // 24 pixels down and 16 across at 0.625 pixels per tick.
    assert_eq!(ticks, 39 + 25);
}

use glam::{IVec2, Vec2};
use pacman_core::{
    constants::BASE_SPEED,
    entity::Actor,
    map::{
        direction::Direction,
        world::{tile_center, TraversalFlags, World},
    },
    systems::movement::{move_actor, try_move},
};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

fn actor_at(tile: IVec2, offset: Vec2, direction: Direction) -> Actor {
    let mut actor = Actor::new(tile_center(tile) + offset, direction);
    actor.speed = 1.0;
    actor.forced_on_track = true;
    actor
}

#[test]
fn test_move_along_corridor() {
    let world = World::arcade().unwrap();
    let mut actor = actor_at(IVec2::new(14, 26), Vec2::new(-4.0, 0.0), Direction::Left);

    assert_that(&try_move(&mut actor, Direction::Left, &world, TraversalFlags::PACMAN)).is_true();
    assert_eq!(actor.position, Vec2::new(112.0 - BASE_SPEED, 212.0));
    assert_eq!(actor.tile(), IVec2::new(13, 26));
    assert_that(&actor.changed_tile).is_true();

    assert_that(&try_move(&mut actor, Direction::Left, &world, TraversalFlags::PACMAN)).is_true();
    assert_that(&actor.changed_tile).is_false();
}

#[test]
fn test_stop_at_wall_center() {
    let world = World::arcade().unwrap();
    let tile = IVec2::new(1, 4);
    let mut actor = actor_at(tile, Vec2::new(0.5, 0.0), Direction::Left);

    assert_that(&try_move(&mut actor, Direction::Left, &world, TraversalFlags::PACMAN)).is_false();
    assert_eq!(actor.position, tile_center(tile));

    // Already centered: nothing changes.
    assert_that(&try_move(&mut actor, Direction::Left, &world, TraversalFlags::PACMAN)).is_false();
    assert_eq!(actor.position, tile_center(tile));
}

#[test]
fn test_approach_wall_until_center() {
    let world = World::arcade().unwrap();
    let tile = IVec2::new(1, 4);
    let mut actor = actor_at(tile, Vec2::new(3.0, 0.0), Direction::Left);

    assert_that(&try_move(&mut actor, Direction::Left, &world, TraversalFlags::PACMAN)).is_true();
    assert_eq!(actor.offset(), Vec2::new(3.0 - BASE_SPEED, 0.0));
}

#[test]
fn test_turn_needs_to_be_near_center() {
    let world = World::arcade().unwrap();
    let tile = IVec2::new(6, 8);

    let mut far = actor_at(tile, Vec2::new(3.0, 0.0), Direction::Left);
    assert_that(&try_move(&mut far, Direction::Up, &world, TraversalFlags::PACMAN)).is_false();
    assert_eq!(far.offset(), Vec2::new(3.0, 0.0));

    let mut near = actor_at(tile, Vec2::new(1.0, 0.0), Direction::Left);
    assert_that(&try_move(&mut near, Direction::Up, &world, TraversalFlags::PACMAN)).is_true();
    assert_eq!(near.offset(), Vec2::new(0.0, -BASE_SPEED));
}

#[test]
fn test_portal_teleport() {
    let world = World::arcade().unwrap();

    let mut actor = actor_at(IVec2::new(28, 17), Vec2::ZERO, Direction::Right);
    assert_that(&try_move(&mut actor, Direction::Right, &world, TraversalFlags::PACMAN)).is_true();
    assert_eq!(actor.tile(), IVec2::new(-1, 17));
    assert_eq!(actor.offset(), Vec2::ZERO);
    assert_that(&actor.changed_tile).is_true();

    let mut actor = actor_at(IVec2::new(-1, 17), Vec2::ZERO, Direction::Left);
    assert_that(&try_move(&mut actor, Direction::Left, &world, TraversalFlags::GHOST)).is_true();
    assert_eq!(actor.tile(), IVec2::new(28, 17));
}

#[test]
fn test_door_blocks_pac() {
    let world = World::arcade().unwrap();
    let entry = IVec2::new(14, 14);

    let mut pac = actor_at(entry, Vec2::ZERO, Direction::Down);
    assert_that(&try_move(&mut pac, Direction::Down, &world, TraversalFlags::PACMAN)).is_false();
    assert_eq!(pac.tile(), entry);

    let mut ghost = actor_at(entry, Vec2::new(0.0, 3.5), Direction::Down);
    assert_that(&try_move(&mut ghost, Direction::Down, &world, TraversalFlags::GHOST | TraversalFlags::DOOR)).is_true();
    assert_eq!(ghost.tile(), IVec2::new(14, 15));
}

#[test]
fn test_move_actor_keeps_direction_until_wish_is_possible() {
    let world = World::arcade().unwrap();
    let mut actor = actor_at(IVec2::new(3, 8), Vec2::ZERO, Direction::Right);
    actor.wish_direction = Direction::Up;

    move_actor(&mut actor, &world, TraversalFlags::PACMAN);
    assert_eq!(actor.direction, Direction::Right);
    assert_eq!(actor.wish_direction, Direction::Up);
    assert_eq!(actor.position, tile_center(IVec2::new(3, 8)) + Vec2::new(BASE_SPEED, 0.0));
    assert_that(&actor.could_move).is_true();

    // Column 6 leads up.
    for _ in 0..40 {
        move_actor(&mut actor, &world, TraversalFlags::PACMAN);
        if actor.direction == Direction::Up {
            break;
        }
    }
    assert_eq!(actor.direction, Direction::Up);
    assert_eq!(actor.tile().x, 6);
}

#[test]
fn test_move_actor_reports_being_stuck() {
    let world = World::arcade().unwrap();
    let mut actor = actor_at(IVec2::new(1, 4), Vec2::ZERO, Direction::Left);
    actor.wish_direction = Direction::Up;

    move_actor(&mut actor, &world, TraversalFlags::PACMAN);
    assert_that(&actor.could_move).is_false();
    assert_eq!(actor.position, tile_center(IVec2::new(1, 4)));
}

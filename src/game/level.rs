//! Per-level parameters of the arcade game.

use crate::entity::bonus::FruitKind;

/// Everything that changes from one level to the next. Speeds are fractions of the base speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
    pub number: u32,
    pub bonus: FruitKind,
    pub pac_speed: f32,
    /// Pac's speed while on a tile with food.
    pub pac_speed_eating: f32,
    pub ghost_speed: f32,
    pub ghost_speed_tunnel: f32,
    /// Food remaining when Elroy 1 kicks in.
    pub elroy1_dots_left: u32,
    pub elroy1_speed: f32,
    pub elroy2_dots_left: u32,
    pub elroy2_speed: f32,
    pub pac_speed_powered: f32,
    pub pac_speed_powered_eating: f32,
    pub ghost_speed_frightened: f32,
    pub frightened_seconds: u32,
    pub maze_flashes: u32,
}

type Row = (FruitKind, u8, u8, u8, u8, u32, u8, u32, u8, u8, u8, u8, u32, u32);

#[rustfmt::skip]
const LEVELS: [Row; 21] = [
    /*  1 */ (FruitKind::Cherry,      80, 71, 75, 40,  20,  80, 10,  85,  90, 79, 50, 6, 5),
    /*  2 */ (FruitKind::Strawberry,  90, 79, 85, 45,  30,  90, 15,  95,  95, 83, 55, 5, 5),
    /*  3 */ (FruitKind::Orange,      90, 79, 85, 45,  40,  90, 20,  95,  95, 83, 55, 4, 5),
    /*  4 */ (FruitKind::Orange,      90, 79, 85, 45,  40,  90, 20,  95,  95, 83, 55, 3, 5),
    /*  5 */ (FruitKind::Apple,      100, 87, 95, 50,  40, 100, 20, 105, 100, 87, 60, 2, 5),
    /*  6 */ (FruitKind::Apple,      100, 87, 95, 50,  50, 100, 25, 105, 100, 87, 60, 5, 5),
    /*  7 */ (FruitKind::Melon,      100, 87, 95, 50,  50, 100, 25, 105, 100, 87, 60, 2, 5),
    /*  8 */ (FruitKind::Melon,      100, 87, 95, 50,  50, 100, 25, 105, 100, 87, 60, 2, 5),
    /*  9 */ (FruitKind::Galaxian,   100, 87, 95, 50,  60, 100, 30, 105, 100, 87, 60, 1, 3),
    /* 10 */ (FruitKind::Galaxian,   100, 87, 95, 50,  60, 100, 30, 105, 100, 87, 60, 5, 5),
    /* 11 */ (FruitKind::Bell,       100, 87, 95, 50,  60, 100, 30, 105, 100, 87, 60, 2, 5),
    /* 12 */ (FruitKind::Bell,       100, 87, 95, 50,  80, 100, 40, 105, 100, 87, 60, 1, 3),
    /* 13 */ (FruitKind::Key,        100, 87, 95, 50,  80, 100, 40, 105, 100, 87, 60, 1, 3),
    /* 14 */ (FruitKind::Key,        100, 87, 95, 50,  80, 100, 40, 105, 100, 87, 60, 3, 5),
    /* 15 */ (FruitKind::Key,        100, 87, 95, 50, 100, 100, 50, 105, 100, 87, 60, 1, 3),
    /* 16 */ (FruitKind::Key,        100, 87, 95, 50, 100, 100, 50, 105, 100, 87, 60, 1, 3),
    /* 17 */ (FruitKind::Key,        100, 87, 95, 50, 100, 100, 50, 105,   0,  0,  0, 0, 0),
    /* 18 */ (FruitKind::Key,        100, 87, 95, 50, 100, 100, 50, 105, 100, 87, 60, 1, 3),
    /* 19 */ (FruitKind::Key,        100, 87, 95, 50, 120, 100, 60, 105,   0,  0,  0, 0, 0),
    /* 20 */ (FruitKind::Key,        100, 87, 95, 50, 120, 100, 60, 105,   0,  0,  0, 0, 0),
    /* 21 */ (FruitKind::Key,         90, 79, 95, 50, 120, 100, 60, 105,   0,  0,  0, 0, 0),
];

fn percent(value: u8) -> f32 {
    f32::from(value) / 100.0
}

impl Level {
    /// Looks up a level. Numbers past the end of the table reuse its last row; zero is treated as one.
    pub fn for_number(number: u32) -> Self {
        let number = number.max(1);
        let index = (number as usize - 1).min(LEVELS.len() - 1);
        let (
            bonus,
            pac_speed,
            pac_speed_eating,
            ghost_speed,
            ghost_speed_tunnel,
            elroy1_dots_left,
            elroy1_speed,
            elroy2_dots_left,
            elroy2_speed,
            pac_speed_powered,
            pac_speed_powered_eating,
            ghost_speed_frightened,
            frightened_seconds,
            maze_flashes,
        ) = LEVELS[index];

        Self {
            number,
            bonus,
            pac_speed: percent(pac_speed),
            pac_speed_eating: percent(pac_speed_eating),
            ghost_speed: percent(ghost_speed),
            ghost_speed_tunnel: percent(ghost_speed_tunnel),
            elroy1_dots_left,
            elroy1_speed: percent(elroy1_speed),
            elroy2_dots_left,
            elroy2_speed: percent(elroy2_speed),
            pac_speed_powered: percent(pac_speed_powered),
            pac_speed_powered_eating: percent(pac_speed_powered_eating),
            ghost_speed_frightened: percent(ghost_speed_frightened),
            frightened_seconds,
            maze_flashes,
        }
    }

    pub fn bonus_points(&self) -> u32 {
        self.bonus.get_score()
    }
}

use strum_macros::{AsRefStr, Display};

/// The fruit (or other symbol) offered as a bonus on a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum FruitKind {
    Cherry,
    Strawberry,
    Orange,
    Apple,
    Melon,
    Galaxian,
    Bell,
    Key,
}

impl FruitKind {
    pub fn get_score(self) -> u32 {
        match self {
            FruitKind::Cherry => 100,
            FruitKind::Strawberry => 300,
            FruitKind::Orange => 500,
            FruitKind::Apple => 700,
            FruitKind::Melon => 1000,
            FruitKind::Galaxian => 2000,
            FruitKind::Bell => 3000,
            FruitKind::Key => 5000,
        }
    }
}

/// The bonus spot below the ghost house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bonus {
    #[default]
    Inactive,
    Edible {
        kind: FruitKind,
        remaining_ticks: u32,
    },
    /// Showing the points just earned.
    Eaten {
        kind: FruitKind,
        remaining_ticks: u32,
    },
}

impl Bonus {
    pub fn is_edible(&self) -> bool {
        matches!(self, Bonus::Edible { .. })
    }
}

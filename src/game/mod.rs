//! The game session: owns every piece of simulation state and runs the top-level state machine.

pub mod facts;
pub mod level;
pub mod score;
pub mod state;

use glam::IVec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;
use tracing::{debug, info, trace, warn};

use crate::config::GameConfig;
use crate::constants::{
    seconds, ALL_GHOSTS_KILLED_COUNT, ALL_GHOSTS_KILLED_POINTS, BONUS_EATEN_SECONDS, BONUS_EDIBLE_SECONDS,
    BONUS_FOOD_COUNTS, ENERGIZER_POINTS, ENERGIZER_REST_TICKS, FIRST_GHOST_BOUNTY, PELLET_POINTS, PELLET_REST_TICKS,
    POWER_FADING_TICKS, TICKS_PER_SECOND,
};
use crate::entity::bonus::Bonus;
use crate::entity::ghost::{Elroy, Ghost, GhostId, GhostState};
use crate::entity::pacman::Pac;
use crate::error::{GameError, GameResult};
use crate::events::{GameCommand, TickInput};
use crate::map::world::{tile_of, World};
use crate::systems::ghost::{update_ghost, GhostContext};
use crate::systems::house::{self, GhostHouse, ReleaseReason};
use crate::systems::hunting::HuntingTimer;
use crate::systems::movement::move_actor;

use self::facts::{FactFlags, FrameFacts};
use self::level::Level;
use self::score::{HighScore, HighScoreStore, MemoryHighScoreStore, Score};
use self::state::{Countdown, GameState};

/// One game session.
///
/// Everything the simulation touches lives here and is passed explicitly to the
/// systems. [`Game::advance`] is the only way time moves forward.
pub struct Game {
    config: GameConfig,
    pub world: World,
    pub level: Level,
    pub pac: Pac,
    /// Indexed by [`GhostId::index`].
    pub ghosts: [Ghost; 4],
    pub hunting: HuntingTimer,
    pub house: GhostHouse,
    pub bonus: Bonus,
    pub score: Score,
    high_score: HighScore,
    high_score_dirty: bool,
    store: Box<dyn HighScoreStore>,
    state: GameState,
    countdown: Countdown,
    /// State to go back to once a ghost has finished dying.
    resume_state: GameState,
    ghost_bounty: u32,
    ghosts_killed_in_level: u32,
    game_just_started: bool,
    rng: SmallRng,
    tick: u64,
}

impl Game {
    /// Creates a session sitting in the intro, with an in-memory high score.
    pub fn new(world: World, config: GameConfig) -> GameResult<Self> {
        Self::with_store(world, config, Box::new(MemoryHighScoreStore::default()))
    }

    /// Creates a session loading and saving its high score through `store`.
    pub fn with_store(world: World, config: GameConfig, store: Box<dyn HighScoreStore>) -> GameResult<Self> {
        if config.initial_lives == 0 {
            return Err(GameError::InvalidState("a game needs at least one life".into()));
        }

        let high_score = store.load().unwrap_or_else(|error| {
            warn!(%error, "Could not load high score");
            HighScore::default()
        });

        let layout = world.layout();
        let pac = Pac::new(layout.pac_start, layout.pac_start_direction);
        let ghosts = GhostId::ALL.map(|id| Ghost::new(id, layout));

        Ok(Self {
            level: Level::for_number(config.start_level),
            score: Score::new(config.initial_lives, config.extra_life_score),
            rng: SmallRng::seed_from_u64(config.seed),
            config,
            world,
            pac,
            ghosts,
            hunting: HuntingTimer::default(),
            house: GhostHouse::default(),
            bonus: Bonus::Inactive,
            high_score,
            high_score_dirty: false,
            store,
            state: GameState::Intro,
            countdown: Countdown::Indefinite,
            resume_state: GameState::Hunting,
            ghost_bounty: FIRST_GHOST_BOUNTY,
            ghosts_killed_in_level: 0,
            game_just_started: false,
            tick: 0,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn countdown(&self) -> Countdown {
        self.countdown
    }

    /// Number of ticks simulated so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn high_score(&self) -> HighScore {
        self.high_score
    }

    /// Bounty for the next ghost eaten.
    pub fn ghost_bounty(&self) -> u32 {
        self.ghost_bounty
    }

    pub fn ghost(&self, id: GhostId) -> &Ghost {
        &self.ghosts[id.index()]
    }

    pub fn ghost_mut(&mut self, id: GhostId) -> &mut Ghost {
        &mut self.ghosts[id.index()]
    }

    /// Runs one tick and reports what happened.
    pub fn advance(&mut self, input: &TickInput) -> FrameFacts {
        let mut facts = FrameFacts::new(self.tick);

        if let Some(direction) = input.direction {
            self.pac.actor.wish_direction = direction;
        }
        for &command in &input.commands {
            self.handle_command(command, &mut facts);
        }

        match self.state {
            GameState::Intro => {}
            GameState::Ready => self.update_ready(&mut facts),
            GameState::Hunting => self.update_hunting(&mut facts),
            GameState::PacmanDying => self.update_pacman_dying(&mut facts),
            GameState::GhostDying => self.update_ghost_dying(&mut facts),
            GameState::ChangingLevel => self.update_changing_level(&mut facts),
            GameState::GameOver => self.update_game_over(&mut facts),
        }

        self.tick += 1;
        facts
    }

    fn handle_command(&mut self, command: GameCommand, facts: &mut FrameFacts) {
        match (command, self.state) {
            (GameCommand::Start, GameState::Intro) => self.start_game(facts),
            (GameCommand::Restart, GameState::GameOver) => self.change_state(GameState::Intro, facts),
            (GameCommand::AddLife, _) => {
                self.score.lives = self.score.lives.saturating_add(1);
                info!(lives = self.score.lives, "Extra life granted");
            }
            (GameCommand::EatAllPellets, GameState::Hunting) => {
                let pellets: Vec<IVec2> = self
                    .world
                    .food_tiles()
                    .filter(|&tile| !self.world.is_energizer_tile(tile))
                    .collect();
                for tile in &pellets {
                    self.world.remove_food(*tile);
                }
                info!(count = pellets.len(), "All pellets eaten");
            }
            (GameCommand::KillAllGhosts, GameState::Hunting) => {
                self.ghost_bounty = FIRST_GHOST_BOUNTY;
                let prey: SmallVec<[GhostId; 4]> = self
                    .ghosts
                    .iter()
                    .filter(|ghost| matches!(ghost.state, GhostState::Hunting | GhostState::Frightened))
                    .map(|ghost| ghost.id)
                    .collect();
                if !prey.is_empty() {
                    for id in prey {
                        self.kill_ghost(id, facts);
                    }
                    self.resume_state = self.state;
                    self.change_state(GameState::GhostDying, facts);
                }
            }
            (GameCommand::NextLevel, GameState::Hunting) => self.change_state(GameState::ChangingLevel, facts),
            (command, state) => trace!(?command, %state, "Command ignored"),
        }
    }

    fn change_state(&mut self, next: GameState, facts: &mut FrameFacts) {
        let previous = self.state;
        self.exit_state(previous, facts);
        debug!(from = %previous, to = %next, "Game state changed");
        self.state = next;
        self.enter_state(next, facts);

        let from = facts.state_change.map_or(previous, |(from, _)| from);
        facts.state_change = Some((from, next));
    }

    fn enter_state(&mut self, state: GameState, facts: &mut FrameFacts) {
        self.countdown = match state {
            GameState::Intro | GameState::Hunting => Countdown::Indefinite,
            GameState::Ready => {
                self.reset_actors();
                let ticks = if self.game_just_started {
                    self.config.game_start_ready_ticks
                } else {
                    self.config.ready_ticks
                };
                self.game_just_started = false;
                Countdown::Remaining(ticks)
            }
            GameState::PacmanDying => {
                self.pac.dead = true;
                self.pac.power_ticks = 0;
                self.bonus = Bonus::Inactive;
                self.house.enable_global_counter();
                let blinky = &mut self.ghosts[GhostId::Blinky.index()];
                if blinky.elroy.is_active() {
                    blinky.elroy = blinky.elroy.suspended();
                    facts.elroy_changed = Some(blinky.elroy.level());
                    debug!(elroy = blinky.elroy.level(), "Elroy suspended");
                }
                facts.flags |= FactFlags::PAC_KILLED;
                Countdown::Remaining(self.config.pac_dying_ticks)
            }
            GameState::GhostDying => Countdown::Remaining(self.config.ghost_dying_ticks),
            GameState::ChangingLevel => {
                facts.flags |= FactFlags::LEVEL_COMPLETED;
                info!(level = self.level.number, score = self.score.points, "Level completed");
                Countdown::Remaining(
                    self.config.level_change_base_ticks + self.level.maze_flashes * self.config.level_change_flash_ticks,
                )
            }
            GameState::GameOver => {
                info!(score = self.score.points, level = self.level.number, "Game over");
                self.save_high_score();
                Countdown::Remaining(self.config.game_over_ticks)
            }
        };
    }

    fn exit_state(&mut self, state: GameState, facts: &mut FrameFacts) {
        match state {
            GameState::Ready => {
                self.hunting.reset(self.level.number);
                facts.ghost_released = Some((GhostId::Blinky, ReleaseReason::Leader));
            }
            GameState::GhostDying => {
                for ghost in self.ghosts.iter_mut().filter(|ghost| ghost.is_eaten()) {
                    ghost.state = GhostState::Eaten { bounty: 0 };
                }
            }
            GameState::ChangingLevel => {
                self.start_level(self.level.number.saturating_add(1));
                self.save_high_score();
            }
            _ => {}
        }
    }

    fn start_game(&mut self, facts: &mut FrameFacts) {
        self.score = Score::new(self.config.initial_lives, self.config.extra_life_score);
        self.start_level(self.config.start_level);
        self.game_just_started = true;
        info!(seed = self.config.seed, lives = self.score.lives, "Game started");
        self.change_state(GameState::Ready, facts);
    }

    fn start_level(&mut self, number: u32) {
        self.level = Level::for_number(number);
        self.world.reset_food();
        self.house.reset_for_level();
        self.hunting.reset(self.level.number);
        self.bonus = Bonus::Inactive;
        self.ghost_bounty = FIRST_GHOST_BOUNTY;
        self.ghosts_killed_in_level = 0;
        for ghost in self.ghosts.iter_mut() {
            ghost.elroy = Elroy::Inactive;
        }
        info!(level = self.level.number, bonus = %self.level.bonus, "Level started");
    }

    /// Puts Pac and the ghosts back on their starting spots.
    fn reset_actors(&mut self) {
        let layout = self.world.layout();
        self.pac.reset(layout.pac_start, layout.pac_start_direction);
        for ghost in self.ghosts.iter_mut() {
            ghost.reset(layout);
        }
    }

    fn update_ready(&mut self, facts: &mut FrameFacts) {
        self.countdown.tick();
        if self.countdown.is_expired() {
            self.change_state(GameState::Hunting, facts);
        }
    }

    fn update_hunting(&mut self, facts: &mut FrameFacts) {
        if self.world.food_remaining() == 0 {
            self.change_state(GameState::ChangingLevel, facts);
            return;
        }
        if self.check_pac_killed(facts) || self.check_ghosts_eaten(facts) {
            return;
        }

        if !self.pac.has_power() {
            if let Some(phase) = self.hunting.tick(self.level.number) {
                facts.hunting_phase_started = Some(phase);
                self.force_turn_back();
            }
        }

        self.update_pac(facts);
        self.update_power(facts);
        self.release_ghosts(facts);
        self.update_ghosts(false);
        self.update_bonus(facts);
    }

    fn update_pacman_dying(&mut self, facts: &mut FrameFacts) {
        self.countdown.tick();
        if self.countdown.is_expired() {
            self.score.lives = self.score.lives.saturating_sub(1);
            let next = if self.score.lives > 0 {
                GameState::Ready
            } else {
                GameState::GameOver
            };
            self.change_state(next, facts);
        }
    }

    fn update_ghost_dying(&mut self, facts: &mut FrameFacts) {
        self.update_ghosts(true);
        self.countdown.tick();
        if self.countdown.is_expired() {
            self.change_state(self.resume_state, facts);
        }
    }

    fn update_changing_level(&mut self, facts: &mut FrameFacts) {
        self.countdown.tick();
        if self.countdown.is_expired() {
            self.change_state(GameState::Ready, facts);
        }
    }

    fn update_game_over(&mut self, facts: &mut FrameFacts) {
        self.countdown.tick();
        if self.countdown.is_expired() {
            self.change_state(GameState::Intro, facts);
        }
    }

    /// A dangerous ghost on Pac's tile kills Pac unless Pac has power.
    fn check_pac_killed(&mut self, facts: &mut FrameFacts) -> bool {
        if self.pac.has_power() {
            return false;
        }
        let pac_tile = self.pac.tile();
        let Some(killer) = self.ghosts.iter().find(|ghost| ghost.is_dangerous() && ghost.tile() == pac_tile) else {
            return false;
        };
        info!(ghost = %killer.id, tile = ?pac_tile, "Pac killed");
        self.change_state(GameState::PacmanDying, facts);
        true
    }

    /// Frightened ghosts on Pac's tile get eaten.
    fn check_ghosts_eaten(&mut self, facts: &mut FrameFacts) -> bool {
        let pac_tile = self.pac.tile();
        let prey: SmallVec<[GhostId; 4]> = self
            .ghosts
            .iter()
            .filter(|ghost| ghost.state == GhostState::Frightened && ghost.tile() == pac_tile)
            .map(|ghost| ghost.id)
            .collect();
        if prey.is_empty() {
            return false;
        }
        for id in prey {
            self.kill_ghost(id, facts);
        }
        self.resume_state = self.state;
        self.change_state(GameState::GhostDying, facts);
        true
    }

    fn kill_ghost(&mut self, id: GhostId, facts: &mut FrameFacts) {
        let bounty = self.ghost_bounty;
        let ghost = &mut self.ghosts[id.index()];
        ghost.state = GhostState::Eaten { bounty };
        ghost.target_tile = None;
        ghost.forced_turn_back = false;
        self.ghost_bounty = bounty.saturating_mul(2);
        self.ghosts_killed_in_level += 1;
        facts.ghosts_killed.push(id);
        debug!(ghost = %id, bounty, "Ghost killed");

        self.add_points(bounty, facts);
        if self.ghosts_killed_in_level == ALL_GHOSTS_KILLED_COUNT {
            info!(points = ALL_GHOSTS_KILLED_POINTS, "All ghosts of the level killed");
            self.add_points(ALL_GHOSTS_KILLED_POINTS, facts);
        }
    }

    fn force_turn_back(&mut self) {
        for ghost in self.ghosts.iter_mut() {
            if matches!(ghost.state, GhostState::Hunting | GhostState::Frightened) {
                ghost.forced_turn_back = true;
            }
        }
    }

    fn update_pac(&mut self, facts: &mut FrameFacts) {
        if self.pac.resting_ticks > 0 {
            self.pac.resting_ticks -= 1;
        } else {
            let ahead = self.pac.tile() + self.pac.actor.direction.as_ivec2();
            let eating = self.world.has_food(ahead);
            self.pac.actor.speed = match (self.pac.has_power(), eating) {
                (false, false) => self.level.pac_speed,
                (false, true) => self.level.pac_speed_eating,
                (true, false) => self.level.pac_speed_powered,
                (true, true) => self.level.pac_speed_powered_eating,
            };
            let flags = self.pac.traversal_flags();
            move_actor(&mut self.pac.actor, &self.world, flags);
        }

        let tile = self.pac.tile();
        if self.world.has_food(tile) {
            self.on_pac_found_food(tile, facts);
        } else {
            self.pac.starving_ticks += 1;
        }
    }

    fn on_pac_found_food(&mut self, tile: IVec2, facts: &mut FrameFacts) {
        let energizer = self.world.is_energizer_tile(tile);
        self.world.remove_food(tile);
        self.pac.starving_ticks = 0;
        facts.food_found = Some(tile);
        trace!(tile = ?tile, energizer, remaining = self.world.food_remaining(), "Food eaten");

        if energizer {
            facts.flags |= FactFlags::ENERGIZER_FOUND;
            self.pac.resting_ticks = ENERGIZER_REST_TICKS;
            self.add_points(ENERGIZER_POINTS, facts);
            self.start_power(facts);
        } else {
            self.pac.resting_ticks = PELLET_REST_TICKS;
            self.add_points(PELLET_POINTS, facts);
        }

        self.update_elroy(facts);
        self.house.on_food_eaten(&self.ghosts);
        if BONUS_FOOD_COUNTS.contains(&self.world.eaten_count()) {
            self.spawn_bonus(facts);
        }
    }

    fn start_power(&mut self, facts: &mut FrameFacts) {
        self.ghost_bounty = FIRST_GHOST_BOUNTY;
        let ticks = seconds(self.level.frightened_seconds);
        for ghost in self.ghosts.iter_mut() {
            if matches!(ghost.state, GhostState::Hunting | GhostState::Frightened) {
                ghost.forced_turn_back = true;
                if ticks > 0 {
                    ghost.state = GhostState::Frightened;
                }
            }
        }
        if ticks > 0 {
            self.pac.power_ticks = ticks;
            facts.flags |= FactFlags::POWER_STARTED;
            debug!(ticks, "Pac got power");
        }
    }

    fn update_power(&mut self, facts: &mut FrameFacts) {
        if self.pac.power_ticks == 0 {
            return;
        }
        self.pac.power_ticks -= 1;

        let total = seconds(self.level.frightened_seconds);
        if self.pac.power_ticks == POWER_FADING_TICKS.min(total / 2) {
            facts.flags |= FactFlags::POWER_FADING;
        }
        if self.pac.power_ticks == 0 {
            for ghost in self.ghosts.iter_mut().filter(|ghost| ghost.state == GhostState::Frightened) {
                ghost.state = GhostState::Hunting;
            }
            facts.flags |= FactFlags::POWER_LOST;
            debug!("Pac lost power");
        }
    }

    fn update_elroy(&mut self, facts: &mut FrameFacts) {
        let remaining = self.world.food_remaining();
        let level = if remaining == self.level.elroy1_dots_left {
            1
        } else if remaining == self.level.elroy2_dots_left {
            2
        } else {
            return;
        };
        let blinky = &mut self.ghosts[GhostId::Blinky.index()];
        blinky.elroy = blinky.elroy.raised_to(level);
        facts.elroy_changed = Some(blinky.elroy.level());
        debug!(elroy = blinky.elroy.level(), remaining, "Elroy raised");
    }

    fn release_ghosts(&mut self, facts: &mut FrameFacts) {
        let Some((id, reason)) = self
            .house
            .release_check(&self.ghosts, self.level.number, self.pac.starving_ticks)
        else {
            return;
        };
        if matches!(reason, ReleaseReason::Starving { .. }) {
            self.pac.starving_ticks = 0;
        }

        let elroy = self.ghosts[GhostId::Blinky.index()].elroy;
        house::release_ghost(&mut self.ghosts, id);
        let resumed = self.ghosts[GhostId::Blinky.index()].elroy;
        if resumed != elroy {
            facts.elroy_changed = Some(resumed.level());
        }

        debug!(ghost = %id, ?reason, "Ghost released");
        facts.ghost_released = Some((id, reason));
    }

    /// Moves the ghosts. While a ghost is dying only the returning eyes move.
    fn update_ghosts(&mut self, only_returning: bool) {
        let ctx = GhostContext {
            world: &self.world,
            level: &self.level,
            chasing: self.hunting.is_chasing(),
            pac_tile: self.pac.tile(),
            pac_direction: self.pac.actor.direction,
            blinky_tile: self.ghosts[GhostId::Blinky.index()].tile(),
        };
        for ghost in self.ghosts.iter_mut() {
            let returning = matches!(ghost.state, GhostState::Eaten { bounty: 0 } | GhostState::EnteringHouse);
            if only_returning && !returning {
                continue;
            }
            update_ghost(ghost, &ctx, &mut self.rng);
        }
    }

    fn spawn_bonus(&mut self, facts: &mut FrameFacts) {
        let jitter: f32 = self.rng.random();
        let remaining_ticks = seconds(BONUS_EDIBLE_SECONDS) + (jitter * TICKS_PER_SECOND as f32) as u32;
        self.bonus = Bonus::Edible {
            kind: self.level.bonus,
            remaining_ticks,
        };
        facts.flags |= FactFlags::BONUS_APPEARED;
        debug!(kind = %self.level.bonus, remaining_ticks, "Bonus appeared");
    }

    fn update_bonus(&mut self, facts: &mut FrameFacts) {
        match self.bonus {
            Bonus::Inactive => {}
            Bonus::Edible { kind, remaining_ticks } => {
                if self.pac.tile() == tile_of(self.world.layout().bonus_position) {
                    let points = kind.get_score();
                    self.bonus = Bonus::Eaten {
                        kind,
                        remaining_ticks: seconds(BONUS_EATEN_SECONDS),
                    };
                    facts.bonus_reached = Some(points);
                    debug!(%kind, points, "Bonus eaten");
                    self.add_points(points, facts);
                } else if remaining_ticks <= 1 {
                    self.bonus = Bonus::Inactive;
                    facts.flags |= FactFlags::BONUS_EXPIRED;
                } else {
                    self.bonus = Bonus::Edible {
                        kind,
                        remaining_ticks: remaining_ticks - 1,
                    };
                }
            }
            Bonus::Eaten { kind, remaining_ticks } => {
                self.bonus = if remaining_ticks <= 1 {
                    Bonus::Inactive
                } else {
                    Bonus::Eaten {
                        kind,
                        remaining_ticks: remaining_ticks - 1,
                    }
                };
            }
        }
    }

    fn add_points(&mut self, points: u32, facts: &mut FrameFacts) {
        if self.score.add(points) {
            facts.flags |= FactFlags::EXTRA_LIFE;
            info!(score = self.score.points, lives = self.score.lives, "Extra life");
        }
        if self.score.points > self.high_score.points {
            self.high_score.points = self.score.points;
            self.high_score.level = self.level.number;
            self.high_score_dirty = true;
        }
    }

    fn save_high_score(&mut self) {
        if !self.high_score_dirty {
            return;
        }
        match self.store.save(self.high_score.points, self.high_score.level) {
            Ok(record) => {
                debug!(points = record.points, level = record.level, "High score saved");
                self.high_score = record;
                self.high_score_dirty = false;
            }
            Err(error) => warn!(%error, "Could not save high score"),
        }
    }
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::collision;
use crate::game::entity::{
    BlastStyle, Entity, EntityId, Hero, HeroId, Kind, LaserOrigin, Spawn,
};
use crate::game::wave::{self, Delayed, Outcome, Waves};
use crate::game::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Single,
    Multi,
}

/// Held directions for one player, sampled once per tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct Steer {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Everything the input device contributed since the last tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickInput {
    pub p1: Steer,
    pub p1_fire: bool,
    pub p2: Steer,
    pub p2_fire: bool,
}

impl TickInput {
    pub fn clear(&mut self) {
        *self = TickInput::default();
    }
}

/// One match, owned as a value. Built on match start, dropped on reset.
pub struct MatchState {
    pub mode: Mode,
    pub heroes: Vec<Hero>,
    pub entities: Vec<Entity>,
    pub waves: Waves,
    pub outcome: Option<Outcome>,
    meteor_interval_ms: u32,
    meteor_elapsed_ms: u32,
    meteors_active: bool,
    next_id: EntityId,
    rng: StdRng,
}

impl MatchState {
    pub fn new(mode: Mode, seed: u64) -> Self {
        let mut state = MatchState {
            mode,
            heroes: Vec::new(),
            entities: Vec::new(),
            waves: Waves::new(),
            outcome: None,
            meteor_interval_ms: METEOR_BASE_SPAWN_MS,
            meteor_elapsed_ms: 0,
            meteors_active: true,
            next_id: 0,
            rng: StdRng::seed_from_u64(seed),
        };
        state.spawn_heroes();
        state.spawn_pyramid();
        state
    }

    pub fn alloc_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // ── Lookups ────────────────────────────────────────────────────────

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn entity_pos(&self, id: EntityId) -> Option<(f32, f32)> {
        self.entity(id).map(|e| (e.x, e.y))
    }

    pub fn is_live(&self, id: EntityId) -> bool {
        self.entity(id).map(|e| !e.dead).unwrap_or(false)
    }

    /// Liveness flag only goes one way; reaping happens at end of tick.
    pub fn kill(&mut self, id: EntityId) {
        if let Some(e) = self.entity_mut(id) {
            e.dead = true;
        }
    }

    pub fn hero(&self, id: HeroId) -> Option<&Hero> {
        self.heroes.iter().find(|h| h.id == id)
    }

    pub fn hero_mut(&mut self, id: HeroId) -> Option<&mut Hero> {
        self.heroes.iter_mut().find(|h| h.id == id)
    }

    pub fn hero_alive(&self, id: HeroId) -> bool {
        self.hero(id).map(|h| h.alive()).unwrap_or(false)
    }

    pub fn hostiles_alive(&self) -> bool {
        self.entities
            .iter()
            .any(|e| !e.dead && matches!(e.kind, Kind::Enemy | Kind::Boss { .. }))
    }

    pub fn total_points(&self) -> u32 {
        self.heroes.iter().map(|h| h.points).sum()
    }

    // ── Spawning ───────────────────────────────────────────────────────

    fn spawn_heroes(&mut self) {
        let hero_y = FIELD_HEIGHT - FIELD_HEIGHT / 4.0;
        match self.mode {
            Mode::Single => {
                let hero = Hero::new(HeroId::One, FIELD_WIDTH / 2.0 - HERO_WIDTH / 2.0, hero_y);
                self.spawn_escorts(&hero);
                self.heroes.push(hero);
            }
            Mode::Multi => {
                let spacing = FIELD_WIDTH / 3.0;
                self.heroes
                    .push(Hero::new(HeroId::One, spacing - HERO_WIDTH / 2.0, hero_y));
                self.heroes
                    .push(Hero::new(HeroId::Two, spacing * 2.0 - HERO_WIDTH / 2.0, hero_y));
            }
        }
    }

    fn spawn_escorts(&mut self, hero: &Hero) {
        let w = HERO_WIDTH * ESCORT_SCALE;
        let h = HERO_HEIGHT * ESCORT_SCALE;
        let y = hero.y + (HERO_HEIGHT - h) / 2.0;
        let left_x = hero.x - ESCORT_GAP - w;
        let right_x = hero.x + HERO_WIDTH + ESCORT_GAP;
        let id = self.alloc_id();
        self.entities.push(Entity::escort(id, hero, left_x, y));
        let id = self.alloc_id();
        self.entities.push(Entity::escort(id, hero, right_x, y));
    }

    /// The 5-row formation: 5 + 4 + 3 + 2 + 1 = 15 enemies, each row one
    /// ship narrower than the one above it, centered on the field.
    pub fn spawn_pyramid(&mut self) {
        for row in 0..PYRAMID_ROWS {
            let count = PYRAMID_ROWS - row;
            let row_width = count as f32 * ENEMY_WIDTH;
            let start_x = (FIELD_WIDTH - row_width) / 2.0;
            let y = row as f32 * ENEMY_HEIGHT;
            for i in 0..count {
                let id = self.alloc_id();
                self.entities
                    .push(Entity::enemy(id, start_x + i as f32 * ENEMY_WIDTH, y));
            }
        }
    }

    pub fn spawn_boss(&mut self) {
        let id = self.alloc_id();
        self.entities.push(Entity::boss(id));
        let id = self.alloc_id();
        self.entities.push(Entity::banner(
            id,
            "!! BOSS INCOMING !!".to_string(),
            FIELD_HEIGHT / 2.0,
            BOSS_BANNER_MS,
            false,
        ));
    }

    pub fn push_wave_banner(&mut self, wave: u32) {
        let id = self.alloc_id();
        self.entities.push(Entity::banner(
            id,
            format!("WAVE {wave}"),
            FIELD_HEIGHT / 2.0 - 5.0,
            WAVE_BANNER_MS,
            true,
        ));
    }

    pub fn push_explosion(&mut self, x: f32, y: f32, style: BlastStyle) {
        let id = self.alloc_id();
        self.entities.push(Entity::explosion(id, x, y, style));
    }

    fn spawn_meteor(&mut self) {
        let big = self.rng.gen_bool(METEOR_BIG_CHANCE);
        let size = if big { METEOR_BIG_SIZE } else { METEOR_SMALL_SIZE };
        let x = self.rng.gen_range(0.0..FIELD_WIDTH - size);
        let id = self.alloc_id();
        self.entities.push(Entity::meteor(id, x, big));
    }

    // ── Resolver support ───────────────────────────────────────────────

    /// Apply one laser hit. A kill schedules the staggered blast
    /// sequence and returns true.
    pub fn damage_boss(&mut self, id: EntityId) -> bool {
        let mut died_at = None;
        if let Some(e) = self.entity_mut(id) {
            if let Kind::Boss { health, .. } = &mut e.kind {
                *health = health.saturating_sub(1);
                if *health == 0 {
                    e.dead = true;
                    died_at = Some((e.x, e.y, e.width, e.height));
                }
            }
        }
        let Some((x, y, w, h)) = died_at else {
            return false;
        };
        for i in 0..BOSS_DEATH_BLASTS {
            let bx = x + self.rng.gen::<f32>() * w;
            let by = y + self.rng.gen::<f32>() * h;
            self.waves
                .schedule((i + 1) * TICK_MS, Delayed::Blast { x: bx, y: by });
        }
        true
    }

    pub fn check_loss(&mut self) {
        if self.outcome.is_none() && self.heroes.iter().all(|h| !h.alive()) {
            self.outcome = Some(Outcome::Lost);
        }
    }

    // ── Meteor cadence (wave controller hooks) ─────────────────────────

    pub fn stop_meteors(&mut self) {
        self.meteors_active = false;
    }

    /// Each cleared wave shaves 300ms off the spawn interval, floor 1s.
    pub fn set_meteor_cadence(&mut self, wave: u32) {
        self.meteor_interval_ms = METEOR_BASE_SPAWN_MS
            .saturating_sub((wave - 1) * METEOR_SPAWN_STEP_MS)
            .max(METEOR_MIN_SPAWN_MS);
        self.meteor_elapsed_ms = 0;
        self.meteors_active = true;
    }

    pub fn dismiss_escorts(&mut self) {
        for e in self.entities.iter_mut() {
            if matches!(e.kind, Kind::Escort { .. }) {
                e.dead = true;
            }
        }
    }

    // ── Hero actions ───────────────────────────────────────────────────

    /// Spawn one laser, gated by the cooldown.
    pub fn fire(&mut self, id: HeroId) {
        let (x, y) = {
            let Some(hero) = self.heroes.iter_mut().find(|h| h.id == id) else {
                return;
            };
            if !hero.alive() || !hero.can_fire() {
                return;
            }
            hero.cooldown_ms = FIRE_COOLDOWN_MS;
            (
                hero.x + hero.width / 2.0 - LASER_WIDTH / 2.0,
                hero.y - LASER_HEIGHT,
            )
        };
        let origin = match id {
            HeroId::One => LaserOrigin::HeroOne,
            HeroId::Two => LaserOrigin::HeroTwo,
        };
        let eid = self.alloc_id();
        self.entities.push(Entity::laser(eid, x, y, origin));
    }

    // ── Authoritative tick ─────────────────────────────────────────────

    /// One 100ms step: delayed actions → input → advance pass → escort
    /// pass → collision detection → resolution → reap → spawners.
    /// A terminal outcome freezes the match; further ticks are no-ops.
    pub fn tick(&mut self, input: &TickInput) {
        if self.outcome.is_some() {
            return;
        }
        let dt = TICK_MS;

        wave::run_delayed(self, dt);
        if self.outcome.is_some() {
            return;
        }

        self.apply_input(input, dt);

        let mut volleys = Vec::new();
        for e in self.entities.iter_mut() {
            if let Some(spawn) = e.advance(dt) {
                volleys.push(spawn);
            }
        }
        for spawn in volleys {
            match spawn {
                Spawn::BossVolley { center_x, bottom_y } => {
                    self.fire_boss_volley(center_x, bottom_y)
                }
            }
        }

        self.update_escorts(dt);

        let hits = collision::detect(self);
        collision::resolve(self, hits);

        // End-of-tick reap: a dead entity never sees another collision test.
        self.entities.retain(|e| !e.dead);

        if self.meteors_active && self.outcome.is_none() {
            self.meteor_elapsed_ms += dt;
            if self.meteor_elapsed_ms >= self.meteor_interval_ms {
                self.meteor_elapsed_ms = 0;
                self.spawn_meteor();
            }
        }
    }

    fn apply_input(&mut self, input: &TickInput, dt: u32) {
        for hero in self.heroes.iter_mut() {
            hero.tick_cooldown(dt);
            if !hero.alive() {
                continue;
            }
            let steer = match hero.id {
                HeroId::One => &input.p1,
                HeroId::Two => &input.p2,
            };
            let mut dx = 0.0;
            let mut dy = 0.0;
            if steer.left {
                dx -= HERO_SPEED;
            }
            if steer.right {
                dx += HERO_SPEED;
            }
            if steer.up {
                dy -= HERO_SPEED;
            }
            if steer.down {
                dy += HERO_SPEED;
            }
            hero.steer(dx, dy);
        }
        if input.p1_fire {
            self.fire(HeroId::One);
        }
        if input.p2_fire {
            self.fire(HeroId::Two);
        }
    }

    /// One straight shot and two drifting out diagonally.
    fn fire_boss_volley(&mut self, center_x: f32, bottom_y: f32) {
        let volley = [
            (center_x - LASER_WIDTH / 2.0, 0.0),
            (center_x - 3.0 - LASER_WIDTH, -BOSS_LASER_DRIFT),
            (center_x + 3.0, BOSS_LASER_DRIFT),
        ];
        for (x, vx) in volley {
            let id = self.alloc_id();
            self.entities.push(Entity::boss_laser(id, x, bottom_y, vx));
        }
    }

    /// Escorts track their owner, fire on their own cadence and die
    /// when the owner does.
    fn update_escorts(&mut self, dt: u32) {
        let owners: Vec<(HeroId, f32, f32, bool)> = self
            .heroes
            .iter()
            .map(|h| (h.id, h.x, h.y, h.alive()))
            .collect();
        let mut shots = Vec::new();
        for e in self.entities.iter_mut() {
            if e.dead {
                continue;
            }
            if let Kind::Escort {
                owner,
                offset_x,
                offset_y,
                fire_elapsed_ms,
            } = &mut e.kind
            {
                let Some(&(_, hx, hy, hero_alive)) =
                    owners.iter().find(|(id, ..)| *id == *owner)
                else {
                    e.dead = true;
                    continue;
                };
                if !hero_alive {
                    e.dead = true;
                    continue;
                }
                e.x = hx + *offset_x;
                e.y = hy + *offset_y;
                *fire_elapsed_ms += dt;
                if *fire_elapsed_ms >= ESCORT_FIRE_MS {
                    *fire_elapsed_ms = 0;
                    shots.push((e.x + e.width / 2.0 - LASER_WIDTH / 2.0, e.y - LASER_HEIGHT));
                }
            }
        }
        for (x, y) in shots {
            let id = self.alloc_id();
            self.entities
                .push(Entity::laser(id, x, y, LaserOrigin::Escort));
        }
    }
}

use crate::game::geometry::Rect;
use crate::game::*;

pub type EntityId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroId {
    One,
    Two,
}

/// A player ship. Kept outside the entity list so its points survive death.
#[derive(Clone, Debug)]
pub struct Hero {
    pub id: HeroId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub life: u32,
    pub points: u32,
    pub cooldown_ms: u32,
}

impl Hero {
    pub fn new(id: HeroId, x: f32, y: f32) -> Self {
        Hero {
            id,
            x,
            y,
            width: HERO_WIDTH,
            height: HERO_HEIGHT,
            life: HERO_LIVES,
            points: 0,
            cooldown_ms: 0,
        }
    }

    pub fn alive(&self) -> bool {
        self.life > 0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn can_fire(&self) -> bool {
        self.cooldown_ms == 0
    }

    pub fn apply_hit(&mut self, damage: u32) {
        self.life = self.life.saturating_sub(damage);
    }

    pub fn tick_cooldown(&mut self, dt: u32) {
        self.cooldown_ms = self.cooldown_ms.saturating_sub(dt);
    }

    /// Move by one steering step, clamped to the playfield on all edges.
    pub fn steer(&mut self, dx: f32, dy: f32) {
        self.x = (self.x + dx).clamp(0.0, FIELD_WIDTH - self.width);
        self.y = (self.y + dy).clamp(0.0, FIELD_HEIGHT - self.height);
    }
}

/// Which ship fired a player laser; decides the blast color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaserOrigin {
    HeroOne,
    HeroTwo,
    Escort,
}

impl LaserOrigin {
    pub fn blast_style(&self) -> BlastStyle {
        match self {
            LaserOrigin::HeroOne => BlastStyle::Red,
            LaserOrigin::HeroTwo | LaserOrigin::Escort => BlastStyle::Green,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlastStyle {
    Red,
    Green,
}

/// Kind tag plus kind-specific payload.
#[derive(Clone, Debug)]
pub enum Kind {
    Enemy,
    Boss {
        health: u32,
        dir: f32,
        fire_elapsed_ms: u32,
    },
    Meteor {
        big: bool,
    },
    Laser {
        origin: LaserOrigin,
    },
    BossLaser {
        vx: f32,
    },
    Escort {
        owner: HeroId,
        offset_x: f32,
        offset_y: f32,
        fire_elapsed_ms: u32,
    },
    Explosion {
        style: BlastStyle,
        elapsed_ms: u32,
    },
    Banner {
        text: String,
        lifetime_ms: u32,
        elapsed_ms: u32,
        rise: bool,
    },
}

/// A spawn requested during an entity's own advance step.
#[derive(Clone, Copy, Debug)]
pub enum Spawn {
    BossVolley { center_x: f32, bottom_y: f32 },
}

#[derive(Clone, Debug)]
pub struct Entity {
    pub id: EntityId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub dead: bool,
    pub kind: Kind,
}

impl Entity {
    pub fn enemy(id: EntityId, x: f32, y: f32) -> Self {
        Entity {
            id,
            x,
            y,
            width: ENEMY_WIDTH,
            height: ENEMY_HEIGHT,
            dead: false,
            kind: Kind::Enemy,
        }
    }

    /// The boss enters from above the field and descends to its patrol band.
    pub fn boss(id: EntityId) -> Self {
        Entity {
            id,
            x: FIELD_WIDTH / 2.0 - BOSS_WIDTH / 2.0,
            y: -BOSS_HEIGHT,
            width: BOSS_WIDTH,
            height: BOSS_HEIGHT,
            dead: false,
            kind: Kind::Boss {
                health: BOSS_HEALTH,
                dir: 1.0,
                fire_elapsed_ms: 0,
            },
        }
    }

    pub fn meteor(id: EntityId, x: f32, big: bool) -> Self {
        let size = if big { METEOR_BIG_SIZE } else { METEOR_SMALL_SIZE };
        Entity {
            id,
            x,
            y: 0.0,
            width: size,
            height: size,
            dead: false,
            kind: Kind::Meteor { big },
        }
    }

    pub fn laser(id: EntityId, x: f32, y: f32, origin: LaserOrigin) -> Self {
        Entity {
            id,
            x,
            y,
            width: LASER_WIDTH,
            height: LASER_HEIGHT,
            dead: false,
            kind: Kind::Laser { origin },
        }
    }

    pub fn boss_laser(id: EntityId, x: f32, y: f32, vx: f32) -> Self {
        Entity {
            id,
            x,
            y,
            width: LASER_WIDTH,
            height: LASER_HEIGHT,
            dead: false,
            kind: Kind::BossLaser { vx },
        }
    }

    /// An escort ship slaved to a hero by the offset captured at spawn.
    pub fn escort(id: EntityId, owner: &Hero, x: f32, y: f32) -> Self {
        Entity {
            id,
            x,
            y,
            width: HERO_WIDTH * ESCORT_SCALE,
            height: HERO_HEIGHT * ESCORT_SCALE,
            dead: false,
            kind: Kind::Escort {
                owner: owner.id,
                offset_x: x - owner.x,
                offset_y: y - owner.y,
                fire_elapsed_ms: 0,
            },
        }
    }

    pub fn explosion(id: EntityId, x: f32, y: f32, style: BlastStyle) -> Self {
        Entity {
            id,
            x,
            y,
            width: EXPLOSION_WIDTH,
            height: EXPLOSION_HEIGHT,
            dead: false,
            kind: Kind::Explosion {
                style,
                elapsed_ms: 0,
            },
        }
    }

    pub fn banner(id: EntityId, text: String, y: f32, lifetime_ms: u32, rise: bool) -> Self {
        Entity {
            id,
            x: FIELD_WIDTH / 2.0,
            y,
            width: 0.0,
            height: 0.0,
            dead: false,
            kind: Kind::Banner {
                text,
                lifetime_ms,
                elapsed_ms: 0,
                rise,
            },
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Remaining opacity of a fading banner, 1.0 → 0.0 over its lifetime.
    pub fn banner_alpha(&self) -> f32 {
        match &self.kind {
            Kind::Banner {
                lifetime_ms,
                elapsed_ms,
                ..
            } => 1.0 - *elapsed_ms as f32 / (*lifetime_ms).max(1) as f32,
            _ => 0.0,
        }
    }

    /// One tick of autonomous behavior: motion, expiry and fire cadence.
    pub fn advance(&mut self, dt: u32) -> Option<Spawn> {
        if self.dead {
            return None;
        }
        match &mut self.kind {
            Kind::Enemy => {
                // Descend, halting at the bottom edge
                if self.y + self.height < FIELD_HEIGHT {
                    self.y += ENEMY_DESCENT;
                }
            }
            Kind::Boss {
                dir,
                fire_elapsed_ms,
                ..
            } => {
                self.x += *dir * BOSS_PATROL_SPEED;
                if self.x <= 0.0 || self.x >= FIELD_WIDTH - self.width {
                    *dir = -*dir;
                    self.x = self.x.clamp(0.0, FIELD_WIDTH - self.width);
                }
                if self.y < BOSS_SETTLE_Y {
                    self.y += BOSS_DESCENT;
                }
                *fire_elapsed_ms += dt;
                if self.y >= BOSS_FIRE_MIN_Y && *fire_elapsed_ms >= BOSS_FIRE_MS {
                    *fire_elapsed_ms = 0;
                    return Some(Spawn::BossVolley {
                        center_x: self.x + self.width / 2.0,
                        bottom_y: self.y + self.height,
                    });
                }
            }
            Kind::Meteor { .. } => {
                self.y += METEOR_FALL;
                if self.y > FIELD_HEIGHT {
                    self.dead = true;
                }
            }
            Kind::Laser { .. } => {
                self.y -= LASER_SPEED;
                if self.y + self.height <= 0.0 {
                    self.dead = true;
                }
            }
            Kind::BossLaser { vx } => {
                self.y += BOSS_LASER_SPEED;
                self.x += *vx;
                if self.y > FIELD_HEIGHT || self.x < -self.width || self.x > FIELD_WIDTH {
                    self.dead = true;
                }
            }
            Kind::Escort { .. } => {
                // Position and fire cadence are slaved to the owning hero;
                // the match state handles both in its escort pass.
            }
            Kind::Explosion { elapsed_ms, .. } => {
                *elapsed_ms += dt;
                if *elapsed_ms >= EXPLOSION_MS {
                    self.dead = true;
                }
            }
            Kind::Banner {
                lifetime_ms,
                elapsed_ms,
                rise,
                ..
            } => {
                *elapsed_ms += dt;
                if *rise {
                    self.y -= BANNER_RISE;
                }
                if *elapsed_ms >= *lifetime_ms {
                    self.dead = true;
                }
            }
        }
        None
    }
}

use crate::game::entity::{BlastStyle, EntityId, HeroId, Kind, LaserOrigin};
use crate::game::geometry::intersects;
use crate::game::state::MatchState;
use crate::game::wave::{self, Outcome};
use crate::game::{BOSS_KILL_POINTS, ENEMY_KILL_POINTS};

/// A typed collision record. Detection produces these per tick; resolution
/// folds over them in order, so the tie-breaks between simultaneous
/// outcomes are explicit rather than hidden in handler registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    LaserEnemy { laser: EntityId, enemy: EntityId },
    LaserBoss { laser: EntityId, boss: EntityId },
    BossLaserHero { laser: EntityId, hero: HeroId },
    LaserMeteorBig { laser: EntityId, meteor: EntityId },
    LaserMeteorSmall { laser: EntityId, meteor: EntityId },
    MeteorEnemy { meteor: EntityId, enemy: EntityId },
    MeteorHero { meteor: EntityId, hero: HeroId },
    EnemyHero { enemy: EntityId, hero: HeroId },
}

/// Compute all pairwise intersections of interest for the current live
/// set, in the fixed pipeline order the resolvers rely on.
pub fn detect(state: &MatchState) -> Vec<Collision> {
    let mut hits = Vec::new();

    let live = || state.entities.iter().filter(|e| !e.dead);
    let lasers: Vec<_> = live()
        .filter(|e| matches!(e.kind, Kind::Laser { .. }))
        .collect();
    let boss_lasers: Vec<_> = live()
        .filter(|e| matches!(e.kind, Kind::BossLaser { .. }))
        .collect();
    let enemies: Vec<_> = live().filter(|e| matches!(e.kind, Kind::Enemy)).collect();
    let bosses: Vec<_> = live()
        .filter(|e| matches!(e.kind, Kind::Boss { .. }))
        .collect();
    let meteors: Vec<_> = live()
        .filter(|e| matches!(e.kind, Kind::Meteor { .. }))
        .collect();
    let heroes: Vec<_> = state.heroes.iter().filter(|h| h.alive()).collect();

    // 1. player laser x enemy, 2. player laser x boss
    for laser in &lasers {
        for enemy in &enemies {
            if intersects(laser.rect(), enemy.rect()) {
                hits.push(Collision::LaserEnemy {
                    laser: laser.id,
                    enemy: enemy.id,
                });
            }
        }
        for boss in &bosses {
            if intersects(laser.rect(), boss.rect()) {
                hits.push(Collision::LaserBoss {
                    laser: laser.id,
                    boss: boss.id,
                });
            }
        }
    }

    // 3. boss laser x hero
    for laser in &boss_lasers {
        for hero in &heroes {
            if intersects(laser.rect(), hero.rect()) {
                hits.push(Collision::BossLaserHero {
                    laser: laser.id,
                    hero: hero.id,
                });
            }
        }
    }

    // 4. player laser x meteor; big meteors survive the hit
    for laser in &lasers {
        for meteor in &meteors {
            if intersects(laser.rect(), meteor.rect()) {
                let record = match meteor.kind {
                    Kind::Meteor { big: true } => Collision::LaserMeteorBig {
                        laser: laser.id,
                        meteor: meteor.id,
                    },
                    _ => Collision::LaserMeteorSmall {
                        laser: laser.id,
                        meteor: meteor.id,
                    },
                };
                hits.push(record);
            }
        }
    }

    // 5. meteor x enemy
    for meteor in &meteors {
        for enemy in &enemies {
            if intersects(meteor.rect(), enemy.rect()) {
                hits.push(Collision::MeteorEnemy {
                    meteor: meteor.id,
                    enemy: enemy.id,
                });
            }
        }
    }

    // 6. meteor x hero
    for meteor in &meteors {
        for hero in &heroes {
            if intersects(meteor.rect(), hero.rect()) {
                hits.push(Collision::MeteorHero {
                    meteor: meteor.id,
                    hero: hero.id,
                });
            }
        }
    }

    // 7. enemy x hero (direct contact)
    for enemy in &enemies {
        for hero in &heroes {
            if intersects(enemy.rect(), hero.rect()) {
                hits.push(Collision::EnemyHero {
                    enemy: enemy.id,
                    hero: hero.id,
                });
            }
        }
    }

    hits
}

/// Fold resolution over the detected records. Every resolver guards on
/// liveness (a record may name an entity an earlier record already
/// killed), and the loss check always precedes any wave-advance check.
/// Resolution stops as soon as the match reaches a terminal state.
pub fn resolve(state: &mut MatchState, hits: Vec<Collision>) {
    for hit in hits {
        if state.outcome.is_some() {
            break;
        }
        match hit {
            Collision::LaserEnemy { laser, enemy } => {
                if !state.is_live(laser) || !state.is_live(enemy) {
                    continue;
                }
                let style = laser_style(state, laser);
                let Some((ex, ey)) = state.entity_pos(enemy) else {
                    continue;
                };
                state.kill(laser);
                state.kill(enemy);
                for hero in state.heroes.iter_mut().filter(|h| h.alive()) {
                    hero.points += ENEMY_KILL_POINTS;
                }
                state.push_explosion(ex, ey, style);
                wave::maybe_advance(state);
            }
            Collision::LaserBoss { laser, boss } => {
                if !state.is_live(laser) || !state.is_live(boss) {
                    continue;
                }
                let style = laser_style(state, laser);
                let Some((lx, ly)) = state.entity_pos(laser) else {
                    continue;
                };
                state.kill(laser);
                state.push_explosion(lx, ly, style);
                if state.damage_boss(boss) {
                    for hero in state.heroes.iter_mut().filter(|h| h.alive()) {
                        hero.points += BOSS_KILL_POINTS;
                    }
                    wave::maybe_advance(state);
                }
            }
            Collision::BossLaserHero { laser, hero } => {
                if !state.is_live(laser) || !state.hero_alive(hero) {
                    continue;
                }
                state.kill(laser);
                if let Some(h) = state.hero_mut(hero) {
                    h.apply_hit(1);
                }
                state.check_loss();
            }
            Collision::LaserMeteorBig { laser, meteor } => {
                // Big meteors shrug the laser off
                if !state.is_live(laser) || !state.is_live(meteor) {
                    continue;
                }
                let style = laser_style(state, laser);
                let Some((lx, ly)) = state.entity_pos(laser) else {
                    continue;
                };
                state.kill(laser);
                state.push_explosion(lx, ly, style);
            }
            Collision::LaserMeteorSmall { laser, meteor } => {
                if !state.is_live(laser) || !state.is_live(meteor) {
                    continue;
                }
                let style = laser_style(state, laser);
                let Some((mx, my)) = state.entity_pos(meteor) else {
                    continue;
                };
                state.kill(laser);
                state.kill(meteor);
                state.push_explosion(mx, my, style);
            }
            Collision::MeteorEnemy { meteor, enemy } => {
                if !state.is_live(meteor) || !state.is_live(enemy) {
                    continue;
                }
                let Some((ex, ey)) = state.entity_pos(enemy) else {
                    continue;
                };
                state.kill(meteor);
                state.kill(enemy);
                state.push_explosion(ex, ey, BlastStyle::Green);
                wave::maybe_advance(state);
            }
            Collision::MeteorHero { meteor, hero } => {
                if !state.is_live(meteor) || !state.hero_alive(hero) {
                    continue;
                }
                let damage = match state.entity(meteor).map(|e| &e.kind) {
                    Some(Kind::Meteor { big: true }) => 2,
                    _ => 1,
                };
                state.kill(meteor);
                if let Some(h) = state.hero_mut(hero) {
                    h.apply_hit(damage);
                }
                state.check_loss();
            }
            Collision::EnemyHero { enemy, hero } => {
                if !state.is_live(enemy) || !state.hero_alive(hero) {
                    continue;
                }
                state.kill(enemy);
                if let Some(h) = state.hero_mut(hero) {
                    h.apply_hit(1);
                }
                // Loss takes precedence over clearing the wave with this
                // same contact; check it first and bail if it ends the run.
                state.check_loss();
                if state.outcome == Some(Outcome::Lost) {
                    continue;
                }
                wave::maybe_advance(state);
            }
        }
    }
}

fn laser_style(state: &MatchState, laser: EntityId) -> BlastStyle {
    match state.entity(laser).map(|e| &e.kind) {
        Some(Kind::Laser { origin }) => origin.blast_style(),
        _ => LaserOrigin::HeroOne.blast_style(),
    }
}

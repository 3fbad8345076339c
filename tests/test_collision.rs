use starshot::game::collision::{self, Collision};
use starshot::game::entity::{BlastStyle, Entity, HeroId, Kind, LaserOrigin};
use starshot::game::state::{MatchState, Mode};

fn empty_field() -> MatchState {
    let mut m = MatchState::new(Mode::Single, 11);
    m.entities.clear();
    m
}

fn meteor_at(m: &mut MatchState, x: f32, y: f32, big: bool) -> u32 {
    let id = m.alloc_id();
    let mut e = Entity::meteor(id, x, big);
    e.y = y;
    m.entities.push(e);
    id
}

fn laser_at(m: &mut MatchState, x: f32, y: f32, origin: LaserOrigin) -> u32 {
    let id = m.alloc_id();
    m.entities.push(Entity::laser(id, x, y, origin));
    id
}

fn enemy_at(m: &mut MatchState, x: f32, y: f32) -> u32 {
    let id = m.alloc_id();
    m.entities.push(Entity::enemy(id, x, y));
    id
}

fn explosions(m: &MatchState) -> Vec<BlastStyle> {
    m.entities
        .iter()
        .filter_map(|e| match e.kind {
            Kind::Explosion { style, .. } => Some(style),
            _ => None,
        })
        .collect()
}

// ── Detection ─────────────────────────────────────────────────────────────────

#[test]
fn detect_tags_meteor_size_in_the_record() {
    let mut m = empty_field();
    let big = meteor_at(&mut m, 10.0, 10.0, true);
    let small = meteor_at(&mut m, 30.0, 10.0, false);
    let l1 = laser_at(&mut m, 12.0, 11.0, LaserOrigin::HeroOne);
    let l2 = laser_at(&mut m, 31.0, 11.0, LaserOrigin::HeroOne);

    let hits = collision::detect(&m);
    assert!(hits.contains(&Collision::LaserMeteorBig {
        laser: l1,
        meteor: big
    }));
    assert!(hits.contains(&Collision::LaserMeteorSmall {
        laser: l2,
        meteor: small
    }));
}

#[test]
fn detect_skips_dead_entities_and_dead_heroes() {
    let mut m = empty_field();
    let enemy = enemy_at(&mut m, 10.0, 10.0);
    laser_at(&mut m, 11.0, 11.0, LaserOrigin::HeroOne);
    m.kill(enemy);

    let hits = collision::detect(&m);
    assert!(hits.is_empty());

    // a dead hero collides with nothing
    let hero = m.hero(HeroId::One).unwrap();
    let (hx, hy) = (hero.x, hero.y);
    enemy_at(&mut m, hx, hy);
    m.hero_mut(HeroId::One).unwrap().life = 0;
    let hits = collision::detect(&m);
    assert!(hits.is_empty());
}

#[test]
fn detect_orders_laser_hits_before_contact_hits() {
    let mut m = empty_field();
    let (hx, hy) = {
        let hero = m.hero(HeroId::One).unwrap();
        (hero.x, hero.y)
    };
    // one enemy overlapping the hero, one laser overlapping that enemy
    let enemy = enemy_at(&mut m, hx - 4.0, hy - 2.0);
    let laser = laser_at(&mut m, hx - 3.5, hy - 1.0, LaserOrigin::HeroOne);

    let hits = collision::detect(&m);
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0], Collision::LaserEnemy { laser, enemy });
    assert_eq!(
        hits[1],
        Collision::EnemyHero {
            enemy,
            hero: HeroId::One
        }
    );
}

// ── Resolution ────────────────────────────────────────────────────────────────

#[test]
fn big_meteor_survives_a_laser_hit() {
    let mut m = empty_field();
    let meteor = meteor_at(&mut m, 10.0, 10.0, true);
    let laser = laser_at(&mut m, 12.0, 11.0, LaserOrigin::HeroOne);

    let hits = collision::detect(&m);
    collision::resolve(&mut m, hits);

    assert!(m.is_live(meteor));
    assert!(!m.is_live(laser));
    // the blast marks the impact point, not the meteor
    let blast = m
        .entities
        .iter()
        .find(|e| matches!(e.kind, Kind::Explosion { .. }))
        .unwrap();
    assert!((blast.x - 12.0).abs() < 1e-3);
    assert!((blast.y - 11.0).abs() < 1e-3);
}

#[test]
fn small_meteor_dies_to_a_laser_hit() {
    let mut m = empty_field();
    let meteor = meteor_at(&mut m, 10.0, 10.0, false);
    let laser = laser_at(&mut m, 11.0, 11.0, LaserOrigin::HeroOne);

    let hits = collision::detect(&m);
    collision::resolve(&mut m, hits);

    assert!(!m.is_live(meteor));
    assert!(!m.is_live(laser));
}

#[test]
fn meteor_damage_scales_with_size() {
    let mut m = empty_field();
    let (hx, hy) = {
        let hero = m.hero(HeroId::One).unwrap();
        (hero.x, hero.y)
    };
    let big = meteor_at(&mut m, hx, hy, true);
    collision::resolve(
        &mut m,
        vec![Collision::MeteorHero {
            meteor: big,
            hero: HeroId::One,
        }],
    );
    assert_eq!(m.hero(HeroId::One).unwrap().life, 1);
    assert!(!m.is_live(big));

    let small = meteor_at(&mut m, hx, hy, false);
    collision::resolve(
        &mut m,
        vec![Collision::MeteorHero {
            meteor: small,
            hero: HeroId::One,
        }],
    );
    assert_eq!(m.hero(HeroId::One).unwrap().life, 0);
}

#[test]
fn boss_laser_costs_one_life() {
    let mut m = empty_field();
    let id = m.alloc_id();
    let hero = m.hero(HeroId::One).unwrap();
    let (hx, hy) = (hero.x, hero.y);
    m.entities.push(Entity::boss_laser(id, hx + 1.0, hy, 0.0));

    let hits = collision::detect(&m);
    collision::resolve(&mut m, hits);

    assert_eq!(m.hero(HeroId::One).unwrap().life, 2);
    assert!(!m.is_live(id));
    assert!(m.outcome.is_none());
}

#[test]
fn meteor_clears_an_enemy_without_scoring() {
    let mut m = empty_field();
    enemy_at(&mut m, 80.0, 5.0); // keeps the wave occupied
    let enemy = enemy_at(&mut m, 10.0, 10.0);
    let meteor = meteor_at(&mut m, 11.0, 11.0, false);

    let hits = collision::detect(&m);
    collision::resolve(&mut m, hits);

    assert!(!m.is_live(enemy));
    assert!(!m.is_live(meteor));
    assert_eq!(m.total_points(), 0);
    assert_eq!(explosions(&m), vec![BlastStyle::Green]);
}

#[test]
fn kill_points_go_to_every_living_hero() {
    let mut m = MatchState::new(Mode::Multi, 11);
    m.entities.clear();
    let enemy = enemy_at(&mut m, 10.0, 10.0);
    let laser = laser_at(&mut m, 11.0, 11.0, LaserOrigin::HeroOne);

    collision::resolve(&mut m, vec![Collision::LaserEnemy { laser, enemy }]);
    assert_eq!(m.hero(HeroId::One).unwrap().points, 100);
    assert_eq!(m.hero(HeroId::Two).unwrap().points, 100);
    assert_eq!(m.total_points(), 200);
}

#[test]
fn blast_style_follows_the_laser_origin() {
    let mut m = empty_field();
    let enemy = enemy_at(&mut m, 10.0, 10.0);
    let laser = laser_at(&mut m, 11.0, 11.0, LaserOrigin::Escort);
    collision::resolve(&mut m, vec![Collision::LaserEnemy { laser, enemy }]);
    assert_eq!(explosions(&m), vec![BlastStyle::Green]);
}

#[test]
fn stale_records_are_dropped_by_the_liveness_guard() {
    let mut m = empty_field();
    enemy_at(&mut m, 80.0, 5.0);
    let enemy = enemy_at(&mut m, 10.0, 10.0);
    let l1 = laser_at(&mut m, 11.0, 11.0, LaserOrigin::HeroOne);
    let l2 = laser_at(&mut m, 13.0, 11.0, LaserOrigin::HeroOne);

    // both lasers overlapped the same enemy this tick
    collision::resolve(
        &mut m,
        vec![
            Collision::LaserEnemy { laser: l1, enemy },
            Collision::LaserEnemy { laser: l2, enemy },
        ],
    );

    // the first record consumed the kill; the second flies on
    assert!(!m.is_live(l1));
    assert!(m.is_live(l2));
    assert_eq!(m.hero(HeroId::One).unwrap().points, 100);
    assert_eq!(explosions(&m).len(), 1);
}

#[test]
fn resolved_kill_shields_the_hero_from_the_same_enemy() {
    let mut m = empty_field();
    enemy_at(&mut m, 80.0, 5.0);
    let (hx, hy) = {
        let hero = m.hero(HeroId::One).unwrap();
        (hero.x, hero.y)
    };
    let enemy = enemy_at(&mut m, hx, hy);
    let laser = laser_at(&mut m, hx + 1.0, hy + 1.0, LaserOrigin::HeroOne);

    let hits = collision::detect(&m);
    collision::resolve(&mut m, hits);

    // the laser got there first, so the contact record was stale
    assert!(!m.is_live(enemy));
    assert_eq!(m.hero(HeroId::One).unwrap().life, 3);
}

use crate::game::entity::BlastStyle;
use crate::game::state::MatchState;
use crate::game::{BOSS_WAVE, WAVE_DELAY_MS};

/// Terminal result of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// A deferred state change. All delays ride this queue and the shared
/// tick; there are no free-running timers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Delayed {
    SpawnPyramid,
    SpawnBoss,
    Blast { x: f32, y: f32 },
    EndWin,
}

#[derive(Clone, Copy, Debug)]
pub struct Scheduled {
    pub remaining_ms: u32,
    pub action: Delayed,
}

/// Wave counter plus the delayed-action queue that carries transitions
/// across their one-second gaps.
#[derive(Clone, Debug)]
pub struct Waves {
    pub current: u32,
    /// A transition has been scheduled but not executed yet; blocks
    /// re-advancing off the same empty field.
    pub pending: bool,
    pub queue: Vec<Scheduled>,
}

impl Waves {
    pub fn new() -> Self {
        Waves {
            current: 1,
            pending: false,
            queue: Vec::new(),
        }
    }

    pub fn schedule(&mut self, delay_ms: u32, action: Delayed) {
        self.queue.push(Scheduled {
            remaining_ms: delay_ms,
            action,
        });
    }

    /// Age the queue by one tick and pop every action that came due.
    pub fn take_due(&mut self, dt: u32) -> Vec<Delayed> {
        let mut due = Vec::new();
        self.queue.retain_mut(|s| {
            s.remaining_ms = s.remaining_ms.saturating_sub(dt);
            if s.remaining_ms == 0 {
                due.push(s.action);
                false
            } else {
                true
            }
        });
        due
    }
}

impl Default for Waves {
    fn default() -> Self {
        Waves::new()
    }
}

/// Advance the wave counter when the live set holds no enemy and no boss.
/// Called from resolvers only, never per tick, so a single clearing event
/// drives exactly one transition.
pub fn maybe_advance(state: &mut MatchState) {
    if state.outcome.is_some() || state.waves.pending || state.hostiles_alive() {
        return;
    }

    state.waves.current += 1;
    let wave = state.waves.current;
    state.waves.pending = true;

    if wave == BOSS_WAVE {
        state.stop_meteors();
        state.dismiss_escorts();
        state.waves.schedule(WAVE_DELAY_MS, Delayed::SpawnBoss);
        state.push_wave_banner(wave);
    } else if wave > BOSS_WAVE {
        state.waves.schedule(WAVE_DELAY_MS, Delayed::EndWin);
    } else {
        state.set_meteor_cadence(wave);
        state.waves.schedule(WAVE_DELAY_MS, Delayed::SpawnPyramid);
        state.push_wave_banner(wave);
    }
}

/// Execute every delayed action whose timer just expired.
pub fn run_delayed(state: &mut MatchState, dt: u32) {
    for action in state.waves.take_due(dt) {
        match action {
            Delayed::SpawnPyramid => {
                state.spawn_pyramid();
                state.waves.pending = false;
            }
            Delayed::SpawnBoss => {
                state.spawn_boss();
                state.waves.pending = false;
            }
            Delayed::Blast { x, y } => {
                state.push_explosion(x, y, BlastStyle::Red);
            }
            Delayed::EndWin => {
                state.outcome = Some(Outcome::Won);
            }
        }
    }
}

//! Fixed timestep simulation tick
//!
//! Advances a match by exactly one tick in a strict order so results are
//! deterministic relative to tick count, never wall-clock time:
//! buffered commands, body kinematics, death rules (slot 0 then slot 1),
//! respawn eligibility, camera smoothing, end-of-match check.

use super::body::Direction;
use super::race::{LEADER, RacePhase, RaceState, STRAGGLER};
use crate::consts::{CELL_WIDTH, VOID_DEATH_DEPTH};

/// Commands for one competitor for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct CompetitorInput {
    /// Start (or keep) running in the given direction
    pub run: Option<Direction>,
    /// Clear running intent
    pub halt: bool,
    pub jump: bool,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Per-competitor commands, indexed by `CompetitorId::index()`
    pub competitors: [CompetitorInput; 2],
    /// Global quit signal
    pub quit: bool,
    /// Autopilot - drive both competitors with the demo policy
    pub demo: bool,
}

/// Advance the match by one tick
pub fn tick(state: &mut RaceState, input: &TickInput) {
    if input.quit {
        state.phase = RacePhase::Aborted;
        return;
    }
    if state.phase != RacePhase::Running {
        return;
    }

    state.time_ticks += 1;

    // Autopilot: run in the base direction, jump at gaps and rising ground
    let mut input = input.clone();
    if input.demo {
        for body in state.slots.iter() {
            if !body.alive {
                continue;
            }
            let cmd = &mut input.competitors[body.id.index()];
            cmd.run = Some(body.base_dir);
            let here = body.floor_below(&state.terrain);
            let ahead = state
                .terrain
                .floor_at(body.pos.x + body.base_dir.sign() * CELL_WIDTH);
            cmd.jump = ahead.is_void() || ahead.y() < here;
        }
    }
    let input = &input;

    // 1. Consume buffered commands (dead bodies ignore them internally)
    for body in state.slots.iter_mut() {
        let cmd = input.competitors[body.id.index()];
        if let Some(direction) = cmd.run {
            body.set_intent(true, direction);
        }
        if cmd.halt {
            body.halt();
        }
    }
    for i in 0..state.slots.len() {
        if input.competitors[state.slots[i].id.index()].jump {
            state.slots[i].jump(&state.terrain);
        }
    }

    // 2. Advance both bodies
    for body in state.slots.iter_mut() {
        body.step(&state.terrain);
    }

    // 3a. Distance death: a straggler falling out of camera range dies
    let lag = (state.slots[LEADER].pos.x - state.slots[STRAGGLER].pos.x).abs();
    if state.slots[STRAGGLER].alive && lag > state.screen_width - 2.0 * CELL_WIDTH {
        log::debug!(
            "{} fell {lag:.0} behind, out of range",
            state.slots[STRAGGLER].id.tint().as_str()
        );
        state.kill(STRAGGLER);
    }

    // 3b. Void death, fixed slot order for determinism
    for slot in [STRAGGLER, LEADER] {
        let body = &state.slots[slot];
        if body.alive
            && body.floor_below(&state.terrain).is_infinite()
            && body.pos.y > VOID_DEATH_DEPTH
        {
            log::debug!("{} fell into the void", body.id.tint().as_str());
            state.kill(slot);
        }
    }

    // 4. Respawn eligibility, re-checked every tick while the cooldown stays
    // at or below zero (the terrain under a moving leader changes over time).
    // Straggler first; the leader slot can hold a dead body after a double
    // death and gets the same evaluation.
    for slot in [STRAGGLER, LEADER] {
        let body = &state.slots[slot];
        if body.alive || body.cooldown > 0 {
            continue;
        }
        let leader = &state.slots[LEADER];
        let candidate = leader.pos.x + leader.base_dir.sign() * state.screen_width / 2.0;
        if !state.terrain.floor_at(candidate).is_void() {
            state.slots[slot].respawn(candidate);
            log::debug!(
                "{} respawned at x={candidate:.0}",
                state.slots[slot].id.tint().as_str()
            );
        }
    }

    // 5. Camera: midpoint while both race, half a screen ahead of a lone
    // leader; smoothed by averaging with the previous position
    let target = if state.slots[STRAGGLER].alive {
        (state.slots[STRAGGLER].pos.x + state.slots[LEADER].pos.x) / 2.0
    } else {
        state.slots[LEADER].pos.x + state.race_direction().sign() * state.screen_width / 2.0
    };
    state.camera = (state.camera + target) / 2.0;

    // Match end: the leader left the map in its racing direction
    let leader = &state.slots[LEADER];
    let finished = match leader.base_dir {
        Direction::Right => leader.pos.x > state.terrain.extent(),
        Direction::Left => leader.pos.x < 0.0,
    };
    if finished {
        state.phase = RacePhase::Finished;
        log::info!(
            "race finished after {} ticks, {} wins",
            state.time_ticks,
            leader.id.tint().as_str()
        );
    }
}

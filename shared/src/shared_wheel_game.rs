use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::prize_catalog::Prize;
use crate::prize_engine::PrizeEngine;

// Constants for frontend animation
pub const SPIN_DURATION_MS: u32 = 4000; // Reveal delay, equal to the settle animation
pub const FULL_SPINS: u32 = 5; // Extra full rotations before settling

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum WheelPhase {
    Idle,
    Spinning,
    Revealed,
}

/// Notification to the host that the current user record must be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct ResetSignal;

/// Everything the view needs to animate a committed spin and schedule its reveal.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReveal {
    pub ticket: u64,
    pub winner_index: usize,
    pub from_rotation: f64,
    pub to_rotation: f64,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq)]
struct InFlightSpin {
    ticket: u64,
    prize: Prize,
}

/// Transient wheel state for one session. Rotation only ever grows between resets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WheelGame {
    pub rotation: f64,
    pub is_spinning: bool,
    pub has_spun: bool,
    pub winner: Option<Prize>,
    in_flight: Option<InFlightSpin>,
    next_ticket: u64,
}

impl WheelGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> WheelPhase {
        if self.is_spinning {
            WheelPhase::Spinning
        } else if self.has_spun {
            WheelPhase::Revealed
        } else {
            WheelPhase::Idle
        }
    }

    pub fn spin(&mut self, engine: &PrizeEngine) -> Option<PendingReveal> {
        let mut rng = rand::thread_rng();
        self.spin_with(engine, &mut rng)
    }

    /// Starts a spin from `Idle`. Any other phase is left untouched and yields `None`.
    pub fn spin_with<R: Rng + ?Sized>(
        &mut self,
        engine: &PrizeEngine,
        rng: &mut R,
    ) -> Option<PendingReveal> {
        if self.phase() != WheelPhase::Idle {
            log::debug!("Ignoring spin request while {:?}", self.phase());
            return None;
        }

        let (index, prize) = engine.select_winner_with(rng);
        let from_rotation = self.rotation;
        let to_rotation = target_rotation(from_rotation, index, engine.catalog().len());

        self.next_ticket += 1;
        let ticket = self.next_ticket;

        self.rotation = to_rotation;
        self.is_spinning = true;
        self.winner = None;
        self.in_flight = Some(InFlightSpin { ticket, prize: prize.clone() });

        log::info!("Spin {} committed: prize {} at rotation {:.2}", ticket, prize.id, to_rotation);

        Some(PendingReveal {
            ticket,
            winner_index: index,
            from_rotation,
            to_rotation,
            delay_ms: SPIN_DURATION_MS,
        })
    }

    /// Reveals the winner of the in-flight spin. Tickets from abandoned spins are ignored.
    pub fn complete_spin(&mut self, ticket: u64) -> bool {
        match self.in_flight.take() {
            Some(spin) if spin.ticket == ticket => {
                log::info!("Spin {} revealed prize {}", ticket, spin.prize.id);
                self.is_spinning = false;
                self.has_spun = true;
                self.winner = Some(spin.prize);
                true
            }
            other => {
                self.in_flight = other;
                log::debug!("Discarding stale reveal for spin {}", ticket);
                false
            }
        }
    }

    pub fn reset(&mut self) -> ResetSignal {
        log::debug!("Resetting wheel from {:?}", self.phase());
        self.rotation = 0.0;
        self.is_spinning = false;
        self.has_spun = false;
        self.winner = None;
        self.in_flight = None;
        ResetSignal
    }
}

pub fn segment_angle(segment_count: usize) -> f64 {
    360.0 / segment_count as f64
}

/// Cumulative rotation that settles the pointer on the middle of segment `index`.
pub fn target_rotation(previous: f64, index: usize, segment_count: usize) -> f64 {
    let segment = segment_angle(segment_count);
    let prize_angle = index as f64 * segment;
    previous + 360.0 * FULL_SPINS as f64 + (360.0 - prize_angle) + segment / 2.0
}

/// Start and end of a segment in degrees, clockwise from 12 o'clock, before rotation.
/// Segment `index` ends at `index * segment`, which is where `target_rotation`
/// parks the pointer's offset.
pub fn segment_span(index: usize, segment_count: usize) -> (f64, f64) {
    let segment = segment_angle(segment_count);
    let start = ((index as f64 - 1.0) * segment).rem_euclid(360.0);
    (start, start + segment)
}

pub fn label_angle(index: usize, segment_count: usize) -> f64 {
    let (start, end) = segment_span(index, segment_count);
    (start + end) / 2.0
}

/// Index of the segment under the fixed top pointer for a given wheel rotation.
pub fn segment_under_pointer(rotation: f64, segment_count: usize) -> usize {
    let segment = segment_angle(segment_count);
    let offset = (-rotation).rem_euclid(360.0);
    ((offset + segment) / segment).floor() as usize % segment_count
}

// Quartic ease-out for smooth deceleration
pub fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(4)
}

pub fn rotation_at(from: f64, to: f64, elapsed_ms: f64) -> f64 {
    let progress = elapsed_ms / SPIN_DURATION_MS as f64;
    if progress >= 1.0 {
        return to;
    }
    from + (to - from) * ease_out(progress)
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{BASE_ROTATIONS, FULL_TURN_DEGREES, POINTER_ANGLE_DEGREES};
use crate::error::{Operation, WheelError};
use crate::pool::{Entry, EntryId, Pool};
use crate::selector::IndexSource;
use crate::validation::normalize_label;

/// Lifecycle of a single spin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinState {
    Idle,
    Spinning,
    Settled,
}

impl fmt::Display for SpinState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Spinning => "spinning",
            Self::Settled => "settled",
        };
        f.write_str(name)
    }
}

/// Result of one spin.
///
/// `target_angle_degrees` is the raw clockwise rotation to apply to a wheel
/// resting at 0°; it always includes the extra full turns. Use
/// [`resting_angle`] for the equivalent angle in `[0, 360)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    pub selected_index: usize,
    pub selected_entry: Entry,
    pub target_angle_degrees: f64,
}

/// Slice of the wheel owned by one entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub index: usize,
    pub id: EntryId,
    pub label: String,
    pub start_degrees: f64,
    pub end_degrees: f64,
    pub center_degrees: f64,
}

/// Everything the presentation layer needs to render the wheel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WheelSnapshot {
    pub state: SpinState,
    pub can_spin: bool,
    pub entries: Vec<Entry>,
    pub segments: Vec<Segment>,
    pub winner: Option<SpinOutcome>,
}

pub fn arc_degrees(len: usize) -> f64 {
    FULL_TURN_DEGREES / len as f64
}

pub fn slice_center_degrees(index: usize, len: usize) -> f64 {
    let arc = arc_degrees(len);
    index as f64 * arc + arc / 2.0
}

/// Clockwise rotation that brings the center of slice `index` under the pointer.
pub fn target_angle_degrees(index: usize, len: usize) -> f64 {
    let base = BASE_ROTATIONS as f64 * FULL_TURN_DEGREES;
    base + (POINTER_ANGLE_DEGREES - slice_center_degrees(index, len))
}

pub fn resting_angle(angle_degrees: f64) -> f64 {
    angle_degrees.rem_euclid(FULL_TURN_DEGREES)
}

/// Index of the slice under the pointer once the wheel has been rotated
/// clockwise by `rotation_degrees`. `None` for an empty wheel.
pub fn segment_under_pointer(rotation_degrees: f64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let local = (POINTER_ANGLE_DEGREES - rotation_degrees).rem_euclid(FULL_TURN_DEGREES);
    let index = (local / arc_degrees(len)).floor() as usize;
    Some(index.min(len - 1))
}

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Spinning(SpinOutcome),
    Settled(SpinOutcome),
}

impl Phase {
    fn state(&self) -> SpinState {
        match self {
            Self::Idle => SpinState::Idle,
            Self::Spinning(_) => SpinState::Spinning,
            Self::Settled(_) => SpinState::Settled,
        }
    }
}

/// Selection engine: owns the pool and drives idle → spinning → settled.
///
/// All operations are synchronous. Timing between [`WheelGame::request_spin`]
/// and [`WheelGame::settle`] is up to the caller, typically the length of its
/// spin animation.
#[derive(Debug)]
pub struct WheelGame<P> {
    pool: Pool,
    initial: Vec<String>,
    phase: Phase,
    picker: P,
}

impl<P: IndexSource> WheelGame<P> {
    pub fn new<I, S>(initial: I, picker: P) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let initial: Vec<String> = initial.into_iter().map(Into::into).collect();
        Self {
            pool: Pool::from_labels(initial.iter().cloned()),
            initial,
            phase: Phase::Idle,
            picker,
        }
    }

    pub fn state(&self) -> SpinState {
        self.phase.state()
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    pub fn initial_labels(&self) -> &[String] {
        &self.initial
    }

    /// Whether a spin control should be enabled right now.
    pub fn can_spin(&self) -> bool {
        matches!(self.phase, Phase::Idle) && !self.pool.is_empty()
    }

    /// The settled result, if any.
    pub fn winner(&self) -> Option<&SpinOutcome> {
        match &self.phase {
            Phase::Settled(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// The outcome of the spin in flight or settled.
    pub fn pending(&self) -> Option<&SpinOutcome> {
        match &self.phase {
            Phase::Spinning(outcome) | Phase::Settled(outcome) => Some(outcome),
            Phase::Idle => None,
        }
    }

    pub fn request_spin(&mut self) -> Result<SpinOutcome, WheelError> {
        if !matches!(self.phase, Phase::Idle) {
            return Err(self.invalid(Operation::RequestSpin));
        }
        if self.pool.is_empty() {
            return Err(WheelError::EmptyPool);
        }
        let len = self.pool.len();
        let selected_index = self.picker.pick(len) % len;
        let selected_entry = self.pool.entries()[selected_index].clone();

        let outcome = SpinOutcome {
            selected_index,
            selected_entry,
            target_angle_degrees: target_angle_degrees(selected_index, len),
        };
        log::debug!(
            "spin started: slot {} of {} ({}), target {:.2}°",
            selected_index,
            len,
            outcome.selected_entry.label,
            outcome.target_angle_degrees
        );
        self.phase = Phase::Spinning(outcome.clone());
        Ok(outcome)
    }

    pub fn settle(&mut self) -> Result<SpinOutcome, WheelError> {
        let outcome = match &self.phase {
            Phase::Spinning(outcome) => outcome.clone(),
            _ => return Err(self.invalid(Operation::Settle)),
        };
        log::debug!("spin settled on {}", outcome.selected_entry.label);
        self.phase = Phase::Settled(outcome.clone());
        Ok(outcome)
    }

    /// Drops the exact slot that won (by id, not by label) and returns to idle.
    pub fn acknowledge_and_remove(&mut self) -> Result<&Pool, WheelError> {
        let id = match &self.phase {
            Phase::Settled(outcome) => outcome.selected_entry.id,
            _ => return Err(self.invalid(Operation::AcknowledgeAndRemove)),
        };
        if let Some(entry) = self.pool.remove(id) {
            log::debug!("removed {} from the wheel", entry.label);
        }
        self.phase = Phase::Idle;
        Ok(&self.pool)
    }

    /// Replaces the pool and forces idle, discarding any spin in flight.
    pub fn reset<I, S>(&mut self, initial: I) -> &Pool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pool.replace(initial);
        self.phase = Phase::Idle;
        &self.pool
    }

    /// Resets to the labels the engine was built with.
    pub fn restart(&mut self) -> &Pool {
        self.pool.replace(self.initial.iter().cloned());
        self.phase = Phase::Idle;
        &self.pool
    }

    pub fn clear(&mut self) -> &Pool {
        self.pool.clear();
        self.phase = Phase::Idle;
        &self.pool
    }

    /// Appends a trimmed label. Blank input is ignored.
    pub fn add_entry(&mut self, label: &str) -> &Pool {
        if let Some(label) = normalize_label(label) {
            self.pool.push(label);
        }
        &self.pool
    }

    pub fn segments(&self) -> Vec<Segment> {
        let len = self.pool.len();
        let arc = arc_degrees(len);
        self.pool
            .iter()
            .enumerate()
            .map(|(index, entry)| Segment {
                index,
                id: entry.id,
                label: entry.label.clone(),
                start_degrees: index as f64 * arc,
                end_degrees: (index + 1) as f64 * arc,
                center_degrees: slice_center_degrees(index, len),
            })
            .collect()
    }

    pub fn snapshot(&self) -> WheelSnapshot {
        WheelSnapshot {
            state: self.state(),
            can_spin: self.can_spin(),
            entries: self.pool.entries().to_vec(),
            segments: self.segments(),
            winner: self.winner().cloned(),
        }
    }

    fn invalid(&self, operation: Operation) -> WheelError {
        WheelError::InvalidState {
            operation,
            state: self.state(),
        }
    }
}

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spinner_shared::presentation::Celebration;
use spinner_shared::SpinOutcome;

const BELL: &str = "\x07";
const CONFETTI: [char; 6] = ['*', '+', 'o', '.', '~', '\''];
const CONFETTI_SPREAD: usize = 70;

/// Terminal stand-in for the trumpet and confetti burst.
pub struct TerminalFanfare<W> {
    out: W,
    enabled: bool,
}

impl<W: Write> TerminalFanfare<W> {
    pub fn new(out: W, enabled: bool) -> Self {
        Self { out, enabled }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Celebration for TerminalFanfare<W> {
    fn celebrate(&mut self, winner: &SpinOutcome) {
        if !self.enabled {
            return;
        }
        let burst = confetti_line(winner.selected_entry.id.0, CONFETTI_SPREAD);
        let written = write!(self.out, "{}", BELL)
            .and_then(|_| writeln!(self.out, "{}", burst))
            .and_then(|_| self.out.flush());
        if let Err(e) = written {
            tracing::debug!("fanfare skipped: {}", e);
        }
    }
}

/// Deterministic strip of confetti glyphs, varied per winner.
pub fn confetti_line(seed: u64, width: usize) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..width)
        .map(|_| CONFETTI[rng.gen_range(0..CONFETTI.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use spinner_shared::{Entry, EntryId};

    fn winner(id: u64) -> SpinOutcome {
        SpinOutcome {
            selected_index: 0,
            selected_entry: Entry {
                id: EntryId(id),
                label: "Ludo".to_string(),
            },
            target_angle_degrees: 1890.0,
        }
    }

    #[test]
    fn test_disabled_fanfare_is_silent() {
        let mut fanfare = TerminalFanfare::new(Vec::new(), false);
        fanfare.celebrate(&winner(1));
        assert!(fanfare.into_inner().is_empty());
    }

    #[test]
    fn test_fanfare_rings_the_bell() {
        let mut fanfare = TerminalFanfare::new(Vec::new(), true);
        fanfare.celebrate(&winner(1));
        let out = String::from_utf8(fanfare.into_inner()).unwrap();
        assert!(out.starts_with(BELL));
        assert_eq!(out.trim_start_matches(BELL).trim_end().chars().count(), CONFETTI_SPREAD);
    }

    #[test]
    fn test_confetti_is_deterministic() {
        assert_eq!(confetti_line(5, 20), confetti_line(5, 20));
        assert_eq!(confetti_line(5, 0), "");
        assert!(confetti_line(9, 30).chars().all(|c| CONFETTI.contains(&c)));
        assert_ne!(confetti_line(1, 40), confetti_line(2, 40));
    }
}

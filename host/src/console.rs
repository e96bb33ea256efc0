use std::io::{self, Write};
use std::time::Duration;

use spinner_shared::presentation::{Celebration, SpinAnimation, SpinTiming};
use spinner_shared::shared_wheel_game::segment_under_pointer;
use spinner_shared::{IndexSource, SpinState, WheelError, WheelGame};
use tokio::time::Instant;
use tracing::{info, warn};

use crate::commands::{Command, CommandError, HELP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Terminal presentation layer: turns typed commands into engine calls,
/// plays the spin as text frames and announces the winner.
pub struct Console<P, C, W> {
    game: WheelGame<P>,
    timing: SpinTiming,
    frame_interval: Duration,
    celebration: C,
    out: W,
}

impl<P, C, W> Console<P, C, W>
where
    P: IndexSource,
    C: Celebration,
    W: Write,
{
    pub fn new(
        game: WheelGame<P>,
        timing: SpinTiming,
        frame_interval: Duration,
        celebration: C,
        out: W,
    ) -> Self {
        Self {
            game,
            timing,
            frame_interval,
            celebration,
            out,
        }
    }

    pub fn game(&self) -> &WheelGame<P> {
        &self.game
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    pub fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "Scrum Spinner - type `help` for commands")?;
        self.print_pool()
    }

    pub async fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        match line.parse::<Command>() {
            Ok(command) => self.dispatch(command).await,
            Err(CommandError::Empty) => Ok(Flow::Continue),
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                Ok(Flow::Continue)
            }
        }
    }

    pub async fn dispatch(&mut self, command: Command) -> io::Result<Flow> {
        match command {
            Command::Spin => self.spin().await?,
            Command::Acknowledge => match self.game.acknowledge_and_remove() {
                Ok(_) => self.print_pool()?,
                Err(e) => self.report(e)?,
            },
            Command::Add(label) => {
                let before = self.game.pool().len();
                if self.game.add_entry(&label).len() > before {
                    info!("added {} to the wheel", label.trim());
                }
                self.print_pool()?;
            }
            Command::Restart => {
                self.game.restart();
                info!("wheel restarted");
                self.print_pool()?;
            }
            Command::Clear => {
                self.game.clear();
                self.print_pool()?;
            }
            Command::List => self.print_pool()?,
            Command::Status => {
                let json = serde_json::to_string_pretty(&self.game.snapshot())?;
                writeln!(self.out, "{}", json)?;
            }
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        self.out.flush()?;
        Ok(Flow::Continue)
    }

    async fn spin(&mut self) -> io::Result<()> {
        let outcome = match self.game.request_spin() {
            Ok(outcome) => outcome,
            Err(e) => return self.report(e),
        };
        info!(
            "spinning {} entries, target {:.1}°",
            self.game.pool().len(),
            outcome.target_angle_degrees
        );

        let animation = SpinAnimation::new(&outcome, self.timing);
        let len = self.game.pool().len();
        let started = Instant::now();
        loop {
            let elapsed = started.elapsed();
            if animation.is_finished(elapsed) {
                break;
            }
            let rotation = animation.rotation_at(elapsed);
            let under_pointer = segment_under_pointer(rotation, len)
                .and_then(|index| self.game.pool().get(index))
                .map(|entry| entry.label.as_str())
                .unwrap_or("");
            writeln!(self.out, "  ↻ {:>7.1}°  {}", rotation, under_pointer)?;
            self.out.flush()?;
            tokio::time::sleep(self.frame_interval.min(animation.remaining(elapsed))).await;
        }

        let winner = match self.game.settle() {
            Ok(winner) => winner,
            Err(e) => return self.report(e),
        };
        info!("{} selected", winner.selected_entry.label);
        self.celebration.celebrate(&winner);
        writeln!(
            self.out,
            "{} is up! Type `ok` to take them off the wheel.",
            winner.selected_entry.label
        )
    }

    fn print_pool(&mut self) -> io::Result<()> {
        let pool = self.game.pool();
        if pool.is_empty() {
            writeln!(self.out, "The wheel is empty. Use `add <name>` or `restart`.")?;
            return Ok(());
        }
        writeln!(self.out, "On the wheel ({}): {}", pool.len(), pool.labels().join(", "))?;
        if self.game.state() == SpinState::Settled {
            writeln!(self.out, "Waiting for `ok` before the next spin.")?;
        }
        Ok(())
    }

    fn report(&mut self, error: WheelError) -> io::Result<()> {
        warn!("rejected: {}", error);
        writeln!(self.out, "error: {}", error)
    }
}

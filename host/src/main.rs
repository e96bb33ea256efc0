use std::io;

use spinner_shared::{RandomIndex, WheelGame};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::celebration::TerminalFanfare;
use crate::config::HostConfig;
use crate::console::{Console, Flow};

mod celebration;
mod commands;
mod config;
mod console;
mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::setup()?;

    let config = HostConfig::from_env()?;
    info!(
        "starting with {} entries, spin {:?}, seed {:?}",
        config.entries.len(),
        config.timing().settle_after(),
        config.seed
    );

    let picker = match config.seed {
        Some(seed) => RandomIndex::seeded(seed),
        None => RandomIndex::from_entropy(),
    };
    let game = WheelGame::new(config.entries.clone(), picker);
    let fanfare = TerminalFanfare::new(io::stdout(), config.fanfare);
    let mut console = Console::new(
        game,
        config.timing(),
        config.frame_interval,
        fanfare,
        io::stdout(),
    );
    console.print_banner()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if console.handle_line(&line).await? == Flow::Quit {
            break;
        }
    }

    info!("bye, {} entries left on the wheel", console.game().pool().len());
    Ok(())
}

//! Dodge Blitz headless runner
//!
//! Usage: `dodge-blitz [tuning.json] [seed]`
//!
//! Plays a one-minute autopilot session at 60 Hz and logs the HUD once per
//! second. Set `RUST_LOG=info` (or `debug` for sound events) to see output.

use dodge_blitz::audio::LogAudio;
use dodge_blitz::consts::FRAME_DT;
use dodge_blitz::game::{Game, autopilot};
use dodge_blitz::{FileHighScoreStore, Tuning};

const SESSION_SECONDS: u32 = 60;
const FRAMES_PER_SECOND: u32 = 60;

fn main() {
    env_logger::init();
    log::info!("Dodge Blitz (headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => Tuning::load_or_default(path),
        None => Tuning::default(),
    };
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::warn!("Invalid seed ({e}); using 0");
            0
        }
        None => 0,
    };

    let mut game = Game::new(tuning, seed, FileHighScoreStore::default(), LogAudio::new());

    for frame in 1..=SESSION_SECONDS * FRAMES_PER_SECOND {
        let keys = autopilot(&game.state);
        game.frame(FRAME_DT, keys);
        if frame % FRAMES_PER_SECOND == 0 {
            log::info!("[{:>2}s] {}", frame / FRAMES_PER_SECOND, game.state.hud_line());
        }
    }

    let state = &game.state;
    log::info!(
        "Session over after {} run(s): score {}, best {}, {} sounds played",
        state.runs,
        state.score(),
        state.high_score(),
        game.audio().total()
    );
    println!("{}", state.hud_line());
}

//! Wall Pong entry point
//!
//! The browser build is driven from JS through `platform::web`. Natively there
//! is no window: the binary plays headless with an autopilot and logs what
//! happens.
//!
//! Usage: `wall-pong [settings.json] [seconds]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use wall_pong::{Game, Settings};

    env_logger::init();
    log::info!("Wall Pong (native) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };
    let seconds: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(60.0);

    let mut game = Game::new(settings);
    let summary = autoplay(&mut game, seconds);

    println!(
        "Played {:.0}s: {} games, best score {}, {} paddle hits",
        seconds, summary.games, summary.best_score, summary.hits
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
struct Summary {
    games: u32,
    best_score: u32,
    hits: u32,
}

/// Run `seconds` of 60 Hz frames, steering the paddle toward the ball
#[cfg(not(target_arch = "wasm32"))]
fn autoplay(game: &mut wall_pong::Game, seconds: f64) -> Summary {
    use wall_pong::sim::{GameEvent, GamePhase};

    const FRAME: f64 = 1.0 / 60.0;
    let height = game.settings().height as f64;
    let mut summary = Summary::default();
    let mut touching = false;

    let frames = (seconds / FRAME).ceil() as u64;
    for frame in 0..=frames {
        let now = frame as f64 * FRAME;

        // Touch the half of the screen the ball is heading toward
        let target = game.ball().map(|b| b.pos.y as f64);
        let paddle = game.paddle_rect();
        match target {
            Some(y) if (y - paddle.center().y as f64).abs() > paddle.size.y as f64 / 4.0 => {
                let touch_y = if y > paddle.center().y as f64 {
                    height * 0.75
                } else {
                    height * 0.25
                };
                game.on_input_start(touch_y);
                touching = true;
            }
            _ if touching => {
                game.on_input_end();
                touching = false;
            }
            _ => {}
        }

        game.on_frame(now);

        for event in game.drain_events() {
            match event {
                GameEvent::ScoreChanged(score) => {
                    if score > 0 {
                        summary.hits += 1;
                    }
                    summary.best_score = summary.best_score.max(score);
                }
                GameEvent::StateChanged(GamePhase::GameOver) => summary.games += 1,
                GameEvent::StateChanged(phase) => log::debug!("{:?} at {:.2}s", phase, now),
                GameEvent::CountdownPhase(label) => log::debug!("Countdown {}", label),
            }
        }
    }

    summary
}

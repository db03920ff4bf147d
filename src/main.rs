use rand::{rngs::StdRng, SeedableRng};
use tracing::{info, warn};

use connect4_engine::{
    config::Config,
    terminal::{LineInput, TerminalRenderer},
    GameState,
};

fn main() {
    let (config, config_error) = Config::load_or_fallback(&Config::path());

    // logs go to stderr, the board to stdout
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .init();

    if let Some(err) = config_error {
        warn!(%err, "ignoring config file, using defaults");
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut renderer = TerminalRenderer::stdout(config.colour);
    let mut input = LineInput::stdin();

    let outcome = GameState::start(&mut rng).run(&mut renderer, &mut input);
    info!(?outcome, "game finished");
}

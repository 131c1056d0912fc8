use backend;
use ballistics::config::{
    SceneConfig, Variant, PROJECTILE_RADIUS, VIEWPORT_HEIGHT, VIEWPORT_WIDTH, WINDOW_TITLE,
};
use ballistics::input::read_launch_params;
use ballistics::scene::clock_seed;
use ballistics::{Pacing, Simulation, SleepPacer};
use clap::Parser;
use std::io;

/// Animate a projectile launched with the velocity and angle typed on stdin.
#[derive(Parser)]
#[command(name = "projectile", version)]
struct Cli {
    /// Scene decorations
    #[arg(long, value_enum, default_value_t = Variant::Plain)]
    variant: Variant,

    /// Ground texture seed; the clock is used when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Frame pacing: fixed delay after each frame, or delay minus frame work
    #[arg(long, value_enum, default_value_t = Pacing::Fixed)]
    pacing: Pacing,

    #[arg(long, default_value_t = VIEWPORT_WIDTH)]
    width: u32,

    #[arg(long, default_value_t = VIEWPORT_HEIGHT)]
    height: u32,

    /// Projectile radius in pixels
    #[arg(long, default_value_t = PROJECTILE_RADIUS)]
    radius: i32,
}

fn main() {
    ballistics::init_logging();
    let cli = Cli::parse();

    let params = match read_launch_params(io::stdin().lock(), &mut io::stdout()) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Invalid input: {e}");
            std::process::exit(1);
        }
    };

    let mut config = SceneConfig::default()
        .with_viewport(cli.width, cli.height)
        .with_variant(cli.variant);
    config.radius = cli.radius;
    config.pacing = cli.pacing;
    let seed = cli.seed.unwrap_or_else(clock_seed);

    let mut system =
        match backend::System::new(config.width as usize, config.height as usize, WINDOW_TITLE) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(e.exit_code());
            }
        };

    let mut pacer = SleepPacer::new(config.pacing, config.frame_interval);
    let sim = Simulation::new(params, config, seed);
    let state = sim.run(&mut system, &mut pacer);
    log::debug!("final state: {state:?}");
}

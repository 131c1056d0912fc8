use ballistics::config::{SceneConfig, Variant, TIME_STEP, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use ballistics::scene::clock_seed;
use ballistics::surface::Recorder;
use ballistics::{LaunchParams, NoPacing, Simulation};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "trajectory")]
#[command(about = "Inspect projectile trajectories without opening a window", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Shot {
    /// Initial velocity (m/s)
    #[arg(short = 'v', long)]
    velocity: f32,

    /// Launch angle (degrees)
    #[arg(short = 'a', long, default_value = "45.0")]
    angle: f32,

    /// Viewport width the shot has to cross
    #[arg(long, default_value_t = VIEWPORT_WIDTH)]
    width: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Print t, x, y for every simulation step
    Table {
        #[command(flatten)]
        shot: Shot,

        /// Time step (seconds)
        #[arg(long, default_value_t = TIME_STEP)]
        step: f32,

        /// Stop printing after this much simulated time
        #[arg(long, default_value = "120.0")]
        max_time: f32,
    },

    /// Flight time, range, apex and viewport exit
    Summary {
        #[command(flatten)]
        shot: Shot,
    },

    /// Drive the animation loop against an offscreen surface
    Run {
        #[command(flatten)]
        shot: Shot,

        #[arg(long, value_enum, default_value_t = Variant::Plain)]
        variant: Variant,

        /// Ground texture seed (textured variant)
        #[arg(long)]
        seed: Option<u64>,

        /// Stop after this much simulated time
        #[arg(long, default_value = "120.0")]
        max_time: f32,
    },
}

fn main() {
    ballistics::init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Table {
            shot,
            step,
            max_time,
        } => print_table(&shot, step, max_time),
        Commands::Summary { shot } => print_summary(&shot),
        Commands::Run {
            shot,
            variant,
            seed,
            max_time,
        } => run_offscreen(&shot, variant, seed, max_time),
    }
}

fn launch(shot: &Shot) -> LaunchParams {
    if !(shot.velocity > 0.0) {
        eprintln!("velocity must be greater than zero");
        std::process::exit(1);
    }
    LaunchParams::from_degrees(shot.velocity, shot.angle)
}

fn print_table(shot: &Shot, step: f32, max_time: f32) {
    if !(step > 0.0) {
        eprintln!("step must be greater than zero");
        std::process::exit(1);
    }
    let params = launch(shot);
    println!("{:>8} {:>10} {:>10}", "t (s)", "x (m)", "y (m)");
    let mut t = 0.0f32;
    while t <= max_time {
        let p = params.position_at(t);
        if p.x > shot.width as f32 || (t > 0.0 && p.y < 0.0) {
            break;
        }
        println!("{t:>8.2} {:>10.2} {:>10.2}", p.x, p.y);
        t += step;
    }
}

fn print_summary(shot: &Shot) {
    let params = launch(shot);
    println!("Velocity:       {:.2} m/s", params.velocity);
    println!("Angle:          {:.2} deg", params.angle_degrees());
    println!("Time of flight: {:.4} s", params.flight_time());
    println!("Range:          {:.4} m", params.range());
    println!("Apex:           {:.4} m", params.apex());
    match params.exit_time(shot.width as f32) {
        Some(t) => {
            let frames = (t / TIME_STEP).floor() as u64 + 1;
            println!("Leaves {}-wide viewport at {t:.4} s ({frames} frames)", shot.width);
        }
        None => println!("Never leaves the {}-wide viewport", shot.width),
    }
}

fn run_offscreen(shot: &Shot, variant: Variant, seed: Option<u64>, max_time: f32) {
    let params = launch(shot);
    let config = SceneConfig::default()
        .with_viewport(shot.width, VIEWPORT_HEIGHT)
        .with_variant(variant)
        .with_time_limit(max_time);
    let seed = seed.unwrap_or_else(clock_seed);

    let sim = Simulation::new(params, config, seed);
    let mut surface = Recorder::new(shot.width, VIEWPORT_HEIGHT);
    let state = sim.run(&mut surface, &mut NoPacing);
    let config = sim.config();

    println!(
        "Launch:         {:.2} m/s at {:.2} deg, {:?} scene",
        sim.params().velocity,
        sim.params().angle_degrees(),
        config.variant
    );

    println!("Stopped:        {:?}", state.stop_reason());
    println!("Frames:         {}", state.frames);
    println!("Simulated time: {:.2} s", state.elapsed);
    println!(
        "Last frame:     {} draw calls, {} projectile points, {} border lines",
        surface.last_frame().len(),
        surface.points_in(config.projectile).len(),
        surface.lines_in(config.border)
    );
}

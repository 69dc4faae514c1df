use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use farm_sim::simulation::{
    AutoFarmer, Clock, FarmConfig, FarmWorld, ManualClock, CELL_SIZE, GRID_HEIGHT, GRID_WIDTH,
    GROWTH_DURATION, STARTING_MONEY,
};

#[derive(Parser)]
#[command(name = "farm_sim")]
#[command(about = "Grid farming simulation with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Number of simulation ticks to run in headless mode
    #[arg(long, default_value = "600")]
    ticks: u32,

    /// Time delta per tick in seconds
    #[arg(long, default_value = "0.1")]
    delta: f64,

    /// Seed for the autoplay farmer (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Chance per tick that the autoplay farmer uses a tool
    #[arg(long, default_value = "0.5")]
    actions_per_tick: f64,

    /// Grid width in cells
    #[arg(long, default_value_t = GRID_WIDTH)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = GRID_HEIGHT)]
    height: usize,

    /// Cell size in pixels
    #[arg(long, default_value_t = CELL_SIZE)]
    cell_size: u32,

    /// Seconds that gate each growth step
    #[arg(long, default_value_t = GROWTH_DURATION)]
    growth_duration: f64,

    /// Money the player starts with
    #[arg(long, default_value_t = STARTING_MONEY)]
    starting_money: i64,

    /// Ripen straight from watered, skipping the sprout and grown stages
    #[arg(long)]
    simple_growth: bool,
}

impl Cli {
    fn farm_config(&self) -> FarmConfig {
        let mut config = FarmConfig {
            width: self.width,
            height: self.height,
            cell_size: self.cell_size,
            growth_duration: self.growth_duration,
            starting_money: self.starting_money,
            ..FarmConfig::default()
        };
        if self.simple_growth {
            config.intermediate_stages.clear();
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.farm_config();
    config.validate().context("Invalid farm configuration")?;

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            run_with_ui(config)
        }
        #[cfg(not(feature = "ui"))]
        {
            eprintln!("Error: UI feature is not enabled. Rebuild with --features ui");
            std::process::exit(1);
        }
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("farm_sim=info"))
            .init();
        run_headless(&cli, &config)
    }
}

/// Run the simulation in headless mode (no graphics)
fn run_headless(cli: &Cli, config: &FarmConfig) -> Result<()> {
    anyhow::ensure!(
        cli.delta.is_finite() && cli.delta > 0.0,
        "Tick delta must be a positive number of seconds, got {}",
        cli.delta
    );

    println!("Running farm simulation in headless mode...");
    println!("Ticks: {}, Delta: {}s", cli.ticks, cli.delta);

    // Report once per simulated second
    let ticks_per_second = (1.0 / cli.delta).ceil().max(1.0) as u32;
    println!("Reporting every {} ticks (simulated time)", ticks_per_second);
    println!();

    let clock = ManualClock::new();
    let mut world = FarmWorld::with_clock(config, clock.clone())
        .context("Failed to create farm world")?;
    let mut farmer = match cli.seed {
        Some(seed) => AutoFarmer::new_with_seed(cli.actions_per_tick, seed),
        None => AutoFarmer::new(cli.actions_per_tick),
    }
    .context("Invalid autoplay farmer settings")?;

    println!("Initial state:");
    world.print_summary();
    world.draw_map();
    println!();

    let mut tick = 0;
    while tick < cli.ticks {
        let ticks_to_run = ticks_per_second.min(cli.ticks - tick);

        for _ in 0..ticks_to_run {
            tick += 1;
            clock.advance(cli.delta);
            farmer
                .act(&mut world)
                .with_context(|| format!("Autoplay farmer failed on tick {}", tick))?;
            world.tick();
        }

        println!(
            "--- After tick {} ({:.1}s simulated time) ---",
            tick,
            clock.now_secs()
        );
        world.print_summary();
        world.draw_map();
        println!();
    }

    info!("=== SIMULATION COMPLETE ===");
    info!("Ticks run: {}", world.ticks);
    info!("Harvests: {}", world.game_state.harvests_completed);
    info!("Final money: ${}", world.game_state.money);

    println!("=== Final State ===");
    world.print_summary();
    world.draw_map();
    Ok(())
}

#[cfg(feature = "ui")]
fn run_with_ui(config: FarmConfig) -> Result<()> {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;
    use farm_sim::ui::{FarmSimUIPlugin, FarmWorldResource};

    println!("Starting Farm Sim UI...");
    println!();
    println!("Controls:");
    println!("  Click sidebar  - Select tool");
    println!("  1/2/3/4        - Fertilizer / Water can / Wheat seeds / Harvest");
    println!("  Drag to grid   - Use the selected tool on the cell you release over");
    println!("  F              - Toggle fullscreen");
    println!("  ESC            - Exit");
    println!();

    let world = FarmWorld::new(&config).context("Failed to create farm world")?;
    let (screen_width, screen_height) = world.layout.screen_size();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,farm_sim=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Farm Sim".into(),
                        resolution: (screen_width as u32, screen_height as u32).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                }),
        )
        .insert_resource(FarmWorldResource(world))
        .add_plugins(FarmSimUIPlugin)
        .run();
    Ok(())
}

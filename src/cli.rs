use clap::Parser;

/// CLI arguments for the maze demo run
#[derive(Parser, Debug)]
#[command(name = "maze_muncher", about = "👾 Arcade muncher on a graph maze")]
pub struct Args {
    /// Path to the map file
    #[arg(short = 'm', long = "map")]
    pub map: String,

    /// Number of simulation steps to run
    #[arg(long, default_value_t = 600)]
    pub steps: u64,

    /// Fixed time step in seconds
    #[arg(long, default_value_t = 0.016)]
    pub dt: f32,

    /// Travel speed in cells per second
    #[arg(long, default_value_t = 4.0)]
    pub speed: f32,

    /// Starting cell, x coordinate
    #[arg(long, default_value_t = 0)]
    pub start_x: i32,

    /// Starting cell, y coordinate
    #[arg(long, default_value_t = 0)]
    pub start_y: i32,

    /// Direction script as step:direction pairs, e.g. "0:right,40:up"
    #[arg(long)]
    pub script: Option<String>,

    /// Random seed (random-walk input when no script is given)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Steps between random direction requests
    #[arg(long, default_value_t = 30)]
    pub wander_interval: u64,

    /// Suppress consumption logs (for benchmarks)
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,
}

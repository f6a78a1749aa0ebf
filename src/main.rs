use clap::Parser;
use maze_muncher::board::parse_board;
use maze_muncher::prelude::*;
use maze_muncher::simulation::{InputSource, RandomInput, ScriptedInput};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Parse board and place the muncher
    let mut board = parse_board(&args.map)?;
    let mut engine = SimulationEngine::new(
        &board,
        (args.start_x, args.start_y),
        args.speed,
        PowerConfig::default(),
    )?;

    // Scripted input if given, seeded random walk otherwise
    let mut input: Box<dyn InputSource> = match &args.script {
        Some(script) => Box::new(ScriptedInput::parse(script)?),
        None => {
            let rng = if let Some(seed) = args.seed {
                fastrand::Rng::with_seed(seed)
            } else {
                fastrand::Rng::new()
            };
            Box::new(RandomInput::new(rng, args.wander_interval))
        }
    };

    // Run simulation (no enemies and no renderer in the demo driver)
    let simulation_time = engine.run(&mut board, &mut (), &mut (), input.as_mut(), &args);

    // Print results
    engine.print_summary(&board, &args, simulation_time);

    Ok(())
}

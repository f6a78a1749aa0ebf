pub mod engine;
pub mod hooks;
pub mod input;
pub mod probe;

pub use engine::{SimulationEngine, StepState};
pub use hooks::{Enemy, EnemyRegistry, PresentationSink};
pub use input::{InputSource, RandomInput, ScriptedInput};

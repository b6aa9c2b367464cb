pub mod config;
pub mod event;
pub mod outcome;
pub mod sample;

pub use config::TrainConfig;
pub use event::TrainEvent;
pub use outcome::TrainingOutcome;
pub use sample::TrainingSample;

pub mod constants;
pub mod controls;
pub mod darkness;
pub mod paint;
pub mod params;
pub mod phrase;
pub mod sim;
pub mod tendril;
pub mod transition;

pub use controls::{action_for_key, KeyAction};
pub use darkness::{Crossing, DarknessState};
pub use paint::{Font, PaintOp, Painter, RecordingPainter, Rgba};
pub use params::SimParams;
pub use phrase::{Phrase, RecentPhrases, SpawnPolicy, NEGATIVE_THOUGHTS, POSITIVE_THOUGHTS};
pub use sim::{FrameReport, Simulation};
pub use tendril::{Behavior, BehaviorProfile, SpeedModifier, Tendril};
pub use transition::{TransitionEffect, TransitionFrame};

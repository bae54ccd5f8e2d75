//! Tuning systems and trajectories between them

pub mod freq;
pub mod interp;
pub mod presets;
pub mod table;
pub mod trajectory;

pub use freq::{cents_to_ratio, ratio_to_cents, to_frequencies};
pub use interp::CurveKind;
pub use presets::{preset_labels, preset_ratios, Preset, PresetId};
pub use table::Tuning;
pub use trajectory::{build_interpolated, mix_from_percent, TrajectoryBuilder};

// Offline dataset preparation utilities
//
// One-shot batch transformations run from the CLI. Nothing in the chat
// path depends on this module.

pub mod goemotions;
pub mod suicide_dataset;

pub use goemotions::{prepare_splits, EmotionRow, EmotionTable};
pub use suicide_dataset::{load_suicide_data, LabeledText, SuicideDataset};

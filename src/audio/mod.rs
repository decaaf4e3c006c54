//! Audio path injection for the word database.
//!
//! Audio files live in a flat, per-kind layout under one root:
//!
//! ```text
//! assets/audio/words/{word}.mp3
//! assets/audio/defs/{word}.mp3
//! assets/audio/sentences/{word}.mp3
//! assets/audio/fun/{word}.mp3
//! assets/audio/syllables/{word}.mp3
//! ```

pub mod database;
pub mod kind;
pub mod locator;
pub mod merge;
pub mod report;

pub use kind::AudioKind;
pub use locator::AudioLocator;
pub use merge::{merge_audio, CoverageStats, KindCoverage, MergeOptions};

// Analyzer module: aggregates submodules for different aspects of analysis.

pub mod frequency;
pub mod pattern;

pub use frequency::FrequencyAnalyzer;
pub use pattern::PatternAnalyzer;

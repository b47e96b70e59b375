//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod export;
pub mod hint;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_words};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark, sample_words};
pub use export::write_json;
pub use hint::{HintConfig, HintResult, strategize_words};
pub use solve::{SolveConfig, SolveResult, solve_words};

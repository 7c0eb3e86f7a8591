pub mod aggregate;
pub mod match_result;

pub use aggregate::AggregateResult;
pub use match_result::MatchResult;

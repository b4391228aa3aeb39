//! Score type for comparing rosters.
//!
//! A roster score orders solutions feasibility-first: the hard level counts
//! hard-constraint violations, the soft level holds the weighted cost.
//! Both levels are stored as non-positive penalties, so higher is better.

mod roster;


pub use roster::RosterScore;

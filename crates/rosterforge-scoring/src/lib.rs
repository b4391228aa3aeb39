//! Constraint checking and cost evaluation for nurse rosters.
//!
//! - [`LiveNurse`]: a nurse's roster, state sequence and latest report
//! - [`ConstraintChecker`]: hard flags and soft costs of one nurse, day by day
//! - [`SolutionEvaluator`]: all nurses plus demand coverage
//! - [`RosterSolution`]: the driver surface tying them to a scenario
//! - [`CostBreakdown`] and [`Indictments`]: where the cost comes from

pub mod analysis;
pub mod checker;
pub mod display;
pub mod evaluator;
pub mod live;
pub mod report;
pub mod solution;
pub mod staffing;

#[cfg(test)]
mod tests;

pub use analysis::{Constraint, ConstraintAnalysis, CostBreakdown, Indictments, NurseIndictment};
pub use checker::{ConstraintChecker, NurseInput};
pub use evaluator::{Evaluation, SolutionEvaluator};
pub use live::LiveNurse;
pub use report::NurseReport;
pub use solution::RosterSolution;
pub use staffing::{StaffingBounds, WorkDayBounds};

//! Tour distance evaluation.

mod evaluator;

pub use evaluator::TourEvaluator;

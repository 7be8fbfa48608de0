#[macro_use]
extern crate log;

pub(crate) mod bmr;
pub use bmr::BmrFormula;

pub(crate) mod tdee;
pub use tdee::TdeeProjector;

pub(crate) mod macros;
pub use macros::MacroAllocator;

pub(crate) mod estimator;
pub use estimator::estimate;

pub mod helpers;

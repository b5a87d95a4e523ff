//! Randomized search for magic squares of squares
//!
//! Two candidate strategies are available:
//! - Random: all nine cells drawn uniformly, then verified
//! - Constructive: two rows drawn, four cells derived by exact square roots,
//!   then verified
//!
//! Both run inside the same parallel worker loop (see [`parallel`]).

pub mod candidate;
pub mod config;
pub mod filler;
pub mod parallel;
pub mod result;

#[allow(unused_imports)]
pub use candidate::{GridGenerator, RandomGenerator};
#[allow(unused_imports)]
pub use config::{SearchConfig, Strategy};
#[allow(unused_imports)]
pub use result::{Counters, ProgressReport, Totals};

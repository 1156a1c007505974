//! Significance testing for the exposure/mortality association.

mod fisher;

pub use fisher::{fisher_exact_two_sided, ContingencyTable};

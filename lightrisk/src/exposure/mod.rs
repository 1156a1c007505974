//! Exposure classification of light fixtures.
//!
//! [`LightClassifier`] builds an [`ExposureRuleSet`] per habitat threshold:
//! a [`HabitatProximity`] rule with the swept threshold and, when street data
//! exists, a [`StreetProximity`] rule with the fixed street buffer. A light is
//! exposed if any rule fires.

mod classifier;
mod rules;

pub use classifier::LightClassifier;
pub use rules::{ExposureRule, ExposureRuleSet, HabitatProximity, StreetProximity};

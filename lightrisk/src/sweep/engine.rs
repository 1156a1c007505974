//! Sensitivity engine: classification, association and testing per threshold.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::config::SweepConfig;
use crate::error::AnalysisError;
use crate::exposure::LightClassifier;
use crate::mortality::MortalityAssociator;
use crate::records::{AnimalRecord, LightRecord};
use crate::spatial::{HabitatIndex, StreetIndex};
use crate::stats::ContingencyTable;

/// Deaths and exposed-light total for one light category at one threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryOutcome {
    /// Animal deaths associated with an exposed light
    pub deaths: usize,
    /// Number of exposed lights
    pub total: usize,
}

impl CategoryOutcome {
    pub fn new(deaths: usize, total: usize) -> Self {
        Self { deaths, total }
    }

    /// Exposed lights without an associated death.
    ///
    /// Saturates at zero: several deaths can share one light, so deaths may
    /// exceed the light count.
    pub fn safe(&self) -> usize {
        self.total.saturating_sub(self.deaths)
    }

    /// Deaths per 1000 exposed lights; 0 when no light is exposed.
    pub fn rate_per_1000(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.deaths as f64 / self.total as f64 * 1000.0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Result of one sweep iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRow {
    /// Habitat threshold in meters
    pub threshold_m: f64,
    pub acoustic: CategoryOutcome,
    pub silent: CategoryOutcome,
    /// Two-sided Fisher exact p-value; 1.0 when a category is empty
    pub p_value: f64,
    /// Sample odds ratio; `None` when the test was skipped
    pub odds_ratio: Option<f64>,
    /// `p_value < significance_level`
    pub significant: bool,
}

impl SweepRow {
    /// True when the significance test was skipped for an empty category.
    pub fn is_degenerate(&self) -> bool {
        self.acoustic.is_empty() || self.silent.is_empty()
    }

    /// The contingency table `[[deaths_a, safe_a], [deaths_s, safe_s]]`.
    pub fn table(&self) -> ContingencyTable {
        contingency_table(&self.acoustic, &self.silent)
    }
}

/// Rows of a full sweep plus the constants they were computed with.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepReport {
    pub check_distance_m: f64,
    pub street_buffer_m: f64,
    pub significance_level: f64,
    /// One row per threshold, in configured order
    pub rows: Vec<SweepRow>,
}

impl SweepReport {
    /// Rows flagged significant.
    pub fn significant_rows(&self) -> impl Iterator<Item = &SweepRow> {
        self.rows.iter().filter(|r| r.significant)
    }

    /// True if every row agrees on significance.
    pub fn is_robust(&self) -> bool {
        match self.rows.first() {
            Some(first) => self.rows.iter().all(|r| r.significant == first.significant),
            None => true,
        }
    }
}

fn contingency_table(acoustic: &CategoryOutcome, silent: &CategoryOutcome) -> ContingencyTable {
    ContingencyTable::new(
        acoustic.deaths as u64,
        acoustic.safe() as u64,
        silent.deaths as u64,
        silent.safe() as u64,
    )
}

/// Runs the habitat-threshold sensitivity sweep.
///
/// Owns the indexes and the sweep configuration; nothing is mutated after
/// construction, and thresholds are evaluated independently of each other.
#[derive(Debug)]
pub struct SensitivityEngine {
    config: SweepConfig,
    habitat: HabitatIndex,
    street: Option<StreetIndex>,
}

impl SensitivityEngine {
    /// Create an engine after validating the configuration.
    pub fn new(
        config: SweepConfig,
        habitat: HabitatIndex,
        street: Option<StreetIndex>,
    ) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self {
            config,
            habitat,
            street,
        })
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    pub fn habitat(&self) -> &HabitatIndex {
        &self.habitat
    }

    pub fn street(&self) -> Option<&StreetIndex> {
        self.street.as_ref()
    }

    fn classifier(&self) -> LightClassifier<'_> {
        LightClassifier::new(
            &self.habitat,
            self.street.as_ref(),
            self.config.street_buffer_m,
        )
    }

    /// Evaluate a single threshold.
    pub fn evaluate(
        &self,
        threshold_m: f64,
        acoustic: &[LightRecord],
        silent: &[LightRecord],
        animals: &[AnimalRecord],
    ) -> SweepRow {
        let classifier = self.classifier();
        let associator = MortalityAssociator::new(self.config.check_distance_m);

        let acoustic_exposed = classifier.classify(acoustic, threshold_m);
        let silent_exposed = classifier.classify(silent, threshold_m);

        let acoustic = CategoryOutcome::new(
            associator.count(&acoustic_exposed, animals),
            acoustic_exposed.len(),
        );
        let silent = CategoryOutcome::new(
            associator.count(&silent_exposed, animals),
            silent_exposed.len(),
        );

        for (category, outcome) in [("acoustic", &acoustic), ("silent", &silent)] {
            if outcome.deaths > outcome.total {
                warn!(
                    threshold_m,
                    category,
                    deaths = outcome.deaths,
                    lights = outcome.total,
                    "More deaths than exposed lights, safe count clamped to zero"
                );
            }
        }

        let (p_value, odds_ratio) = if acoustic.is_empty() || silent.is_empty() {
            debug!(threshold_m, "Empty exposed category, significance test skipped");
            (1.0, None)
        } else {
            let table = contingency_table(&acoustic, &silent);
            (table.fisher_exact(), Some(table.odds_ratio()))
        };

        let row = SweepRow {
            threshold_m,
            acoustic,
            silent,
            p_value,
            odds_ratio,
            significant: p_value < self.config.significance_level,
        };

        debug!(
            threshold_m,
            acoustic_deaths = row.acoustic.deaths,
            acoustic_lights = row.acoustic.total,
            silent_deaths = row.silent.deaths,
            silent_lights = row.silent.total,
            p_value = row.p_value,
            "Evaluated threshold"
        );
        row
    }

    /// Evaluate every configured threshold.
    ///
    /// Rows come back in configured order, also when evaluated in parallel.
    pub fn run(
        &self,
        acoustic: &[LightRecord],
        silent: &[LightRecord],
        animals: &[AnimalRecord],
    ) -> SweepReport {
        info!(
            thresholds = self.config.thresholds_m.len(),
            acoustic = acoustic.len(),
            silent = silent.len(),
            animals = animals.len(),
            parallel = self.config.parallel,
            "Starting sensitivity sweep"
        );

        let evaluate = |&threshold: &f64| self.evaluate(threshold, acoustic, silent, animals);
        let rows: Vec<SweepRow> = if self.config.parallel {
            self.config.thresholds_m.par_iter().map(evaluate).collect()
        } else {
            self.config.thresholds_m.iter().map(evaluate).collect()
        };

        let report = SweepReport {
            check_distance_m: self.config.check_distance_m,
            street_buffer_m: self.config.street_buffer_m,
            significance_level: self.config.significance_level,
            rows,
        };
        info!(
            rows = report.rows.len(),
            significant = report.significant_rows().count(),
            "Sensitivity sweep complete"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::GeoPoint;
    use crate::spatial::{HabitatCategory, HabitatLayers};

    fn habitat() -> HabitatIndex {
        let layers = HabitatLayers::new().with(
            HabitatCategory::NatureReserve,
            vec![
                GeoPoint::new(48.20, 16.30),
                GeoPoint::new(48.21, 16.31),
                GeoPoint::new(48.22, 16.32),
            ],
        );
        HabitatIndex::build(&layers).unwrap()
    }

    fn engine(config: SweepConfig) -> SensitivityEngine {
        SensitivityEngine::new(config, habitat(), None).unwrap()
    }

    #[test]
    fn test_outcome_rate() {
        assert_eq!(CategoryOutcome::new(1, 1).rate_per_1000(), 1000.0);
        assert_eq!(CategoryOutcome::new(3, 1500).rate_per_1000(), 2.0);
        assert_eq!(CategoryOutcome::new(0, 0).rate_per_1000(), 0.0);
    }

    #[test]
    fn test_outcome_safe_saturates() {
        assert_eq!(CategoryOutcome::new(2, 10).safe(), 8);
        assert_eq!(CategoryOutcome::new(5, 2).safe(), 0);
    }

    #[test]
    fn test_single_light_scenario() {
        let engine = engine(SweepConfig::default());
        let acoustic = vec![LightRecord::acoustic(48.20, 16.30)];
        let silent = vec![LightRecord::silent(48.50, 16.90)];
        let animals = vec![AnimalRecord::new(48.20, 16.3001)];

        let report = engine.run(&acoustic, &silent, &animals);
        assert_eq!(report.rows.len(), 5);
        for (row, threshold) in report.rows.iter().zip([250.0, 200.0, 150.0, 100.0, 50.0]) {
            assert_eq!(row.threshold_m, threshold);
            assert_eq!(row.acoustic, CategoryOutcome::new(1, 1));
            assert_eq!(row.acoustic.rate_per_1000(), 1000.0);
            assert_eq!(row.silent, CategoryOutcome::new(0, 0));
            assert_eq!(row.silent.rate_per_1000(), 0.0);
            assert_eq!(row.p_value, 1.0);
            assert!(row.odds_ratio.is_none());
            assert!(row.is_degenerate());
            assert!(!row.significant);
        }
    }

    #[test]
    fn test_empty_inputs_still_emit_every_row() {
        let engine = engine(SweepConfig::default());
        let report = engine.run(&[], &[], &[]);
        assert_eq!(report.rows.len(), 5);
        assert!(report.rows.iter().all(|r| r.p_value == 1.0));
        assert!(report.is_robust());
    }

    #[test]
    fn test_significant_difference_detected() {
        let engine = engine(SweepConfig::default().with_thresholds(vec![100.0]));
        // Ten lights per category, all within 50 m of a habitat point.
        let acoustic: Vec<LightRecord> = (0..10)
            .map(|i| LightRecord::acoustic(48.20 + i as f64 * 0.00005, 16.30))
            .collect();
        let silent: Vec<LightRecord> = (0..10)
            .map(|i| LightRecord::silent(48.22 + i as f64 * 0.00005, 16.32))
            .collect();
        // Deaths only next to silent lights, spread so each maps to its own light.
        let animals: Vec<AnimalRecord> = silent
            .iter()
            .take(9)
            .map(|l| AnimalRecord::new(l.location.lat, l.location.lon + 0.00001))
            .collect();

        let report = engine.run(&acoustic, &silent, &animals);
        let row = &report.rows[0];
        assert_eq!(row.acoustic, CategoryOutcome::new(0, 10));
        assert_eq!(row.silent, CategoryOutcome::new(9, 10));
        assert!(row.p_value < 0.05, "p = {}", row.p_value);
        assert!(row.significant);
        assert_eq!(row.table(), ContingencyTable::new(0, 10, 9, 1));
    }

    #[test]
    fn test_parallel_preserves_threshold_order() {
        let thresholds = vec![50.0, 250.0, 100.0, 200.0, 150.0];
        let sequential = engine(SweepConfig::default().with_thresholds(thresholds.clone()));
        let parallel =
            engine(SweepConfig::default().with_thresholds(thresholds.clone()).with_parallel(true));

        let acoustic = vec![
            LightRecord::acoustic(48.2005, 16.30),
            LightRecord::acoustic(48.2015, 16.30),
        ];
        let silent = vec![LightRecord::silent(48.2102, 16.31)];
        let animals = vec![AnimalRecord::new(48.2005, 16.30)];

        let a = sequential.run(&acoustic, &silent, &animals);
        let b = parallel.run(&acoustic, &silent, &animals);
        assert_eq!(a, b);
        let order: Vec<f64> = b.rows.iter().map(|r| r.threshold_m).collect();
        assert_eq!(order, thresholds);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = SensitivityEngine::new(
            SweepConfig::default().with_thresholds(Vec::new()),
            habitat(),
            None,
        );
        assert!(matches!(result, Err(AnalysisError::InvalidConfig(_))));
    }
}

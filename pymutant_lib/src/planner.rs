//! The `planner` module selects the candidate sites a run turns into mutants.
//!
//! The selection is a seeded shuffle of the full candidate list followed by a truncation to the
//! cap, so equal seeds and equal candidate lists always produce equal plans.

use crate::mutation_visitor::CandidateSite;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64;

/// The seed used when the user does not supply one.
pub static DEFAULT_SEED: u64 = 38473;

/// The largest number of mutants produced for one input when the user does not supply a cap.
pub static DEFAULT_CAP: usize = 100;

/// Settings that control the selection of sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerSettings {
    /// The random number generator seed.
    pub seed: u64,

    /// The largest number of sites to select.
    pub cap: usize,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        PlannerSettings {
            seed: DEFAULT_SEED,
            cap: DEFAULT_CAP,
        }
    }
}

/// The ordered list of sites selected for mutant generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationPlan {
    /// The settings that produced the plan.
    pub settings: PlannerSettings,

    /// The number of candidates the plan was selected from.
    pub candidate_count: usize,

    /// The selected sites, in emission order.
    pub sites: Vec<CandidateSite>,
}

impl MutationPlan {
    /// Select up to `settings.cap` sites from `candidates`.
    ///
    /// # Arguments
    ///
    /// * `candidates` - The full candidate list in traversal order.
    /// * `settings` - The seed and cap.
    pub fn new(candidates: &[CandidateSite], settings: &PlannerSettings) -> MutationPlan {
        let mut sites = candidates.to_vec();
        let mut rng = Pcg64::seed_from_u64(settings.seed);
        sites.shuffle(&mut rng);
        sites.truncate(settings.cap);

        log::debug!(
            "Selected {} of {} candidate sites with seed {}",
            sites.len(),
            candidates.len(),
            settings.seed
        );

        MutationPlan {
            settings: *settings,
            candidate_count: candidates.len(),
            sites,
        }
    }

    /// Return the number of sites in the plan.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Return true if the plan has no sites.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Iterate over the sites in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, CandidateSite> {
        self.sites.iter()
    }
}

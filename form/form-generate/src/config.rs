//! Generation request configuration.

use form_lattice::{LatticeFamily, LatticeParams, TetrahedralSubset};
use form_symmetry::SymmetryFamily;
use form_topology::{FaceDetectParams, MAX_CYCLE_LEN, MIN_CYCLE_LEN, VisibilityParams};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, GenerateResult};

/// Default cap on the total edge count after completion.
pub const DEFAULT_EDGE_BUDGET: usize = 2_000;

/// How the seed of a generated form is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SeedStrategy {
    /// Walk along a random distance shell from a random start point.
    RandomWalk {
        /// Number of edges in the walk.
        steps: usize,
        /// Seed for a reproducible walk; `None` draws from the thread RNG.
        rng_seed: Option<u64>,
    },

    /// The N-th canonical point pair of the lattice under the active group.
    SystematicIndex(usize),
}

impl Default for SeedStrategy {
    fn default() -> Self {
        Self::RandomWalk {
            steps: 3,
            rng_seed: None,
        }
    }
}

/// Configuration for one generation request.
///
/// # Example
///
/// ```
/// use form_generate::{GenerationConfig, SeedStrategy};
/// use form_lattice::LatticeFamily;
/// use form_symmetry::SymmetryFamily;
///
/// let config = GenerationConfig::icosahedral()
///     .with_seed_strategy(SeedStrategy::SystematicIndex(4))
///     .with_completion(false);
/// assert_eq!(config.effective_lattice_family(), LatticeFamily::Icosahedral);
/// assert!(config.validate().is_ok());
///
/// // Symmetry keys outside the presets select no symmetry
/// let config = GenerationConfig::new().with_symmetry_key("hexagonal");
/// assert_eq!(config.symmetry_family, None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct GenerationConfig {
    /// Full width of the candidate lattice.
    pub lattice_extent: f64,

    /// Lattice density (steps, shells or parity half-range per family).
    pub lattice_density: u32,

    /// Symmetry applied to the seed; `None` applies none.
    pub symmetry_family: Option<SymmetryFamily>,

    /// Lattice family override; `None` follows the symmetry family.
    pub lattice_family: Option<LatticeFamily>,

    /// Subset of the tetrahedral lattice to use.
    pub tetrahedral_subset: TetrahedralSubset,

    /// How the seed is chosen.
    pub seed_strategy: SeedStrategy,

    /// Maximum edge count the completion pass may grow the form to.
    pub max_edges_budget: usize,

    /// Run the completion pass after orbit expansion.
    pub completion: bool,

    /// Drop faces buried on both sides.
    pub visibility_filter: bool,

    /// Face search parameters.
    pub face_params: FaceDetectParams,

    /// Visibility ray parameters.
    pub visibility: VisibilityParams,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            lattice_extent: 2.0,
            lattice_density: 2,
            symmetry_family: Some(SymmetryFamily::Cubic),
            lattice_family: None,
            tetrahedral_subset: TetrahedralSubset::Full,
            seed_strategy: SeedStrategy::default(),
            max_edges_budget: DEFAULT_EDGE_BUDGET,
            completion: true,
            visibility_filter: true,
            face_params: FaceDetectParams::default(),
            visibility: VisibilityParams::default(),
        }
    }
}

impl GenerationConfig {
    /// Create a config with default values (cubic symmetry on a 3x3x3 grid).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cubic symmetry on a Cartesian grid.
    #[must_use]
    pub fn cubic() -> Self {
        Self::default()
    }

    /// Tetrahedral symmetry on the parity lattice.
    #[must_use]
    pub fn tetrahedral() -> Self {
        Self {
            lattice_density: 1,
            symmetry_family: Some(SymmetryFamily::Tetrahedral),
            ..Self::default()
        }
    }

    /// Icosahedral symmetry on concentric shells.
    #[must_use]
    pub fn icosahedral() -> Self {
        Self {
            lattice_density: 1,
            symmetry_family: Some(SymmetryFamily::Icosahedral),
            ..Self::default()
        }
    }

    /// Set lattice extent and density.
    #[must_use]
    pub const fn with_lattice(mut self, extent: f64, density: u32) -> Self {
        self.lattice_extent = extent;
        self.lattice_density = density;
        self
    }

    /// Set the symmetry family.
    #[must_use]
    pub const fn with_symmetry(mut self, family: Option<SymmetryFamily>) -> Self {
        self.symmetry_family = family;
        self
    }

    /// Set the symmetry family from a preset key.
    ///
    /// Unrecognised keys select no symmetry.
    #[must_use]
    pub fn with_symmetry_key(mut self, key: &str) -> Self {
        self.symmetry_family = SymmetryFamily::from_key(key);
        if self.symmetry_family.is_none() {
            debug!("Symmetry key '{key}' not recognised, using none");
        }
        self
    }

    /// Override the lattice family.
    #[must_use]
    pub const fn with_lattice_family(mut self, family: Option<LatticeFamily>) -> Self {
        self.lattice_family = family;
        self
    }

    /// Set the tetrahedral subset.
    #[must_use]
    pub const fn with_tetrahedral_subset(mut self, subset: TetrahedralSubset) -> Self {
        self.tetrahedral_subset = subset;
        self
    }

    /// Set the seed strategy.
    #[must_use]
    pub const fn with_seed_strategy(mut self, strategy: SeedStrategy) -> Self {
        self.seed_strategy = strategy;
        self
    }

    /// Set the completion edge budget.
    #[must_use]
    pub const fn with_max_edges_budget(mut self, budget: usize) -> Self {
        self.max_edges_budget = budget;
        self
    }

    /// Enable or disable the completion pass.
    #[must_use]
    pub const fn with_completion(mut self, completion: bool) -> Self {
        self.completion = completion;
        self
    }

    /// Enable or disable the visibility filter.
    #[must_use]
    pub const fn with_visibility_filter(mut self, enabled: bool) -> Self {
        self.visibility_filter = enabled;
        self
    }

    /// Set face search parameters.
    #[must_use]
    pub const fn with_face_params(mut self, params: FaceDetectParams) -> Self {
        self.face_params = params;
        self
    }

    /// Set visibility ray parameters.
    #[must_use]
    pub const fn with_visibility(mut self, params: VisibilityParams) -> Self {
        self.visibility = params;
        self
    }

    /// Lattice family actually generated.
    ///
    /// An explicit override wins; otherwise tetrahedral symmetry uses the
    /// parity lattice, icosahedral symmetry the concentric shells, and
    /// everything else the Cartesian grid.
    #[must_use]
    pub fn effective_lattice_family(&self) -> LatticeFamily {
        self.lattice_family.unwrap_or(match self.symmetry_family {
            Some(SymmetryFamily::Tetrahedral) => LatticeFamily::Tetrahedral,
            Some(SymmetryFamily::Icosahedral) => LatticeFamily::Icosahedral,
            Some(SymmetryFamily::Cubic) | None => LatticeFamily::Cartesian,
        })
    }

    /// Lattice parameters for this request.
    #[must_use]
    pub fn lattice_params(&self) -> LatticeParams {
        LatticeParams::new()
            .with_extent(self.lattice_extent)
            .with_density(self.lattice_density)
            .with_family(self.effective_lattice_family())
            .with_tetrahedral_subset(self.tetrahedral_subset)
    }

    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if the lattice parameters are invalid, the
    /// face cycle bounds are empty or outside `3..=12`, or the visibility
    /// parameters are negative or non-finite.
    pub fn validate(&self) -> GenerateResult<()> {
        self.lattice_params().validate()?;

        let FaceDetectParams {
            min_cycle_len: min,
            max_cycle_len: max,
            ..
        } = self.face_params;
        if min < MIN_CYCLE_LEN || max > MAX_CYCLE_LEN || min > max {
            return Err(GenerateError::InvalidCycleBounds { min, max });
        }

        let VisibilityParams { offset, bias } = self.visibility;
        if !(offset.is_finite() && bias.is_finite() && offset >= 0.0 && bias >= 0.0) {
            return Err(GenerateError::InvalidVisibility { offset, bias });
        }

        Ok(())
    }
}

//! The generation pipeline.

use std::sync::{Arc, OnceLock};

use form_lattice::{Lattice, generate_lattice};
use form_symmetry::{SymmetryGroup, SymmetryRegistry, expand_orbit};
use form_taxonomy::classify;
use form_topology::{FaceDetectParams, VisibilityParams, detect_faces, detect_volumes, filter_visible_faces};
use form_types::{Form, FormMetadata, FormTopology, Wireframe, WireframeBuilder};
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::completion::complete_wireframe;
use crate::config::{GenerationConfig, SeedStrategy};
use crate::enumerate::SystematicEnumerator;
use crate::error::GenerateResult;
use crate::seed::{Seed, random_walk_seed};

/// Generates forms for one validated configuration.
///
/// The lattice is built on construction; the systematic enumerator is built
/// on first use and reused for every later index. A generator holds no
/// mutable state after that, so one instance can serve many requests.
///
/// # Example
///
/// ```
/// use form_generate::{FormGenerator, GenerationConfig};
/// use form_lattice::TetrahedralSubset;
/// use form_symmetry::SymmetryRegistry;
///
/// let registry = SymmetryRegistry::new();
/// let config = GenerationConfig::tetrahedral().with_tetrahedral_subset(TetrahedralSubset::Corners);
/// let generator = FormGenerator::new(config, &registry).unwrap();
///
/// // Index 1 is one of the two face-diagonal tetrahedra
/// let form = generator.generate_index(1);
/// assert_eq!(form.metadata().common_name.as_deref(), Some("tetrahedron"));
///
/// let done = generator.generate_index(generator.enumerator().len());
/// assert!(done.is_exhausted());
/// ```
#[derive(Debug)]
pub struct FormGenerator {
    config: GenerationConfig,
    group: Arc<SymmetryGroup>,
    lattice: Lattice,
    enumerator: OnceLock<SystematicEnumerator>,
}

impl FormGenerator {
    /// Create a generator using the registry's preset for the configured
    /// symmetry family.
    ///
    /// Without a symmetry family the empty group is used and forms are the
    /// seed alone.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`](crate::GenerateError) if the configuration
    /// fails [`GenerationConfig::validate`].
    pub fn new(config: GenerationConfig, registry: &SymmetryRegistry) -> GenerateResult<Self> {
        let group = config
            .symmetry_family
            .map_or_else(|| Arc::new(SymmetryGroup::empty()), |family| registry.get(family));
        Self::with_group(config, group)
    }

    /// Create a generator with an explicit group, such as one built from
    /// custom symmetry settings or looked up by key.
    ///
    /// The config's symmetry family still selects the default lattice
    /// family but is otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`](crate::GenerateError) if the configuration
    /// fails [`GenerationConfig::validate`].
    pub fn with_group(config: GenerationConfig, group: Arc<SymmetryGroup>) -> GenerateResult<Self> {
        config.validate()?;
        let lattice = generate_lattice(&config.lattice_params())?;
        debug!(
            "Form generator ready: {} lattice points, group '{}' with {} transforms",
            lattice.len(),
            group.label(),
            group.len()
        );
        Ok(Self {
            config,
            group,
            lattice,
            enumerator: OnceLock::new(),
        })
    }

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// The active symmetry group.
    #[must_use]
    pub fn group(&self) -> &SymmetryGroup {
        &self.group
    }

    /// The candidate lattice.
    #[must_use]
    pub const fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Canonical seed pairs of the lattice under the active group.
    pub fn enumerator(&self) -> &SystematicEnumerator {
        self.enumerator
            .get_or_init(|| SystematicEnumerator::new(self.lattice.points(), &self.group))
    }

    /// Generate a form using the configured seed strategy.
    ///
    /// A random walk that draws the same point twice yields an empty form;
    /// callers may retry.
    #[must_use]
    pub fn generate(&self) -> Form {
        match self.config.seed_strategy {
            SeedStrategy::RandomWalk { steps, rng_seed } => {
                let mut rng: Box<dyn RngCore> = match rng_seed {
                    Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
                    None => Box::new(rand::thread_rng()),
                };
                random_walk_seed(&self.lattice, steps, &mut rng)
                    .map_or_else(Form::empty, |seed| self.generate_from_seed(&seed))
            }
            SeedStrategy::SystematicIndex(index) => self.generate_index(index),
        }
    }

    /// Generate the form seeded by the `index`-th canonical pair.
    ///
    /// Past the last representative an exhausted form is returned.
    #[must_use]
    pub fn generate_index(&self, index: usize) -> Form {
        match self.enumerator().get(index) {
            Some(representative) => self.generate_from_seed(&representative.seed()),
            None => {
                debug!(
                    "Index {index} past {} representatives, enumeration exhausted",
                    self.enumerator().len()
                );
                Form::exhausted()
            }
        }
    }

    /// Generate a form from explicit seed geometry.
    ///
    /// The completion pass, when enabled, is restricted to the seed's edge
    /// lengths. A degenerate seed yields an empty form.
    #[must_use]
    pub fn generate_from_seed(&self, seed: &Seed) -> Form {
        if seed.is_degenerate() {
            debug!("Degenerate seed, returning empty form");
            return Form::empty();
        }

        let orbit = expand_orbit(WireframeBuilder::new(), &seed.points, &seed.edges, &self.group);

        let (wireframe, budget_exhausted) = if self.config.completion {
            let completion = complete_wireframe(orbit, &seed.edge_lengths(), self.config.max_edges_budget);
            (completion.wireframe, completion.budget_exhausted)
        } else {
            (orbit, false)
        };

        let label = self.group.label();
        let metadata = FormMetadata {
            symmetry_label: label.to_owned(),
            symmetry_complete: !label.is_empty() && self.group.is_complete(),
            budget_exhausted,
            ..FormMetadata::default()
        };

        let visibility = self.config.visibility_filter.then_some(&self.config.visibility);
        classify_wireframe(wireframe, metadata, &self.config.face_params, visibility)
    }
}

/// Validate `config`, then generate one form with its seed strategy.
///
/// # Errors
///
/// Returns [`GenerateError`](crate::GenerateError) if the configuration is
/// invalid.
///
/// # Example
///
/// ```
/// use form_generate::{GenerationConfig, SeedStrategy, generate_form};
/// use form_symmetry::SymmetryRegistry;
///
/// let registry = SymmetryRegistry::new();
/// let config = GenerationConfig::new().with_seed_strategy(SeedStrategy::RandomWalk {
///     steps: 3,
///     rng_seed: Some(42),
/// });
/// let first = generate_form(config.clone(), &registry).unwrap();
/// let second = generate_form(config, &registry).unwrap();
/// assert_eq!(first, second);
/// ```
pub fn generate_form(config: GenerationConfig, registry: &SymmetryRegistry) -> GenerateResult<Form> {
    Ok(FormGenerator::new(config, registry)?.generate())
}

/// Run face detection, visibility filtering, volume detection and
/// classification on a wireframe, then freeze it into a [`Form`].
///
/// `metadata` supplies the fields the pipeline does not compute here
/// (symmetry label and flags). Passing `None` for `visibility` keeps every
/// detected face.
///
/// # Example
///
/// ```
/// use form_generate::classify_wireframe;
/// use form_topology::{FaceDetectParams, VisibilityParams};
/// use form_types::{FormMetadata, FormTopology, Point3, Wireframe};
///
/// let tetrahedron = Wireframe::from_parts(
///     vec![
///         Point3::new(1.0, 1.0, 1.0),
///         Point3::new(1.0, -1.0, -1.0),
///         Point3::new(-1.0, 1.0, -1.0),
///         Point3::new(-1.0, -1.0, 1.0),
///     ],
///     &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)],
/// );
/// let form = classify_wireframe(
///     tetrahedron,
///     FormMetadata::default(),
///     &FaceDetectParams::default(),
///     Some(&VisibilityParams::default()),
/// );
/// assert_eq!(form.faces().len(), 4);
/// assert_eq!(form.metadata().volume_count, 1);
/// assert_eq!(form.metadata().common_name.as_deref(), Some("tetrahedron"));
/// ```
#[must_use]
pub fn classify_wireframe(
    wireframe: Wireframe,
    mut metadata: FormMetadata,
    face_params: &FaceDetectParams,
    visibility: Option<&VisibilityParams>,
) -> Form {
    let detection = detect_faces(&wireframe, face_params);
    metadata.faces_truncated = detection.truncated;

    let faces = match visibility {
        Some(params) => filter_visible_faces(wireframe.points(), &detection.faces, params),
        None => detection.faces,
    };
    let volumes = detect_volumes(&faces);

    let taxonomy = classify(wireframe.points(), wireframe.edges(), &faces);
    metadata.common_name = taxonomy.common_name().map(str::to_owned);
    metadata.canonical_signature = taxonomy.signature;
    metadata.canonical_hash = taxonomy.hash;

    let form = Form::assemble(wireframe, faces, volumes, metadata);
    let meta = form.metadata();
    info!(
        "Generated form {}: {} points, {} edges, {} faces, {} volumes{}",
        meta.canonical_hash,
        meta.point_count,
        meta.edge_count,
        meta.face_count,
        meta.volume_count,
        meta.common_name.as_deref().map_or_else(String::new, |name| format!(" ({name})"))
    );
    form
}

//! End-to-end generation scenarios.
//!
//! Run with: cargo test -p form-generate --test scenarios

use std::f64::consts::TAU;
use std::sync::Arc;

use form_generate::{FormGenerator, GenerationConfig, Seed, SeedStrategy, generate_form};
use form_lattice::polyhedra::PHI;
use form_lattice::{LatticeFamily, TetrahedralSubset};
use form_symmetry::{SymmetryFamily, SymmetryGroup, SymmetryRegistry, Transform};
use form_types::{Form, FormTopology, Point3, Vector3, Wireframe};
use hashbrown::HashSet;

// =============================================================================
// Helpers
// =============================================================================

fn generator(config: GenerationConfig) -> FormGenerator {
    FormGenerator::new(config, &SymmetryRegistry::new()).unwrap()
}

fn face_sizes(form: &Form) -> Vec<usize> {
    let mut sizes: Vec<usize> = form.faces().iter().map(|f| f.len()).collect();
    sizes.sort_unstable();
    sizes
}

fn tetra_seed() -> Seed {
    Seed::segment(Point3::new(1.0, 1.0, 1.0), Point3::new(1.0, -1.0, -1.0))
}

fn c3_group() -> Arc<SymmetryGroup> {
    let rotation = Transform::rotation(&Vector3::new(1.0, 1.0, 1.0), TAU / 3.0);
    Arc::new(SymmetryGroup::closure("c3", &[rotation]))
}

// =============================================================================
// Platonic Solids
// =============================================================================

#[test]
fn cube_seed() {
    let form = generator(GenerationConfig::cubic())
        .generate_from_seed(&Seed::segment(Point3::new(0.5, 0.5, 0.5), Point3::new(0.5, 0.5, -0.5)));

    assert_eq!(form.point_count(), 8);
    assert_eq!(form.edge_count(), 12);
    assert_eq!(face_sizes(&form), vec![4; 6]);
    assert_eq!(form.volumes().len(), 1);

    let meta = form.metadata();
    assert!(meta.is_connected);
    assert_eq!(meta.symmetry_label, "cubic");
    assert!(meta.symmetry_complete);
    assert_eq!(meta.common_name.as_deref(), Some("cube"));
    assert!(meta.canonical_signature.starts_with("F6-{6xV4}|V8-"));
    assert_eq!(meta.canonical_hash.len(), 16);
}

#[test]
fn tetrahedron_seed() {
    let form = generator(GenerationConfig::tetrahedral()).generate_from_seed(&tetra_seed());

    assert_eq!(form.point_count(), 4);
    assert_eq!(form.edge_count(), 6);
    assert_eq!(face_sizes(&form), vec![3; 4]);
    assert_eq!(form.volumes().len(), 1);
    assert_eq!(form.metadata().common_name.as_deref(), Some("tetrahedron"));
}

#[test]
fn body_diagonal_under_cubic() {
    // Inversion maps each body diagonal onto itself: four disjoint segments
    let seed = Seed::segment(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
    let form = generator(GenerationConfig::cubic()).generate_from_seed(&seed);

    assert_eq!(form.point_count(), 8);
    assert_eq!(form.edge_count(), 4);
    assert!(form.faces().is_empty());
    assert!(form.volumes().is_empty());
    assert!(!form.metadata().is_connected);
}

#[test]
fn stella_octangula_under_cubic() {
    // The tetrahedron seed under the full cubic group gains its inverted twin
    let form = generator(GenerationConfig::cubic()).generate_from_seed(&tetra_seed());

    assert_eq!(form.point_count(), 8);
    assert_eq!(form.edge_count(), 12);
    // Spike faces have buried centres but visible corners
    assert_eq!(face_sizes(&form), vec![3; 8]);
    assert_eq!(form.volumes().len(), 2);
    assert_eq!(form.metadata().volume_count, 2);
    assert_eq!(form.metadata().common_name, None);

    let unfiltered = generator(GenerationConfig::cubic().with_visibility_filter(false)).generate_from_seed(&tetra_seed());
    assert_eq!(unfiltered.faces().len(), 8);
    assert_eq!(unfiltered.metadata().canonical_hash, form.metadata().canonical_hash);
}

#[test]
fn octahedron_seed() {
    let seed = Seed::segment(Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0));
    let form = generator(GenerationConfig::cubic()).generate_from_seed(&seed);

    assert_eq!(form.point_count(), 6);
    assert_eq!(form.edge_count(), 12);
    // The three equatorial squares are buried and filtered
    assert_eq!(face_sizes(&form), vec![3; 8]);
    assert_eq!(form.volumes().len(), 1);
    assert_eq!(form.metadata().common_name.as_deref(), Some("octahedron"));

    let unfiltered = generator(GenerationConfig::cubic().with_visibility_filter(false)).generate_from_seed(&seed);
    assert_eq!(unfiltered.faces().len(), 11);
    assert_ne!(unfiltered.metadata().canonical_hash, form.metadata().canonical_hash);
}

#[test]
fn icosahedron_seed() {
    let seed = Seed::segment(Point3::new(0.0, 1.0, PHI), Point3::new(0.0, -1.0, PHI));
    let form = generator(GenerationConfig::icosahedral()).generate_from_seed(&seed);

    assert_eq!(form.point_count(), 12);
    assert_eq!(form.edge_count(), 30);
    assert_eq!(face_sizes(&form), vec![3; 20]);
    assert_eq!(form.volumes().len(), 1);
    assert_eq!(form.metadata().symmetry_label, "icosahedral");
    assert_eq!(form.metadata().common_name.as_deref(), Some("icosahedron"));
}

// =============================================================================
// Completion
// =============================================================================

#[test]
fn completion_closes_three_fold_star() {
    let config = GenerationConfig::new();
    let generator = FormGenerator::with_group(config.clone(), c3_group()).unwrap();
    let form = generator.generate_from_seed(&tetra_seed());

    assert_eq!(form.point_count(), 4);
    assert_eq!(form.edge_count(), 6);
    assert_eq!(form.faces().len(), 4);
    assert_eq!(form.volumes().len(), 1);
    assert!(!form.metadata().budget_exhausted);
    assert_eq!(form.metadata().symmetry_label, "c3");

    let open = FormGenerator::with_group(config.with_completion(false), c3_group())
        .unwrap()
        .generate_from_seed(&tetra_seed());
    assert_eq!(open.edge_count(), 3);
    assert!(open.faces().is_empty());
    assert!(open.volumes().is_empty());
}

#[test]
fn completion_respects_edge_budget() {
    let config = GenerationConfig::new().with_max_edges_budget(4);
    let form = FormGenerator::with_group(config, c3_group())
        .unwrap()
        .generate_from_seed(&tetra_seed());

    assert_eq!(form.edge_count(), 4);
    assert!(form.metadata().budget_exhausted);
    // One base edge closes a single triangle; no volume yet
    assert_eq!(form.faces().len(), 1);
    assert!(form.volumes().is_empty());
}

// =============================================================================
// Systematic Enumeration
// =============================================================================

#[test]
fn enumeration_pagination() {
    let generator = generator(GenerationConfig::cubic().with_lattice(2.0, 2));
    let enumerator = generator.enumerator();
    assert!(enumerator.len() > 2);

    let first = enumerator.get(0).unwrap();
    let second = enumerator.get(1).unwrap();
    assert_ne!(first.key(), second.key());

    let keys: HashSet<_> = enumerator.representatives().iter().map(|r| r.key()).collect();
    assert_eq!(keys.len(), enumerator.len());

    // Same index, same form
    assert_eq!(generator.generate_index(1), generator.generate_index(1));
    assert!(!generator.generate_index(0).is_exhausted());
}

#[test]
fn enumeration_exhaustion() {
    let generator = generator(GenerationConfig::cubic().with_lattice(1.0, 1));
    let past_end = generator.enumerator().len();

    let form = generator.generate_index(past_end);
    assert!(form.is_exhausted());
    assert!(form.is_empty());
    assert_eq!(form.faces().len(), 0);
    assert_eq!(form.metadata().canonical_signature, "");

    let config = GenerationConfig::cubic()
        .with_lattice(1.0, 1)
        .with_seed_strategy(SeedStrategy::SystematicIndex(1_000));
    let form = generate_form(config, &SymmetryRegistry::new()).unwrap();
    assert!(form.is_exhausted());
}

#[test]
fn tetrahedral_corners_enumerate_both_tetrahedra() {
    let generator = generator(GenerationConfig::tetrahedral().with_tetrahedral_subset(TetrahedralSubset::Corners));
    assert_eq!(generator.lattice().family(), LatticeFamily::Tetrahedral);
    assert_eq!(generator.enumerator().len(), 4);

    let names: Vec<Option<String>> = (0..4)
        .map(|i| generator.generate_index(i).metadata().common_name.clone())
        .collect();
    assert_eq!(names[1].as_deref(), Some("tetrahedron"));
    assert_eq!(names[2].as_deref(), Some("tetrahedron"));
}

// =============================================================================
// Degraded Symmetry
// =============================================================================

#[test]
fn unknown_group_key_applies_no_symmetry() {
    let registry = SymmetryRegistry::new();
    let group = registry.get_or_compute("heptagonal");
    assert!(group.is_empty());

    let form = FormGenerator::with_group(GenerationConfig::new(), group)
        .unwrap()
        .generate_from_seed(&tetra_seed());
    assert_eq!(form.point_count(), 2);
    assert_eq!(form.edge_count(), 1);
    assert_eq!(form.metadata().symmetry_label, "");
    assert!(!form.metadata().symmetry_complete);
}

#[test]
fn truncated_closure_is_flagged() {
    // One radian is not a rational fraction of a turn
    let rotation = Transform::rotation(&Vector3::z(), 1.0);
    let group = Arc::new(SymmetryGroup::closure("irrational", &[rotation]));
    assert!(!group.is_complete());

    let form = FormGenerator::with_group(GenerationConfig::new().with_completion(false), group)
        .unwrap()
        .generate_from_seed(&Seed::segment(Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 0.0, 1.0)));
    assert!(!form.is_empty());
    assert_eq!(form.metadata().symmetry_label, "irrational");
    assert!(!form.metadata().symmetry_complete);
}

// =============================================================================
// Random Walks
// =============================================================================

#[test]
fn random_walk_forms_use_one_edge_length() {
    let registry = SymmetryRegistry::new();
    let mut produced = 0;
    for rng_seed in 0..12 {
        let config = GenerationConfig::cubic().with_seed_strategy(SeedStrategy::RandomWalk {
            steps: 3,
            rng_seed: Some(rng_seed),
        });
        let form = generate_form(config, &registry).unwrap();
        if form.is_empty() {
            continue;
        }
        produced += 1;
        let wireframe = Wireframe::from_parts(
            form.points().to_vec(),
            &form.edges().iter().map(|e| (e.a(), e.b())).collect::<Vec<_>>(),
        );
        assert_eq!(wireframe.distinct_edge_lengths().len(), 1);
        assert_eq!(form.metadata().symmetry_label, SymmetryFamily::Cubic.key());
    }
    assert!(produced > 0);
    assert_eq!(registry.cached_count(), 1);
}

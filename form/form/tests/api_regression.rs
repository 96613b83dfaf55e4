//! API Regression Tests for the Form Crate Ecosystem
//!
//! These tests pin the public API of the form-* crates. They are organized
//! in tiers of increasing scope:
//!
//! - Tier 1: Foundation (form-types, form-symmetry, form-lattice)
//! - Tier 2: Detection & Classification (form-topology, form-taxonomy)
//! - Tier 3: Pipeline & Output (form-generate, form-io)
//!
//! A failure after an API change indicates a breaking change that needs a
//! version bump.

// Allow test-specific patterns
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use form::{io, lattice, prelude::*, symmetry, taxonomy, topology, types};

// =============================================================================
// TIER 1: Foundation
// =============================================================================

mod tier1_foundation {
    use super::*;

    #[test]
    fn edges_are_canonical() {
        let edge = types::Edge::new(5, 2).unwrap();
        assert_eq!(edge.key(), (2, 5));
        assert!(types::Edge::new(3, 3).is_none());
    }

    #[test]
    fn point_set_merges_within_tolerance() {
        let mut set = types::PointSet::new();
        let a = set.find_or_insert(Point3::new(0.0, 0.0, 0.0));
        let b = set.find_or_insert(Point3::new(types::POINT_EPSILON / 10.0, 0.0, 0.0));
        assert_eq!(a, b);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn preset_group_orders() {
        let registry = SymmetryRegistry::new();
        for family in SymmetryFamily::ALL {
            let group = registry.get(family);
            assert_eq!(group.len(), family.order());
            assert!(group.is_complete());
            assert_eq!(group.label(), family.key());
        }
        assert_eq!(registry.cached_count(), 3);
    }

    #[test]
    fn group_closure_properties() {
        let group = SymmetryFamily::Tetrahedral.build();
        assert!(group.contains(&Transform::identity()));
        assert!(group.is_closed_under_composition());
        assert_eq!(group.status(), symmetry::ClosureStatus::Closed);
    }

    #[test]
    fn settings_build_custom_groups() {
        let group = SymmetrySettings::default().build_group();
        assert_eq!(group.len(), 48);
        assert_eq!(group.label(), symmetry::CUSTOM_GROUP_LABEL);
    }

    #[test]
    fn lattice_families() {
        let cartesian = generate_lattice(&LatticeParams::cartesian(2.0, 2)).unwrap();
        assert_eq!(cartesian.len(), 27);

        let shells = generate_lattice(&LatticeParams::icosahedral(2.0, 1)).unwrap();
        assert_eq!(shells.len(), 33);
        assert_eq!(shells.family(), LatticeFamily::Icosahedral);

        let corners = generate_lattice(
            &LatticeParams::tetrahedral(2.0, 1).with_tetrahedral_subset(lattice::TetrahedralSubset::Corners),
        )
        .unwrap();
        assert_eq!(corners.len(), 8);

        assert!(matches!(
            generate_lattice(&LatticeParams::cartesian(0.0, 2)),
            Err(lattice::LatticeError::InvalidExtent(_))
        ));
    }
}

// =============================================================================
// TIER 2: Detection & Classification
// =============================================================================

mod tier2_detection {
    use super::*;

    fn cube_wireframe() -> Wireframe {
        let seed = [Point3::new(0.5, 0.5, 0.5), Point3::new(0.5, 0.5, -0.5)];
        symmetry::expand_orbit(
            types::WireframeBuilder::new(),
            &seed,
            &[(0, 1)],
            &SymmetryFamily::Cubic.build(),
        )
    }

    #[test]
    fn cube_faces_and_volume() {
        let wireframe = cube_wireframe();
        let detection = topology::detect_faces(&wireframe, &topology::FaceDetectParams::default());
        assert!(!detection.truncated);
        assert_eq!(detection.faces.len(), 6);
        assert!(detection.faces.iter().all(|f| f.len() == 4));

        let visible = topology::filter_visible_faces(
            wireframe.points(),
            &detection.faces,
            &topology::VisibilityParams::default(),
        );
        assert_eq!(visible.len(), 6);
        assert_eq!(topology::detect_volumes(&visible).len(), 1);
    }

    #[test]
    fn cube_taxonomy() {
        let wireframe = cube_wireframe();
        let faces = topology::detect_faces(&wireframe, &topology::FaceDetectParams::default()).faces;
        let taxonomy = classify(wireframe.points(), wireframe.edges(), &faces);
        assert_eq!(taxonomy.face_profile, "F6-{6xV4}");
        assert_eq!(taxonomy.common_name(), Some("cube"));
        assert_eq!(taxonomy.hash, taxonomy::signature_hash(&taxonomy.signature));
    }

    #[test]
    fn fnv_reference_vectors() {
        assert_eq!(taxonomy::fnv1a_64(b""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(taxonomy::fnv1a_64(b"a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(taxonomy::fnv1a_64(b"foobar"), 0x8594_4171_f739_67e8);
    }
}

// =============================================================================
// TIER 3: Pipeline & Output
// =============================================================================

mod tier3_pipeline {
    use super::*;

    #[test]
    fn generator_lifecycle() {
        let registry = SymmetryRegistry::new();
        let generator = FormGenerator::new(GenerationConfig::cubic().with_lattice(1.0, 1), &registry).unwrap();
        assert_eq!(generator.lattice().len(), 8);
        assert_eq!(generator.group().len(), 48);

        let forms: Vec<Form> = (0..=generator.enumerator().len())
            .map(|i| generator.generate_index(i))
            .collect();
        assert!(forms.last().unwrap().is_exhausted());
        assert_eq!(forms[0].metadata().common_name.as_deref(), Some("cube"));
    }

    #[test]
    fn invalid_configuration_is_an_error() {
        let registry = SymmetryRegistry::new();
        let config = GenerationConfig::new().with_lattice(2.0, 1_000);
        assert!(matches!(
            generate_form(config, &registry),
            Err(form::generate::GenerateError::Lattice(_))
        ));
    }

    #[test]
    fn text_export_uses_one_based_indices() {
        let registry = SymmetryRegistry::new();
        let config = GenerationConfig::tetrahedral()
            .with_tetrahedral_subset(lattice::TetrahedralSubset::Corners)
            .with_seed_strategy(SeedStrategy::SystematicIndex(1));
        let tetrahedron = generate_form(config, &registry).unwrap();

        let mut out = Vec::new();
        io::write_wireframe_text(&tetrahedron, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let indices: Vec<u32> = text
            .lines()
            .filter(|l| l.starts_with("l ") || l.starts_with("f "))
            .flat_map(|l| l.split_whitespace().skip(1).map(|t| t.parse::<u32>().unwrap()).collect::<Vec<_>>())
            .collect();
        assert!(indices.iter().all(|&i| (1..=4).contains(&i)));
        assert!(indices.contains(&4));
    }

    #[test]
    fn document_roundtrip_preserves_dedup() {
        let registry = SymmetryRegistry::new();
        let generator = FormGenerator::new(GenerationConfig::cubic(), &registry).unwrap();
        let octahedron =
            generator.generate_from_seed(&Seed::segment(Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)));

        let document = io::document_from_form(&octahedron, io::SceneSettings::default(), "");
        let json = document.to_json().unwrap();
        let restored = io::wireframe_from_document(&io::SceneDocument::from_json(&json).unwrap());
        assert_eq!(restored.point_count(), 6);
        assert_eq!(restored.edge_count(), 12);
    }
}

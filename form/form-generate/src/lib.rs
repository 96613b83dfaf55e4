//! Generation pipeline for symmetric lattice forms.
//!
//! A generation request flows through these stages:
//!
//! 1. **Lattice** - candidate points for the target symmetry family
//! 2. **Seed** - a random shell walk, the N-th canonical pair from the
//!    [`SystematicEnumerator`], or an explicit [`Seed`]
//! 3. **Orbit** - the seed expanded under the active symmetry group
//! 4. **Completion** - optional closure pass adding missing shell edges
//! 5. **Detection** - faces, visibility filtering and volumes
//! 6. **Classification** - canonical signature and name
//!
//! Data conditions (degenerate seeds, unknown groups, exhausted
//! enumeration, edge budgets) never fail; they are reported through
//! [`FormMetadata`](form_types::FormMetadata) flags. Only invalid
//! configuration returns an error.
//!
//! # Example
//!
//! ```
//! use form_generate::{FormGenerator, GenerationConfig, SeedStrategy};
//! use form_symmetry::{SymmetryFamily, SymmetryRegistry};
//! use form_types::FormTopology;
//!
//! let registry = SymmetryRegistry::new();
//! let config = GenerationConfig::new()
//!     .with_lattice(1.0, 1)
//!     .with_symmetry(Some(SymmetryFamily::Cubic))
//!     .with_seed_strategy(SeedStrategy::SystematicIndex(0));
//!
//! let generator = FormGenerator::new(config, &registry).unwrap();
//! let form = generator.generate();
//! assert_eq!(form.point_count(), 8);
//! assert_eq!(form.metadata().common_name.as_deref(), Some("cube"));
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod completion;
mod config;
mod enumerate;
mod error;
mod pipeline;
mod seed;

pub use completion::{Completion, complete_wireframe};
pub use config::{DEFAULT_EDGE_BUDGET, GenerationConfig, SeedStrategy};
pub use enumerate::{PairKey, Representative, SystematicEnumerator};
pub use error::{GenerateError, GenerateResult};
pub use pipeline::{FormGenerator, classify_wireframe, generate_form};
pub use seed::{Seed, random_walk_seed};

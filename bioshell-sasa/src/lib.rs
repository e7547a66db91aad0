//! Solvent accessible surface area (SASA) by the Lee & Richards method.
//!
//! This crate provides the two tightly coupled geometric engines behind an
//! L&R SASA calculation: a cell-list [`NeighborIndex`] that finds contact
//! pairs between atoms in roughly `O(N)` time, and an [`LrIntegrator`] that
//! slices the structure and reduces each slice to a union-of-arcs problem.
//! Coordinate storage, PDB/mmCIF parsing, atom-to-radius classification and
//! CLI/output formatting are all left to the caller — see [`CoordsView`] for
//! the boundary this crate consumes.
//!
//! # Example
//! ```
//! use bioshell_sasa::{compute_lr_sasa, LrConfig};
//! use bioshell_pdb::calc::Vec3;
//!
//! let coords = vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0)];
//! let atom_radii = vec![1.7, 1.7];
//! let config = LrConfig { delta: 0.25, ..Default::default() };
//! let report = compute_lr_sasa(&coords, &atom_radii, &config).unwrap();
//! assert_eq!(report.per_atom_area.len(), 2);
//! ```

#![allow(clippy::needless_return)]

mod arcs;
mod coords;
mod errors;
mod logger;
mod lr_integrator;
mod neighbor_index;
mod report;

pub use coords::CoordsView;
pub use errors::SasaError;
pub use logger::{DefaultLogger, NullLogger, SasaLogger};
pub use lr_integrator::LrIntegrator;
pub use neighbor_index::NeighborIndex;
pub use report::{compute_lr_sasa, LrConfig, SasaReport, SasaStatus};

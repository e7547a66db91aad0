use bioshell_pdb::calc::Vec3;

/// A read-only view of an N-atom point cloud.
///
/// This is the boundary the core consumes: the coordinate storage itself
/// (a flat XYZ buffer, a [`bioshell_pdb::Structure`], a trajectory frame,
/// whatever the caller owns) is never mutated and never owned by this
/// crate. Any type that can hand back a 3D position by atom index can
/// drive [`crate::compute_lr_sasa`].
///
/// `Send + Sync` supertraits let `dyn CoordsView` cross the `rayon` worker
/// boundary in [`crate::LrIntegrator::run`] without a second, thread-safe
/// trait object type.
pub trait CoordsView: Send + Sync {
    /// Number of atoms in the point cloud.
    fn len(&self) -> usize;

    /// Returns `true` when this view holds no atoms.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of the `i`-th atom.
    fn position(&self, i: usize) -> Vec3;
}

impl CoordsView for [Vec3] {
    fn len(&self) -> usize {
        <[Vec3]>::len(self)
    }

    fn position(&self, i: usize) -> Vec3 {
        self[i]
    }
}

impl CoordsView for Vec<Vec3> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn position(&self, i: usize) -> Vec3 {
        self[i]
    }
}

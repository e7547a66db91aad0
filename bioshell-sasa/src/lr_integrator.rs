use crate::arcs::{exposed_measure, BuriedArc};
use crate::coords::CoordsView;
use crate::logger::SasaLogger;
use crate::neighbor_index::NeighborIndex;

/// Per-slice working atom: its slice-local circle and a pointer back to the
/// original atom index (spec.md §3, "Slice state").
struct SliceAtom {
    global: u32,
    x: f64,
    y: f64,
    r: f64,
    dr: f64,
}

/// Drives the Lee & Richards slice loop and accumulates per-atom area.
///
/// Holds only shared, read-only references to the coordinates, contact
/// radii (already probe-augmented) and the prebuilt [`NeighborIndex`] —
/// exactly the state spec.md §5 says workers may share across threads
/// without synchronization.
pub struct LrIntegrator<'a> {
    coords: &'a dyn CoordsView,
    radii: &'a [f64],
    nb: &'a NeighborIndex,
    delta: f64,
}

impl<'a> LrIntegrator<'a> {
    pub fn new(coords: &'a dyn CoordsView, radii: &'a [f64], nb: &'a NeighborIndex, delta: f64) -> LrIntegrator<'a> {
        LrIntegrator { coords, radii, nb, delta }
    }

    /// `(z_min, z_max)` as defined in spec.md §4.2.1.
    fn z_range(&self) -> (f64, f64) {
        let n = self.coords.len();
        let mut z_lo = f64::INFINITY;
        let mut z_hi = f64::NEG_INFINITY;
        for i in 0..n {
            let z = self.coords.position(i).z;
            let r = self.radii[i];
            z_lo = z_lo.min(z - r);
            z_hi = z_hi.max(z + r);
        }
        (z_lo + self.delta / 2.0, z_hi)
    }

    fn n_slices(&self) -> usize {
        let (z_min, z_max) = self.z_range();
        if z_max <= z_min {
            return 0;
        }
        (((z_max - z_min) / self.delta).ceil() as usize).max(1)
    }

    /// Integrates slices `[lo, hi)` (by index, `z = z_min + s*delta`) and
    /// returns a full-length per-atom partial sum. Independent ranges never
    /// touch a common mutable buffer, which is what makes the threaded
    /// variant in [`LrIntegrator::run`] safe without locks.
    fn integrate_range(&self, lo: usize, hi: usize) -> Vec<f64> {
        let n_atoms = self.coords.len();
        let mut sasa = vec![0.0_f64; n_atoms];
        let (z_min, _) = self.z_range();

        // reusable scratch, sized for the whole structure so slice-local
        // indices never need reallocating mid-loop
        let mut slice_local: Vec<i32> = vec![-1; n_atoms];

        for s in lo..hi {
            let z = z_min + s as f64 * self.delta;
            self.integrate_slice(z, &mut slice_local, &mut sasa);
        }
        sasa
    }

    fn integrate_slice(&self, z: f64, slice_local: &mut [i32], sasa: &mut [f64]) {
        let n_atoms = self.coords.len();
        let mut atoms: Vec<SliceAtom> = Vec::new();

        for i in 0..n_atoms {
            let p = self.coords.position(i);
            let r_contact = self.radii[i];
            let d = (p.z - z).abs();
            if d < r_contact {
                let r = (r_contact * r_contact - d * d).sqrt();
                let half = self.delta / 2.0;
                let dr = (r_contact / r) * (half + half.min(r_contact - d));
                slice_local[i] = atoms.len() as i32;
                atoms.push(SliceAtom { global: i as u32, x: p.x, y: p.y, r, dr });
            }
        }

        if atoms.is_empty() {
            return;
        }

        // ---------- restricted adjacency: keep only neighbors also in-slice
        let n_slice = atoms.len();
        let mut slice_nb: Vec<Vec<usize>> = vec![Vec::new(); n_slice];
        for li in 0..n_slice {
            let gi = atoms[li].global as usize;
            for &gj in self.nb.neighbors(gi) {
                let lj = slice_local[gj as usize];
                if lj >= 0 {
                    slice_nb[li].push(lj as usize);
                }
            }
        }

        // ---------- fully-buried pass (spec.md §4.2.3): each unordered
        // pair is inspected once, from the lower-indexed side
        let mut fully_buried = vec![false; n_slice];
        for li in 0..n_slice {
            for &lj in &slice_nb[li] {
                if lj <= li {
                    continue;
                }
                let xij = atoms[lj].x - atoms[li].x;
                let yij = atoms[lj].y - atoms[li].y;
                let d = (xij * xij + yij * yij).sqrt();
                let (ri, rj) = (atoms[li].r, atoms[lj].r);
                // two circles of (numerically) equal radius centered on the
                // same point: neither strictly contains the other, but the
                // arc formula below would divide by d == 0. Treat coincident
                // equal circles as mutually fully buried, which keeps the
                // result symmetric and bounded (spec.md §8's coincident-
                // spheres property) without a special-cased arc.
                if d < 1e-9 && (ri - rj).abs() < 1e-9 {
                    fully_buried[li] = true;
                    fully_buried[lj] = true;
                } else if d + ri < rj {
                    fully_buried[li] = true;
                } else if d + rj < ri {
                    fully_buried[lj] = true;
                }
            }
        }

        // ---------- per-atom arc exposure + accumulation (spec.md §4.2.3/4.2.4)
        for li in 0..n_slice {
            let theta = if fully_buried[li] {
                0.0
            } else {
                let mut arcs: Vec<BuriedArc> = Vec::new();
                for &lj in &slice_nb[li] {
                    if fully_buried[lj] {
                        continue;
                    }
                    let xij = atoms[lj].x - atoms[li].x;
                    let yij = atoms[lj].y - atoms[li].y;
                    let d = (xij * xij + yij * yij).sqrt();
                    let (ri, rj) = (atoms[li].r, atoms[lj].r);
                    if d >= ri + rj {
                        continue;
                    }
                    if d + ri < rj || d + rj < ri {
                        // containment is already fully captured by the
                        // fully_buried pass above; it contributes no arc
                        continue;
                    }
                    let beta = yij.atan2(xij);
                    let cos_alpha = (ri * ri + d * d - rj * rj) / (2.0 * ri * d);
                    let alpha = cos_alpha.clamp(-1.0, 1.0).acos();
                    if alpha > 0.0 {
                        arcs.push(BuriedArc::new(alpha, beta));
                    }
                }
                exposed_measure(&arcs)
            };

            let atom = &atoms[li];
            sasa[atom.global as usize] += theta * atom.r * atom.dr;
        }

        // clear scratch for the next slice
        for atom in &atoms {
            slice_local[atom.global as usize] = -1;
        }
    }

    /// Runs the full slice loop, serially or split across `n_threads`
    /// workers, and returns the accumulated per-atom area (spec.md §4.2.5).
    ///
    /// `n_threads > 1` without the `rayon` feature compiled in is not an
    /// error: a warning is emitted through `logger` and the computation
    /// proceeds single-threaded, per spec.md §7's "capability missing"
    /// disposition.
    pub fn run(&self, n_threads: usize, logger: &dyn SasaLogger) -> Vec<f64> {
        let n_slices = self.n_slices();
        if n_slices == 0 {
            return vec![0.0; self.coords.len()];
        }

        if n_threads <= 1 {
            return self.integrate_range(0, n_slices);
        }

        #[cfg(feature = "rayon")]
        {
            self.run_parallel(n_slices, n_threads)
        }
        #[cfg(not(feature = "rayon"))]
        {
            logger.warn(&format!(
                "threaded SASA requested ({n_threads} threads) but the `rayon` feature is not enabled; falling back to serial"
            ));
            self.integrate_range(0, n_slices)
        }
    }

    #[cfg(feature = "rayon")]
    fn run_parallel(&self, n_slices: usize, n_threads: usize) -> Vec<f64> {
        use rayon::prelude::*;

        let n_workers = n_threads.min(n_slices).max(1);
        let chunk = (n_slices + n_workers - 1) / n_workers;
        let ranges: Vec<(usize, usize)> = (0..n_workers)
            .map(|w| (w * chunk, ((w + 1) * chunk).min(n_slices)))
            .filter(|&(lo, hi)| lo < hi)
            .collect();

        let partials: Vec<Vec<f64>> = ranges
            .into_par_iter()
            .map(|(lo, hi)| self.integrate_range(lo, hi))
            .collect();

        let n_atoms = self.coords.len();
        let mut total = vec![0.0_f64; n_atoms];
        for partial in partials {
            for (t, p) in total.iter_mut().zip(partial.iter()) {
                *t += p;
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::NullLogger;
    use crate::neighbor_index::NeighborIndex;
    use bioshell_pdb::calc::Vec3;
    use std::f64::consts::PI;

    fn lone_sphere_area(radius: f64, delta: f64) -> f64 {
        let coords = vec![Vec3::new(0.0, 0.0, 0.0)];
        let radii = vec![radius];
        let nb = NeighborIndex::build(&coords, &radii);
        let integrator = LrIntegrator::new(&coords, &radii, &nb, delta);
        integrator.run(1, &NullLogger)[0]
    }

    #[test]
    fn isolated_atom_area_matches_sphere_area() {
        let area = lone_sphere_area(1.0, 0.1);
        let expected = 4.0 * PI;
        assert!((area - expected).abs() / expected < 0.01, "got {area}, expected ~{expected}");
    }

    #[test]
    fn two_disjoint_atoms_sum_their_isolated_areas() {
        let coords = vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0)];
        let radii = vec![1.0, 1.0];
        let nb = NeighborIndex::build(&coords, &radii);
        let integrator = LrIntegrator::new(&coords, &radii, &nb, 0.1);
        let sasa = integrator.run(1, &NullLogger);
        let expected = 4.0 * PI;
        assert!((sasa[0] - expected).abs() / expected < 0.01);
        assert!((sasa[1] - expected).abs() / expected < 0.01);
    }

    #[test]
    fn small_sphere_fully_inside_large_one_is_zero() {
        let coords = vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.5)];
        let radii = vec![1.0, 0.4];
        let nb = NeighborIndex::build(&coords, &radii);
        let integrator = LrIntegrator::new(&coords, &radii, &nb, 0.1);
        let sasa = integrator.run(1, &NullLogger);
        assert!(sasa[1] < 1e-6, "buried atom should have ~0 area, got {}", sasa[1]);
        assert!((sasa[0] - 4.0 * PI).abs() / (4.0 * PI) < 0.01);
    }

    #[test]
    fn tangent_overlapping_unit_spheres() {
        let coords = vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)];
        let radii = vec![1.0, 1.0];
        let nb = NeighborIndex::build(&coords, &radii);
        let integrator = LrIntegrator::new(&coords, &radii, &nb, 0.1);
        let sasa = integrator.run(1, &NullLogger);
        let total: f64 = sasa.iter().sum();
        let expected = 6.0 * PI;
        assert!((total - expected).abs() / expected < 0.01, "got {total}, expected ~{expected}");
    }

    #[test]
    fn coincident_spheres_split_area_symmetrically() {
        let coords = vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0)];
        let radii = vec![1.0, 1.0];
        let nb = NeighborIndex::build(&coords, &radii);
        let integrator = LrIntegrator::new(&coords, &radii, &nb, 0.1);
        let sasa = integrator.run(1, &NullLogger);
        assert!((sasa[0] - sasa[1]).abs() < 1e-6);
        assert!(sasa[0] + sasa[1] <= 4.0 * PI + 1e-6);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn threaded_and_serial_agree() {
        let mut coords = Vec::new();
        for i in 0..20 {
            coords.push(Vec3::new(i as f64 * 1.3, (i as f64 * 0.7).sin(), (i as f64 * 0.3).cos()));
        }
        let radii = vec![1.6; coords.len()];
        let nb = NeighborIndex::build(&coords, &radii);
        let integrator = LrIntegrator::new(&coords, &radii, &nb, 0.2);
        let serial = integrator.run(1, &NullLogger);
        let threaded = integrator.run(4, &NullLogger);
        for (a, b) in serial.iter().zip(threaded.iter()) {
            let scale = a.abs().max(1.0);
            assert!((a - b).abs() / scale < 1e-6, "serial {a} vs threaded {b}");
        }
    }
}

use crate::coords::CoordsView;
use bioshell_pdb::calc::Vec3;

/// A single bin of the Verlet cell list: the atom indices that fall inside
/// it and the indices of its forward neighbor cells (itself included).
struct Cell {
    atoms: Vec<u32>,
}

/// Spatial index over a 3D point cloud, used to enumerate contact pairs in
/// roughly O(N) time for typical atomic densities.
///
/// Atoms are binned into cubic cells of side `2 * max_i(radii[i])`, so any
/// pair within contact distance necessarily sits in the same or an adjacent
/// cell. Only "forward" cell neighbors are visited (see
/// [`forward_offsets`]) so that every unordered cell pair — and therefore
/// every contact pair — is examined exactly once.
struct CellGrid {
    cells: Vec<Cell>,
    nx: usize,
    ny: usize,
    nz: usize,
    origin: Vec3,
    d: f64,
}

impl CellGrid {
    fn linear_index(&self, ix: usize, iy: usize, iz: usize) -> usize {
        ix + self.nx * (iy + self.ny * iz)
    }

    fn cell_of(&self, p: Vec3) -> (usize, usize, usize) {
        let ix = (((p.x - self.origin.x) / self.d) as isize).clamp(0, self.nx as isize - 1);
        let iy = (((p.y - self.origin.y) / self.d) as isize).clamp(0, self.ny as isize - 1);
        let iz = (((p.z - self.origin.z) / self.d) as isize).clamp(0, self.nz as isize - 1);
        (ix as usize, iy as usize, iz as usize)
    }

    fn build(coords: &dyn CoordsView, d: f64) -> CellGrid {
        let n = coords.len();
        let mut p0 = coords.position(0);
        let mut p1 = p0;
        for i in 1..n {
            let p = coords.position(i);
            p0.x = p0.x.min(p.x);
            p0.y = p0.y.min(p.y);
            p0.z = p0.z.min(p.z);
            p1.x = p1.x.max(p.x);
            p1.y = p1.y.max(p.y);
            p1.z = p1.z.max(p.z);
        }
        let origin = Vec3::new(p0.x - d / 2.0, p0.y - d / 2.0, p0.z - d / 2.0);
        let extent = Vec3::new(
            p1.x + d / 2.0 - origin.x,
            p1.y + d / 2.0 - origin.y,
            p1.z + d / 2.0 - origin.z,
        );
        let nx = (extent.x / d).ceil().max(1.0) as usize;
        let ny = (extent.y / d).ceil().max(1.0) as usize;
        let nz = (extent.z / d).ceil().max(1.0) as usize;

        let mut grid = CellGrid {
            cells: (0..nx * ny * nz).map(|_| Cell { atoms: Vec::new() }).collect(),
            nx,
            ny,
            nz,
            origin,
            d,
        };
        for i in 0..n {
            let (ix, iy, iz) = grid.cell_of(coords.position(i));
            let idx = grid.linear_index(ix, iy, iz);
            grid.cells[idx].atoms.push(i as u32);
        }
        grid
    }

    /// Forward offsets for a cell: self plus exactly half of the 26
    /// surrounding cells (13 of them), chosen as a half-shell — all nine
    /// `di == 1` directions plus one representative of each antipodal pair
    /// in the `di == 0` layer — so that for any two distinct neighboring
    /// cells exactly one is the "forward" side of the other and every
    /// unordered cell pair is visited once (spec.md §4.1). The source's
    /// literal `di+dj+dk >= 0` predicate double-lists the six `di+dj+dk ==
    /// 0` diagonal directions (both a cell and its antipodal neighbor treat
    /// each other as forward), which is harmless there because its
    /// arc-union merge is idempotent on duplicate arcs, but it violates the
    /// "each pair emitted exactly once" contract this crate promises, so
    /// this half-shell table resolves the tie deterministically instead.
    fn forward_offsets() -> &'static [(isize, isize, isize)] {
        const ALL: [(isize, isize, isize); 14] = [
            (0, 0, 0),
            (1, 0, 0),
            (1, 1, 0),
            (1, -1, 0),
            (1, 0, 1),
            (1, 0, -1),
            (1, 1, 1),
            (1, 1, -1),
            (1, -1, 1),
            (1, -1, -1),
            (0, 1, 0),
            (0, 1, 1),
            (0, 1, -1),
            (0, 0, 1),
        ];
        &ALL
    }

    fn forward_neighbor_cells(&self, ix: usize, iy: usize, iz: usize) -> Vec<usize> {
        let mut out = Vec::with_capacity(14);
        for &(di, dj, dk) in Self::forward_offsets() {
            let i = ix as isize + di;
            let j = iy as isize + dj;
            let k = iz as isize + dk;
            if i < 0 || i >= self.nx as isize {
                continue;
            }
            if j < 0 || j >= self.ny as isize {
                continue;
            }
            if k < 0 || k >= self.nz as isize {
                continue;
            }
            out.push(self.linear_index(i as usize, j as usize, k as usize));
        }
        out
    }
}

/// Symmetric contact-pair adjacency, stored in flat (CSR-style) arrays built
/// in two passes — count the degree of each atom, then fill — so the hot
/// path never reallocates, unlike the chunked-realloc growth the source
/// implementation uses (spec.md §9).
///
/// For atom `i`, its neighbors live in `nb_idx[offsets[i]..offsets[i+1]]`,
/// with `nb_xyd`/`nb_xd`/`nb_yd` carrying the same-length parallel data
/// described in spec.md §3.
pub struct NeighborIndex {
    offsets: Vec<u32>,
    nb_idx: Vec<u32>,
    nb_xyd: Vec<f64>,
    nb_xd: Vec<f64>,
    nb_yd: Vec<f64>,
}

struct PairRecord {
    a: u32,
    b: u32,
    dx: f64,
    dy: f64,
    d: f64,
}

impl NeighborIndex {
    /// Builds the neighbor index for `n` atoms at `coords[i]` with contact
    /// radii `radii[i]` (already probe-augmented). `radii.len()` must equal
    /// `coords.len()` and every radius must be positive; this is a
    /// precondition checked by the caller ([`crate::compute_lr_sasa`]), not
    /// by this constructor — see spec.md §4.1's failure model.
    pub fn build(coords: &dyn CoordsView, radii: &[f64]) -> NeighborIndex {
        let n = coords.len();
        debug_assert_eq!(n, radii.len());
        if n == 0 {
            return NeighborIndex { offsets: vec![0], nb_idx: Vec::new(), nb_xyd: Vec::new(), nb_xd: Vec::new(), nb_yd: Vec::new() };
        }
        let max_r = radii.iter().cloned().fold(0.0_f64, f64::max);
        let d = (2.0 * max_r).max(f64::MIN_POSITIVE);

        let grid = CellGrid::build(coords, d);
        let mut pairs: Vec<PairRecord> = Vec::new();

        for iz in 0..grid.nz {
            for iy in 0..grid.ny {
                for ix in 0..grid.nx {
                    let ci = grid.linear_index(ix, iy, iz);
                    for cj in grid.forward_neighbor_cells(ix, iy, iz) {
                        Self::pairs_in_cell_pair(&grid, ci, cj, coords, radii, &mut pairs);
                    }
                }
            }
        }

        Self::from_pairs(n, pairs)
    }

    fn pairs_in_cell_pair(
        grid: &CellGrid,
        ci: usize,
        cj: usize,
        coords: &dyn CoordsView,
        radii: &[f64],
        out: &mut Vec<PairRecord>,
    ) {
        let atoms_i = &grid.cells[ci].atoms;
        let atoms_j = &grid.cells[cj].atoms;
        let same_cell = ci == cj;
        for (ii, &a) in atoms_i.iter().enumerate() {
            let start_j = if same_cell { ii + 1 } else { 0 };
            let pa = coords.position(a as usize);
            let ra = radii[a as usize];
            for &b in &atoms_j[start_j..] {
                let pb = coords.position(b as usize);
                let rb = radii[b as usize];
                let cutoff = ra + rb;
                let cutoff2 = cutoff * cutoff;
                let dx = pb.x - pa.x;
                let dy = pb.y - pa.y;
                let dz = pb.z - pa.z;
                if dx * dx > cutoff2 || dy * dy > cutoff2 || dz * dz > cutoff2 {
                    continue;
                }
                let dist2 = dx * dx + dy * dy + dz * dz;
                if dist2 < cutoff2 {
                    out.push(PairRecord { a, b, dx, dy, d: (dx * dx + dy * dy).sqrt() });
                }
            }
        }
    }

    fn from_pairs(n: usize, pairs: Vec<PairRecord>) -> NeighborIndex {
        let mut degree = vec![0u32; n];
        for p in &pairs {
            degree[p.a as usize] += 1;
            degree[p.b as usize] += 1;
        }
        let mut offsets = vec![0u32; n + 1];
        for i in 0..n {
            offsets[i + 1] = offsets[i] + degree[i];
        }
        let total = offsets[n] as usize;
        let mut nb_idx = vec![0u32; total];
        let mut nb_xyd = vec![0.0_f64; total];
        let mut nb_xd = vec![0.0_f64; total];
        let mut nb_yd = vec![0.0_f64; total];
        let mut cursor = offsets.clone();

        for p in &pairs {
            let pos_a = cursor[p.a as usize] as usize;
            nb_idx[pos_a] = p.b;
            nb_xyd[pos_a] = p.d;
            nb_xd[pos_a] = p.dx;
            nb_yd[pos_a] = p.dy;
            cursor[p.a as usize] += 1;

            let pos_b = cursor[p.b as usize] as usize;
            nb_idx[pos_b] = p.a;
            nb_xyd[pos_b] = p.d;
            nb_xd[pos_b] = -p.dx;
            nb_yd[pos_b] = -p.dy;
            cursor[p.b as usize] += 1;
        }

        NeighborIndex { offsets, nb_idx, nb_xyd, nb_xd, nb_yd }
    }

    /// Number of atoms this index was built for.
    pub fn n_atoms(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Neighbor indices of atom `i`.
    pub fn neighbors(&self, i: usize) -> &[u32] {
        &self.nb_idx[self.offsets[i] as usize..self.offsets[i + 1] as usize]
    }

    /// 2-D (x,y)-projected distances to each of atom `i`'s neighbors, in
    /// the same order as [`NeighborIndex::neighbors`].
    pub fn xy_distances(&self, i: usize) -> &[f64] {
        &self.nb_xyd[self.offsets[i] as usize..self.offsets[i + 1] as usize]
    }

    /// Signed `x` differences (`x_neighbor - x_i`) to each neighbor.
    pub fn dx(&self, i: usize) -> &[f64] {
        &self.nb_xd[self.offsets[i] as usize..self.offsets[i + 1] as usize]
    }

    /// Signed `y` differences (`y_neighbor - y_i`) to each neighbor.
    pub fn dy(&self, i: usize) -> &[f64] {
        &self.nb_yd[self.offsets[i] as usize..self.offsets[i + 1] as usize]
    }

    /// Linear scan of `i`'s neighbor list for `j`; used in tests and by the
    /// Shrake-Rupley consumer that shares this index (spec.md §6).
    pub fn contact(&self, i: usize, j: usize) -> bool {
        self.neighbors(i).iter().any(|&nb| nb as usize == j)
    }
}

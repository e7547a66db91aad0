use std::f64::consts::PI;

/// A buried arc on the unit circle: the closed angular interval
/// `[beta - alpha, beta + alpha]`, with `alpha` strictly positive (an
/// interval of zero width buries nothing and must not be inserted).
#[derive(Clone, Copy, Debug)]
pub struct BuriedArc {
    pub alpha: f64,
    pub beta: f64,
}

impl BuriedArc {
    pub fn new(alpha: f64, beta: f64) -> BuriedArc {
        debug_assert!(alpha > 0.0, "a buried arc must have a strictly positive half-width");
        BuriedArc { alpha, beta: normalize(beta) }
    }
}

fn normalize(mut b: f64) -> f64 {
    while b > PI {
        b -= 2.0 * PI;
    }
    while b <= -PI {
        b += 2.0 * PI;
    }
    b
}

/// Computes the angular measure of the circle **not** covered by the union
/// of the given buried arcs (spec.md §4.2.4).
///
/// Implemented as an iterate-until-stable pairwise merge: repeatedly scan
/// the still-active arcs and merge any two that overlap (normalizing their
/// angular gap into `[-pi, pi]`), until a full pass merges nothing. Each
/// merging pass removes at least one arc, so the loop is bounded by
/// `arcs.len()` passes (spec.md §9) — exceeding that bound indicates a bug
/// in the merge logic, not a valid input, so it is an assertion rather than
/// a recoverable error.
///
/// If merging two arcs ever produces a combined half-width greater than
/// `pi`, that merged arc is, by itself, a single connected run of
/// overlapping intervals whose own union already spans the entire circle
/// (merges only ever combine arcs that actually overlap), so the whole
/// circle is buried and the function returns `0.0` immediately — this is
/// the resolution of the "merged-component" open question in spec.md §9:
/// the early return is sound precisely because it only fires for one
/// connected component's own union, never for the combination of several
/// disjoint ones.
pub fn exposed_measure(arcs: &[BuriedArc]) -> f64 {
    let n = arcs.len();
    if n == 0 {
        return 2.0 * PI;
    }

    let mut alpha: Vec<f64> = arcs.iter().map(|a| a.alpha).collect();
    let mut beta: Vec<f64> = arcs.iter().map(|a| a.beta).collect();
    let mut active = vec![true; n];

    let mut passes = 0usize;
    loop {
        passes += 1;
        assert!(passes <= n + 1, "circular interval merge failed to converge within {} passes", n);

        let snapshot: Vec<usize> = (0..n).filter(|&i| active[i]).collect();
        let mut merged_any = false;

        for &i in &snapshot {
            if !active[i] {
                continue;
            }
            for &j in &snapshot {
                if i == j || !active[j] {
                    continue;
                }
                let mut d = beta[j] - beta[i];
                while d > PI {
                    d -= 2.0 * PI;
                }
                while d < -PI {
                    d += 2.0 * PI;
                }
                if d.abs() > alpha[i] + alpha[j] {
                    continue;
                }

                let beta_j_aligned = beta[i] + d;
                let inf = (beta[i] - alpha[i]).min(beta_j_aligned - alpha[j]);
                let sup = (beta[i] + alpha[i]).max(beta_j_aligned + alpha[j]);
                let new_alpha = (sup - inf) / 2.0;
                if new_alpha > PI {
                    return 0.0;
                }
                alpha[i] = new_alpha;
                beta[i] = normalize((inf + sup) / 2.0);
                active[j] = false;
                merged_any = true;
            }
        }

        if !merged_any {
            break;
        }
    }

    let buried: f64 = (0..n).filter(|&i| active[i]).map(|i| 2.0 * alpha[i]).sum();
    (2.0 * PI - buried).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn empty_union_is_fully_exposed() {
        assert!((exposed_measure(&[]) - 2.0 * PI).abs() < TOL);
    }

    #[test]
    fn single_interval() {
        let alpha = PI / 3.0;
        let arc = BuriedArc::new(alpha, 0.5);
        let got = exposed_measure(&[arc]);
        assert!((got - (2.0 * PI - 2.0 * alpha)).abs() < TOL);
    }

    #[test]
    fn repeated_identical_interval_is_idempotent() {
        let alpha = PI / 5.0;
        let arc = BuriedArc::new(alpha, 1.0);
        let arcs: Vec<BuriedArc> = std::iter::repeat(arc).take(7).collect();
        let got = exposed_measure(&arcs);
        assert!((got - (2.0 * PI - 2.0 * alpha)).abs() < TOL);
    }

    #[test]
    fn four_disjoint_quarter_arcs_cover_the_circle() {
        let quarter = PI / 4.0;
        let arcs = vec![
            BuriedArc::new(quarter, 0.0),
            BuriedArc::new(quarter, PI / 2.0),
            BuriedArc::new(quarter, PI),
            BuriedArc::new(quarter, 3.0 * PI / 2.0),
        ];
        let got = exposed_measure(&arcs);
        assert!(got.abs() < 1e-6, "expected ~0, got {got}");
    }

    #[test]
    fn wrap_around_merge_narrowly_overlaps() {
        // these two half-width-pi/2 arcs straddle the +-pi seam with only a
        // 0.1 rad gap between their near edges, so they merge into a single
        // ~(pi+0.1)-wide arc rather than covering the whole circle.
        let arcs = vec![
            BuriedArc::new(PI / 2.0, PI),
            BuriedArc::new(PI / 2.0, -PI + 0.1),
        ];
        let got = exposed_measure(&arcs);
        let expected = 2.0 * PI - (PI + 0.1);
        assert!((got - expected).abs() < TOL, "got {got}, expected ~{expected}");
    }

    #[test]
    fn wrap_around_merge_covers_the_circle() {
        // two arcs centered on opposite points, each wider than a half
        // circle: they merge into one component whose half-width exceeds
        // pi, so the whole circle is buried.
        let arcs = vec![
            BuriedArc::new(PI / 2.0 + 0.1, 0.0),
            BuriedArc::new(PI / 2.0 + 0.1, PI),
        ];
        let got = exposed_measure(&arcs);
        assert_eq!(got, 0.0);
    }

    #[test]
    fn two_separate_components_leave_a_gap() {
        // two narrow arcs on opposite sides of the circle, far from
        // overlapping: each stays its own component, nothing is fully buried
        let arcs = vec![
            BuriedArc::new(0.1, 0.0),
            BuriedArc::new(0.1, PI),
        ];
        let got = exposed_measure(&arcs);
        assert!((got - (2.0 * PI - 0.4)).abs() < TOL);
    }
}

//! A static two-dimensional k-d tree for nearest-point queries.
//!
//! The tree is stored implicitly: `order` is a permutation of point indices in
//! which the median of every subrange is that subtree's splitting node, and
//! the splitting axis alternates with depth (x, then y).

/// Index over a fixed set of 2D points.
#[derive(Debug, Clone)]
pub(crate) struct KdTree {
    points: Vec<[f64; 2]>,
    order: Vec<usize>,
}

impl KdTree {
    /// Builds a tree over `points`, or `None` when there are none.
    pub(crate) fn build(points: Vec<[f64; 2]>) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut order: Vec<usize> = (0..points.len()).collect();
        partition(&points, &mut order, 0);

        Some(Self { points, order })
    }

    /// Index of the point closest to `query` in Euclidean distance.
    ///
    /// Among equidistant points the lowest index wins.
    pub(crate) fn nearest(&self, query: [f64; 2]) -> usize {
        let first = self.order[0];
        let mut best = Best {
            index: first,
            dist2: distance2(self.points[first], query),
        };
        self.search(0, self.order.len(), 0, query, &mut best);
        best.index
    }

    fn search(&self, lo: usize, hi: usize, depth: usize, query: [f64; 2], best: &mut Best) {
        if lo >= hi {
            return;
        }

        let mid = lo + (hi - lo) / 2;
        let index = self.order[mid];
        let point = self.points[index];

        let dist2 = distance2(point, query);
        if dist2 < best.dist2 || (dist2 == best.dist2 && index < best.index) {
            *best = Best { index, dist2 };
        }

        let axis = depth % 2;
        let delta = query[axis] - point[axis];
        let (near, far) = if delta < 0.0 {
            ((lo, mid), (mid + 1, hi))
        } else {
            ((mid + 1, hi), (lo, mid))
        };

        self.search(near.0, near.1, depth + 1, query, best);

        // Equal distances still descend so ties resolve to the lowest index.
        if delta * delta <= best.dist2 {
            self.search(far.0, far.1, depth + 1, query, best);
        }
    }
}

struct Best {
    index: usize,
    dist2: f64,
}

fn partition(points: &[[f64; 2]], order: &mut [usize], depth: usize) {
    if order.len() <= 1 {
        return;
    }

    let axis = depth % 2;
    let mid = order.len() / 2;
    order.select_nth_unstable_by(mid, |&a, &b| {
        points[a][axis]
            .total_cmp(&points[b][axis])
            .then(a.cmp(&b))
    });

    let (left, rest) = order.split_at_mut(mid);
    partition(points, left, depth + 1);
    partition(points, &mut rest[1..], depth + 1);
}

fn distance2(a: [f64; 2], b: [f64; 2]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx * dx + dy * dy
}

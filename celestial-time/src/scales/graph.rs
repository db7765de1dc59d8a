//! Static conversion graph over the seven scales.
//!
//! Each edge links a scale to its parent, closer to TAI. A route between two
//! scales climbs from the source to their lowest common ancestor and descends
//! to the target, so no route is longer than five hops (UT1 to TCB).

use super::TimeScale;

/// What relates a scale to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// UTC -> TAI through the leap-second table.
    LeapSeconds,
    /// UT1 -> UTC through the EOP provider.
    Ut1MinusUtc,
    /// TT -> TAI, fixed 32.184 s.
    FixedOffset,
    /// TCG -> TT, L_G rate.
    GeocentricRate,
    /// TDB -> TT, periodic series.
    PeriodicSeries,
    /// TCB -> TDB, L_B rate.
    BarycentricRate,
}

impl EdgeKind {
    /// Edges whose offset comes from an external table rather than a formula.
    pub fn is_data_dependent(self) -> bool {
        matches!(self, EdgeKind::LeapSeconds | EdgeKind::Ut1MinusUtc)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub child: TimeScale,
    pub parent: TimeScale,
    pub kind: EdgeKind,
}

pub const EDGES: [Edge; 6] = [
    Edge {
        child: TimeScale::UTC,
        parent: TimeScale::TAI,
        kind: EdgeKind::LeapSeconds,
    },
    Edge {
        child: TimeScale::UT1,
        parent: TimeScale::UTC,
        kind: EdgeKind::Ut1MinusUtc,
    },
    Edge {
        child: TimeScale::TT,
        parent: TimeScale::TAI,
        kind: EdgeKind::FixedOffset,
    },
    Edge {
        child: TimeScale::TCG,
        parent: TimeScale::TT,
        kind: EdgeKind::GeocentricRate,
    },
    Edge {
        child: TimeScale::TDB,
        parent: TimeScale::TT,
        kind: EdgeKind::PeriodicSeries,
    },
    Edge {
        child: TimeScale::TCB,
        parent: TimeScale::TDB,
        kind: EdgeKind::BarycentricRate,
    },
];

pub fn edge_to_parent(scale: TimeScale) -> Option<&'static Edge> {
    EDGES.iter().find(|edge| edge.child == scale)
}

/// One step along a route. `towards_parent` is true when `from` is the edge's child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hop {
    pub from: TimeScale,
    pub to: TimeScale,
    pub kind: EdgeKind,
    pub towards_parent: bool,
}

fn path_to_root(scale: TimeScale) -> Vec<&'static Edge> {
    let mut edges = Vec::with_capacity(3);
    let mut current = scale;
    while let Some(edge) = edge_to_parent(current) {
        edges.push(edge);
        current = edge.parent;
    }
    edges
}

/// Shortest hop sequence from `from` to `to`; empty when they are equal.
pub fn route(from: TimeScale, to: TimeScale) -> Vec<Hop> {
    let mut up = path_to_root(from);
    let mut down = path_to_root(to);

    // Drop the shared stretch above the lowest common ancestor.
    while let (Some(a), Some(b)) = (up.last(), down.last()) {
        if a != b {
            break;
        }
        up.pop();
        down.pop();
    }

    let climb = up.into_iter().map(|edge| Hop {
        from: edge.child,
        to: edge.parent,
        kind: edge.kind,
        towards_parent: true,
    });
    let descend = down.into_iter().rev().map(|edge| Hop {
        from: edge.parent,
        to: edge.child,
        kind: edge.kind,
        towards_parent: false,
    });

    climb.chain(descend).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scales(hops: &[Hop]) -> Vec<TimeScale> {
        let mut out: Vec<_> = hops.first().map(|h| h.from).into_iter().collect();
        out.extend(hops.iter().map(|h| h.to));
        out
    }

    #[test]
    fn test_every_scale_but_tai_has_one_parent() {
        for scale in TimeScale::ALL {
            let count = EDGES.iter().filter(|e| e.child == scale).count();
            let expected = if scale == TimeScale::TAI { 0 } else { 1 };
            assert_eq!(count, expected, "{} has {} parent edges", scale, count);
        }
    }

    #[test]
    fn test_known_routes() {
        use TimeScale::*;
        assert_eq!(scales(&route(UT1, TCG)), vec![UT1, UTC, TAI, TT, TCG]);
        assert_eq!(scales(&route(TCB, UT1)), vec![TCB, TDB, TT, TAI, UTC, UT1]);
        assert_eq!(scales(&route(TCG, TCB)), vec![TCG, TT, TDB, TCB]);
        assert_eq!(scales(&route(TDB, TT)), vec![TDB, TT]);
        assert!(route(TT, TT).is_empty());

        let hops = route(TAI, UTC);
        assert_eq!(hops.len(), 1);
        assert_eq!(hops[0].kind, EdgeKind::LeapSeconds);
        assert!(!hops[0].towards_parent);
    }

    #[test]
    fn test_all_pairs_are_connected() {
        for from in TimeScale::ALL {
            for to in TimeScale::ALL {
                let hops = route(from, to);
                if from == to {
                    assert!(hops.is_empty());
                    continue;
                }
                assert_eq!(hops.first().map(|h| h.from), Some(from));
                assert_eq!(hops.last().map(|h| h.to), Some(to));
                for pair in hops.windows(2) {
                    assert_eq!(pair[0].to, pair[1].from, "{} -> {} is not contiguous", from, to);
                }
                assert!(hops.len() <= from.depth() + to.depth());
            }
        }
    }

    #[test]
    fn test_only_table_edges_are_data_dependent() {
        let data: Vec<_> = EDGES.iter().filter(|e| e.kind.is_data_dependent()).collect();
        assert_eq!(data.len(), 2);
    }
}

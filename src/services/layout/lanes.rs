/// Side-by-side placement of an event among the events it overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneAssignment {
    /// Zero-based lane, counted from the left edge of the column.
    pub lane: usize,
    /// Lanes used by the overlap cluster the event belongs to.
    pub lane_count: usize,
}

impl LaneAssignment {
    /// Horizontal placement inside a column as `(left_fraction, width_fraction)`.
    pub fn fractions(&self) -> (f32, f32) {
        let count = self.lane_count.max(1) as f32;
        (self.lane as f32 / count, 1.0 / count)
    }
}

/// Assign lanes to vertical spans `(top, bottom)` in one column.
///
/// Spans that overlap transitively form a cluster; inside a cluster every
/// span takes the lowest lane that is free at its top, and all members share
/// the cluster's lane count. Spans that merely touch do not overlap. The
/// result is in input order.
pub fn assign_lanes(spans: &[(f32, f32)]) -> Vec<LaneAssignment> {
    let mut order: Vec<usize> = (0..spans.len()).collect();
    order.sort_by(|&a, &b| {
        spans[a]
            .0
            .total_cmp(&spans[b].0)
            .then_with(|| spans[b].1.total_cmp(&spans[a].1))
            .then_with(|| a.cmp(&b))
    });

    let mut result = vec![
        LaneAssignment {
            lane: 0,
            lane_count: 1
        };
        spans.len()
    ];
    let mut cluster: Vec<usize> = Vec::new();
    let mut lane_bottoms: Vec<f32> = Vec::new();
    let mut cluster_bottom = f32::NEG_INFINITY;

    for index in order {
        let (top, bottom) = spans[index];

        if !cluster.is_empty() && top >= cluster_bottom {
            close_cluster(&mut result, &cluster, lane_bottoms.len());
            cluster.clear();
            lane_bottoms.clear();
            cluster_bottom = f32::NEG_INFINITY;
        }

        let lane = match lane_bottoms.iter().position(|&lane_bottom| lane_bottom <= top) {
            Some(free) => {
                lane_bottoms[free] = bottom;
                free
            }
            None => {
                lane_bottoms.push(bottom);
                lane_bottoms.len() - 1
            }
        };

        result[index].lane = lane;
        cluster.push(index);
        cluster_bottom = cluster_bottom.max(bottom);
    }

    if !cluster.is_empty() {
        close_cluster(&mut result, &cluster, lane_bottoms.len());
    }

    result
}

fn close_cluster(result: &mut [LaneAssignment], cluster: &[usize], lane_count: usize) {
    for &index in cluster {
        result[index].lane_count = lane_count;
    }
}

//! Spatial index over street segments.

use rstar::primitives::{GeomWithData, Line};
use rstar::RTree;
use tracing::debug;

use super::geometry::LocalProjection;
use crate::models::RoadGraph;

type IndexedSegment = GeomWithData<Line<[f64; 2]>, usize>;

/// R-tree of a graph's edges, projected into a local planar frame, keyed by
/// edge index.
///
/// Each edge contributes one tree entry per polyline sub-segment, all
/// carrying the edge's index. Built fresh for each query; lookups return
/// the edge whose shape is closest to the query point by true
/// point-to-segment distance.
pub struct EdgeIndex {
    tree: RTree<IndexedSegment>,
}

impl EdgeIndex {
    /// Build the index from every edge in the graph.
    pub fn build(graph: &RoadGraph, projection: &LocalProjection) -> Self {
        let mut segments: Vec<IndexedSegment> = Vec::new();

        for (index, edge) in graph.edges().iter().enumerate() {
            for pair in edge.geometry.windows(2) {
                segments.push(GeomWithData::new(
                    Line::new(projection.project(pair[0]), projection.project(pair[1])),
                    index,
                ));
            }
        }

        debug!("edge index built with {} segments", segments.len());

        Self {
            tree: RTree::bulk_load(segments),
        }
    }

    /// Index of the edge nearest to a projected query point.
    pub fn nearest(&self, point: [f64; 2]) -> Option<usize> {
        self.tree.nearest_neighbor(&point).map(|seg| seg.data)
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

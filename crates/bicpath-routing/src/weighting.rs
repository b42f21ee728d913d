use bicpath_core::ChargeTable;

use crate::graph::Edge;

/// Cost of relaxing one edge.
///
/// Implementations see only the edge being relaxed, never the path that
/// led to it. Returned weights must be non-negative; `f64::INFINITY` marks
/// an edge that can never be part of a finite-cost path.
pub trait Weighting {
    fn weight(&self, edge: &Edge) -> f64;
}

/// Weight = transfer time of the edge itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeWeighting;

impl Weighting for TimeWeighting {
    fn weight(&self, edge: &Edge) -> f64 {
        edge.time
    }
}

/// Weight = charge levied by the receiving bank, independent of the edge.
/// Banks missing from the table cost `f64::INFINITY`.
#[derive(Debug, Clone, Copy)]
pub struct ChargeWeighting<'a> {
    charges: &'a ChargeTable,
}

impl<'a> ChargeWeighting<'a> {
    pub fn new(charges: &'a ChargeTable) -> Self {
        Self { charges }
    }
}

impl Weighting for ChargeWeighting<'_> {
    fn weight(&self, edge: &Edge) -> f64 {
        self.charges
            .get(edge.to.as_str())
            .unwrap_or(f64::INFINITY)
    }
}

impl<W: Weighting + ?Sized> Weighting for &W {
    fn weight(&self, edge: &Edge) -> f64 {
        (**self).weight(edge)
    }
}

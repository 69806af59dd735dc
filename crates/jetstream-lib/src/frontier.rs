//! Frontier maintenance and result extraction.
//!
//! The frontier is the set of candidate paths that could still be the
//! cheapest way to reach some future jet stream. It is rebuilt, never
//! mutated, once per processed segment:
//!
//! - paths whose open coordinate lies strictly beyond the segment start are
//!   kept unconditionally (reaching a later start may be cheaper from them);
//! - the cheapest path to the segment start (backward flight allowed) is kept
//!   and also extended with the segment;
//! - every other path is dominated from this start onwards and dropped.

use tracing::trace;

use crate::error::{Error, Result};
use crate::path::CandidatePath;
use crate::segment::{Cost, Position, Segment};

/// Collection of possibly-optimal candidate paths.
#[derive(Debug, Clone)]
pub struct Frontier {
    paths: Vec<CandidatePath>,
}

/// Best path found once every segment has been processed.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub path: CandidatePath,
    /// Furthest open coordinate on the frontier; the journey ends here.
    pub destination: Position,
    /// Cost of `path` including the final open-air leg to `destination`.
    pub cost: Cost,
}

/// Outcome of folding a whole segment sequence through the frontier.
#[derive(Debug, Clone)]
pub struct Optimization {
    pub resolution: Resolution,
    /// Largest frontier observed during the fold, including the seed.
    /// `None` when the result did not come from a frontier fold.
    pub peak_frontier: Option<usize>,
}

impl Frontier {
    /// Frontier holding only the zero-cost path at the origin.
    pub fn seed(weight: Cost) -> Self {
        Self {
            paths: vec![CandidatePath::seed(weight)],
        }
    }

    pub fn from_paths(paths: Vec<CandidatePath>) -> Self {
        Self { paths }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> &[CandidatePath] {
        &self.paths
    }

    /// Cheapest path to `position` over the whole frontier; first found wins ties.
    pub fn minimum_for(&self, position: Position) -> Result<&CandidatePath> {
        self.cheapest(position).map(|(path, _)| path)
    }

    fn cheapest(&self, position: Position) -> Result<(&CandidatePath, Cost)> {
        let mut best: Option<(&CandidatePath, Cost)> = None;
        for path in &self.paths {
            let cost = path.pathcost(position)?;
            match best {
                Some((_, lowest)) if lowest <= cost => {}
                _ => best = Some((path, cost)),
            }
        }
        best.ok_or(Error::EmptyFrontier)
    }

    /// Produce the frontier that results from offering `jet` to every path.
    pub fn advance(&self, jet: Segment) -> Result<Frontier> {
        let minimum = self.minimum_for(jet.start)?;

        let mut laters: Vec<CandidatePath> = self
            .paths
            .iter()
            .filter(|path| !path.is_forward(jet.start))
            .cloned()
            .collect();

        // A backward minimum is already among the laters.
        if minimum.is_forward(jet.start) {
            laters.push(minimum.clone());
        }
        laters.push(minimum.extend(jet)?);

        Ok(Frontier { paths: laters })
    }

    /// Pick the cheapest path to the furthest open coordinate.
    pub fn resolve(&self) -> Result<Resolution> {
        let destination = self
            .paths
            .iter()
            .map(CandidatePath::open)
            .max()
            .ok_or(Error::EmptyFrontier)?;
        let (path, cost) = self.cheapest(destination)?;

        Ok(Resolution {
            path: path.clone(),
            destination,
            cost,
        })
    }
}

/// Fold `segments` (already in ascending start order) through the frontier
/// starting from the seed path, then resolve the best route.
pub fn optimize(weight: Cost, segments: &[Segment]) -> Result<Optimization> {
    let mut frontier = Frontier::seed(weight);
    let mut peak_frontier = frontier.len();

    for (index, &jet) in segments.iter().enumerate() {
        frontier = frontier.advance(jet)?;
        peak_frontier = peak_frontier.max(frontier.len());
        trace!(
            index,
            start = jet.start,
            end = jet.end,
            frontier = frontier.len(),
            "advanced frontier"
        );
    }

    Ok(Optimization {
        resolution: frontier.resolve()?,
        peak_frontier: Some(peak_frontier),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_frontier_cannot_select_minimum() {
        let frontier = Frontier::from_paths(Vec::new());
        assert!(matches!(frontier.minimum_for(3), Err(Error::EmptyFrontier)));
    }

    #[test]
    fn empty_frontier_cannot_advance() {
        let frontier = Frontier::from_paths(Vec::new());
        let err = frontier
            .advance(Segment::new(1, 2, 0))
            .expect_err("nothing to extend");
        assert!(matches!(err, Error::EmptyFrontier));
    }

    #[test]
    fn empty_frontier_cannot_resolve() {
        let frontier = Frontier::from_paths(Vec::new());
        assert!(matches!(frontier.resolve(), Err(Error::EmptyFrontier)));
    }

    #[test]
    fn seed_resolves_to_zero_cost_at_origin() {
        let resolution = Frontier::seed(5).resolve().expect("seed resolves");
        assert_eq!(resolution.destination, 0);
        assert_eq!(resolution.cost, 0);
        assert!(resolution.path.ridden().is_empty());
    }

    #[test]
    fn forward_minimum_is_kept_alongside_its_extension() {
        let next = Frontier::seed(1)
            .advance(Segment::new(3, 7, 1))
            .expect("advance");
        assert_eq!(next.len(), 2);
        assert_eq!(next.paths()[0].open(), 0);
        assert_eq!(next.paths()[1].open(), 7);
        assert_eq!(next.paths()[1].cost(), 4);
    }

    #[test]
    fn dominated_forward_paths_are_dropped() {
        // After (1,3,2) the frontier holds the seed (open 0) and open 3 at cost 3.
        let frontier = Frontier::seed(1)
            .advance(Segment::new(1, 3, 2))
            .expect("first");
        // Both paths are forward of 5; seed costs 5, the ridden path costs 5 too,
        // so exactly one of them survives next to the new extension.
        let next = frontier.advance(Segment::new(5, 8, 1)).expect("second");
        assert_eq!(next.len(), 2);
        assert_eq!(next.paths()[1].open(), 8);
        assert_eq!(next.paths()[1].cost(), 6);
    }

    #[test]
    fn backward_paths_survive_and_can_be_minimum() {
        let frontier = Frontier::seed(1)
            .advance(Segment::new(2, 6, 100))
            .expect("first");
        let next = frontier.advance(Segment::new(5, 10, 0)).expect("second");

        // Seed at 0 is the cheapest way to 5 (cost 5), the path at 6 is backward.
        assert_eq!(next.len(), 3);
        let opens: Vec<_> = next.paths().iter().map(CandidatePath::open).collect();
        assert_eq!(opens, vec![6, 0, 10]);
        assert_eq!(next.paths()[2].cost(), 5);
    }

    #[test]
    fn sole_backward_path_is_extended_without_failing() {
        let ridden = CandidatePath::seed(1)
            .extend(Segment::new(2, 6, 100))
            .expect("extend");
        let frontier = Frontier::from_paths(vec![ridden]);

        let next = frontier.advance(Segment::new(5, 10, 0)).expect("backward");
        assert_eq!(next.len(), 2);
        let extended = &next.paths()[1];
        assert_eq!(extended.open(), 10);
        assert_eq!(extended.cost(), 103);

        let resolution = next.resolve().expect("resolve");
        assert_eq!(resolution.destination, 10);
        assert_eq!(resolution.cost, 103);
    }

    #[test]
    fn minimum_keeps_first_path_on_ties() {
        // Both paths reach 5 for 5: the seed directly, the other from 3 at cost 3.
        let ridden = CandidatePath::seed(1)
            .extend(Segment::new(1, 3, 2))
            .expect("extend");
        let frontier = Frontier::from_paths(vec![CandidatePath::seed(1), ridden]);
        assert_eq!(frontier.minimum_for(5).expect("minimum").open(), 0);
    }

    #[test]
    fn overflowing_advance_is_an_error() {
        let frontier = Frontier::seed(i64::MAX / 2);
        let err = frontier
            .advance(Segment::new(10, 20, 0))
            .expect_err("overflow");
        assert!(matches!(err, Error::CostOverflow { position: 10 }));
    }

    #[test]
    fn advance_does_not_touch_input_frontier() {
        let frontier = Frontier::seed(1);
        let _ = frontier.advance(Segment::new(1, 4, 0)).expect("advance");
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.paths()[0].open(), 0);
    }

    #[test]
    fn optimize_without_segments_is_free() {
        let outcome = optimize(7, &[]).expect("optimize");
        assert_eq!(outcome.resolution.cost, 0);
        assert_eq!(outcome.resolution.destination, 0);
        assert_eq!(outcome.peak_frontier, Some(1));
    }

    #[test]
    fn optimize_tracks_peak_frontier() {
        let segments = [
            Segment::new(1, 20, 5),
            Segment::new(2, 19, 5),
            Segment::new(3, 18, 5),
        ];
        let outcome = optimize(1, &segments).expect("optimize");
        assert_eq!(outcome.peak_frontier, Some(4));
    }
}

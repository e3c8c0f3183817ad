//! Stepwise Graham scan.
//!
//! One `step()` performs one unit of visible work and returns the resulting
//! snapshot:
//! - first step: select the anchor, sort the rest by polar angle (ties by
//!   distance), chain = `[anchor]`;
//! - each following step: take the next candidate, pop the chain while its top
//!   two points and the candidate fail to turn left, push the candidate;
//! - the step after the queue empties: mark `Completed`. Exactly one completed
//!   snapshot is produced; stepping again is `HullError::TerminalState`.

use std::collections::{BTreeSet, VecDeque};

use crate::error::HullError;
use crate::geom2::{polar_cmp, Point, ScanCfg, Turn, COORD_LIMIT};

use super::pivot::select_anchor;
use super::types::{RunState, Snapshot};

/// Owns the point set, scan queue and chain of a single run.
#[derive(Clone, Debug)]
pub struct HullEngine {
    cfg: ScanCfg,
    /// Distinct input points in anchor order (`y`, then `x`).
    points: Vec<Point>,
    anchor: Option<Point>,
    queue: VecDeque<Point>,
    hull: Vec<Point>,
    popped: Vec<Point>,
    state: RunState,
    steps: usize,
}

impl HullEngine {
    /// Engine with the default scan configuration.
    pub fn new<I>(points: I) -> Result<Self, HullError>
    where
        I: IntoIterator<Item = Point>,
    {
        Self::with_cfg(points, ScanCfg::default())
    }

    /// Duplicates are merged. Fails on an empty set or on coordinates outside
    /// `±COORD_LIMIT`.
    pub fn with_cfg<I>(points: I, cfg: ScanCfg) -> Result<Self, HullError>
    where
        I: IntoIterator<Item = Point>,
    {
        let set: BTreeSet<Point> = points.into_iter().collect();
        if set.is_empty() {
            return Err(HullError::EmptyInput);
        }
        let limit = COORD_LIMIT.unsigned_abs();
        if let Some(p) = set
            .iter()
            .find(|p| p.x.unsigned_abs() >= limit || p.y.unsigned_abs() >= limit)
        {
            return Err(HullError::CoordinateOutOfRange(*p));
        }
        Ok(Self {
            cfg,
            points: set.into_iter().collect(),
            anchor: None,
            queue: VecDeque::new(),
            hull: Vec::new(),
            popped: Vec::new(),
            state: RunState::NotStarted,
            steps: 0,
        })
    }

    #[inline]
    pub fn cfg(&self) -> ScanCfg {
        self.cfg
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.state == RunState::Completed
    }

    /// The input set, deduplicated, in anchor order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Current chain, anchor first.
    #[inline]
    pub fn hull(&self) -> &[Point] {
        &self.hull
    }

    /// Next candidate, if the scan is under way and the queue is non-empty.
    #[inline]
    pub fn highlighted(&self) -> Option<Point> {
        match self.state {
            RunState::Running => self.queue.front().copied(),
            _ => None,
        }
    }

    /// Current view. Calling this repeatedly without `step()` yields equal snapshots.
    pub fn snapshot(&self) -> Snapshot {
        let remaining = match self.state {
            RunState::NotStarted => self.points.clone(),
            _ => self.queue.iter().copied().collect(),
        };
        Snapshot {
            state: self.state,
            step: self.steps,
            anchor: self.anchor,
            hull: self.hull.clone(),
            remaining,
            highlighted: self.highlighted(),
            popped: self.popped.clone(),
        }
    }

    /// Advance by one transition and return the new snapshot.
    pub fn step(&mut self) -> Result<Snapshot, HullError> {
        if self.state == RunState::Completed {
            return Err(HullError::TerminalState);
        }
        self.advance()?;
        Ok(self.snapshot())
    }

    /// Step until completed and return the completed snapshot.
    ///
    /// On an engine that has already completed this returns the final
    /// snapshot again instead of failing.
    pub fn run(&mut self) -> Result<Snapshot, HullError> {
        while self.state != RunState::Completed {
            self.advance()?;
        }
        Ok(self.snapshot())
    }

    /// Iterator over every snapshot still to be emitted, the completed one included.
    pub fn steps(&mut self) -> Steps<'_> {
        Steps { engine: self }
    }

    fn advance(&mut self) -> Result<(), HullError> {
        match self.state {
            RunState::NotStarted => self.initialize()?,
            RunState::Running => match self.queue.pop_front() {
                Some(p) => self.place(p),
                None => {
                    self.popped.clear();
                    self.state = RunState::Completed;
                    tracing::debug!(
                        hull_len = self.hull.len(),
                        steps = self.steps + 1,
                        "scan completed"
                    );
                }
            },
            RunState::Completed => return Err(HullError::TerminalState),
        }
        self.steps += 1;
        Ok(())
    }

    fn initialize(&mut self) -> Result<(), HullError> {
        let anchor = select_anchor(&self.points)?;
        let mut rest: Vec<Point> = self
            .points
            .iter()
            .copied()
            .filter(|p| *p != anchor)
            .collect();
        rest.sort_by(polar_cmp(anchor));
        tracing::debug!(%anchor, queue_len = rest.len(), "scan initialized");
        self.anchor = Some(anchor);
        self.hull = vec![anchor];
        self.queue = rest.into();
        self.state = RunState::Running;
        Ok(())
    }

    fn place(&mut self, p: Point) {
        self.popped.clear();
        while let [.., second, top] = self.hull[..] {
            if !self.cfg.pops(Turn::of(second, top, p)) {
                break;
            }
            self.hull.pop();
            self.popped.push(top);
        }
        self.hull.push(p);
        tracing::trace!(
            candidate = %p,
            popped = self.popped.len(),
            hull_len = self.hull.len(),
            remaining = self.queue.len(),
            "scan step"
        );
    }
}

/// Snapshot iterator returned by [`HullEngine::steps`].
pub struct Steps<'a> {
    engine: &'a mut HullEngine,
}

impl Iterator for Steps<'_> {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        self.engine.step().ok()
    }
}

/// Drive `engine` to completion, calling `observe` on every emitted snapshot
/// and `pace` between consecutive steps.
///
/// Pacing (timers, frame callbacks) lives entirely in `pace`; the engine
/// never waits. Fails with `HullError::TerminalState` if the engine had
/// already completed.
pub fn drive<O, P>(
    engine: &mut HullEngine,
    mut observe: O,
    mut pace: P,
) -> Result<Snapshot, HullError>
where
    O: FnMut(&Snapshot),
    P: FnMut(&Snapshot),
{
    loop {
        let snap = engine.step()?;
        observe(&snap);
        if snap.is_completed() {
            return Ok(snap);
        }
        pace(&snap);
    }
}

/// Run a full scan and return the final chain (CCW, anchor first).
pub fn convex_hull<I>(points: I, cfg: ScanCfg) -> Result<Vec<Point>, HullError>
where
    I: IntoIterator<Item = Point>,
{
    let mut engine = HullEngine::with_cfg(points, cfg)?;
    engine.run()?;
    Ok(engine.hull)
}

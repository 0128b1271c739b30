//! Step trace container shared by every generator.

/// Outcome of one search invocation. The index is the key's position in
/// the searched structure (array index or table slot), not a step index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Found(usize),
    NotFound,
}

impl Verdict {
    pub fn is_found(&self) -> bool {
        matches!(self, Verdict::Found(_))
    }

    /// Position of the match, if any.
    pub fn index(&self) -> Option<usize> {
        match *self {
            Verdict::Found(at) => Some(at),
            Verdict::NotFound => None,
        }
    }
}

/// The full ordered sequence of intermediate states produced for one
/// search invocation, plus its final verdict.
///
/// `match_step` is the index *within `steps`* at which the match becomes
/// visible. A trace may be precomputed past that point (the linear
/// generator is), but the playback controller never advances beyond it,
/// so no step past the match is ever exposed as current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace<S> {
    steps: Vec<S>,
    verdict: Verdict,
    match_step: Option<usize>,
}

impl<S> Trace<S> {
    pub(crate) fn new(steps: Vec<S>, verdict: Verdict, match_step: Option<usize>) -> Self {
        debug_assert!(match_step.map_or(true, |at| at < steps.len()));
        debug_assert_eq!(match_step.is_some(), verdict.is_found());
        Self {
            steps,
            verdict,
            match_step,
        }
    }

    /// Trace of a search over an empty structure: no steps, nothing found.
    pub fn empty() -> Self {
        Self {
            steps: Vec::new(),
            verdict: Verdict::NotFound,
            match_step: None,
        }
    }

    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn match_step(&self) -> Option<usize> {
        self.match_step
    }

    /// Last step index a consumer may sit on: the match step when the
    /// search succeeded, otherwise the final step.
    pub fn last_visible(&self) -> Option<usize> {
        self.match_step.or_else(|| self.steps.len().checked_sub(1))
    }
}

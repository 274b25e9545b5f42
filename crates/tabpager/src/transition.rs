#![forbid(unsafe_code)]

//! Page transitions as values.

/// A transition signal from a pager adapter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PagerTransition {
    /// The current page changed. `from` is `None` on the first selection.
    Discrete {
        from: Option<usize>,
        to: usize,
        animated: bool,
    },
    /// A drag is `progress` of the way from `from` to `to`.
    Progress { from: usize, to: usize, progress: f64 },
}

impl PagerTransition {
    /// Page the transition heads to.
    pub fn to(&self) -> usize {
        match *self {
            PagerTransition::Discrete { to, .. } | PagerTransition::Progress { to, .. } => to,
        }
    }

    pub fn is_discrete(&self) -> bool {
        matches!(self, PagerTransition::Discrete { .. })
    }
}

/// Opt-in queue of transitions for an owner that polls instead of
/// implementing a delegate.
#[derive(Debug, Default)]
pub(crate) struct TransitionLog {
    enabled: bool,
    pending: Vec<PagerTransition>,
}

impl TransitionLog {
    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.pending.clear();
        }
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn push(&mut self, transition: PagerTransition) {
        if self.enabled {
            self.pending.push(transition);
        }
    }

    pub(crate) fn take(&mut self) -> Vec<PagerTransition> {
        std::mem::take(&mut self.pending)
    }
}

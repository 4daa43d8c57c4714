//! Annotated search records and their ordering keys.

use lrta_kernel::cost::Cost;

/// Arena index of an [`AnnotatedRecord`] within one planning session.
///
/// Ids are handed out in creation order, so comparing ids compares discovery
/// order. That makes the id a deterministic final tie-breaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(usize);

impl RecordId {
    #[must_use]
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position in the registry arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Per-state planning annotations: `g`, `h`, cached `f = g + h`, and the
/// back-pointer along the best known path.
///
/// `g` and `h` are only writable through setters that refresh `f`, so a record
/// can never be observed with a stale `f`.
#[derive(Debug, Clone)]
pub struct AnnotatedRecord<S> {
    /// The wrapped state (identity key in the registry).
    pub state: S,
    g: Cost,
    h: Cost,
    f: Cost,
    parent: Option<RecordId>,
    h_computed: bool,
}

impl<S> AnnotatedRecord<S> {
    /// A fresh record: `g = +∞`, `h = 0`, `f = +∞`, no parent.
    #[must_use]
    pub fn new(state: S) -> Self {
        Self {
            state,
            g: Cost::INFINITY,
            h: Cost::ZERO,
            f: Cost::INFINITY,
            parent: None,
            h_computed: false,
        }
    }

    #[must_use]
    pub fn g(&self) -> Cost {
        self.g
    }

    #[must_use]
    pub fn h(&self) -> Cost {
        self.h
    }

    #[must_use]
    pub fn f(&self) -> Cost {
        self.f
    }

    /// Predecessor on the best known path (`None` for the start record and
    /// for records never reached).
    #[must_use]
    pub fn parent(&self) -> Option<RecordId> {
        self.parent
    }

    /// Whether the heuristic supplier has already been consulted for this
    /// record in the current session.
    #[must_use]
    pub fn is_h_computed(&self) -> bool {
        self.h_computed
    }

    pub fn set_g(&mut self, g: Cost) {
        self.g = g;
        self.refresh_f();
    }

    pub fn set_h(&mut self, h: Cost) {
        self.h = h;
        self.refresh_f();
    }

    /// Store a supplier estimate and mark `h` as computed.
    pub fn set_estimated_h(&mut self, h: Cost) {
        self.h_computed = true;
        self.set_h(h);
    }

    pub fn set_parent(&mut self, parent: Option<RecordId>) {
        self.parent = parent;
    }

    /// `f == g + h`. Holds after every mutation; exposed for invariant checks.
    #[must_use]
    pub fn is_f_consistent(&self) -> bool {
        self.f == self.g + self.h
    }

    fn refresh_f(&mut self) {
        self.f = self.g + self.h;
    }
}

/// The frontier ordering key: `(f, g, id)`.
///
/// Lower `f` first, then lower `g` (closer to the true start), then older
/// creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f: Cost,
    pub g: Cost,
    pub id: RecordId,
}

impl FrontierKey {
    #[must_use]
    pub fn of<S>(id: RecordId, record: &AnnotatedRecord<S>) -> Self {
        Self {
            f: record.f(),
            g: record.g(),
            id,
        }
    }
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f
            .cmp(&other.f)
            .then(self.g.cmp(&other.g))
            .then(self.id.cmp(&other.id))
    }
}

/// The correction-phase ordering key: `(h, id)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicKey {
    pub h: Cost,
    pub id: RecordId,
}

impl HeuristicKey {
    #[must_use]
    pub fn of<S>(id: RecordId, record: &AnnotatedRecord<S>) -> Self {
        Self { h: record.h(), id }
    }
}

impl PartialOrd for HeuristicKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeuristicKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.h.cmp(&other.h).then(self.id.cmp(&other.id))
    }
}

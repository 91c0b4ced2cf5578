/// Remaining yield quota for one traversal.
///
/// Owned by exactly one walk. Every yielded item consumes one unit; once a
/// limited budget reaches zero the walk stops. Running out is a normal end
/// of the walk, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Budget {
    #[default]
    Unbounded,
    Remaining(u64),
}

impl Budget {
    pub fn limited(items: u64) -> Self {
        Budget::Remaining(items)
    }

    /// `Unbounded` for `None`, otherwise a budget of `limit` items.
    pub fn from_limit(limit: Option<u32>) -> Self {
        limit.map_or(Budget::Unbounded, |n| Budget::Remaining(u64::from(n)))
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Budget::Remaining(0))
    }

    /// Items still allowed, `None` when unbounded.
    pub fn remaining(&self) -> Option<u64> {
        match self {
            Budget::Unbounded => None,
            Budget::Remaining(n) => Some(*n),
        }
    }

    /// Records one yielded item.
    pub fn consume(&mut self) {
        if let Budget::Remaining(n) = self {
            *n = n.saturating_sub(1);
        }
    }
}

// Recursion guard: depth bound and cycle detection

/// Outcome of checking a candidate parent before descending into it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Continue,
    /// The candidate already appears on the path from the root
    Cycle,
    DepthExhausted,
}

/// Decide whether to descend from `depth` into `candidate`, given the ids
/// already on the path from the root.
pub fn inspect<I, S>(path: I, candidate: &str, depth: usize, max_depth: usize) -> Verdict
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if depth >= max_depth {
        return Verdict::DepthExhausted;
    }
    if path.into_iter().any(|id| id.as_ref() == candidate) {
        return Verdict::Cycle;
    }
    Verdict::Continue
}

pub fn should_continue<I, S>(path: I, candidate: &str, depth: usize, max_depth: usize) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inspect(path, candidate, depth, max_depth) == Verdict::Continue
}

//! Bounded iterative search.
//!
//! Several dome solves have no closed form and sweep a variable in fixed
//! steps until a predicate holds: the soldier-row angular search, the dome
//! profile center descent, and the inner-boundary walk. They all share the
//! same contract, converge within a fixed step budget or fail hard, so the
//! loop lives here once and each site maps `CapExceeded` to its own error.

/// Outcome of a bounded search.
#[derive(Debug, Clone, PartialEq)]
pub enum Convergence<T> {
    /// The stop predicate held; carries the converged value.
    Converged(T),
    /// The step budget ran out before the predicate held.
    CapExceeded,
}

impl<T> Convergence<T> {
    /// Unwrap the converged value or substitute `err`.
    pub fn or_err<E>(self, err: E) -> std::result::Result<T, E> {
        match self {
            Convergence::Converged(v) => Ok(v),
            Convergence::CapExceeded => Err(err),
        }
    }
}

/// Run `step` at most `max_steps` times, passing the 0-based step index.
/// The first `Some` returned by `step` converges the search.
pub fn converge<T>(
    max_steps: usize,
    mut step: impl FnMut(usize) -> Option<T>,
) -> Convergence<T> {
    for i in 0..max_steps {
        if let Some(v) = step(i) {
            return Convergence::Converged(v);
        }
    }
    Convergence::CapExceeded
}

/// A terminal filter predicate: evaluated directly against a candidate,
/// without delegating to sub-predicates.
///
/// Implementations must be pure. `eval` reads the candidate and nothing
/// else, so a predicate can be shared freely across threads.
pub trait FilterPredicate<T>: Send + Sync {
    /// Fixed token the expression compiler uses to find this predicate.
    fn symbol(&self) -> &'static str;

    /// Returns `true` if the candidate passes.
    fn eval(&self, candidate: &T) -> bool;
}

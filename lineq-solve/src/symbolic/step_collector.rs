/// A sink for the steps of a solution.
///
/// Implemented for `Vec<S>`, which keeps every step in order, and for the unit type `()`, which
/// discards them when only the value of `x` is wanted.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}

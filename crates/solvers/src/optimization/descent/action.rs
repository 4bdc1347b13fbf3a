/// Control actions supported by the descent solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current iteration and return its accepted step.
    StopEarly,
}

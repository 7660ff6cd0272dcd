/// Controls how a list teardown reacts to payloads that fail to release.
///
/// Either way every payload is dropped; the policy only decides how many get
/// the chance to run their own `release` and how failures are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReleasePolicy {
    /// Release every payload and report all failures together.
    #[default]
    Sweep,
    /// Stop calling `release` at the first failure and return it.
    /// Payloads after it are dropped without being released.
    FailFast,
}

/// Tuning knobs for lists and list-level operations.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// How `destroy_list_with` handles release failures.
    pub release_policy: ReleasePolicy,
    /// Node slots reserved up front by `LinkedList::with_options`.
    pub initial_capacity: usize,
}

impl Options {
    pub fn release_policy(mut self, policy: ReleasePolicy) -> Self {
        self.release_policy = policy;
        self
    }

    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}

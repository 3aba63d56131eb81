#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Promise<T, D = ()> {
    Empty,
    Deferred(D),
    Resolved(T),
}

#[derive(Eq, PartialEq, Debug)]
pub enum PromiseState {
    Empty,
    Deferred,
    Resolved,
}

impl<T, D> Promise<T, D> {
    pub fn state(&self) -> PromiseState {
        match self {
            Self::Empty => PromiseState::Empty,
            Self::Deferred(_) => PromiseState::Deferred,
            Self::Resolved(_) => PromiseState::Resolved,
        }
    }

    pub fn is_deferred(&self, def: &D) -> bool
    where
        D: PartialEq,
    {
        matches!(self, Self::Deferred(d) if d == def)
    }

    pub fn clear(&mut self) {
        *self = Self::Empty;
    }

    pub fn defer(&mut self, def: D) {
        *self = Self::Deferred(def);
    }

    pub fn resolve(&mut self, val: T) {
        *self = Self::Resolved(val);
    }

    /// Resolve only if we are still waiting for `def`.  Answers to superseded
    /// requests are dropped.
    pub fn update(&mut self, (def, val): (D, T)) -> bool
    where
        D: PartialEq,
    {
        if self.is_deferred(&def) {
            self.resolve(val);
            true
        } else {
            false
        }
    }

    pub fn resolved(&self) -> Option<&T> {
        match self {
            Self::Resolved(val) => Some(val),
            _ => None,
        }
    }
}

impl<T, D> Default for Promise<T, D> {
    fn default() -> Self {
        Self::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_answers_are_ignored() {
        let mut promise: Promise<&str, u64> = Promise::default();
        assert_eq!(promise.state(), PromiseState::Empty);

        promise.defer(1);
        promise.defer(2);
        assert!(!promise.update((1, "old")));
        assert_eq!(promise.state(), PromiseState::Deferred);

        assert!(promise.update((2, "new")));
        assert_eq!(promise.resolved(), Some(&"new"));
        assert!(!promise.update((2, "again")));

        promise.clear();
        assert_eq!(promise.state(), PromiseState::Empty);
    }
}

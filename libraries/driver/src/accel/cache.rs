use super::config::CachePolicy;

/// One memoized derived value, valid until the next sample
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cached {
    value: Option<i32>,
    policy: CachePolicy,
}

impl Cached {
    pub const fn new(policy: CachePolicy) -> Self {
        Self {
            value: None,
            policy,
        }
    }

    /// The cached value, if one is held
    pub fn get(&self) -> Option<i32> {
        match (self.policy, self.value) {
            (CachePolicy::ZeroSentinel, Some(0)) => None,
            (_, value) => value,
        }
    }

    /// Return the cached value or compute, store and return a new one
    pub fn get_or_insert_with(&mut self, compute: impl FnOnce() -> i32) -> i32 {
        if let Some(value) = self.get() {
            return value;
        }
        let value = compute();
        self.value = Some(value);
        value
    }

    pub fn is_set(&self) -> bool {
        self.get().is_some()
    }

    pub fn clear(&mut self) {
        self.value = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tagged_caches_zero() {
        let mut cached = Cached::new(CachePolicy::Tagged);
        let mut calls = 0;
        assert_eq!(cached.get_or_insert_with(|| { calls += 1; 0 }), 0);
        assert_eq!(cached.get_or_insert_with(|| { calls += 1; 0 }), 0);
        assert_eq!(calls, 1, "A computed zero should be served from the cache");
        assert!(cached.is_set());
    }

    #[test]
    fn test_zero_sentinel_recomputes_zero() {
        let mut cached = Cached::new(CachePolicy::ZeroSentinel);
        let mut calls = 0;
        cached.get_or_insert_with(|| { calls += 1; 0 });
        cached.get_or_insert_with(|| { calls += 1; 0 });
        assert_eq!(calls, 2, "Zero is indistinguishable from unset and must be recomputed");
        assert!(!cached.is_set());

        assert_eq!(cached.get_or_insert_with(|| { calls += 1; 7 }), 7);
        assert_eq!(cached.get_or_insert_with(|| { calls += 1; 9 }), 7);
        assert_eq!(calls, 3, "Non-zero values are cached under either policy");
    }

    #[test]
    fn test_clear() {
        let mut cached = Cached::new(CachePolicy::Tagged);
        cached.get_or_insert_with(|| 42);
        cached.clear();
        assert_eq!(cached.get(), None);
        assert_eq!(cached.get_or_insert_with(|| 43), 43);
    }
}

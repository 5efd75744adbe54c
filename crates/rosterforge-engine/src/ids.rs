use std::collections::HashMap;
use std::sync::Arc;

use rosterforge_core::{EntityClass, IdSource, Result};

/// Hands out monotonically increasing identifiers for one run.
///
/// The first call per entity class queries the configured sink for its
/// highest persisted identifier and starts at the larger of
/// `max + 1` and the configured floor. Later calls increment purely in
/// memory; nothing is durably reserved until the writer commits, so a
/// failed run simply discards its identifiers.
pub struct IdAllocator {
    source: Arc<dyn IdSource>,
    floor: i64,
    counters: HashMap<EntityClass, i64>,
}

impl IdAllocator {
    pub fn new(source: Arc<dyn IdSource>, floor: i64) -> Self {
        Self {
            source,
            floor,
            counters: HashMap::new(),
        }
    }

    pub async fn next(&mut self, class: EntityClass) -> Result<i64> {
        if let Some(counter) = self.counters.get_mut(&class) {
            *counter += 1;
            return Ok(*counter);
        }
        let max = self.source.max_id(class).await?;
        let start = (max + 1).max(self.floor);
        self.counters.insert(class, start);
        Ok(start)
    }
}

#[cfg(test)]
mod tests {
    use rosterforge_core::ids::EmptyIdSource;

    use super::*;

    struct FixedSource(i64);

    #[async_trait::async_trait]
    impl IdSource for FixedSource {
        async fn max_id(&self, _class: EntityClass) -> Result<i64> {
            Ok(self.0)
        }
    }

    #[tokio::test]
    async fn sequential_calls_strictly_increase() {
        let mut allocator = IdAllocator::new(Arc::new(EmptyIdSource), 1);
        let first = allocator.next(EntityClass::Worker).await.expect("first");
        let second = allocator.next(EntityClass::Worker).await.expect("second");
        assert!(second > first);
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn starts_above_sink_maximum() {
        let mut allocator = IdAllocator::new(Arc::new(FixedSource(41)), 1);
        assert_eq!(allocator.next(EntityClass::Worker).await.expect("next"), 42);
    }

    #[tokio::test]
    async fn floor_wins_over_a_lower_sink_maximum() {
        let mut allocator = IdAllocator::new(Arc::new(FixedSource(3)), 100);
        assert_eq!(
            allocator.next(EntityClass::Company).await.expect("next"),
            100
        );
    }

    #[tokio::test]
    async fn classes_count_independently() {
        let mut allocator = IdAllocator::new(Arc::new(FixedSource(10)), 1);
        assert_eq!(allocator.next(EntityClass::Worker).await.expect("w"), 11);
        assert_eq!(allocator.next(EntityClass::Contract).await.expect("c"), 11);
        assert_eq!(allocator.next(EntityClass::Worker).await.expect("w2"), 12);
    }
}

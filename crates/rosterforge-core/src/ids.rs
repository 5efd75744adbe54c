//! Identifier sourcing contract shared by the engine and the sinks.

use crate::error::Result;

/// Entity classes that carry independently-allocated identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityClass {
    Worker,
    Company,
    Contract,
}

/// Where the allocator looks up the highest identifier already
/// persisted. One implementation per sink; chosen by configuration.
#[async_trait::async_trait]
pub trait IdSource: Send + Sync {
    /// Highest identifier present for the class; 0 when none exist.
    async fn max_id(&self, class: EntityClass) -> Result<i64>;
}

/// Id source for runs with no pre-existing sink state.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyIdSource;

#[async_trait::async_trait]
impl IdSource for EmptyIdSource {
    async fn max_id(&self, _class: EntityClass) -> Result<i64> {
        Ok(0)
    }
}

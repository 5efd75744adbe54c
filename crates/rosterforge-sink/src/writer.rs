//! Dual-sink commit.
//!
//! A record set is handed to every configured sink exactly once. Sink
//! failures are sink-local: one sink erroring never stops the other
//! from receiving the full result set.

use std::sync::Arc;

use tracing::error;

use rosterforge_core::record::{Company, Contract, Wrestler};

use crate::error::{Result, SinkError};

/// A persistence destination for one run's records.
#[async_trait::async_trait]
pub trait RecordSink: Send + Sync {
    fn name(&self) -> &'static str;

    async fn commit(
        &self,
        companies: &[Company],
        wrestlers: &[Wrestler],
        contracts: &[Contract],
    ) -> Result<()>;
}

/// One sink's failure, reported rather than propagated.
#[derive(Debug, Clone)]
pub struct SinkFailure {
    pub sink: &'static str,
    pub message: String,
}

/// Summary of a dual-sink commit.
#[derive(Debug, Clone, Default)]
pub struct CommitReport {
    pub committed: Vec<&'static str>,
    pub failures: Vec<SinkFailure>,
}

impl CommitReport {
    pub fn all_failed(&self) -> bool {
        self.committed.is_empty() && !self.failures.is_empty()
    }
}

pub struct DualSinkWriter {
    sinks: Vec<Arc<dyn RecordSink>>,
}

impl DualSinkWriter {
    /// At least one sink must be configured.
    pub fn new(sinks: Vec<Arc<dyn RecordSink>>) -> Result<Self> {
        if sinks.is_empty() {
            return Err(SinkError::Other("no sink configured".to_string()));
        }
        Ok(Self { sinks })
    }

    /// Offer the full record set to every sink, collecting per-sink
    /// outcomes instead of short-circuiting.
    pub async fn commit(
        &self,
        companies: &[Company],
        wrestlers: &[Wrestler],
        contracts: &[Contract],
    ) -> CommitReport {
        let mut report = CommitReport::default();
        for sink in &self.sinks {
            match sink.commit(companies, wrestlers, contracts).await {
                Ok(()) => report.committed.push(sink.name()),
                Err(err) => {
                    error!(sink = sink.name(), error = %err, "sink commit failed");
                    report.failures.push(SinkFailure {
                        sink: sink.name(),
                        message: err.to_string(),
                    });
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct Failing;

    #[async_trait::async_trait]
    impl RecordSink for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn commit(&self, _: &[Company], _: &[Wrestler], _: &[Contract]) -> Result<()> {
            Err(SinkError::Other("disk on fire".to_string()))
        }
    }

    struct Counting(AtomicUsize);

    #[async_trait::async_trait]
    impl RecordSink for Counting {
        fn name(&self) -> &'static str {
            "counting"
        }

        async fn commit(&self, _: &[Company], _: &[Wrestler], _: &[Contract]) -> Result<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn a_failing_sink_does_not_block_the_other() {
        let counting = Arc::new(Counting(AtomicUsize::new(0)));
        let writer =
            DualSinkWriter::new(vec![Arc::new(Failing), counting.clone()]).expect("writer");

        let report = writer.commit(&[], &[], &[]).await;

        assert_eq!(counting.0.load(Ordering::SeqCst), 1);
        assert_eq!(report.committed, vec!["counting"]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].sink, "failing");
        assert!(!report.all_failed());
    }

    #[test]
    fn zero_sinks_is_a_configuration_error() {
        assert!(DualSinkWriter::new(vec![]).is_err());
    }
}

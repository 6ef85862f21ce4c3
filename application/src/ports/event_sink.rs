//! Event sink port
//!
//! The orchestrator writes [`RunEvent`]s into a sink; the transport
//! boundary decides what to do with them. The core never depends on a
//! particular streaming transport.

use escriba_domain::RunEvent;
use tokio::sync::mpsc;

/// Destination for orchestration events.
pub trait EventSink: Send + Sync {
    /// Deliver one event. Must not block and must tolerate a consumer
    /// that has gone away.
    fn emit(&self, event: RunEvent);

    /// Convenience for progress log lines.
    fn log(&self, message: String) {
        self.emit(RunEvent::Log(message));
    }

    /// Whether anyone is still consuming events. A disconnected
    /// consumer is a signal to abandon remaining generation work.
    fn is_connected(&self) -> bool {
        true
    }
}

/// No-op sink for when nobody is listening.
pub struct NoSink;

impl EventSink for NoSink {
    fn emit(&self, _event: RunEvent) {}
}

/// Channel-backed sink bridging the orchestrator to a consumer task.
///
/// Sends are unbounded and non-blocking; if the receiving side has
/// disconnected, events are dropped silently, since the consuming
/// boundary abandoning the stream must not fail the run.
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<RunEvent>,
}

impl ChannelSink {
    /// Create a sink and the receiver that drains it.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<RunEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl EventSink for ChannelSink {
    fn emit(&self, event: RunEvent) {
        let _ = self.tx.send(event);
    }

    fn is_connected(&self) -> bool {
        !self.tx.is_closed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_sink_delivers_in_order() {
        let (sink, mut rx) = ChannelSink::new();
        sink.log("primeiro".to_string());
        sink.emit(RunEvent::End);

        assert_eq!(rx.try_recv().unwrap(), RunEvent::Log("primeiro".to_string()));
        assert_eq!(rx.try_recv().unwrap(), RunEvent::End);
    }

    #[test]
    fn test_emit_after_consumer_drop_is_silent() {
        let (sink, rx) = ChannelSink::new();
        drop(rx);
        assert!(!sink.is_connected());
        // Must not panic
        sink.emit(RunEvent::Log("ninguém ouvindo".to_string()));
    }

    #[test]
    fn test_no_sink_discards_everything() {
        NoSink.emit(RunEvent::End);
        NoSink.log("descartado".to_string());
    }
}

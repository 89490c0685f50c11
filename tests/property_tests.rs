//! Property-based tests for gating, prefix chaining, and newline semantics

use clog::{Config, Level};
use parking_lot::Mutex;
use proptest::prelude::*;
use std::io::Write;
use std::sync::Arc;

#[derive(Clone, Default)]
struct CaptureSink(Arc<Mutex<Vec<u8>>>);

impl Write for CaptureSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl CaptureSink {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("valid utf-8 output")
    }
}

fn level_strategy() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Debug),
        Just(Level::Info),
        Just(Level::Warn),
        Just(Level::Error),
        Just(Level::Fatal),
    ]
}

proptest! {
    /// A message is emitted iff its rank is at least the configured rank.
    #[test]
    fn gating_matches_rank_order(
        msg_level in level_strategy(),
        min_level in level_strategy(),
    ) {
        let sink = CaptureSink::default();
        let logger = Config::new()
            .level(min_level)
            .output(sink.clone())
            // Fatal input would otherwise terminate the test process.
            .on_fatal(Arc::new(|| {}))
            .build();

        logger.log(msg_level, "probe");

        let emitted = !sink.contents().is_empty();
        prop_assert_eq!(emitted, msg_level >= min_level);
    }

    /// Raw print output is never gated, at any configured level.
    #[test]
    fn print_is_always_emitted(min_level in level_strategy()) {
        let sink = CaptureSink::default();
        let logger = Config::new()
            .level(min_level)
            .output(sink.clone())
            .build();

        logger.print("probe");

        prop_assert_eq!(sink.contents(), "probe\n");
    }

    /// Chained derivations render their segments left to right, each with
    /// the ": " separator.
    #[test]
    fn prefix_chain_composes_left_to_right(
        segments in prop::collection::vec("[a-zA-Z0-9]{1,8}", 1..5),
    ) {
        let sink = CaptureSink::default();
        let mut logger = Config::new().output(sink.clone()).build();
        for segment in &segments {
            logger = logger.with_prefix(segment);
        }

        logger.info("msg");

        let mut expected = String::from("[INF] ");
        for segment in &segments {
            expected.push_str(segment);
            expected.push_str(": ");
        }
        expected.push_str("msg\n");
        prop_assert_eq!(sink.contents(), expected);
    }

    /// The simple variant appends exactly one newline; the formatted
    /// variant appends none.
    #[test]
    fn newline_semantics(msg in "[a-zA-Z0-9 ]{0,32}") {
        let sink = CaptureSink::default();
        let logger = Config::new().output(sink.clone()).build();

        logger.info(&msg);
        prop_assert_eq!(sink.contents(), format!("[INF] {msg}\n"));

        let sink = CaptureSink::default();
        let logger = Config::new().output(sink.clone()).build();

        logger.infof(format_args!("{msg}"));
        prop_assert_eq!(sink.contents(), format!("[INF] {msg}"));
    }
}

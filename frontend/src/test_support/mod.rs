#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::utils::notify::Notifier;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::{Mutex, OnceLock};

    /// Captures alert messages instead of showing them.
    #[derive(Clone, Default)]
    pub struct RecordingNotifier {
        messages: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingNotifier {
        pub fn messages(&self) -> Vec<String> {
            self.messages.borrow().clone()
        }

        pub fn count(&self) -> usize {
            self.messages.borrow().len()
        }
    }

    impl Notifier for RecordingNotifier {
        fn alert(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    /// Process-wide logger that keeps every formatted record for inspection.
    pub struct CapturingLogger {
        records: Mutex<Vec<String>>,
    }

    impl log::Log for CapturingLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut records) = self.records.lock() {
                records.push(format!("{} {}", record.level(), record.args()));
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: OnceLock<&'static CapturingLogger> = OnceLock::new();

    pub fn capture_logs() -> &'static CapturingLogger {
        LOGGER.get_or_init(|| {
            let logger: &'static CapturingLogger = Box::leak(Box::new(CapturingLogger {
                records: Mutex::new(Vec::new()),
            }));
            if log::set_logger(logger).is_ok() {
                log::set_max_level(log::LevelFilter::Trace);
            }
            logger
        })
    }

    impl CapturingLogger {
        pub fn records(&self) -> Vec<String> {
            self.records
                .lock()
                .map(|records| records.clone())
                .unwrap_or_default()
        }
    }
}

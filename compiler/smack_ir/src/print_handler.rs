//! Destinations for `println` output.
//!
//! The root environment owns one handler; every frame created beneath it
//! reaches the same handler, including frames on spawned tasks. Embedders
//! and tests swap stdout for a buffer to capture what a program printed.

use parking_lot::Mutex;
use std::sync::Arc;

/// Writes lines to the process's stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, line: &str) {
        println!("{line}");
    }
}

/// Accumulates lines in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, line: &str) {
        let mut buffer = self.buffer.lock();
        buffer.push_str(line);
        buffer.push('\n');
    }

    /// Everything printed so far.
    pub fn output(&self) -> String {
        self.buffer.lock().clone()
    }
}

/// Enum dispatch over the available destinations.
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
}

impl PrintHandlerImpl {
    pub fn println(&self, line: &str) {
        match self {
            Self::Stdout(h) => h.println(line),
            Self::Buffer(h) => h.println(line),
        }
    }

    /// Captured output. Empty for handlers that do not capture.
    pub fn output(&self) -> String {
        match self {
            Self::Buffer(h) => h.output(),
            Self::Stdout(_) => String::new(),
        }
    }
}

/// Handler shared between the root environment and every task.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    #[test]
    fn buffer_collects_lines() {
        let handler = buffer_handler();
        handler.println("(1 2)");
        handler.println("done");
        assert_eq!(handler.output(), "(1 2)\ndone\n");
    }

    #[test]
    fn stdout_captures_nothing() {
        assert_eq!(stdout_handler().output(), "");
    }

    #[test]
    fn buffer_accepts_lines_from_many_threads() {
        let handler = buffer_handler();
        let workers: Vec<_> = (0..4)
            .map(|_| {
                let handler = Arc::clone(&handler);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        handler.println("line");
                    }
                })
            })
            .collect();
        for worker in workers {
            assert!(worker.join().is_ok());
        }
        assert_eq!(handler.output().lines().count(), 100);
    }
}

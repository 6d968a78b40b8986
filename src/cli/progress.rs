//! Terminal spinner shown while waiting on the service.

use std::io::{IsTerminal, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// Animated in-progress indicator on stderr.
///
/// Draws from a background thread when stderr is a terminal, otherwise prints the
/// label once. The line is cleared when the spinner is stopped or dropped.
#[derive(Debug)]
pub struct Spinner {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    /// Start spinning with `label`
    pub fn start(label: &str) -> Self {
        let stop = Arc::new(AtomicBool::new(false));

        if !std::io::stderr().is_terminal() {
            eprintln!("{label}...");
            return Self { stop, handle: None };
        }

        let flag = Arc::clone(&stop);
        let text = label.to_string();
        let handle = std::thread::Builder::new()
            .name("spinner".to_string())
            .spawn(move || {
                let mut stderr = std::io::stderr();
                for frame in FRAMES.iter().cycle() {
                    if flag.load(Ordering::Relaxed) {
                        break;
                    }
                    let _ = write!(stderr, "\r{frame} {text}");
                    let _ = stderr.flush();
                    std::thread::sleep(FRAME_INTERVAL);
                }
                let _ = write!(stderr, "\r\x1b[2K");
                let _ = stderr.flush();
            });

        match handle {
            Ok(handle) => Self {
                stop,
                handle: Some(handle),
            },
            Err(e) => {
                log::debug!("Spinner thread unavailable: {e}");
                eprintln!("{label}...");
                Self { stop, handle: None }
            }
        }
    }

    /// Stop and clear the line
    pub fn stop(mut self) {
        self.halt();
    }

    fn halt(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.halt();
    }
}

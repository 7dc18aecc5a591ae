use crate::ui;
use std::time::{Duration, Instant};

/// Reports the steps of a multi-step operation as they run
pub struct ProgressTracker {
    operation_name: String,
    start_time: Instant,
    steps: Vec<String>,
    current_step: usize,
}

impl ProgressTracker {
    pub fn new(operation_name: &str) -> Self {
        ui::section_header(operation_name);
        Self {
            operation_name: operation_name.to_string(),
            start_time: Instant::now(),
            steps: Vec::new(),
            current_step: 0,
        }
    }

    pub fn with_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = steps.into_iter().map(Into::into).collect();
        self
    }

    fn current(&self) -> Option<&str> {
        self.steps.get(self.current_step).map(String::as_str)
    }

    pub fn start_step(&self) {
        if let Some(step) = self.current() {
            ui::status_message(step);
        }
    }

    pub fn complete_step(&mut self) {
        if let Some(step) = self.current() {
            ui::success_message(step);
            self.current_step += 1;
        }
    }

    pub fn complete_step_with(&mut self, detail: &str) {
        if let Some(step) = self.current() {
            ui::success_message(&format!("{step}: {detail}"));
            self.current_step += 1;
        }
    }

    pub fn skip_step(&mut self, reason: &str) {
        if let Some(step) = self.current() {
            ui::warning_message(&format!("Skipped: {step} ({reason})"));
            self.current_step += 1;
        }
    }

    pub fn complete(&self) {
        ui::success_message(&format!(
            "{} completed in {}",
            self.operation_name,
            format_duration(self.start_time.elapsed())
        ));
    }
}

fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{millis} ms")
    } else {
        format!("{:.1} seconds", duration.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250 ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5 seconds");
    }

    #[test]
    fn test_steps_advance_and_stop_at_end() {
        let mut progress = ProgressTracker::new("Release").with_steps(["one", "two"]);
        progress.complete_step();
        assert_eq!(progress.current(), Some("two"));
        progress.skip_step("nothing to do");
        assert_eq!(progress.current(), None);
        progress.complete_step();
        assert_eq!(progress.current_step, 2);
    }
}

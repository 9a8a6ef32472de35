use evolve_words_data::{Outcome, ProgressEvent};

/// Receiver of a run's progress.
///
/// `progress` is called once per completed generation, in generation order;
/// `finished` is called at most once, after the last event. A cancelled run
/// calls neither for the generation it abandoned, and never calls `finished`.
/// Implementations must not block for long: the loop waits for them.
pub trait ProgressSink {
    fn progress(&mut self, event: ProgressEvent);

    fn finished(&mut self, outcome: &Outcome);
}

impl<S: ProgressSink + ?Sized> ProgressSink for &mut S {
    fn progress(&mut self, event: ProgressEvent) {
        (**self).progress(event);
    }

    fn finished(&mut self, outcome: &Outcome) {
        (**self).finished(outcome);
    }
}

/// Everything a sink was told, kept in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub events: Vec<ProgressEvent>,
    pub outcome: Option<Outcome>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressSink for RecordingSink {
    fn progress(&mut self, event: ProgressEvent) {
        self.events.push(event);
    }

    fn finished(&mut self, outcome: &Outcome) {
        self.outcome = Some(outcome.clone());
    }
}

//! Runs simulations on a dedicated background thread, one at a time.
//!
//! Progress leaves the worker as [`WorkerMessage`]s over an unbounded
//! channel, so posting never blocks the loop. Every message carries the
//! [`RunId`] of the run that produced it; a consumer that started a newer
//! run drops anything still queued from the old one.

use crate::cancel::CancellationToken;
use crate::error::Result;
use crate::mutation::Mutator;
use crate::simulation::{RunResult, Simulation};
use crate::sink::ProgressSink;
use evolve_words_data::{Outcome, ProgressEvent, Word};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use uuid::Uuid;

/// Identifies one simulation run.
pub type RunId = Uuid;

/// Messages posted by the worker thread.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerMessage {
    Started {
        run_id: RunId,
        progenitor: Word,
        target_population: usize,
    },
    Progress {
        run_id: RunId,
        event: ProgressEvent,
    },
    Finished {
        run_id: RunId,
        outcome: Outcome,
    },
}

impl WorkerMessage {
    #[must_use]
    pub fn run_id(&self) -> RunId {
        match self {
            Self::Started { run_id, .. }
            | Self::Progress { run_id, .. }
            | Self::Finished { run_id, .. } => *run_id,
        }
    }
}

/// A [`ProgressSink`] that posts run-tagged messages to a channel.
///
/// A closed receiver is not an error: the events are simply dropped.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    run_id: RunId,
    sender: Sender<WorkerMessage>,
}

impl ChannelSink {
    pub fn new(run_id: RunId, sender: Sender<WorkerMessage>) -> Self {
        Self { run_id, sender }
    }
}

impl ProgressSink for ChannelSink {
    fn progress(&mut self, event: ProgressEvent) {
        let _ = self.sender.send(WorkerMessage::Progress {
            run_id: self.run_id,
            event,
        });
    }

    fn finished(&mut self, outcome: &Outcome) {
        let _ = self.sender.send(WorkerMessage::Finished {
            run_id: self.run_id,
            outcome: outcome.clone(),
        });
    }
}

struct ActiveRun {
    id: RunId,
    cancel: CancellationToken,
    handle: JoinHandle<RunResult>,
}

/// Owner of the single background simulation.
///
/// Starting a run first cancels and joins whatever run is still active.
/// Dropping the worker does the same.
pub struct ExclusiveWorker {
    sender: Sender<WorkerMessage>,
    active: Option<ActiveRun>,
}

impl ExclusiveWorker {
    /// Creates a worker and the receiving end of its message channel.
    pub fn new() -> (Self, Receiver<WorkerMessage>) {
        let (sender, receiver) = mpsc::channel();
        (
            Self {
                sender,
                active: None,
            },
            receiver,
        )
    }

    /// Starts `simulation` on a fresh thread and returns its run id.
    pub fn start<M>(&mut self, mut simulation: Simulation<M>) -> Result<RunId>
    where
        M: Mutator + Send + 'static,
    {
        self.stop();

        let run_id = Uuid::new_v4();
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let mut sink = ChannelSink::new(run_id, self.sender.clone());
        let _ = self.sender.send(WorkerMessage::Started {
            run_id,
            progenitor: simulation.params().progenitor().clone(),
            target_population: simulation.params().target_population(),
        });

        let handle = thread::Builder::new()
            .name("evolve-words-sim".to_string())
            .spawn(move || {
                let span = tracing::info_span!("run", id = %run_id);
                let _guard = span.enter();
                simulation.run(&mut sink, &token)
            })?;

        self.active = Some(ActiveRun {
            id: run_id,
            cancel,
            handle,
        });
        Ok(run_id)
    }

    /// Cancels the active run, if any, and waits for its thread to exit.
    pub fn stop(&mut self) -> Option<RunResult> {
        let run = self.active.take()?;
        run.cancel.cancel();
        match run.handle.join() {
            Ok(result) => {
                tracing::debug!(run = %run.id, ?result, "Simulation worker joined");
                Some(result)
            }
            Err(_) => {
                tracing::error!(run = %run.id, "Simulation worker panicked");
                None
            }
        }
    }

    /// Id of the most recently started run, finished or not.
    #[must_use]
    pub fn active_run(&self) -> Option<RunId> {
        self.active.as_ref().map(|run| run.id)
    }

    /// True while the most recent run's thread is still working.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|run| !run.handle.is_finished())
    }
}

impl Drop for ExclusiveWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

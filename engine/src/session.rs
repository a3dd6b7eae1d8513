//! The dashboard session: pending selection plus record pipeline.
//!
//! [`Session`] is the single owner of mutable dashboard state. Views get
//! read access through [`Session::selection`] and [`Session::pipeline`].

use futures::stream::{FuturesUnordered, StreamExt};

use crate::config::PipelineConfig;
use crate::error::PipelineResult;
use crate::intake::{FileCandidate, IntakePolicy, IntakeReport, Selection};
use crate::models::RecordId;
use crate::notify::Notifier;
use crate::pipeline::{Pipeline, Transition};
use crate::source::{MockSource, RecordSource};
use crate::task::{CompletionTask, Timer};

#[derive(Debug, Clone)]
pub struct Session<S> {
    policy: IntakePolicy,
    selection: Selection,
    pipeline: Pipeline<S>,
}

impl Session<MockSource> {
    /// Session backed by the mock source.
    pub fn mock(config: &PipelineConfig) -> Self {
        Self::new(MockSource::from_config(config), IntakePolicy::from(config))
    }
}

impl<S: RecordSource> Session<S> {
    pub fn new(source: S, policy: IntakePolicy) -> Self {
        Self {
            policy,
            selection: Selection::new(),
            pipeline: Pipeline::new(source),
        }
    }

    /// Add picked files to the selection, warning once about rejected ones.
    pub fn select(
        &mut self,
        files: impl IntoIterator<Item = FileCandidate>,
        notifier: &impl Notifier,
    ) -> IntakeReport {
        let report = self.selection.add(files, &self.policy);
        if let Some(warning) = report.warning() {
            log::warn!("⚠️  {} file(s) rejected", report.rejected.len());
            notifier.notify(warning);
        }
        report
    }

    pub fn deselect(&mut self, index: usize) -> Option<FileCandidate> {
        self.selection.remove(index)
    }

    /// Submit the selection. Returns the completion tasks to run.
    ///
    /// With nothing selected this emits one warning and creates nothing.
    pub fn process(&mut self, notifier: &impl Notifier) -> Vec<CompletionTask> {
        let batch = match self.selection.take() {
            Ok(batch) => batch,
            Err(e) => {
                notifier.notify(e.notification());
                return Vec::new();
            }
        };

        match self.pipeline.submit(batch) {
            Ok(submission) => {
                notifier.notify(submission.notification);
                submission.tasks
            }
            Err(e) => {
                // take() never hands over an empty batch
                log::error!("❌ Submission failed: {}", e);
                Vec::new()
            }
        }
    }

    pub fn complete(&mut self, id: &RecordId) -> PipelineResult<Transition> {
        self.pipeline.complete(id)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn pipeline(&self) -> &Pipeline<S> {
        &self.pipeline
    }
}

/// Run every task concurrently and apply each completion as it fires.
///
/// `on_transition` sees the session right after each change.
pub async fn drive_completions<S, T, F>(
    session: &mut Session<S>,
    tasks: Vec<CompletionTask>,
    timer: &T,
    mut on_transition: F,
) where
    S: RecordSource,
    T: Timer + ?Sized,
    F: FnMut(&Session<S>, &RecordId, &Transition),
{
    let mut pending: FuturesUnordered<_> = tasks
        .into_iter()
        .map(|task| task.complete_after(timer))
        .collect();

    while let Some(id) = pending.next().await {
        match session.complete(&id) {
            Ok(transition) => on_transition(session, &id, &transition),
            Err(e) => log::warn!("Ignoring completion for {}: {}", id, e),
        }
    }
}

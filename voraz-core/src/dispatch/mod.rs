//! Background dispatch of MIN and MAX tour computations.
//!
//! Each mode owns one slot. Submitting new input cancels the in-flight job of
//! every mode, bumps the generation, and starts one named worker thread per
//! mode. Slot generations only move forward: a submission that reaches a slot
//! after a newer one starts no worker for that mode. A worker publishes only
//! while its generation is still current, so the slot always reflects the
//! newest submission that has finished.

use std::{
    sync::{
        Arc, Mutex, MutexGuard,
        atomic::{AtomicU64, Ordering},
        mpsc::{self, Receiver, Sender},
    },
    thread::{self, JoinHandle},
};

use tracing::{debug, instrument, warn};

use crate::{
    cancel::CancellationToken,
    edge::{SelectionMode, TourEdge},
    error::{Result, TourError},
    tour::{TourResult, compute_greedy_tour_cancellable},
};

const SLOT_RESOURCE: &str = "tour result slot";

/// A finished computation delivered by a [`TourDispatcher`].
#[derive(Clone, Debug, PartialEq)]
pub struct TourUpdate {
    mode: SelectionMode,
    generation: u64,
    result: Arc<TourResult>,
}

impl TourUpdate {
    /// Returns the mode the result was computed for.
    #[must_use]
    #[rustfmt::skip]
    pub fn mode(&self) -> SelectionMode { self.mode }

    /// Returns the submission generation that produced the result.
    #[must_use]
    #[rustfmt::skip]
    pub fn generation(&self) -> u64 { self.generation }

    /// Returns the computed tour.
    #[must_use]
    #[rustfmt::skip]
    pub fn result(&self) -> &TourResult { &self.result }
}

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    token: CancellationToken,
    latest: Option<TourUpdate>,
}

#[derive(Debug)]
struct Shared {
    next_generation: AtomicU64,
    slots: [Mutex<Slot>; 2],
}

impl Shared {
    fn new() -> Self {
        Self {
            next_generation: AtomicU64::new(1),
            slots: [Mutex::default(), Mutex::default()],
        }
    }

    fn slot(&self, mode: SelectionMode) -> Result<MutexGuard<'_, Slot>> {
        let index = match mode {
            SelectionMode::Min => 0,
            SelectionMode::Max => 1,
        };
        self.slots[index].lock().map_err(|_| TourError::LockPoisoned {
            resource: SLOT_RESOURCE,
        })
    }

    /// Stores `update` and forwards it to `sender` when its generation is
    /// still current. Returns `false` for stale updates.
    fn publish(&self, sender: &Sender<TourUpdate>, update: TourUpdate) -> Result<bool> {
        let mut slot = self.slot(update.mode)?;
        if slot.generation != update.generation {
            debug!(
                mode = %update.mode,
                generation = update.generation,
                current = slot.generation,
                "dropping stale tour result"
            );
            return Ok(false);
        }
        slot.latest = Some(update.clone());
        // Sent under the slot lock so per-mode delivery order matches
        // publication order.
        if sender.send(update).is_err() {
            debug!("tour update receiver dropped");
        }
        Ok(true)
    }
}

/// Handles for the workers started by one [`TourDispatcher::submit`] call.
#[derive(Debug)]
pub struct Submission {
    generation: u64,
    handles: Vec<(SelectionMode, JoinHandle<()>)>,
}

impl Submission {
    /// Returns the generation assigned to this submission.
    #[must_use]
    #[rustfmt::skip]
    pub fn generation(&self) -> u64 { self.generation }

    /// Waits for every worker of this submission to finish.
    ///
    /// # Errors
    /// Returns [`TourError::WorkerPanicked`] for the first worker that
    /// panicked.
    pub fn join(self) -> Result<()> {
        let mut outcome = Ok(());
        for (mode, handle) in self.handles {
            if handle.join().is_err() && outcome.is_ok() {
                outcome = Err(TourError::WorkerPanicked { mode });
            }
        }
        outcome
    }
}

/// Runs MIN and MAX tours on background threads with last-write-wins slots.
///
/// # Examples
/// ```
/// use voraz_core::{SelectionMode, TourDispatcher, TourEdge};
///
/// let (dispatcher, updates) = TourDispatcher::new();
/// let edges = vec![
///     TourEdge::new(0, 1, 1.0),
///     TourEdge::new(1, 2, 2.0),
///     TourEdge::new(2, 0, 3.0),
/// ];
/// let submission = dispatcher.submit(edges, 3).expect("workers start");
/// submission.join().expect("workers finish");
/// let received: Vec<_> = updates.try_iter().collect();
/// assert_eq!(received.len(), 2);
/// let latest = dispatcher.latest(SelectionMode::Min).expect("slot readable");
/// assert!(latest.is_some_and(|update| update.result().is_complete()));
/// ```
#[derive(Debug)]
pub struct TourDispatcher {
    shared: Arc<Shared>,
    sender: Sender<TourUpdate>,
}

impl TourDispatcher {
    /// Creates a dispatcher and the receiver its updates are delivered on.
    #[must_use]
    pub fn new() -> (Self, Receiver<TourUpdate>) {
        let (sender, receiver) = mpsc::channel();
        (
            Self {
                shared: Arc::new(Shared::new()),
                sender,
            },
            receiver,
        )
    }

    /// Supersedes any in-flight work and starts one worker per mode.
    ///
    /// # Errors
    /// Returns [`TourError::LockPoisoned`] when a slot lock is poisoned and
    /// [`TourError::WorkerSpawn`] when a worker thread cannot be started.
    #[instrument(
        name = "core.dispatch.submit",
        err,
        skip(self, edges),
        fields(generation = tracing::field::Empty),
    )]
    pub fn submit(
        &self,
        edges: impl Into<Arc<[TourEdge]>>,
        node_count: usize,
    ) -> Result<Submission> {
        let edges = edges.into();
        let generation = self.shared.next_generation.fetch_add(1, Ordering::Relaxed);
        tracing::Span::current().record("generation", generation);

        let mut handles = Vec::with_capacity(SelectionMode::ALL.len());
        for mode in SelectionMode::ALL {
            let Some(token) = self.claim_slot(mode, generation)? else {
                debug!(mode = %mode, generation, "submission already superseded");
                continue;
            };
            let handle = self.spawn_worker(mode, generation, token, Arc::clone(&edges), node_count)?;
            handles.push((mode, handle));
        }
        Ok(Submission {
            generation,
            handles,
        })
    }

    /// Returns the most recently published update for `mode`.
    ///
    /// # Errors
    /// Returns [`TourError::LockPoisoned`] when the slot lock is poisoned.
    pub fn latest(&self, mode: SelectionMode) -> Result<Option<TourUpdate>> {
        Ok(self.shared.slot(mode)?.latest.clone())
    }

    /// Cancels the in-flight work of every mode.
    ///
    /// # Errors
    /// Returns [`TourError::LockPoisoned`] when a slot lock is poisoned.
    pub fn cancel_all(&self) -> Result<()> {
        for mode in SelectionMode::ALL {
            self.shared.slot(mode)?.token.cancel();
        }
        Ok(())
    }

    /// Makes `generation` current for `mode` and returns its token, or
    /// `None` when a newer submission already owns the slot.
    fn claim_slot(
        &self,
        mode: SelectionMode,
        generation: u64,
    ) -> Result<Option<CancellationToken>> {
        let mut slot = self.shared.slot(mode)?;
        if slot.generation > generation {
            return Ok(None);
        }
        slot.token.cancel();
        slot.token = CancellationToken::new();
        slot.generation = generation;
        Ok(Some(slot.token.clone()))
    }

    fn spawn_worker(
        &self,
        mode: SelectionMode,
        generation: u64,
        token: CancellationToken,
        edges: Arc<[TourEdge]>,
        node_count: usize,
    ) -> Result<JoinHandle<()>> {
        let shared = Arc::clone(&self.shared);
        let sender = self.sender.clone();
        thread::Builder::new()
            .name(format!("voraz-tour-{}", mode.as_str().to_ascii_lowercase()))
            .spawn(move || {
                match compute_greedy_tour_cancellable(&edges, node_count, mode, &token) {
                    Ok(result) => {
                        let update = TourUpdate {
                            mode,
                            generation,
                            result: Arc::new(result),
                        };
                        if let Err(err) = shared.publish(&sender, update) {
                            warn!(mode = %mode, generation, error = %err, "failed to publish tour");
                        }
                    }
                    Err(TourError::Cancelled { .. }) => {
                        debug!(mode = %mode, generation, "tour computation superseded");
                    }
                    Err(err) => {
                        warn!(mode = %mode, generation, error = %err, "tour computation failed");
                    }
                }
            })
            .map_err(|err| TourError::WorkerSpawn {
                mode,
                message: Arc::from(err.to_string()),
            })
    }
}

impl Drop for TourDispatcher {
    fn drop(&mut self) {
        for slot in &self.shared.slots {
            if let Ok(slot) = slot.lock() {
                slot.token.cancel();
            }
        }
    }
}

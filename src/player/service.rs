// SPDX-License-Identifier: MPL-2.0
//! Tokio service wrapping a [`TransportController`].
//!
//! The service is an actor: one task owns the controller and processes one
//! message at a time, so controller state is never shared. Two channels feed
//! it:
//!
//! - commands from the UI (and element events from the host), through a
//!   bounded channel owned by [`PlayerHandle`]
//! - wake-ups from [`TokioScheduler`]: timer ticks, transition delays,
//!   deferred queue turns and settled engagements
//!
//! Pending wake-ups are handled before the next command is read, so a drain
//! turn scheduled by one command completes before the following command is
//! applied.
//!
//! After every message the service publishes a [`PlaybackSnapshot`] on a
//! `watch` channel when it differs from the previous one.

use super::controller::TransportController;
use super::settings::PlaybackSettings;
use super::snapshot::PlaybackSnapshot;
use crate::application::port::{
    Engagement, MediaElement, PlaylistProvider, Scheduler, TimerGuard, Token, Wakeup,
};
use crate::domain::playback::Volume;
use crate::error::{Error, Result};
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Capacity of the command channel.
const COMMAND_CAPACITY: usize = 64;

/// Messages accepted by the player service.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    PlayPause,
    Play,
    Pause,
    Stop,
    Seek(f64),
    Next,
    Prev,
    Select(usize),
    SetVolume(f32),
    ToggleMute,
    RequestFullscreen,
    /// The application changed the playlist selection itself.
    SyncCurrentMedia,
    /// Host event: the video element knows its duration.
    MetadataLoaded(f64),
    /// Host event: the video element reached its end.
    MediaEnded,
    /// Stops the service and releases the element.
    Shutdown,
}

// =============================================================================
// Scheduler
// =============================================================================

/// [`Scheduler`] backed by tokio tasks and timers.
///
/// Each timer is a spawned task; its guard aborts the task. Must be used
/// from within a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    wakes: mpsc::UnboundedSender<Wakeup>,
}

impl TokioScheduler {
    pub fn new(wakes: mpsc::UnboundedSender<Wakeup>) -> Self {
        Self { wakes }
    }

    fn guard(handle: JoinHandle<()>) -> TimerGuard {
        TimerGuard::new(move || handle.abort())
    }
}

impl Scheduler for TokioScheduler {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }

    fn every(&mut self, period: Duration, wakeup: Wakeup) -> TimerGuard {
        let wakes = self.wakes.clone();
        Self::guard(tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(start, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if wakes.send(wakeup.clone()).is_err() {
                    break;
                }
            }
        }))
    }

    fn after(&mut self, delay: Duration, wakeup: Wakeup) -> TimerGuard {
        let wakes = self.wakes.clone();
        Self::guard(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = wakes.send(wakeup);
        }))
    }

    fn defer(&mut self, wakeup: Wakeup) {
        if self.wakes.send(wakeup).is_err() {
            debug!("wake-up dropped, service is shutting down");
        }
    }

    fn engage(&mut self, engagement: Engagement, token: Token) -> TimerGuard {
        let wakes = self.wakes.clone();
        Self::guard(tokio::spawn(async move {
            let result = engagement.await;
            let _ = wakes.send(Wakeup::Engaged { token, result });
        }))
    }
}

// =============================================================================
// Handle
// =============================================================================

/// Cloneable handle to a running player service.
#[derive(Debug, Clone)]
pub struct PlayerHandle {
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<PlaybackSnapshot>,
}

impl PlayerHandle {
    /// Sends a command to the service.
    pub async fn send(&self, command: Command) -> Result<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| Error::ServiceClosed)
    }

    /// Sends a command without waiting, failing if the channel is full.
    pub fn try_send(&self, command: Command) -> Result<()> {
        self.commands
            .try_send(command)
            .map_err(|_| Error::ServiceClosed)
    }

    /// Returns the latest published snapshot.
    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Returns a receiver notified on every snapshot change.
    pub fn subscribe(&self) -> watch::Receiver<PlaybackSnapshot> {
        self.snapshots.clone()
    }

    /// Waits until a published snapshot satisfies `predicate`.
    pub async fn wait_for(
        &self,
        predicate: impl FnMut(&PlaybackSnapshot) -> bool,
    ) -> Result<PlaybackSnapshot> {
        let mut receiver = self.snapshots.clone();
        let snapshot = receiver
            .wait_for(predicate)
            .await
            .map_err(|_| Error::ServiceClosed)?;
        Ok(snapshot.clone())
    }

    /// Asks the service to stop.
    pub async fn shutdown(&self) -> Result<()> {
        self.send(Command::Shutdown).await
    }
}

// =============================================================================
// Service
// =============================================================================

/// Starts a player service on the current tokio runtime.
///
/// The returned task finishes after [`Command::Shutdown`] or once every
/// handle is dropped.
pub fn spawn<P, E>(
    provider: P,
    element: E,
    settings: PlaybackSettings,
    volume: Volume,
) -> (PlayerHandle, JoinHandle<()>)
where
    P: PlaylistProvider + Send + 'static,
    E: MediaElement + Send + 'static,
{
    let (command_tx, command_rx) = mpsc::channel(COMMAND_CAPACITY);
    let (snapshot_tx, snapshot_rx) = watch::channel(PlaybackSnapshot::default());

    let task = tokio::spawn(async move {
        let (wake_tx, wake_rx) = mpsc::unbounded_channel();
        let scheduler = TokioScheduler::new(wake_tx);
        let controller = TransportController::new(provider, element, scheduler, settings, volume);
        run(controller, command_rx, wake_rx, snapshot_tx).await;
    });

    let handle = PlayerHandle {
        commands: command_tx,
        snapshots: snapshot_rx,
    };
    (handle, task)
}

async fn run<P, E>(
    mut controller: TransportController<P, E, TokioScheduler>,
    mut commands: mpsc::Receiver<Command>,
    mut wakes: mpsc::UnboundedReceiver<Wakeup>,
    snapshots: watch::Sender<PlaybackSnapshot>,
) where
    P: PlaylistProvider,
    E: MediaElement,
{
    info!(
        items = controller.provider().media_list().len(),
        "player service started"
    );
    publish(&controller, &snapshots);

    loop {
        tokio::select! {
            biased;

            Some(wakeup) = wakes.recv() => controller.wake(wakeup),
            command = commands.recv() => match command {
                Some(Command::Shutdown) | None => break,
                Some(command) => apply(&mut controller, command),
            },
        }
        publish(&controller, &snapshots);
    }

    info!("player service stopped");
}

fn apply<P, E, S>(controller: &mut TransportController<P, E, S>, command: Command)
where
    P: PlaylistProvider,
    E: MediaElement,
    S: Scheduler,
{
    debug!(?command, "command received");
    match command {
        Command::PlayPause => controller.play_pause(),
        Command::Play => controller.play(),
        Command::Pause => controller.pause(),
        Command::Stop => controller.stop(),
        Command::Seek(secs) => controller.seek(secs),
        Command::Next => controller.next(),
        Command::Prev => controller.prev(),
        Command::Select(index) => controller.select(index),
        Command::SetVolume(volume) => controller.set_volume(volume),
        Command::ToggleMute => controller.toggle_mute(),
        Command::RequestFullscreen => match controller.request_fullscreen() {
            Ok(variant) => debug!(?variant, "fullscreen entered"),
            Err(error) => warn!(%error, "fullscreen request failed"),
        },
        Command::SyncCurrentMedia => controller.sync_current_media(),
        Command::MetadataLoaded(duration) => controller.on_metadata_loaded(duration),
        Command::MediaEnded => controller.on_media_ended(),
        Command::Shutdown => {}
    }
}

fn publish<P, E, S>(
    controller: &TransportController<P, E, S>,
    snapshots: &watch::Sender<PlaybackSnapshot>,
) where
    P: PlaylistProvider,
    E: MediaElement,
    S: Scheduler,
{
    let next = controller.snapshot();
    snapshots.send_if_modified(|current| {
        if *current == next {
            false
        } else {
            *current = next;
            true
        }
    });
}

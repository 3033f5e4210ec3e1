// SPDX-License-Identifier: MPL-2.0
//! Transport controller: the unified playback state machine.
//!
//! One controller reconciles three kinds of playback unit behind a single
//! set of transport controls:
//!
//! - standalone images, timed by the synthetic [`PlaybackClock`]
//! - standalone videos, driven by the native [`MediaElement`]
//! - image sequences (the trailing window of the playlist), timed as one
//!   continuous timeline whose members are shown one after the other
//!
//! All playlist changes go through the [`NavigationQueue`]. The controller
//! never writes the provider's selection outside a drain step, and it reacts
//! to every selection change in the same way, whether it came from the queue
//! or from the application (`sync_current_media`).
//!
//! Every timer and every pending engagement is owned through a
//! [`TimerGuard`]. Replacing or clearing a guard cancels the work; wake-ups
//! that were already delivered carry a [`Token`] that must match the one the
//! controller currently expects.
//!
//! # States
//!
//! ```text
//!            play            pause
//! Stopped ─────────▶ Playing ──────▶ Paused
//!    ▲                  │  ▲            │
//!    │      stop / end  │  └── play ────┘
//!    └──────────────────┘
//! ```
//!
//! For videos, `play` first waits for the native engagement; the controller
//! only enters `Playing` once the host confirms it.

use super::audio::AudioState;
use super::clock::PlaybackClock;
use super::settings::PlaybackSettings;
use super::snapshot::PlaybackSnapshot;
use crate::application::navigation::{self, Direction, NavigationQueue};
use crate::application::port::{
    FullscreenVariant, MediaElement, PlaylistProvider, Scheduler, TimerGuard, Token, TokenSource,
    Wakeup,
};
use crate::domain::error::{EngagementError, FullscreenError};
use crate::domain::playback::{MediaUnitKind, SequenceWindow, Timeline, TransportState, Volume};
use tracing::{debug, info, warn};

/// Work the controller is waiting for, cancelled on drop.
#[derive(Debug)]
struct Pending {
    token: Token,
    _guard: TimerGuard,
}

/// Drives playback of one playlist.
pub struct TransportController<P: PlaylistProvider, E: MediaElement, S: Scheduler> {
    provider: P,
    element: E,
    scheduler: S,
    settings: PlaybackSettings,
    tokens: TokenSource,

    transport: TransportState,
    audio: AudioState,
    timeline: Timeline,
    current_index: Option<usize>,
    unit: Option<MediaUnitKind>,

    /// Most recently requested playlist index.
    cursor: Option<usize>,
    queue: NavigationQueue,

    clock: PlaybackClock,
    engagement: Option<Pending>,
    transition: Option<Pending>,
    failed_engagements: usize,
}

impl<P: PlaylistProvider, E: MediaElement, S: Scheduler> TransportController<P, E, S> {
    /// Creates a controller and mounts it on the provider's playlist.
    ///
    /// If the provider has no selection yet, the first item is queued; the
    /// selection is applied on the scheduler's next turn.
    pub fn new(
        provider: P,
        element: E,
        scheduler: S,
        settings: PlaybackSettings,
        volume: Volume,
    ) -> Self {
        let mut controller = Self {
            provider,
            element,
            scheduler,
            settings,
            tokens: TokenSource::default(),
            transport: TransportState::Stopped,
            audio: AudioState::new(volume),
            timeline: Timeline::unknown(),
            current_index: None,
            unit: None,
            cursor: None,
            queue: NavigationQueue::new(),
            clock: PlaybackClock::new(),
            engagement: None,
            transition: None,
            failed_engagements: 0,
        };
        controller.mount();
        controller
    }

    fn mount(&mut self) {
        if self.provider.media_list().is_empty() {
            debug!("playlist is empty, nothing to mount");
        } else if self.provider.current_media().is_some() {
            self.observe(None);
        } else {
            self.request(0);
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Mutable access to the provider.
    ///
    /// Selection changes made here are not seen until
    /// [`sync_current_media`](Self::sync_current_media) is called.
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the scheduler, for hosts that pump it themselves.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn settings(&self) -> &PlaybackSettings {
        &self.settings
    }

    pub fn transport(&self) -> TransportState {
        self.transport
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn unit(&self) -> Option<MediaUnitKind> {
        self.unit
    }

    /// Returns true while a native play request is pending.
    pub fn is_engaging(&self) -> bool {
        self.engagement.is_some()
    }

    /// Returns true between a sequence boundary crossing and the member
    /// switch being queued.
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Captures the current state for display.
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot::capture(
            self.transport,
            &self.timeline,
            self.audio.volume(),
            self.audio.is_muted(),
            self.current_index,
            self.unit,
            self.is_transitioning(),
        )
    }

    // =========================================================================
    // Transport commands
    // =========================================================================

    /// Plays when stopped or paused, pauses otherwise.
    pub fn play_pause(&mut self) {
        if self.transport.is_playing() || self.is_engaging() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Starts the driver of the current unit.
    pub fn play(&mut self) {
        self.failed_engagements = 0;
        self.start();
    }

    fn start(&mut self) {
        let Some(unit) = self.unit else {
            return;
        };
        if self.transport.is_playing() || self.is_engaging() {
            return;
        }

        match unit {
            MediaUnitKind::StandaloneImage | MediaUnitKind::SequenceMember { .. } => {
                if self.timeline.is_complete() {
                    self.complete_unit(unit);
                    return;
                }
                self.failed_engagements = 0;
                self.transport = TransportState::Playing;
                self.start_image_clock();
                debug!(elapsed = self.timeline.elapsed(), "image clock started");
            }
            MediaUnitKind::StandaloneVideo => {
                self.audio.apply_to(&mut self.element);
                let token = self.tokens.issue();
                let engagement = self.element.play();
                let guard = self.scheduler.engage(engagement, token);
                self.engagement = Some(Pending {
                    token,
                    _guard: guard,
                });
                debug!(?token, "native playback requested");
            }
            MediaUnitKind::Unsupported => {
                info!(index = ?self.current_index, "current media cannot be played");
            }
        }
    }

    /// Pauses playback, keeping the position.
    ///
    /// A pending native play request is abandoned.
    pub fn pause(&mut self) {
        if self.engagement.take().is_some() {
            self.element.pause();
            self.transport = TransportState::Paused;
            debug!("pending playback request cancelled");
            return;
        }
        if !self.transport.is_playing() {
            return;
        }

        self.refresh_position();
        // Reaching the end while pausing already advanced.
        if !self.transport.is_playing() {
            return;
        }
        self.clock.stop();
        if self.unit.is_some_and(MediaUnitKind::is_video) {
            self.element.pause();
        }
        self.transport = TransportState::Paused;
        debug!(elapsed = self.timeline.elapsed(), "paused");
    }

    /// Stops playback and rewinds the unit to its start.
    pub fn stop(&mut self) {
        let Some(unit) = self.unit else {
            return;
        };
        self.halt_driver();
        if unit.is_video() {
            self.element.pause();
            self.element.set_current_time(0.0);
        }
        self.timeline.rewind();
        self.transport = TransportState::Stopped;
        if let Some(window) = unit.window() {
            self.sync_member(window);
        }
        debug!("stopped");
    }

    /// Moves to `secs` within the current unit, clamped into its duration.
    pub fn seek(&mut self, secs: f64) {
        let Some(unit) = self.unit else {
            return;
        };
        let elapsed = self.timeline.seek(secs);
        match unit {
            MediaUnitKind::StandaloneVideo => self.element.set_current_time(elapsed),
            MediaUnitKind::SequenceMember { window, .. } => self.sync_member(window),
            MediaUnitKind::StandaloneImage | MediaUnitKind::Unsupported => {}
        }
        if self.transport.is_playing() && unit.is_timed_image() {
            self.start_image_clock();
        }
        debug!(requested = secs, elapsed, "seek");
    }

    /// Queues the item after the most recently requested one.
    pub fn next(&mut self) {
        self.failed_engagements = 0;
        self.advance(Direction::Next);
    }

    /// Queues the item before the most recently requested one.
    pub fn prev(&mut self) {
        self.failed_engagements = 0;
        self.advance(Direction::Previous);
    }

    /// Queues the playlist item at `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        let len = self.provider.media_list().len();
        if index >= len {
            debug!(index, len, "selection out of range ignored");
            return;
        }
        self.failed_engagements = 0;
        self.request(index);
    }

    /// Re-reads the provider's selection after the application changed it.
    pub fn sync_current_media(&mut self) {
        self.observe(None);
    }

    // =========================================================================
    // Audio and fullscreen
    // =========================================================================

    /// Sets the volume, clamped into `[0, 1]`; zero mutes.
    pub fn set_volume(&mut self, volume: f32) {
        self.audio.set_volume(Volume::new(volume));
        if self.unit.is_some_and(MediaUnitKind::is_video) {
            self.audio.apply_to(&mut self.element);
        }
        debug!(
            volume = self.audio.volume().value(),
            muted = self.audio.is_muted(),
            "volume changed"
        );
    }

    /// Flips the muted flag.
    pub fn toggle_mute(&mut self) {
        let muted = self.audio.toggle_mute();
        if self.unit.is_some_and(MediaUnitKind::is_video) {
            self.element.set_muted(muted);
        }
        debug!(muted, "mute toggled");
    }

    /// Puts the video element in fullscreen, trying each entry point in turn.
    pub fn request_fullscreen(&mut self) -> Result<FullscreenVariant, FullscreenError> {
        if !self.unit.is_some_and(MediaUnitKind::is_video) {
            return Err(FullscreenError::NoTarget);
        }
        FullscreenVariant::ALL
            .into_iter()
            .find(|&variant| self.element.request_fullscreen(variant))
            .ok_or(FullscreenError::Unavailable)
    }

    // =========================================================================
    // Element events
    // =========================================================================

    /// The native element reported the video duration.
    pub fn on_metadata_loaded(&mut self, duration_secs: f64) {
        if !self.unit.is_some_and(MediaUnitKind::is_video) {
            return;
        }
        self.timeline.set_duration(duration_secs);
        debug!(duration_secs, "video metadata loaded");
    }

    /// The native element played to the end.
    pub fn on_media_ended(&mut self) {
        let Some(unit) = self.unit.filter(|unit| unit.is_video()) else {
            return;
        };
        let duration = self.timeline.duration();
        self.timeline.seek(duration);
        self.complete_unit(unit);
    }

    // =========================================================================
    // Scheduler wake-ups
    // =========================================================================

    /// Handles a wake-up from the scheduler.
    pub fn wake(&mut self, wakeup: Wakeup) {
        match wakeup {
            Wakeup::Tick(token) => self.on_tick(token),
            Wakeup::TransitionSettled(token) => self.on_transition_settled(token),
            Wakeup::DrainQueue => self.drain_step(),
            Wakeup::Engaged { token, result } => self.on_engaged(token, result),
        }
    }

    fn on_tick(&mut self, token: Token) {
        if !self.clock.accepts(token) {
            debug!(?token, "stale tick ignored");
            return;
        }
        self.refresh_position();
    }

    fn on_transition_settled(&mut self, token: Token) {
        if self.transition.as_ref().map(|pending| pending.token) != Some(token) {
            debug!(?token, "stale transition ignored");
            return;
        }
        self.transition = None;
        let Some(window) = self.unit.and_then(MediaUnitKind::window) else {
            return;
        };
        let target = self.member_at_position(window);
        if self.current_index != Some(target) {
            self.request(target);
        }
    }

    fn on_engaged(&mut self, token: Token, result: Result<(), EngagementError>) {
        if self.engagement.as_ref().map(|pending| pending.token) != Some(token) {
            debug!(?token, "stale engagement ignored");
            return;
        }
        self.engagement = None;

        match result {
            Ok(()) => {
                self.failed_engagements = 0;
                self.transport = TransportState::Playing;
                let token = self.tokens.issue();
                self.clock.start_sampling(
                    &mut self.scheduler,
                    token,
                    self.settings.video_sample_interval.duration(),
                );
                debug!("native playback started");
            }
            Err(error) => {
                warn!(index = ?self.current_index, %error, "native playback rejected, skipping");
                self.failed_engagements += 1;
                if self.failed_engagements >= self.provider.media_list().len() {
                    warn!(
                        failures = self.failed_engagements,
                        "every item refused to play, no further skip"
                    );
                    return;
                }
                if let Some(from) = self.advance_anchor(MediaUnitKind::StandaloneVideo) {
                    self.advance_from(from, Direction::Next);
                }
            }
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    fn advance(&mut self, direction: Direction) {
        if let Some(from) = self.cursor.or(self.current_index) {
            self.advance_from(from, direction);
        }
    }

    fn advance_from(&mut self, from: usize, direction: Direction) {
        let list = self.provider.media_list();
        let window = SequenceWindow::trailing(list, self.settings.sequence_length);
        if let Some(target) = navigation::step(direction, from, list.len(), window) {
            self.request(target);
        }
    }

    /// Index an automatic advance steps from.
    ///
    /// A finished sequence continues after its last member; otherwise the
    /// most recent request wins so queued navigation is not undone.
    fn advance_anchor(&self, unit: MediaUnitKind) -> Option<usize> {
        match unit.window() {
            Some(window) if self.queue.is_empty() => Some(window.last()),
            _ => self.cursor.or(self.current_index),
        }
    }

    fn request(&mut self, target: usize) {
        self.cursor = Some(target);
        if self.queue.enqueue(target) {
            self.scheduler.defer(Wakeup::DrainQueue);
        }
        debug!(target, pending = self.queue.len(), "navigation queued");
    }

    fn drain_step(&mut self) {
        let Some(target) = self.queue.begin_step() else {
            return;
        };
        match self.provider.media_list().get(target).cloned() {
            Some(item) => {
                self.provider.set_current_media(item);
                self.observe(Some(target));
            }
            None => warn!(target, "navigation target out of range"),
        }
        if self.queue.end_step() {
            self.scheduler.defer(Wakeup::DrainQueue);
        }
    }

    /// Reacts to the provider's current selection.
    ///
    /// `hint` is the index just applied by the queue; it disambiguates
    /// playlists that contain the same item twice.
    fn observe(&mut self, hint: Option<usize>) {
        let resolved = {
            let list = self.provider.media_list();
            self.provider.current_media().and_then(|item| {
                let matches = |index: &usize| list.get(*index) == Some(item);
                let index = hint
                    .filter(matches)
                    .or_else(|| self.current_index.filter(matches))
                    .or_else(|| list.iter().position(|candidate| candidate == item));
                match index {
                    Some(index) => MediaUnitKind::resolve(list, index, self.settings.sequence_length)
                        .map(|unit| (index, unit, item.url.clone())),
                    None => {
                        warn!(url = %item.url, "current media is not in the playlist");
                        None
                    }
                }
            })
        };
        let Some((index, unit, url)) = resolved else {
            return;
        };

        if self.queue.is_empty() {
            self.cursor = Some(index);
        }
        let finished = self.timeline.is_complete();
        if self.current_index == Some(index) && !finished {
            debug!(index, "selection unchanged");
            return;
        }

        // A finished sequence restarts unless the member matches the position,
        // as after seeking to its end.
        match self.unit {
            Some(current)
                if current.shares_window_with(unit) && (!finished || self.shows_member(unit)) =>
            {
                self.move_within_sequence(index, unit);
            }
            _ => self.load_unit(index, unit, &url),
        }
    }

    // =========================================================================
    // Units
    // =========================================================================

    fn load_unit(&mut self, index: usize, unit: MediaUnitKind, url: &str) {
        self.release_unit();
        self.current_index = Some(index);
        self.unit = Some(unit);
        self.transport = TransportState::Stopped;

        let image_secs = self.settings.image_duration.secs();
        self.timeline = match unit {
            MediaUnitKind::StandaloneImage => Timeline::new(image_secs),
            MediaUnitKind::SequenceMember { window, offset } => {
                let mut timeline = Timeline::new(self.settings.sequence_secs(window.len()));
                timeline.seek(image_secs * offset as f64);
                timeline
            }
            MediaUnitKind::StandaloneVideo | MediaUnitKind::Unsupported => Timeline::unknown(),
        };

        if unit.is_video() {
            self.element.load(url);
            self.audio.apply_to(&mut self.element);
        }
        info!(index, url, kind = ?unit, "media changed");

        if self.settings.autoplay {
            self.start();
        }
    }

    fn move_within_sequence(&mut self, index: usize, unit: MediaUnitKind) {
        let MediaUnitKind::SequenceMember { window, offset } = unit else {
            return;
        };
        self.current_index = Some(index);
        self.unit = Some(unit);
        self.transition = None;

        let image_secs = self.settings.image_duration.secs();
        if self.timeline.segment(image_secs, window.len()) != offset {
            self.timeline.seek(image_secs * offset as f64);
            if self.transport.is_playing() {
                self.start_image_clock();
            }
        }
        info!(index, offset, "sequence member shown");
    }

    /// Stops the driver and drops pending work of the current unit.
    fn halt_driver(&mut self) {
        self.clock.stop();
        self.engagement = None;
        self.transition = None;
    }

    fn release_unit(&mut self) {
        self.halt_driver();
        if self.unit.is_some_and(MediaUnitKind::is_video) {
            self.element.pause();
            self.element.unload();
        }
    }

    fn start_image_clock(&mut self) {
        let token = self.tokens.issue();
        self.clock.start_synthetic(
            &mut self.scheduler,
            token,
            self.settings.tick_interval.duration(),
            self.timeline.elapsed(),
        );
    }

    /// Pulls the position from the driver and reacts to boundaries.
    fn refresh_position(&mut self) {
        let Some(unit) = self.unit else {
            return;
        };
        if unit.is_video() {
            let native = self.element.current_time();
            self.timeline.seek(native);
            return;
        }

        if let Some(elapsed) = self.clock.synthetic_elapsed(self.scheduler.now()) {
            self.timeline.seek(elapsed);
        }
        if self.timeline.is_complete() {
            self.complete_unit(unit);
        } else if let Some(window) = unit.window() {
            self.begin_transition(window);
        }
    }

    fn complete_unit(&mut self, unit: MediaUnitKind) {
        self.halt_driver();
        self.transport = TransportState::Stopped;
        info!(index = ?self.current_index, "media finished");
        if let Some(from) = self.advance_anchor(unit) {
            self.advance_from(from, Direction::Next);
        }
    }

    fn member_at_position(&self, window: SequenceWindow) -> usize {
        let segment = self
            .timeline
            .segment(self.settings.image_duration.secs(), window.len());
        window.index_at(segment)
    }

    fn shows_member(&self, unit: MediaUnitKind) -> bool {
        match unit {
            MediaUnitKind::SequenceMember { window, offset } => {
                self.timeline
                    .segment(self.settings.image_duration.secs(), window.len())
                    == offset
            }
            _ => false,
        }
    }

    /// Raises the transition flag when the position left the shown member.
    fn begin_transition(&mut self, window: SequenceWindow) {
        if self.transition.is_some() {
            return;
        }
        let target = self.member_at_position(window);
        if self.current_index == Some(target) || self.cursor == Some(target) {
            return;
        }
        let token = self.tokens.issue();
        let guard = self
            .scheduler
            .after(self.settings.transition_debounce, Wakeup::TransitionSettled(token));
        self.transition = Some(Pending {
            token,
            _guard: guard,
        });
        debug!(target, "sequence transition started");
    }

    /// Queues the member matching the position, without a transition delay.
    fn sync_member(&mut self, window: SequenceWindow) {
        let target = self.member_at_position(window);
        if self.current_index != Some(target) {
            self.transition = None;
            self.request(target);
        }
    }
}

impl<P: PlaylistProvider, E: MediaElement, S: Scheduler> Drop for TransportController<P, E, S> {
    fn drop(&mut self) {
        self.release_unit();
    }
}

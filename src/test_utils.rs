// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and a manually driven host.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.
//!
//! It also provides deterministic stand-ins for the three ports:
//! [`ManualScheduler`] (virtual time, explicit turns), [`FakeElement`]
//! (records every call) and [`RecordingPlaylist`] (records every selection).

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

use crate::application::port::{
    Engagement, FullscreenVariant, MediaElement, PlaylistProvider, Scheduler, TimerGuard, Token,
    Wakeup,
};
use crate::domain::error::EngagementError;
use crate::domain::media::MediaItem;
use crate::player::TransportController;
use futures_util::FutureExt;
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

// =============================================================================
// Scheduler
// =============================================================================

#[derive(Debug)]
struct ManualTimer {
    due: Instant,
    period: Option<Duration>,
    wakeup: Wakeup,
}

#[derive(Debug)]
struct ManualState {
    now: Instant,
    next_id: u64,
    timers: BTreeMap<u64, ManualTimer>,
    deferred: VecDeque<Wakeup>,
}

/// Scheduler with virtual time.
///
/// Clones share state, so a test can keep a handle while the controller
/// owns another.
#[derive(Debug, Clone)]
pub struct ManualScheduler {
    state: Arc<Mutex<ManualState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(ManualState {
                now: Instant::now(),
                next_id: 0,
                timers: BTreeMap::new(),
                deferred: VecDeque::new(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ManualState> {
        self.state.lock().expect("manual scheduler poisoned")
    }

    /// Moves virtual time forward without firing anything.
    pub fn advance_time(&self, by: Duration) {
        self.lock().now += by;
    }

    /// Number of armed timers.
    pub fn active_timers(&self) -> usize {
        self.lock().timers.len()
    }

    /// Pops the next wake-up due no later than `until`.
    ///
    /// Deferred turns come first; timers fire in due order and virtual time
    /// jumps to each due instant.
    pub fn pop_due(&self, until: Instant) -> Option<Wakeup> {
        let mut state = self.lock();
        if let Some(wakeup) = state.deferred.pop_front() {
            return Some(wakeup);
        }
        let (&id, _) = state
            .timers
            .iter()
            .filter(|(_, timer)| timer.due <= until)
            .min_by_key(|(id, timer)| (timer.due, **id))?;
        let timer = state.timers.remove(&id)?;
        state.now = state.now.max(timer.due);
        let wakeup = timer.wakeup.clone();
        if let Some(period) = timer.period {
            state.timers.insert(
                id,
                ManualTimer {
                    due: timer.due + period,
                    ..timer
                },
            );
        }
        Some(wakeup)
    }

    fn arm(&mut self, delay: Duration, period: Option<Duration>, wakeup: Wakeup) -> TimerGuard {
        let id = {
            let mut state = self.lock();
            state.next_id += 1;
            let id = state.next_id;
            let due = state.now + delay;
            state.timers.insert(
                id,
                ManualTimer {
                    due,
                    period,
                    wakeup,
                },
            );
            id
        };
        let shared = Arc::clone(&self.state);
        TimerGuard::new(move || {
            if let Ok(mut state) = shared.lock() {
                state.timers.remove(&id);
            }
        })
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> Instant {
        self.lock().now
    }

    fn every(&mut self, period: Duration, wakeup: Wakeup) -> TimerGuard {
        self.arm(period, Some(period), wakeup)
    }

    fn after(&mut self, delay: Duration, wakeup: Wakeup) -> TimerGuard {
        self.arm(delay, None, wakeup)
    }

    fn defer(&mut self, wakeup: Wakeup) {
        self.lock().deferred.push_back(wakeup);
    }

    fn engage(&mut self, engagement: Engagement, token: Token) -> TimerGuard {
        // Fake engagements are ready immediately; the result arrives on the
        // next turn like a resolved promise would.
        if let Some(result) = engagement.now_or_never() {
            self.defer(Wakeup::Engaged { token, result });
        }
        TimerGuard::inert()
    }
}

/// Delivers every wake-up due within `by`, then settles time at the end.
pub fn advance<P, E>(controller: &mut TransportController<P, E, ManualScheduler>, by: Duration)
where
    P: PlaylistProvider,
    E: MediaElement,
{
    let until = controller.scheduler().now() + by;
    while let Some(wakeup) = controller.scheduler().pop_due(until) {
        controller.wake(wakeup);
    }
    let scheduler = controller.scheduler();
    let now = scheduler.now();
    if until > now {
        scheduler.advance_time(until - now);
    }
}

/// Runs every pending turn without moving time.
pub fn settle<P, E>(controller: &mut TransportController<P, E, ManualScheduler>)
where
    P: PlaylistProvider,
    E: MediaElement,
{
    advance(controller, Duration::ZERO);
}

// =============================================================================
// Element
// =============================================================================

/// A call received by [`FakeElement`].
#[derive(Debug, Clone, PartialEq)]
pub enum ElementCall {
    Load(String),
    Unload,
    Play,
    Pause,
    SetCurrentTime(f64),
    SetVolume(f32),
    SetMuted(bool),
    Fullscreen(FullscreenVariant),
}

#[derive(Debug)]
struct FakeState {
    calls: Vec<ElementCall>,
    current_time: f64,
    play_result: Result<(), EngagementError>,
    fullscreen: Vec<FullscreenVariant>,
}

/// Element that records calls. Clones share state.
#[derive(Debug, Clone)]
pub struct FakeElement {
    state: Arc<Mutex<FakeState>>,
}

impl FakeElement {
    /// Element whose play requests succeed and which supports every
    /// fullscreen variant.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeState {
                calls: Vec::new(),
                current_time: 0.0,
                play_result: Ok(()),
                fullscreen: FullscreenVariant::ALL.to_vec(),
            })),
        }
    }

    /// Element whose play requests fail with `error`.
    pub fn rejecting(error: EngagementError) -> Self {
        let element = Self::new();
        element.lock().play_result = Err(error);
        element
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().expect("fake element poisoned")
    }

    pub fn calls(&self) -> Vec<ElementCall> {
        self.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    /// Simulates native playback moving to `secs`.
    pub fn set_native_time(&self, secs: f64) {
        self.lock().current_time = secs;
    }

    pub fn set_fullscreen_support(&self, variants: &[FullscreenVariant]) {
        self.lock().fullscreen = variants.to_vec();
    }

    fn record(&self, call: ElementCall) {
        self.lock().calls.push(call);
    }
}

impl Default for FakeElement {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaElement for FakeElement {
    fn load(&mut self, url: &str) {
        self.record(ElementCall::Load(url.to_string()));
        self.lock().current_time = 0.0;
    }

    fn unload(&mut self) {
        self.record(ElementCall::Unload);
    }

    fn play(&mut self) -> Engagement {
        self.record(ElementCall::Play);
        let result = self.lock().play_result.clone();
        futures_util::future::ready(result).boxed()
    }

    fn pause(&mut self) {
        self.record(ElementCall::Pause);
    }

    fn current_time(&self) -> f64 {
        self.lock().current_time
    }

    fn set_current_time(&mut self, secs: f64) {
        self.record(ElementCall::SetCurrentTime(secs));
        self.lock().current_time = secs;
    }

    fn set_volume(&mut self, volume: f32) {
        self.record(ElementCall::SetVolume(volume));
    }

    fn set_muted(&mut self, muted: bool) {
        self.record(ElementCall::SetMuted(muted));
    }

    fn request_fullscreen(&mut self, variant: FullscreenVariant) -> bool {
        self.record(ElementCall::Fullscreen(variant));
        self.lock().fullscreen.contains(&variant)
    }
}

// =============================================================================
// Playlist
// =============================================================================

/// Playlist provider remembering every selection it received.
#[derive(Debug, Clone, Default)]
pub struct RecordingPlaylist {
    items: Vec<MediaItem>,
    current: Option<MediaItem>,
    selections: Vec<String>,
}

impl RecordingPlaylist {
    pub fn new(urls: &[&str]) -> Self {
        Self {
            items: urls.iter().map(|url| MediaItem::new(*url)).collect(),
            current: None,
            selections: Vec::new(),
        }
    }

    /// Starts with `index` already selected, as if chosen by the application.
    pub fn with_current(mut self, index: usize) -> Self {
        self.current = self.items.get(index).cloned();
        self
    }

    /// Changes the selection without going through the player.
    pub fn select_externally(&mut self, index: usize) {
        self.current = self.items.get(index).cloned();
    }

    /// URLs passed to the setter, in call order.
    pub fn selections(&self) -> &[String] {
        &self.selections
    }
}

impl PlaylistProvider for RecordingPlaylist {
    fn media_list(&self) -> &[MediaItem] {
        &self.items
    }

    fn current_media(&self) -> Option<&MediaItem> {
        self.current.as_ref()
    }

    fn set_current_media(&mut self, item: MediaItem) {
        self.selections.push(item.url.clone());
        self.current = Some(item);
    }
}

//! Cosmetic index state for the hero slider, the reviews slider and the
//! property gallery modal.

use std::time::{Duration, Instant};

pub const HERO_INTERVAL: Duration = Duration::from_millis(4000);
pub const REVIEWS_INTERVAL: Duration = Duration::from_millis(5000);
/// Horizontal travel, in pixels, before a touch counts as a swipe.
pub const SWIPE_THRESHOLD: f32 = 40.0;

/// `(index + delta + len) % len`, for any delta.
pub fn wrap(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (index as isize + delta).rem_euclid(len) as usize
}

/// Auto-advancing slider on a fixed cadence.
#[derive(Debug, Clone)]
pub struct Carousel {
    index: usize,
    len: usize,
    interval: Duration,
    next_tick: Instant,
}

impl Carousel {
    pub fn new(len: usize, interval: Duration, now: Instant) -> Self {
        Self {
            index: 0,
            len,
            interval,
            next_tick: now + interval,
        }
    }

    pub fn hero(len: usize, now: Instant) -> Self {
        Self::new(len, HERO_INTERVAL, now)
    }

    pub fn reviews(len: usize, now: Instant) -> Self {
        Self::new(len, REVIEWS_INTERVAL, now)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The slide animating out.
    pub fn previous_index(&self) -> usize {
        wrap(self.index, -1, self.len)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance once for every interval boundary crossed since the last call.
    /// Returns how many steps were taken.
    pub fn tick(&mut self, now: Instant) -> usize {
        if self.interval.is_zero() {
            return 0;
        }
        let mut steps = 0;
        while now >= self.next_tick {
            self.index = wrap(self.index, 1, self.len);
            self.next_tick += self.interval;
            steps += 1;
        }
        steps
    }

    /// Jump to a slide. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn step(&mut self, delta: isize) {
        self.index = wrap(self.index, delta, self.len);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    Video { src: String, title: String },
    Gallery { images: Vec<String>, index: usize, title: String },
}

/// Property media modal: a video or an image gallery, or nothing.
#[derive(Debug, Default, Clone)]
pub struct Gallery {
    modal: Option<Modal>,
    touch_start: Option<f32>,
    touch_end: Option<f32>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_some()
    }

    pub fn current_index(&self) -> Option<usize> {
        match &self.modal {
            Some(Modal::Gallery { index, .. }) => Some(*index),
            _ => None,
        }
    }

    pub fn open_video(&mut self, src: impl Into<String>, title: impl Into<String>) {
        self.modal = Some(Modal::Video { src: src.into(), title: title.into() });
    }

    pub fn open_gallery(&mut self, images: Vec<String>, start: usize, title: impl Into<String>) {
        let index = if start < images.len() { start } else { 0 };
        self.modal = Some(Modal::Gallery { images, index, title: title.into() });
    }

    pub fn close(&mut self) {
        self.modal = None;
        self.touch_start = None;
        self.touch_end = None;
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn prev(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: isize) {
        if let Some(Modal::Gallery { images, index, .. }) = &mut self.modal {
            *index = wrap(*index, delta, images.len());
        }
    }

    pub fn on_key(&mut self, key: Key) {
        if !self.is_open() {
            return;
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowRight => self.next(),
            Key::ArrowLeft => self.prev(),
            Key::Other => {}
        }
    }

    pub fn on_touch_start(&mut self, x: f32) {
        self.touch_start = Some(x);
    }

    pub fn on_touch_move(&mut self, x: f32) {
        self.touch_end = Some(x);
    }

    /// Right swipe goes back, left swipe goes forward.
    pub fn on_touch_end(&mut self) {
        let (Some(start), Some(end)) = (self.touch_start, self.touch_end) else {
            return;
        };
        let delta = end - start;
        if delta > SWIPE_THRESHOLD {
            self.prev();
        }
        if delta < -SWIPE_THRESHOLD {
            self.next();
        }
        self.touch_start = None;
        self.touch_end = None;
    }
}

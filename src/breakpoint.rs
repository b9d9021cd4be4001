//! Viewport breakpoints and the signals derived from them.
//!
//! Breakpoint widths follow the Material Design layout grid: a handset is a
//! viewport narrower than 600 in portrait or 960 in landscape.

use std::collections::HashMap;

use derivative::Derivative;
use futures::{stream, Stream};
use serde::{Deserialize, Serialize};
use strum::Display;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Viewport {
    #[derivative(Default(value = "1280"))]
    pub width: u32,
    #[derivative(Default(value = "800"))]
    pub height: u32,
}

impl Viewport {
    pub fn orientation(&self) -> Orientation {
        if self.height >= self.width { Orientation::Portrait } else { Orientation::Landscape }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Breakpoint {
    Handset,
    Tablet,
    Web,
}

impl Breakpoint {
    pub fn matches(self, viewport: &Viewport) -> bool {
        let width = viewport.width;
        match (self, viewport.orientation()) {
            (Self::Handset, Orientation::Portrait) => width < 600,
            (Self::Handset, Orientation::Landscape) => width < 960,
            (Self::Tablet, Orientation::Portrait) => (600..840).contains(&width),
            (Self::Tablet, Orientation::Landscape) => (960..1280).contains(&width),
            (Self::Web, Orientation::Portrait) => width >= 840,
            (Self::Web, Orientation::Landscape) => width >= 1280,
        }
    }
}

/// Read side of a value published by a [`BreakpointObserver`].
///
/// Every handle shares the same underlying value. A handle created after the
/// value was published still sees it, but only values published later count
/// as changes for it.
#[derive(Debug)]
pub struct Signal<T> {
    receiver: watch::Receiver<T>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        let mut receiver = self.receiver.clone();
        drop(receiver.borrow_and_update());
        Self { receiver }
    }
}

impl<T: Clone> Signal<T> {
    pub fn get(&self) -> T {
        self.receiver.borrow().clone()
    }

    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }

    /// Waits for the next published value. Returns `None` once the observer is gone.
    pub async fn changed(&mut self) -> Option<T> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }

    /// The current value followed by every later one.
    pub fn into_stream(self) -> impl Stream<Item = T> {
        stream::unfold((self.receiver, true), |(mut receiver, first)| async move {
            if !first {
                receiver.changed().await.ok()?;
            }
            let value = receiver.borrow_and_update().clone();
            Some((value, (receiver, false)))
        })
    }
}

#[derive(Debug)]
pub struct BreakpointObserver {
    viewport: Viewport,
    observed: HashMap<Breakpoint, watch::Sender<bool>>,
}

impl BreakpointObserver {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, observed: HashMap::default() }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn observe(&mut self, breakpoint: Breakpoint) -> Signal<bool> {
        let viewport = self.viewport;
        let sender = self
            .observed
            .entry(breakpoint)
            .or_insert_with(|| watch::Sender::new(breakpoint.matches(&viewport)));
        Signal { receiver: sender.subscribe() }
    }

    /// Recomputes every observed breakpoint once. Subscribers are only
    /// notified when a match actually flips.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        for (breakpoint, sender) in &self.observed {
            let matched = breakpoint.matches(&viewport);
            let modified = sender.send_if_modified(|current| {
                let modified = *current != matched;
                *current = matched;
                modified
            });
            if modified {
                tracing::debug!(%breakpoint, matched, width = viewport.width, "breakpoint changed");
            }
        }
    }
}

//! Infinite scroll window over a contiguous run of months.
//!
//! The window owns an arena of month slots: a first-of-month anchor plus
//! the measured extent of that month in the scrollable area, when it is
//! rendered. Anchors are contiguous and strictly increasing by one month;
//! the embedding UI feeds scroll positions and layout measurements in and
//! gets growth requests, corrected offsets, and the active month back.
//!
//! Scroll handling is an explicit two-phase protocol rather than an
//! implicit re-render side effect:
//!
//! 1. [`MonthWindow::on_scroll`] may answer `Prepended`/`Appended`; the
//!    caller applies the data change and re-renders.
//! 2. After a prepend the window is in a measuring phase; the caller
//!    reports the new content height through [`MonthWindow::measured`]
//!    and receives the corrected scroll offset that keeps the visible
//!    month stationary.
//!
//! Active-month detection is deferred to [`MonthWindow::settle`], which a
//! caller invokes once a scroll burst has quieted; the latest scroll
//! event supersedes any earlier pending recompute. Slots far outside a
//! retention radius of the active month have their rendered extents
//! released and the anchor run itself is trimmed, so long sessions do
//! not accumulate months without bound. Evicted months stay
//! reconstructible from [`crate::calendar::month_matrix`].

use chrono::{Datelike, NaiveDate};
use std::collections::VecDeque;

use crate::calendar::{first_of_month, months_between, shift_month};

/// Tuning knobs for the window. Distances are in the same units as the
/// scroll offsets the caller reports (pixels, rows, anything consistent).
#[derive(Debug, Clone, Copy)]
pub struct WindowConfig {
    /// Months kept on each side of the current month at startup.
    pub buffer: u32,
    /// Months added per growth step.
    pub batch: u32,
    /// Distance from either content edge that triggers growth.
    pub edge_threshold: f64,
    /// Fixed header height subtracted when aligning a month under it.
    pub header_offset: f64,
    /// Months away from the active month a slot may keep its extent.
    pub retention_radius: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            buffer: 3,
            batch: 3,
            edge_threshold: 300.0,
            header_offset: 170.0,
            retention_radius: 12,
        }
    }
}

/// The caller's view of the scrollable area at one scroll event.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub scroll_top: f64,
    pub height: f64,
    pub content_height: f64,
}

impl Viewport {
    fn midpoint(&self) -> f64 {
        self.scroll_top + self.height / 2.0
    }
}

/// Measured position and size of one rendered month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub height: f64,
}

impl Extent {
    fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

#[derive(Debug)]
struct MonthSlot {
    anchor: NaiveDate,
    extent: Option<Extent>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    AwaitingMeasure {
        prior_height: f64,
        prior_scroll: f64,
    },
}

/// What a scroll event did to the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Growth {
    Unchanged,
    Prepended(u32),
    Appended(u32),
}

/// Resolution of a month/year picker request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpTarget {
    /// Closest anchor in the window; may differ from the requested month
    /// when the window does not extend that far.
    pub anchor: NaiveDate,
    /// Scroll offset aligning the anchor under the header, when the
    /// month has a measured extent.
    pub scroll_top: Option<f64>,
    pub exact: bool,
}

pub struct MonthWindow {
    slots: VecDeque<MonthSlot>,
    active: NaiveDate,
    phase: Phase,
    pending_settle: bool,
    cfg: WindowConfig,
}

impl MonthWindow {
    /// Window of `2 * buffer + 1` contiguous months centered on the
    /// month containing `today`, which starts out active.
    pub fn centered_on(today: NaiveDate) -> Self {
        Self::with_config(today, WindowConfig::default())
    }

    pub fn with_config(today: NaiveDate, cfg: WindowConfig) -> Self {
        let center = first_of_month(today);
        let buffer = cfg.buffer as i32;
        let slots = (-buffer..=buffer)
            .map(|delta| MonthSlot {
                anchor: shift_month(center, delta),
                extent: None,
            })
            .collect();
        Self {
            slots,
            active: center,
            phase: Phase::Idle,
            pending_settle: false,
            cfg,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn anchors(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.slots.iter().map(|s| s.anchor)
    }

    pub fn first_anchor(&self) -> Option<NaiveDate> {
        self.slots.front().map(|s| s.anchor)
    }

    pub fn last_anchor(&self) -> Option<NaiveDate> {
        self.slots.back().map(|s| s.anchor)
    }

    /// The month driving the header label and current-month styling.
    pub fn active(&self) -> NaiveDate {
        self.active
    }

    pub fn extent(&self, anchor: NaiveDate) -> Option<Extent> {
        self.slots
            .iter()
            .find(|s| s.anchor == anchor)
            .and_then(|s| s.extent)
    }

    /// Feed one month's layout measurement in. Unknown anchors are
    /// ignored and reported as such.
    pub fn record_extent(&mut self, anchor: NaiveDate, extent: Extent) -> bool {
        match self.slots.iter_mut().find(|s| s.anchor == anchor) {
            Some(slot) => {
                slot.extent = Some(extent);
                true
            }
            None => false,
        }
    }

    /// Scroll offset for the first paint: the active month's anchor
    /// aligned under the fixed header, applied as an instant jump.
    pub fn initial_scroll_top(&self) -> Option<f64> {
        self.extent(self.active)
            .map(|e| (e.top - self.cfg.header_offset).max(0.0))
    }

    /// React to a scroll position change. At most one growth step is
    /// answered per call, and none while a prepend measurement is
    /// outstanding.
    pub fn on_scroll(&mut self, vp: &Viewport) -> Growth {
        self.pending_settle = true;

        if let Phase::AwaitingMeasure { .. } = self.phase {
            return Growth::Unchanged;
        }

        if vp.scroll_top < self.cfg.edge_threshold {
            let count = self.cfg.batch;
            self.prepend(count);
            self.phase = Phase::AwaitingMeasure {
                prior_height: vp.content_height,
                prior_scroll: vp.scroll_top,
            };
            return Growth::Prepended(count);
        }

        if vp.scroll_top + vp.height > vp.content_height - self.cfg.edge_threshold {
            let count = self.cfg.batch;
            self.append(count);
            return Growth::Appended(count);
        }

        Growth::Unchanged
    }

    /// Complete the prepend protocol: given the content height after the
    /// re-render, return the scroll offset that keeps the previously
    /// visible content stationary. `None` when no measurement is due.
    pub fn measured(&mut self, new_content_height: f64) -> Option<f64> {
        match self.phase {
            Phase::AwaitingMeasure {
                prior_height,
                prior_scroll,
            } => {
                self.phase = Phase::Idle;
                Some(prior_scroll + (new_content_height - prior_height))
            }
            Phase::Idle => None,
        }
    }

    pub fn awaiting_measure(&self) -> bool {
        matches!(self.phase, Phase::AwaitingMeasure { .. })
    }

    /// Recompute the active month once scrolling has quieted: the anchor
    /// whose rendered midpoint lies closest to the viewport midpoint.
    /// Returns the new active month when it changed, consuming the
    /// pending recompute.
    pub fn settle(&mut self, vp: &Viewport) -> Option<NaiveDate> {
        if !self.pending_settle {
            return None;
        }
        self.pending_settle = false;

        let target = vp.midpoint();
        let closest = self
            .slots
            .iter()
            .filter_map(|s| s.extent.map(|e| (s.anchor, (e.midpoint() - target).abs())))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(anchor, _)| anchor)?;

        if closest == self.active {
            return None;
        }
        self.active = closest;
        self.evict_distant();
        Some(closest)
    }

    /// Resolve a month/year picker request to the closest anchor by
    /// whole-month distance. The requested month may lie outside the
    /// window; the nearest edge anchor is answered then, marked inexact.
    pub fn jump_to(&self, year: i32, month: u32) -> Option<JumpTarget> {
        let target = NaiveDate::from_ymd_opt(year, month, 1)?;
        let anchor = self
            .slots
            .iter()
            .map(|s| s.anchor)
            .min_by_key(|a| months_between(*a, target).abs())?;
        Some(JumpTarget {
            anchor,
            scroll_top: self
                .extent(anchor)
                .map(|e| (e.top - self.cfg.header_offset).max(0.0)),
            exact: anchor == target,
        })
    }

    fn prepend(&mut self, count: u32) {
        for _ in 0..count {
            let first = match self.slots.front() {
                Some(slot) => slot.anchor,
                None => first_of_month(self.active),
            };
            self.slots.push_front(MonthSlot {
                anchor: shift_month(first, -1),
                extent: None,
            });
        }
        self.debug_check_contiguous();
    }

    fn append(&mut self, count: u32) {
        for _ in 0..count {
            let last = match self.slots.back() {
                Some(slot) => slot.anchor,
                None => first_of_month(self.active),
            };
            self.slots.push_back(MonthSlot {
                anchor: shift_month(last, 1),
                extent: None,
            });
        }
        self.debug_check_contiguous();
    }

    /// Release rendered state far from the active month and trim the
    /// anchor run to a retention span, keeping it contiguous.
    fn evict_distant(&mut self) {
        let active = self.active;
        let radius = self.cfg.retention_radius;
        for slot in &mut self.slots {
            if months_between(active, slot.anchor).abs() > radius {
                slot.extent = None;
            }
        }

        let span = radius + self.cfg.batch as i32;
        while self
            .slots
            .front()
            .is_some_and(|s| months_between(s.anchor, active) > span)
        {
            self.slots.pop_front();
        }
        while self
            .slots
            .back()
            .is_some_and(|s| months_between(active, s.anchor) > span)
        {
            self.slots.pop_back();
        }
        self.debug_check_contiguous();
    }

    fn debug_check_contiguous(&self) {
        debug_assert!(self
            .slots
            .iter()
            .zip(self.slots.iter().skip(1))
            .all(|(a, b)| {
                a.anchor.day() == 1 && b.anchor.day() == 1 && shift_month(a.anchor, 1) == b.anchor
            }));
    }
}

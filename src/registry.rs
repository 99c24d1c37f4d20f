// SPDX-License-Identifier: MPL-2.0
//! Registry of mounted toasts.
//!
//! Each [`Position`] owns an ordered stack of [`ToastRecord`]s guarded by its
//! own lock: insertion appends, removal is by id, iteration order is the
//! visual stacking order. Positions never share a lock, so work on one
//! position does not wait on another.

use crate::domain::{ActiveNotification, Position, ToastId};
use crate::layout::Stackable;
use crate::render::{Container, VisualHandle};
use crate::timer::Timer;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A mounted toast: its visual handle, its container and its timer.
pub struct ToastRecord {
    id: ToastId,
    handle: Box<dyn VisualHandle>,
    container: Box<dyn Container>,
    timer: Option<Timer>,
}

impl ToastRecord {
    pub fn new(
        id: ToastId,
        handle: Box<dyn VisualHandle>,
        container: Box<dyn Container>,
    ) -> Self {
        Self {
            id,
            handle,
            container,
            timer: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn handle(&self) -> &dyn VisualHandle {
        self.handle.as_ref()
    }

    pub fn handle_mut(&mut self) -> &mut dyn VisualHandle {
        self.handle.as_mut()
    }

    pub fn container_mut(&mut self) -> &mut dyn Container {
        self.container.as_mut()
    }

    #[must_use]
    pub fn timer(&self) -> Option<&Timer> {
        self.timer.as_ref()
    }

    /// Stores the auto-dismiss timer; it is cleared when the record drops.
    pub fn set_timer(&mut self, timer: Timer) {
        self.timer = Some(timer);
    }
}

impl Stackable for ToastRecord {
    fn rendered_height(&self) -> Option<f64> {
        self.handle.rendered_height()
    }

    fn offset(&self) -> Option<f64> {
        self.handle.offset()
    }

    fn set_offset(&mut self, offset: f64) {
        self.handle.set_offset(offset);
    }
}

impl std::fmt::Debug for ToastRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastRecord")
            .field("id", &self.id)
            .field("offset", &self.handle.offset())
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}

/// One position's stack plus the toasts still waiting for their deferred mount.
#[derive(Debug, Default)]
pub struct Slot {
    records: Vec<ToastRecord>,
    pending: VecDeque<ActiveNotification>,
}

impl Slot {
    /// Appends a mounted toast at the end of the stack.
    pub fn insert(&mut self, record: ToastRecord) {
        debug_assert!(
            !self.contains(record.id()),
            "toast {} registered twice",
            record.id()
        );
        self.records.push(record);
    }

    /// Removes a toast, returning its former index.
    pub fn remove_by_id(&mut self, id: &ToastId) -> Option<(usize, ToastRecord)> {
        let index = self.records.iter().position(|record| record.id() == id)?;
        Some((index, self.records.remove(index)))
    }

    #[must_use]
    pub fn contains(&self, id: &ToastId) -> bool {
        self.records.iter().any(|record| record.id() == id)
    }

    #[must_use]
    pub fn records(&self) -> &[ToastRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [ToastRecord] {
        &mut self.records
    }

    /// Empties the stack, handing back every mounted toast in stacking order.
    pub fn take_records(&mut self) -> Vec<ToastRecord> {
        std::mem::take(&mut self.records)
    }

    /// Mounted ids in stacking order.
    #[must_use]
    pub fn ids(&self) -> Vec<ToastId> {
        self.records.iter().map(|record| record.id().clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Queues a toast opened but not yet mounted.
    pub fn add_pending(&mut self, notification: ActiveNotification) {
        self.pending.push_back(notification);
    }

    /// Dequeues every pending toast up to and including `id`, oldest first.
    ///
    /// Empty when `id` is no longer pending (already mounted by an earlier
    /// drain, or cancelled).
    pub fn take_pending_through(&mut self, id: &ToastId) -> Vec<ActiveNotification> {
        match self.pending.iter().position(|pending| pending.id() == id) {
            Some(index) => self.pending.drain(..=index).collect(),
            None => Vec::new(),
        }
    }

    /// Drops a pending toast before it mounts. Returns whether it was pending.
    pub fn cancel_pending(&mut self, id: &ToastId) -> bool {
        match self.pending.iter().position(|pending| pending.id() == id) {
            Some(index) => {
                self.pending.remove(index);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn pending_ids(&self) -> Vec<ToastId> {
        self.pending.iter().map(|pending| pending.id().clone()).collect()
    }
}

/// All six position stacks.
#[derive(Debug)]
pub struct Registry {
    slots: [Mutex<Slot>; 6],
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| Mutex::new(Slot::default())),
        }
    }
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks one position's stack.
    ///
    /// Hold the guard across a removal and the sibling reflow that follows it
    /// so no other operation on this position observes the stack in between.
    pub fn slot(&self, position: Position) -> MutexGuard<'_, Slot> {
        self.slots[position.index()]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Mounted ids at `position`, in stacking order.
    #[must_use]
    pub fn ids(&self, position: Position) -> Vec<ToastId> {
        self.slot(position).ids()
    }

    #[must_use]
    pub fn contains(&self, id: &ToastId) -> bool {
        Position::ALL
            .into_iter()
            .any(|position| self.slot(position).contains(id))
    }

    /// Number of mounted toasts across every position.
    #[must_use]
    pub fn len(&self) -> usize {
        Position::ALL
            .into_iter()
            .map(|position| self.slot(position).len())
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

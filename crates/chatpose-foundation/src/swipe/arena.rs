//! Slot-indexed storage for row interaction state.
//!
//! Hosts recycle row views: the same visual slot shows different messages as
//! the list scrolls. Swipe state belongs to the message, so a slot that is
//! rebound to a different message identity starts over from rest. Rebinding
//! the same message only refreshes its geometry.

use chatpose_ui_graphics::{Point, Rect};
use indexmap::IndexMap;

use super::{MessageRow, SwipeEffects};
use crate::config::SwipeConfig;
use crate::message::{MessageId, MessageInfo};

/// Visual row slot handed out by the host's list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowSlot(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindOutcome {
    /// The slot was empty.
    Created,
    /// The slot showed another message; its state was discarded.
    Recycled { previous: MessageId },
    /// Same message, refreshed geometry.
    Updated,
}

#[derive(Clone, Debug)]
pub struct RowArena {
    config: SwipeConfig,
    rows: IndexMap<RowSlot, MessageRow>,
}

impl RowArena {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            rows: IndexMap::new(),
        }
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn bind(
        &mut self,
        slot: RowSlot,
        info: MessageInfo,
        bounds: Rect,
        bubble_width: f32,
    ) -> BindOutcome {
        match self.rows.get_mut(&slot) {
            Some(row) if row.message_id() == info.id && row.info().alignment == info.alignment => {
                row.update(info, bounds, bubble_width);
                BindOutcome::Updated
            }
            Some(row) => {
                let previous = row.message_id();
                log::debug!("slot {:?} recycled from {} to {}", slot, previous, info.id);
                *row = MessageRow::new(info, bounds, bubble_width, &self.config);
                BindOutcome::Recycled { previous }
            }
            None => {
                self.rows
                    .insert(slot, MessageRow::new(info, bounds, bubble_width, &self.config));
                BindOutcome::Created
            }
        }
    }

    pub fn unbind(&mut self, slot: RowSlot) -> Option<MessageRow> {
        self.rows.shift_remove(&slot)
    }

    pub fn get(&self, slot: RowSlot) -> Option<&MessageRow> {
        self.rows.get(&slot)
    }

    pub fn get_mut(&mut self, slot: RowSlot) -> Option<&mut MessageRow> {
        self.rows.get_mut(&slot)
    }

    pub fn slot_of(&self, message_id: MessageId) -> Option<RowSlot> {
        self.rows
            .iter()
            .find(|(_, row)| row.message_id() == message_id)
            .map(|(slot, _)| *slot)
    }

    /// Row under `point`. Later bindings win where bounds overlap.
    pub fn hit_test(&self, point: Point) -> Option<RowSlot> {
        self.rows
            .iter()
            .rev()
            .find(|(_, row)| row.bounds().contains(point.x, point.y))
            .map(|(slot, _)| *slot)
    }

    pub fn advance(&mut self, frame_time_nanos: u64) -> SwipeEffects {
        let mut effects = SwipeEffects::new();
        for row in self.rows.values_mut() {
            effects.extend(row.advance(frame_time_nanos));
        }
        effects
    }

    pub fn is_animating(&self) -> bool {
        self.rows.values().any(MessageRow::is_animating)
    }

    /// Drops every row to rest without animation, keeping the bindings.
    pub fn reset_all(&mut self) {
        for row in self.rows.values_mut() {
            row.reset();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (RowSlot, &MessageRow)> {
        self.rows.iter().map(|(slot, row)| (*slot, row))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

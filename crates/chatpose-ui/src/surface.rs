//! The conversation surface: one object a host feeds pointer samples, frame
//! ticks and layout changes into, and reads effects back from.
//!
//! Pointer samples are routed to the row under the pointer-down position.
//! A press stays undetermined while it is within the detection distance; if
//! it is held that way for the long-press timeout it activates the overlay
//! for its row. Once classified, a swipe drives exactly one channel of its
//! row and claims its samples, while a scroll leaves every sample alone for
//! the scrollable container.
//!
//! While an overlay is mounted it is modal: pointer-downs are consumed, and
//! one that lands outside the panel and the anchor dismisses it.
//!
//! Sample uptimes and frame times must come from the same monotonic clock.

use chatpose_foundation::{
    BindOutcome, ConfigError, GestureClassifier, GestureSession, MessageId, MessageInfo,
    MessageRow, PointerEventKind, PointerSample, ReactionKind, ResolvedReactions, RowArena,
    RowSlot, SwipeEffect, SwipeKind,
};
use chatpose_ui_graphics::{Rect, Size};
use indexmap::IndexMap;
use smallvec::SmallVec;
use web_time::Duration;

use crate::config::InteractionConfig;
use crate::overlay::{
    DismissReason, OverlayAction, OverlayActivation, OverlayEnvironment,
    OverlayPresentationController, PlacementResult, PresentationEvent, SafeZone,
};

/// Everything the surface reports to its host.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceEffect {
    /// Reply drag crossed its threshold; a good moment for haptics.
    CommitEligible { message_id: MessageId },
    ReplyCommitted { message_id: MessageId },
    SwipeSettled {
        message_id: MessageId,
        kind: SwipeKind,
    },
    /// The overlay took up an activation: mounted, queued behind an exit,
    /// or re-entered. Not reported for a message already presented.
    ActivationRequested {
        message_id: MessageId,
        anchor: Rect,
    },
    OverlayMounted {
        message_id: MessageId,
        placement: PlacementResult,
    },
    OverlayPlaced {
        message_id: MessageId,
        placement: PlacementResult,
    },
    OverlayShown { message_id: MessageId },
    ReactionSelected {
        message_id: MessageId,
        kind: ReactionKind,
    },
    /// Copy, forward, pin or star picked from the panel.
    ActionInvoked {
        message_id: MessageId,
        action: OverlayAction,
    },
    DismissRequested {
        message_id: MessageId,
        reason: DismissReason,
    },
    OverlayUnmounted { message_id: MessageId },
}

pub type SurfaceEffects = SmallVec<[SurfaceEffect; 4]>;

impl From<SwipeEffect> for SurfaceEffect {
    fn from(effect: SwipeEffect) -> Self {
        match effect {
            SwipeEffect::CommitEligible { message_id } => {
                SurfaceEffect::CommitEligible { message_id }
            }
            SwipeEffect::ReplyCommitted { message_id } => {
                SurfaceEffect::ReplyCommitted { message_id }
            }
            SwipeEffect::Settled { message_id, kind } => {
                SurfaceEffect::SwipeSettled { message_id, kind }
            }
        }
    }
}

impl From<PresentationEvent> for SurfaceEffect {
    fn from(event: PresentationEvent) -> Self {
        match event {
            PresentationEvent::Mounted {
                message_id,
                placement,
            } => SurfaceEffect::OverlayMounted {
                message_id,
                placement,
            },
            PresentationEvent::Placed {
                message_id,
                placement,
            } => SurfaceEffect::OverlayPlaced {
                message_id,
                placement,
            },
            PresentationEvent::Shown { message_id } => SurfaceEffect::OverlayShown { message_id },
            PresentationEvent::ActionInvoked { message_id, action } => match action {
                OverlayAction::React(kind) => SurfaceEffect::ReactionSelected { message_id, kind },
                OverlayAction::Reply => SurfaceEffect::ReplyCommitted { message_id },
                action => SurfaceEffect::ActionInvoked { message_id, action },
            },
            PresentationEvent::DismissStarted { message_id, reason } => {
                SurfaceEffect::DismissRequested { message_id, reason }
            }
            PresentationEvent::Unmounted { message_id } => {
                SurfaceEffect::OverlayUnmounted { message_id }
            }
        }
    }
}

fn collect<T: Into<SurfaceEffect>>(items: impl IntoIterator<Item = T>) -> SurfaceEffects {
    items.into_iter().map(Into::into).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PressState {
    Tracking,
    /// Activated the overlay; the rest of the press is swallowed.
    LongPressed,
}

#[derive(Clone, Debug)]
struct ActivePress {
    slot: RowSlot,
    session: GestureSession,
    down_nanos: u64,
    state: PressState,
}

pub struct ConversationSurface {
    config: InteractionConfig,
    classifier: GestureClassifier,
    rows: RowArena,
    reactions: IndexMap<MessageId, ResolvedReactions>,
    press: Option<ActivePress>,
    overlay: OverlayPresentationController,
}

impl ConversationSurface {
    pub fn new(config: InteractionConfig, viewport: Size) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            classifier: GestureClassifier::new(config.gesture),
            rows: RowArena::new(config.swipe()),
            reactions: IndexMap::new(),
            press: None,
            overlay: OverlayPresentationController::new(
                config.presentation,
                config.placement,
                OverlayEnvironment::new(viewport, SafeZone::NONE),
            ),
            config,
        })
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn rows(&self) -> &RowArena {
        &self.rows
    }

    pub fn row(&self, slot: RowSlot) -> Option<&MessageRow> {
        self.rows.get(slot)
    }

    pub fn overlay(&self) -> &OverlayPresentationController {
        &self.overlay
    }

    /// Session of the press in progress, if any.
    pub fn session(&self) -> Option<&GestureSession> {
        self.press.as_ref().map(|press| &press.session)
    }

    /// Nothing pressed and nothing animating.
    pub fn is_idle(&self) -> bool {
        self.press.is_none() && !self.rows.is_animating() && !self.overlay.is_animating()
    }

    /// Binds `slot` to a message. A slot that changes message identity
    /// starts from rest, and a press on it is dropped.
    pub fn bind_row(
        &mut self,
        slot: RowSlot,
        info: MessageInfo,
        bounds: Rect,
        bubble_width: f32,
    ) -> BindOutcome {
        let outcome = self.rows.bind(slot, info, bounds, bubble_width);
        if let BindOutcome::Recycled { previous } = outcome {
            if self.press.as_ref().is_some_and(|press| press.slot == slot) {
                log::debug!("press on {previous} dropped by recycling");
                self.press = None;
            }
            self.release_reactions(previous);
        }
        outcome
    }

    /// Unbinds `slot`. The departing message's reactions go with it unless
    /// another slot still shows that message.
    pub fn unbind_row(&mut self, slot: RowSlot) -> Option<MessageRow> {
        if self.press.as_ref().is_some_and(|press| press.slot == slot) {
            self.cancel_press();
        }
        let row = self.rows.unbind(slot)?;
        self.release_reactions(row.message_id());
        Some(row)
    }

    /// Reactions for `message_id`, held while a row shows that message.
    pub fn set_reactions(&mut self, message_id: MessageId, reactions: ResolvedReactions) {
        self.reactions.insert(message_id, reactions);
    }

    pub fn reactions(&self, message_id: MessageId) -> Option<&ResolvedReactions> {
        self.reactions.get(&message_id)
    }

    pub fn remove_reactions(&mut self, message_id: MessageId) -> Option<ResolvedReactions> {
        self.reactions.shift_remove(&message_id)
    }

    pub fn clear_reactions(&mut self) {
        self.reactions.clear();
    }

    /// Number of messages with reactions held.
    pub fn reaction_count(&self) -> usize {
        self.reactions.len()
    }

    pub fn on_pointer_event(&mut self, sample: &PointerSample) -> SurfaceEffects {
        match sample.kind {
            PointerEventKind::Down => self.on_down(sample),
            PointerEventKind::Move => self.on_move(sample),
            PointerEventKind::Up | PointerEventKind::Cancel => self.on_end(sample),
        }
    }

    /// Frame tick: long-press timeout, channel settles and overlay tracks.
    pub fn advance_frame(&mut self, frame_time_nanos: u64) -> SurfaceEffects {
        let mut effects = self.check_long_press(frame_time_nanos);
        effects.extend(collect(self.rows.advance(frame_time_nanos)));
        effects.extend(collect(self.overlay.advance(frame_time_nanos)));
        effects
    }

    /// Drops the press in progress as if it had been cancelled.
    pub fn abandon_session(&mut self) -> SurfaceEffects {
        self.cancel_press()
    }

    /// Opens the overlay for `slot` without a long press.
    pub fn activate(&mut self, slot: RowSlot) -> SurfaceEffects {
        let mut effects = self.cancel_press();
        effects.extend(self.open_overlay(slot));
        effects
    }

    pub fn select_action(&mut self, action: OverlayAction) -> SurfaceEffects {
        collect(self.overlay.select_action(action))
    }

    /// Empty when there was nothing to dismiss, so the host can fall back to
    /// its own back handling.
    pub fn on_back_navigation(&mut self) -> SurfaceEffects {
        collect(self.overlay.dismiss(DismissReason::BackNavigation))
    }

    pub fn request_overlay_visible(&mut self, visible: bool) -> SurfaceEffects {
        collect(self.overlay.request_visible(visible))
    }

    pub fn on_safe_zone_changed(&mut self, safe_zone: SafeZone) -> SurfaceEffects {
        collect(self.overlay.set_safe_zone(safe_zone))
    }

    pub fn on_viewport_changed(&mut self, viewport: Size) -> SurfaceEffects {
        collect(self.overlay.set_viewport(viewport))
    }

    pub fn on_overlay_measured(&mut self, size: Size) -> SurfaceEffects {
        collect(self.overlay.on_overlay_measured(size))
    }

    pub fn on_anchor_moved(&mut self, anchor: Rect) -> SurfaceEffects {
        collect(self.overlay.on_anchor_moved(anchor))
    }

    fn on_down(&mut self, sample: &PointerSample) -> SurfaceEffects {
        let mut effects = self.cancel_press();
        if self.overlay.is_mounted() {
            sample.consume();
            if self.overlay.requested_visible() && !self.overlay.hit_test(sample.position) {
                effects.extend(collect(self.overlay.dismiss(DismissReason::OutsideTap)));
            }
            return effects;
        }

        let Some(slot) = self.rows.hit_test(sample.position) else {
            log::trace!("pointer down at {:?} missed every row", sample.position);
            return effects;
        };
        if let Some(row) = self.rows.get(slot) {
            self.press = Some(ActivePress {
                slot,
                session: GestureSession::new(sample.id, *row.info(), sample.position),
                down_nanos: sample.uptime_nanos,
                state: PressState::Tracking,
            });
        }
        effects
    }

    fn on_move(&mut self, sample: &PointerSample) -> SurfaceEffects {
        let mut effects = SurfaceEffects::new();
        let Some(press) = self.press.as_mut() else {
            log::trace!("move without an active press ignored");
            return effects;
        };
        if press.session.pointer_id() != sample.id {
            return effects;
        }
        if press.state == PressState::LongPressed {
            sample.consume();
            return effects;
        }

        let delta = press.session.delta_to(sample.position);
        if let Some(event) = self.classifier.on_sample_update(&mut press.session, delta) {
            if event.consumes_input() {
                sample.consume();
            }
            if let Some(row) = self.rows.get_mut(press.slot) {
                effects.extend(collect(row.apply(event)));
            }
        }
        if press.session.is_undetermined() {
            effects.extend(self.check_long_press(sample.uptime_nanos));
        }
        effects
    }

    fn on_end(&mut self, sample: &PointerSample) -> SurfaceEffects {
        let mut effects = SurfaceEffects::new();
        if !self
            .press
            .as_ref()
            .is_some_and(|press| press.session.pointer_id() == sample.id)
        {
            log::trace!("{:?} without an active press ignored", sample.kind);
            return effects;
        }
        let Some(press) = self.press.take() else {
            return effects;
        };
        if press.state == PressState::LongPressed {
            sample.consume();
            return effects;
        }

        let event = match sample.kind {
            PointerEventKind::Cancel => self.classifier.on_cancel(&press.session),
            _ => self.classifier.on_release(&press.session),
        };
        if let Some(event) = event {
            sample.consume();
            if let Some(row) = self.rows.get_mut(press.slot) {
                effects.extend(collect(row.apply(event)));
            }
        }
        effects
    }

    fn check_long_press(&mut self, now_nanos: u64) -> SurfaceEffects {
        let Some(press) = self.press.as_mut() else {
            return SurfaceEffects::new();
        };
        if press.state != PressState::Tracking || !press.session.is_undetermined() {
            return SurfaceEffects::new();
        }
        let held = Duration::from_nanos(now_nanos.saturating_sub(press.down_nanos));
        if held < self.config.gesture.long_press_timeout {
            return SurfaceEffects::new();
        }
        press.state = PressState::LongPressed;
        let slot = press.slot;
        log::debug!(
            "long press on {} after {:?}",
            press.session.message().id,
            held
        );
        self.open_overlay(slot)
    }

    fn open_overlay(&mut self, slot: RowSlot) -> SurfaceEffects {
        let mut effects = SurfaceEffects::new();
        let Some(row) = self.rows.get(slot) else {
            log::debug!("activation of unbound slot {slot:?} ignored");
            return effects;
        };
        let message = *row.info();
        let anchor = row.bubble_bounds();
        if self.overlay.is_presenting(message.id) {
            log::trace!("{} is already presented", message.id);
            return effects;
        }
        let reactions = self
            .reactions
            .get(&message.id)
            .cloned()
            .unwrap_or_default();
        effects.push(SurfaceEffect::ActivationRequested {
            message_id: message.id,
            anchor,
        });
        let activation = OverlayActivation::new(message, anchor).with_reactions(reactions);
        effects.extend(collect(self.overlay.activate(activation)));
        effects
    }

    fn release_reactions(&mut self, message_id: MessageId) {
        if self.rows.slot_of(message_id).is_none()
            && self.reactions.shift_remove(&message_id).is_some()
        {
            log::trace!("reactions for {message_id} released");
        }
    }

    /// Implicit cancel: the channel the press was driving settles to rest.
    fn cancel_press(&mut self) -> SurfaceEffects {
        let mut effects = SurfaceEffects::new();
        let Some(press) = self.press.take() else {
            return effects;
        };
        if let Some(event) = self.classifier.on_cancel(&press.session) {
            log::debug!(
                "implicitly cancelling {:?} on {}",
                event,
                press.session.message().id
            );
            if let Some(row) = self.rows.get_mut(press.slot) {
                if row.message_id() == press.session.message().id {
                    effects.extend(collect(row.apply(event)));
                }
            }
        }
        effects
    }
}

#[cfg(test)]
#[path = "tests/surface_tests.rs"]
mod tests;

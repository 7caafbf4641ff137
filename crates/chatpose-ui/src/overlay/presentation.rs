//! Overlay presentation: mounting, entrance and exit sequencing.
//!
//! The controller separates what the caller asked for (`requested_visible`)
//! from what is on screen (mounted), so an exit animation can play after a
//! dismiss request and state is torn down only once it completes:
//!
//! ```text
//! Hidden ──activate──▶ Entering ──tracks done──▶ Shown
//!   ▲                     │  ▲                      │
//!   │               dismiss  activate / request_visible(true)
//!   │                     ▼  │                      │
//!   └──tracks done─── Exiting ◀─────dismiss─────────┘
//! ```
//!
//! Entrance and exit run three tracks in parallel: scrim fade, anchor lift
//! and panel scale/fade. Every transition retargets the tracks from their
//! current values, so interrupting an entrance or an exit never snaps.
//!
//! Only one overlay is mounted at a time. Activating a different message
//! while one is up queues the new activation and dismisses the current one;
//! the queued activation enters once the exit completes.

use chatpose_animation::{AnimatedFloat, AnimationSpec, AnimationType, Easing, SpringSpec};
use chatpose_foundation::{
    ensure_non_negative, ensure_positive, ConfigError, MessageId, MessageInfo, ReactionKind,
    ResolvedReactions,
};
use chatpose_ui_graphics::{Point, Rect, Size};
use smallvec::SmallVec;

use super::{
    AlignEdge, AnchoredOverlayPlacer, DismissReason, OverlayAction, OverlaySizeEstimate,
    PanelActions, PlacementConfig, PlacementResult, SafeZone,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PresentationPhase {
    Hidden,
    Entering,
    Shown,
    Exiting,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresentationConfig {
    /// Scrim and anchor lift entrance.
    pub enter: AnimationType,
    /// Panel scale and fade entrance.
    pub panel_enter: AnimationType,
    /// All three tracks on the way out.
    pub exit: AnimationType,
    pub scrim_max_alpha: f32,
    /// Anchor scale when fully lifted.
    pub lift_scale: f32,
    /// Panel scale at the start of its entrance.
    pub panel_initial_scale: f32,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            enter: AnimationSpec::tween(250, Easing::FastOutSlowIn).into(),
            panel_enter: SpringSpec::default_spring().into(),
            exit: AnimationSpec::tween(200, Easing::FastOutLinearIn).into(),
            scrim_max_alpha: 0.4,
            lift_scale: 1.04,
            panel_initial_scale: 0.8,
        }
    }
}

impl PresentationConfig {
    pub fn with_enter(mut self, enter: impl Into<AnimationType>) -> Self {
        self.enter = enter.into();
        self
    }

    pub fn with_panel_enter(mut self, panel_enter: impl Into<AnimationType>) -> Self {
        self.panel_enter = panel_enter.into();
        self
    }

    pub fn with_exit(mut self, exit: impl Into<AnimationType>) -> Self {
        self.exit = exit.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_non_negative("presentation.scrim_max_alpha", self.scrim_max_alpha)?;
        ensure_positive("presentation.panel_initial_scale", self.panel_initial_scale)?;
        if !(self.lift_scale >= 1.0) {
            return Err(ConfigError::RatioBelowOne {
                field: "presentation.lift_scale",
                value: self.lift_scale,
            });
        }
        Ok(())
    }
}

/// Layout inputs that outlive a single activation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverlayEnvironment {
    pub viewport: Size,
    pub safe_zone: SafeZone,
}

impl OverlayEnvironment {
    pub fn new(viewport: Size, safe_zone: SafeZone) -> Self {
        Self {
            viewport,
            safe_zone,
        }
    }
}

/// Snapshot taken when a message is activated.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayActivation {
    pub message: MessageInfo,
    /// Anchor in the conversation container's coordinate space.
    pub anchor: Rect,
    pub reactions: ResolvedReactions,
}

impl OverlayActivation {
    pub fn new(message: MessageInfo, anchor: Rect) -> Self {
        Self {
            message,
            anchor,
            reactions: ResolvedReactions::default(),
        }
    }

    pub fn with_reactions(mut self, reactions: ResolvedReactions) -> Self {
        self.reactions = reactions;
        self
    }

    pub fn message_id(&self) -> MessageId {
        self.message.id
    }

    pub fn actions(&self) -> PanelActions {
        OverlayAction::panel_actions(&self.message)
    }

    /// Reaction the panel highlights as already chosen by the local user.
    pub fn selected_reaction(&self) -> Option<ReactionKind> {
        self.reactions.mine()
    }

    pub fn size_estimate(&self) -> OverlaySizeEstimate {
        OverlaySizeEstimate::estimate(ReactionKind::ALL.len(), self.actions().len())
    }
}

/// Discrete outputs of the controller, in the order they happened.
#[derive(Clone, Debug, PartialEq)]
pub enum PresentationEvent {
    Mounted {
        message_id: MessageId,
        placement: PlacementResult,
    },
    /// Placement changed while mounted.
    Placed {
        message_id: MessageId,
        placement: PlacementResult,
    },
    Shown {
        message_id: MessageId,
    },
    ActionInvoked {
        message_id: MessageId,
        action: OverlayAction,
    },
    DismissStarted {
        message_id: MessageId,
        reason: DismissReason,
    },
    Unmounted {
        message_id: MessageId,
    },
}

pub type PresentationEvents = SmallVec<[PresentationEvent; 4]>;

/// Animated values for the host to render this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayFrame {
    pub scrim_alpha: f32,
    pub anchor_scale: f32,
    pub panel_scale: f32,
    pub panel_alpha: f32,
}

#[derive(Clone, Debug)]
struct MountedOverlay {
    activation: OverlayActivation,
    size: OverlaySizeEstimate,
    placement: PlacementResult,
}

#[derive(Clone, Debug)]
pub struct OverlayPresentationController {
    config: PresentationConfig,
    placer: AnchoredOverlayPlacer,
    environment: OverlayEnvironment,
    phase: PresentationPhase,
    requested_visible: bool,
    mounted: Option<MountedOverlay>,
    queued: Option<OverlayActivation>,
    scrim: AnimatedFloat,
    lift: AnimatedFloat,
    panel: AnimatedFloat,
}

impl OverlayPresentationController {
    pub fn new(
        config: PresentationConfig,
        placement: PlacementConfig,
        environment: OverlayEnvironment,
    ) -> Self {
        Self {
            config,
            placer: AnchoredOverlayPlacer::new(placement),
            environment,
            phase: PresentationPhase::Hidden,
            requested_visible: false,
            mounted: None,
            queued: None,
            scrim: AnimatedFloat::new(0.0),
            lift: AnimatedFloat::new(0.0),
            panel: AnimatedFloat::new(0.0),
        }
    }

    pub fn phase(&self) -> PresentationPhase {
        self.phase
    }

    /// True from activation until the exit animation completes.
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn requested_visible(&self) -> bool {
        self.requested_visible
    }

    pub fn is_animating(&self) -> bool {
        self.scrim.is_running() || self.lift.is_running() || self.panel.is_running()
    }

    pub fn environment(&self) -> &OverlayEnvironment {
        &self.environment
    }

    pub fn activation(&self) -> Option<&OverlayActivation> {
        self.mounted.as_ref().map(|mounted| &mounted.activation)
    }

    pub fn queued(&self) -> Option<&OverlayActivation> {
        self.queued.as_ref()
    }

    pub fn message_id(&self) -> Option<MessageId> {
        self.activation().map(OverlayActivation::message_id)
    }

    /// Whether `message_id` is mounted and not on its way out. Activating
    /// it again changes nothing.
    pub fn is_presenting(&self, message_id: MessageId) -> bool {
        self.requested_visible && self.message_id() == Some(message_id)
    }

    pub fn placement(&self) -> Option<PlacementResult> {
        self.mounted.as_ref().map(|mounted| mounted.placement)
    }

    pub fn overlay_size(&self) -> Option<OverlaySizeEstimate> {
        self.mounted.as_ref().map(|mounted| mounted.size)
    }

    pub fn overlay_rect(&self) -> Option<Rect> {
        self.mounted
            .as_ref()
            .map(|mounted| mounted.placement.rect(mounted.size.size()))
    }

    pub fn frame(&self) -> OverlayFrame {
        let lift = self.lift.value().max(0.0);
        let panel = self.panel.value().max(0.0);
        OverlayFrame {
            scrim_alpha: self.scrim.value().clamp(0.0, 1.0) * self.config.scrim_max_alpha,
            anchor_scale: 1.0 + (self.config.lift_scale - 1.0) * lift,
            panel_scale: self.config.panel_initial_scale
                + (1.0 - self.config.panel_initial_scale) * panel,
            panel_alpha: panel.min(1.0),
        }
    }

    /// True when `point` lands on the panel or the lifted anchor; anything
    /// else counts as an outside tap.
    pub fn hit_test(&self, point: Point) -> bool {
        let Some(mounted) = self.mounted.as_ref() else {
            return false;
        };
        mounted.activation.anchor.contains(point.x, point.y)
            || mounted
                .placement
                .rect(mounted.size.size())
                .contains(point.x, point.y)
    }

    pub fn activate(&mut self, activation: OverlayActivation) -> PresentationEvents {
        let mut events = PresentationEvents::new();
        let current = self.message_id();
        let same_message = current == Some(activation.message_id());
        match self.phase {
            PresentationPhase::Hidden => self.mount(activation, &mut events),
            PresentationPhase::Exiting if same_message => {
                self.queued = None;
                self.reenter(Some(activation), &mut events);
            }
            PresentationPhase::Exiting => {
                log::debug!("queueing overlay for {} behind exit", activation.message_id());
                self.queued = Some(activation);
            }
            PresentationPhase::Entering | PresentationPhase::Shown if same_message => {
                log::trace!("{} is already presented", activation.message_id());
            }
            PresentationPhase::Entering | PresentationPhase::Shown => {
                log::debug!(
                    "overlay for {} replaces {:?}",
                    activation.message_id(),
                    current
                );
                self.queued = Some(activation);
                self.begin_exit(DismissReason::Replaced, &mut events);
            }
        }
        events
    }

    /// Caller intent. `true` while exiting restarts the entrance from the
    /// current values; `false` dismisses.
    pub fn request_visible(&mut self, visible: bool) -> PresentationEvents {
        if !visible {
            return self.dismiss(DismissReason::Requested);
        }
        let mut events = PresentationEvents::new();
        match self.phase {
            PresentationPhase::Exiting => {
                self.queued = None;
                self.reenter(None, &mut events);
            }
            PresentationPhase::Hidden => match self.queued.take() {
                Some(activation) => self.mount(activation, &mut events),
                None => log::debug!("request_visible(true) with nothing to present"),
            },
            PresentationPhase::Entering | PresentationPhase::Shown => {}
        }
        events
    }

    /// Starts the exit. A no-op while hidden; while already exiting it only
    /// drops a queued activation.
    pub fn dismiss(&mut self, reason: DismissReason) -> PresentationEvents {
        let mut events = PresentationEvents::new();
        match self.phase {
            PresentationPhase::Hidden => {
                log::trace!("dismiss ({reason:?}) while hidden ignored");
            }
            PresentationPhase::Exiting => {
                if self.queued.take().is_some() {
                    log::debug!("dropped queued overlay on dismiss ({reason:?})");
                }
            }
            PresentationPhase::Entering | PresentationPhase::Shown => {
                self.begin_exit(reason, &mut events);
            }
        }
        events
    }

    /// Performs `action` and then dismisses. Ignored unless the overlay is
    /// visible and offers the action.
    pub fn select_action(&mut self, action: OverlayAction) -> PresentationEvents {
        let mut events = PresentationEvents::new();
        let Some(activation) = self.activation() else {
            log::debug!("{action:?} selected with no overlay mounted");
            return events;
        };
        if !self.requested_visible {
            log::debug!("{action:?} selected while the overlay is leaving");
            return events;
        }
        if !action.is_available_for(&activation.message) {
            log::debug!("{action:?} is not offered for {}", activation.message_id());
            return events;
        }
        events.push(PresentationEvent::ActionInvoked {
            message_id: activation.message_id(),
            action,
        });
        self.begin_exit(DismissReason::ActionSelected, &mut events);
        events
    }

    pub fn set_safe_zone(&mut self, safe_zone: SafeZone) -> PresentationEvents {
        self.environment.safe_zone = safe_zone;
        self.refresh_placement()
    }

    pub fn set_viewport(&mut self, viewport: Size) -> PresentationEvents {
        self.environment.viewport = viewport;
        self.refresh_placement()
    }

    /// Swaps the a-priori size estimate for the measured panel size.
    pub fn on_overlay_measured(&mut self, size: Size) -> PresentationEvents {
        match self.mounted.as_mut() {
            Some(mounted) => mounted.size = OverlaySizeEstimate::measured(size),
            None => return PresentationEvents::new(),
        }
        self.refresh_placement()
    }

    pub fn on_anchor_moved(&mut self, anchor: Rect) -> PresentationEvents {
        match self.mounted.as_mut() {
            Some(mounted) => mounted.activation.anchor = anchor,
            None => return PresentationEvents::new(),
        }
        self.refresh_placement()
    }

    pub fn advance(&mut self, frame_time_nanos: u64) -> PresentationEvents {
        let mut events = PresentationEvents::new();
        self.scrim.advance(frame_time_nanos);
        self.lift.advance(frame_time_nanos);
        self.panel.advance(frame_time_nanos);
        if self.is_animating() {
            return events;
        }

        match self.phase {
            PresentationPhase::Entering => {
                self.phase = PresentationPhase::Shown;
                if let Some(message_id) = self.message_id() {
                    log::debug!("overlay for {message_id} shown");
                    events.push(PresentationEvent::Shown { message_id });
                }
            }
            PresentationPhase::Exiting => {
                self.phase = PresentationPhase::Hidden;
                if let Some(mounted) = self.mounted.take() {
                    let message_id = mounted.activation.message_id();
                    log::debug!("overlay for {message_id} unmounted");
                    events.push(PresentationEvent::Unmounted { message_id });
                }
                if let Some(next) = self.queued.take() {
                    self.mount(next, &mut events);
                }
            }
            PresentationPhase::Hidden | PresentationPhase::Shown => {}
        }
        events
    }

    fn mount(&mut self, activation: OverlayActivation, events: &mut PresentationEvents) {
        let size = activation.size_estimate();
        let placement = self.place(&activation, size);
        let message_id = activation.message_id();
        log::debug!("overlay for {message_id} mounted at {placement:?}");
        self.mounted = Some(MountedOverlay {
            activation,
            size,
            placement,
        });
        self.scrim.snap_to(0.0);
        self.lift.snap_to(0.0);
        self.panel.snap_to(0.0);
        events.push(PresentationEvent::Mounted {
            message_id,
            placement,
        });
        self.start_enter();
    }

    /// Back to `Entering` from an exit in flight, from the current values.
    fn reenter(
        &mut self,
        activation: Option<OverlayActivation>,
        events: &mut PresentationEvents,
    ) {
        let Some(mounted) = self.mounted.as_mut() else {
            return;
        };
        if let Some(activation) = activation {
            mounted.activation = activation;
        }
        log::debug!(
            "overlay for {} re-entering",
            mounted.activation.message_id()
        );
        events.extend(self.refresh_placement());
        self.start_enter();
    }

    fn start_enter(&mut self) {
        self.phase = PresentationPhase::Entering;
        self.requested_visible = true;
        self.scrim.animate_to(1.0, self.config.enter);
        self.lift.animate_to(1.0, self.config.enter);
        self.panel.animate_to(1.0, self.config.panel_enter);
    }

    fn begin_exit(&mut self, reason: DismissReason, events: &mut PresentationEvents) {
        let Some(message_id) = self.message_id() else {
            return;
        };
        log::debug!("overlay for {message_id} exiting ({reason:?})");
        self.phase = PresentationPhase::Exiting;
        self.requested_visible = false;
        self.scrim.animate_to(0.0, self.config.exit);
        self.lift.animate_to(0.0, self.config.exit);
        self.panel.animate_to(0.0, self.config.exit);
        events.push(PresentationEvent::DismissStarted { message_id, reason });
    }

    fn place(&self, activation: &OverlayActivation, size: OverlaySizeEstimate) -> PlacementResult {
        self.placer.place(
            activation.anchor,
            &self.environment.safe_zone,
            size.size(),
            AlignEdge::for_alignment(activation.message.alignment),
            self.environment.viewport,
        )
    }

    /// Re-runs placement for the mounted overlay; reports a change.
    fn refresh_placement(&mut self) -> PresentationEvents {
        let mut events = PresentationEvents::new();
        let Some(mounted) = self.mounted.as_ref() else {
            return events;
        };
        let placement = self.place(&mounted.activation, mounted.size);
        let message_id = mounted.activation.message_id();
        if let Some(mounted) = self.mounted.as_mut() {
            if mounted.placement != placement {
                mounted.placement = placement;
                log::debug!("overlay for {message_id} re-placed at {placement:?}");
                events.push(PresentationEvent::Placed {
                    message_id,
                    placement,
                });
            }
        }
        events
    }
}

#[cfg(test)]
#[path = "../tests/presentation_tests.rs"]
mod tests;

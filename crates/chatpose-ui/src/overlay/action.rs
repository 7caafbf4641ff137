use chatpose_foundation::{MessageInfo, ReactionKind};
use smallvec::SmallVec;

/// Something the user can pick from the overlay panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayAction {
    React(ReactionKind),
    Reply,
    Copy,
    Forward,
    Pin,
    Star,
}

pub type PanelActions = SmallVec<[OverlayAction; 5]>;

impl OverlayAction {
    /// Action rows offered for `message`, in panel order. Reactions are not
    /// listed; they live in their own row.
    pub fn panel_actions(message: &MessageInfo) -> PanelActions {
        let mut actions = PanelActions::new();
        if message.reply_allowed {
            actions.push(OverlayAction::Reply);
        }
        actions.extend([
            OverlayAction::Copy,
            OverlayAction::Forward,
            OverlayAction::Pin,
            OverlayAction::Star,
        ]);
        actions
    }

    pub fn is_available_for(&self, message: &MessageInfo) -> bool {
        match self {
            OverlayAction::Reply => message.reply_allowed,
            _ => true,
        }
    }
}

/// Why an overlay is being dismissed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DismissReason {
    OutsideTap,
    BackNavigation,
    ActionSelected,
    /// Another message was activated while this overlay was up.
    Replaced,
    /// The host asked for it (`request_visible(false)`).
    Requested,
}

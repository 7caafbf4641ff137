//! End-to-end conversations scripted through the robot.

use chatpose_foundation::{
    MessageId, PointerEventKind, RawReaction, ReactionKind, ResolvedReactions, Sender, SwipeKind,
};
use chatpose_testing::prelude::*;
use chatpose_ui::{
    DismissReason, OverlayAction, PlacementResult, PresentationPhase, SurfaceEffect,
};
use chatpose_ui_graphics::Point;

fn right_of(point: Point, dx: f32) -> Point {
    Point::new(point.x + dx, point.y)
}

fn shown_overlay_robot() -> SurfaceRobot {
    let mut robot = SurfaceRobot::new(standard_surface());
    robot.long_press(INCOMING_BUBBLE.center());
    assert!(robot.wait_for_idle());
    assert_eq!(robot.surface().overlay().phase(), PresentationPhase::Shown);
    robot.take_effects();
    robot
}

#[test]
fn reply_swipe_commits_once_and_claims_its_samples() {
    let mut robot = SurfaceRobot::new(standard_surface());
    let start = INCOMING_BUBBLE.center();

    let report = robot.drag(start, right_of(start, 90.0), 6);
    assert!(robot.wait_for_idle());

    assert_eq!(report.samples, 8);
    assert_eq!(report.passed_through(), 1, "only the pointer-down reaches the list");
    assert_eq!(
        robot.effects(),
        &[
            SurfaceEffect::CommitEligible {
                message_id: MessageId(1)
            },
            SurfaceEffect::ReplyCommitted {
                message_id: MessageId(1)
            },
            SurfaceEffect::SwipeSettled {
                message_id: MessageId(1),
                kind: SwipeKind::Reply
            },
        ]
    );
}

#[test]
fn vertical_drag_is_left_to_the_list() {
    let mut robot = SurfaceRobot::new(standard_surface());
    let start = INCOMING_BUBBLE.center();

    let report = robot.drag(start, Point::new(start.x + 6.0, start.y + 100.0), 5);

    assert_eq!(report.consumed, 0);
    assert_eq!(robot.unconsumed_samples().len(), report.samples);
    assert!(robot.effects().is_empty());
    assert!(robot
        .surface()
        .row(INCOMING_SLOT)
        .is_some_and(|row| row.is_at_rest()));
}

#[test]
fn locked_row_reveals_the_date_instead_of_replying() {
    let mut robot = SurfaceRobot::new(standard_surface());
    let start = LOCKED_BUBBLE.center();

    robot.drag_and_hold(start, right_of(start, 60.0), 4);

    let progress = robot
        .surface()
        .row(LOCKED_SLOT)
        .map(|row| row.date_reveal().progress())
        .unwrap_or_default();
    assert_approx_eq(progress, 0.5, 1e-4, "date reveal progress");
    assert!(robot
        .surface()
        .row(LOCKED_SLOT)
        .is_some_and(|row| row.reply().value() == 0.0));

    robot.release();
    assert!(robot.wait_for_idle());
    assert_count_matching(
        robot.effects(),
        1,
        |effect| {
            matches!(
                effect,
                SurfaceEffect::SwipeSettled {
                    kind: SwipeKind::DateReveal,
                    ..
                }
            )
        },
        "date reveal settles once",
    );
}

#[test]
fn long_press_opens_the_overlay_above_the_bubble() {
    let mut robot = SurfaceRobot::new(standard_surface());

    robot.long_press(INCOMING_BUBBLE.center());
    assert!(robot.wait_for_idle());

    let expected = PlacementResult {
        x: 16.0,
        y: 868.0,
        opens_above: true,
    };
    let effects = robot.effects();
    assert!(matches!(
        effects.first(),
        Some(SurfaceEffect::ActivationRequested { message_id, anchor })
            if *message_id == MessageId(1) && *anchor == INCOMING_BUBBLE
    ));
    assert!(effects.contains(&SurfaceEffect::OverlayMounted {
        message_id: MessageId(1),
        placement: expected,
    }));
    assert_eq!(
        effects.last(),
        Some(&SurfaceEffect::OverlayShown {
            message_id: MessageId(1)
        })
    );

    let overlay = robot.surface().overlay();
    let usable = phone_safe_zone().usable_bounds(PHONE_VIEWPORT, 16.0);
    assert_rect_within(overlay.overlay_rect().unwrap_or_default(), usable, "overlay");
}

#[test]
fn long_press_swallows_the_rest_of_the_press() {
    let mut robot = SurfaceRobot::new(standard_surface());
    let start = OUTGOING_BUBBLE.center();
    robot.press(start);
    robot.advance_time(600_000_000);
    assert!(robot.surface().overlay().is_mounted());

    assert!(robot.move_to(Point::new(start.x - 80.0, start.y)));
    assert!(robot.release());
    assert!(robot
        .surface()
        .row(OUTGOING_SLOT)
        .is_some_and(|row| row.is_at_rest()));
}

#[test]
fn outside_tap_dismisses_and_unmounts() {
    let mut robot = shown_overlay_robot();

    assert!(robot.click_at(Point::new(1000.0, 200.0)));
    assert!(robot.wait_for_idle());

    assert_eq!(
        robot.effects(),
        &[
            SurfaceEffect::DismissRequested {
                message_id: MessageId(1),
                reason: DismissReason::OutsideTap
            },
            SurfaceEffect::OverlayUnmounted {
                message_id: MessageId(1)
            },
        ]
    );
    assert!(!robot.surface().overlay().is_mounted());
}

#[test]
fn reaction_is_reported_before_the_dismissal() {
    let mut robot = shown_overlay_robot();

    robot.select(OverlayAction::React(ReactionKind::Love));

    assert_eq!(
        robot.take_effects(),
        vec![
            SurfaceEffect::ReactionSelected {
                message_id: MessageId(1),
                kind: ReactionKind::Love
            },
            SurfaceEffect::DismissRequested {
                message_id: MessageId(1),
                reason: DismissReason::ActionSelected
            },
        ]
    );
}

#[test]
fn back_navigation_is_only_handled_while_shown() {
    let mut robot = SurfaceRobot::new(standard_surface());
    assert!(!robot.back());

    let mut robot = shown_overlay_robot();
    assert!(robot.back());
    assert!(!robot.back(), "already leaving");
}

#[test]
fn keyboard_pushes_the_overlay_back_into_view() {
    let mut robot = shown_overlay_robot();

    robot.set_safe_zone(phone_safe_zone_with_keyboard(1200.0));

    assert_eq!(
        robot.take_effects(),
        vec![SurfaceEffect::OverlayPlaced {
            message_id: MessageId(1),
            placement: PlacementResult {
                x: 16.0,
                y: 804.0,
                opens_above: true,
            },
        }]
    );
}

#[test]
fn existing_reaction_is_highlighted_on_activation() {
    let mut surface = standard_surface();
    surface.set_reactions(
        MessageId(1),
        ResolvedReactions::resolve(&[
            RawReaction::numeric(Sender::Me, 2000, 1),
            RawReaction::numeric(Sender::Me, 2003, 2),
        ]),
    );
    let mut robot = SurfaceRobot::new(surface);

    robot.long_press(INCOMING_BUBBLE.center());

    let selected = robot
        .surface()
        .overlay()
        .activation()
        .and_then(|activation| activation.selected_reaction());
    assert_eq!(selected, Some(ReactionKind::Laugh));
}

#[test]
fn cancelled_reply_swipe_never_commits() {
    let mut robot = SurfaceRobot::new(standard_surface());
    let start = INCOMING_BUBBLE.center();

    robot.drag_and_hold(start, right_of(start, 90.0), 6);
    assert!(robot.send(PointerEventKind::Cancel, right_of(start, 90.0)));
    assert!(robot.wait_for_idle());

    assert!(robot
        .effects()
        .iter()
        .all(|effect| !matches!(effect, SurfaceEffect::ReplyCommitted { .. })));
}

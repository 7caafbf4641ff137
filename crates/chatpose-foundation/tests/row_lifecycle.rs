//! Rows driven by real classifier output and settled on a frame clock.

use chatpose_foundation::prelude::*;
use chatpose_testing::{assert_approx_eq, FrameDriver};
use chatpose_ui_graphics::{Point, Rect};

const SLOT: RowSlot = RowSlot(7);

fn arena_with(info: MessageInfo) -> RowArena {
    let mut arena = RowArena::new(SwipeConfig::default());
    arena.bind(SLOT, info, Rect::new(0.0, 0.0, 1080.0, 96.0), 500.0);
    arena
}

/// Feeds horizontal steps through the classifier into the row.
fn swipe(arena: &mut RowArena, info: MessageInfo, steps: &[f32]) -> (GestureSession, Vec<SwipeEffect>) {
    let classifier = GestureClassifier::default();
    let mut session = GestureSession::new(1, info, Point::new(540.0, 48.0));
    let mut effects = Vec::new();
    for &dx in steps {
        if let Some(event) = classifier.on_sample_update(&mut session, Point::new(dx, 0.0)) {
            if let Some(row) = arena.get_mut(SLOT) {
                effects.extend(row.apply(event));
            }
        }
    }
    (session, effects)
}

fn release(arena: &mut RowArena, session: &GestureSession) -> Vec<SwipeEffect> {
    let classifier = GestureClassifier::default();
    match (classifier.on_release(session), arena.get_mut(SLOT)) {
        (Some(event), Some(row)) => row.apply(event).into_vec(),
        _ => Vec::new(),
    }
}

#[test]
fn outgoing_reply_commits_and_settles_on_frames() {
    let info = MessageInfo::outgoing(10);
    let mut arena = arena_with(info);

    let (session, effects) = swipe(&mut arena, info, &[-10.0, -30.0, -30.0, -30.0]);

    assert_eq!(session.swipe_kind(), Some(SwipeKind::Reply));
    assert_eq!(
        effects,
        vec![SwipeEffect::CommitEligible {
            message_id: MessageId(10)
        }]
    );
    let value = arena.get(SLOT).map(|row| row.reply().value()).unwrap_or_default();
    assert_approx_eq(value, -72.0, 1e-3, "reply clamps at threshold * max ratio");

    let committed = release(&mut arena, &session);
    assert_eq!(
        committed,
        vec![SwipeEffect::ReplyCommitted {
            message_id: MessageId(10)
        }]
    );

    let mut driver = FrameDriver::new(0);
    let (settled, finished) = driver.pump_until_settled(&mut arena);
    assert!(finished);
    assert_eq!(
        settled,
        vec![SwipeEffect::Settled {
            message_id: MessageId(10),
            kind: SwipeKind::Reply
        }]
    );
    assert!(arena.get(SLOT).is_some_and(|row| row.is_at_rest()));
}

#[test]
fn recycling_mid_settle_drops_the_animation() {
    let info = MessageInfo::incoming(20);
    let mut arena = arena_with(info);
    let (session, _) = swipe(&mut arena, info, &[20.0, 20.0, 20.0]);
    release(&mut arena, &session);

    let mut driver = FrameDriver::new(0);
    let three_frames = 3 * driver.frame_nanos();
    driver.advance_by(&mut arena, three_frames);
    assert!(arena.is_animating());

    let outcome = arena.bind(
        SLOT,
        MessageInfo::incoming(21),
        Rect::new(0.0, 0.0, 1080.0, 96.0),
        500.0,
    );

    assert_eq!(
        outcome,
        BindOutcome::Recycled {
            previous: MessageId(20)
        }
    );
    assert!(!arena.is_animating());
    let (effects, finished) = driver.pump_until_settled(&mut arena);
    assert!(finished);
    assert!(effects.is_empty(), "no settle is reported for the new message");
}

#[test]
fn locked_outgoing_row_reveals_date_toward_center() {
    let info = MessageInfo::outgoing(30).with_reply_allowed(false);
    let mut arena = arena_with(info);

    let (session, effects) = swipe(&mut arena, info, &[-12.0, -24.0, -24.0]);

    assert_eq!(session.swipe_kind(), Some(SwipeKind::DateReveal));
    assert!(effects.is_empty());
    let progress = arena
        .get(SLOT)
        .map(|row| row.date_reveal().progress())
        .unwrap_or_default();
    assert_approx_eq(progress, 0.5, 1e-4, "60 of 120 toward center");

    assert!(release(&mut arena, &session).is_empty());
    let mut driver = FrameDriver::new(0);
    let (effects, finished) = driver.pump_until_settled(&mut arena);
    assert!(finished);
    assert_eq!(
        effects,
        vec![SwipeEffect::Settled {
            message_id: MessageId(30),
            kind: SwipeKind::DateReveal
        }]
    );
}

#[test]
fn scroll_classification_leaves_rows_untouched() {
    let info = MessageInfo::incoming(40);
    let mut arena = arena_with(info);
    let classifier = GestureClassifier::default();
    let mut session = GestureSession::new(1, info, Point::new(100.0, 48.0));

    let event = classifier.on_sample_update(&mut session, Point::new(6.0, 12.0));

    assert_eq!(event, Some(ClassificationEvent::ScrollClaimed));
    assert!(event.is_some_and(|event| !event.consumes_input()));
    if let (Some(event), Some(row)) = (event, arena.get_mut(SLOT)) {
        assert!(row.apply(event).is_empty());
    }
    assert!(arena.get(SLOT).is_some_and(|row| row.is_at_rest()));
}

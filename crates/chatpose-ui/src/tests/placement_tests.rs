use super::*;
use chatpose_ui_graphics::{EdgeInsets, Rect, Size};
use proptest::prelude::*;

const PHONE: Size = Size {
    width: 1080.0,
    height: 2000.0,
};

fn status_and_nav_bars() -> SafeZone {
    SafeZone::from_insets(EdgeInsets::from_components(0.0, 40.0, 0.0, 100.0))
}

fn placer() -> AnchoredOverlayPlacer {
    AnchoredOverlayPlacer::default()
}

#[test]
fn opens_above_when_there_is_room() {
    let anchor = Rect::from_ltrb(20.0, 500.0, 220.0, 560.0);

    let result = placer().place(
        anchor,
        &status_and_nav_bars(),
        Size::new(280.0, 220.0),
        AlignEdge::Start,
        PHONE,
    );

    assert_eq!(
        result,
        PlacementResult {
            x: 20.0,
            y: 268.0,
            opens_above: true
        }
    );
}

#[test]
fn opens_below_when_above_is_too_short() {
    let anchor = Rect::from_ltrb(20.0, 100.0, 220.0, 160.0);

    let result = placer().place(
        anchor,
        &status_and_nav_bars(),
        Size::new(280.0, 220.0),
        AlignEdge::Start,
        PHONE,
    );

    assert!(!result.opens_above);
    assert_eq!(result.y, 172.0);
}

#[test]
fn pins_to_usable_top_when_neither_side_fits() {
    let viewport = Size::new(400.0, 600.0);
    let anchor = Rect::from_ltrb(20.0, 100.0, 220.0, 160.0);
    let overlay = Size::new(280.0, 400.0);

    let result = placer().place(anchor, &status_and_nav_bars(), overlay, AlignEdge::Start, viewport);

    assert_eq!(
        result,
        PlacementResult {
            x: 20.0,
            y: 56.0,
            opens_above: false
        }
    );
    let usable = status_and_nav_bars().usable_bounds(viewport, 16.0);
    assert!(usable.contains_rect(&result.rect(overlay), 0.001));
}

#[test]
fn center_in_band_opens_toward_the_anchor_half() {
    let centered = AnchoredOverlayPlacer::new(
        PlacementConfig::default().with_fallback(FallbackPolicy::CenterInBand),
    );
    let viewport = Size::new(400.0, 600.0);
    let overlay = Size::new(280.0, 400.0);

    let high = centered.place(
        Rect::from_ltrb(20.0, 100.0, 220.0, 160.0),
        &status_and_nav_bars(),
        overlay,
        AlignEdge::Start,
        viewport,
    );
    let low = centered.place(
        Rect::from_ltrb(20.0, 400.0, 220.0, 460.0),
        &status_and_nav_bars(),
        overlay,
        AlignEdge::Start,
        viewport,
    );

    assert_eq!(high.y, 70.0);
    assert!(!high.opens_above);
    assert_eq!(low.y, 70.0);
    assert!(low.opens_above);
}

#[test]
fn end_alignment_lines_up_right_edges_then_clamps() {
    let zone = status_and_nav_bars();
    let overlay = Size::new(280.0, 220.0);

    let inside = placer().place(
        Rect::from_ltrb(700.0, 500.0, 1060.0, 560.0),
        &zone,
        overlay,
        AlignEdge::End,
        PHONE,
    );
    let past_margin = placer().place(
        Rect::from_ltrb(700.0, 500.0, 1075.0, 560.0),
        &zone,
        overlay,
        AlignEdge::End,
        PHONE,
    );

    assert_eq!(inside.x, 780.0);
    assert_eq!(past_margin.x, 784.0);
}

#[test]
fn overlay_wider_than_usable_band_clamps_to_left() {
    let result = placer().place(
        Rect::from_ltrb(300.0, 900.0, 500.0, 960.0),
        &status_and_nav_bars(),
        Size::new(2000.0, 200.0),
        AlignEdge::End,
        PHONE,
    );
    assert_eq!(result.x, 16.0);
}

#[test]
fn keyboard_pushes_overlay_above() {
    let zone = SafeZone::resolve(EdgeInsets::from_components(0.0, 40.0, 0.0, 24.0), 900.0, 56.0);
    let anchor = Rect::from_ltrb(20.0, 700.0, 220.0, 760.0);

    let result = placer().place(anchor, &zone, Size::new(280.0, 320.0), AlignEdge::Start, PHONE);

    assert!(result.opens_above);
    assert_eq!(result.y, 700.0 - 12.0 - 320.0);
}

#[test]
fn alignment_maps_to_edge() {
    use chatpose_foundation::MessageAlignment;
    assert_eq!(AlignEdge::for_alignment(MessageAlignment::Incoming), AlignEdge::Start);
    assert_eq!(AlignEdge::for_alignment(MessageAlignment::Outgoing), AlignEdge::End);
}

prop_compose! {
    fn placement_inputs()(
        viewport_w in 320.0f32..1600.0,
        viewport_h in 600.0f32..2800.0,
        top in 0.0f32..150.0,
        bottom in 0.0f32..300.0,
        side in 0.0f32..40.0,
        anchor_x in -100.0f32..1700.0,
        anchor_y in -100.0f32..2900.0,
        anchor_w in 20.0f32..400.0,
        anchor_h in 20.0f32..300.0,
        width_fraction in 0.05f32..1.0,
        height_fraction in 0.05f32..1.0,
        end in any::<bool>(),
    ) -> (Rect, SafeZone, Size, AlignEdge, Size) {
        let viewport = Size::new(viewport_w, viewport_h);
        let zone = SafeZone::from_insets(EdgeInsets::from_components(side, top, side, bottom));
        let usable = zone.usable_bounds(viewport, 16.0);
        let overlay = Size::new(usable.width * width_fraction, usable.height * height_fraction);
        let anchor = Rect::new(anchor_x, anchor_y, anchor_w, anchor_h);
        let edge = if end { AlignEdge::End } else { AlignEdge::Start };
        (anchor, zone, overlay, edge, viewport)
    }
}

proptest! {
    #[test]
    fn placement_stays_inside_usable_bounds(
        (anchor, zone, overlay, edge, viewport) in placement_inputs(),
        center in any::<bool>(),
    ) {
        let fallback = if center { FallbackPolicy::CenterInBand } else { FallbackPolicy::PinToTop };
        let placer = AnchoredOverlayPlacer::new(PlacementConfig::default().with_fallback(fallback));
        let result = placer.place(anchor, &zone, overlay, edge, viewport);
        let usable = zone.usable_bounds(viewport, 16.0);
        prop_assert!(usable.contains_rect(&result.rect(overlay), 0.01));
    }

    #[test]
    fn room_above_always_opens_above(
        (anchor, zone, overlay, edge, viewport) in placement_inputs(),
    ) {
        let usable = zone.usable_bounds(viewport, 16.0);
        let space_above = anchor.top() - usable.top() - 12.0;
        prop_assume!(space_above >= overlay.height);
        let result = placer().place(anchor, &zone, overlay, edge, viewport);
        prop_assert!(result.opens_above);
    }

    #[test]
    fn placement_is_deterministic(
        (anchor, zone, overlay, edge, viewport) in placement_inputs(),
    ) {
        let first = placer().place(anchor, &zone, overlay, edge, viewport);
        let second = placer().place(anchor, &zone, overlay, edge, viewport);
        prop_assert_eq!(first, second);
    }
}

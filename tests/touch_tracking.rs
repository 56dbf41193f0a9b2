use std::rc::Rc;

use serde_json::json;
use touch_sprite_detector::ingest::{EndBatch, MoveBatch};
use touch_sprite_detector::model::{Point, QueryTarget, RawTouch, SurfaceRect, TouchId};
use touch_sprite_detector::opcode::{self, BlockValue, Opcode};
use touch_sprite_detector::state::ViewportConfig;
use touch_sprite_detector::{TouchAction, TouchContext};
use yew::Reducible;

// Surface sitting 100px right and 50px down the page, same size as the default stage.
const SURFACE: SurfaceRect = SurfaceRect { left: 100.0, top: 50.0, width: 640.0, height: 480.0 };

fn moves(touches: &[(i32, f64, f64)]) -> TouchAction {
    TouchAction::MoveOrStart(MoveBatch {
        touches: touches
            .iter()
            .map(|&(id, x, y)| RawTouch { id: TouchId(id), pixel_x: x + SURFACE.left, pixel_y: y + SURFACE.top })
            .collect(),
        surface: SURFACE,
    })
}

fn ends(ids: &[i32], remaining: &[i32]) -> TouchAction {
    TouchAction::EndOrCancel(
        EndBatch::changed(ids.iter().copied().map(TouchId)).with_remaining(remaining.iter().copied().map(TouchId)),
    )
}

fn apply(ctx: Rc<TouchContext>, actions: Vec<TouchAction>) -> Rc<TouchContext> {
    actions.into_iter().fold(ctx, |ctx, action| ctx.reduce(action))
}

fn ids(ctx: &TouchContext) -> Vec<i32> {
    ctx.registry().ids().map(|id| id.0).collect()
}

#[test]
fn every_contact_ending_empties_the_registry() {
    let ctx = apply(
        Rc::new(TouchContext::default()),
        vec![
            moves(&[(1, 10.0, 10.0)]),
            moves(&[(1, 12.0, 11.0), (2, 300.0, 200.0)]),
            moves(&[(1, 14.0, 12.0), (2, 310.0, 190.0), (3, 600.0, 5.0)]),
            ends(&[2], &[1, 3]),
            ends(&[1, 3], &[]),
        ],
    );
    assert!(ctx.registry().is_empty());
}

#[test]
fn move_batches_prune_contacts_that_vanished() {
    let ctx = apply(
        Rc::new(TouchContext::default()),
        vec![moves(&[(1, 0.0, 0.0), (2, 5.0, 5.0), (3, 9.0, 9.0)]), moves(&[(1, 1.0, 1.0), (3, 8.0, 8.0)])],
    );
    assert_eq!(ids(&ctx), vec![1, 3]);
}

#[test]
fn late_end_events_are_harmless() {
    let ctx = apply(
        Rc::new(TouchContext::default()),
        vec![moves(&[(7, 0.0, 0.0)]), ends(&[7], &[]), ends(&[7], &[]), moves(&[(8, 1.0, 1.0)])],
    );
    assert_eq!(ids(&ctx), vec![8]);
}

#[test]
fn stale_contact_is_dropped_at_the_next_end_only_when_pruning() {
    let script = || {
        vec![
            moves(&[(1, 0.0, 0.0), (2, 50.0, 50.0)]),
            // contact 2 lifts without its own end event; contact 1 then ends normally
            ends(&[1], &[]),
        ]
    };
    let pruning = apply(Rc::new(TouchContext::new(ViewportConfig::default(), true)), script());
    assert!(pruning.registry().is_empty());

    let faithful = apply(Rc::new(TouchContext::new(ViewportConfig::default(), false)), script());
    assert_eq!(ids(&faithful), vec![2]);
}

#[test]
fn surface_corners_and_center() {
    let ctx = apply(
        Rc::new(TouchContext::default()),
        vec![moves(&[(1, 0.0, 0.0), (2, 320.0, 240.0), (3, 640.0, 480.0)])],
    );
    let reg = ctx.registry();
    assert_eq!(reg.get(TouchId(1)), Some(Point::new(-320.0, 240.0)));
    assert_eq!(reg.get(TouchId(2)), Some(Point::new(0.0, 0.0)));
    assert_eq!(reg.get(TouchId(3)), Some(Point::new(320.0, -240.0)));
}

#[test]
fn configured_stage_scales_new_touches() {
    let mut ctx = TouchContext::default();
    let sprite = QueryTarget::centered(0.0, 0.0, 10.0, 10.0);
    opcode::run(&mut ctx, Opcode::SetStageSize, &json!({"WIDTH": 1280, "HEIGHT": "960"}), None).unwrap();
    let ctx = Rc::new(ctx).reduce(moves(&[(1, 480.0, 360.0)]));
    assert_eq!(ctx.registry().get(TouchId(1)), Some(Point::new(320.0, -240.0)));
    assert_eq!(opcode::report(&ctx, Opcode::GetStageWidth, None), Ok(BlockValue::Number(1280.0)));
    assert_eq!(opcode::report(&ctx, Opcode::ClosestFingerX, Some(&sprite)), Ok(BlockValue::Number(320.0)));
    assert_eq!(opcode::report(&ctx, Opcode::DistanceToClosestFinger, Some(&sprite)), Ok(BlockValue::Number(400.0)));
}

#[test]
fn sprite_queries_through_opcodes() {
    let sprite = QueryTarget::centered(0.0, 0.0, 20.0, 20.0);
    let empty = TouchContext::default();
    assert_eq!(opcode::report(&empty, Opcode::IsTouchingSprite, Some(&sprite)), Ok(BlockValue::Bool(false)));
    assert_eq!(opcode::report(&empty, Opcode::DistanceToClosestFinger, Some(&sprite)), Ok(BlockValue::Number(-1.0)));
    assert_eq!(opcode::report(&empty, Opcode::ClosestFingerX, Some(&sprite)), Ok(BlockValue::Number(0.0)));
    assert_eq!(opcode::report(&empty, Opcode::ClosestFingerY, Some(&sprite)), Ok(BlockValue::Number(0.0)));

    // (325, 235) on the surface is (5, 5) on the stage; (335, 235) is (15, 5).
    let inside = Rc::new(TouchContext::default()).reduce(moves(&[(1, 325.0, 235.0)]));
    assert_eq!(opcode::report(&inside, Opcode::IsTouchingSprite, Some(&sprite)), Ok(BlockValue::Bool(true)));
    let outside = Rc::new(TouchContext::default()).reduce(moves(&[(1, 335.0, 235.0)]));
    assert_eq!(opcode::report(&outside, Opcode::IsTouchingSprite, Some(&sprite)), Ok(BlockValue::Bool(false)));
    assert_eq!(opcode::report(&outside, Opcode::ClosestFingerY, Some(&sprite)), Ok(BlockValue::Number(5.0)));

    // touches at (3, 4) and (0, 0): the closest is at distance 0
    let two = Rc::new(TouchContext::default()).reduce(moves(&[(1, 323.0, 236.0), (2, 320.0, 240.0)]));
    assert_eq!(opcode::report(&two, Opcode::DistanceToClosestFinger, Some(&sprite)), Ok(BlockValue::Number(0.0)));
}

#[test]
fn unparsable_stage_width_reports_no_finger() {
    let mut ctx = TouchContext::default();
    opcode::run(&mut ctx, Opcode::SetStageSize, &json!({"WIDTH": "abc", "HEIGHT": 480}), None).unwrap();
    assert!(ctx.stage_width().is_nan());
    let ctx = Rc::new(ctx).reduce(moves(&[(1, 100.0, 10.0)]));
    assert_eq!(ctx.registry().len(), 1);

    let sprite = QueryTarget::centered(0.0, 0.0, 20.0, 20.0);
    assert_eq!(opcode::report(&ctx, Opcode::DistanceToClosestFinger, Some(&sprite)), Ok(BlockValue::Number(-1.0)));
    assert_eq!(opcode::report(&ctx, Opcode::ClosestFingerX, Some(&sprite)), Ok(BlockValue::Number(0.0)));
    assert_eq!(opcode::report(&ctx, Opcode::ClosestFingerY, Some(&sprite)), Ok(BlockValue::Number(0.0)));
    assert_eq!(opcode::report(&ctx, Opcode::IsTouchingSprite, Some(&sprite)), Ok(BlockValue::Bool(false)));
}

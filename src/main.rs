//! Paper Fold demo entry point
//!
//! Replays a scripted multi-fold drag session against the standard sheet
//! and logs the resulting paper/mask placements. Run with
//! `RUST_LOG=debug` to watch pool and lock activity.

use glam::Vec2;

use paper_fold::sim::{DragEvent, Sheet};
use paper_fold::tuning::FoldTuning;
use paper_fold::viewport::Viewport;

/// Drive one pointer gesture: begin, interpolate screen positions, end
fn drag(
    sheet: &mut Sheet,
    viewport: &Viewport,
    point: usize,
    from_screen: Vec2,
    to_screen: Vec2,
    steps: u32,
) {
    sheet.handle(DragEvent::Begin { point });
    for i in 1..=steps {
        let t = i as f32 / steps as f32;
        let screen = from_screen.lerp(to_screen, t);
        sheet.handle(DragEvent::Move {
            point,
            position: viewport.screen_to_sheet(screen),
        });
    }
    sheet.handle(DragEvent::End { point });
}

fn report(sheet: &Sheet) {
    for (i, point) in sheet.points().iter().enumerate() {
        log::info!(
            "point {i} ({:?}): state {:?}, position ({:+.3}, {:+.3})",
            point.kind(),
            point.state(),
            point.position().x,
            point.position().y,
        );
    }
    for (i, visual) in sheet.visuals().iter().enumerate() {
        if !visual.is_active() {
            continue;
        }
        let paper = visual.paper();
        let mask = visual.mask();
        log::info!(
            "visual {i} (order {}): paper ({:+.3}, {:+.3}) @ {:.1}°, mask ({:+.3}, {:+.3}) @ {:.1}°, shadow {:.3}",
            visual.stack_order(),
            paper.position.x,
            paper.position.y,
            paper.angle.to_degrees(),
            mask.position.x,
            mask.position.y,
            mask.angle.to_degrees(),
            visual.shadow_alpha(),
        );
    }
}

fn main() {
    env_logger::init();

    let tuning = FoldTuning::default();
    let mut sheet = Sheet::standard(&tuning);
    // 800x800 canvas, 600px sheet
    let viewport = Viewport::centered(800.0, 800.0, 600.0);

    // Fold the top-right corner past the center and leave it parked
    let corner_rest = viewport.sheet_to_screen(Vec2::new(0.5, 0.5));
    drag(
        &mut sheet,
        &viewport,
        0,
        corner_rest,
        viewport.sheet_to_screen(Vec2::new(-0.2, -0.2)),
        24,
    );

    log::info!("--- after parking the top-right corner ---");
    report(&sheet);

    // The left edge folds rightward and is stopped at the parked corner
    let edge_rest = viewport.sheet_to_screen(Vec2::new(-0.5, 0.0));
    drag(
        &mut sheet,
        &viewport,
        5,
        edge_rest,
        viewport.sheet_to_screen(Vec2::new(0.3, 0.0)),
        16,
    );

    log::info!("--- after the left edge ran into the corner's border ---");
    report(&sheet);

    // Return the corner home; it releases its slot and neighbor locks
    let parked = viewport.sheet_to_screen(sheet.point(0).position());
    drag(&mut sheet, &viewport, 0, parked, corner_rest, 24);

    log::info!("--- after returning the corner to rest ---");
    report(&sheet);
}

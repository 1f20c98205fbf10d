use tui_racer::core::{ScriptedSpawner, TrackSimulator};
use tui_racer::frontend::Frontend;
use tui_racer::term::{HudStatus, TerminalRenderer, TrackView, Viewport};
use tui_racer::types::{GameConfig, InputCommand};

const CLEAR_ALL: &str = "\x1b[2J";

fn frontend() -> Frontend<Vec<u8>> {
    Frontend::new(TerminalRenderer::with_writer(Vec::new()), TrackView::default())
}

fn sim() -> TrackSimulator<ScriptedSpawner> {
    let cfg = GameConfig::default()
        .with_track_width(15)
        .with_track_height(8);
    TrackSimulator::new(cfg, ScriptedSpawner::new([Some(3), Some(9)])).unwrap()
}

fn clears(out: &[u8]) -> usize {
    String::from_utf8_lossy(out).matches(CLEAR_ALL).count()
}

#[test]
fn only_the_first_frame_is_a_full_redraw() {
    let mut fe = frontend();
    let mut sim = sim();
    let vp = Viewport::new(40, 16);

    for _ in 0..5 {
        let _ = sim.tick(InputCommand::None);
        fe.present_at(&sim, HudStatus::default(), vp).unwrap();
    }

    assert_eq!(fe.renderer().frames(), 5);
    assert_eq!(clears(fe.renderer().writer()), 1);
    assert_eq!(fe.viewport(), Some(vp));
}

#[test]
fn resize_forces_a_full_redraw() {
    let mut fe = frontend();
    let mut sim = sim();

    let _ = sim.tick(InputCommand::None);
    fe.present_at(&sim, HudStatus::default(), Viewport::new(40, 16))
        .unwrap();
    let _ = sim.tick(InputCommand::None);
    fe.present_at(&sim, HudStatus::default(), Viewport::new(60, 20))
        .unwrap();
    let _ = sim.tick(InputCommand::None);
    fe.present_at(&sim, HudStatus::default(), Viewport::new(60, 20))
        .unwrap();

    assert_eq!(clears(fe.renderer().writer()), 2);
    assert_eq!(fe.viewport(), Some(Viewport::new(60, 20)));
}

#[test]
fn game_over_frame_is_written() {
    let mut fe = frontend();
    let sim = sim();
    let vp = Viewport::new(40, 16);

    fe.present_at(&sim, HudStatus::default(), vp).unwrap();
    fe.game_over_at(77, vp).unwrap();

    let out = String::from_utf8_lossy(fe.renderer().writer()).into_owned();
    assert!(out.contains("GAME"));
    assert_eq!(fe.renderer().frames(), 2);
}

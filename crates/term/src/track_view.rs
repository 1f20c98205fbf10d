//! TrackView: maps a [`RunSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). The framebuffer is sized to the viewport;
//! anything that does not fit is clipped by the framebuffer's bounds checks.
//!
//! Layout, top to bottom:
//!
//! ```text
//! ╔══════════════════════════════════════╗
//!  Score: 00042 | Lives: 3 | A/D or ←/→ to move | Q to quit
//! ╠══════════════════════════════════════╣
//!          |            ¦            |
//!          |   X        ¦            |
//!          |                 A       |
//!          |                         |
//! ╚══════════════════════════════════════╝
//! ```

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::core::RunSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// HUD state that does not come from the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudStatus {
    /// The keyboard failed mid-run.
    pub input_degraded: bool,
}

/// Rows of HUD drawn above the first track row.
pub const HEADER_ROWS: u16 = 3;

pub const PLAYER_GLYPH: char = 'A';
pub const CRASH_GLYPH: char = '*';
pub const OBSTACLE_GLYPH: char = 'X';
pub const BORDER_GLYPH: char = '|';
pub const LANE_MARKER_GLYPH: char = '¦';

const CONTROLS_HINT: &str = "A/D or ←/→ to move | Q to quit";

/// Terminal renderer for the track.
#[derive(Debug, Clone)]
pub struct TrackView {
    lane_markers: bool,
}

impl Default for TrackView {
    fn default() -> Self {
        Self { lane_markers: true }
    }
}

const FRAME: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));
const HUD: CellStyle = CellStyle::fg(Rgb::new(235, 235, 235)).bold();
const HUD_WARN: CellStyle = CellStyle::fg(Rgb::new(255, 170, 60)).bold();
const ROAD: CellStyle = CellStyle::fg(Rgb::new(120, 120, 120));
const MARKER: CellStyle = CellStyle::fg(Rgb::new(150, 150, 110)).dim();
const OBSTACLE: CellStyle = CellStyle::fg(Rgb::new(230, 70, 60)).bold();
const PLAYER: CellStyle = CellStyle::fg(Rgb::new(80, 200, 255)).bold();
const CRASH: CellStyle = CellStyle::fg(Rgb::new(255, 220, 0)).bold();

impl TrackView {
    pub fn with_lane_markers(mut self, enabled: bool) -> Self {
        self.lane_markers = enabled;
        self
    }

    /// Render into a fresh framebuffer.
    pub fn render(&self, snap: &RunSnapshot, hud: HudStatus, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    /// Render the current run into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers keep one framebuffer
    /// and it only reallocates when the terminal grows.
    pub fn render_into(
        &self,
        snap: &RunSnapshot,
        hud: HudStatus,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let track_w = snap.track_width;
        let track_h = snap.track_height;

        // Narrow terminals: the track starts at column 0 and the right side
        // is clipped. Short ones lose the bottom rows.
        let track_x = viewport.width.saturating_sub(track_w) / 2;

        self.draw_header(fb, snap, hud, viewport.width, 0);

        let track_y = HEADER_ROWS;
        for row in 0..track_h {
            let y = track_y.saturating_add(row);
            self.draw_track_row(fb, snap, track_x, y, row);
        }

        let bottom = track_y.saturating_add(track_h);
        draw_frame_line(fb, bottom, viewport.width, '╚', '═', '╝');
    }

    fn draw_header(
        &self,
        fb: &mut FrameBuffer,
        snap: &RunSnapshot,
        hud: HudStatus,
        width: u16,
        y: u16,
    ) {
        draw_frame_line(fb, y, width, '╔', '═', '╗');

        let mut line = ArrayString::<160>::new();
        let _ = write!(
            line,
            " Score: {:05} | Lives: {} | {} ",
            snap.score, snap.lives, CONTROLS_HINT
        );
        fb.put_str(0, y.saturating_add(1), &line, HUD);

        if hud.input_degraded {
            let x = line.chars().count() as u16;
            fb.put_str(x, y.saturating_add(1), "| INPUT OFFLINE ", HUD_WARN);
        }

        draw_frame_line(fb, y.saturating_add(2), width, '╠', '═', '╣');
    }

    fn draw_track_row(&self, fb: &mut FrameBuffer, snap: &RunSnapshot, x0: u16, y: u16, row: u16) {
        let w = snap.track_width;
        if w < 2 {
            return;
        }

        fb.put_char(x0, y, BORDER_GLYPH, FRAME);
        fb.hline(x0.saturating_add(1), y, w - 2, ' ', ROAD);
        fb.put_char(x0.saturating_add(w - 1), y, BORDER_GLYPH, FRAME);

        let center = w / 2;
        if self.lane_markers && w >= 5 && marker_visible(row, snap.ticks) {
            fb.put_char(x0.saturating_add(center), y, LANE_MARKER_GLYPH, MARKER);
        }

        for obstacle in snap.obstacles.iter().filter(|o| o.row == row) {
            fb.put_char(x0.saturating_add(obstacle.lane), y, OBSTACLE_GLYPH, OBSTACLE);
        }

        if row == snap.player_row {
            let (ch, style) = if snap.hit_this_tick {
                (CRASH_GLYPH, CRASH)
            } else {
                (PLAYER_GLYPH, PLAYER)
            };
            fb.put_char(x0.saturating_add(snap.player_lane), y, ch, style);
        }
    }

    /// Final screen shown once the run is over.
    pub fn render_game_over_into(&self, score: u32, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let mut score_line = ArrayString::<48>::new();
        let _ = write!(score_line, "Final score: {}", score);

        let lines: [(&str, CellStyle); 3] = [
            ("GAME OVER", CRASH),
            (score_line.as_str(), HUD),
            ("Thanks for playing!", FRAME),
        ];

        let top = viewport.height / 3;
        for (i, (text, style)) in lines.iter().enumerate() {
            let len = text.chars().count() as u16;
            let x = viewport.width.saturating_sub(len) / 2;
            fb.put_str(x, top.saturating_add(i as u16), text, *style);
        }
    }
}

/// Dashed centre line that scrolls toward the player one row per tick.
fn marker_visible(row: u16, ticks: u32) -> bool {
    (row as u32).wrapping_sub(ticks) % 4 < 2
}

fn draw_frame_line(fb: &mut FrameBuffer, y: u16, width: u16, left: char, fill: char, right: char) {
    if width < 2 {
        return;
    }
    fb.put_char(0, y, left, FRAME);
    fb.hline(1, y, width - 2, fill, FRAME);
    fb.put_char(width - 1, y, right, FRAME);
}

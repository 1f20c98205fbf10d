//! Terminal frontend: snapshot → view → batched flush, once per frame.

use std::io::{self, Write};

use anyhow::Result;

use crate::core::{RunSnapshot, Spawner, TrackSimulator};
use crate::term::{FrameBuffer, HudStatus, TerminalRenderer, TrackView, Viewport};

/// Fallback when the terminal size cannot be queried.
pub const FALLBACK_VIEWPORT: Viewport = Viewport {
    width: 80,
    height: 24,
};

pub struct Frontend<W: Write = io::Stdout> {
    renderer: TerminalRenderer<W>,
    view: TrackView,
    fb: FrameBuffer,
    snap: RunSnapshot,
    viewport: Option<Viewport>,
}

impl Frontend<io::Stdout> {
    pub fn stdout(view: TrackView) -> Self {
        Self::new(TerminalRenderer::new(), view)
    }

    /// Present using the terminal's current size (re-read every frame).
    pub fn present<S: Spawner>(&mut self, sim: &TrackSimulator<S>, hud: HudStatus) -> Result<()> {
        let viewport = self.current_viewport();
        self.present_at(sim, hud, viewport)
    }

    pub fn game_over(&mut self, score: u32) -> Result<()> {
        let viewport = self.current_viewport();
        self.game_over_at(score, viewport)
    }

    fn current_viewport(&self) -> Viewport {
        match crossterm::terminal::size() {
            Ok((w, h)) => Viewport::new(w, h),
            Err(_) => self.viewport.unwrap_or(FALLBACK_VIEWPORT),
        }
    }
}

impl<W: Write> Frontend<W> {
    pub fn new(renderer: TerminalRenderer<W>, view: TrackView) -> Self {
        Self {
            renderer,
            view,
            fb: FrameBuffer::new(0, 0),
            snap: RunSnapshot::default(),
            viewport: None,
        }
    }

    pub fn renderer(&self) -> &TerminalRenderer<W> {
        &self.renderer
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn present_at<S: Spawner>(
        &mut self,
        sim: &TrackSimulator<S>,
        hud: HudStatus,
        viewport: Viewport,
    ) -> Result<()> {
        self.track_resize(viewport);
        sim.snapshot_into(&mut self.snap);
        self.view
            .render_into(&self.snap, hud, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }

    pub fn game_over_at(&mut self, score: u32, viewport: Viewport) -> Result<()> {
        self.track_resize(viewport);
        self.view
            .render_game_over_into(score, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }

    fn track_resize(&mut self, viewport: Viewport) {
        if self.viewport != Some(viewport) {
            if let Some(old) = self.viewport {
                log::debug!(
                    "terminal resized {}x{} -> {}x{}",
                    old.width,
                    old.height,
                    viewport.width,
                    viewport.height
                );
            }
            self.renderer.invalidate();
            self.viewport = Some(viewport);
        }
    }
}

//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Jewel, BOARD_COLUMNS, BOARD_ROWS};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const FLASH_FG: Rgb = Rgb::new(255, 255, 255);

const KEY_HINTS: [&str; 6] = [
    "<- ->  shift",
    "up     rotate",
    "down   drop",
    "p      pause",
    "r      restart",
    "q      quit",
];

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

/// Terminal renderer for the Columns well.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let well_w = BOARD_COLUMNS as u16 * self.cell_w;
        let well_h = BOARD_ROWS as u16;
        let frame_w = well_w + 2;
        let frame_h = well_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            well_w,
            well_h,
            CellStyle::plain(WELL_BG, WELL_BG).cell(' '),
        );
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..BOARD_ROWS as usize {
            for column in 0..BOARD_COLUMNS as usize {
                let (ch, style) = match snap.jewel_at(column, row) {
                    _ if snap.is_flashing(column, row) => {
                        ('█', CellStyle::plain(FLASH_FG, WELL_BG).bold())
                    }
                    Some(jewel) => ('█', CellStyle::plain(jewel_color(jewel), WELL_BG)),
                    None => ('·', CellStyle::plain(Rgb::new(90, 90, 100), WELL_BG).dim()),
                };
                self.fill_cell(fb, start_x, start_y, column as u16, row as u16, ch, style);
            }
        }

        // The faller is already painted on the board; redraw it so it stands out.
        // A frozen faller's rows can disagree with the board, which wins.
        if let Some(faller) = snap.faller.filter(|f| !f.frozen) {
            let ch = if faller.landed { '▓' } else { '█' };
            for (&row, &jewel) in faller.rows.iter().zip(faller.jewels.iter()) {
                if row < 0 || row >= BOARD_ROWS as i8 {
                    continue;
                }
                let style = CellStyle::plain(jewel_color(jewel), WELL_BG).bold();
                self.fill_cell(fb, start_x, start_y, faller.column as u16, row as u16, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.paused {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        } else if snap.game_over {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        column: u16,
        row: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + column * self.cell_w;
        let py = start_y + 1 + row;
        fb.fill_rect(px, py, self.cell_w, 1, style.cell(ch));
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::plain(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "COLUMNS", label);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "CHAIN", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.cascades, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "FALLER", label);
        y = y.saturating_add(1);
        match snap.faller {
            Some(faller) => {
                let mut x = panel_x;
                for jewel in faller.jewels {
                    let style = CellStyle::plain(jewel_color(jewel), PANEL_BG).bold();
                    fb.set(x, y, style.cell(jewel.letter()));
                    x = x.saturating_add(1);
                }
            }
            None => {
                fb.put_str(panel_x, y, "-", value);
            }
        }
        y = y.saturating_add(2);

        for line in KEY_HINTS {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }
}

/// Display color for a jewel.
pub fn jewel_color(jewel: Jewel) -> Rgb {
    match jewel {
        Jewel::Red => Rgb::new(255, 0, 0),
        Jewel::Green => Rgb::new(0, 255, 0),
        Jewel::Blue => Rgb::new(0, 0, 255),
        Jewel::Yellow => Rgb::new(255, 255, 0),
        Jewel::Purple => Rgb::new(149, 0, 255),
        Jewel::Orange => Rgb::new(255, 123, 0),
        Jewel::Cyan => Rgb::new(0, 255, 255),
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    fb.set(x, y, style.cell('┌'));
    fb.set(x + w - 1, y, style.cell('┐'));
    fb.set(x, y + h - 1, style.cell('└'));
    fb.set(x + w - 1, y + h - 1, style.cell('┘'));

    fb.fill_rect(x + 1, y, w - 2, 1, style.cell('─'));
    fb.fill_rect(x + 1, y + h - 1, w - 2, 1, style.cell('─'));
    fb.fill_rect(x, y + 1, 1, h - 2, style.cell('│'));
    fb.fill_rect(x + w - 1, y + 1, 1, h - 2, style.cell('│'));
}

fn draw_overlay_text(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    text: &str,
) {
    let mid_y = start_y.saturating_add(frame_h / 2);
    let text_w = text.chars().count() as u16;
    let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    let style = CellStyle::plain(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_str(x, mid_y, text, style);
}

//! CubeView: maps a `CubeSnapshot` into a terminal framebuffer.
//!
//! The cube is drawn as an unfolded net with the top and bottom faces above and
//! below face 1:
//!
//! ```text
//!        [4]
//!   [0]  [1]  [2]  [3]
//!        [5]
//! ```
//!
//! The same layout math backs [`CubeView::sticker_at`], which turns a terminal
//! coordinate (e.g. a mouse click) back into a face/row/col.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::CubeSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, BOTTOM_FACE, CANONICAL_COLORS, FACE_DIM, NUM_FACES, TOP_FACE};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Extra state shown in the side panel that the cube itself does not own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelInfo {
    /// Color applied by the next click.
    pub brush: Color,
}

/// A single sticker address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StickerRef {
    pub face: usize,
    pub row: usize,
    pub col: usize,
}

/// Resolved screen geometry of the net for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetLayout {
    /// Top-left corner of the border.
    pub x: u16,
    pub y: u16,
    /// Border-inclusive size.
    pub frame_w: u16,
    pub frame_h: u16,
    cell_w: u16,
    cell_h: u16,
    gap: u16,
}

impl NetLayout {
    fn face_w(&self) -> u16 {
        self.cell_w * FACE_DIM as u16
    }

    fn face_h(&self) -> u16 {
        self.cell_h * FACE_DIM as u16
    }

    /// Top-left terminal cell of a face, or `None` for an invalid face index.
    pub fn face_origin(&self, face: usize) -> Option<(u16, u16)> {
        let (slot_x, slot_y) = match face {
            0..=3 => (face as u16, 1),
            TOP_FACE => (1, 0),
            BOTTOM_FACE => (1, 2),
            _ => return None,
        };
        Some((
            self.x + 1 + slot_x * (self.face_w() + self.gap),
            self.y + 1 + slot_y * (self.face_h() + self.gap),
        ))
    }

    /// Top-left terminal cell of a sticker, or `None` if it names no sticker.
    pub fn sticker_origin(&self, sticker: StickerRef) -> Option<(u16, u16)> {
        if sticker.row >= FACE_DIM || sticker.col >= FACE_DIM {
            return None;
        }
        let (fx, fy) = self.face_origin(sticker.face)?;
        Some((
            fx + sticker.col as u16 * self.cell_w,
            fy + sticker.row as u16 * self.cell_h,
        ))
    }

    /// Sticker under a terminal coordinate, if any. Gaps and borders map to `None`.
    pub fn sticker_at(&self, x: u16, y: u16) -> Option<StickerRef> {
        (0..NUM_FACES).find_map(|face| {
            let (fx, fy) = self.face_origin(face)?;
            let inside = x >= fx && x < fx + self.face_w() && y >= fy && y < fy + self.face_h();
            inside.then(|| StickerRef {
                face,
                row: ((y - fy) / self.cell_h) as usize,
                col: ((x - fx) / self.cell_w) as usize,
            })
        })
    }
}

/// A lightweight terminal renderer for the cube net.
pub struct CubeView {
    /// Sticker width in terminal columns.
    cell_w: u16,
    /// Sticker height in terminal rows.
    cell_h: u16,
    /// Blank columns/rows between adjacent faces.
    gap: u16,
    anchor_y: AnchorY,
}

impl Default for CubeView {
    fn default() -> Self {
        // 2x1 keeps stickers roughly square.
        Self {
            cell_w: 2,
            cell_h: 1,
            gap: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl CubeView {
    /// Zero sizes are bumped to 1 so hit-testing never divides by zero.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Where the net lands in `viewport`.
    pub fn layout(&self, viewport: Viewport) -> NetLayout {
        let face_w = self.cell_w * FACE_DIM as u16;
        let face_h = self.cell_h * FACE_DIM as u16;
        let frame_w = 4 * face_w + 3 * self.gap + 2;
        let frame_h = 3 * face_h + 2 * self.gap + 2;

        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        NetLayout {
            x,
            y,
            frame_w,
            frame_h,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
            gap: self.gap,
        }
    }

    /// Sticker under a terminal coordinate for this viewport.
    pub fn sticker_at(&self, viewport: Viewport, x: u16, y: u16) -> Option<StickerRef> {
        self.layout(viewport).sticker_at(x, y)
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &CubeSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_panel(snap, None, viewport, fb);
    }

    pub fn render_into_with_panel(
        &self,
        snap: &CubeSnapshot,
        panel: Option<&PanelInfo>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        let bg = CellStyle::new(Rgb::new(80, 80, 90)).on(Rgb::new(30, 30, 40));
        let border = CellStyle::new(Rgb::new(200, 200, 200));

        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            bg,
        );
        fb.draw_box(layout.x, layout.y, layout.frame_w, layout.frame_h, border);

        for (face, grid) in snap.faces.iter().enumerate() {
            for (row, stickers) in grid.iter().enumerate() {
                for (col, &color) in stickers.iter().enumerate() {
                    let Some((px, py)) = layout.sticker_origin(StickerRef { face, row, col }) else {
                        continue;
                    };
                    let style = CellStyle::new(sticker_rgb(color)).on(Rgb::new(30, 30, 40));
                    fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
                }
            }
        }

        self.draw_side_panel(fb, snap, panel, viewport, &layout);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &CubeSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_panel(
        &self,
        snap: &CubeSnapshot,
        panel: Option<&PanelInfo>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_panel(snap, panel, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &CubeSnapshot,
        panel: Option<&PanelInfo>,
        viewport: Viewport,
        layout: &NetLayout,
    ) {
        let panel_x = layout.x.saturating_add(layout.frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200));
        let dim = value.dim();

        let mut y = layout.y;
        fb.put_str(panel_x, y, "MOVES", label);
        y += 1;
        fb.put_u32(panel_x, y, snap.rotations, value);
        y += 2;

        if let Some(info) = panel {
            fb.put_str(panel_x, y, "BRUSH", label);
            y += 1;
            fb.put_str(panel_x, y, "██", CellStyle::new(sticker_rgb(info.brush)));
            fb.put_str(panel_x + 3, y, info.brush.as_str(), value);
            y += 2;
        }

        // Per face: brush key, swatch, name, misplaced count.
        fb.put_str(panel_x, y, "FACES", label);
        y += 1;
        let misplaced = snap.misplaced();
        for (face, color) in CANONICAL_COLORS.iter().enumerate() {
            if y >= viewport.height {
                return;
            }
            fb.put_u32(panel_x, y, face as u32 + 1, dim);
            fb.put_str(panel_x + 2, y, "██", CellStyle::new(sticker_rgb(*color)));
            fb.put_str(panel_x + 5, y, color.as_str(), value);
            fb.put_u32(panel_x + 12, y, misplaced[face] as u32, dim);
            y += 1;
        }

        if snap.solved {
            y += 1;
            fb.put_str(panel_x, y, "SOLVED", label);
        }
    }
}

/// Display color of a sticker.
pub fn sticker_rgb(color: Color) -> Rgb {
    match color {
        Color::Red => Rgb::new(220, 50, 50),
        Color::Blue => Rgb::new(60, 110, 230),
        Color::Orange => Rgb::new(255, 150, 20),
        Color::Green => Rgb::new(60, 190, 90),
        Color::White => Rgb::new(240, 240, 240),
        Color::Yellow => Rgb::new(240, 220, 50),
        Color::Rgb(r, g, b) => Rgb::new(r, g, b),
    }
}

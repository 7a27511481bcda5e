//! Vector map rendering
//!
//! Grid cell `(r, c)` is drawn as a `unit`-sized square whose top-left corner
//! sits at `((c + 1)·unit, (r + 1)·unit)`, which leaves one cell of margin
//! around the raster. Everything of one kind goes into a single
//! compound path so consumers get a handful of elements regardless of size.

use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Group, Path, Rectangle, Text};

use crate::algorithm::doors::DoorKind;
use crate::algorithm::executor::Dungeon;
use crate::algorithm::stairs::{Stair, StairKind};
use crate::io::configuration::{DEFAULT_CELL_SIZE, DungeonConfig};
use crate::io::palette::Palette;
use crate::spatial::grid::DungeonGrid;

/// Number of treads drawn per stair cell
const STAIR_TREADS: usize = 5;

/// Rendering parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    /// Cell size in pixels before scaling
    pub cell_size: u32,
    /// Multiplier applied to the cell size
    pub scale: f32,
    /// Margin around the background in user units
    ///
    /// Padding widens the `viewBox` on every side and leaves the document's
    /// `width` and `height` at the background size, so the drawing shrinks
    /// to make room for the margin.
    pub padding: u32,
    /// Colors by role
    pub palette: Palette,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            scale: 1.0,
            padding: 0,
            palette: Palette::default(),
        }
    }
}

impl RenderStyle {
    /// Style matching a generation config with the default palette
    pub fn from_config(config: &DungeonConfig) -> Self {
        Self {
            cell_size: config.cell_size,
            scale: config.scale,
            padding: config.map_padding,
            palette: Palette::default(),
        }
    }

    /// Side of one rendered cell in pixels
    pub fn unit(&self) -> f32 {
        self.cell_size as f32 * self.scale
    }
}

/// Background size in pixels: the raster plus one cell of margin per side
pub fn background_size(grid: &DungeonGrid, style: &RenderStyle) -> (f32, f32) {
    let unit = style.unit();
    (
        (grid.width() + 2) as f32 * unit,
        (grid.height() + 2) as f32 * unit,
    )
}

/// Render a dungeon to SVG text
pub fn render(dungeon: &Dungeon, style: &RenderStyle) -> String {
    build_document(dungeon, style).to_string()
}

/// Build the SVG document for a dungeon
pub fn build_document(dungeon: &Dungeon, style: &RenderStyle) -> Document {
    let canvas = Canvas { unit: style.unit() };
    let palette = &style.palette;
    let (background_width, background_height) = background_size(&dungeon.grid, style);

    let mut document = Document::new()
        .set("width", background_width)
        .set("height", background_height)
        .set("viewBox", view_box(background_width, background_height, style.padding))
        .add(
            Rectangle::new()
                .set("class", "background")
                .set("x", 0)
                .set("y", 0)
                .set("width", background_width)
                .set("height", background_height)
                .set("fill", palette.background.to_hex()),
        );

    if let Some(data) = floor_data(&dungeon.grid, &canvas).finish() {
        document = document.add(
            Path::new()
                .set("class", "floor")
                .set("d", data)
                .set("fill", palette.floor.to_hex())
                .set("stroke", "none"),
        );
    }

    if let Some(data) = wall_data(&dungeon.grid, &canvas).finish() {
        document = document.add(
            Path::new()
                .set("class", "walls")
                .set("d", data)
                .set("fill", "none")
                .set("stroke", palette.wall.to_hex())
                .set("stroke-width", canvas.unit / 6.0)
                .set("stroke-linecap", "square"),
        );
    }

    if let Some(data) = door_data(dungeon, &canvas).finish() {
        document = document.add(
            Path::new()
                .set("class", "doors")
                .set("d", data)
                .set("fill", "none")
                .set("stroke", palette.door.to_hex())
                .set("stroke-width", canvas.unit / 10.0),
        );
    }

    if let Some(labels) = label_group(&dungeon.grid, &canvas) {
        document = document.add(labels.set("fill", palette.label.to_hex()));
    }

    if let Some(data) = stair_data(&dungeon.stairs, &canvas).finish() {
        document = document.add(
            Path::new()
                .set("class", "stairs")
                .set("d", data)
                .set("fill", "none")
                .set("stroke", palette.stair.to_hex())
                .set("stroke-width", canvas.unit / 12.0),
        );
    }

    document
}

/// `viewBox` covering the background plus `padding` on every side
pub fn view_box(width: f32, height: f32, padding: u32) -> String {
    let inset = -i64::from(padding);
    let pad = padding as f32;
    format!(
        "{inset} {inset} {} {}",
        2.0f32.mul_add(pad, width),
        2.0f32.mul_add(pad, height)
    )
}

type Point = (f32, f32);

struct Canvas {
    unit: f32,
}

impl Canvas {
    /// Left edge of a cell column (fractional columns allowed)
    fn x(&self, col: f32) -> f32 {
        (col + 1.0) * self.unit
    }

    /// Top edge of a cell row
    fn y(&self, row: f32) -> f32 {
        (row + 1.0) * self.unit
    }

    fn center(&self, row: usize, col: usize) -> Point {
        (self.x(col as f32 + 0.5), self.y(row as f32 + 0.5))
    }
}

/// Compound path accumulator
struct Strokes {
    data: Data,
    count: usize,
}

impl Strokes {
    fn new() -> Self {
        Self {
            data: Data::new(),
            count: 0,
        }
    }

    fn line(&mut self, from: Point, to: Point) {
        self.polyline(&[from, to], false);
    }

    fn polyline(&mut self, points: &[Point], closed: bool) {
        let Some((&first, rest)) = points.split_first() else {
            return;
        };
        let mut data = std::mem::replace(&mut self.data, Data::new()).move_to(first);
        for &point in rest {
            data = data.line_to(point);
        }
        if closed {
            data = data.close();
        }
        self.data = data;
        self.count += 1;
    }

    fn rect(&mut self, left: f32, top: f32, right: f32, bottom: f32) {
        self.polyline(
            &[(left, top), (right, top), (right, bottom), (left, bottom)],
            true,
        );
    }

    fn finish(self) -> Option<Data> {
        (self.count > 0).then_some(self.data)
    }
}

/// Local drawing frame centered on a cell
///
/// `along` runs parallel to `(dr, dc)`, `across` perpendicular to it.
#[derive(Clone, Copy)]
struct Frame {
    cx: f32,
    cy: f32,
    dr: f32,
    dc: f32,
}

impl Frame {
    fn at(&self, along: f32, across: f32) -> Point {
        (
            across.mul_add(self.dr, along.mul_add(self.dc, self.cx)),
            across.mul_add(self.dc, along.mul_add(self.dr, self.cy)),
        )
    }
}

/// Open cells as one rectangle per horizontal run
fn floor_data(grid: &DungeonGrid, canvas: &Canvas) -> Strokes {
    let mut strokes = Strokes::new();

    for r in 0..grid.height() {
        let mut run_start = None;
        for c in 0..=grid.width() {
            let open = c < grid.width() && grid.is_open(r as i32, c as i32);
            match (open, run_start) {
                (true, None) => run_start = Some(c),
                (false, Some(start)) => {
                    strokes.rect(
                        canvas.x(start as f32),
                        canvas.y(r as f32),
                        canvas.x(c as f32),
                        canvas.y(r as f32 + 1.0),
                    );
                    run_start = None;
                }
                _ => {}
            }
        }
    }

    strokes
}

/// Boundary edges between open and closed cells, merged into runs
fn wall_data(grid: &DungeonGrid, canvas: &Canvas) -> Strokes {
    let mut strokes = Strokes::new();
    let (height, width) = (grid.height() as i32, grid.width() as i32);

    for r in 0..=height {
        let mut run_start = None;
        for c in 0..=width {
            let edge = c < width && grid.is_open(r - 1, c) != grid.is_open(r, c);
            match (edge, run_start) {
                (true, None) => run_start = Some(c),
                (false, Some(start)) => {
                    let y = canvas.y(r as f32);
                    strokes.line((canvas.x(start as f32), y), (canvas.x(c as f32), y));
                    run_start = None;
                }
                _ => {}
            }
        }
    }

    for c in 0..=width {
        let mut run_start = None;
        for r in 0..=height {
            let edge = r < height && grid.is_open(r, c - 1) != grid.is_open(r, c);
            match (edge, run_start) {
                (true, None) => run_start = Some(r),
                (false, Some(start)) => {
                    let x = canvas.x(c as f32);
                    strokes.line((x, canvas.y(start as f32)), (x, canvas.y(r as f32)));
                    run_start = None;
                }
                _ => {}
            }
        }
    }

    strokes
}

/// Passages run east-west when the cell to the west is open
pub fn is_horizontal_opening(grid: &DungeonGrid, row: usize, col: usize) -> bool {
    grid.is_open(row as i32, col as i32 - 1)
}

fn door_data(dungeon: &Dungeon, canvas: &Canvas) -> Strokes {
    let mut strokes = Strokes::new();

    for door in &dungeon.doors {
        let (cx, cy) = canvas.center(door.row, door.col);
        let (dr, dc) = if is_horizontal_opening(&dungeon.grid, door.row, door.col) {
            (0.0, 1.0)
        } else {
            (1.0, 0.0)
        };
        let frame = Frame { cx, cy, dr, dc };
        draw_door(&mut strokes, frame, door.kind, canvas.unit);
    }

    strokes
}

fn draw_door(strokes: &mut Strokes, frame: Frame, kind: DoorKind, unit: f32) {
    let half = unit / 2.0;
    let quarter = unit / 4.0;
    let eighth = unit / 8.0;

    if kind == DoorKind::Secret {
        strokes.polyline(
            &[
                frame.at(-eighth, -0.6 * half),
                frame.at(eighth, -0.2 * half),
                frame.at(-eighth, 0.2 * half),
                frame.at(eighth, 0.6 * half),
            ],
            false,
        );
        return;
    }

    // Jambs mark the wall ends on both sides of the opening
    strokes.line(frame.at(-quarter, -half), frame.at(quarter, -half));
    strokes.line(frame.at(-quarter, half), frame.at(quarter, half));

    if matches!(kind, DoorKind::Open | DoorKind::Locked | DoorKind::Trapped) {
        strokes.line(frame.at(-eighth, -half), frame.at(-eighth, half));
        strokes.line(frame.at(eighth, -half), frame.at(eighth, half));
    }

    match kind {
        DoorKind::Locked => strokes.line(frame.at(-quarter, 0.0), frame.at(quarter, 0.0)),
        DoorKind::Trapped => {
            let d = unit / 5.0;
            strokes.polyline(
                &[
                    frame.at(0.0, -d),
                    frame.at(d, 0.0),
                    frame.at(0.0, d),
                    frame.at(-d, 0.0),
                ],
                true,
            );
        }
        DoorKind::Portcullis => {
            for k in 0..4 {
                let start = (2.0 * k as f32 + 0.5).mul_add(eighth, -half);
                strokes.line(frame.at(0.0, start), frame.at(0.0, start + eighth));
            }
        }
        DoorKind::Arch | DoorKind::Open | DoorKind::Secret => {}
    }
}

/// Room numbers grouped into one text element per run of digits
fn label_group(grid: &DungeonGrid, canvas: &Canvas) -> Option<Group> {
    let mut group = Group::new()
        .set("class", "labels")
        .set("font-family", "sans-serif")
        .set("font-size", canvas.unit * 0.6)
        .set("text-anchor", "middle")
        .set("dominant-baseline", "central");
    let mut count = 0;

    for r in 0..grid.height() {
        let mut run: Option<(usize, String)> = None;
        for c in 0..=grid.width() {
            let digit = (c < grid.width())
                .then(|| grid.cell(r as i32, c as i32))
                .filter(|cell| !cell.is_stairs())
                .and_then(|cell| cell.label_char())
                .filter(char::is_ascii_digit);

            match (digit, run.as_mut()) {
                (Some(ch), Some((_, text))) => text.push(ch),
                (Some(ch), None) => run = Some((c, ch.to_string())),
                (None, Some(_)) => {
                    if let Some((start, text)) = run.take() {
                        let x = canvas.x((start + c) as f32 / 2.0);
                        let y = canvas.y(r as f32 + 0.5);
                        group = group.add(Text::new(text).set("x", x).set("y", y));
                        count += 1;
                    }
                }
                (None, None) => {}
            }
        }
    }

    (count > 0).then_some(group)
}

fn stair_data(stairs: &[Stair], canvas: &Canvas) -> Strokes {
    let mut strokes = Strokes::new();
    let unit = canvas.unit;
    let half = unit / 2.0;
    let spacing = unit / STAIR_TREADS as f32;

    for stair in stairs {
        let (cx, cy) = canvas.center(stair.row, stair.col);
        let frame = Frame {
            cx,
            cy,
            dr: stair.next_row as f32 - stair.row as f32,
            dc: stair.next_col as f32 - stair.col as f32,
        };

        for k in 0..STAIR_TREADS {
            let along = (k as f32 + 0.5).mul_add(spacing, -half);
            let reach = match stair.kind {
                StairKind::Up => 0.4 * unit,
                StairKind::Down => 0.4 * unit * (k + 1) as f32 / STAIR_TREADS as f32,
            };
            strokes.line(frame.at(along, -reach), frame.at(along, reach));
        }
    }

    strokes
}

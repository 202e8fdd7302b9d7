mod util;

use std::collections::VecDeque;
use std::time::Duration;

use eframe::egui;
use eframe::egui::{Color32, Pos2, Rect, Rounding, Stroke};
use egui::{pos2, vec2, Key, Shape, Vec2};
use hex2d::{Coordinate, Direction as HexDirection, Spin};
use hex_walk::game::{self, Board, CubeCoordinate, Direction, DEFAULT_STEP_DELAY, MAX_WALK_DEPTH};
use hex_walk::session::random_directions;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use util::transforms::Transform;

const SQRT_3: f32 = 1.7320508;

/// Side length of a tile; neighboring tile centers are one unit apart.
const HEX_SIDE: f32 = 1.0 / SQRT_3;

/// The corners of a hexagon with side length 1 that is centered at the origin.
/// The first corner is repeated at the end.
const HEXAGON_CORNERS: [Vec2; 7] = [
    vec2(0.0, 1.0),
    vec2(SQRT_3 / 2.0, 0.5),
    vec2(SQRT_3 / 2.0, -0.5),
    vec2(0.0, -1.0),
    vec2(-SQRT_3 / 2.0, -0.5),
    vec2(-SQRT_3 / 2.0, 0.5),
    vec2(0.0, 1.0),
];

/// Empty cells drawn around the walk.
const BACKGROUND_MARGIN: u64 = 2;
const MAX_BACKGROUND_RADIUS: u64 = 80;

const TILE_COLOR: Color32 = Color32::from_rgb(70, 130, 180);
const ORIGIN_COLOR: Color32 = Color32::from_rgb(34, 139, 34);
const PLAYER_COLOR: Color32 = Color32::from_rgb(178, 34, 34);

const KEYMAP: [(Key, Direction); 6] = [
    (Key::D, Direction::D),
    (Key::W, Direction::W),
    (Key::Z, Direction::Z),
    (Key::A, Direction::A),
    (Key::X, Direction::X),
    (Key::E, Direction::E),
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hex_walk=info,viewer=info".into()),
        )
        .init();

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Hex Walk",
        native_options,
        Box::new(|cc| Box::new(HexWalkViewer::new(cc))),
    )
    .expect("eframe failed to start");
}

struct HexWalkViewer {
    board: Board,
    /// Steps still to be replayed by the running animation.
    pending: VecDeque<Direction>,
    last_step_time: f64,
    depth: u32,
    random_steps: usize,
    delay_ms: u64,
    rng: StdRng,
    pointer_pos: String,
    zoom: f32,
    camera: Pos2,
}

impl Default for HexWalkViewer {
    fn default() -> Self {
        Self {
            board: Board::new(),
            pending: VecDeque::new(),
            last_step_time: 0.0,
            depth: 4,
            random_steps: 50,
            delay_ms: DEFAULT_STEP_DELAY.as_millis() as u64,
            rng: StdRng::from_entropy(),
            pointer_pos: "".to_string(),
            zoom: 1.0,
            camera: pos2(0.0, 0.0),
        }
    }
}

impl HexWalkViewer {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        self.board = Board::new();
        self.pending.clear();
        self.camera = pos2(0.0, 0.0);
        self.zoom = 1.0;
    }

    fn draw_sierpinski(&mut self, animate: bool) {
        match game::sierpinski(self.depth) {
            Ok(walk) if animate => self.pending.extend(walk.iter()),
            Ok(walk) => {
                self.board.replay(&walk);
                info!(depth = self.depth, tiles = self.board.tile_count(), "sierpinski walk done");
            }
            Err(e) => warn!("{e}"),
        }
    }

    /// Applies the next pending step once the step delay has passed.
    fn advance_animation(&mut self, ctx: &egui::Context) {
        if self.pending.is_empty() {
            return;
        }
        let delay = Duration::from_millis(self.delay_ms);
        let now = ctx.input(|i| i.time);
        if now - self.last_step_time >= delay.as_secs_f64() {
            if let Some(direction) = self.pending.pop_front() {
                self.board.apply(direction);
            }
            self.last_step_time = now;
            if self.pending.is_empty() {
                info!(
                    distance = self.board.player().hex_distance(),
                    tiles = self.board.tile_count(),
                    "walk done"
                );
            }
        }
        ctx.request_repaint_after(delay);
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        if !self.pending.is_empty() {
            return;
        }
        for (key, direction) in KEYMAP {
            if ctx.input(|i| i.key_pressed(key)) {
                self.board.apply(direction);
            }
        }
    }

    /// The part of the board plane to show: every discovered tile plus a margin.
    fn world_rect(&self) -> Rect {
        let mut rect = Rect::from_center_size(Pos2::ZERO, vec2(2.0, 2.0));
        for (x, y) in self.board.tile_points() {
            rect.extend_with(pos2(x as f32, y as f32));
        }
        let rect = rect.expand(1.5);
        Rect::from_center_size(rect.center() + self.camera.to_vec2(), rect.size() / self.zoom)
    }

    fn paint_board(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let rect = ui.max_rect();
        let world_rect = self.world_rect();
        let world_to_screen = Transform::letterboxed(world_rect, rect);
        let painter = ui.painter_at(rect);

        ctx.input(|i| {
            self.zoom *= (i.scroll_delta.y / 500.0).exp();
            if i.pointer.is_decidedly_dragging() {
                let px_scale = world_to_screen.map_dist(1.0);
                self.camera.x -= i.pointer.delta().x / px_scale;
                self.camera.y += i.pointer.delta().y / px_scale;
            }
        });

        self.pointer_pos = match ctx.pointer_latest_pos() {
            None => "".to_string(),
            Some(pos) => {
                let pos = world_to_screen.unmap_point(pos);
                let cell = CubeCoordinate::from_cartesian(pos.x as f64, pos.y as f64);
                let state = if self.board.lookup(&cell).is_ok() {
                    "discovered"
                } else {
                    "hidden"
                };
                format!(
                    "({:.1}, {:.1}) Hexagon: {cell} r={} {state}",
                    pos.x,
                    pos.y,
                    cell.hex_distance(),
                )
            }
        };

        // background
        painter.rect(
            rect,
            Rounding::ZERO,
            Color32::from_gray(10),
            Stroke::NONE,
        );

        let hexagon = |loc: CubeCoordinate| {
            let (x, y) = loc.to_cartesian();
            let center = pos2(x as f32, y as f32);
            HEXAGON_CORNERS
                .map(|p| world_to_screen.map_point(center + p * HEX_SIDE))
                .to_vec()
        };

        let reach = self
            .board
            .tiles()
            .map(|tile| tile.coordinate().hex_distance())
            .max()
            .unwrap_or(0);
        let radius = (reach + BACKGROUND_MARGIN).min(MAX_BACKGROUND_RADIUS);
        let origin = Coordinate::<i64>::new(0, 0);
        for r in 0..=radius {
            for cell in origin.ring_iter(r as i32, Spin::CW(HexDirection::XY)) {
                painter.add(Shape::convex_polygon(
                    hexagon(cell.into()),
                    Color32::TRANSPARENT,
                    Stroke::new(1.0, Color32::from_gray(40)),
                ));
            }
        }

        for tile in self.board.tiles() {
            let loc = tile.coordinate();
            let fill = if loc == CubeCoordinate::ORIGIN {
                ORIGIN_COLOR
            } else {
                TILE_COLOR
            };
            painter.add(Shape::convex_polygon(
                hexagon(loc),
                fill,
                Stroke::new(1.0, Color32::from_gray(100)),
            ));
        }

        let (x, y) = self.board.player_point();
        painter.circle_filled(
            world_to_screen.map_point(pos2(x as f32, y as f32)),
            world_to_screen.map_dist(0.3),
            PLAYER_COLOR,
        );
    }
}

impl eframe::App for HexWalkViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance_animation(ctx);
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "Distance: {}  Tiles: {}",
                        self.board.player().hex_distance(),
                        self.board.tile_count()
                    ));
                    if ui.button("Reset").clicked() {
                        self.reset();
                    }
                    ui.separator();
                    ui.add(egui::Slider::new(&mut self.depth, 1..=MAX_WALK_DEPTH).text("depth"));
                    let idle = self.pending.is_empty();
                    if ui.add_enabled(idle, egui::Button::new("Draw")).clicked() {
                        self.draw_sierpinski(false);
                    }
                    if ui.add_enabled(idle, egui::Button::new("Walk")).clicked() {
                        self.draw_sierpinski(true);
                    }
                    ui.separator();
                    ui.add(egui::Slider::new(&mut self.random_steps, 1..=500).text("steps"));
                    if ui.add_enabled(idle, egui::Button::new("Random")).clicked() {
                        let walk = random_directions(self.random_steps, &mut self.rng);
                        self.pending.extend(walk.iter());
                    }
                    ui.separator();
                    ui.add(egui::Slider::new(&mut self.delay_ms, 0..=1000).text("delay ms"));
                    if ui.add_enabled(!idle, egui::Button::new("Stop")).clicked() {
                        self.pending.clear();
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(&self.pointer_pos);
                });
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| self.paint_board(ctx, ui));
    }
}

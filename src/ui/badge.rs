//! Score badge: a score drawn over a decorative vector glyph
//!
//! Glyphs are authored in a 100x100 view box and scaled into the badge
//! rect when painted. Only the star glyph spins.

use crate::animation::{Animation, Easing, Tween};
use crate::constants::STAR_SPIN_SECS;
use crate::theme;
use crate::types::ShapeVariant;
use eframe::egui;
use egui::{pos2, Color32, Pos2};

const VIEW_BOX: f32 = 100.0;
const VIEW_CENTER: Pos2 = pos2(50.0, 50.0);
const CURVE_SAMPLES: usize = 12;

const STAR_POINTS: [Pos2; 10] = [
    pos2(50.0, 0.0),
    pos2(61.0, 35.0),
    pos2(98.0, 35.0),
    pos2(68.0, 57.0),
    pos2(79.0, 91.0),
    pos2(50.0, 70.0),
    pos2(21.0, 91.0),
    pos2(32.0, 57.0),
    pos2(2.0, 35.0),
    pos2(39.0, 35.0),
];

/// Closed cubic path: a start point followed by (control, control, end) triples
struct CubicPath {
    start: Pos2,
    segments: &'static [[Pos2; 3]],
}

const BLOB2_PATH: CubicPath = CubicPath {
    start: pos2(45.0, 2.0),
    segments: &[
        [pos2(65.0, 0.0), pos2(85.0, 10.0), pos2(95.0, 30.0)],
        [pos2(105.0, 50.0), pos2(95.0, 75.0), pos2(80.0, 90.0)],
        [pos2(60.0, 105.0), pos2(35.0, 100.0), pos2(18.0, 85.0)],
        [pos2(0.0, 68.0), pos2(-5.0, 42.0), pos2(10.0, 22.0)],
        [pos2(22.0, 6.0), pos2(35.0, 3.0), pos2(45.0, 2.0)],
    ],
};

const BLOB_PATH: CubicPath = CubicPath {
    start: pos2(50.0, 5.0),
    segments: &[
        [pos2(70.0, 2.0), pos2(90.0, 15.0), pos2(93.0, 35.0)],
        [pos2(96.0, 55.0), pos2(88.0, 70.0), pos2(78.0, 82.0)],
        [pos2(65.0, 95.0), pos2(45.0, 98.0), pos2(28.0, 88.0)],
        [pos2(12.0, 78.0), pos2(2.0, 60.0), pos2(5.0, 40.0)],
        [pos2(8.0, 20.0), pos2(30.0, 8.0), pos2(50.0, 5.0)],
    ],
};

const CIRCLE_RADIUS: f32 = 48.0;

/// Glyph geometry in view-box units
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Polygon visible in full from the view-box center
    Polygon(Vec<Pos2>),
    Circle { center: Pos2, radius: f32 },
}

impl Outline {
    pub fn for_shape(shape: ShapeVariant) -> Self {
        match shape {
            ShapeVariant::Star => Outline::Polygon(STAR_POINTS.to_vec()),
            ShapeVariant::Blob2 => Outline::Polygon(flatten(&BLOB2_PATH)),
            ShapeVariant::Blob => Outline::Polygon(flatten(&BLOB_PATH)),
            ShapeVariant::Circle => Outline::Circle {
                center: VIEW_CENTER,
                radius: CIRCLE_RADIUS,
            },
        }
    }
}

fn cubic_point(p0: Pos2, p1: Pos2, p2: Pos2, p3: Pos2, t: f32) -> Pos2 {
    let u = 1.0 - t;
    let v = p0.to_vec2() * (u * u * u)
        + p1.to_vec2() * (3.0 * u * u * t)
        + p2.to_vec2() * (3.0 * u * t * t)
        + p3.to_vec2() * (t * t * t);
    v.to_pos2()
}

/// Sample a closed cubic path into a polygon. The closing point is dropped.
fn flatten(path: &CubicPath) -> Vec<Pos2> {
    let mut points = Vec::with_capacity(path.segments.len() * CURVE_SAMPLES);
    let mut from = path.start;
    for &[c1, c2, to] in path.segments {
        for i in 0..CURVE_SAMPLES {
            let t = i as f32 / CURVE_SAMPLES as f32;
            points.push(cubic_point(from, c1, c2, to, t));
        }
        from = to;
    }
    points
}

/// Map a view-box point into `rect`, rotated about the rect center
fn to_screen(p: Pos2, rect: egui::Rect, rotation: egui::emath::Rot2) -> Pos2 {
    let scale = rect.width() / VIEW_BOX;
    rect.center() + rotation * ((p - VIEW_CENTER) * scale)
}

/// Fill a polygon as a triangle fan around `center`
fn fan_mesh(center: Pos2, points: &[Pos2], color: Color32) -> egui::epaint::Mesh {
    let mut mesh = egui::epaint::Mesh::default();
    mesh.colored_vertex(center, color);
    for &p in points {
        mesh.colored_vertex(p, color);
    }
    let n = points.len() as u32;
    for i in 0..n {
        mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
    }
    mesh
}

/// Paint `shape`'s glyph filling `rect`, rotated by `rotation_deg`
pub fn paint_glyph(
    painter: &egui::Painter,
    rect: egui::Rect,
    shape: ShapeVariant,
    rotation_deg: f32,
    fill: Color32,
) {
    let rotation = egui::emath::Rot2::from_angle(rotation_deg.to_radians());
    match Outline::for_shape(shape) {
        Outline::Polygon(points) => {
            let screen: Vec<Pos2> = points.iter().map(|&p| to_screen(p, rect, rotation)).collect();
            let center = to_screen(VIEW_CENTER, rect, rotation);
            painter.add(egui::Shape::mesh(fan_mesh(center, &screen, fill)));
        }
        Outline::Circle { center, radius } => {
            let scale = rect.width() / VIEW_BOX;
            painter.circle_filled(to_screen(center, rect, rotation), radius * scale, fill);
        }
    }
}

/// Per-variant size and colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeStyle {
    pub size: f32,
    pub fill: Color32,
    pub text_color: Color32,
}

impl BadgeStyle {
    pub fn for_shape(shape: ShapeVariant) -> Self {
        match shape {
            ShapeVariant::Star => Self {
                size: theme::BADGE_STAR_SIZE,
                fill: theme::BADGE_STAR,
                text_color: theme::BADGE_TEXT_LIGHT,
            },
            ShapeVariant::Blob2 => Self {
                size: theme::BADGE_SIZE,
                fill: theme::BADGE_BLOB2,
                text_color: theme::BADGE_TEXT_LIGHT,
            },
            ShapeVariant::Blob => Self {
                size: theme::BADGE_SIZE,
                fill: theme::BADGE_BLOB,
                text_color: theme::BADGE_TEXT_DARK,
            },
            ShapeVariant::Circle => Self {
                size: theme::BADGE_SIZE,
                fill: theme::BADGE_CIRCLE,
                text_color: theme::BADGE_TEXT_MUTED,
            },
        }
    }
}

pub fn format_score(score: f32) -> String {
    format!("{:.1}", score)
}

/// Continuous rotation of a badge glyph; idle for shapes that don't spin
#[derive(Debug, Clone)]
pub struct BadgeSpin(Option<Tween>);

impl BadgeSpin {
    pub fn for_shape(shape: ShapeVariant) -> Self {
        Self(shape.spins().then(|| {
            Tween::new(0.0, 360.0, STAR_SPIN_SECS, Easing::EaseInOutQuad).repeat_forever()
        }))
    }
}

impl Animation for BadgeSpin {
    fn tick(&mut self, dt: f32) {
        if let Some(tween) = &mut self.0 {
            tween.tick(dt);
        }
    }

    /// Rotation in degrees
    fn value(&self) -> f32 {
        self.0.as_ref().map_or(0.0, Tween::value)
    }

    fn is_running(&self) -> bool {
        self.0.is_some()
    }
}

/// Render the badge and return its response
pub fn shape_badge(
    ui: &mut egui::Ui,
    shape: ShapeVariant,
    score: f32,
    rotation_deg: f32,
) -> egui::Response {
    let style = BadgeStyle::for_shape(shape);
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(style.size, style.size), egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        paint_glyph(painter, rect, shape, rotation_deg, style.fill);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            format_score(score),
            egui::FontId::proportional(theme::FONT_BADGE),
            style.text_color,
        );
    }

    response
}

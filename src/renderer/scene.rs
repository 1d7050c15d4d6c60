//! Scene composition
//!
//! Reads the game state and issues draw calls. Never mutates the state.

use glam::Vec2;

use super::palette::{self, Color};
use super::shapes::{CORNER_SEGMENTS, rounded_rect, wing};
use super::surface::{Surface, TextAlign, TextStyle};
use crate::consts::GROUND_HEIGHT;
use crate::sim::{Avatar, GamePhase, GameState, Obstacle, Rect};

/// Number of drifting background clouds
pub const CLOUD_COUNT: usize = 6;
/// Corner radius of obstacle segments
pub const OBSTACLE_CORNER_RADIUS: f32 = 8.0;
/// Inset of the shade drawn inside each obstacle segment
const SHADE_INSET: f32 = 6.0;
/// Left anchor of the color tier label
const LABEL_X: f32 = 12.0;

const SCORE_STYLE: TextStyle = TextStyle::new(38.0, true, TextAlign::Center);
const LABEL_STYLE: TextStyle = TextStyle::new(12.0, false, TextAlign::Left);
const TITLE_STYLE: TextStyle = TextStyle::new(36.0, true, TextAlign::Center);
const BODY_STYLE: TextStyle = TextStyle::new(20.0, false, TextAlign::Center);

/// Draw one frame; `time_ms` only drives cosmetic motion
pub fn draw_scene<S: Surface + ?Sized>(surface: &mut S, state: &GameState, time_ms: f64) {
    let size = Vec2::new(state.tuning.width, state.tuning.height);

    surface.clear();
    surface.fill_rect(Rect::new(0.0, 0.0, size.x, size.y), palette::SKY);

    for center in cloud_positions(time_ms, size.x) {
        surface.fill_ellipse(center, Vec2::new(40.0, 18.0), palette::CLOUD);
    }

    surface.fill_rect(
        Rect::new(0.0, size.y - GROUND_HEIGHT, size.x, GROUND_HEIGHT),
        palette::GROUND,
    );

    for obstacle in state.obstacles() {
        draw_obstacle(surface, obstacle);
    }

    draw_avatar(surface, &state.avatar);

    surface.fill_text(
        &state.score.to_string(),
        Vec2::new(size.x / 2.0, 90.0),
        SCORE_STYLE,
        palette::TEXT,
    );
    surface.fill_text(
        &format!("Color: {}", state.avatar.color_tier + 1),
        Vec2::new(LABEL_X, 28.0),
        LABEL_STYLE,
        palette::TEXT,
    );

    if state.phase == GamePhase::Ended {
        draw_game_over(surface, state, size);
    }
}

/// Cloud centers at a given time
///
/// Clouds drift right and wrap around a strip 200px wider than the surface.
pub fn cloud_positions(time_ms: f64, width: f32) -> [Vec2; CLOUD_COUNT] {
    let drift = (time_ms / 30.0) % 480.0;
    let wrap = width as f64 + 200.0;
    std::array::from_fn(|i| {
        let x = (i as f64 * 123.0 + drift) % wrap - 100.0;
        let y = 80.0 + (i % 2) as f32 * 18.0;
        Vec2::new(x as f32, y)
    })
}

fn draw_obstacle<S: Surface + ?Sized>(surface: &mut S, obstacle: &Obstacle) {
    let top = obstacle.top_rect();
    let bottom = obstacle.bottom_rect();

    for rect in [&top, &bottom] {
        let outline = rounded_rect(rect, OBSTACLE_CORNER_RADIUS, CORNER_SEGMENTS);
        surface.fill_polygon(&outline, palette::OBSTACLE);
    }

    for rect in [&top, &bottom] {
        let shade = Rect::new(
            rect.x + SHADE_INSET,
            rect.y + SHADE_INSET,
            rect.w - 2.0 * SHADE_INSET,
            (rect.h - 2.0 * SHADE_INSET).max(0.0),
        );
        surface.fill_rect(shade, palette::OBSTACLE_SHADE);
    }
}

fn draw_avatar<S: Surface + ?Sized>(surface: &mut S, avatar: &Avatar) {
    let color: Color = palette::avatar_color(avatar.color_tier);
    let r = avatar.radius;

    surface.save();
    surface.translate(avatar.pos);
    surface.rotate(avatar.rotation);

    surface.fill_ellipse(Vec2::ZERO, Vec2::splat(r), color);
    // Eye
    surface.fill_ellipse(Vec2::new(6.0, -4.0), Vec2::splat(4.0), palette::EYE);
    surface.fill_ellipse(Vec2::new(7.0, -4.0), Vec2::splat(1.8), palette::PUPIL);
    surface.fill_polygon(&wing(r), palette::WING);

    surface.restore();
}

fn draw_game_over<S: Surface + ?Sized>(surface: &mut S, state: &GameState, size: Vec2) {
    let mid = size / 2.0;

    surface.fill_rect(Rect::new(0.0, 0.0, size.x, size.y), palette::OVERLAY);
    surface.fill_text(
        "Game Over",
        Vec2::new(mid.x, mid.y - 40.0),
        TITLE_STYLE,
        palette::TEXT,
    );
    surface.fill_text(
        &format!("Score: {}", state.score),
        Vec2::new(mid.x, mid.y),
        BODY_STYLE,
        palette::TEXT,
    );
    surface.fill_text(
        &format!("Best score: {}", state.best_score),
        Vec2::new(mid.x, mid.y + 30.0),
        BODY_STYLE,
        palette::TEXT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[derive(Debug, Clone, PartialEq)]
    enum Draw {
        Clear,
        Rect(Rect, Color),
        Ellipse(Vec2, Vec2, Color),
        Polygon(usize, Color),
        Text(String, Vec2, TextAlign),
        Save,
        Restore,
        Translate(Vec2),
        Rotate(f32),
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<Draw>,
    }

    impl RecordingSurface {
        fn texts(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Draw::Text(t, ..) => Some(t.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> Vec2 {
            Vec2::new(320.0, 480.0)
        }
        fn clear(&mut self) {
            self.calls.push(Draw::Clear);
        }
        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.calls.push(Draw::Rect(rect, color));
        }
        fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) {
            self.calls.push(Draw::Ellipse(center, radii, color));
        }
        fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
            self.calls.push(Draw::Polygon(points.len(), color));
        }
        fn fill_text(&mut self, text: &str, pos: Vec2, style: TextStyle, _color: Color) {
            self.calls.push(Draw::Text(text.to_string(), pos, style.align));
        }
        fn save(&mut self) {
            self.calls.push(Draw::Save);
        }
        fn restore(&mut self) {
            self.calls.push(Draw::Restore);
        }
        fn translate(&mut self, offset: Vec2) {
            self.calls.push(Draw::Translate(offset));
        }
        fn rotate(&mut self, angle: f32) {
            self.calls.push(Draw::Rotate(angle));
        }
    }

    #[test]
    fn test_running_scene_has_no_overlay() {
        let mut state = GameState::new(1, Tuning::default());
        state.reset(0.0, 4);
        state.score = 3;
        let mut surface = RecordingSurface::default();

        draw_scene(&mut surface, &state, 1234.0);

        assert_eq!(surface.calls[0], Draw::Clear);
        assert_eq!(surface.texts(), vec!["3", "Color: 1"]);
        let obstacle_polys = surface
            .calls
            .iter()
            .filter(|c| matches!(c, Draw::Polygon(_, color) if *color == palette::OBSTACLE))
            .count();
        assert_eq!(obstacle_polys, 4);
        assert!(!surface.calls.iter().any(|c| matches!(c, Draw::Rect(_, color) if *color == palette::OVERLAY)));
    }

    #[test]
    fn test_hud_text_anchors() {
        let mut state = GameState::new(1, Tuning::default());
        state.reset(0.0, 0);
        state.avatar.color_tier = 3;
        let mut surface = RecordingSurface::default();

        draw_scene(&mut surface, &state, 0.0);

        assert!(surface.calls.contains(&Draw::Text(
            "0".to_string(),
            Vec2::new(160.0, 90.0),
            TextAlign::Center
        )));
        assert!(surface.calls.contains(&Draw::Text(
            "Color: 4".to_string(),
            Vec2::new(LABEL_X, 28.0),
            TextAlign::Left
        )));
    }

    #[test]
    fn test_ended_scene_shows_scores() {
        let mut state = GameState::new(1, Tuning::default());
        state.reset(0.0, 9);
        state.score = 6;
        state.phase = GamePhase::Ended;
        let mut surface = RecordingSurface::default();

        draw_scene(&mut surface, &state, 0.0);

        let texts = surface.texts();
        assert!(texts.contains(&"Game Over"));
        assert!(texts.contains(&"Score: 6"));
        assert!(texts.contains(&"Best score: 9"));
    }

    #[test]
    fn test_avatar_drawn_with_transform() {
        let mut state = GameState::new(1, Tuning::default());
        state.avatar.rotation = 0.3;
        state.avatar.color_tier = 2;
        let mut surface = RecordingSurface::default();

        draw_scene(&mut surface, &state, 0.0);

        let save = surface.calls.iter().position(|c| *c == Draw::Save).unwrap();
        assert_eq!(surface.calls[save + 1], Draw::Translate(state.avatar.pos));
        assert_eq!(surface.calls[save + 2], Draw::Rotate(0.3));
        assert_eq!(
            surface.calls[save + 3],
            Draw::Ellipse(Vec2::ZERO, Vec2::splat(16.0), palette::AVATAR_TIERS[2])
        );
        assert!(surface.calls[save..].contains(&Draw::Restore));
    }

    #[test]
    fn test_cloud_positions() {
        let clouds = cloud_positions(0.0, 320.0);
        assert_eq!(clouds[0], Vec2::new(-100.0, 80.0));
        assert_eq!(clouds[1], Vec2::new(23.0, 98.0));

        // 30ms per pixel of drift
        let later = cloud_positions(300.0, 320.0);
        assert_eq!(later[0].x, -90.0);

        // Wraps around the 520px strip
        assert_eq!(clouds[5].x, (615.0 % 520.0) - 100.0);
    }
}

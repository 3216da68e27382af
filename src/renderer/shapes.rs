//! Draw list generation
//!
//! Every element is emitted as an image when its asset was found and as
//! flat-color primitives otherwise. Coordinates are world units; backends
//! scale to their surface.

use glam::Vec2;

use super::FrameView;
use crate::assets::{AssetCatalog, ImageAsset};
use crate::sim::{GamePhase, Rect};

/// Colors for game elements
pub mod colors {
    /// Normalize an 8-bit RGBA color
    const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> [f32; 4] {
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    pub const SKY: [f32; 4] = rgba8(135, 206, 235, 255);
    pub const PIPE: [f32; 4] = rgba8(34, 139, 34, 255);
    pub const BIRD: [f32; 4] = rgba8(255, 215, 0, 255);
    pub const FLOOR: [f32; 4] = rgba8(210, 180, 140, 255);
    pub const OUTLINE: [f32; 4] = rgba8(0, 0, 0, 255);
    pub const TEXT: [f32; 4] = rgba8(255, 255, 255, 255);
    /// Game-over dimming layer
    pub const OVERLAY: [f32; 4] = rgba8(0, 0, 0, 100);
}

/// CSS `rgba()` string for a color, channels rounded to 0-255
pub fn css_rgba(color: [f32; 4]) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3]
    )
}

/// Outline width for fallback shapes
const OUTLINE_WIDTH: f32 = 2.0;

/// Font size class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    /// Titles and the running score
    Large,
    /// Prompts and the score line
    Small,
}

/// One drawing command
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Fill {
        rect: Rect,
        color: [f32; 4],
    },
    Outline {
        rect: Rect,
        color: [f32; 4],
        width: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: [f32; 4],
        width: f32,
    },
    /// Centered text; `shadow` draws a black copy offset by 2 units,
    /// `backdrop` puts a black box behind it
    Text {
        text: String,
        center: Vec2,
        size: TextSize,
        shadow: bool,
        backdrop: bool,
    },
    Image {
        asset: ImageAsset,
        rect: Rect,
        /// Degrees, counter-clockwise
        rotation: f32,
        flip_y: bool,
    },
}

/// Build the full draw list for a frame
pub fn build_frame(view: &FrameView, assets: &AssetCatalog) -> Vec<Primitive> {
    let mut out = Vec::with_capacity(16 + view.obstacles.len() * 4);
    background(&mut out, view, assets);

    match view.phase {
        GamePhase::Start => {
            floor(&mut out, view, assets);
            title_screen(&mut out, view, assets);
        }
        GamePhase::Active => {
            bird(&mut out, view, assets);
            pipes(&mut out, view, assets);
            floor(&mut out, view, assets);
            let center = Vec2::new(view.world.width / 2.0, 50.0);
            out.push(text(view.score.to_string(), center, TextSize::Large, true, false));
        }
        GamePhase::GameOver => {
            pipes(&mut out, view, assets);
            floor(&mut out, view, assets);
            bird(&mut out, view, assets);
            out.push(Primitive::Fill {
                rect: full_screen(view),
                color: colors::OVERLAY,
            });
            game_over_screen(&mut out, view, assets);
        }
    }
    out
}

fn text(text: String, center: Vec2, size: TextSize, shadow: bool, backdrop: bool) -> Primitive {
    Primitive::Text {
        text,
        center,
        size,
        shadow,
        backdrop,
    }
}

fn full_screen(view: &FrameView) -> Rect {
    Rect::new(0.0, 0.0, view.world.width, view.world.height)
}

fn image(asset: ImageAsset, rect: Rect) -> Primitive {
    Primitive::Image {
        asset,
        rect,
        rotation: 0.0,
        flip_y: false,
    }
}

fn background(out: &mut Vec<Primitive>, view: &FrameView, assets: &AssetCatalog) {
    if assets.has_image(ImageAsset::Background) {
        out.push(image(ImageAsset::Background, full_screen(view)));
    } else {
        out.push(Primitive::Fill {
            rect: full_screen(view),
            color: colors::SKY,
        });
    }
}

fn floor(out: &mut Vec<Primitive>, view: &FrameView, assets: &AssetCatalog) {
    let world = view.world;
    let strip_h = world.height - world.floor_y;
    if assets.has_image(ImageAsset::Base) {
        // Two copies side by side so the wrap is seamless
        for dx in [0.0, world.width] {
            let rect = Rect::new(view.floor_offset + dx, world.floor_y, world.width, strip_h);
            out.push(image(ImageAsset::Base, rect));
        }
    } else {
        out.push(Primitive::Fill {
            rect: Rect::new(0.0, world.floor_y, world.width, strip_h),
            color: colors::FLOOR,
        });
        out.push(Primitive::Line {
            from: Vec2::new(0.0, world.floor_y),
            to: Vec2::new(world.width, world.floor_y),
            color: colors::OUTLINE,
            width: OUTLINE_WIDTH,
        });
    }
}

fn bird(out: &mut Vec<Primitive>, view: &FrameView, assets: &AssetCatalog) {
    if assets.has_image(ImageAsset::Bird) {
        out.push(Primitive::Image {
            asset: ImageAsset::Bird,
            rect: view.avatar,
            rotation: view.avatar_tilt,
            flip_y: false,
        });
    } else {
        outlined(out, view.avatar, colors::BIRD);
    }
}

fn pipes(out: &mut Vec<Primitive>, view: &FrameView, assets: &AssetCatalog) {
    let sprite = assets.has_image(ImageAsset::Pipe);
    for pair in &view.obstacles {
        for rect in [pair.lower, pair.upper] {
            if sprite {
                out.push(Primitive::Image {
                    asset: ImageAsset::Pipe,
                    rect,
                    rotation: 0.0,
                    // Pipes not standing on the floor hang from the top
                    flip_y: rect.bottom() < view.world.floor_y,
                });
            } else {
                outlined(out, rect, colors::PIPE);
            }
        }
    }
}

fn outlined(out: &mut Vec<Primitive>, rect: Rect, color: [f32; 4]) {
    out.push(Primitive::Fill { rect, color });
    out.push(Primitive::Outline {
        rect,
        color: colors::OUTLINE,
        width: OUTLINE_WIDTH,
    });
}

fn title_screen(out: &mut Vec<Primitive>, view: &FrameView, assets: &AssetCatalog) {
    let c = view.screen_center();
    if assets.has_image(ImageAsset::Intro) {
        out.push(image(ImageAsset::Intro, full_screen(view)));
    } else {
        out.push(Primitive::Fill {
            rect: full_screen(view),
            color: colors::SKY,
        });
        out.push(text(
            "FLIPPY BIRD".to_string(),
            c - Vec2::new(0.0, 50.0),
            TextSize::Large,
            false,
            false,
        ));
    }
    out.push(text(
        "Press SPACE or TAP to Start".to_string(),
        c + Vec2::new(0.0, 50.0),
        TextSize::Small,
        false,
        true,
    ));
}

fn game_over_screen(out: &mut Vec<Primitive>, view: &FrameView, assets: &AssetCatalog) {
    let c = view.screen_center();
    if assets.has_image(ImageAsset::GameOver) {
        // Natural size is up to the backend; only the center matters here
        let center = Vec2::new(c.x, view.world.height / 3.0);
        out.push(image(ImageAsset::GameOver, Rect::from_center(center, 0.0, 0.0)));
    } else {
        out.push(text(
            "GAME OVER".to_string(),
            c - Vec2::new(0.0, 50.0),
            TextSize::Large,
            true,
            false,
        ));
    }
    out.push(text(
        format!("Score: {} | Best: {}", view.score, view.best),
        c + Vec2::new(0.0, 50.0),
        TextSize::Small,
        false,
        true,
    ));
    out.push(text(
        "Press SPACE or TAP to Restart".to_string(),
        c + Vec2::new(0.0, 90.0),
        TextSize::Small,
        false,
        false,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetResolver, NoAssets};
    use crate::sim::{GameState, handle_activate};
    use crate::sim::obstacles::spawn_pair;
    use std::path::PathBuf;

    struct Everything;

    impl AssetResolver for Everything {
        fn resolve(&self, name: &str) -> Option<PathBuf> {
            Some(PathBuf::from(name))
        }

        fn describe(&self) -> String {
            "test".to_string()
        }
    }

    fn texts(prims: &[Primitive]) -> Vec<&str> {
        prims
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_css_channels_round() {
        assert_eq!(css_rgba(colors::FLOOR), "rgba(210, 180, 140, 1)");
        assert_eq!(css_rgba(colors::SKY), "rgba(135, 206, 235, 1)");
        assert_eq!(css_rgba(colors::PIPE), "rgba(34, 139, 34, 1)");
        assert_eq!(css_rgba(colors::BIRD), "rgba(255, 215, 0, 1)");
        assert!(css_rgba(colors::OVERLAY).starts_with("rgba(0, 0, 0, 0.39"));
        // Off-grid values round to the nearest channel
        assert_eq!(css_rgba([0.82, 0.0, 1.5, 1.0]), "rgba(209, 0, 255, 1)");
    }

    #[test]
    fn test_title_screen_fallback() {
        let state = GameState::new(1);
        let prims = build_frame(&FrameView::capture(&state), &AssetCatalog::load(&NoAssets));
        assert_eq!(
            texts(&prims),
            vec!["FLIPPY BIRD", "Press SPACE or TAP to Start"]
        );
        assert!(!prims.iter().any(|p| matches!(p, Primitive::Image { .. })));
    }

    #[test]
    fn test_active_frame_draws_pipes_and_score() {
        let mut state = GameState::new(2);
        handle_activate(&mut state);
        spawn_pair(&mut state);
        state.score.current = 12;

        let prims = build_frame(&FrameView::capture(&state), &AssetCatalog::load(&NoAssets));
        let pipe_fills = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Fill { color, .. } if *color == colors::PIPE))
            .count();
        assert_eq!(pipe_fills, 2);
        assert_eq!(texts(&prims), vec!["12"]);
    }

    #[test]
    fn test_game_over_frame() {
        let mut state = GameState::new(3);
        state.phase = GamePhase::GameOver;
        state.score.current = 3;
        state.score.best = 5;

        let prims = build_frame(&FrameView::capture(&state), &AssetCatalog::load(&NoAssets));
        assert!(prims
            .iter()
            .any(|p| matches!(p, Primitive::Fill { color, .. } if *color == colors::OVERLAY)));
        assert_eq!(
            texts(&prims),
            vec![
                "GAME OVER",
                "Score: 3 | Best: 5",
                "Press SPACE or TAP to Restart"
            ]
        );
    }

    #[test]
    fn test_sprites_used_when_available() {
        let mut state = GameState::new(4);
        handle_activate(&mut state);
        spawn_pair(&mut state);
        state.avatar.velocity = 2.0;

        let prims = build_frame(&FrameView::capture(&state), &AssetCatalog::load(&Everything));
        let flips: Vec<bool> = prims
            .iter()
            .filter_map(|p| match p {
                Primitive::Image {
                    asset: ImageAsset::Pipe,
                    flip_y,
                    ..
                } => Some(*flip_y),
                _ => None,
            })
            .collect();
        assert_eq!(flips, vec![false, true]);

        let bird_rotation = prims.iter().find_map(|p| match p {
            Primitive::Image {
                asset: ImageAsset::Bird,
                rotation,
                ..
            } => Some(*rotation),
            _ => None,
        });
        assert_eq!(bird_rotation, Some(-6.0));

        let bases = prims
            .iter()
            .filter(|p| matches!(p, Primitive::Image { asset: ImageAsset::Base, .. }))
            .count();
        assert_eq!(bases, 2);
    }
}

//! Menu button geometry
//!
//! Screen-space hit rectangles for every menu, shared by the click
//! handling in `tick` and the draw pass in `ui`. All bands are
//! normalized to bottom <= top on the 800x600 logical screen.

use super::collision::Rect;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

fn center() -> (f32, f32) {
    (SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0)
}

/// Difficulty selector, start, guide, and quit buttons
#[derive(Debug, Clone)]
pub struct MainMenuLayout {
    pub easy: Rect,
    pub medium: Rect,
    pub hard: Rect,
    pub start: Rect,
    pub guide: Rect,
    pub quit: Rect,
}

impl Default for MainMenuLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl MainMenuLayout {
    pub fn new() -> Self {
        let (cx, cy) = center();
        Self {
            easy: Rect::from_bounds(cx - 180.0, cx - 130.0, cy, cy + 30.0),
            medium: Rect::from_bounds(cx - 60.0, cx + 20.0, cy, cy + 30.0),
            hard: Rect::from_bounds(cx + 80.0, cx + 140.0, cy, cy + 30.0),
            start: Rect::from_bounds(cx - 60.0, cx + 103.0, cy - 80.0, cy - 45.0),
            guide: Rect::from_bounds(cx - 380.0, cx - 215.0, cy - 270.0, cy - 235.0),
            quit: Rect::from_bounds(cx - 55.0, cx + 7.0, cy - 135.0, cy - 100.0),
        }
    }
}

/// Resume, restart, and quit, stacked from the bottom up
#[derive(Debug, Clone)]
pub struct PauseMenuLayout {
    pub resume: Rect,
    pub restart: Rect,
    pub quit: Rect,
}

impl Default for PauseMenuLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl PauseMenuLayout {
    pub fn new() -> Self {
        let (cx, cy) = center();
        let width = 200.0;
        let height = 35.0;
        let spacing = 20.0;
        let left = cx - width / 2.0;
        let quit_bottom = cy - (height * 1.5 + spacing * 2.0);
        let restart_bottom = quit_bottom + height + spacing;
        let resume_bottom = restart_bottom + height + spacing;
        Self {
            quit: Rect::from_bounds(left, left + 60.0, quit_bottom, quit_bottom + height),
            restart: Rect::from_bounds(left, left + width, restart_bottom, restart_bottom + height),
            resume: Rect::from_bounds(
                left,
                left + width + 10.0,
                resume_bottom,
                resume_bottom + height,
            ),
        }
    }
}

/// Restart and quit after a run ends
#[derive(Debug, Clone)]
pub struct GameOverLayout {
    pub restart: Rect,
    pub quit: Rect,
}

impl Default for GameOverLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl GameOverLayout {
    pub fn new() -> Self {
        let (cx, cy) = center();
        Self {
            restart: Rect::from_bounds(cx - 60.0, cx + 50.0, cy - 90.0, cy - 60.0),
            quit: MainMenuLayout::new().quit,
        }
    }
}

/// The guide page's single quit button
#[derive(Debug, Clone)]
pub struct GuideLayout {
    pub quit: Rect,
}

impl Default for GuideLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl GuideLayout {
    pub fn new() -> Self {
        let (cx, cy) = center();
        Self {
            quit: Rect::from_bounds(cx - 60.0, cx, cy - 270.0, cy - 235.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn buttons_do_not_overlap_within_a_menu() {
        let menu = MainMenuLayout::new();
        let rects = [
            menu.easy, menu.medium, menu.hard, menu.start, menu.guide, menu.quit,
        ];
        for (i, a) in rects.iter().enumerate() {
            for b in rects.iter().skip(i + 1) {
                let disjoint =
                    a.right < b.left || b.right < a.left || a.top < b.bottom || b.top < a.bottom;
                assert!(disjoint, "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn pause_buttons_stack_upward() {
        let menu = PauseMenuLayout::new();
        assert!(menu.quit.top < menu.restart.bottom);
        assert!(menu.restart.top < menu.resume.bottom);
    }

    #[test]
    fn button_centers_hit_their_own_rect() {
        let menu = MainMenuLayout::new();
        for rect in [menu.easy, menu.start, menu.quit] {
            assert!(rect.contains(rect.center()));
        }
        let pause = PauseMenuLayout::new();
        assert!(pause.resume.contains(pause.resume.center()));
        assert!(!pause.resume.contains(Vec2::new(-1.0, -1.0)));
    }
}

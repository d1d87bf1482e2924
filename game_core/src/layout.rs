use glam::Vec2;

use crate::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Inclusive on every edge
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn to_rect(&self) -> proto::Rect {
        let size = self.size();
        proto::Rect::new(self.min.x, self.min.y, size.x, size.y)
    }
}

/// Screen regions of the menu and scoreboard buttons
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub play: Aabb,
    pub scoreboard: Aabb,
    pub back: Aabb,
}

impl Layout {
    const MENU_BUTTON: Vec2 = Vec2::new(200.0, 50.0);
    const BACK_BUTTON: Vec2 = Vec2::new(160.0, 50.0);
    const SCOREBOARD_OFFSET: f32 = 80.0; // Below the play button
    const BACK_FROM_FLOOR: f32 = 80.0;

    pub fn new(config: &Config) -> Self {
        let cx = config.table_width / 2.0;
        let cy = config.table_height / 2.0;
        Self {
            play: Aabb::from_center_size(Vec2::new(cx, cy), Self::MENU_BUTTON),
            scoreboard: Aabb::from_center_size(
                Vec2::new(cx, cy + Self::SCOREBOARD_OFFSET),
                Self::MENU_BUTTON,
            ),
            back: Aabb::from_center_size(
                Vec2::new(cx, config.table_height - Self::BACK_FROM_FLOOR),
                Self::BACK_BUTTON,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_contains_edges() {
        let aabb = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 5.0));
        assert!(aabb.contains(Vec2::new(0.0, 0.0)));
        assert!(aabb.contains(Vec2::new(10.0, 5.0)));
        assert!(!aabb.contains(Vec2::new(10.1, 2.0)));
        assert!(!aabb.contains(Vec2::new(5.0, -0.1)));
    }

    #[test]
    fn test_button_regions_on_default_table() {
        let config = Config::new().with_table_size(800.0, 600.0);
        let layout = Layout::new(&config);

        assert_eq!(layout.play.min, Vec2::new(300.0, 275.0));
        assert_eq!(layout.play.max, Vec2::new(500.0, 325.0));
        assert_eq!(layout.scoreboard.min, Vec2::new(300.0, 355.0));
        assert_eq!(layout.scoreboard.max, Vec2::new(500.0, 405.0));
        assert_eq!(layout.back.min, Vec2::new(320.0, 495.0));
        assert_eq!(layout.back.max, Vec2::new(480.0, 545.0));
    }

    #[test]
    fn test_to_rect() {
        let aabb = Aabb::from_center_size(Vec2::new(100.0, 50.0), Vec2::new(20.0, 10.0));
        assert_eq!(aabb.to_rect(), proto::Rect::new(90.0, 45.0, 20.0, 10.0));
    }
}

use raylib::prelude::*;
use crate::constants::*;
use crate::state::{Toggle, Visibility};

#[derive(Default)]
pub struct Indicator {
    visibility: Visibility,
}

impl Indicator {
    pub fn opacity(&self) -> f32 {
        if self.visibility.is_active() { 1.0 } else { INACTIVE_INDICATOR_OPACITY }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, center: Vector2) {
        let alpha = (self.opacity() * 255.0).round() as u8;
        d.draw_circle_v(center, DOT_RADIUS, Color::new(255, 255, 255, alpha));
    }
}

impl Toggle for Indicator {
    fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }
}

use raylib::prelude::*;
use crate::constants::*;
use crate::layout::fit_to_screen;
use crate::showcase::fade::Fade;
use crate::state::{Toggle, Visibility};

pub struct Slide {
    image: Texture2D,
    pub title: String,
    fade: Fade,
}

impl Slide {
    pub fn new(image: Texture2D, title: String) -> Self {
        Self { image, title, fade: Fade::new(INACTIVE_SLIDE_OPACITY) }
    }

    pub fn update(&mut self, dt: f32) {
        if self.fade.is_fading() {
            self.fade.update(dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let opacity = self.fade.opacity();
        if opacity <= 0.0 {
            return;
        }

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        let dest = fit_to_screen(
            tex_width,
            tex_height,
            d.get_screen_width() as f32,
            d.get_screen_height() as f32,
        );

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::new(255, 255, 255, (opacity.clamp(0.0, 1.0) * 255.0).round() as u8),
        );
    }
}

impl Toggle for Slide {
    fn set_visibility(&mut self, visibility: Visibility) {
        self.fade.set_visibility(visibility);
    }

    fn visibility(&self) -> Visibility {
        self.fade.visibility()
    }
}

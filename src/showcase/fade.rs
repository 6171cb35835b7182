use raylib::prelude::*;
use crate::constants::*;
use crate::state::{Toggle, Visibility};

// Opacity that eases toward the current visibility
pub struct Fade {
    visibility: Visibility,
    opacity: f32,
    inactive_opacity: f32,

    tween: Option<ease::Tween>,
    fade_timer: f32,
    start_opacity: f32,
    target_opacity: f32,
}

impl Fade {
    pub fn new(inactive_opacity: f32) -> Self {
        Self {
            visibility: Visibility::Inactive,
            opacity: inactive_opacity,
            inactive_opacity,
            tween: None,
            fade_timer: 0.0,
            start_opacity: inactive_opacity,
            target_opacity: inactive_opacity,
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn is_fading(&self) -> bool {
        self.tween.is_some()
    }

    pub fn update(&mut self, dt: f32) {
        let Some(tween) = self.tween.as_mut() else {
            return;
        };
        self.opacity = tween.apply(dt);
        self.fade_timer += dt;

        if self.fade_timer >= FADE_DURATION {
            self.opacity = self.target_opacity;
            self.tween = None;
        }
    }
}

impl Toggle for Fade {
    fn set_visibility(&mut self, visibility: Visibility) {
        if visibility == self.visibility {
            return;
        }
        self.visibility = visibility;
        // Reversing mid-fade starts from wherever the opacity is now
        self.start_opacity = self.opacity;
        self.target_opacity = if visibility.is_active() { 1.0 } else { self.inactive_opacity };
        self.tween = Some(ease::Tween::new(ease::cubic_out, self.start_opacity, self.target_opacity, FADE_DURATION));
        self.fade_timer = 0.0;
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }
}

use std::path::PathBuf;
use std::time::Duration;
use anyhow::Context;
use raylib::prelude::*;
use tracing::{info, warn};
use crate::carousel::Carousel;
use crate::constants::*;
use crate::layout::Layout;
use crate::menu::Menu;
use crate::showcase::indicator::Indicator;
use crate::showcase::input::{route_click, route_key};
use crate::showcase::slide::Slide;
use crate::state::SlideEvent;
use crate::texture_loader::{load_texture_with_exif_rotation, slide_title};
use crate::timer::AutoAdvance;

pub struct ShowcaseEngine {
    carousel: Carousel<Slide, Indicator>,
    timer: AutoAdvance,
    menu: Menu,
    layout: Layout,
    screen: (i32, i32),
}

impl ShowcaseEngine {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.timer = AutoAdvance::new(interval);
        info!(interval = ?self.timer.interval(), "Auto-advance interval set");
        self
    }

    fn poll_input(&mut self, rl: &mut RaylibHandle) -> Vec<SlideEvent> {
        let mut events = Vec::new();

        while let Some(key) = rl.get_key_pressed() {
            events.extend(route_key(key, &mut self.menu));
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let hit = self.layout.hit(rl.get_mouse_position(), self.menu.is_open());
            events.extend(route_click(hit, &mut self.menu));
        }

        events
    }

    fn draw_controls(&self, d: &mut RaylibDrawHandle) {
        let button = Color::new(0, 0, 0, 110);
        let glyph_size = (ARROW_SIZE * 0.7) as i32;

        for (rect, glyph) in [(self.layout.previous, "<"), (self.layout.next, ">")] {
            d.draw_rectangle_rec(rect, button);
            let glyph_width = d.measure_text(glyph, glyph_size);
            d.draw_text(
                glyph,
                (rect.x + (rect.width - glyph_width as f32) * 0.5) as i32,
                (rect.y + (rect.height - glyph_size as f32) * 0.5) as i32,
                glyph_size,
                Color::WHITE,
            );
        }

        for (indicator, center) in self.carousel.indicators().iter().zip(&self.layout.dots) {
            indicator.draw(d, *center);
        }
    }

    fn draw_menu(&self, d: &mut RaylibDrawHandle) {
        let b = self.layout.menu_button;
        d.draw_rectangle_rec(b, Color::new(0, 0, 0, 110));
        for bar in 0..3 {
            let y = b.y + b.height * (0.3 + 0.2 * bar as f32);
            d.draw_rectangle(
                (b.x + b.width * 0.2) as i32,
                y as i32 - 1,
                (b.width * 0.6) as i32,
                3,
                Color::WHITE,
            );
        }

        if !self.menu.is_open() {
            return;
        }

        for (i, (entry, label)) in self.layout.menu_entries.iter().zip(self.menu.labels()).enumerate() {
            let background = if i == self.carousel.current() {
                Color::new(255, 255, 255, 60)
            } else {
                Color::new(0, 0, 0, 180)
            };
            d.draw_rectangle_rec(*entry, background);
            d.draw_text(
                label,
                (entry.x + 10.0) as i32,
                (entry.y + (entry.height - MENU_FONT_SIZE as f32) * 0.5) as i32,
                MENU_FONT_SIZE,
                Color::WHITE,
            );
        }
    }
}

impl crate::engine::Engine for ShowcaseEngine {
    fn initialize(rl: &mut RaylibHandle, thread: &RaylibThread, paths: Vec<PathBuf>) -> anyhow::Result<Self> {
        let mut slides = Vec::new();
        for path in paths {
            match load_texture_with_exif_rotation(rl, thread, &path) {
                Ok(image) => slides.push(Slide::new(image, slide_title(&path))),
                Err(e) => warn!(error = ?e, "Skipping image"),
            }
        }

        let labels: Vec<String> = slides.iter().map(|s| s.title.clone()).collect();
        let indicators: Vec<Indicator> = (0..slides.len()).map(|_| Indicator::default()).collect();
        let carousel = Carousel::new(slides, indicators).context("No slides were loaded")?;
        info!(slides = carousel.slide_count(), "Carousel ready");

        let screen = (rl.get_screen_width(), rl.get_screen_height());
        Ok(Self {
            layout: Layout::compute(screen.0 as f32, screen.1 as f32, carousel.slide_count()),
            carousel,
            timer: AutoAdvance::default(),
            menu: Menu::new(labels),
            screen,
        })
    }

    fn update(&mut self, dt: f32, rl: &mut RaylibHandle) {
        let screen = (rl.get_screen_width(), rl.get_screen_height());
        if screen != self.screen {
            self.screen = screen;
            self.layout = Layout::compute(screen.0 as f32, screen.1 as f32, self.carousel.slide_count());
        }

        let events = self.poll_input(rl);
        self.carousel.step(events, &mut self.timer, Duration::from_secs_f32(dt.max(0.0)));

        for slide in self.carousel.slides_mut() {
            slide.update(dt);
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle) {
        d.clear_background(Color::BLACK);

        for slide in self.carousel.slides() {
            slide.draw(d);
        }

        self.draw_controls(d);
        self.draw_menu(d);
    }
}

use std::time::Duration;
use tracing::{debug, warn};
use crate::error::CarouselError;
use crate::state::{Direction, SlideEvent, Toggle, Visibility};
use crate::timer::AutoAdvance;

pub struct Carousel<S, I> {
    slides: Vec<S>,
    indicators: Vec<I>,
    current: usize,
}

impl<S: Toggle, I: Toggle> Carousel<S, I> {
    pub fn new(slides: Vec<S>, indicators: Vec<I>) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::Empty);
        }
        if slides.len() != indicators.len() {
            return Err(CarouselError::IndicatorMismatch {
                slides: slides.len(),
                indicators: indicators.len(),
            });
        }

        let mut carousel = Self { slides, indicators, current: 0 };
        carousel.render(0);
        Ok(carousel)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    pub fn slides_mut(&mut self) -> &mut [S] {
        &mut self.slides
    }

    pub fn indicators(&self) -> &[I] {
        &self.indicators
    }

    // `index` must be in range; callers keep it there
    pub fn render(&mut self, index: usize) {
        for item in self.slides.iter_mut() {
            item.set_visibility(Visibility::Inactive);
        }
        for item in self.indicators.iter_mut() {
            item.set_visibility(Visibility::Inactive);
        }
        self.slides[index].set_visibility(Visibility::Active);
        self.indicators[index].set_visibility(Visibility::Active);
    }

    pub fn advance(&mut self, direction: Direction) {
        let n = self.slides.len();
        self.current = match direction {
            Direction::Forward => (self.current + 1) % n,
            Direction::Backward => (self.current + n - 1) % n,
        };
        self.render(self.current);
    }

    pub fn select(&mut self, index: usize) {
        if index >= self.slides.len() {
            warn!(index, len = self.slides.len(), "Ignoring selection of missing slide");
            return;
        }
        self.current = index;
        self.render(self.current);
    }

    pub fn handle(&mut self, event: SlideEvent) {
        let before = self.current;
        match event {
            SlideEvent::Next | SlideEvent::AutoAdvance => self.advance(Direction::Forward),
            SlideEvent::Previous => self.advance(Direction::Backward),
            SlideEvent::Select(index) => self.select(index),
        }
        debug!(?event, from = before, to = self.current, "Slide transition");
    }

    // --- One frame: user events first, then any timer firings; the last one wins ---
    pub fn step(&mut self, events: impl IntoIterator<Item = SlideEvent>, timer: &mut AutoAdvance, dt: Duration) {
        for event in events {
            self.handle(event);
        }
        for _ in 0..timer.tick(dt) {
            self.handle(SlideEvent::AutoAdvance);
        }
    }
}

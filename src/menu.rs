use tracing::debug;
use crate::state::SlideEvent;

pub struct Menu {
    labels: Vec<String>,
    open: bool,
}

impl Menu {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels, open: false }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        debug!(open = self.open, "Menu toggled");
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    // Following any link hides the menu
    pub fn activate(&mut self, link: usize) -> Option<SlideEvent> {
        self.close();
        (link < self.labels.len()).then_some(SlideEvent::Select(link))
    }
}

use raylib::prelude::*;
use crate::constants::*;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Hit {
    Previous,
    Next,
    Indicator(usize),
    MenuButton,
    MenuLink(usize),
    None,
}

pub struct Layout {
    pub previous: Rectangle,
    pub next: Rectangle,
    pub dots: Vec<Vector2>,
    pub menu_button: Rectangle,
    pub menu_entries: Vec<Rectangle>,
}

impl Layout {
    pub fn compute(screen_width: f32, screen_height: f32, slide_count: usize) -> Self {
        let arrow_y = (screen_height - ARROW_SIZE) * 0.5;
        let previous = Rectangle::new(ARROW_MARGIN, arrow_y, ARROW_SIZE, ARROW_SIZE);
        let next = Rectangle::new(screen_width - ARROW_MARGIN - ARROW_SIZE, arrow_y, ARROW_SIZE, ARROW_SIZE);

        // Centred row of dots along the bottom edge
        let row_width = slide_count.saturating_sub(1) as f32 * DOT_SPACING;
        let first_x = (screen_width - row_width) * 0.5;
        let dot_y = screen_height - DOT_BOTTOM_MARGIN;
        let dots = (0..slide_count)
            .map(|i| Vector2::new(first_x + i as f32 * DOT_SPACING, dot_y))
            .collect();

        let menu_button = Rectangle::new(
            screen_width - ARROW_MARGIN - MENU_BUTTON_SIZE,
            ARROW_MARGIN,
            MENU_BUTTON_SIZE,
            MENU_BUTTON_SIZE,
        );
        let entries_top = menu_button.y + MENU_BUTTON_SIZE + 8.0;
        let menu_entries = (0..slide_count)
            .map(|i| {
                Rectangle::new(
                    screen_width - ARROW_MARGIN - MENU_WIDTH,
                    entries_top + i as f32 * MENU_ENTRY_HEIGHT,
                    MENU_WIDTH,
                    MENU_ENTRY_HEIGHT,
                )
            })
            .collect();

        Self { previous, next, dots, menu_button, menu_entries }
    }

    pub fn hit(&self, point: Vector2, menu_open: bool) -> Hit {
        if menu_open {
            if let Some(i) = self.menu_entries.iter().position(|r| contains(r, point)) {
                return Hit::MenuLink(i);
            }
        }
        if contains(&self.menu_button, point) {
            return Hit::MenuButton;
        }
        if contains(&self.previous, point) {
            return Hit::Previous;
        }
        if contains(&self.next, point) {
            return Hit::Next;
        }

        // Slightly larger than the drawn dot so small targets stay clickable
        let reach = DOT_RADIUS + 4.0;
        self.dots
            .iter()
            .position(|dot| {
                let (dx, dy) = (point.x - dot.x, point.y - dot.y);
                dx * dx + dy * dy <= reach * reach
            })
            .map_or(Hit::None, Hit::Indicator)
    }
}

fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

// --- Letterbox: largest centred rectangle with the texture's aspect ratio ---
pub fn fit_to_screen(tex_width: f32, tex_height: f32, screen_width: f32, screen_height: f32) -> Rectangle {
    if tex_width <= 0.0 || tex_height <= 0.0 {
        return Rectangle::new(0.0, 0.0, 0.0, 0.0);
    }
    let scale = (screen_width / tex_width).min(screen_height / tex_height);
    let width = tex_width * scale;
    let height = tex_height * scale;
    Rectangle::new((screen_width - width) * 0.5, (screen_height - height) * 0.5, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centre(rect: &Rectangle) -> Vector2 {
        Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5)
    }

    #[test]
    fn dots_are_centred_and_evenly_spaced() {
        let layout = Layout::compute(800.0, 600.0, 3);
        assert_eq!(layout.dots.len(), 3);
        assert_eq!(layout.dots[1].x, 400.0);
        assert_eq!(layout.dots[2].x - layout.dots[1].x, DOT_SPACING);
        assert!(layout.dots.iter().all(|d| d.y == 600.0 - DOT_BOTTOM_MARGIN));
    }

    #[test]
    fn hits_every_control() {
        let layout = Layout::compute(800.0, 600.0, 4);
        assert_eq!(layout.hit(centre(&layout.previous), false), Hit::Previous);
        assert_eq!(layout.hit(centre(&layout.next), false), Hit::Next);
        assert_eq!(layout.hit(centre(&layout.menu_button), false), Hit::MenuButton);
        for (i, dot) in layout.dots.iter().enumerate() {
            assert_eq!(layout.hit(*dot, false), Hit::Indicator(i));
        }
        assert_eq!(layout.hit(Vector2::new(400.0, 300.0), false), Hit::None);
    }

    #[test]
    fn menu_links_only_when_open() {
        let layout = Layout::compute(800.0, 600.0, 4);
        let link = centre(&layout.menu_entries[2]);
        assert_eq!(layout.hit(link, true), Hit::MenuLink(2));
        assert_ne!(layout.hit(link, false), Hit::MenuLink(2));
    }

    #[test]
    fn menu_links_take_precedence() {
        // The next arrow sits under the menu on a short screen
        let layout = Layout::compute(400.0, 200.0, 6);
        let point = centre(&layout.next);
        assert!(matches!(layout.hit(point, true), Hit::MenuLink(_)));
        assert_eq!(layout.hit(point, false), Hit::Next);
    }

    #[test]
    fn fit_letterboxes_wide_images() {
        let rect = fit_to_screen(2000.0, 500.0, 1000.0, 500.0);
        assert_eq!(rect.width, 1000.0);
        assert_eq!(rect.height, 250.0);
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, 125.0);
    }

    #[test]
    fn fit_pillarboxes_tall_images() {
        let rect = fit_to_screen(300.0, 600.0, 1000.0, 500.0);
        assert!((rect.height - 500.0).abs() < 1e-3);
        assert!((rect.width - 250.0).abs() < 1e-3);
        assert!((rect.x - 375.0).abs() < 1e-3);
    }
}

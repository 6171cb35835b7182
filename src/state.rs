#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Visibility {
    Active,    // Slide shown at full opacity, indicator highlighted
    #[default]
    Inactive,  // Slide hidden, indicator dimmed
}

impl Visibility {
    pub fn is_active(self) -> bool {
        self == Visibility::Active
    }
}

pub trait Toggle {
    fn set_visibility(&mut self, visibility: Visibility);
    fn visibility(&self) -> Visibility;
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SlideEvent {
    Next,
    Previous,
    Select(usize),
    AutoAdvance,
}

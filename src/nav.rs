use std::rc::Rc;

use yew::functional::Reducible;

/// Mobile navigation panel state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavMenu {
    open: bool,
    breakpoint: f64,
}

pub enum NavAction {
    Toggle,
    /// A navigation link was activated.
    Close,
    /// The viewport was resized to this inner width.
    Resized(f64),
}

impl NavMenu {
    pub fn new(breakpoint: f64) -> Self {
        Self {
            open: false,
            breakpoint,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn apply(self, action: NavAction) -> Self {
        let open = match action {
            NavAction::Toggle => !self.open,
            NavAction::Close => false,
            NavAction::Resized(width) if width > self.breakpoint => false,
            NavAction::Resized(_) => self.open,
        };
        Self { open, ..self }
    }

    pub fn icon_class(&self) -> &'static str {
        if self.open {
            "fas fa-times"
        } else {
            "fas fa-bars"
        }
    }

    pub fn links_class(&self) -> &'static str {
        if self.open {
            "nav-links active"
        } else {
            "nav-links"
        }
    }
}

impl Reducible for NavMenu {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

//! Surface projections.
//!
//! A surface holds no session state of its own. It mirrors the last
//! [`ViewDirective`] plus ambient text, and the frontends draw it.

use crate::ambient::AmbientSnapshot;
use crate::ui::session::{ViewDirective, ViewName};

/// Something that displays the lock session on one output.
pub trait Surface {
    fn apply(&mut self, directive: &ViewDirective);

    fn refresh(&mut self, ambient: &AmbientSnapshot);
}

/// Everything one output draws.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SurfaceModel {
    pub directive: ViewDirective,
    pub ambient: AmbientSnapshot,
    /// Attributed quote, fixed after startup.
    pub quote: String,
}

impl SurfaceModel {
    pub fn new(quote: String, ambient: AmbientSnapshot) -> Self {
        Self {
            directive: ViewDirective::default(),
            ambient,
            quote,
        }
    }

    pub fn view(&self) -> ViewName {
        self.directive.view
    }

    pub fn set_quote(&mut self, quote: String) {
        self.quote = quote;
    }
}

impl Surface for SurfaceModel {
    fn apply(&mut self, directive: &ViewDirective) {
        self.directive = directive.clone();
    }

    fn refresh(&mut self, ambient: &AmbientSnapshot) {
        self.ambient = ambient.clone();
    }
}

//! Local UI chrome state (mobile menu, transient notices).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of the form and listing models so pages
//! can share one notice banner and the navigation shell.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeTone {
    #[default]
    Info,
    Error,
}

/// A dismissible message shown after a submit or a validation failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub tone: NoticeTone,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), tone: NoticeTone::Info }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), tone: NoticeTone::Error }
    }
}

/// Content tabs on the listing detail page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    Description,
    Itinerary,
    Includes,
    Reviews,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [Self::Description, Self::Itinerary, Self::Includes, Self::Reviews];

    pub fn label(self) -> &'static str {
        match self {
            Self::Description => "Descripción",
            Self::Itinerary => "Itinerario",
            Self::Includes => "Incluye",
            Self::Reviews => "Reseñas",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub menu_open: bool,
    pub notice: Option<Notice>,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Any link activation inside the narrow-viewport panel closes it.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

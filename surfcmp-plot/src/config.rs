/// Which figures the window shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Figures {
    /// Surfaces and projection side by side.
    #[default]
    Both,
    /// Only the 3D surface figure.
    Surfaces,
    /// Only the 2D projection figure.
    Projection,
}

/// Configuration for [`show`](crate::show).
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// let config = ShowConfig::new().title("weight = 5").figures(Figures::Surfaces);
/// surfcmp_plot::show(comparison, config)?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ShowConfig {
    pub(crate) title: Option<String>,
    pub(crate) figures: Figures,
    pub(crate) window_size: [f32; 2],
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, both figures, a
    /// window sized for two 8 × 6 figures.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            figures: Figures::Both,
            window_size: [1600.0, 720.0],
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Selects the figures to show.
    #[must_use]
    pub fn figures(mut self, figures: Figures) -> Self {
        self.figures = figures;
        self
    }

    /// Sets the initial inner size of the window, in points.
    #[must_use]
    pub fn window_size(mut self, width: f32, height: f32) -> Self {
        self.window_size = [width, height];
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

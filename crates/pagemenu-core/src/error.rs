use thiserror::Error;

/// Configuration faults detected before a strip or pager is built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Default page {default_page} is out of range for {item_count} items")]
    DefaultPageOutOfRange { default_page: usize, item_count: usize },

    #[error("Menu item count {items} does not match page count {pages}")]
    ItemCountMismatch { items: usize, pages: usize },

    #[error("At least {minimum} items are required, got {count}")]
    ItemCountBelowMinimum { count: usize, minimum: usize },

    #[error("{axis} scale must be between 0 and 1, got {value}")]
    InvalidScaleFactor { axis: ScaleAxis, value: f64 },
}

/// Which round-rect scale factor failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleAxis {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for ScaleAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleAxis::Horizontal => write!(f, "Horizontal"),
            ScaleAxis::Vertical => write!(f, "Vertical"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid menu configuration: {0}")]
    Menu(#[from] ConfigError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

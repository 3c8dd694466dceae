pub mod command;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod geometry;
pub mod menu_strip;
pub mod options;
pub mod pager;
pub mod policy;
pub mod validator;

pub use command::{Command, TransitionId};
pub use config::{AppConfig, EasingType, KeymapConfig, PageConfig, ScrollConfig};
pub use coordinator::{
    NavPhase, NavigationCoordinator, NavigationEvent, NavigationObserver, NavigationState,
    PageHandle,
};
pub use error::{ConfigError, Error, Result};
pub use geometry::{ContainerFrames, ItemGeometry, Rect, Size, TextMeasure};
pub use menu_strip::{MenuItem, MenuStrip};
pub use options::{DisplayMode, ItemMode, LayoutOptions, MenuPosition, ScrollingPolicy};
pub use pager::ContentPager;
pub use policy::SwipeDirection;

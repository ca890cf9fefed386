//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

mod lucide {
    pub use icondata::{
        LuChevronDown as SortDown, LuChevronUp as SortUp, LuGlobe as Network,
        LuSearch as Search,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronDown as SortDown, BsChevronUp as SortUp, BsGlobe as Network,
        BsSearch as Search,
    };
}

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(NETWORK, Network);
themed_icon!(SEARCH, Search);
themed_icon!(SORT_UP, SortUp);
themed_icon!(SORT_DOWN, SortDown);

//! Site Header Component
//!
//! Sticky header with the site title, page links and page-specific
//! controls. Slides out of view while the gallery scrolls down.

use dioxus::prelude::*;

use crate::app::Route;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Gallery,
    Wiki,
}

impl NavLocation {
    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Gallery => "Gallery",
            NavLocation::Wiki => "Wiki",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Gallery => Route::Gallery {},
            NavLocation::Wiki => Route::Wiki {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SiteHeaderProps {
    /// Current location in the app
    pub current: NavLocation,
    /// Whether the header is slid out of view
    #[props(default = false)]
    pub hidden: bool,
    /// Page-specific controls below the title row
    #[props(default)]
    pub children: Element,
}

#[component]
pub fn SiteHeader(props: SiteHeaderProps) -> Element {
    let locations = [NavLocation::Gallery, NavLocation::Wiki];

    rsx! {
        header {
            class: if props.hidden { "header header-hidden" } else { "header" },
            div { class: "header-top",
                h1 { class: "site-title", "🎨 Prompt Gallery" }
                nav { class: "site-nav",
                    for location in locations {
                        span {
                            key: "{location.display_name()}",
                            class: if location == props.current { "nav-link active" } else { "nav-link" },
                            Link { to: location.route(), "{location.display_name()}" }
                        }
                    }
                }
            }
            {props.children}
        }
    }
}

//! # Navigation
//!
//! Which screen is showing, and where "back" goes.
//!
//! ```text
//!  Registration ──submit(valid)──► Listing ──details(name)──► Detail(name)
//!        ▲                            │  ▲                        │
//!        └───────────back─────────────┘  └──────────back──────────┘
//!
//!  Statistics: reachable from anywhere via ViewStatistics, back pops.
//! ```
//!
//! Back is a pop of the stack, not a fixed reverse edge: Detail returns to
//! whatever pushed it.

use std::fmt;
use std::str::FromStr;

use crate::core::error::RouteError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Registration,
    Listing,
    /// Carries the product name the detail view should resolve.
    Detail(String),
    Statistics,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Registration => "Register Product",
            Screen::Listing => "Products",
            Screen::Detail(_) => "Product Details",
            Screen::Statistics => "Statistics",
        }
    }
}

/// Routes: `registration`, `listing`, `detail/<name>`, `statistics`.
impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Registration => f.write_str("registration"),
            Screen::Listing => f.write_str("listing"),
            Screen::Detail(name) => write!(f, "detail/{name}"),
            Screen::Statistics => f.write_str("statistics"),
        }
    }
}

impl FromStr for Screen {
    type Err = RouteError;

    fn from_str(route: &str) -> Result<Self, Self::Err> {
        let route = route.trim();
        match route {
            "registration" => Ok(Screen::Registration),
            "listing" => Ok(Screen::Listing),
            "statistics" => Ok(Screen::Statistics),
            "detail" => Err(RouteError::MissingName(route.to_string())),
            _ => match route.strip_prefix("detail/") {
                Some("") => Err(RouteError::MissingName(route.to_string())),
                Some(name) => Ok(Screen::Detail(name.to_string())),
                None => Err(RouteError::Unknown(route.to_string())),
            },
        }
    }
}

/// Stack of screens. Never empty; the top is the active screen.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::starting_at(Screen::Registration)
    }

    pub fn starting_at(screen: Screen) -> Self {
        Self { stack: vec![screen] }
    }

    pub fn current(&self) -> &Screen {
        // The stack is seeded with one screen and `go_back` never pops the last.
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push `screen`. Returns `false` if it's already showing.
    pub fn navigate(&mut self, screen: Screen) -> bool {
        if *self.current() == screen {
            return false;
        }
        self.stack.push(screen);
        true
    }

    /// Pop to the previous screen. Returns `false` at the root.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }
}

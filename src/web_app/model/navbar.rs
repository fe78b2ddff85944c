// web_app/model/navbar.rs - Navigation chrome rules
//
// The navbar is translucent over the hero section and turns solid white
// once the hero has (almost) scrolled out of view.

/// Scroll offset below which the navbar always stays translucent
pub const NAVBAR_TOP_THRESHOLD: f64 = 50.0;

/// How far before the hero's bottom edge the navbar turns solid
pub const NAVBAR_HERO_MARGIN: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarStyle {
    Glass,
    White,
}

impl NavbarStyle {
    pub fn class(self) -> &'static str {
        match self {
            NavbarStyle::Glass => "navbar-glass",
            NavbarStyle::White => "navbar-white",
        }
    }
}

/// Style for the given scroll offset, or `None` when the page has no hero
/// (the navbar then keeps whatever style it was rendered with).
pub fn navbar_style(scroll_y: f64, hero_height: Option<f64>) -> Option<NavbarStyle> {
    let hero_height = hero_height?;

    if scroll_y > NAVBAR_TOP_THRESHOLD && scroll_y >= hero_height - NAVBAR_HERO_MARGIN {
        Some(NavbarStyle::White)
    } else {
        Some(NavbarStyle::Glass)
    }
}

/// Icon class pair for the mobile menu button
pub fn menu_icon_class(open: bool) -> &'static str {
    if open {
        "fas fa-times"
    } else {
        "fas fa-bars"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_hero_no_change() {
        assert_eq!(navbar_style(500.0, None), None);
    }

    #[test]
    fn test_near_top_is_glass() {
        assert_eq!(navbar_style(0.0, Some(800.0)), Some(NavbarStyle::Glass));
        assert_eq!(navbar_style(50.0, Some(800.0)), Some(NavbarStyle::Glass));
    }

    #[test]
    fn test_inside_hero_is_glass() {
        assert_eq!(navbar_style(699.0, Some(800.0)), Some(NavbarStyle::Glass));
    }

    #[test]
    fn test_past_hero_is_white() {
        assert_eq!(navbar_style(700.0, Some(800.0)), Some(NavbarStyle::White));
        assert_eq!(navbar_style(2000.0, Some(800.0)), Some(NavbarStyle::White));
    }

    #[test]
    fn test_short_hero_stays_glass_near_top() {
        // Hero shorter than the margin: only the top threshold applies
        assert_eq!(navbar_style(40.0, Some(80.0)), Some(NavbarStyle::Glass));
        assert_eq!(navbar_style(60.0, Some(80.0)), Some(NavbarStyle::White));
    }

    #[test]
    fn test_menu_icon() {
        assert_eq!(menu_icon_class(true), "fas fa-times");
        assert_eq!(menu_icon_class(false), "fas fa-bars");
    }
}

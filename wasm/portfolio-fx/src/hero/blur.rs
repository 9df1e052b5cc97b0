//! Profile image display state.
//!
//! Hover and click blur are independent flags. Click blur wins over hover
//! blur when both are set.

/// Current look of the profile image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageDisplay {
    Normal,
    HoverBlur,
    ClickBlur,
}

impl ImageDisplay {
    pub fn scale(&self) -> f64 {
        match self {
            ImageDisplay::Normal => 1.0,
            ImageDisplay::HoverBlur => 1.05,
            ImageDisplay::ClickBlur => 1.1,
        }
    }

    pub fn blur_px(&self) -> f64 {
        match self {
            ImageDisplay::Normal => 0.0,
            ImageDisplay::HoverBlur => 2.0,
            ImageDisplay::ClickBlur => 3.0,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "transform:scale({});filter:blur({}px);",
            self.scale(),
            self.blur_px()
        )
    }
}

/// Glow ring behind the image, driven by hover only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub scale: f64,
    pub opacity: f64,
}

impl Glow {
    pub fn css(&self) -> String {
        format!("transform:scale({});opacity:{};", self.scale, self.opacity)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageBlur {
    pub hovered: bool,
    pub clicked: bool,
}

impl ImageBlur {
    pub fn enter(&mut self) {
        self.hovered = true;
    }

    pub fn leave(&mut self) {
        self.hovered = false;
    }

    /// Click on the image itself toggles click blur.
    pub fn click_image(&mut self) {
        self.clicked = !self.clicked;
    }

    /// A click seen by the document-level listener. Returns true if it closed
    /// the click blur.
    pub fn click_document(&mut self, inside_image: bool) -> bool {
        if self.clicked && !inside_image {
            self.clicked = false;
            return true;
        }
        false
    }

    /// The outside-click listener exists exactly while click blur is on.
    pub fn needs_outside_listener(&self) -> bool {
        self.clicked
    }

    pub fn display(&self) -> ImageDisplay {
        if self.clicked {
            ImageDisplay::ClickBlur
        } else if self.hovered {
            ImageDisplay::HoverBlur
        } else {
            ImageDisplay::Normal
        }
    }

    pub fn glow(&self) -> Glow {
        if self.hovered {
            Glow {
                scale: 1.1,
                opacity: 0.85,
            }
        } else {
            Glow {
                scale: 1.0,
                opacity: 0.75,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_normal() {
        let blur = ImageBlur::default();
        assert_eq!(blur.display(), ImageDisplay::Normal);
        assert!(!blur.needs_outside_listener());
        assert_eq!(blur.glow().opacity, 0.75);
    }

    #[test]
    fn test_click_toggles() {
        let mut blur = ImageBlur::default();
        blur.click_image();
        assert_eq!(blur.display(), ImageDisplay::ClickBlur);
        assert!(blur.needs_outside_listener());
        blur.click_image();
        assert_eq!(blur.display(), ImageDisplay::Normal);
        assert!(!blur.needs_outside_listener());
    }

    #[test]
    fn test_outside_click_closes() {
        let mut blur = ImageBlur::default();
        blur.click_image();
        assert!(!blur.click_document(true));
        assert_eq!(blur.display(), ImageDisplay::ClickBlur);
        assert!(blur.click_document(false));
        assert_eq!(blur.display(), ImageDisplay::Normal);
        assert!(!blur.needs_outside_listener());
        // Nothing to close any more.
        assert!(!blur.click_document(false));
    }

    #[test]
    fn test_click_blur_wins_over_hover() {
        let mut blur = ImageBlur::default();
        blur.enter();
        assert_eq!(blur.display(), ImageDisplay::HoverBlur);
        blur.click_image();
        assert_eq!(blur.display(), ImageDisplay::ClickBlur);
        blur.leave();
        assert_eq!(blur.display(), ImageDisplay::ClickBlur);
        blur.click_image();
        assert_eq!(blur.display(), ImageDisplay::Normal);
    }

    #[test]
    fn test_hover_independent_of_click() {
        let mut blur = ImageBlur::default();
        blur.click_image();
        blur.enter();
        assert!(blur.click_document(false));
        assert!(blur.hovered);
        assert_eq!(blur.display(), ImageDisplay::HoverBlur);
        assert_eq!(blur.glow().scale, 1.1);
    }

    #[test]
    fn test_display_visuals() {
        assert_eq!(ImageDisplay::Normal.css(), "transform:scale(1);filter:blur(0px);");
        assert_eq!(ImageDisplay::HoverBlur.css(), "transform:scale(1.05);filter:blur(2px);");
        assert_eq!(ImageDisplay::ClickBlur.css(), "transform:scale(1.1);filter:blur(3px);");
    }
}

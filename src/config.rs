use log::Level;

pub const FONT_STYLESHEET: &str = "https://fonts.googleapis.com/css2?family=Newsreader:ital,wght@0,400;0,500;0,600;1,400;1,500&family=DM+Sans:wght@400;500;600&display=swap";

/// Window events after which the scroll indicator is re-measured. A resize
/// changes the viewport height and therefore the scrollable distance.
pub const TRACKED_EVENTS: &[&str] = &["scroll", "resize"];

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_scroll_and_resize() {
        assert!(TRACKED_EVENTS.contains(&"scroll"));
        assert!(TRACKED_EVENTS.contains(&"resize"));
    }

    #[test]
    fn font_stylesheet_is_https() {
        assert!(FONT_STYLESHEET.starts_with("https://"));
        assert!(FONT_STYLESHEET.contains("Newsreader"));
        assert!(FONT_STYLESHEET.contains("DM+Sans"));
    }
}

use log::{debug, warn};
use yew::prelude::*;

use crate::config;
use crate::expansion::ActiveSection;
use crate::host::{self, WindowListener};
use crate::scroll::ScrollProgress;

/// Tracks how far the window has scrolled through the document. The window
/// listeners live exactly as long as the calling component is mounted.
#[hook]
pub fn use_scroll_progress() -> ScrollProgress {
    let progress = use_state_eq(|| ScrollProgress::ZERO);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let listener = {
                    let progress = progress.clone();
                    WindowListener::attach(config::TRACKED_EVENTS, move || {
                        progress.set(host::current_progress());
                    })
                };
                let listener = match listener {
                    Ok(listener) => {
                        debug!("Scroll progress tracking {:?}", listener.events());
                        Some(listener)
                    }
                    Err(err) => {
                        warn!("Scroll progress disabled: {}", err);
                        None
                    }
                };

                // Initial check, the page may be restored mid-scroll
                progress.set(host::current_progress());

                move || drop(listener)
            },
            (), // Attach once on mount
        );
    }

    *progress
}

#[hook]
pub fn use_active_section() -> UseReducerHandle<ActiveSection> {
    use_reducer(ActiveSection::none)
}

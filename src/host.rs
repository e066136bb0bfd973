use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::scroll::{ScrollMetrics, ScrollProgress};

#[derive(Debug, Error)]
pub enum HostError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no root element")]
    NoDocumentElement,

    #[error("could not read {0} from window")]
    Unreadable(&'static str),

    #[error("failed to register {event} listener: {reason}")]
    Listener { event: &'static str, reason: String },
}

pub fn read_metrics() -> Result<ScrollMetrics, HostError> {
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    let root = window
        .document()
        .ok_or(HostError::NoDocument)?
        .document_element()
        .ok_or(HostError::NoDocumentElement)?;

    let offset = window
        .scroll_y()
        .map_err(|_| HostError::Unreadable("scrollY"))?;
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .ok_or(HostError::Unreadable("innerHeight"))?;

    Ok(ScrollMetrics {
        offset,
        document_height: f64::from(root.scroll_height()),
        viewport_height,
    })
}

/// Progress for the current window state. Anything the host cannot tell us
/// reads as no progress.
pub fn current_progress() -> ScrollProgress {
    match read_metrics() {
        Ok(metrics) => ScrollProgress::from_metrics(&metrics),
        Err(err) => {
            debug!("Scroll metrics unavailable: {}", err);
            ScrollProgress::ZERO
        }
    }
}

/// A callback registered on the window for one or more events. Every
/// registration made through it is removed when it is dropped.
pub struct WindowListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
    attached: Vec<&'static str>,
}

impl WindowListener {
    pub fn attach(
        events: &[&'static str],
        handler: impl FnMut() + 'static,
    ) -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);

        // Dropping `listener` on an early return detaches whatever was added.
        let mut listener = Self {
            window,
            callback,
            attached: Vec::with_capacity(events.len()),
        };
        for &event in events {
            listener
                .window
                .add_event_listener_with_callback(event, listener.callback.as_ref().unchecked_ref())
                .map_err(|err| HostError::Listener {
                    event,
                    reason: format!("{:?}", err),
                })?;
            listener.attached.push(event);
            debug!("Attached window {} listener", event);
        }
        Ok(listener)
    }

    pub fn events(&self) -> &[&'static str] {
        &self.attached
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        for event in self.attached.drain(..) {
            match self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref())
            {
                Ok(()) => debug!("Detached window {} listener", event),
                Err(err) => warn!("Failed to detach window {} listener: {:?}", event, err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_name_the_missing_piece() {
        assert_eq!(HostError::NoWindow.to_string(), "no global window");
        assert_eq!(
            HostError::Unreadable("innerHeight").to_string(),
            "could not read innerHeight from window"
        );
        let err = HostError::Listener {
            event: "scroll",
            reason: "denied".to_string(),
        };
        assert_eq!(err.to_string(), "failed to register scroll listener: denied");
    }
}

use derive_more::{AsRef, Deref, Display, From, Into};
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct MonitorName(String);

crate::impl_string_newtype!(MonitorName);

pub fn get_monitor_by_name(name: &MonitorName) -> Option<gdk::Monitor> {
    let display = gdk::Display::default()?;
    let monitors = display.monitors();
    (0..monitors.n_items()).find_map(|i| {
        monitors
            .item(i)
            .and_then(|item| item.downcast::<gdk::Monitor>().ok())
            .filter(|m| m.connector().is_some_and(|n| n.as_str() == **name))
    })
}

#[derive(Debug, Clone, Default)]
pub struct WindowMode {
    pub windowed: bool,
    pub monitor: Option<MonitorName>,
}

pub fn init_presentation(window: &gtk::ApplicationWindow, mode: &WindowMode) {
    if mode.windowed {
        window.set_default_size(1280, 720);
        return;
    }

    match mode.monitor.as_ref().and_then(|name| {
        let found = get_monitor_by_name(name);
        if found.is_none() {
            log::warn!("Monitor '{}' not found, using the current one", name);
        }
        found
    }) {
        Some(monitor) => window.fullscreen_on_monitor(&monitor),
        None => window.fullscreen(),
    }
}

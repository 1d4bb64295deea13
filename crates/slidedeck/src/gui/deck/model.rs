use super::CONTENT_MARGIN;
use crate::config::{CardConfig, SlideConfig};
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use pager::style::InlineStyle;
use pager::{HandleKind, Rect, Surface};
use std::cell::RefCell;
use std::rc::Rc;

const ACTIVE_CLASS: &str = "active";
const OUTGOING_CLASS: &str = "prev";

/// Active flags of the indicator dots, shared with the strip's draw function.
#[derive(Debug, Clone, Default)]
pub struct IndicatorStrip {
    active: Vec<bool>,
}

impl IndicatorStrip {
    pub fn new(count: usize) -> Self {
        Self {
            active: vec![false; count],
        }
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    pub fn set(&mut self, index: usize, active: bool) {
        if let Some(flag) = self.active.get_mut(index) {
            *flag = active;
        }
    }
}

/// Inline style of one widget, rendered into a provider that only matches
/// that widget's name.
struct InlineProvider {
    selector: String,
    provider: gtk::CssProvider,
    style: InlineStyle,
}

impl InlineProvider {
    fn attach(widget: &impl IsA<gtk::Widget>, name: String) -> Self {
        widget.set_widget_name(&name);
        let provider = gtk::CssProvider::new();
        if let Some(display) = gdk::Display::default() {
            gtk::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk::STYLE_PROVIDER_PRIORITY_USER,
            );
        }
        Self {
            selector: format!("#{}", name),
            provider,
            style: InlineStyle::default(),
        }
    }

    fn merge(&mut self, widget: &impl IsA<gtk::Widget>, style: &InlineStyle) {
        self.style.merge(style);
        self.render(widget);
    }

    fn clear(&mut self, widget: &impl IsA<gtk::Widget>) {
        self.style = InlineStyle::default();
        self.render(widget);
    }

    fn render(&self, widget: &impl IsA<gtk::Widget>) {
        let css = if self.style.is_empty() {
            String::new()
        } else {
            format!(
                "{} {{ {} }}",
                self.selector,
                self.style.to_css(widget.width() as f64)
            )
        };
        self.provider.load_from_data(&css);
    }
}

pub struct SlidePanel {
    pub root: gtk::ScrolledWindow,
    inline: InlineProvider,
}

impl SlidePanel {
    fn new(index: usize, slide: &SlideConfig, cards: &mut Vec<CardHandle>) -> Self {
        let content = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .spacing(24)
            .valign(gtk::Align::Center)
            .margin_top(CONTENT_MARGIN)
            .margin_bottom(CONTENT_MARGIN)
            .margin_start(CONTENT_MARGIN)
            .margin_end(CONTENT_MARGIN)
            .css_classes(["slide-content"])
            .build();

        content.append(&label(slide.title.as_str(), "slide-title"));
        if let Some(body) = &slide.body {
            content.append(&label(body.as_str(), "slide-body"));
        }

        if !slide.cards.is_empty() {
            let row = gtk::Box::builder()
                .orientation(gtk::Orientation::Horizontal)
                .spacing(18)
                .homogeneous(true)
                .css_classes(["card-row"])
                .build();
            for card in &slide.cards {
                let handle = CardHandle::new(cards.len(), index, card);
                row.append(&handle.widget);
                cards.push(handle);
            }
            content.append(&row);
        }

        let root = gtk::ScrolledWindow::builder()
            .hscrollbar_policy(gtk::PolicyType::Never)
            .hexpand(true)
            .vexpand(true)
            .can_target(false)
            .css_classes(["slide"])
            .child(&content)
            .build();
        let inline = InlineProvider::attach(&root, format!("slide-{}", index));

        Self { root, inline }
    }

    pub fn scroll_offset(&self) -> f64 {
        self.root.vadjustment().value()
    }
}

pub struct CardHandle {
    pub widget: gtk::Box,
    pub slide: usize,
    inline: InlineProvider,
}

impl CardHandle {
    fn new(id: usize, slide: usize, card: &CardConfig) -> Self {
        let widget = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .spacing(8)
            .css_classes(["card"])
            .build();
        widget.append(&label(card.title.as_str(), "card-title"));
        if let Some(text) = &card.text {
            widget.append(&label(text.as_str(), "card-text"));
        }
        let inline = InlineProvider::attach(&widget, format!("card-{}", id));

        Self {
            widget,
            slide,
            inline,
        }
    }

    pub fn merge_style(&mut self, style: &InlineStyle) {
        self.inline.merge(&self.widget, style);
    }

    /// Bounds relative to `root`, or `None` before the card is laid out.
    pub fn bounds_in(&self, root: &impl IsA<gtk::Widget>) -> Option<Rect> {
        self.widget.compute_bounds(root).map(|b| {
            Rect::new(
                b.x() as f64,
                b.y() as f64,
                b.width() as f64,
                b.height() as f64,
            )
        })
    }
}

fn label(text: &str, class: &str) -> gtk::Label {
    gtk::Label::builder()
        .label(text)
        .wrap(true)
        .xalign(0.0)
        .css_classes([class])
        .build()
}

/// Builds one panel per slide plus a flat list of every card, in slide order.
pub fn build_slides(slides: &[SlideConfig]) -> (Vec<SlidePanel>, Vec<CardHandle>) {
    let mut cards = Vec::new();
    let panels = slides
        .iter()
        .enumerate()
        .map(|(i, slide)| SlidePanel::new(i, slide, &mut cards))
        .collect();
    (panels, cards)
}

/// The GTK side of the page controller: slide panels in the stage overlay
/// and the dot strip.
pub struct GtkSurface {
    slides: Vec<SlidePanel>,
    indicators: Rc<RefCell<IndicatorStrip>>,
    dots: gtk::DrawingArea,
}

impl GtkSurface {
    pub fn new(
        slides: Vec<SlidePanel>,
        indicators: Rc<RefCell<IndicatorStrip>>,
        dots: gtk::DrawingArea,
    ) -> Self {
        Self {
            slides,
            indicators,
            dots,
        }
    }

    pub fn slide(&self, index: usize) -> Option<&SlidePanel> {
        self.slides.get(index)
    }
}

impl Surface for GtkSurface {
    fn page_count(&self) -> usize {
        self.slides.len()
    }

    fn indicator_count(&self) -> usize {
        self.indicators.borrow().len()
    }

    fn set_active(&mut self, kind: HandleKind, index: usize, active: bool) {
        match kind {
            HandleKind::Page => {
                let root = &self.slides[index].root;
                if active {
                    root.add_css_class(ACTIVE_CLASS);
                } else {
                    root.remove_css_class(ACTIVE_CLASS);
                }
                root.set_can_target(active);
            }
            HandleKind::Indicator => {
                self.indicators.borrow_mut().set(index, active);
                self.dots.queue_draw();
            }
        }
    }

    fn set_outgoing(&mut self, page: usize, outgoing: bool) {
        let root = &self.slides[page].root;
        if outgoing {
            root.add_css_class(OUTGOING_CLASS);
        } else {
            root.remove_css_class(OUTGOING_CLASS);
        }
    }

    fn set_style(&mut self, page: usize, style: &InlineStyle) {
        let panel = &mut self.slides[page];
        panel.inline.merge(&panel.root, style);
    }

    fn clear_style(&mut self, page: usize) {
        let panel = &mut self.slides[page];
        panel.inline.clear(&panel.root);
    }

    #[allow(deprecated)]
    fn flush_layout(&mut self, page: usize) {
        // Reading a style value makes GTK recompute the node's pending style.
        let _ = self.slides[page].root.style_context().color();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_ignores_unknown_indices() {
        let mut strip = IndicatorStrip::new(3);
        strip.set(1, true);
        strip.set(7, true);
        assert!(strip.is_active(1));
        assert!(!strip.is_active(7));
        assert_eq!(strip.len(), 3);
    }
}

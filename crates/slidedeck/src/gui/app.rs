use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::deck::{self, CardHandle, DOT_STRIP_HEIGHT, DotLayout, GtkSurface, IndicatorStrip};
use crate::gui::keys;
use crate::gui::theme::{self, ThemeColors};
use crate::gui::window::{self, WindowMode};
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use pager::effects::{self, EntranceSequence, Parallax, RevealObserver};
use pager::{Deck, Input, NavKey, NavOutcome, Point, Rect};
use relm4::prelude::*;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

type SharedDeck = Rc<RefCell<Deck<GtkSurface>>>;

pub struct AppModel {
    deck: Option<SharedDeck>,
    cards: Vec<CardHandle>,
    entrance: Option<EntranceSequence>,
    parallax: Parallax,
    reveal: RevealObserver,
    hover_duration: Duration,
    config_path: PathBuf,
    background: gtk::CssProvider,
    wake_at: Option<Instant>,
    root: gtk::ApplicationWindow,
    dots: gtk::DrawingArea,
}

pub struct AppInit {
    pub config: Config,
    pub config_path: PathBuf,
    pub mode: WindowMode,
    pub rx: async_channel::Receiver<AppEvent>,
}

#[derive(Debug)]
pub enum AppMsg {
    Key(NavKey),
    Wheel(f64),
    DotClick(Point),
    /// A touch interaction finished; the deck already handled it.
    Touched(Option<NavOutcome>),
    Scrolled(usize),
    CardHover(usize),
    Tick,
    ConfigReload,
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
            AppEvent::Quit => AppMsg::Quit,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = AppInit;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("slidedeck"),
            add_css_class: "deck-window",

            add_controller = gtk::EventControllerKey {
                set_propagation_phase: gtk::PropagationPhase::Capture,
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Quit);
                        return glib::Propagation::Stop;
                    }
                    if let Some(nav) = keys::nav_key(key) {
                        sender.input(AppMsg::Key(nav));
                    }
                    glib::Propagation::Proceed
                }
            },

            add_controller = gtk::EventControllerScroll::new(gtk::EventControllerScrollFlags::VERTICAL) {
                set_propagation_phase: gtk::PropagationPhase::Capture,
                connect_scroll[sender] => move |_, _, dy| {
                    sender.input(AppMsg::Wheel(dy));
                    glib::Propagation::Proceed
                }
            },

            #[name = "stage"]
            gtk::Overlay {
                set_hexpand: true,
                set_vexpand: true,
                add_css_class: "deck-stage",
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let AppInit {
            config,
            config_path,
            mode,
            rx,
        } = init;

        theme::load_css();
        window::init_presentation(&root, &mode);

        let background = gtk::CssProvider::new();
        if let Some(display) = gdk::Display::default() {
            gtk::style_context_add_provider_for_display(
                &display,
                &background,
                gtk::STYLE_PROVIDER_PRIORITY_USER,
            );
        }

        let dots = gtk::DrawingArea::builder()
            .hexpand(true)
            .valign(gtk::Align::End)
            .content_height(DOT_STRIP_HEIGHT)
            .css_classes(["deck-dots"])
            .build();

        let mut model = AppModel {
            deck: None,
            cards: Vec::new(),
            entrance: None,
            parallax: Parallax::new(config.effects.parallax_rate),
            reveal: RevealObserver::from_config(&config.effects),
            hover_duration: config.effects.hover_duration,
            config_path,
            background,
            wake_at: None,
            root: root.clone(),
            dots: dots.clone(),
        };

        let widgets = view_output!();

        let (panels, cards) = deck::build_slides(&config.slides);
        widgets
            .stage
            .set_child(Some(&gtk::Box::new(gtk::Orientation::Vertical, 0)));
        for (i, panel) in panels.iter().enumerate() {
            widgets.stage.add_overlay(&panel.root);
            let sender = sender.clone();
            panel
                .root
                .vadjustment()
                .connect_value_changed(move |_| sender.input(AppMsg::Scrolled(i)));
        }
        widgets.stage.add_overlay(&dots);

        for (i, card) in cards.iter().enumerate() {
            let motion = gtk::EventControllerMotion::new();
            let sender = sender.clone();
            motion.connect_enter(move |_, _, _| sender.input(AppMsg::CardHover(i)));
            card.widget.add_controller(motion);
        }

        let strip = Rc::new(RefCell::new(IndicatorStrip::new(panels.len())));
        let strip_draw = strip.clone();
        dots.set_draw_func(move |area, cr, width, height| {
            #[allow(deprecated)]
            let colors = ThemeColors::from_context(&area.style_context());
            if let Err(e) = deck::draw(
                cr,
                &strip_draw.borrow(),
                width as f64,
                height as f64,
                &colors,
            ) {
                log::error!("Drawing error: {}", e);
            }
        });

        let click = gtk::GestureClick::new();
        {
            let sender = sender.clone();
            click.connect_released(move |_, _, x, y| {
                sender.input(AppMsg::DotClick(Point::new(x, y)));
            });
        }
        dots.add_controller(click);

        let surface = GtkSurface::new(panels, strip, dots);
        match Deck::new(surface, &config.navigation, config.keys.clone()) {
            Ok(deck) => {
                let deck = Rc::new(RefCell::new(deck));
                attach_touch(&widgets.stage, &deck, &sender);
                model.deck = Some(deck);
            }
            Err(e) => log::error!("Cannot start the deck: {}", e),
        }

        model.entrance = Some(EntranceSequence::new(
            cards.len(),
            &config.effects,
            Instant::now(),
        ));
        model.cards = cards;
        model.sync_background();
        model.schedule_wake(&sender);

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        let now = Instant::now();
        match msg {
            AppMsg::Key(key) => {
                let outcome = self
                    .with_deck(|d| d.handle(Input::Key(key), now).outcome)
                    .flatten();
                self.after_navigation(outcome);
            }
            AppMsg::Wheel(delta_y) => {
                self.with_deck(|d| d.handle(Input::Wheel { delta_y }, now));
            }
            AppMsg::DotClick(point) => {
                let layout = DotLayout::new(
                    self.page_count(),
                    self.dots.width() as f64,
                    self.dots.height() as f64,
                );
                if let Some(index) = layout.hit(point) {
                    let outcome = self
                        .with_deck(|d| d.handle(Input::IndicatorClick(index), now).outcome)
                        .flatten();
                    self.after_navigation(outcome);
                }
            }
            AppMsg::Touched(outcome) => self.after_navigation(outcome),
            AppMsg::Scrolled(page) => {
                if self.current() == Some(page) {
                    self.sync_background();
                    self.check_reveal();
                }
            }
            AppMsg::CardHover(id) => {
                let style = effects::hover_style(self.hover_duration);
                if let Some(card) = self.cards.get_mut(id) {
                    card.merge_style(&style);
                }
            }
            AppMsg::Tick => {
                self.wake_at = None;
                let outcome = self.with_deck(|d| d.poll(now)).flatten();
                if let Some(entrance) = &mut self.entrance {
                    for (id, style) in entrance.poll(now) {
                        if let Some(card) = self.cards.get_mut(id) {
                            card.merge_style(&style);
                        }
                    }
                }
                if self.entrance.as_ref().is_some_and(|e| e.is_finished()) {
                    self.entrance = None;
                }
                self.after_navigation(outcome);
            }
            AppMsg::ConfigReload => self.reload(),
            AppMsg::Quit => self.root.close(),
        }
        self.schedule_wake(&sender);
    }
}

impl AppModel {
    fn with_deck<R>(&self, f: impl FnOnce(&mut Deck<GtkSurface>) -> R) -> Option<R> {
        self.deck.as_ref().map(|deck| f(&mut deck.borrow_mut()))
    }

    fn current(&self) -> Option<usize> {
        self.deck.as_ref().map(|deck| deck.borrow().current())
    }

    fn page_count(&self) -> usize {
        self.deck.as_ref().map_or(0, |deck| deck.borrow().total())
    }

    fn after_navigation(&mut self, outcome: Option<NavOutcome>) {
        if let Some(outcome) = outcome {
            log::debug!("Navigation: {}", outcome.describe());
            if outcome.moved() {
                self.sync_background();
            }
        }
        self.check_reveal();
    }

    /// Moves the window background with the current slide's scroll offset.
    fn sync_background(&self) {
        let offset = self
            .deck
            .as_ref()
            .and_then(|deck| {
                let deck = deck.borrow();
                deck.surface()
                    .slide(deck.current())
                    .map(|slide| slide.scroll_offset())
            })
            .unwrap_or(0.0);
        self.background.load_from_data(&format!(
            ".deck-window {{ {} }}",
            self.parallax.background_css(offset)
        ));
    }

    fn check_reveal(&mut self) {
        let Some(current) = self.current() else {
            return;
        };
        let viewport = Rect::new(
            0.0,
            0.0,
            self.root.width() as f64,
            self.root.height() as f64,
        );
        let targets: Vec<(usize, Rect)> = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.slide == current)
            .filter_map(|(i, card)| card.bounds_in(&self.root).map(|r| (i, r)))
            .collect();

        let style = self.reveal.reveal_style();
        for id in self.reveal.observe(viewport, targets) {
            self.cards[id].merge_style(&style);
        }
    }

    fn schedule_wake(&mut self, sender: &ComponentSender<Self>) {
        let deadline = [
            self.deck
                .as_ref()
                .and_then(|deck| deck.borrow().next_deadline()),
            self.entrance.as_ref().and_then(|e| e.next_deadline()),
        ]
        .into_iter()
        .flatten()
        .min();

        let Some(deadline) = deadline else {
            return;
        };
        if self.wake_at.is_some_and(|at| at <= deadline) {
            return;
        }
        self.wake_at = Some(deadline);

        let sender = sender.clone();
        glib::timeout_add_local_once(
            deadline.saturating_duration_since(Instant::now()),
            move || sender.input(AppMsg::Tick),
        );
    }

    fn reload(&mut self) {
        match config::load_config(&self.config_path) {
            Ok(new_config) => {
                if let Some(deck) = &self.deck {
                    let mut deck = deck.borrow_mut();
                    if !new_config.slides.is_empty() && new_config.slides.len() != deck.total() {
                        log::warn!(
                            "Slide count changed ({} -> {}); restart to load the new slides",
                            deck.total(),
                            new_config.slides.len()
                        );
                    }
                    deck.reconfigure(&new_config.navigation, new_config.keys.clone());
                }
                self.parallax = Parallax::new(new_config.effects.parallax_rate);
                self.reveal = RevealObserver::from_config(&new_config.effects);
                self.hover_duration = new_config.effects.hover_duration;
                self.sync_background();
                log::info!("Configuration reloaded");
            }
            Err(e) => log::error!("Failed to reload config: {}", e),
        }
    }
}

/// Touch swipes are handled inside the gesture callbacks: whether to claim
/// the sequence has to be decided before GTK hands it to the scrolled slide.
fn attach_touch(stage: &gtk::Overlay, deck: &SharedDeck, sender: &ComponentSender<AppModel>) {
    let drag = gtk::GestureDrag::new();
    drag.set_touch_only(true);
    drag.set_propagation_phase(gtk::PropagationPhase::Capture);

    let d = deck.clone();
    drag.connect_drag_begin(move |_, x, y| {
        d.borrow_mut()
            .handle(Input::TouchStart(Point::new(x, y)), Instant::now());
    });

    let d = deck.clone();
    drag.connect_drag_update(move |gesture, dx, dy| {
        let Some((x, y)) = gesture.start_point() else {
            return;
        };
        let response = d
            .borrow_mut()
            .handle(Input::TouchMove(Point::new(x + dx, y + dy)), Instant::now());
        if response.capture_touch {
            gesture.set_state(gtk::EventSequenceState::Claimed);
        }
    });

    let d = deck.clone();
    let s = sender.clone();
    drag.connect_drag_end(move |gesture, dx, dy| {
        let Some((x, y)) = gesture.start_point() else {
            return;
        };
        let response = d
            .borrow_mut()
            .handle(Input::TouchEnd(Point::new(x + dx, y + dy)), Instant::now());
        s.input(AppMsg::Touched(response.outcome));
    });

    let d = deck.clone();
    drag.connect_cancel(move |_, _| {
        d.borrow_mut().handle(Input::TouchCancel, Instant::now());
    });

    stage.add_controller(drag);
}

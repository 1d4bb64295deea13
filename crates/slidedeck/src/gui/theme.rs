use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub active: Srgba<f64>,
    pub idle: Srgba<f64>,
    pub outline: Srgba<f64>,
}

impl ThemeColors {
    #[allow(deprecated)]
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            active: Self::lookup_color(
                context,
                "theme_selected_bg_color",
                Srgba::new(0.4, 0.4, 0.8, 0.95),
                None,
            ),
            idle: Self::lookup_color(
                context,
                "theme_fg_color",
                Srgba::new(0.8, 0.8, 0.8, 0.35),
                Some(0.35),
            ),
            outline: Self::lookup_color(
                context,
                "theme_fg_color",
                Srgba::new(0.9, 0.9, 0.9, 0.6),
                Some(0.6),
            ),
        }
    }

    #[allow(deprecated)]
    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.deck-window {
    background-color: #10121a;
    background-image: radial-gradient(circle at center, #23283a, #10121a);
    background-size: 100% 140%;
    background-repeat: no-repeat;
}
.slide {
    opacity: 0;
    transition: opacity 800ms cubic-bezier(0.4, 0, 0.2, 1),
                transform 800ms cubic-bezier(0.4, 0, 0.2, 1);
}
.slide.active {
    opacity: 1;
}
.slide.prev {
    opacity: 0;
}
.slide-title {
    font-size: 40px;
    font-weight: bold;
}
.slide-body {
    font-size: 18px;
}
.card {
    padding: 18px;
    border-radius: 12px;
    background-color: alpha(white, 0.06);
}
.card-title {
    font-weight: bold;
}
.deck-dots, .slide, .slide viewport {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

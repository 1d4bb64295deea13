#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    rate: f64,
}

impl Parallax {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    pub fn offset(&self, scroll_y: f64) -> f64 {
        scroll_y * self.rate
    }

    pub fn background_css(&self, scroll_y: f64) -> String {
        format!("background-position: center {}px;", self.offset(scroll_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_moves_at_half_scroll_speed() {
        let p = Parallax::new(0.5);
        assert_eq!(p.offset(0.0), 0.0);
        assert_eq!(p.offset(240.0), 120.0);
        assert_eq!(p.background_css(101.0), "background-position: center 50.5px;");
    }
}

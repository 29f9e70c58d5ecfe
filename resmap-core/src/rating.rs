pub const MAX_STARS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Star {
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Full => "★",
            Self::Half => "⯪",
            Self::Empty => "☆",
        }
    }

    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Full => "star star-full",
            Self::Half => "star star-half",
            Self::Empty => "star star-empty",
        }
    }
}

/// An average rating prepared for display.
#[derive(Debug, Clone, PartialEq)]
pub struct StarRating {
    pub stars: [Star; MAX_STARS],
    /// The numeric average, e.g. `(4.3)`.
    pub label: String,
}

impl StarRating {
    #[must_use]
    pub fn new(avg: f64) -> Self {
        let rounded = round_to_half(avg);
        let mut stars = [Star::Empty; MAX_STARS];
        for (i, star) in stars.iter_mut().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let position = (i + 1) as f64;
            if position <= rounded.floor() {
                *star = Star::Full;
            } else if (position - 0.5 - rounded).abs() < f64::EPSILON {
                *star = Star::Half;
            }
        }
        Self {
            stars,
            label: format!("({avg:.1})"),
        }
    }

    /// `None` if there is no (usable) average yet.
    #[must_use]
    pub fn from_avg(avg: Option<f64>) -> Option<Self> {
        avg.filter(|v| v.is_finite()).map(Self::new)
    }

    #[must_use]
    pub fn glyphs(&self) -> String {
        self.stars.iter().map(|s| s.glyph()).collect()
    }
}

/// Rounds to the nearest half star within `0..=5`.
#[must_use]
pub fn round_to_half(avg: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let max = MAX_STARS as f64;
    ((avg * 2.0).round() / 2.0).clamp(0.0, max)
}

/// Stars followed by the numeric label, or an empty string without rating.
#[must_use]
pub fn format_rating(avg: Option<f64>) -> String {
    StarRating::from_avg(avg)
        .map(|r| format!("{} {}", r.glyphs(), r.label))
        .unwrap_or_default()
}

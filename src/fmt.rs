use std::fmt::{Display, Formatter};

use chrono::{DateTime, Locale, TimeZone};

/// Long Spanish date with a capitalised month, like `15 de Enero de 2024`.
pub struct SpanishDate(pub String);

impl SpanishDate {
    pub fn new<Tz: TimeZone>(time: &DateTime<Tz>) -> Self
    where
        Tz::Offset: Display,
    {
        let formatted = time.format_localized("%-d de %B de %Y", Locale::es_ES).to_string();
        let words = formatted
            .split(' ')
            .enumerate()
            .map(|(index, word)| if index == 2 { capitalize(word) } else { word.to_string() })
            .collect::<Vec<_>>();
        Self(words.join(" "))
    }
}

impl Display for SpanishDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fixed-point notation that rounds half-way values away from zero.
///
/// `{:.N}` on its own rounds ties to even, so `0.0625` would become `0.062`.
pub struct Fixed {
    pub value: f64,
    pub decimals: u8,
}

impl Fixed {
    #[must_use]
    pub const fn new(value: f64, decimals: u8) -> Self {
        Self { value, decimals }
    }

    /// A tie at `N` decimals is representable only as an odd multiple of `2⁻⁽ᴺ⁺¹⁾`.
    fn is_tie(&self) -> bool {
        let halves = self.value * 2.0_f64.powi(i32::from(self.decimals) + 1);
        halves.is_finite() && halves.fract() == 0.0 && halves % 2.0 != 0.0
    }
}

impl Display for Fixed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let value = if self.is_tie() {
            let scale = 10.0_f64.powi(i32::from(self.decimals));
            (self.value * scale).round() / scale
        } else {
            self.value
        };
        write!(f, "{value:.precision$}", precision = usize::from(self.decimals))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

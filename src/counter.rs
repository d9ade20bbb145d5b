//! Animated numeric counters (`data-count`).

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

pub const COUNT_ATTRIBUTE: &str = "data-count";
pub const PREFIX_ATTRIBUTE: &str = "data-prefix";
pub const SUFFIX_ATTRIBUTE: &str = "data-suffix";
pub const COUNTER_SELECTOR: &str = "[data-count]";

/// Parsed counter attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSpec {
    pub target: i64,
    pub prefix: String,
    pub suffix: String,
}

impl CounterSpec {
    /// Build from raw attribute values. Returns `None` when `data-count`
    /// does not start with an integer.
    #[must_use]
    pub fn parse(count: &str, prefix: Option<&str>, suffix: Option<&str>) -> Option<Self> {
        Some(Self {
            target: parse_leading_int(count)?,
            prefix: prefix.unwrap_or_default().to_owned(),
            suffix: suffix.unwrap_or_default().to_owned(),
        })
    }

    /// Text shown for `value`.
    #[must_use]
    pub fn render(&self, value: i64) -> String {
        format!("{}{}{}", self.prefix, group_thousands(value), self.suffix)
    }
}

/// Integer prefix of `raw` after leading whitespace, like `parseInt(raw, 10)`.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    match digits[..end].parse::<i64>() {
        Ok(n) => Some(n * sign),
        Err(_) => None,
    }
}

/// `1 - (1 - p)^3` for `p` in `[0, 1]`.
#[must_use]
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// One running counter animation.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    spec: CounterSpec,
    duration_ms: f64,
    start_ms: Option<f64>,
}

/// Output of one animation frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(spec: CounterSpec, duration_ms: f64) -> Self {
        Self { spec, duration_ms, start_ms: None }
    }

    /// Text of the finished animation.
    #[must_use]
    pub fn final_text(&self) -> String {
        self.spec.render(self.spec.target)
    }

    /// Advance to frame timestamp `now_ms`. The first call fixes the start.
    #[allow(clippy::cast_possible_truncation)]
    pub fn frame(&mut self, now_ms: f64) -> CounterFrame {
        let start = *self.start_ms.get_or_insert(now_ms);
        let progress = if self.duration_ms > 0.0 { ((now_ms - start) / self.duration_ms).min(1.0) } else { 1.0 };
        #[allow(clippy::cast_precision_loss)]
        let value = (ease_out_cubic(progress) * self.spec.target as f64).round() as i64;
        CounterFrame { text: self.spec.render(value), done: progress >= 1.0 }
    }
}

/// Decimal digits grouped by `,` every three places.
#[must_use]
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

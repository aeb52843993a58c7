// Metadata badge rendering.
// Binds a lookup result to a single styled line; renders nothing until a value exists.

use ratatui::{prelude::*, widgets::Widget};

use crate::cache::MetadataValue;
use crate::fetch::Lookup;

/// What a badge displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    /// "4,200 GitHub stars"
    Stars,
    /// "26.02.2"
    Version,
}

/// Display state of a badge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisplayState {
    /// First lookup still outstanding, nothing cached.
    #[default]
    Pending,
    /// A value is available.
    Ready(MetadataValue),
    /// The lookup finished with nothing to show.
    Unavailable,
}

/// Presentation adapter between a [`Lookup`] and the rendering layer.
#[derive(Debug, Clone)]
pub struct MetadataBadge {
    kind: BadgeKind,
    state: DisplayState,
    style: Style,
}

impl MetadataBadge {
    pub fn new(kind: BadgeKind) -> Self {
        Self {
            kind,
            state: DisplayState::Pending,
            style: Style::default(),
        }
    }

    pub fn stars() -> Self {
        Self::new(BadgeKind::Stars)
    }

    pub fn version() -> Self {
        Self::new(BadgeKind::Version)
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn kind(&self) -> BadgeKind {
        self.kind
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Feed a lookup result into the badge.
    ///
    /// Returns true when the caller should re-render. That happens once, when
    /// the first value arrives; the displayed value never changes afterwards.
    pub fn resolve(&mut self, lookup: Lookup) -> bool {
        if matches!(self.state, DisplayState::Ready(_)) {
            return false;
        }

        match lookup.into_value() {
            Some(value) => {
                self.state = DisplayState::Ready(value);
                true
            }
            None => {
                self.state = DisplayState::Unavailable;
                false
            }
        }
    }

    /// The rendered line, or `None` when there is nothing to show.
    pub fn line(&self) -> Option<Line<'static>> {
        let DisplayState::Ready(value) = &self.state else {
            return None;
        };

        let line = match self.kind {
            BadgeKind::Stars => {
                let count = match value {
                    MetadataValue::Count(n) => format_count(*n),
                    MetadataValue::Text(s) => s.clone(),
                };
                Line::from(vec![
                    Span::styled(count, Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw(" GitHub stars"),
                ])
            }
            BadgeKind::Version => Line::from(value.to_string()),
        };

        Some(line.style(self.style))
    }
}

impl Widget for &MetadataBadge {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(line) = self.line() {
            line.render(area, buf);
        }
    }
}

/// Format a count with comma thousands separators.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

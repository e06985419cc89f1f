use std::path::PathBuf;

use unicode_width::UnicodeWidthStr;

use crate::draw::ListView;

/// A completed state transition of one of the draw controllers.
///
/// The controllers return plain values and the session records them here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawEvent {
    NamesLoaded {
        accepted: usize,
        added: usize,
    },
    NameDrawn {
        name: String,
        remaining: usize,
    },
    ListInspected {
        view: ListView,
    },
    ListReset {
        pool: usize,
    },
    HistoryExported {
        path: PathBuf,
        rows: usize,
    },
    BoundSet {
        bound: u32,
    },
    NoRepeatToggled {
        enabled: bool,
    },
    NumberDrawn {
        value: u32,
        remaining: Option<usize>,
    },
    RangeReset {
        bound: u32,
    },
}

impl DrawEvent {
    pub fn emoji(&self) -> &'static str {
        match self {
            DrawEvent::NamesLoaded { .. } => "📋",
            DrawEvent::NameDrawn { .. } | DrawEvent::NumberDrawn { .. } => "🎉",
            DrawEvent::ListInspected { .. } => "🔍",
            DrawEvent::ListReset { .. } | DrawEvent::RangeReset { .. } => "🔄",
            DrawEvent::HistoryExported { .. } => "💾",
            DrawEvent::BoundSet { .. } => "🔢",
            DrawEvent::NoRepeatToggled { .. } => "🔁",
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(
            self,
            DrawEvent::NameDrawn { .. } | DrawEvent::NumberDrawn { .. }
        )
    }

    /// Inspections are recorded but not worth a log line.
    pub fn is_quiet(&self) -> bool {
        matches!(self, DrawEvent::ListInspected { .. })
    }

    pub fn pretty_print(&self, f: &mut impl std::fmt::Write) -> std::fmt::Result {
        match self {
            DrawEvent::NamesLoaded { accepted, added } => {
                write!(f, "loaded {accepted} names, {added} new")
            }
            DrawEvent::NameDrawn { name, remaining } => {
                write!(f, "drew {name} ({remaining} left)")
            }
            DrawEvent::ListInspected { view } => write!(f, "viewed {view}"),
            DrawEvent::ListReset { pool } => write!(f, "list reset, {pool} in pool"),
            DrawEvent::HistoryExported { path, rows } => {
                write!(f, "exported {rows} rows to {}", path.display())
            }
            DrawEvent::BoundSet { bound } => write!(f, "range set to 1..={bound}"),
            DrawEvent::NoRepeatToggled { enabled } => {
                write!(f, "no-repeat {}", if *enabled { "on" } else { "off" })
            }
            DrawEvent::NumberDrawn { value, remaining } => {
                write!(f, "drew {value}")?;
                if let Some(remaining) = remaining {
                    write!(f, " ({remaining} left)")?;
                }
                Ok(())
            }
            DrawEvent::RangeReset { bound } => write!(f, "range 1..={bound} reset"),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DrawLog {
    entries: Vec<DrawEvent>,
}

impl DrawLog {
    pub fn log(&mut self, entry: DrawEvent) {
        if !entry.is_quiet() {
            let mut buf = String::new();

            let emoji = format_emoji(entry.emoji(), 2);
            buf.push_str(&emoji);
            buf.push(' ');

            entry.pretty_print(&mut buf).ok();
            log::info!("{}", buf);
        }

        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[DrawEvent] {
        &self.entries
    }

    pub fn draws(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_draw()).count()
    }
}

fn emoji_presentation(s: &str) -> String {
    if s.chars().any(|c| c == '\u{FE0F}' || c == '\u{200D}') {
        s.to_string()
    } else {
        format!("{s}\u{FE0F}")
    }
}

/// Pads `s` with spaces to `field_cells` terminal columns.
pub fn pad_cells(s: &str, field_cells: usize) -> String {
    let w = s.width();
    let pad = field_cells.saturating_sub(w);
    format!("{s}{}", " ".repeat(pad))
}

fn format_emoji(emoji: &str, field_cells: usize) -> String {
    let e = emoji_presentation(emoji);
    pad_cells(&e, field_cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draws_counts_only_draw_events() {
        let mut log = DrawLog::default();
        log.log(DrawEvent::NamesLoaded {
            accepted: 2,
            added: 2,
        });
        log.log(DrawEvent::NameDrawn {
            name: "Alice".into(),
            remaining: 1,
        });
        log.log(DrawEvent::NumberDrawn {
            value: 3,
            remaining: None,
        });
        log.log(DrawEvent::ListInspected {
            view: ListView::Drawn,
        });
        assert_eq!(log.entries().len(), 4);
        assert_eq!(log.draws(), 2);
    }

    #[test]
    fn test_pretty_print_number_drawn() {
        let mut buf = String::new();
        DrawEvent::NumberDrawn {
            value: 7,
            remaining: Some(3),
        }
        .pretty_print(&mut buf)
        .unwrap();
        assert_eq!(buf, "drew 7 (3 left)");
    }

    #[test]
    fn test_pad_cells_counts_wide_chars() {
        assert_eq!(pad_cells("王", 4), "王  ");
        assert_eq!(pad_cells("ab", 4), "ab  ");
        assert_eq!(pad_cells("abcdef", 4), "abcdef");
    }
}

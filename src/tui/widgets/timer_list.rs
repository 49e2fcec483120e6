//! Timer list widget: ordered rows with selection, search, and live
//! countdown summaries.
//!
//! The widget holds its own copy of the records; owners refresh it from the
//! store after every mutation so display order always matches the persisted
//! order.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::timer::TimerRecord;
use crate::tui::theme::current_theme;

/// Widest name column before truncation.
const NAME_COLUMN: usize = 28;

/// Ordered timer rows with selection and an optional search filter.
pub struct TimerList {
    items: Vec<TimerRecord>,
    /// Indices into `items` that pass the filter, in display order.
    visible: Vec<usize>,
    /// Selection as an index into `visible`.
    selected: usize,
    search: Option<String>,
    page_size: usize,
}

impl TimerList {
    pub fn new(items: Vec<TimerRecord>) -> Self {
        let mut list = Self {
            items,
            visible: Vec::new(),
            selected: 0,
            search: None,
            page_size: 10,
        };
        list.refresh_visible();
        list
    }

    /// Replace the backing records (after a store mutation), keeping the
    /// selection in range.
    pub fn set_items(&mut self, items: Vec<TimerRecord>) {
        self.items = items;
        self.refresh_visible();
    }

    /// Number of visible (filtered) rows.
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Total number of records, ignoring the filter.
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// The currently selected record.
    pub fn selected_item(&self) -> Option<&TimerRecord> {
        self.visible.get(self.selected).map(|&i| &self.items[i])
    }

    /// Position of the selection in the unfiltered order (for reordering).
    pub fn selected_position(&self) -> Option<usize> {
        self.visible.get(self.selected).copied()
    }

    /// Select the row holding `id` if it is visible.
    pub fn select_id(&mut self, id: uuid::Uuid) {
        if let Some(pos) = self
            .visible
            .iter()
            .position(|&i| self.items[i].id == id)
        {
            self.selected = pos;
        }
    }

    pub fn select_next(&mut self) {
        if !self.visible.is_empty() {
            self.selected = (self.selected + 1).min(self.visible.len() - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible.len().saturating_sub(1);
    }

    pub fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.page_size);
    }

    pub fn page_down(&mut self) {
        if !self.visible.is_empty() {
            self.selected = (self.selected + self.page_size).min(self.visible.len() - 1);
        }
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
    }

    /// Apply a case-insensitive name/description filter.
    pub fn set_search(&mut self, query: String) {
        self.search = Some(query);
        self.refresh_visible();
    }

    pub fn clear_search(&mut self) {
        self.search = None;
        self.refresh_visible();
    }

    /// The active search query, if any.
    pub fn search_filter(&self) -> Option<String> {
        self.search.clone()
    }

    /// Whether a filter currently hides part of the collection.
    pub fn is_filtered(&self) -> bool {
        self.search.as_deref().is_some_and(|s| !s.is_empty())
    }

    fn refresh_visible(&mut self) {
        let query = self.search.as_deref().unwrap_or("").to_lowercase();
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, t)| {
                query.is_empty()
                    || t.name.to_lowercase().contains(&query)
                    || t.description.to_lowercase().contains(&query)
            })
            .map(|(i, _)| i)
            .collect();
        if self.selected >= self.visible.len() {
            self.selected = self.visible.len().saturating_sub(1);
        }
    }
}

/// Render the list into `area` with live remaining summaries at `now_ms`.
pub fn render_timer_list(frame: &mut Frame, area: Rect, list: &TimerList, now_ms: i64) {
    let theme = current_theme();

    if list.is_empty() {
        let hint = if list.is_filtered() {
            "No timers match the search"
        } else {
            "No timers yet - press n to create one"
        };
        let empty = List::new([ListItem::new(Line::from(Span::styled(
            hint,
            theme.text_secondary_style(),
        )))]);
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<ListItem> = list
        .visible
        .iter()
        .map(|&i| {
            let record = &list.items[i];
            ListItem::new(Line::from(row_spans(record, now_ms, &theme)))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(list.selected));

    let widget = List::new(rows)
        .highlight_style(theme.highlight_style())
        .highlight_symbol("> ");
    frame.render_stateful_widget(widget, area, &mut state);
}

/// Build the spans for one row: glyph, padded name, target, live summary.
fn row_spans<'a>(
    record: &TimerRecord,
    now_ms: i64,
    theme: &crate::tui::theme::Theme,
) -> Vec<Span<'a>> {
    let remaining = record.remaining_at(now_ms);
    let summary_style = if remaining.expired {
        theme.success_style()
    } else {
        theme.accent_style()
    };
    vec![
        Span::styled(format!("{} ", record.theme.glyph()), theme.accent_style()),
        Span::styled(pad_name(&record.name), theme.text_style()),
        Span::styled(format!("{:<18}", record.target_date), theme.text_secondary_style()),
        Span::styled(remaining.display, summary_style),
    ]
}

/// Truncate/pad a name to the fixed column width (display width aware).
fn pad_name(name: &str) -> String {
    let mut out = String::new();
    let mut width = 0;
    for c in name.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > NAME_COLUMN - 2 {
            out.push('…');
            width += 1;
            break;
        }
        out.push(c);
        width += w;
    }
    while width < NAME_COLUMN {
        out.push(' ');
        width += 1;
    }
    out
}

//! Dashboard state and command handling.

use std::sync::Arc;

use casebook_data::Dataset;
use casebook_table::render::{Line, LineKind, Span, SpanStyle, render_lines};
use casebook_table::text::{display_width, wrap_words};
use casebook_table::{ColumnKind, EventResult, PageMarker, Table};
use log::{debug, info, trace};

use crate::config::DashboardConfig;
use crate::input::Command;
use crate::nav::{Navigate, Outbox};
use crate::section::{Section, Tab};
use crate::views::detail::{invoice_detail, matter_detail};
use crate::views::{Content, DetailView, ReportLine, ViewContext, open_tab};

const HELP: &str =
    "1-6 section  tab next tab  ↑↓←→ focus  [ ] page  home/end first/last  z page size  s/x sort/unsort  enter open  c collapse  a action  esc back  q quit";

/// Focused cell: a data row position on the current page and a column index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Focus {
    pub row: usize,
    pub column: usize,
}

/// One line of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLine {
    pub spans: Vec<Span>,
    /// Drawn with the focus highlight.
    pub highlight: bool,
    /// Alternate row shading.
    pub alternate: bool,
}

impl ScreenLine {
    fn plain(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            spans: vec![Span::new(text, style)],
            highlight: false,
            alternate: false,
        }
    }

    /// Word-wrap a report line to `width`, keeping its indent on every piece.
    fn from_report(line: &ReportLine, width: u16) -> Vec<Self> {
        if display_width(&line.text) <= width as usize {
            return vec![Self::plain(line.text.clone(), line.style)];
        }
        let body = line.text.trim_start();
        let indent = &line.text[..line.text.len() - body.len()];
        let room = (width as usize).saturating_sub(indent.len()).max(1);
        wrap_words(body, room)
            .into_iter()
            .map(|piece| Self::plain(format!("{}{}", indent, piece), line.style))
            .collect()
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

pub struct App {
    ctx: ViewContext,
    section: Section,
    tab: usize,
    content: Content,
    /// Open detail views, innermost last.
    details: Vec<DetailView>,
    focus: Focus,
    /// First visible line of a text report.
    scroll: usize,
    status: Option<String>,
    running: bool,
}

impl App {
    pub fn new(data: Arc<Dataset>, config: &DashboardConfig) -> Self {
        let ctx = ViewContext {
            data,
            outbox: Outbox::new(),
            page_size: config.page_size,
            today: config.today,
        };
        let section = Section::default();
        let content = open_tab(section.tabs()[0], &ctx);
        Self {
            ctx,
            section,
            tab: 0,
            content,
            details: Vec::new(),
            focus: Focus::default(),
            scroll: 0,
            status: None,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn tab(&self) -> Tab {
        self.section.tabs()[self.tab]
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Title of the innermost open detail view.
    pub fn detail_title(&self) -> Option<&str> {
        self.details.last().map(|d| d.title.as_str())
    }

    /// The table receiving table commands: the innermost detail view's, else the tab's.
    pub fn active_table(&self) -> Option<&Table> {
        match self.details.last() {
            Some(detail) => Some(&detail.page.table),
            None => self.content.table().map(|page| &page.table),
        }
    }

    pub fn handle(&mut self, command: Command) {
        trace!("command {:?}", command);
        self.status = None;

        match command {
            Command::Quit => {
                info!("quit requested");
                self.running = false;
            }
            Command::Section(section) => self.open(section, 0),
            Command::NextTab => {
                let count = self.section.tabs().len();
                self.open(self.section, (self.tab + 1) % count);
            }
            Command::PrevTab => {
                let count = self.section.tabs().len();
                self.open(self.section, (self.tab + count - 1) % count);
            }
            Command::RowUp => self.move_row(-1),
            Command::RowDown => self.move_row(1),
            Command::ColumnLeft => self.move_column(-1),
            Command::ColumnRight => self.move_column(1),
            Command::PrevPage => self.turn_page(false),
            Command::NextPage => self.turn_page(true),
            Command::FirstPage => self.jump_to_page(PageMarker::Page(1)),
            Command::LastPage => {
                if let Some(last) = self.active_table().map(Table::total_pages) {
                    self.jump_to_page(PageMarker::Page(last));
                }
            }
            Command::CyclePageSize => {
                if let Some(table) = self.active_table() {
                    let size = table.page_size().next();
                    table.on_page_size_select(size);
                    self.status = Some(size.to_string());
                    self.focus.row = 0;
                }
            }
            Command::Sort => self.sort_focused(),
            Command::ClearSort => {
                if let Some(table) = self.active_table()
                    && table.sort_state().is_some()
                {
                    table.clear_sort();
                    self.focus.row = 0;
                }
            }
            Command::CollapseAll => {
                if let Some(table) = self.active_table() {
                    table.collapse_all();
                }
            }
            Command::Activate => self.activate(),
            Command::Action => self.first_action(),
            Command::Back => {
                if let Some(detail) = self.details.pop() {
                    debug!("closed {}", detail.title);
                    self.focus = Focus::default();
                }
            }
        }

        for request in self.ctx.outbox.drain() {
            self.navigate(request);
        }
        self.clamp_focus();
    }

    fn open(&mut self, section: Section, tab: usize) {
        self.section = section;
        self.tab = tab.min(section.tabs().len() - 1);
        self.content = open_tab(self.tab(), &self.ctx);
        self.details.clear();
        self.focus = Focus::default();
        self.scroll = 0;
        info!("opened {} / {}", section, self.tab().label());
    }

    fn navigate(&mut self, request: Navigate) {
        debug!("navigate {:?}", request);
        let view = match &request {
            Navigate::Invoice(id) => invoice_detail(id, &self.ctx),
            Navigate::Matter(id) => matter_detail(id, &self.ctx),
        };
        match view {
            Some(view) => {
                view.page.refresh(&self.ctx.data);
                self.details.push(view);
                self.focus = Focus::default();
            }
            None => {
                let (kind, id) = match &request {
                    Navigate::Invoice(id) => ("Invoice", id),
                    Navigate::Matter(id) => ("Matter", id),
                };
                self.status = Some(format!("{} {} not found", kind, id));
            }
        }
    }

    fn move_row(&mut self, delta: isize) {
        if self.active_table().is_some() {
            self.focus.row = self.focus.row.saturating_add_signed(delta);
        } else {
            self.scroll = self.scroll.saturating_add_signed(delta);
        }
    }

    fn move_column(&mut self, delta: isize) {
        self.focus.column = self.focus.column.saturating_add_signed(delta);
    }

    fn turn_page(&mut self, forward: bool) {
        let Some(table) = self.active_table() else { return };
        let result = if forward {
            table.on_next_click()
        } else {
            table.on_prev_click()
        };
        if result.is_handled() {
            self.focus.row = 0;
        }
    }

    fn jump_to_page(&mut self, marker: PageMarker) {
        let Some(table) = self.active_table() else { return };
        if table.on_page_click(marker).is_handled() {
            self.focus.row = 0;
        }
    }

    fn sort_focused(&mut self) {
        let Some(table) = self.active_table() else { return };
        let column = self.focus.column;
        if table.on_header_click(column) == EventResult::Ignored {
            let header = table.columns().get(column).map(|c| c.header.clone()).unwrap_or_default();
            self.status = Some(format!("{} is not sortable", header.trim()));
        } else {
            self.focus.row = 0;
        }
    }

    fn activate(&mut self) {
        let Some(table) = self.active_table() else { return };
        if table.on_cell_click(self.focus.row, self.focus.column) == EventResult::Ignored {
            trace!("click on {:?} ignored", self.focus);
        }
    }

    fn first_action(&mut self) {
        let Some(table) = self.active_table() else { return };
        let column = table
            .columns()
            .iter()
            .position(|c| matches!(c.kind, ColumnKind::Actions(_)));
        match column {
            Some(column) => {
                table.on_action_click(self.focus.row, column, 0);
            }
            None => self.status = Some("No actions here".to_string()),
        }
    }

    fn clamp_focus(&mut self) {
        let Some(table) = self.active_table() else { return };
        let rows = table.visible_len();
        let columns = table.column_count();
        self.focus.row = self.focus.row.min(rows.saturating_sub(1));
        self.focus.column = self.focus.column.min(columns.saturating_sub(1));
    }

    /// Compose the screen, at most `height` lines no wider than `width`.
    pub fn frame(&mut self, width: u16, height: u16) -> Vec<ScreenLine> {
        let mut lines = vec![self.section_bar(), self.tab_bar(), ScreenLine::plain("", SpanStyle::Normal)];

        if let Some(detail) = self.details.last() {
            detail.page.refresh(&self.ctx.data);
            lines.push(ScreenLine::plain(detail.title.clone(), SpanStyle::Header));
            lines.extend(detail.summary.iter().flat_map(|l| ScreenLine::from_report(l, width)));
            lines.push(ScreenLine::plain("", SpanStyle::Normal));
            lines.extend(table_lines(&detail.page.table, self.focus, width));
        } else {
            match &self.content {
                Content::Table(page) => {
                    page.refresh(&self.ctx.data);
                    lines.extend(table_lines(&page.table, self.focus, width));
                }
                Content::Report(report) => {
                    let wrapped: Vec<ScreenLine> =
                        report.iter().flat_map(|l| ScreenLine::from_report(l, width)).collect();
                    let budget = (height as usize).saturating_sub(lines.len() + 2).max(1);
                    self.scroll = self.scroll.min(wrapped.len().saturating_sub(budget));
                    lines.extend(wrapped.into_iter().skip(self.scroll).take(budget));
                }
            }
        }

        let footer = [self.status_line(), ScreenLine::plain(HELP, SpanStyle::Muted)];
        let body = (height as usize).saturating_sub(footer.len());
        lines.truncate(body);
        lines.resize(body, ScreenLine::plain("", SpanStyle::Normal));
        lines.extend(footer);
        lines
    }

    fn section_bar(&self) -> ScreenLine {
        let mut spans = Vec::new();
        for (n, section) in Section::ALL.iter().enumerate() {
            let style = if *section == self.section {
                SpanStyle::Active
            } else {
                SpanStyle::Muted
            };
            spans.push(Span::new(format!(" {} {} ", n + 1, section), style));
        }
        ScreenLine {
            spans,
            highlight: false,
            alternate: false,
        }
    }

    fn tab_bar(&self) -> ScreenLine {
        let mut spans = Vec::new();
        for (i, tab) in self.section.tabs().iter().enumerate() {
            let style = if i == self.tab { SpanStyle::Active } else { SpanStyle::Normal };
            spans.push(Span::new(format!(" {} ", tab.label()), style));
            spans.push(Span::new("│", SpanStyle::Muted));
        }
        spans.pop();
        ScreenLine {
            spans,
            highlight: false,
            alternate: false,
        }
    }

    fn status_line(&self) -> ScreenLine {
        let mut text = match self.active_table().and_then(|t| t.pagination()) {
            Some(p) => format!(
                "Showing {}-{} of {}  ·  page {}/{}",
                p.first_row(),
                p.last_row(),
                p.total_rows,
                p.page,
                p.total_pages
            ),
            None => String::new(),
        };
        if let Some(status) = &self.status {
            if !text.is_empty() {
                text.push_str("  ·  ");
            }
            text.push_str(status);
        }
        ScreenLine::plain(text, SpanStyle::Muted)
    }
}

/// Render `table` and mark the focused row and column.
fn table_lines(table: &Table, focus: Focus, width: u16) -> Vec<ScreenLine> {
    let view = table.view();
    // Data and header cells sit at even span positions, separated by gaps.
    let cell_span = focus.column * 2;

    render_lines(&view, width)
        .into_iter()
        .map(|line: Line| {
            let mut spans = line.spans;
            let focused_row = line.kind == LineKind::Row(focus.row);
            if (focused_row || line.kind == LineKind::Header)
                && let Some(span) = spans.get_mut(cell_span)
            {
                span.style = SpanStyle::Active;
            }
            ScreenLine {
                spans,
                highlight: focused_row,
                alternate: line.alternate,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn app() -> App {
        let config = DashboardConfig::new(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        App::new(Arc::new(Dataset::load().unwrap()), &config)
    }

    #[test]
    fn test_starts_on_home() {
        let app = app();
        assert_eq!(app.section(), Section::Home);
        assert_eq!(app.tab(), Tab::Announcements);
        assert!(app.active_table().is_none());
    }

    #[test]
    fn test_tabs_wrap() {
        let mut app = app();
        app.handle(Command::Section(Section::Finance));
        app.handle(Command::PrevTab);
        assert_eq!(app.tab(), Tab::RejectedInvoices);
        app.handle(Command::NextTab);
        assert_eq!(app.tab(), Tab::InvoiceList);
    }

    #[test]
    fn test_focus_is_clamped() {
        let mut app = app();
        app.handle(Command::Section(Section::Finance));
        for _ in 0..40 {
            app.handle(Command::RowDown);
            app.handle(Command::ColumnRight);
        }
        assert_eq!(app.focus(), Focus { row: 9, column: 6 });

        app.handle(Command::NextPage);
        assert_eq!(app.focus().row, 0);
    }

    #[test]
    fn test_frame_fills_height() {
        let mut app = app();
        app.handle(Command::Section(Section::Finance));
        let lines = app.frame(120, 30);
        assert_eq!(lines.len(), 30);
        assert!(lines[0].text().contains("3 FINANCE"));
        assert!(lines.iter().any(|l| l.highlight));
        assert_eq!(lines[28].text(), "Showing 1-10 of 24  ·  page 1/3");
    }

    #[test]
    fn test_report_scrolls_within_bounds() {
        let mut app = app();
        for _ in 0..500 {
            app.handle(Command::RowDown);
        }
        let lines = app.frame(100, 20);
        assert_eq!(lines.len(), 20);
        // Scrolled to the end: the last review date is on screen.
        assert!(lines.iter().any(|l| l.text().starts_with("  ") && l.text().contains("/")));
    }
}

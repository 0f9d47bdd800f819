//! Dashboard rendering: header, form panel, blog table, footer, dialogs.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::ui::dashboard::{DashboardState, Dialog, Focus, Phase};
use crate::ui::theme::{
    DANGER, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, HINT_TEXT, POPUP_BORDER, ROW_HIGHLIGHT,
};

pub fn draw(frame: &mut Frame<'_>, state: &DashboardState) {
    let area = frame.area();
    let regions = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(area);

    draw_header(frame, state, regions[0]);
    draw_form(frame, state, regions[1]);
    draw_table(frame, state, regions[2]);
    draw_footer(frame, state, regions[3]);

    match &state.dialog {
        Dialog::None => {}
        Dialog::Alert(message) => draw_alert(frame, message, area),
        Dialog::ConfirmDelete(_) => draw_confirm(frame, area),
    }
}

fn draw_header(frame: &mut Frame<'_>, state: &DashboardState, area: Rect) {
    let mut spans = vec![Span::styled(
        " Blog Management",
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )];
    if let Some(user) = &state.user {
        spans.push(Span::styled(
            format!("  ·  signed in as {}", user),
            Style::default().fg(HINT_TEXT),
        ));
    }
    if state.phase == Phase::Submitting {
        spans.push(Span::styled("  ·  saving...", Style::default().fg(HINT_TEXT)));
    }

    let header = Paragraph::new(Line::from(spans)).block(bordered(GLOBAL_BORDER));
    frame.render_widget(header, area);
}

fn draw_form(frame: &mut Frame<'_>, state: &DashboardState, area: Rect) {
    let title = if state.form.is_editing() {
        " Edit Blog "
    } else {
        " Create Blog "
    };
    let outer = bordered(GLOBAL_BORDER).title(title);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    draw_field(
        frame,
        fields[0],
        "Title",
        &state.form.title,
        state.focus == Focus::Title,
    );
    draw_field(
        frame,
        fields[1],
        "Content",
        &state.form.content,
        state.focus == Focus::Content,
    );
}

fn draw_field(frame: &mut Frame<'_>, area: Rect, label: &str, value: &str, focused: bool) {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    let mut text = value.to_string();
    if focused {
        text.push('▏');
    }
    let field = Paragraph::new(text).block(bordered(border).title(format!(" {} ", label)));
    frame.render_widget(field, area);
}

fn draw_table(frame: &mut Frame<'_>, state: &DashboardState, area: Rect) {
    let border = if state.focus == Focus::Table {
        FOCUS_BORDER
    } else {
        GLOBAL_BORDER
    };
    let block = bordered(border).title(" All Blogs ");

    if state.loading() {
        let loading = Paragraph::new("Loading...")
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(loading, area);
        return;
    }

    if state.blogs.is_empty() {
        let empty = Paragraph::new("No blogs found.")
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new([Cell::from("#"), Cell::from("Title"), Cell::from("Content")])
        .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD));

    let rows = state.blogs.iter().enumerate().map(|(i, blog)| {
        Row::new([
            Cell::from(format!("{}", i + 1)),
            Cell::from(blog.title.clone()),
            Cell::from(blog.content.clone()),
        ])
    });

    let widths = [
        Constraint::Length(4),
        Constraint::Percentage(35),
        Constraint::Percentage(60),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(ROW_HIGHLIGHT));

    let mut table_state = TableState::default();
    if state.focus == Focus::Table {
        table_state.select(Some(state.selected));
    }
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn draw_footer(frame: &mut Frame<'_>, state: &DashboardState, area: Rect) {
    let hints = match state.focus {
        Focus::Title | Focus::Content => {
            " Enter: Save │ Tab: Next field │ Ctrl+N: New Blog │ Esc: Quit"
        }
        Focus::Table => " ↑/↓: Select │ e: Edit │ d: Delete │ n: New Blog │ Tab: Form │ q: Quit",
    };
    let style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let footer = Paragraph::new(Line::from(Span::styled(hints, style)))
        .alignment(Alignment::Left)
        .block(bordered(GLOBAL_BORDER));
    frame.render_widget(footer, area);
}

fn draw_alert(frame: &mut Frame<'_>, message: &str, area: Rect) {
    let popup = centered_rect(50, 20, area);
    frame.render_widget(Clear, popup);
    let lines = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled("Press Enter to continue", Style::default().fg(HINT_TEXT))),
    ];
    let alert = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(bordered(POPUP_BORDER).title(" Notice "));
    frame.render_widget(alert, popup);
}

fn draw_confirm(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_rect(50, 20, area);
    frame.render_widget(Clear, popup);
    let lines = vec![
        Line::from("Are you sure you want to delete this blog?"),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(DANGER).add_modifier(Modifier::BOLD)),
            Span::raw(": delete   "),
            Span::styled("n", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": cancel"),
        ]),
    ];
    let confirm = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(bordered(DANGER).title(" Delete Blog "));
    frame.render_widget(confirm, popup);
}

fn bordered(color: ratatui::style::Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

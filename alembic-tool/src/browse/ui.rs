use alembic_catalog::Item;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

use super::app::{AppMode, BrowseApp};

pub fn render(frame: &mut Frame, app: &BrowseApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Filters
            Constraint::Min(3),    // Table
            Constraint::Length(1), // Pagination
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_filters(frame, app, chunks[1]);
    render_table(frame, app, chunks[2]);
    render_pagination(frame, app, chunks[3]);
    render_status_bar(frame, app, chunks[4]);

    match app.mode {
        AppMode::SelectDifficulty => render_popup(frame, app, "Filter by Difficulty"),
        AppMode::SelectCharacteristic => render_popup(frame, app, "Filter by Characteristics"),
        AppMode::Detail => render_detail(frame, app),
        _ => {}
    }
}

fn render_header(frame: &mut Frame, app: &BrowseApp, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Potion Catalog",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", app.endpoint), Style::default().fg(Color::DarkGray)),
    ]));

    frame.render_widget(header, area);
}

fn render_filters(frame: &mut Frame, app: &BrowseApp, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let searching = app.mode == AppMode::Search;
    let search_block = Block::default()
        .borders(Borders::ALL)
        .title("Search")
        .border_style(if searching {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        });

    let search = if app.search_text().is_empty() && !searching {
        Paragraph::new("Search by name (/)").style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(app.search_text().to_string())
    };
    frame.render_widget(search.block(search_block), chunks[0]);

    if searching {
        let cursor_x = chunks[0].x + 1 + app.cursor_column() as u16;
        frame.set_cursor_position((cursor_x, chunks[0].y + 1));
    }

    let criteria = app.browser.criteria();
    let difficulty = Paragraph::new(criteria.difficulty.label().to_string())
        .block(Block::default().borders(Borders::ALL).title("Difficulty (d)"));
    frame.render_widget(difficulty, chunks[1]);

    let characteristic = Paragraph::new(criteria.characteristic.label().to_string())
        .block(Block::default().borders(Borders::ALL).title("Characteristic (c)"));
    frame.render_widget(characteristic, chunks[2]);
}

fn render_table(frame: &mut Frame, app: &BrowseApp, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Potions");

    if app.loading {
        let loading = Paragraph::new(Span::styled(
            "Loading potions...",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        ))
        .block(block);
        frame.render_widget(loading, area);
        return;
    }

    let rows: Vec<Row> = app
        .browser
        .current_page()
        .into_iter()
        .map(|item| {
            Row::new(vec![
                Cell::from(Item::cell(&item.name).to_string()),
                Cell::from(Item::cell(&item.effect).to_string()),
                Cell::from(Item::cell(&item.difficulty).to_string()),
                Cell::from(Item::cell(&item.characteristics).to_string()),
                Cell::from(Item::cell(&item.image).to_string()),
            ])
        })
        .collect();

    let mut state = TableState::default();
    if !rows.is_empty() {
        state.select(Some(app.selected_row));
    }

    let header = Row::new(vec!["Name", "Effect", "Difficulty", "Characteristic", "Image"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(22),
            Constraint::Percentage(30),
            Constraint::Percentage(16),
            Constraint::Percentage(16),
            Constraint::Percentage(16),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol("> ");

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_pagination(frame: &mut Frame, app: &BrowseApp, area: Rect) {
    let enabled = Style::default().fg(Color::Blue);
    let disabled = Style::default().fg(Color::DarkGray);

    let page = app.browser.page();
    let total = app.browser.total_pages();

    let mut spans = vec![Span::styled(
        "[Previous]",
        if page == 1 { disabled } else { enabled },
    )];

    for button in app.browser.page_buttons() {
        let style = if button.current {
            Style::default().fg(Color::Black).bg(Color::LightBlue)
        } else if button.enabled {
            enabled
        } else {
            disabled
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!("[{}]", button.page), style));
    }

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        "[Next]",
        if page == total { disabled } else { enabled },
    ));
    spans.push(Span::styled(
        format!(
            "  page {} of {} ({} potions)",
            page,
            total,
            app.browser.filtered().len()
        ),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status_bar(frame: &mut Frame, app: &BrowseApp, area: Rect) {
    let status = match app.mode {
        AppMode::Browse => {
            "↑/↓: Select  ←/→: Page  1-3: Jump  Enter: Details  /: Search  d/c: Filters  q: Quit"
        }
        AppMode::Search => "Type to search  Ctrl+U: Clear  Enter/Esc: Done",
        AppMode::Detail => "Esc: Close",
        AppMode::SelectDifficulty | AppMode::SelectCharacteristic => {
            "↑/↓: Navigate  Enter: Select  Esc: Cancel"
        }
    };

    let status_bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status_bar, area);
}

fn render_popup(frame: &mut Frame, app: &BrowseApp, title: &str) {
    let area = centered_rect(40, 50, frame.area());

    frame.render_widget(Clear, area);

    let active = match app.mode {
        AppMode::SelectDifficulty => &app.browser.criteria().difficulty,
        _ => &app.browser.criteria().characteristic,
    };

    let items: Vec<ListItem> = app
        .popup_options
        .iter()
        .map(|option| {
            let is_active = option == active;
            let style = if is_active {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            let marker = if is_active { " ✓" } else { "" };
            ListItem::new(format!("{}{}", option.label(), marker)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ratatui::widgets::ListState::default();
    state.select(Some(app.popup_selected));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_detail(frame: &mut Frame, app: &BrowseApp) {
    let detail = app.browser.detail();
    let Some(title) = detail.title() else {
        return;
    };

    let area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, area);

    let lines: Vec<Line> = detail
        .fields()
        .into_iter()
        .map(|field| {
            Line::from(vec![
                Span::styled(
                    format!("{}: ", field.label),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(field.value.to_string()),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

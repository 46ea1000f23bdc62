use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::config::ColorConfig;
use crate::domain::{SelectionState, SummaryState};
use crate::tui::app::{ActivePane, TuiApp};
use crate::wrap::{tokens_from_text, wrap};

pub fn render(frame: &mut Frame, app: &mut TuiApp, colors: &ColorConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),      // Categories pane
            Constraint::Percentage(35), // Articles pane
            Constraint::Min(8),         // Summary pane
            Constraint::Length(1),      // Status bar
        ])
        .split(frame.area());

    render_categories_pane(frame, app, chunks[0], colors);
    render_articles_pane(frame, app, chunks[1], colors);
    render_summary_pane(frame, app, chunks[2], colors);
    render_status_bar(frame, app, chunks[3], colors);

    if app.lookup.is_some() {
        render_meaning_popup(frame, app, chunks[2], colors);
    }
}

fn border_style(app: &TuiApp, pane: ActivePane, colors: &ColorConfig) -> Style {
    if app.active_pane == pane {
        Style::default().fg(colors.active_border)
    } else {
        Style::default().fg(colors.inactive_border)
    }
}

fn highlight_style(app: &TuiApp, pane: ActivePane, colors: &ColorConfig) -> Style {
    if app.active_pane == pane {
        Style::default()
            .bg(colors.selection_bg_active)
            .fg(colors.selection_fg_active)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .bg(colors.selection_bg_inactive)
            .fg(colors.selection_fg_inactive)
    }
}

fn render_categories_pane(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let items: Vec<ListItem> = app
        .categories()
        .iter()
        .map(|entry| {
            if entry.failed {
                ListItem::new(format!("{} (failed)", entry.name))
                    .style(Style::default().fg(colors.failed_category))
            } else {
                ListItem::new(format!("{} ({})", entry.name, entry.articles.len()))
            }
        })
        .collect();

    let count = app.categories().len();
    let title = if app.feed.is_none() {
        " Categories (loading) ".to_string()
    } else {
        format!(
            " Categories ({}) [{}/{}] ",
            count,
            app.category_index + 1,
            count.max(1)
        )
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(app, ActivePane::Categories, colors));

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style(app, ActivePane::Categories, colors))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.category_list_state);
}

fn render_articles_pane(frame: &mut Frame, app: &mut TuiApp, area: Rect, colors: &ColorConfig) {
    let selected = app.selection.article().cloned();

    let items: Vec<ListItem> = app
        .articles()
        .iter()
        .map(|article| {
            let marker = if selected.as_ref() == Some(article) {
                "●"
            } else {
                " "
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", marker)),
                Span::styled(
                    format!("{}  ", article.published),
                    Style::default().fg(colors.published_date),
                ),
                Span::raw(article.display_title().to_string()),
            ]))
        })
        .collect();

    let count = app.articles().len();
    let title = format!(
        " Articles ({}) [{}/{}] ",
        count,
        app.article_index + 1,
        count.max(1)
    );

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(app, ActivePane::Articles, colors));

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style(app, ActivePane::Articles, colors))
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.article_list_state);
}

fn render_summary_pane(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2) as usize;

    let (title, lines, scroll) = match &app.selection {
        SelectionState::NoSelection => (
            " Summary ".to_string(),
            vec![Line::from("Select an article to see its summary.")],
            0,
        ),
        SelectionState::Selected { article, summary } => {
            let mut lines = vec![
                Line::from(Span::styled(
                    article.display_title().to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
            ];
            let header = lines.len();
            let mut scroll = 0;

            match summary {
                SummaryState::Idle => {}
                SummaryState::Loading => lines.push(Line::from("Loading summary...")),
                SummaryState::Success(text) => {
                    let cursor = app.learning_mode.then_some(app.word_index);
                    let (body, cursor_row) = summary_lines(text, inner_width, cursor, colors);
                    if let Some(row) = cursor_row {
                        let visible = inner_height.saturating_sub(header).max(1);
                        scroll = (row + 1).saturating_sub(visible);
                    }
                    lines.extend(body);
                }
                SummaryState::Error(message) => lines.push(Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(colors.summary_error),
                ))),
            }

            let mode = if app.learning_mode { " [learning]" } else { "" };
            (format!(" Summary{} ", mode), lines, scroll)
        }
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(app, ActivePane::Summary, colors));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .scroll((scroll as u16, 0));

    frame.render_widget(paragraph, area);
}

/// Lay the summary words out in rows of at most `width` cells, highlighting
/// the word under `cursor`. Also returns the row holding the cursor.
fn summary_lines(
    text: &str,
    width: u16,
    cursor: Option<usize>,
    colors: &ColorConfig,
) -> (Vec<Line<'static>>, Option<usize>) {
    let tokens = tokens_from_text(text, |word| (word.width() as f32, 1.0));
    let layout = wrap(&tokens, f32::from(width), 1.0);
    let cursor_style = Style::default()
        .bg(colors.word_cursor_bg)
        .fg(colors.word_cursor_fg);

    let lines = layout
        .rows
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (i, placement) in row.placements.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                let style = if cursor == Some(placement.index) {
                    cursor_style
                } else {
                    Style::default()
                };
                spans.push(Span::styled(placement.token.text.clone(), style));
            }
            Line::from(spans)
        })
        .collect();

    (lines, cursor.and_then(|index| layout.row_of(index)))
}

fn render_meaning_popup(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let Some(lookup) = &app.lookup else {
        return;
    };

    let popup = centered(area, 70, 60);
    let block = Block::default()
        .title(format!(" {} ", lookup.word))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.meaning_border));

    let paragraph = Paragraph::new(lookup.meaning.text().to_string())
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let scale = |len: u16, percent: u16| (u32::from(len) * u32::from(percent) / 100) as u16;
    let width = scale(area.width, percent_x);
    let height = scale(area.height, percent_y).max(3).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect, colors: &ColorConfig) {
    let status = if app.is_refreshing {
        "Refreshing news...".to_string()
    } else if let Some(ref msg) = app.status_message {
        msg.clone()
    } else if let Some(ref err) = app.feed_error {
        format!("Could not load categories: {}  R:Retry  q:Quit", err)
    } else if app.lookup.is_some() {
        "Esc:Close meaning  q:Quit".to_string()
    } else if app.learning_mode {
        "j/k:Word  Enter:Meaning  l:Exit learning  Tab:Pane  q:Quit".to_string()
    } else {
        "j/k:Nav  n/p:Page  Tab:Pane  Enter:Select  o:Open  l:Learn  R:Refresh  q:Quit"
            .to_string()
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    frame.render_widget(paragraph, area);
}

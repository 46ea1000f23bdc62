pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::task::JoinHandle;

use crate::app::{AppContext, Result};
use crate::config::Config;
use crate::domain::CategoryFeed;

use self::app::{ActivePane, TuiApp};
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;
type RefreshHandle = JoinHandle<Result<Arc<CategoryFeed>>>;

pub async fn run(ctx: Arc<AppContext>, config: Arc<Config>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx, config).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>, config: Arc<Config>) -> Result<()> {
    let mut tui_app = TuiApp::new();
    let event_handler = EventHandler::new(Duration::from_millis(100));

    let mut feed_rx = ctx.aggregator.subscribe();
    let selection_rx = ctx.selection.subscribe();
    let lookup_rx = ctx.lookup.subscribe();

    let mut refresh = Some(start_refresh(&mut tui_app, &ctx));

    loop {
        if feed_rx.has_changed().unwrap_or(false) {
            let state = feed_rx.borrow_and_update().clone();
            tui_app.apply_feed_state(state);
        }
        tui_app.apply_selection(selection_rx.borrow().clone());
        tui_app.lookup = lookup_rx.borrow().state.clone();

        if refresh.as_ref().is_some_and(|handle| handle.is_finished()) {
            if let Some(handle) = refresh.take() {
                finish_refresh(&mut tui_app, handle).await;
            }
        }

        terminal.draw(|frame| layout::render(frame, &mut tui_app, &config.colors))?;

        match event_handler.next()? {
            AppEvent::Key(key) => {
                let action = config.keybindings.get_action(&key);
                if action != Action::None {
                    tui_app.clear_status();
                }

                match action {
                    Action::Quit => {
                        tui_app.should_quit = true;
                    }
                    Action::MoveUp => {
                        tui_app.move_up();
                    }
                    Action::MoveDown => {
                        tui_app.move_down();
                    }
                    Action::NextPage => {
                        tui_app.next_page();
                    }
                    Action::PrevPage => {
                        tui_app.prev_page();
                    }
                    Action::NextPane => {
                        tui_app.active_pane = tui_app.active_pane.next();
                    }
                    Action::PrevPane => {
                        tui_app.active_pane = tui_app.active_pane.prev();
                    }
                    Action::Select => match tui_app.active_pane {
                        ActivePane::Categories => {
                            if tui_app.selected_category().is_some() {
                                tui_app.active_pane = ActivePane::Articles;
                            }
                        }
                        ActivePane::Articles => {
                            if let Some(article) = tui_app.selected_article().cloned() {
                                ctx.selection.select(article);
                                tui_app.active_pane = ActivePane::Summary;
                            }
                        }
                        ActivePane::Summary => {
                            if tui_app.learning_mode {
                                if let Some(word) = tui_app.current_word().map(str::to_string) {
                                    if ctx.lookup.lookup(&word).is_none() {
                                        tui_app.set_status(format!(
                                            "Nothing to look up in {:?}",
                                            word
                                        ));
                                    }
                                }
                            }
                        }
                    },
                    Action::ToggleLearning => {
                        tui_app.toggle_learning();
                        if !tui_app.learning_mode {
                            ctx.lookup.dismiss();
                        }
                    }
                    Action::Dismiss => {
                        if tui_app.lookup.is_some() {
                            ctx.lookup.dismiss();
                        } else if tui_app.learning_mode {
                            tui_app.toggle_learning();
                        }
                    }
                    Action::OpenInBrowser => {
                        let link = match tui_app.active_pane {
                            ActivePane::Summary => tui_app.selection.article(),
                            _ => tui_app.selected_article(),
                        }
                        .map(|article| article.link.clone());

                        if let Some(link) = link {
                            if let Err(e) = open::that(&link) {
                                tui_app.set_status(format!("Failed to open browser: {}", e));
                            }
                        }
                    }
                    Action::Refresh => {
                        if refresh.is_none() {
                            refresh = Some(start_refresh(&mut tui_app, &ctx));
                        }
                    }
                    Action::None => {}
                }
            }
            AppEvent::Tick => {}
        }

        if tui_app.should_quit {
            break;
        }
    }

    if let Some(handle) = refresh {
        handle.abort();
    }

    Ok(())
}

fn start_refresh(tui_app: &mut TuiApp, ctx: &AppContext) -> RefreshHandle {
    tui_app.is_refreshing = true;
    ctx.spawn_refresh()
}

async fn finish_refresh(tui_app: &mut TuiApp, handle: RefreshHandle) {
    tui_app.is_refreshing = false;

    match handle.await {
        Ok(Ok(feed)) => {
            let failed = feed.failed_categories();
            let status = if failed.is_empty() {
                format!(
                    "Loaded {} articles at {}",
                    feed.article_count(),
                    feed.fetched_at.with_timezone(&chrono::Local).format("%H:%M")
                )
            } else {
                format!(
                    "Loaded {} articles, {} categories failed: {}",
                    feed.article_count(),
                    failed.len(),
                    failed.join(", ")
                )
            };
            tui_app.set_status(status);
        }
        Ok(Err(e)) => {
            tui_app.set_status(format!("Refresh failed: {}", e));
        }
        Err(e) => {
            tracing::error!("Refresh task failed: {}", e);
            tui_app.set_status("Refresh failed".to_string());
        }
    }
}

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tokio::sync::{mpsc, oneshot};
use wsview_bridge::{HostSurface, Notice, NoticeLevel, WorkspaceBridge, WorkspaceView};
use wsview_core::{ListPhase, WorkspaceRecord};
use wsview_exec::WorkspaceCommandRunner;

use crate::cmd_action::delete_notice;
use crate::config::RuntimeConfig;
use crate::context::{short_path, status_color};
use crate::host::{Launchers, TuiHost, UiEvent};

// ---------------------------------------------------------------------------
// Terminal cleanup guard
// ---------------------------------------------------------------------------

/// Restores the terminal when dropped, including on panic or early `?`.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

// ---------------------------------------------------------------------------
// App state
// ---------------------------------------------------------------------------

/// What a key press asks the bridge to do.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Open(String),
    Warm(Option<String>),
    Doctor,
    Delete(WorkspaceRecord),
    Refresh,
}

/// A delete confirmation waiting for `y`/`n`.
struct PendingConfirm {
    prompt: String,
    reply: oneshot::Sender<bool>,
}

struct App {
    view: WorkspaceView,
    selected: usize,
    notice: Option<Notice>,
    pending: Option<PendingConfirm>,
    last_listed: Option<chrono::DateTime<chrono::Local>>,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        Self {
            view: WorkspaceView::new(),
            selected: 0,
            notice: None,
            pending: None,
            last_listed: None,
            should_quit: false,
        }
    }

    fn records(&self) -> &[WorkspaceRecord] {
        self.view.snapshot().records()
    }

    fn selected_record(&self) -> Option<&WorkspaceRecord> {
        self.view.snapshot().get(self.selected)
    }

    /// Move selection down (j / Down).
    fn next(&mut self) {
        let len = self.records().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    /// Move selection up (k / Up).
    fn previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn begin_fetch(&mut self) {
        self.view.begin_fetch();
    }

    /// Swap in a fresh listing, keeping the cursor on the same workspace
    /// when it is still present.
    fn on_listed(&mut self, records: Vec<WorkspaceRecord>) {
        let previous = self.selected_record().cloned();
        self.view.complete(records);
        self.last_listed = Some(chrono::Local::now());

        let len = self.records().len();
        let kept = previous.and_then(|p| self.view.snapshot().position_of(&p));
        self.selected = match kept {
            Some(idx) => idx,
            None if len == 0 => 0,
            None => self.selected.min(len - 1),
        };
    }

    fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Notice(notice) => self.notice = Some(notice),
            UiEvent::Confirm { prompt, reply } => {
                if self.pending.is_some() {
                    // One modal at a time; a second request is declined.
                    let _ = reply.send(false);
                } else {
                    self.pending = Some(PendingConfirm { prompt, reply });
                }
            }
            UiEvent::Listed(records) => self.on_listed(records),
        }
    }

    fn answer(&mut self, yes: bool) {
        if let Some(pending) = self.pending.take() {
            let _ = pending.reply.send(yes);
        }
    }

    fn on_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.answer(false);
            self.should_quit = true;
            return None;
        }

        if self.pending.is_some() {
            match code {
                KeyCode::Char('y') | KeyCode::Char('Y') => self.answer(true),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc | KeyCode::Char('q') => {
                    self.answer(false)
                }
                _ => {}
            }
            return None;
        }

        self.notice = None;
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.next();
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous();
                None
            }
            KeyCode::Enter | KeyCode::Char('o') => self
                .selected_record()
                .map(|r| Action::Open(r.path.clone())),
            KeyCode::Char('w') => Some(Action::Warm(
                self.selected_record().map(|r| r.label().to_string()),
            )),
            KeyCode::Char('D') => Some(Action::Doctor),
            KeyCode::Char('x') => self.selected_record().cloned().map(Action::Delete),
            KeyCode::Char('r') => Some(Action::Refresh),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Bridge tasks
// ---------------------------------------------------------------------------

fn spawn_fetch<R, H>(bridge: &WorkspaceBridge<R, H>, events: &mpsc::UnboundedSender<UiEvent>)
where
    R: WorkspaceCommandRunner + 'static,
    H: HostSurface,
{
    let bridge = bridge.clone();
    let events = events.clone();
    tokio::spawn(async move {
        let records = bridge.list_workspaces().await;
        let _ = events.send(UiEvent::Listed(records));
    });
}

/// Run an action off the UI loop. Delete waits on a confirmation that the
/// loop itself must answer, so nothing here is awaited inline.
fn spawn_action<R, H>(bridge: &WorkspaceBridge<R, H>, action: Action)
where
    R: WorkspaceCommandRunner + 'static,
    H: HostSurface,
{
    if action == Action::Refresh {
        bridge.refresh();
        return;
    }
    let bridge = bridge.clone();
    tokio::spawn(async move {
        // Failures were already reported through the host.
        let outcome = match action {
            Action::Open(path) => bridge.open(&path).await,
            Action::Warm(label) => bridge.warm(label.as_deref()).await,
            Action::Doctor => bridge.doctor().await,
            Action::Delete(record) => {
                let outcome = bridge.delete(&record).await;
                if let Ok(ref dispatch) = outcome {
                    bridge.host().notify(delete_notice(&record, dispatch));
                }
                outcome
            }
            Action::Refresh => return,
        };
        tracing::debug!(?outcome, "tui action finished");
    });
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Interactive workspace tree until `q` or Ctrl+C.
pub async fn run_tui(config: &RuntimeConfig) -> anyhow::Result<()> {
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let host = TuiHost::new(Launchers::from_config(config), events_tx.clone());
    let bridge =
        WorkspaceBridge::with_config(config.workspace_executor(), host, config.bridge_config());
    let mut refresh_rx = bridge.refresh_signal().subscribe();

    let mut app = App::new();
    app.begin_fetch();
    spawn_fetch(&bridge, &events_tx);

    enable_raw_mode()?;
    let _guard = TerminalGuard;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    loop {
        terminal.draw(|frame| render(frame, &app))?;

        if app.should_quit {
            break;
        }

        tokio::select! {
            _ = tokio::time::sleep(Duration::from_millis(50)) => {
                while event::poll(Duration::from_millis(0))? {
                    if let Event::Key(key) = event::read()? {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        if let Some(action) = app.on_key(key.code, key.modifiers) {
                            spawn_action(&bridge, action);
                        }
                    }
                }
            }
            Some(ui_event) = events_rx.recv() => {
                app.handle_event(ui_event);
            }
            changed = refresh_rx.changed() => {
                if changed.is_ok() {
                    app.begin_fetch();
                    spawn_fetch(&bridge, &events_tx);
                }
            }
        }
    }

    // Unblock a delete still waiting on the modal.
    app.answer(false);
    terminal.show_cursor()?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn notice_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Info => Color::Cyan,
        NoticeLevel::Warning => Color::Yellow,
        NoticeLevel::Error => Color::Red,
    }
}

/// Map the ANSI codes used by `ls` onto ratatui colors.
fn status_style(status: &str) -> Style {
    match status_color(status) {
        "\x1b[32m" => Style::default().fg(Color::Green),
        "\x1b[31m" => Style::default().fg(Color::Red),
        "\x1b[2m" => Style::default().add_modifier(Modifier::DIM),
        _ => Style::default().fg(Color::Yellow),
    }
}

fn title_line(app: &App) -> String {
    let mut title = format!(" WORKSPACES ({}) ", app.records().len());
    if app.view.phase() == ListPhase::Fetching {
        title.push_str("refreshing\u{2026} ");
    } else if let Some(at) = app.last_listed {
        title.push_str(&format!("updated {} ", at.format("%H:%M:%S")));
    }
    title
}

fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Workspace tree
            Constraint::Length(3), // Selected workspace detail
            Constraint::Length(3), // Notice / help bar
        ])
        .split(frame.area());

    let items: Vec<ListItem> = app
        .records()
        .iter()
        .map(|record| {
            ListItem::new(Line::from(vec![
                Span::styled(record.label().to_string(), Style::default().bold()),
                Span::raw("  "),
                Span::styled(format!("[{}]", record.status), status_style(&record.status)),
                Span::raw(format!(" {}", record.branch)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title_line(app))
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    if !app.records().is_empty() {
        state.select(Some(app.selected));
    }
    frame.render_stateful_widget(list, chunks[0], &mut state);

    let detail = app
        .selected_record()
        .map(|r| format!(" {} - {}", short_path(&r.path), r.last_commit))
        .unwrap_or_default();
    frame.render_widget(
        Paragraph::new(detail).block(Block::default().borders(Borders::ALL)),
        chunks[1],
    );

    let bottom = match app.notice {
        Some(ref notice) => Paragraph::new(format!(" {}", notice.message))
            .style(Style::default().fg(notice_color(notice.level))),
        None => Paragraph::new(
            " j/k: navigate | enter: open | w: warm | D: doctor | x: delete | r: refresh | q: quit",
        ),
    };
    frame.render_widget(bottom.block(Block::default().borders(Borders::ALL)), chunks[2]);

    if let Some(ref pending) = app.pending {
        let area = centered(frame.area(), 60, 5);
        let modal = Paragraph::new(vec![
            Line::from(pending.prompt.clone()),
            Line::from(""),
            Line::from(" y: delete | n: cancel ").bold(),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Confirm ")
                .border_style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(Clear, area);
        frame.render_widget(modal, area);
    }
}

/// Rect of at most `width` x `height` centered in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

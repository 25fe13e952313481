use crossterm::{
    ExecutableCommand,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    style::{Color as TermColor, ResetColor, SetForegroundColor},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info, warn};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::io::{self, Write};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Interactive surface the export workflow talks to. `choose_many` presents
/// all options pre-checked and returns `None` when the prompt is dismissed,
/// which is distinct from confirming an empty subset.
pub trait Prompter {
    fn choose_many(&self, title: &str, options: &[String]) -> anyhow::Result<Option<Vec<String>>>;

    fn notify(
        &self,
        level: NoticeLevel,
        message: &str,
        action: Option<&str>,
    ) -> anyhow::Result<Option<String>>;
}

/// Terminal implementation: a full-screen checkbox list for choices and
/// colored console lines for notifications.
pub struct TuiPrompter;

impl Prompter for TuiPrompter {
    fn choose_many(&self, title: &str, options: &[String]) -> anyhow::Result<Option<Vec<String>>> {
        if options.is_empty() {
            debug!("No options to choose from, confirming empty selection");
            return Ok(Some(Vec::new()));
        }
        run_tui(title, options)
    }

    fn notify(
        &self,
        level: NoticeLevel,
        message: &str,
        action: Option<&str>,
    ) -> anyhow::Result<Option<String>> {
        match level {
            NoticeLevel::Info => info!("{message}"),
            NoticeLevel::Warning => warn!("{message}"),
            NoticeLevel::Error => log::error!("{message}"),
        }

        let color = match level {
            NoticeLevel::Info => TermColor::Green,
            NoticeLevel::Warning => TermColor::Yellow,
            NoticeLevel::Error => TermColor::Red,
        };

        let mut stdout = io::stdout();
        stdout.execute(SetForegroundColor(color))?;
        writeln!(stdout, "{message}")?;
        stdout.execute(ResetColor)?;

        if let Some(action) = action {
            write!(stdout, "{action}? [y/N] ")?;
            stdout.flush()?;

            let mut answer = String::new();
            io::stdin().read_line(&mut answer)?;
            if answer.trim().eq_ignore_ascii_case("y") {
                return Ok(Some(action.to_string()));
            }
        }

        Ok(None)
    }
}

struct App {
    items: Vec<(String, bool)>,
    state: ListState,
    title: String,
    help_message: String,
}

impl App {
    fn new(title: String, options: &[String]) -> App {
        let items: Vec<(String, bool)> = options.iter().map(|o| (o.clone(), true)).collect();

        let mut state = ListState::default();
        if !items.is_empty() {
            state.select(Some(0));
        }

        App {
            items,
            state,
            title,
            help_message: String::from(
                "↑/↓: Navigate | Space: Toggle | Enter: Confirm | a: All | n: None | q/Esc: Cancel",
            ),
        }
    }

    fn next(&mut self) {
        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.items.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    fn previous(&mut self) {
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.items.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    fn toggle(&mut self) {
        if let Some(i) = self.state.selected() {
            self.items[i].1 = !self.items[i].1;
        }
    }

    fn check_all(&mut self) {
        for (_, checked) in &mut self.items {
            *checked = true;
        }
    }

    fn uncheck_all(&mut self) {
        for (_, checked) in &mut self.items {
            *checked = false;
        }
    }

    fn checked_count(&self) -> usize {
        self.items.iter().filter(|(_, checked)| *checked).count()
    }

    fn checked(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|(_, checked)| *checked)
            .map(|(label, _)| label.clone())
            .collect()
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.area());

    let title = Paragraph::new(Span::styled(
        app.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    f.render_widget(title, chunks[0]);

    let highlight_style = Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let items: Vec<ListItem> = app
        .items
        .iter()
        .enumerate()
        .map(|(i, (label, checked))| {
            let prefix = if *checked { "[✓] " } else { "[ ] " };
            let content = format!("{prefix}{label}");

            let style = if app.state.selected() == Some(i) {
                highlight_style
            } else if *checked {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };

            ListItem::new(Span::styled(content, style))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Options ({} selected of {})",
            app.checked_count(),
            app.items.len()
        )))
        .highlight_style(highlight_style);

    f.render_stateful_widget(list, chunks[1], &mut app.state);

    let controls = Paragraph::new(Span::styled(
        app.help_message.clone(),
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(controls, chunks[3]);
}

fn run_tui(title: &str, options: &[String]) -> anyhow::Result<Option<Vec<String>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(title.to_string(), options);

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match &result {
        Ok(Some(chosen)) => info!("Confirmed {} of {} options", chosen.len(), options.len()),
        Ok(None) => info!("Prompt dismissed"),
        Err(e) => warn!("Prompt failed: {e}"),
    }
    result
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> anyhow::Result<Option<Vec<String>>> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(None),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(None);
                    }
                    KeyCode::Char('a') => app.check_all(),
                    KeyCode::Char('n') => app.uncheck_all(),
                    KeyCode::Char(' ') => app.toggle(),
                    KeyCode::Down => app.next(),
                    KeyCode::Up => app.previous(),
                    KeyCode::Enter => return Ok(Some(app.checked())),
                    _ => {}
                }
            }
        }
    }
}

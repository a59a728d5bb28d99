//! Play command implementation - interactive TUI.

use super::CliError;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use fun_finance::game::{GameState, PendingDecision, PlayerId, Tile, TileKind, PASS_START_BONUS};
use fun_finance::render::{ring_cell, RING_SIDE};
use fun_finance::{Command, GameConfig, RandomSource, SeededRandom, Session};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::stdout;
use std::path::Path;
use std::rc::Rc;
use std::time::Duration;
use tracing::info;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the log file or the terminal fails.
pub(crate) fn execute(config: &GameConfig, log_file: Option<&Path>) -> Result<(), CliError> {
    if let Some(path) = log_file {
        super::init_file_logging(path)?;
    }
    info!(seed = ?config.seed, "starting interactive game");
    run_tui(App::new(Session::new(config)))
}

/// App state for the TUI.
struct App<R = SeededRandom> {
    session: Session<R>,
    /// Highlighted option in the decision modal.
    selected: usize,
    /// Last rejected action, shown in the footer.
    message: Option<String>,
    quit: bool,
}

impl<R: RandomSource> App<R> {
    fn new(session: Session<R>) -> Self {
        Self {
            session,
            selected: 0,
            message: None,
            quit: false,
        }
    }

    fn state(&self) -> &GameState {
        self.session.state()
    }

    fn option_count(&self) -> usize {
        self.state().pending_decision().map_or(0, |d| d.options.len())
    }

    fn apply(&mut self, command: Command) {
        match self.session.execute(command) {
            Ok(_) => {
                self.selected = 0;
                self.message = None;
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn select_next(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    fn select_prev(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('r' | ' ') => self.apply(Command::Roll(None)),
            KeyCode::Right | KeyCode::Tab => self.select_next(),
            KeyCode::Left | KeyCode::BackTab => self.select_prev(),
            KeyCode::Enter => self.apply(Command::Choose(self.selected)),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(n) = c.to_digit(10).and_then(|d| usize::try_from(d).ok()) {
                    self.apply(Command::Choose(n - 1));
                }
            }
            _ => {}
        }
    }
}

fn run_tui(mut app: App) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(turn = app.state().turn(), "game closed");
    result
}

fn event_loop<B: Backend, R: RandomSource>(
    terminal: &mut Terminal<B>,
    app: &mut App<R>,
) -> Result<(), CliError> {
    while !app.quit {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}

fn ui<R: RandomSource>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board and side panels
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], app.state());

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[1]);

    render_board(f, main_chunks[0], app.state());

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(12), Constraint::Min(3)])
        .split(main_chunks[1]);

    render_players(f, side_chunks[0], app.state());
    render_log(f, side_chunks[1], app.state());
    render_footer(f, chunks[2], app);

    if let Some(decision) = app.state().pending_decision() {
        render_decision(f, centered_rect(50, 40, f.area()), decision, app.selected);
    }
}

fn render_header(f: &mut Frame, area: Rect, state: &GameState) {
    let current = state.current_player();
    let roll = state
        .last_roll()
        .map_or_else(|| "-".to_string(), |r| r.to_string());
    let title = format!(
        " Fun Finance | Turn {} | {} to move | Last roll: {roll} ",
        state.turn() + 1,
        current.name
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

/// Split an area into a `RING_SIDE`×`RING_SIDE` grid, indexed `[row][col]`.
fn ring_grid(area: Rect) -> Vec<Rc<[Rect]>> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Fill(1); RING_SIDE])
        .split(area);
    rows.iter()
        .map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Fill(1); RING_SIDE])
                .split(*row)
        })
        .collect()
}

fn render_board(f: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default().borders(Borders::ALL).title(" Board ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let grid = ring_grid(inner);
    for (index, tile) in state.board.iter() {
        let Some((row, col)) = ring_cell(index) else {
            continue;
        };
        let Some(&cell) = grid.get(row).and_then(|cols| cols.get(col)) else {
            continue;
        };
        f.render_widget(tile_widget(index, tile, state), cell);
    }

    // Inside of the ring
    let last = RING_SIDE - 2;
    if let (Some(&top_left), Some(&bottom_right)) = (
        grid.get(1).and_then(|cols| cols.get(1)),
        grid.get(last).and_then(|cols| cols.get(last)),
    ) {
        f.render_widget(center_widget(state), top_left.union(bottom_right));
    }
}

fn tile_widget(index: usize, tile: &Tile, state: &GameState) -> Paragraph<'static> {
    let detail = match tile.kind {
        TileKind::Start => format!("+${PASS_START_BONUS}"),
        TileKind::Asset { cost, rent } => format!("${cost} / ${rent}"),
        TileKind::Income { amount } => format!("+${amount}"),
        TileKind::Expense { amount } => format!("-${amount}"),
        TileKind::Chance => "Chance".to_string(),
        TileKind::Penalty => "Penalty".to_string(),
        TileKind::Empty => String::new(),
    };

    let mut tokens = Vec::new();
    for player in state.players.iter().filter(|p| p.position == index) {
        let mut style = Style::default().fg(player_color(player.id));
        if player.id == state.current_player().id {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        tokens.push(Span::styled(format!("P{}", player.id), style));
        tokens.push(Span::raw(" "));
    }

    let lines = vec![
        Line::from(Span::styled(
            tile.name.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(detail),
        Line::from(tokens),
    ];

    let border = tile.owner.map_or(Color::DarkGray, player_color);
    Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!("{index}")),
    )
}

fn center_widget(state: &GameState) -> Paragraph<'static> {
    let current = state.current_player();
    let roll = state
        .last_roll()
        .map_or_else(|| "Press r to roll".to_string(), |r| format!("Rolled a {r}"));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "FUN FINANCE",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}'s turn", current.name),
            Style::default()
                .fg(player_color(current.id))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(roll),
    ];

    Paragraph::new(lines).alignment(Alignment::Center)
}

fn render_players(f: &mut Frame, area: Rect, state: &GameState) {
    let mut lines = Vec::new();

    for (i, player) in state.players.iter().enumerate() {
        let color = player_color(player.id);
        let active = i == state.current_index();
        let marker = if active { "> " } else { "  " };
        let mut name_style = Style::default().fg(color).add_modifier(Modifier::BOLD);
        if active {
            name_style = name_style.add_modifier(Modifier::REVERSED);
        }

        let tile = state.board.get(player.position).map_or("?", |t| t.name);
        let owned = state.board.owned_by(player.id).count();

        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(player.name.clone(), name_style),
        ]));
        lines.push(Line::from(format!("  Money: ${}", player.money)));
        lines.push(Line::from(format!("  On: {} {tile}", player.position)));
        lines.push(Line::from(format!(
            "  Assets: {owned} (${})",
            state.board.holdings_value(player.id)
        )));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Players "))
        .wrap(Wrap { trim: false });

    f.render_widget(widget, area);
}

fn render_log(f: &mut Frame, area: Rect, state: &GameState) {
    let visible = usize::from(area.height.saturating_sub(2));
    let lines: Vec<Line> = state
        .log()
        .iter()
        .take(visible)
        .map(|event| Line::from(event.to_string()))
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Log "))
        .wrap(Wrap { trim: true });

    f.render_widget(widget, area);
}

fn render_decision(f: &mut Frame, area: Rect, decision: &PendingDecision, selected: usize) {
    let mut options = Vec::new();
    for (i, option) in decision.options.iter().enumerate() {
        let style = if i == selected {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default()
        };
        options.push(Span::styled(format!(" {}) {} ", i + 1, option.label), style));
        options.push(Span::raw("  "));
    }

    let lines = vec![
        Line::from(""),
        Line::from(decision.text.clone()),
        Line::from(""),
        Line::from(options),
    ];

    let modal = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" {} ", decision.title)),
    );

    f.render_widget(Clear, area);
    f.render_widget(modal, area);
}

fn render_footer<R: RandomSource>(f: &mut Frame, area: Rect, app: &App<R>) {
    let footer = if let Some(message) = &app.message {
        Paragraph::new(format!(" {message} ")).style(Style::default().fg(Color::Red))
    } else if app.state().pending_decision().is_some() {
        Paragraph::new(" [←/→] Select  [Enter] Confirm  [1-9] Pick  [q] Quit ")
            .style(Style::default().fg(Color::Gray))
    } else {
        Paragraph::new(" [r/Space] Roll  [q] Quit ").style(Style::default().fg(Color::Gray))
    };

    f.render_widget(footer.block(Block::default().borders(Borders::ALL)), area);
}

fn player_color(id: PlayerId) -> Color {
    match id {
        1 => Color::Red,
        2 => Color::Blue,
        _ => Color::White,
    }
}

/// A rectangle of the given percentage size centered in `area`.
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

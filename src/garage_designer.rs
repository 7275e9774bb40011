use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use garage_grid::{
    palette, DesignSession, DesignerConfig, FloorPlan, GridShape, GridTrait, Pattern,
    PrimitiveKind, Rgb, Side,
};
use log::debug;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use std::{
    collections::VecDeque,
    io,
    time::{Duration, Instant},
};

const MAX_LOG_ENTRIES: usize = 200;
const TICK_RATE: Duration = Duration::from_millis(100);

#[derive(Clone)]
struct LogEntry {
    timestamp: Instant,
    message: String,
    level: LogLevel,
}

#[derive(Clone, Copy)]
enum LogLevel {
    Info,
    Warning,
    Edit,
}

impl LogLevel {
    fn color(&self) -> Color {
        match self {
            LogLevel::Info => Color::Green,
            LogLevel::Warning => Color::Yellow,
            LogLevel::Edit => Color::Magenta,
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Edit => "edit",
        }
    }
}

struct AppState {
    session: DesignSession,
    cursor: (usize, usize), // (row, col)
    logs: VecDeque<LogEntry>,
    cell_width: u16,
    show_legend: bool,
    show_help: bool,
    should_quit: bool,
}

impl AppState {
    fn new(config: DesignerConfig) -> Self {
        let cell_width = config.display.cell_width.max(1);
        let show_legend = config.display.show_legend;
        Self {
            session: DesignSession::new(config),
            cursor: (0, 0),
            logs: VecDeque::new(),
            cell_width,
            show_legend,
            show_help: false,
            should_quit: false,
        }
    }

    fn add_log(&mut self, level: LogLevel, message: String) {
        self.logs.push_back(LogEntry {
            timestamp: Instant::now(),
            message,
            level,
        });
        if self.logs.len() > MAX_LOG_ENTRIES {
            self.logs.pop_front();
        }
    }

    fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        let shape = self.session.shape();
        let row = (self.cursor.0 as isize + d_row).clamp(0, shape.rows as isize - 1);
        let col = (self.cursor.1 as isize + d_col).clamp(0, shape.cols as isize - 1);
        self.cursor = (row as usize, col as usize);
    }

    fn clamp_cursor(&mut self) {
        self.move_cursor(0, 0);
    }

    /// Edit the cursor cell through a full snapshot, as a table editor would
    fn cycle_cell(&mut self) {
        let (row, col) = self.cursor;
        let mut snapshot = self.session.begin_edit();
        let next = match snapshot.get(row, col) {
            Ok(current) => palette::standard().next_name(current),
            Err(e) => {
                self.add_log(LogLevel::Warning, e.to_string());
                return;
            }
        };
        if let Err(e) = snapshot.set(row, col, next) {
            self.add_log(LogLevel::Warning, e.to_string());
            return;
        }
        if self.session.submit_edit(snapshot) {
            self.add_log(LogLevel::Edit, format!("({}, {}) -> {}", row, col, next));
        }
    }

    fn apply_pattern(&mut self, pattern: Pattern) {
        self.session.apply_pattern(pattern, &mut rand::thread_rng());
        self.add_log(LogLevel::Info, format!("{} applied", pattern.label()));
    }

    fn change_dimension(&mut self, d_width: i32, d_length: i32) {
        let dimension = self
            .session
            .dimension()
            .step_width(d_width)
            .step_length(d_length);
        let reset = self.session.set_dimension(dimension);
        self.after_resize(reset);
    }

    fn toggle_unit(&mut self) {
        let unit = self.session.dimension().unit.toggled();
        let reset = self.session.set_unit(unit);
        self.add_log(LogLevel::Info, format!("Unit: {}", unit.label()));
        self.after_resize(reset);
    }

    fn after_resize(&mut self, reset: bool) {
        if reset {
            self.clamp_cursor();
            self.add_log(
                LogLevel::Warning,
                format!("Grid resized to {}, design reset", self.session.shape()),
            );
        }
    }

    fn toggle_side(&mut self, side: Side) {
        self.session.toggle_side(side);
        let on = self.session.borders().sides.contains(&side);
        self.add_log(
            LogLevel::Info,
            format!("Bordillo {}: {}", side.label(), if on { "on" } else { "off" }),
        );
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('h') => self.show_help = !self.show_help,
            KeyCode::Up => self.move_cursor(-1, 0),
            KeyCode::Down => self.move_cursor(1, 0),
            KeyCode::Left => self.move_cursor(0, -1),
            KeyCode::Right => self.move_cursor(0, 1),
            KeyCode::Char(' ') | KeyCode::Char('c') => self.cycle_cell(),
            KeyCode::Char(n @ '1'..='4') => {
                if let Some(pattern) = n.to_digit(10).and_then(Pattern::from_number) {
                    self.apply_pattern(pattern);
                }
            }
            KeyCode::Char('w') => self.change_dimension(1, 0),
            KeyCode::Char('W') => self.change_dimension(-1, 0),
            KeyCode::Char('l') => self.change_dimension(0, 1),
            KeyCode::Char('L') => self.change_dimension(0, -1),
            KeyCode::Char('u') => self.toggle_unit(),
            KeyCode::Char('b') => {
                let enabled = !self.session.borders().enabled;
                self.session.set_borders_enabled(enabled);
                self.add_log(LogLevel::Info, format!("Bordillos: {}", enabled));
            }
            KeyCode::Char('k') => {
                let enabled = !self.session.corners().enabled;
                self.session.set_corners_enabled(enabled);
                self.add_log(LogLevel::Info, format!("Esquineros: {}", enabled));
            }
            KeyCode::Char('t') => self.toggle_side(Side::Top),
            KeyCode::Char('d') => self.toggle_side(Side::Bottom),
            KeyCode::Char('e') => self.toggle_side(Side::Left),
            KeyCode::Char('r') => self.toggle_side(Side::Right),
            _ => {}
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Keep log output quiet so it does not break the TUI
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let config = DesignerConfig::from_env();
    config.validate()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppState::new(config);
    app.add_log(LogLevel::Info, "Garage Tile Designer started".to_string());
    app.add_log(LogLevel::Info, "Press 'h' for help, 'q' to quit".to_string());

    loop {
        terminal.draw(|f| {
            if app.show_help {
                render_help(f);
            } else {
                render_main_ui(f, &app);
            }
        })?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    debug!("key {:?}", key.code);
                    app.handle_key(key.code);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn render_main_ui(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(10),   // Floor plan
            Constraint::Length(7), // Logs
        ])
        .split(f.area());

    render_header(f, chunks[0], app);

    let body = if app.show_legend {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(26)])
            .split(chunks[1])
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20)])
            .split(chunks[1])
    };
    render_floor_plan(f, body[0], app);
    if app.show_legend {
        render_legend(f, body[1]);
    }

    render_logs(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &AppState) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let dimension = app.session.dimension();
    let shape = app.session.shape();
    let title = Paragraph::new(vec![
        Line::from(vec![Span::styled(
            "Garage Tile Designer",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("Ancho x Largo: ", Style::default().fg(Color::White)),
            Span::styled(
                format!(
                    "{} x {} {}",
                    dimension.width,
                    dimension.length,
                    dimension.unit.symbol()
                ),
                Style::default().fg(Color::Green),
            ),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL).title("Design"));
    f.render_widget(title, header_chunks[0]);

    let on_off = |on: bool| if on { "on" } else { "off" };
    let borders = app.session.borders();
    let sides: Vec<&str> = borders.sides.iter().map(|s| s.label()).collect();
    let stats = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Área: ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{:.2} m²", app.session.area_m2()),
                Style::default().fg(Color::Green),
            ),
            Span::raw(format!("  Palmetas: {} ({}x{})", shape.cell_count(), shape.rows, shape.cols)),
        ]),
        Line::from(vec![
            Span::raw(format!("Bordillos: {} [{}]  ", on_off(borders.enabled), sides.join(","))),
            Span::raw(format!("Esquineros: {}", on_off(app.session.corners().enabled))),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL).title("Stats"));
    f.render_widget(stats, header_chunks[1]);
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Screen placement of the floor plan: tiles plus a one character ring
/// for decorations, centered in the available area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PlanLayout {
    origin_x: u16,
    origin_y: u16,
    rows: u16,
    cols: u16,
    cell_width: u16,
}

impl PlanLayout {
    /// `None` when the plan does not fit in `area`
    fn fit(shape: GridShape, cell_width: u16, area: Rect) -> Option<Self> {
        let rows = u16::try_from(shape.rows).ok()?;
        let cols = u16::try_from(shape.cols).ok()?;
        let width = cols.checked_mul(cell_width)?.checked_add(2)?;
        let height = rows.checked_add(2)?;
        if width > area.width || height > area.height {
            return None;
        }
        Some(Self {
            origin_x: area.x.saturating_add((area.width - width) / 2),
            origin_y: area.y.saturating_add((area.height - height) / 2),
            rows,
            cols,
            cell_width,
        })
    }

    fn tiles_width(&self) -> u16 {
        self.cols * self.cell_width
    }

    /// Screen cell of tile (row, col); row 0 is the top line like the plot
    fn tile_rect(&self, row: usize, col: usize) -> Option<Rect> {
        let row = u16::try_from(row).ok().filter(|r| *r < self.rows)?;
        let col = u16::try_from(col).ok().filter(|c| *c < self.cols)?;
        Some(Rect::new(
            self.origin_x + 1 + col * self.cell_width,
            self.origin_y + 1 + row,
            self.cell_width,
            1,
        ))
    }

    fn border_rect(&self, side: Side) -> Rect {
        match side {
            Side::Top => Rect::new(self.origin_x + 1, self.origin_y, self.tiles_width(), 1),
            Side::Bottom => Rect::new(self.origin_x + 1, self.origin_y + self.rows + 1, self.tiles_width(), 1),
            Side::Left => Rect::new(self.origin_x, self.origin_y + 1, 1, self.rows),
            Side::Right => Rect::new(self.origin_x + self.tiles_width() + 1, self.origin_y + 1, 1, self.rows),
        }
    }

    fn corner_rect(&self, left: bool, bottom: bool) -> Rect {
        let x = if left { self.origin_x } else { self.origin_x + self.tiles_width() + 1 };
        let y = if bottom { self.origin_y + self.rows + 1 } else { self.origin_y };
        Rect::new(x, y, 1, 1)
    }
}

fn render_floor_plan(f: &mut Frame, area: Rect, app: &AppState) {
    let shape = app.session.shape();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Plano ({})", shape));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(layout) = PlanLayout::fit(shape, app.cell_width, inner) else {
        let msg = Paragraph::new("Area too small for the floor plan, shrink the floor or the terminal font")
            .style(Style::default().fg(Color::Yellow))
            .wrap(Wrap { trim: true });
        f.render_widget(msg, inner);
        return;
    };

    let plan = app.session.render();
    draw_plan(f, &plan, &layout, app);
}

/// Draw the rendered primitives: each tile is `cell_width` columns by one row,
/// decorations take the ring around the tiles
fn draw_plan(f: &mut Frame, plan: &FloorPlan, layout: &PlanLayout, app: &AppState) {
    let decoration = Style::default().fg(Color::White);

    for primitive in &plan.primitives {
        match primitive.kind {
            PrimitiveKind::Tile { row, col } => {
                let Some(cell) = layout.tile_rect(row, col) else {
                    continue;
                };
                let fill = primitive.fill;
                let fg = if fill.is_light() { Color::Black } else { Color::White };
                let mut style = Style::default().bg(to_color(fill)).fg(fg);
                if (row, col) == app.cursor {
                    style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                }
                let label = app
                    .session
                    .grid()
                    .color_at(row, col)
                    .ok()
                    .and_then(|name| palette::standard().lookup(name).entry())
                    .map(|entry| entry.code)
                    .unwrap_or("??");
                f.render_widget(
                    Paragraph::new(format!("{:^width$}", label, width = cell.width as usize)).style(style),
                    cell,
                );
            }
            PrimitiveKind::Border(side) => {
                let rect = layout.border_rect(side);
                let glyph = match side {
                    Side::Top => "▄",
                    Side::Bottom => "▀",
                    Side::Left => "▐",
                    Side::Right => "▌",
                };
                let text: Vec<Line> = (0..rect.height)
                    .map(|_| Line::from(glyph.repeat(rect.width as usize)))
                    .collect();
                f.render_widget(Paragraph::new(text).style(decoration), rect);
            }
            PrimitiveKind::Corner => {
                // Corner centers sit on whole grid coordinates
                let left = primitive.x + primitive.width / 2.0 < 0.5;
                let bottom = primitive.y + primitive.height / 2.0 < 0.5;
                f.render_widget(
                    Paragraph::new("■").style(decoration),
                    layout.corner_rect(left, bottom),
                );
            }
        }
    }
}

fn render_legend(f: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = palette::standard()
        .entries()
        .iter()
        .map(|entry| {
            let rgb = entry.rgb();
            ListItem::new(Line::from(vec![
                Span::styled("  ", Style::default().bg(to_color(rgb))),
                Span::raw(format!(" {} {}", entry.code, entry.name)),
            ]))
        })
        .collect();
    let legend = List::new(items).block(Block::default().borders(Borders::ALL).title("Colores"));
    f.render_widget(legend, area);
}

fn render_logs(f: &mut Frame, area: Rect, app: &AppState) {
    let visible = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = app
        .logs
        .iter()
        .rev()
        .take(visible)
        .rev()
        .map(|entry| {
            let time_str = format!("{:.1}s", entry.timestamp.elapsed().as_secs_f32());
            ListItem::new(Line::from(vec![
                Span::styled(time_str, Style::default().fg(Color::DarkGray)),
                Span::raw(" "),
                Span::styled(entry.level.prefix(), Style::default().fg(entry.level.color())),
                Span::raw(" "),
                Span::raw(entry.message.as_str()),
            ]))
        })
        .collect();

    let logs_widget = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Activity"))
        .style(Style::default().fg(Color::White));
    f.render_widget(logs_widget, area);
}

fn render_help(f: &mut Frame) {
    let area = f.area();
    f.render_widget(Clear, area);

    let help_text = vec![
        Line::from("Garage Tile Designer - Help"),
        Line::from(""),
        Line::from("Keyboard Commands:"),
        Line::from("  q          - Quit application"),
        Line::from("  h          - Toggle this help screen"),
        Line::from("  arrows     - Move the cell cursor"),
        Line::from("  space / c  - Cycle the color of the cursor cell"),
        Line::from("  1-4        - Apply Diseño 1-4 (replaces the whole design)"),
        Line::from("  w / W      - Widen / narrow the floor by one step"),
        Line::from("  l / L      - Lengthen / shorten the floor by one step"),
        Line::from("  u          - Switch metros / centímetros"),
        Line::from("  b          - Toggle bordillos"),
        Line::from("  k          - Toggle esquineros"),
        Line::from("  t d e r    - Toggle Arriba / Abajo / izquierda / deRecha"),
        Line::from(""),
        Line::from("Changing the size so the tile count changes resets the design to Gris."),
        Line::from(""),
        Line::from("Press 'h' again to close this help screen"),
    ];

    let help_widget = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .title_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, centered_rect(70, 80, area));
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_layout_centers_small_floor() {
        let area = Rect::new(10, 5, 40, 20);
        let layout = PlanLayout::fit(GridShape::new(15, 10), 3, area).unwrap();
        assert_eq!(layout.origin_x, 10 + (40 - 32) / 2);
        assert_eq!(layout.origin_y, 5 + (20 - 17) / 2);
        assert_eq!(layout.tile_rect(0, 0), Some(Rect::new(15, 7, 3, 1)));
        assert_eq!(layout.tile_rect(14, 9), Some(Rect::new(42, 21, 3, 1)));
        assert_eq!(layout.tile_rect(15, 0), None);
        assert_eq!(layout.border_rect(Side::Right), Rect::new(45, 7, 1, 15));
        assert_eq!(layout.corner_rect(true, true), Rect::new(14, 22, 1, 1));
    }

    #[test]
    fn test_plan_layout_rejects_floors_that_do_not_fit() {
        let area = Rect::new(0, 0, u16::MAX, u16::MAX);
        // 25000 columns x 3 overflows u16
        assert_eq!(PlanLayout::fit(GridShape::new(15, 25_000), 3, area), None);
        assert_eq!(PlanLayout::fit(GridShape::new(70_000, 1), 1, area), None);
        assert_eq!(PlanLayout::fit(GridShape::new(15, 10), 3, Rect::new(0, 0, 31, 17)), None);
        assert!(PlanLayout::fit(GridShape::new(15, 10), 3, Rect::new(0, 0, 32, 17)).is_some());
    }
}

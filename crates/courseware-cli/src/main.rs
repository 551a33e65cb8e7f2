use anyhow::Result;
use courseware_config::Config;
use courseware_engine::{Course, Direction, ModulePath, Outline, OutlineItem, io, navigate};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{
    env, fs,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

mod render;

struct App {
    course: Course,
    outline: Outline,
    current: ModulePath,
    outline_items: Vec<OutlineItem>,
    outline_state: ListState,
    reveal_answers: bool,
    current_content: Vec<String>,
}

impl App {
    fn new(course: Course) -> Self {
        let mut app = Self {
            course,
            outline: Outline::new(),
            current: ModulePath::root(),
            outline_items: Vec::new(),
            outline_state: ListState::default(),
            reveal_answers: false,
            current_content: Vec::new(),
        };
        app.outline.expand(&ModulePath::root());
        app.refresh();
        app
    }

    fn refresh(&mut self) {
        self.outline_items = self
            .outline
            .items(&self.course.root_module, Some(&self.current));
        let selected = self
            .outline_items
            .iter()
            .position(|item| item.path == self.current);
        self.outline_state.select(selected);
        self.current_content =
            render::render_module(self.course.content_at(&self.current), self.reveal_answers);
    }

    fn open(&mut self, path: ModulePath) {
        if path != self.current {
            self.reveal_answers = false;
        }
        self.current = path;
        self.refresh();
    }

    fn next_item(&mut self) {
        let i = match self.outline_state.selected() {
            Some(i) => (i + 1) % self.outline_items.len(),
            None => 0,
        };
        if let Some(item) = self.outline_items.get(i) {
            self.open(item.path.clone());
        }
    }

    fn previous_item(&mut self) {
        let i = match self.outline_state.selected() {
            Some(0) | None => self.outline_items.len().saturating_sub(1),
            Some(i) => i - 1,
        };
        if let Some(item) = self.outline_items.get(i) {
            self.open(item.path.clone());
        }
    }

    /// Next/Previous module in course order, opening the outline to show it
    fn step(&mut self, direction: Direction) {
        let path = navigate(&self.course.root_module, &self.current, direction);
        self.outline.reveal(&path);
        self.open(path);
    }

    fn toggle_selected_branch(&mut self) {
        let has_children = self
            .course
            .content_at(&self.current)
            .is_some_and(|module| !module.is_leaf());
        if has_children {
            self.outline.toggle(&self.current);
            self.refresh();
        }
    }

    fn toggle_reveal(&mut self) {
        self.reveal_answers = !self.reveal_answers;
        self.refresh();
    }
}

fn main() -> Result<()> {
    // Initialize logging; RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    // Determine course path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let course_path;
    let from_config;

    if args.len() == 2 {
        course_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        match Config::load() {
            Ok(Some(config)) => {
                course_path = config.course_path;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No course path provided and no config file found");
                eprintln!("Usage: {} <course-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <course-folder-path>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [course-folder-path]", args[0]);
        process::exit(1);
    };

    let course = match io::load_course(&course_path) {
        Ok(course) => course,
        Err(e) => {
            let source = if from_config {
                format!(" from config file '{}'", config_path.display())
            } else {
                String::new()
            };
            eprintln!(
                "Error: Course path '{}'{} could not be loaded: {e}",
                course_path.display(),
                source
            );
            process::exit(1);
        }
    };
    log::info!(
        "Opened course '{}' ({} modules)",
        course.title,
        course.root_module.count()
    );
    if !from_config {
        remember_course(&course_path, &config_path);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(course);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Make a course opened from the command line the default for next time,
/// unless a config file already exists.
fn remember_course(course_path: &Path, config_path: &Path) {
    let course_path = fs::canonicalize(course_path).unwrap_or_else(|_| course_path.to_path_buf());
    match Config::new(course_path).save_if_missing(config_path) {
        Ok(true) => log::info!("Saved default course to {}", config_path.display()),
        Ok(false) => {}
        Err(e) => log::warn!("Could not save default course: {e}"),
    }
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_item(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_item(),
                KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected_branch(),
                KeyCode::Char('n') | KeyCode::Right => app.step(Direction::Next),
                KeyCode::Char('p') | KeyCode::Left => app.step(Direction::Previous),
                KeyCode::Char('r') => app.toggle_reveal(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(f.area());
    let columns = Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[1]);

    // Course title and authors
    let mut header = vec![Span::styled(
        app.course.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if !app.course.authors.is_empty() {
        header.push(Span::raw(format!("  {}", app.course.byline())));
    }
    f.render_widget(Paragraph::new(Line::from(header)), rows[0]);

    // Outline panel
    let outline_items: Vec<ListItem> = app
        .outline_items
        .iter()
        .map(|item| {
            let indent = "  ".repeat(item.depth);
            let icon = match (item.has_children, item.is_expanded) {
                (true, true) => "▾ ",
                (true, false) => "▸ ",
                (false, _) => "  ",
            };
            ListItem::new(Line::from(vec![Span::raw(format!(
                "{indent}{icon}{}",
                item.title
            ))]))
        })
        .collect();

    let outline = List::new(outline_items)
        .block(Block::default().borders(Borders::ALL).title("Modules"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(outline, columns[0], &mut app.outline_state);

    // Content panel
    let content_title = app
        .course
        .content_at(&app.current)
        .map(|module| module.title.clone())
        .unwrap_or_default();
    let content_text: Vec<Line> = app
        .current_content
        .iter()
        .map(|line| Line::from(line.as_str()))
        .collect();

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(content_title))
        .wrap(Wrap { trim: false });

    f.render_widget(content, columns[1]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Browse | "),
        Span::raw("Enter/Space: Expand | "),
        Span::raw("n/→: Next | p/←: Previous | "),
        Span::raw("r: Reveal answers"),
    ]);
    f.render_widget(Paragraph::new(help), rows[2]);
}

mod app;
mod components;
mod tui_event;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use stockkeep_runtime::{Config, InventoryWorkspace};

use app::AppState;

/// Timing knobs for the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuiOptions {
    pub splash: Duration,
    pub tick: Duration,
    pub notice_ttl: Duration,
}

impl TuiOptions {
    pub fn from_config(config: &Config, skip_splash: bool) -> Self {
        Self {
            splash: if skip_splash {
                Duration::ZERO
            } else {
                Duration::from_secs(config.splash_seconds)
            },
            tick: Duration::from_millis(config.ui.tick_millis.max(10)),
            notice_ttl: Duration::from_secs(config.ui.notice_seconds),
        }
    }
}

pub struct TuiRenderer;

impl TuiRenderer {
    /// Take over the terminal until the user quits.
    pub fn run(workspace: InventoryWorkspace, options: TuiOptions) -> Result<()> {
        // Raw mode swallows SIGINT; this covers a signal sent from outside.
        // Installed before the terminal changes so a failure leaves it untouched.
        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        let result = Self::session(&mut terminal, workspace, options);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn session<B: Backend>(
        terminal: &mut Terminal<B>,
        workspace: InventoryWorkspace,
        options: TuiOptions,
    ) -> Result<()> {
        Self::splash(terminal, options)?;

        let mut app_state = AppState::new(workspace, options.notice_ttl)?;
        tracing::info!(items = app_state.rows.len(), "inventory loaded");

        let mut last_tick = Instant::now();

        while !app_state.should_quit {
            terminal.draw(|f| ui::draw(f, &app_state))?;

            let timeout = options
                .tick
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)?
                && let Event::Key(key) = event::read()?
                && let Some(tui_event) = tui_event::map_key(key, app_state.focus)
            {
                app_state.handle(tui_event)?;
            }

            if last_tick.elapsed() >= options.tick {
                app_state.on_tick(Instant::now());
                last_tick = Instant::now();
            }
        }

        tracing::info!("inventory closed");
        Ok(())
    }

    /// Non-cancelable: keys pressed during the splash are read and dropped.
    fn splash<B: Backend>(terminal: &mut Terminal<B>, options: TuiOptions) -> Result<()> {
        if options.splash.is_zero() {
            return Ok(());
        }

        let until = Instant::now() + options.splash;
        terminal.draw(ui::draw_splash)?;

        while let Some(remaining) = until.checked_duration_since(Instant::now()) {
            if remaining.is_zero() {
                break;
            }
            if event::poll(remaining.min(options.tick))? {
                let _ = event::read()?;
            }
            terminal.draw(ui::draw_splash)?;
        }

        Ok(())
    }
}

use crate::command::Command;
use crate::config::GameConfig;
use crate::game::{GamePhase, GameState};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Drives a game: draws it, decodes key presses, and fires movement ticks at
/// a fixed period
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: GameState<R>,
    tick_period: Duration,
    next_tick: Option<Instant>,
}

impl App {
    pub(crate) fn new(config: GameConfig) -> App {
        App::with_game(GameState::new(config.bounds()), config.tick_period())
    }
}

impl<R: Rng> App<R> {
    pub(crate) fn with_game(game: GameState<R>, tick_period: Duration) -> App<R> {
        App {
            game,
            tick_period,
            next_tick: None,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.game.should_stop() {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let snapshot = self.game.snapshot();
        terminal.draw(|frame| frame.render_widget(&snapshot, frame.area()))?;
        Ok(())
    }

    /// Wait for either the next key press or, while playing, the next tick,
    /// whichever comes first
    fn process_input(&mut self) -> io::Result<()> {
        if self.game.playing() {
            let when = *self
                .next_tick
                .get_or_insert_with(|| Instant::now() + self.tick_period);
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.tick();
                return Ok(());
            }
        }
        self.handle_event(read()?);
        Ok(())
    }

    fn tick(&mut self) {
        self.game.on_movement_tick();
        self.next_tick = None;
    }

    fn handle_event(&mut self, event: Event) {
        let Some(ev) = event.as_key_press_event() else {
            return;
        };
        if let GamePhase::GameOver(_) = self.game.phase() {
            // The final board stays up until any key is pressed
            self.game.request_quit();
        } else if let Some(cmd) = Command::from_key_event(ev) {
            self.game.apply(cmd);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Bounds;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use ratatui::backend::TestBackend;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_app() -> App<ChaCha12Rng> {
        let game =
            GameState::new_with_rng(Bounds::default(), ChaCha12Rng::seed_from_u64(RNG_SEED));
        App::with_game(game, Duration::from_millis(250))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn arrow_starts_game() {
        let mut app = new_app();
        app.handle_event(key(KeyCode::Up));
        assert_eq!(app.game.phase(), GamePhase::Playing);
    }

    #[test]
    fn key_release_ignored() {
        let mut app = new_app();
        app.handle_event(Event::Key(KeyEvent::new_with_kind(
            KeyCode::Up,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        )));
        assert_eq!(app.game.phase(), GamePhase::StartScreen);
    }

    #[test]
    fn focus_lost_ignored() {
        let mut app = new_app();
        app.handle_event(Event::FocusLost);
        assert_eq!(app.game.phase(), GamePhase::StartScreen);
        assert!(!app.game.should_stop());
    }

    #[test]
    fn quit_key() {
        let mut app = new_app();
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.game.should_stop());
        assert_eq!(app.game.phase(), GamePhase::StartScreen);
    }

    #[test]
    fn any_key_after_game_over_exits() {
        let mut app = new_app();
        app.handle_event(key(KeyCode::Enter));
        // Run straight on until the snake hits a wall
        for _ in 0..20 {
            app.tick();
        }
        assert!(matches!(app.game.phase(), GamePhase::GameOver(_)));
        assert!(!app.game.should_stop());
        app.handle_event(key(KeyCode::Char('x')));
        assert!(app.game.should_stop());
    }

    #[test]
    fn tick_clears_deadline() {
        let mut app = new_app();
        app.handle_event(key(KeyCode::Enter));
        app.next_tick = Some(Instant::now());
        app.tick();
        assert_eq!(app.next_tick, None);
    }

    #[test]
    fn draw_to_terminal() {
        let app = new_app();
        let mut terminal =
            Terminal::new(TestBackend::new(80, 24)).expect("test terminal should be created");
        app.draw(&mut terminal).expect("drawing should succeed");
        let buffer = terminal.backend().buffer();
        let top = (0..80u16).map(|x| buffer[(x, 2u16)].symbol()).collect::<String>();
        assert!(top.contains("Score: 0"), "unexpected top row: {top:?}");
    }
}

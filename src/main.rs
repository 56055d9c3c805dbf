/// Entry point and game loop.

mod config;
mod domain;
mod sim;
mod ui;

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use config::GameConfig;
use sim::event::GameEvent;
use sim::gesture::{GestureTracker, PointerEvent};
use sim::session::{GameSession, Phase};
use sim::words::{self, Theme};
use ui::input::InputState;
use ui::renderer::Renderer;
use ui::sound::SoundEngine;

const FRAME_SLEEP: Duration = Duration::from_millis(5);
const CLOCK_TICK: Duration = Duration::from_secs(1);

/// The mouse is the only pointer source; it maps to one fixed pointer id.
const MOUSE_POINTER: u8 = 0;

fn main() {
    let config = GameConfig::load();

    let themes = words::load_themes(&config);
    if themes.is_empty() {
        eprintln!("No word themes available.");
        return;
    }

    // One seedable RNG drives theme sampling, placement, and filler, so a
    // fixed config seed reproduces an entire run.
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);

    let mut session = GameSession::new();
    let mut renderer = Renderer::new();

    if let Err(e) = renderer.init() {
        eprintln!("Terminal init failed: {e}");
        return;
    }

    let sound = SoundEngine::new();

    let result = game_loop(
        &mut session,
        &mut renderer,
        sound.as_ref(),
        &themes,
        &config,
        &mut rng,
    );

    if let Err(e) = renderer.cleanup() {
        eprintln!("Terminal cleanup failed: {e}");
    }

    if let Err(e) = result {
        eprintln!("Game error: {e}");
    }

    println!();
    println!("Thanks for playing Word Seek!");
}

fn game_loop(
    session: &mut GameSession,
    renderer: &mut Renderer,
    sound: Option<&SoundEngine>,
    themes: &[Theme],
    config: &GameConfig,
    rng: &mut StdRng,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut input = InputState::new();
    let mut gesture = GestureTracker::new();
    let mut last_clock = Instant::now();

    loop {
        input.drain_events();

        if input.ctrl_c_pressed() {
            break;
        }
        if handle_meta(session, renderer, &mut gesture, &input, themes, config, rng)? {
            break;
        }

        if session.phase == Phase::Playing {
            handle_pointer(session, renderer, sound, &mut gesture, &input);
        } else if gesture.is_dragging() {
            // Phase changed under an active drag: discard it, no match.
            gesture.abort();
            renderer.mark_dirty();
        }

        // Leaving the terminal window cancels the gesture (never matches).
        if input.lost_focus() && gesture.is_dragging() {
            gesture.abort();
            renderer.mark_dirty();
        }
        if input.was_resized() {
            renderer.mark_dirty();
        }

        // Once-per-second clock: play time + status message aging. Runs
        // independently of gestures and never touches grid state.
        if last_clock.elapsed() >= CLOCK_TICK {
            session.tick_second();
            if session.phase == Phase::Playing {
                renderer.mark_dirty();
            }
            last_clock = Instant::now();
        }

        renderer.render(session, gesture.path())?;
        std::thread::sleep(FRAME_SLEEP);
    }

    Ok(())
}

// ── Key Constants ──

const KEYS_CONFIRM: &[KeyCode] = &[KeyCode::Enter, KeyCode::Char(' ')];
const KEYS_RESTART: &[KeyCode] = &[KeyCode::Char('r'), KeyCode::Char('R')];
const KEYS_QUIT: &[KeyCode] = &[KeyCode::Char('q'), KeyCode::Char('Q')];

/// Menu/meta keys per phase. Returns true to quit the program.
fn handle_meta(
    session: &mut GameSession,
    renderer: &mut Renderer,
    gesture: &mut GestureTracker,
    kb: &InputState,
    themes: &[Theme],
    config: &GameConfig,
    rng: &mut StdRng,
) -> Result<bool, Box<dyn std::error::Error>> {
    let confirm = kb.any_pressed(KEYS_CONFIRM);
    let esc = kb.any_pressed(&[KeyCode::Esc]);

    match session.phase {
        // ── Title Screen ──
        Phase::Title => {
            if confirm {
                session.start_round(themes, config, rng)?;
                renderer.mark_dirty();
            } else if esc || kb.any_pressed(KEYS_QUIT) {
                return Ok(true);
            }
        }

        // ── Playing ──
        Phase::Playing => {
            if kb.any_pressed(KEYS_RESTART) {
                // Full restart: fresh theme sample, fresh placements.
                gesture.abort();
                session.start_round(themes, config, rng)?;
                renderer.mark_dirty();
            } else if esc {
                gesture.abort();
                session.reset_to_title();
                renderer.mark_dirty();
            }
        }

        // ── Won (terminal until explicit restart) ──
        Phase::Won => {
            if confirm || kb.any_pressed(KEYS_RESTART) {
                session.start_round(themes, config, rng)?;
                renderer.mark_dirty();
            } else if esc {
                session.reset_to_title();
                renderer.mark_dirty();
            }
        }
    }

    Ok(false)
}

/// Translate mouse events into gesture events and resolve releases.
fn handle_pointer(
    session: &mut GameSession,
    renderer: &mut Renderer,
    sound: Option<&SoundEngine>,
    gesture: &mut GestureTracker,
    input: &InputState,
) {
    let size = session.grid.size();

    for mouse in input.mouse_events().iter().copied() {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Presses outside the grid don't anchor a gesture.
                if let Some(cell) = renderer.hit_test(mouse.column, mouse.row, size) {
                    gesture.handle(PointerEvent::Press { id: MOUSE_POINTER, cell }, size);
                    renderer.mark_dirty();
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                // Drags past the grid edge keep the last resolved path.
                if let Some(cell) = renderer.hit_test(mouse.column, mouse.row, size) {
                    gesture.handle(PointerEvent::Move { id: MOUSE_POINTER, cell }, size);
                    renderer.mark_dirty();
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let released =
                    gesture.handle(PointerEvent::Release { id: MOUSE_POINTER }, size);
                if let Some(path) = released {
                    let (_, events) = session.check_selection(&path);
                    for event in &events {
                        if let GameEvent::WordFound { word, .. } = event {
                            session.set_message(&format!("Found {word}!"), 3);
                        }
                    }
                    process_sound_events(sound, &events);
                    renderer.mark_dirty();
                }
            }
            _ => {}
        }
    }
}

fn process_sound_events(sound: Option<&SoundEngine>, events: &[GameEvent]) {
    let sfx = match sound {
        Some(s) => s,
        None => return,
    };
    for event in events {
        match event {
            GameEvent::WordFound { .. } => sfx.play_found(),
            GameEvent::Victory => sfx.play_victory(),
            _ => {}
        }
    }
}

use std::io::Stdout;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Terminal type the screen draws into.
pub type Screen = Terminal<CrosstermBackend<Stdout>>;

/// Set while raw mode and the alternate screen are active.
static ACTIVE: AtomicBool = AtomicBool::new(false);
static PANIC_HOOK: Once = Once::new();

/// What: Switch to raw mode and the alternate screen and hand back the drawing terminal.
///
/// Output:
/// - The ratatui terminal, or `Err` after the partially applied setup has been undone.
///
/// Details:
/// - Installs (once per process) a panic hook that restores the terminal before the panic
///   message is printed.
pub fn setup_terminal() -> Result<Screen> {
    install_panic_hook();
    enable_raw_mode()?;
    ACTIVE.store(true, Ordering::SeqCst);
    let screen = execute!(std::io::stdout(), EnterAlternateScreen, Hide)
        .and_then(|()| Terminal::new(CrosstermBackend::new(std::io::stdout())));
    match screen {
        Ok(t) => Ok(t),
        Err(e) => {
            tracing::error!(error = %e, "terminal setup failed; restoring");
            restore_terminal()?;
            Err(e.into())
        }
    }
}

/// What: Leave the alternate screen and restore cooked mode.
///
/// Details:
/// - Only the first call after [`setup_terminal`] touches the terminal; later calls (normal exit
///   after the panic hook, or no setup at all in headless mode) return `Ok(())`.
pub fn restore_terminal() -> Result<()> {
    if !ACTIVE.swap(false, Ordering::SeqCst) {
        return Ok(());
    }
    disable_raw_mode()?;
    execute!(std::io::stdout(), Show, LeaveAlternateScreen)?;
    Ok(())
}

fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            previous(info);
        }));
    });
}

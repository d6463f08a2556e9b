//! The terminal the console lock screen takes over.
//!
//! While a [`LockTerminal`] is alive the terminal is in raw mode on the
//! alternate screen with the cursor hidden. Dropping it, or a panic
//! anywhere in the process, wipes the lock screen and hands the terminal
//! back exactly once.

use std::io::{self, Stdout};
use std::sync::Arc;

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::ui::console::render;
use crate::ui::surface::SurfaceModel;

/// Set while the terminal is taken over; cleared by whoever restores it.
type Taken = Arc<Mutex<bool>>;

pub struct LockTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    taken: Taken,
}

impl LockTerminal {
    pub fn take_over() -> io::Result<Self> {
        enable_raw_mode()?;
        let taken: Taken = Arc::new(Mutex::new(true));
        // From here on a failure still has to undo raw mode.
        let hook_flag = Arc::clone(&taken);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_once(&hook_flag, restore_terminal);
            default_hook(info);
        }));

        let setup = (|| {
            let mut stdout = io::stdout();
            stdout.execute(EnterAlternateScreen)?;
            stdout.execute(Clear(ClearType::All))?;
            stdout.execute(Hide)?;
            Terminal::new(CrosstermBackend::new(stdout))
        })();

        match setup {
            Ok(terminal) => Ok(Self { terminal, taken }),
            Err(err) => {
                restore_once(&taken, restore_terminal);
                Err(err)
            }
        }
    }

    pub fn draw(&mut self, model: &SurfaceModel) -> io::Result<()> {
        self.terminal.draw(|frame| render::draw(frame, model))?;
        Ok(())
    }
}

impl Drop for LockTerminal {
    fn drop(&mut self) {
        restore_once(&self.taken, restore_terminal);
    }
}

/// Run `restore` only if nobody has restored the terminal yet.
fn restore_once(taken: &Mutex<bool>, restore: impl FnOnce()) {
    let was_taken = std::mem::replace(&mut *taken.lock(), false);
    if was_taken {
        restore();
    }
}

fn restore_terminal() {
    let mut stdout = io::stdout();
    // Wipe the dot count before leaving the alternate screen.
    let _ = stdout.execute(Clear(ClearType::All));
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
    let _ = disable_raw_mode();
}

//! Interactive session selector.
//!
//! [`run_selector`] shows one [`SelectableItem`] per session and reports which one the
//! user picked. The terminal is restored before it returns, whatever the outcome.

mod app;
mod events;
mod item;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::{App, Mode, Selection};
pub use events::{Action, key_to_action};
pub use item::SelectableItem;
use terminal::TerminalManager;

/// Let the user pick one of `items`
///
/// Returns [`Selection::Empty`] without touching the terminal when there is nothing to
/// choose from.
pub fn run_selector(items: Vec<SelectableItem>) -> Result<Selection> {
    if items.is_empty() {
        return Ok(Selection::Empty);
    }

    let mut manager = TerminalManager::new()?;
    let mut app = App::new(items);

    let selection = app.run(manager.terminal_mut());
    let restored = manager.restore();

    let selection = selection?;
    restored?;
    Ok(selection)
}

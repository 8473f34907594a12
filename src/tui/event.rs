use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Global
    ForceQuit,      // Ctrl+C
    ShowStatistics, // Ctrl+T
    Escape,
    Resize,

    // Screen-local
    Submit,
    InputChar(char),
    Paste(String),
    Backspace,
    NextField,
    PrevField,
    CursorUp,
    CursorDown,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> std::io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// The event that woke the loop plus everything already queued behind it.
/// A read error ends the drain and is returned.
pub fn drain_pending<F>(first: Option<TuiEvent>, mut poll: F) -> std::io::Result<Vec<TuiEvent>>
where
    F: FnMut() -> std::io::Result<Option<TuiEvent>>,
{
    let mut events: Vec<TuiEvent> = first.into_iter().collect();
    while let Some(event) = poll()? {
        events.push(event);
    }
    Ok(events)
}

/// Poll for an event, waiting up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> std::io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        Event::Key(key_event) => {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            map_key(key_event)
        }
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    })
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (KeyModifiers::CONTROL, KeyCode::Char('t')) => Some(TuiEvent::ShowStatistics),
        (KeyModifiers::CONTROL, _) => None,
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Tab) => Some(TuiEvent::NextField),
        (_, KeyCode::BackTab) => Some(TuiEvent::PrevField),
        (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::io;

    fn queued(
        items: Vec<io::Result<Option<TuiEvent>>>,
    ) -> impl FnMut() -> io::Result<Option<TuiEvent>> {
        let mut items = VecDeque::from(items);
        move || items.pop_front().unwrap_or(Ok(None))
    }

    #[test]
    fn test_drain_collects_queued_events() {
        let poll = queued(vec![
            Ok(Some(TuiEvent::InputChar('a'))),
            Ok(Some(TuiEvent::Submit)),
        ]);
        let events = drain_pending(Some(TuiEvent::InputChar('w')), poll).unwrap();
        assert_eq!(
            events,
            vec![TuiEvent::InputChar('w'), TuiEvent::InputChar('a'), TuiEvent::Submit]
        );
    }

    #[test]
    fn test_drain_propagates_read_errors() {
        let poll = queued(vec![
            Ok(Some(TuiEvent::Submit)),
            Err(io::Error::other("tty gone")),
        ]);
        let err = drain_pending(None, poll).unwrap_err();
        assert_eq!(err.to_string(), "tty gone");
    }

    #[test]
    fn test_control_keys() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let ctrl_t = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);
        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), Some(TuiEvent::ForceQuit));
        assert_eq!(map_key(ctrl_t), Some(TuiEvent::ShowStatistics));
        assert_eq!(map_key(ctrl_x), None);
    }

    #[test]
    fn test_shifted_char_is_input() {
        let key = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(map_key(key), Some(TuiEvent::InputChar('W')));
    }

    #[test]
    fn test_release_ignored() {
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(key), None);
    }

    #[test]
    fn test_navigation_keys() {
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        let back_tab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(map_key(tab), Some(TuiEvent::NextField));
        assert_eq!(map_key(back_tab), Some(TuiEvent::PrevField));
    }
}

use anyhow::bail;
use stockroom_ordering::UiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(UiEvent),
    Show,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> anyhow::Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));

        let command = match word {
            "qty" => Command::Event(UiEvent::QuantityChanged(rest.trim().to_string())),
            "focus" => Command::Event(UiEvent::FocusChanged(true)),
            "blur" => Command::Event(UiEvent::FocusChanged(false)),
            "order" => Command::Event(UiEvent::PlaceOrder),
            "cancel" => Command::Event(UiEvent::Cancel),
            "dismiss" => Command::Event(UiEvent::DismissError),
            "home" => Command::Event(UiEvent::Home),
            "show" => Command::Show,
            "quit" | "exit" => Command::Quit,
            other => bail!(
                "unknown command {other:?} (expected qty, focus, blur, order, cancel, dismiss, home, show, quit)"
            ),
        };
        Ok(Some(command))
    }
}

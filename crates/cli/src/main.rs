//! Terminal driver for the order flows.
//!
//! Reads one command per line from stdin, feeds it to an [`OrderSession`] and
//! prints the rendered screen (and any navigation) as JSON on stdout.

mod command;
mod config;

use std::io::{BufRead, Write};

use anyhow::Context;
use stockroom_ordering::{ItemDetailsViewModel, NavigationRecorder, OrderSession};

use crate::command::Command;
use crate::config::ItemConfig;

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = ItemConfig::from_env();
    let view_model = ItemDetailsViewModel::load(config.into_item())
        .context("failed to load the configured item")?;
    let mut session = OrderSession::new(view_model, NavigationRecorder::new());

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    print_screen(&mut stdout, &session)?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(stdout, "{}", serde_json::json!({ "error": e.to_string() }))?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Show => {}
            Command::Event(event) => {
                if let Err(e) = session.dispatch(event) {
                    tracing::error!(error = %e, "event failed");
                    writeln!(stdout, "{}", serde_json::json!({ "error": e.to_string() }))?;
                }
            }
        }

        for request in session.navigator_mut().take() {
            writeln!(
                stdout,
                "{}",
                serde_json::json!({ "navigate": request, "route": request.route() })
            )?;
        }
        print_screen(&mut stdout, &session)?;

        if session.is_finished() {
            break;
        }
    }

    Ok(())
}

fn print_screen(
    out: &mut impl Write,
    session: &OrderSession<ItemDetailsViewModel, NavigationRecorder>,
) -> anyhow::Result<()> {
    let json = serde_json::to_string(&session.render()).context("failed to encode screen")?;
    writeln!(out, "{json}")?;
    out.flush()?;
    Ok(())
}

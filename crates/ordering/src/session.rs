//! One order transaction: the shared view-model, the navigator, and the
//! screen currently showing.
//!
//! UI events are queued and processed strictly one at a time. Each event runs
//! to completion (including any stock reduction and navigation) before the
//! next is looked at, so the flows never observe a half-applied order.

use std::collections::VecDeque;

use serde::Serialize;

use crate::entry::{OrderEntryFlow, OrderEntryView, SubmitOutcome};
use crate::error::OrderResult;
use crate::navigation::Navigator;
use crate::summary::{OrderSummaryFlow, OrderSummaryView};
use crate::view_model::ItemDetailsSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    QuantityChanged(String),
    FocusChanged(bool),
    PlaceOrder,
    Cancel,
    DismissError,
    Home,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Entry(OrderEntryFlow),
    Summary(OrderSummaryFlow),
    /// Cancelled back to the caller.
    Exited,
    /// Confirmed and sent home.
    Home,
}

impl Screen {
    fn name(&self) -> &'static str {
        match self {
            Screen::Entry(_) => "entry",
            Screen::Summary(_) => "summary",
            Screen::Exited => "exited",
            Screen::Home => "home",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenView {
    Entry(OrderEntryView),
    Summary(OrderSummaryView),
    Exited,
    Home,
}

#[derive(Debug)]
pub struct OrderSession<V, N> {
    view_model: V,
    navigator: N,
    screen: Screen,
    queue: VecDeque<UiEvent>,
}

impl<V, N> OrderSession<V, N>
where
    V: ItemDetailsSource,
    N: Navigator,
{
    /// Open the entry screen over `view_model`.
    pub fn new(view_model: V, navigator: N) -> Self {
        Self {
            view_model,
            navigator,
            screen: Screen::Entry(OrderEntryFlow::new()),
            queue: VecDeque::new(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn view_model(&self) -> &V {
        &self.view_model
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn into_parts(self) -> (V, N) {
        (self.view_model, self.navigator)
    }

    /// The session has left both flows.
    pub fn is_finished(&self) -> bool {
        matches!(self.screen, Screen::Exited | Screen::Home)
    }

    pub fn enqueue(&mut self, event: UiEvent) {
        self.queue.push_back(event);
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Process queued events in order. Stops at the first error; the failed
    /// event goes back to the front of the queue so a retry resumes with it.
    pub fn drain(&mut self) -> OrderResult<usize> {
        let mut processed = 0;
        while let Some(event) = self.queue.pop_front() {
            if let Err(e) = self.dispatch(event.clone()) {
                self.queue.push_front(event);
                return Err(e);
            }
            processed += 1;
        }
        Ok(processed)
    }

    /// Apply one event to the current screen.
    pub fn dispatch(&mut self, event: UiEvent) -> OrderResult<()> {
        let next = match (&mut self.screen, event) {
            (Screen::Entry(flow), UiEvent::QuantityChanged(text)) => {
                flow.on_quantity_change(text);
                None
            }
            (Screen::Entry(flow), UiEvent::FocusChanged(is_focused)) => {
                flow.on_focus_changed(is_focused);
                None
            }
            (Screen::Entry(flow), UiEvent::PlaceOrder) => {
                match flow.press_place_order(&mut self.view_model, &mut self.navigator)? {
                    SubmitOutcome::Placed { item_id, .. } => {
                        Some(Screen::Summary(OrderSummaryFlow::new(item_id)))
                    }
                    SubmitOutcome::Rejected { .. } | SubmitOutcome::Ignored => None,
                }
            }
            (Screen::Entry(flow), UiEvent::DismissError) => {
                flow.dismiss_error();
                None
            }
            (Screen::Entry(flow), UiEvent::Cancel) => {
                flow.cancel(&mut self.navigator);
                Some(Screen::Exited)
            }
            (Screen::Summary(flow), UiEvent::Home) => {
                flow.go_home(&mut self.navigator);
                Some(Screen::Home)
            }
            (screen, event) => {
                tracing::debug!(screen = screen.name(), ?event, "event ignored on this screen");
                None
            }
        };

        if let Some(next) = next {
            tracing::debug!(from = self.screen.name(), to = next.name(), "screen transition");
            self.screen = next;
        }
        Ok(())
    }

    pub fn render(&self) -> ScreenView {
        match &self.screen {
            Screen::Entry(flow) => ScreenView::Entry(flow.view(&self.view_model.ui_state())),
            Screen::Summary(flow) => ScreenView::Summary(flow.view(&self.view_model.ui_state())),
            Screen::Exited => ScreenView::Exited,
            Screen::Home => ScreenView::Home,
        }
    }
}

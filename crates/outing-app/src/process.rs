//! Message processing - runs the TEA update loop and dispatches actions

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;

/// Run `message` and every follow-up message through `update`.
///
/// Returns the actions produced along the way, in order.
pub fn apply(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);
        if let Some(action) = result.action {
            actions.push(action);
        }
        msg = result.message;
    }
    actions
}

/// Process a message through the TEA update loop and spawn its actions
pub fn process_message(state: &mut AppState, message: Message, msg_tx: &mpsc::Sender<Message>) {
    for action in apply(state, message) {
        handle_action(action, msg_tx.clone());
    }
}

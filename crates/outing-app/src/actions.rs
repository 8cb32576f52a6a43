//! Action handlers: background work requested by `update`

use std::path::PathBuf;

use outing_core::prelude::*;
use outing_core::Dataset;
use tokio::sync::mpsc;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action; results come back as messages on `msg_tx`
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::LoadDataset { path } => spawn_dataset_load(path, msg_tx),
    }
}

fn spawn_dataset_load(path: Option<PathBuf>, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let loaded = tokio::task::spawn_blocking(move || load_dataset(path.as_deref())).await;

        let message = match loaded {
            Ok(Ok(dataset)) => Message::DatasetLoaded(Box::new(dataset)),
            Ok(Err(e)) => Message::DatasetLoadFailed {
                message: e.to_string(),
            },
            Err(e) => {
                error!("Dataset load task panicked: {}", e);
                Message::DatasetLoadFailed {
                    message: "dataset load task failed".to_string(),
                }
            }
        };

        let _ = msg_tx.send(message).await;
    });
}

/// Load the dataset at `path`, or the bundled one
pub fn load_dataset(path: Option<&std::path::Path>) -> Result<Dataset> {
    match path {
        Some(path) => Dataset::from_path(path).context(format!("Loading {}", path.display())),
        None => Dataset::bundled().context("Loading bundled dataset"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_load_bundled_dataset_action() {
        let (tx, mut rx) = mpsc::channel(4);
        handle_action(UpdateAction::LoadDataset { path: None }, tx);

        let msg = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert!(matches!(msg, Message::DatasetLoaded(_)));
    }

    #[tokio::test]
    async fn test_load_missing_dataset_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, mut rx) = mpsc::channel(4);
        handle_action(
            UpdateAction::LoadDataset {
                path: Some(dir.path().join("missing.json")),
            },
            tx,
        );

        let msg = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap()
            .unwrap();
        match msg {
            Message::DatasetLoadFailed { message } => assert!(message.contains("missing.json")),
            other => panic!("unexpected message: {other:?}"),
        }
    }
}

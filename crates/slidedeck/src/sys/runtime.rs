use crate::events::AppEvent;
use async_channel::Sender;
use std::path::PathBuf;
use std::thread;
use tokio::runtime::Runtime;

pub fn start_background_services(tx: Sender<AppEvent>, config_path: PathBuf) {
    thread::spawn(move || {
        let rt = Runtime::new().expect("Failed to create Tokio runtime");

        rt.block_on(async {
            {
                let tx = tx.clone();
                tokio::spawn(async move {
                    crate::config::run_async_watcher(tx, config_path).await;
                });
            }

            {
                let tx = tx.clone();
                tokio::spawn(async move {
                    if let Err(e) = tokio::signal::ctrl_c().await {
                        log::error!("Failed to listen for interrupt: {}", e);
                        return;
                    }
                    let _ = tx.send(AppEvent::Quit).await;
                });
            }

            std::future::pending::<()>().await;
        });
    });
}

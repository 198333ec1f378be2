use crate::runtime::WorkerHandle;

pub async fn graceful_shutdown(handle: WorkerHandle) {
    tracing::info!("Shutdown sequence started");

    match handle.shutdown().await {
        Ok(()) => tracing::info!("Shutdown: event queue drained"),
        Err(e) => tracing::warn!("Shutdown: worker task ended abnormally: {e}"),
    }

    tracing::info!("Shutdown sequence completed");
}

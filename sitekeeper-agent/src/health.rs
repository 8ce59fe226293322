use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use kube::runtime::reflector::Store;
use log::{info, warn};
use sitekeeper_core::resources::crd::v1alpha1::site_descriptor::SiteDescriptor;
use warp::{http::StatusCode, Filter};

const HEALTH_PORT: u16 = 8080;

/// Serves `/healthz` and `/readyz`; the latter flips to 200 once the
/// initial SiteDescriptor list has populated the reflector store.
pub async fn start_health_server(store: Store<SiteDescriptor>) {
    let ready = Arc::new(AtomicBool::new(false));
    let ready_flag = ready.clone();

    tokio::spawn(async move {
        match store.wait_until_ready().await {
            Ok(()) => {
                info!("Initial SiteDescriptor list complete, agent is ready");
                ready_flag.store(true, Ordering::Release);
            }
            Err(error) => warn!("Store never became ready! {error:?}"),
        }
    });

    let healthz = warp::get()
        .and(warp::path("healthz"))
        .map(|| StatusCode::OK);
    let readyz = warp::get().and(warp::path("readyz")).map(move || {
        if ready.load(Ordering::Acquire) {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    });

    warp::serve(healthz.or(readyz))
        .run(([0, 0, 0, 0], HEALTH_PORT))
        .await;
}

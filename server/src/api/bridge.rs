use crate::api::model::{EnvironmentalConditions, SignalObservation};
use crate::workflow::runner::Runner;
use chrono::{Duration, Utc};
use radarcore::telemetry::MetricsRecorder;
use rand::Rng;
use serde::Deserialize;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::Arc,
    thread,
    time::Instant,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

fn bind_address(port: u16) -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], port))
}

#[derive(Debug)]
struct WarpError;

impl warp::reject::Reject for WarpError {}

#[derive(Debug, Deserialize)]
struct SweepQuery {
    duration: Option<i64>,
}

/// Bridge that hosts the telemetry HTTP endpoints on a background thread.
pub struct ApiBridge {
    metrics: Arc<MetricsRecorder>,
}

fn routes(
    runner: Arc<Runner>,
    metrics: Arc<MetricsRecorder>,
    started: Instant,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let metrics_for_filter = metrics;
    let metrics_filter = warp::any().map(move || metrics_for_filter.clone());
    let runner_filter = warp::any().map(move || runner.clone());

    let signal_route = warp::path("radar-signal")
        .and(warp::get())
        .and(runner_filter.clone())
        .and(metrics_filter.clone())
        .map(|runner: Arc<Runner>, metrics: Arc<MetricsRecorder>| {
            let observation = runner.observe();
            let reply = SignalObservation {
                signal: observation.signal,
                threat_assessment: observation.threat,
                environmental_conditions: EnvironmentalConditions::sample(&mut rand::thread_rng()),
            };
            metrics.record_served();
            warp::reply::json(&reply)
        });

    let analysis_route = warp::path("signal-analysis")
        .and(warp::get())
        .and(warp::query::<SweepQuery>())
        .and(runner_filter)
        .and(metrics_filter.clone())
        .and_then(
            |query: SweepQuery, runner: Arc<Runner>, metrics: Arc<MetricsRecorder>| async move {
                // The 60-signal default lives here, not in the core.
                let duration = runner.config().effective_duration(query.duration);
                match runner.sweep(duration) {
                    Ok(report) => {
                        metrics.record_served();
                        Ok::<_, warp::Rejection>(warp::reply::with_status(
                            warp::reply::json(&report),
                            StatusCode::OK,
                        ))
                    }
                    Err(err) => {
                        metrics.record_rejected();
                        eprintln!("signal-analysis error: {}", err);
                        Err(warp::reject::custom(WarpError))
                    }
                }
            },
        );

    let status_route = warp::path("system-status")
        .and(warp::get())
        .and(metrics_filter)
        .map(move |metrics: Arc<MetricsRecorder>| {
            let (served, rejected) = metrics.snapshot();
            warp::reply::json(&system_status(started, served, rejected))
        });

    signal_route.or(analysis_route).or(status_route)
}

/// Cosmetic status payload; uptime and request counters are the only
/// non-random fields.
fn system_status(started: Instant, served: usize, rejected: usize) -> serde_json::Value {
    let mut rng = rand::thread_rng();
    let alerts: Vec<serde_json::Value> = (0..rng.gen_range(0..3))
        .map(|_| {
            let kind = ["warning", "critical", "info"][rng.gen_range(0..3)];
            json!({
                "type": kind,
                "message": "Anomalous signal pattern detected",
                "timestamp": Utc::now().to_rfc3339(),
            })
        })
        .collect();

    json!({
        "status": "operational",
        "uptime": started.elapsed().as_secs_f64(),
        "lastMaintenance": (Utc::now() - Duration::days(1)).to_rfc3339(),
        "systemHealth": {
            "cpu": rng.gen_range(0.0..100.0),
            "memory": rng.gen_range(0.0..100.0),
            "signalProcessing": rng.gen_range(0.0..100.0),
            "networkLatency": rng.gen_range(0.0..50.0),
            "sensorStatus": {
                "primary": "optimal",
                "secondary": "operational",
                "auxiliary": "standby",
            },
        },
        "countermeasures": {
            "ecm": { "status": "active", "effectiveness": rng.gen_range(0.0..100.0) },
            "stealth": { "status": "engaged", "signatureReduction": rng.gen_range(0.0..100.0) },
        },
        "requestCounters": { "served": served, "rejected": rejected },
        "alerts": alerts,
    })
}

impl ApiBridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        let metrics = Arc::new(MetricsRecorder::new());
        let started = Instant::now();
        let port = runner.config().port;
        let route_metrics = metrics.clone();

        thread::spawn(move || {
            let routes = routes(runner, route_metrics, started);
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("failed to build runtime");
            runtime.block_on(async move {
                warp::serve(routes).run(bind_address(port)).await;
            });
        });

        Self { metrics }
    }

    pub fn publish_status(&self, message: &str) {
        println!("[api] {}", message);
    }

    #[cfg(test)]
    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }
}

use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use sketchgrade::config::Config;
use sketchgrade::grading::GraderRegistry;
use sketchgrade::{Axis, FnGrader, GradeOutcome};

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit a JSON payload for grading, return (body, status).
    pub async fn grade_json(&self, problem_id: &str, payload: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(&format!("/api/v1/problems/{problem_id}/grade")))
            .json(payload)
            .send()
            .await
            .expect("grade request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit a form-urlencoded body for grading, return (body, status).
    pub async fn grade_form(&self, problem_id: &str, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(&format!("/api/v1/problems/{problem_id}/grade")))
            .form(data)
            .send()
            .await
            .expect("grade form failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn get(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

/// Widget configuration for a pole-diagram problem with one stamp widget `e`.
pub fn pole_config() -> Value {
    json!({
        "width": 750,
        "height": 420,
        "xrange": [-4, 4],
        "yrange": [-3, 3],
        "xscale": "linear",
        "yscale": "linear",
        "plugins": [
            { "name": "axes" },
            { "name": "stamp", "id": "e", "label": "Poles", "scale": 0.2 }
        ]
    })
}

/// A submission envelope carrying `points` (pixel coordinates) for widget `e`.
pub fn pole_submission(points: &[(f64, f64)]) -> Value {
    let data: Vec<Value> = points
        .iter()
        .map(|(x, y)| json!({ "point": [x, y] }))
        .collect();
    json!({
        "apiVersion": "0.1",
        "meta": { "config": pole_config() },
        "data": { "e": data }
    })
}

/// Passes when exactly one pole sits at (2, 0).
pub fn pole_grader() -> FnGrader {
    FnGrader::new("polediag1", &["e"], |gradeables| {
        let e = gradeables.require("e")?;

        if e.len() != 1 {
            return Ok(GradeOutcome::fail("You do not have the correct number of poles."));
        }

        let (Some(x_axis), Some(y_axis)) = (Axis::horizontal(&e.params), Axis::vertical(&e.params))
        else {
            return Ok(GradeOutcome::fail("Missing axis configuration."));
        };

        let point = e[0]["point"].as_array().cloned().unwrap_or_default();
        let px = point.first().and_then(Value::as_f64).unwrap_or(f64::NAN);
        let py = point.get(1).and_then(Value::as_f64).unwrap_or(f64::NAN);
        let x = x_axis.pixel_to_coord(px);
        let y = y_axis.pixel_to_coord(py);

        if (x - 2.0).abs() > 0.2 || y.abs() > 0.2 {
            return Ok(GradeOutcome::fail("Check the location of your pole."));
        }

        Ok(GradeOutcome::pass("Good Job"))
    })
    .with_name("Pole diagram")
    .with_config(pole_config())
}

pub fn test_registry() -> GraderRegistry {
    let mut graders = GraderRegistry::new();
    graders.register(Arc::new(pole_grader()));
    graders.register(Arc::new(FnGrader::new("broken", &["e"], |_| {
        GradeOutcome::try_from(json!(42))
    })));
    graders
}

/// Spawn a test app on a random port.
pub async fn spawn_app() -> TestApp {
    let config = Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size: 65_536,
        log_level: "warn".to_string(),
    };

    let app = sketchgrade::build_app(config, test_registry());

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
    }
}

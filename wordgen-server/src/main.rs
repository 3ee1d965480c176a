use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware, put, web};

use serde::Deserialize;
use wordgen_core::model::generator::Generator;

/// Directory holding the model files.
const MODEL_DIR: &str = "./data";

/// Upper bound on the batch size a single request may ask for.
const MAX_BATCH: usize = 1000;

/// Struct representing query parameters for the `/v1/words` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	count: Option<usize>,
}

struct SharedData {
	generator: Generator,
}

/// HTTP GET endpoint `/v1/words`
///
/// Generates a batch of pseudo-words using the loaded model.
/// Returns the words newline-joined as the response body.
#[get("/v1/words")]
async fn get_words(
	data: web::Data<Mutex<SharedData>>,
	query: web::Query<GenerateParams>,
) -> impl Responder {
	let count = query.count.unwrap_or(50).min(MAX_BATCH);

	let shared_data = match data.lock() {
		Ok(g) => g,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	let mut rng = rand::rng();
	match shared_data.generator.generate_batch(count, &mut rng) {
		Ok(words) => HttpResponse::Ok().body(words.join("\n")),
		Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

/// HTTP GET endpoint `/v1/model`
///
/// Returns plain-text statistics about the loaded model.
#[get("/v1/model")]
async fn get_model(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(g) => g,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	let model = shared_data.generator.model();
	HttpResponse::Ok().body(format!(
		"distinct lengths: {}\nstart bigrams: {}\ntrigram suffixes: {}",
		model.lengths().len(),
		model.starts().len(),
		model.trigrams().len()
	))
}

/// HTTP PUT endpoint `/v1/reload`
///
/// Reloads the model files from the model directory.
#[put("/v1/reload")]
async fn put_reload(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(g) => g,
		Err(_) => return HttpResponse::InternalServerError().body("Generator lock failed"),
	};

	match Generator::new(MODEL_DIR) {
		Ok(generator) => {
			shared_data.generator = generator;
			HttpResponse::Ok().body("Model reloaded successfully")
		}
		Err(e) => HttpResponse::InternalServerError().body(format!("Failed to reload model: {e}")),
	}
}

/// Main entry point for the server.
///
/// Loads the model, wraps the generator in a `Mutex` for thread safety,
/// and starts an Actix-web HTTP server.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Requests are logged through the `Logger` middleware (`RUST_LOG`
///   controls the filter, default `info`).
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let generator = Generator::new(MODEL_DIR)
		.map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
	let shared_data = web::Data::new(Mutex::new(SharedData { generator }));

	HttpServer::new(move || {
		App::new()
			.app_data(shared_data.clone())
			.wrap(middleware::Logger::default())
			.wrap(Cors::permissive())
			.service(get_words)
			.service(get_model)
			.service(put_reload)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}

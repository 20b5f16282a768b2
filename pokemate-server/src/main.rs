use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use env_logger::Env;
use log::{error, info};

use pokemate_server::{ServerConfig, ServerError, configure};

/// Main entry point for the server.
///
/// Reads the configuration, loads the corpus and the pretrained model once,
/// then shares the resulting generator with every actix worker.
///
/// # Notes
/// - Missing corpus or model files abort startup.
/// - `RUST_LOG` overrides the default `info` log level.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

	let config = ServerConfig::from_env().inspect_err(|e| error!("{e}"))?;
	let generator = config
		.load_generator()
		.map_err(ServerError::from)
		.inspect_err(|e| error!("{e}"))?;
	let shared_generator = web::Data::new(generator);

	info!("Listening on {}:{}", config.host, config.port);
	HttpServer::new(move || {
		let cors = Cors::default()
			.allow_any_origin()
			.allowed_methods(vec!["GET"])
			.max_age(3600);

		App::new()
			.app_data(shared_generator.clone())
			.wrap(Logger::default())
			.wrap(cors)
			.configure(configure)
	})
	.bind((config.host.as_str(), config.port))?
	.run()
	.await
}

use std::num::{IntErrorKind, ParseIntError};

use actix_web::{HttpResponse, Responder, get, web};
use log::debug;
use pokemate_core::{Amount, NameGenerator};
use serde::Deserialize;

use crate::error::ApiError;

/// Body of `GET /home`.
pub const WELCOME_MESSAGE: &str = "Welcome to PokeMate random name generator!";

/// Query parameters for the `/names` endpoint.
///
/// `amount` is kept as raw text so that a malformed value gets our own
/// message instead of the extractor's.
#[derive(Deserialize)]
struct NamesQuery {
	amount: Option<String>,
}

fn out_of_range<T: std::fmt::Display>(amount: T) -> ApiError {
	ApiError::BadRequest(format!(
		"amount must be between {} and {}, got {}",
		Amount::MIN,
		Amount::MAX,
		amount
	))
}

impl NamesQuery {
	/// Parses and bounds `amount`, defaulting to `Amount::MIN` when absent.
	fn amount(&self) -> Result<i64, ApiError> {
		let raw = match &self.amount {
			None => return Ok(Amount::MIN as i64),
			Some(raw) => raw,
		};

		// Overflowing i64 still means an integer out of range
		let amount: i64 = raw.trim().parse().map_err(|err: ParseIntError| match err.kind() {
			IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(raw.trim()),
			_ => ApiError::BadRequest(format!(
				"amount must be an integer, e.g. /names?amount=5 (got {:?})",
				raw
			)),
		})?;

		let range = Amount::MIN as i64..=Amount::MAX as i64;
		if !range.contains(&amount) {
			return Err(out_of_range(amount));
		}

		Ok(amount)
	}
}

/// HTTP GET endpoint `/home`
///
/// Returns the welcome message as a JSON string.
#[get("/home")]
async fn home() -> impl Responder {
	HttpResponse::Ok().json(WELCOME_MESSAGE)
}

/// HTTP GET endpoint `/names`
///
/// Generates `amount` names (1 when absent) and returns them as a JSON array.
#[get("/names")]
async fn get_names(
	generator: web::Data<NameGenerator>,
	query: web::Query<NamesQuery>,
) -> Result<HttpResponse, ApiError> {
	let amount = query.amount()?;
	let names = generator.generate_names(amount)?;
	debug!("Generated {:?}", names);
	Ok(HttpResponse::Ok().json(names))
}

/// Registers the routes and the query error handler.
///
/// The `NameGenerator` itself must be provided by the caller as
/// `web::Data<NameGenerator>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
		ApiError::BadRequest(format!("invalid query string: {}", err)).into()
	}))
	.service(home)
	.service(get_names);
}

#[cfg(test)]
mod tests {
	use super::*;

	fn query(amount: Option<&str>) -> NamesQuery {
		NamesQuery { amount: amount.map(str::to_owned) }
	}

	#[test]
	fn absent_amount_defaults_to_one() {
		assert_eq!(query(None).amount().unwrap(), 1);
	}

	#[test]
	fn bounds_are_inclusive() {
		assert_eq!(query(Some("1")).amount().unwrap(), 1);
		assert_eq!(query(Some("10")).amount().unwrap(), 10);
	}

	#[test]
	fn malformed_amount_mentions_the_format() {
		let err = query(Some("ten")).amount().unwrap_err();
		assert!(err.to_string().contains("/names?amount="));

		let err = query(Some("")).amount().unwrap_err();
		assert!(matches!(err, ApiError::BadRequest(_)));
	}

	#[test]
	fn out_of_range_amount_mentions_the_range() {
		for raw in ["0", "11", "-4", "99999999999999999999", "-99999999999999999999"] {
			let err = query(Some(raw)).amount().unwrap_err();
			assert!(err.to_string().contains("between 1 and 10"), "{raw}: {err}");
		}
	}
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Catalog error: {message}")]
	Catalog { message: String },
}
impl From<cardseek_providers::Error> for Error {
	fn from(err: cardseek_providers::Error) -> Self {
		match err {
			cardseek_providers::Error::InvalidConfig { message } => Self::InvalidRequest { message },
			other => Self::Catalog { message: other.to_string() },
		}
	}
}

impl From<cardseek_domain::CriteriaError> for Error {
	fn from(err: cardseek_domain::CriteriaError) -> Self {
		Self::InvalidRequest { message: err.to_string() }
	}
}

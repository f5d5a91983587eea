use actix_web::http::StatusCode;
use bip_bencode::{ben_bytes, ben_map};
use crate::common::structs::custom_error::CustomError;
use crate::tracker::enums::tracker_error::TrackerError;

impl TrackerError {
    pub fn status_code(&self) -> StatusCode
    {
        match self {
            TrackerError::BadRequest(_) | TrackerError::InvalidAddress(_) => StatusCode::BAD_REQUEST,
            TrackerError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Bencoded `{"failure reason": <message>}` body.
    pub fn failure_body(&self) -> Vec<u8>
    {
        ben_map! {
            "failure reason" => ben_bytes!(self.to_string())
        }.encode()
    }
}

impl From<CustomError> for TrackerError {
    fn from(error: CustomError) -> Self {
        TrackerError::BadRequest(error.message().to_string())
    }
}

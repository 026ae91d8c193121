/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};
use serde::{Deserialize, Serialize};

/// Envelope returned to the caller on every failed request.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Every way an inbound request can fail.
///
/// The `Display` of each variant is its error code, which is what the incoming request
/// middleware records against the request. The caller sees `message` and `details` instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("MISSING_CREDENTIALS")]
    MissingCredentials,
    #[error("MISSING_REQUIRED_PARAMETERS")]
    MissingRequiredParameters,
    #[error("INVALID_REQUEST")]
    InvalidRequest(String),
    #[error("LOGIN_FAILED")]
    LoginFailed(String),
    #[error("RIDES_FETCH_FAILED")]
    RidesFetchFailed(String),
    #[error("RIDE_ACTION_INFO_FETCH_FAILED")]
    RideActionInfoFetchFailed(String),
}

impl AppError {
    fn error_message(&self) -> ErrorBody {
        ErrorBody {
            error: self.message(),
            details: self.details(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            AppError::MissingCredentials => "Username and password are required".to_string(),
            AppError::MissingRequiredParameters => {
                "Missing required parameters or headers".to_string()
            }
            AppError::InvalidRequest(err) => err.to_string(),
            AppError::LoginFailed(_) => "Login failed".to_string(),
            AppError::RidesFetchFailed(_) => "Failed to fetch rides".to_string(),
            AppError::RideActionInfoFetchFailed(_) => "Failed to fetch ride action info".to_string(),
        }
    }

    pub fn details(&self) -> Option<String> {
        match self {
            AppError::LoginFailed(details)
            | AppError::RidesFetchFailed(details)
            | AppError::RideActionInfoFetchFailed(details) => Some(details.to_string()),
            _ => None,
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(self.error_message())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingCredentials => StatusCode::BAD_REQUEST,
            AppError::MissingRequiredParameters => StatusCode::BAD_REQUEST,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::LoginFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::RidesFetchFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::RideActionInfoFetchFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use actix_web::web::Data;
use serde_json::Value;
use tracing::error;

use crate::{
    common::types::*,
    domain::types::ui::auth::*,
    outbound::{external::login as upstream_login, types::LoginReq},
    tools::error::AppError,
};

pub async fn login(data: Data<AppState>, request_body: LoginRequest) -> Result<Value, AppError> {
    let (Some(username), Some(password)) = (
        request_body
            .username
            .filter(|Username(username)| !username.is_empty()),
        request_body
            .password
            .filter(|Password(password)| !password.is_empty()),
    ) else {
        return Err(AppError::MissingCredentials);
    };

    upstream_login(
        &data.http_client,
        &data.upstream_base_url,
        &LoginReq { username, password },
    )
    .await
    .map_err(|err| {
        error!(tag = "[Login Failed]", error = %err);
        AppError::LoginFailed(err.to_string())
    })
}

/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use super::types::*;
use crate::tools::callapi::{call_api, CallAPIError};
use reqwest::{Client, Method, Url};
use serde_json::Value;

pub const LOGIN_PATH: &str = "/login";
pub const GET_RIDES_PATH: &str = "/api/v1/external/chat/getRides";
pub const RIDE_ACTION_INFO_PATH: &str = "/api/v1/external/chat/info/RideAction";

/// Appends `path` to the path of the base url and sets the given query, in order.
///
/// A base url of `https://host/prefix` and a path of `/login` gives `https://host/prefix/login`.
pub fn upstream_url(base_url: &Url, path: &str, query: &[(&str, &str)]) -> Url {
    let mut url = base_url.clone();
    url.set_path(&format!("{}{}", base_url.path().trim_end_matches('/'), path));
    url.set_query(None);
    url.set_fragment(None);

    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }

    url
}

pub async fn login(
    client: &Client,
    base_url: &Url,
    request: &LoginReq,
) -> Result<Value, CallAPIError> {
    call_api::<Value>(
        client,
        Method::POST,
        &upstream_url(base_url, LOGIN_PATH, &[]),
        vec![
            ("content-type", "application/json"),
            ("username", request.username.0.as_str()),
            ("password", request.password.0.as_str()),
        ],
    )
    .await
}

pub async fn get_rides(
    client: &Client,
    base_url: &Url,
    request: &GetRidesReq,
) -> Result<Value, CallAPIError> {
    call_api::<Value>(
        client,
        Method::GET,
        &upstream_url(base_url, GET_RIDES_PATH, &request.query_pairs()),
        vec![
            ("Authorization", request.token.0.as_str()),
            ("riderId", request.rider_id.0.as_str()),
            ("rideType", request.ride_type.0.as_str()),
        ],
    )
    .await
}

pub async fn get_ride_action_info(
    client: &Client,
    base_url: &Url,
    request: &RideActionInfoReq,
) -> Result<Value, CallAPIError> {
    call_api::<Value>(
        client,
        Method::GET,
        &upstream_url(base_url, RIDE_ACTION_INFO_PATH, &request.query_pairs()),
        vec![("Authorization", request.token.0.as_str())],
    )
    .await
}

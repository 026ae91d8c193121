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
    common::{types::*, utils::non_empty},
    domain::types::ui::ride::*,
    outbound::{
        external::{get_ride_action_info, get_rides as upstream_get_rides},
        types::{GetRidesReq, RideActionInfoReq},
    },
    tools::error::AppError,
};

pub async fn get_rides(
    data: Data<AppState>,
    query: GetRidesQuery,
    headers: GetRidesHeaders,
) -> Result<Value, AppError> {
    let (Some(start_record), Some(rider_id), Some(ride_type), Some(token)) = (
        non_empty(query.start_record).map(StartRecord),
        headers.rider_id,
        headers.ride_type,
        headers.token,
    ) else {
        return Err(AppError::MissingRequiredParameters);
    };

    let request = GetRidesReq {
        start_record,
        count: non_empty(query.count).map(Count),
        rider_id,
        ride_type,
        token,
    };

    upstream_get_rides(&data.http_client, &data.upstream_base_url, &request)
        .await
        .map_err(|err| {
            error!(tag = "[Get Rides Failed]", rider_id = %request.rider_id.0, error = %err);
            AppError::RidesFetchFailed(err.to_string())
        })
}

/// `rideId` and `driverId` are forwarded when present but never required.
pub async fn ride_action(
    data: Data<AppState>,
    query: RideActionQuery,
    token: Option<Token>,
) -> Result<Value, AppError> {
    let (Some(ride_action_str), Some(ride_request_id), Some(template_key), Some(token)) = (
        non_empty(query.ride_action_str).map(RideActionStr),
        non_empty(query.ride_request_id).map(RideRequestId),
        non_empty(query.template_key).map(TemplateKey),
        token,
    ) else {
        return Err(AppError::MissingRequiredParameters);
    };

    let request = RideActionInfoReq {
        ride_id: non_empty(query.ride_id).map(RideId),
        driver_id: non_empty(query.driver_id).map(DriverId),
        ride_action_str,
        ride_request_id,
        template_id: non_empty(query.template_id).map(TemplateId),
        template_key,
        token,
    };

    get_ride_action_info(&data.http_client, &data.upstream_base_url, &request)
        .await
        .map_err(|err| {
            error!(tag = "[Get Ride Action Info Failed]", ride_request_id = %request.ride_request_id.0, error = %err);
            AppError::RideActionInfoFetchFailed(err.to_string())
        })
}

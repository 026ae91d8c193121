/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use actix_web::{
    get,
    web::{Data, Json, Query},
    HttpRequest,
};
use serde_json::Value;

use crate::{
    common::{types::*, utils::get_header},
    domain::{action::ui::ride, types::ui::ride::*},
    tools::error::AppError,
};

#[get("/getRides")]
pub async fn get_rides(
    data: Data<AppState>,
    param_obj: Query<Vec<(String, String)>>,
    req: HttpRequest,
) -> Result<Json<Value>, AppError> {
    let query = GetRidesQuery::from_pairs(&param_obj);

    let headers = GetRidesHeaders {
        rider_id: get_header(&req, "riderId").map(RiderId),
        ride_type: get_header(&req, "rideType").map(RideType),
        token: get_header(&req, "Authorization").map(Token),
    };

    Ok(Json(ride::get_rides(data, query, headers).await?))
}

#[get("/rideAction")]
pub async fn ride_action(
    data: Data<AppState>,
    param_obj: Query<Vec<(String, String)>>,
    req: HttpRequest,
) -> Result<Json<Value>, AppError> {
    let query = RideActionQuery::from_pairs(&param_obj);
    let token = get_header(&req, "Authorization").map(Token);

    Ok(Json(ride::ride_action(data, query, token).await?))
}

/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use crate::common::types::*;

// Upstream login, credentials travel as headers
#[derive(Debug, Clone)]
pub struct LoginReq {
    pub username: Username,
    pub password: Password,
}

// Paginated rides of a rider
#[derive(Debug, Clone)]
pub struct GetRidesReq {
    pub start_record: StartRecord,
    pub count: Option<Count>,
    pub rider_id: RiderId,
    pub ride_type: RideType,
    pub token: Token,
}

impl GetRidesReq {
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![("startRecord", self.start_record.0.as_str())];
        if let Some(Count(count)) = &self.count {
            pairs.push(("count", count.as_str()));
        }
        pairs
    }
}

// Info about an action taken on a ride request
#[derive(Debug, Clone)]
pub struct RideActionInfoReq {
    pub ride_id: Option<RideId>,
    pub driver_id: Option<DriverId>,
    pub ride_action_str: RideActionStr,
    pub ride_request_id: RideRequestId,
    pub template_id: Option<TemplateId>,
    pub template_key: TemplateKey,
    pub token: Token,
}

impl RideActionInfoReq {
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(6);
        if let Some(RideId(ride_id)) = &self.ride_id {
            pairs.push(("rideId", ride_id.as_str()));
        }
        if let Some(DriverId(driver_id)) = &self.driver_id {
            pairs.push(("driverId", driver_id.as_str()));
        }
        pairs.push(("rideActionStr", self.ride_action_str.0.as_str()));
        pairs.push(("rideRequestId", self.ride_request_id.0.as_str()));
        if let Some(TemplateId(template_id)) = &self.template_id {
            pairs.push(("templateId", template_id.as_str()));
        }
        pairs.push(("templateKey", self.template_key.0.as_str()));
        pairs
    }
}

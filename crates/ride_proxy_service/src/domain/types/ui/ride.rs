/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use crate::common::{types::*, utils::first_query_value};

/// Query of the rides listing. A repeated key keeps its first value.
#[derive(Debug, Clone, Default)]
pub struct GetRidesQuery {
    pub start_record: Option<String>,
    pub count: Option<String>,
}

impl GetRidesQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        GetRidesQuery {
            start_record: first_query_value(pairs, "startRecord"),
            count: first_query_value(pairs, "count"),
        }
    }
}

/// Headers the rides listing reads, each already checked for presence.
#[derive(Debug, Clone, Default)]
pub struct GetRidesHeaders {
    pub rider_id: Option<RiderId>,
    pub ride_type: Option<RideType>,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Default)]
pub struct RideActionQuery {
    pub ride_id: Option<String>,
    pub driver_id: Option<String>,
    pub ride_action_str: Option<String>,
    pub ride_request_id: Option<String>,
    pub template_id: Option<String>,
    pub template_key: Option<String>,
}

impl RideActionQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        RideActionQuery {
            ride_id: first_query_value(pairs, "rideId"),
            driver_id: first_query_value(pairs, "driverId"),
            ride_action_str: first_query_value(pairs, "rideActionStr"),
            ride_request_id: first_query_value(pairs, "rideRequestId"),
            template_id: first_query_value(pairs, "templateId"),
            template_key: first_query_value(pairs, "templateKey"),
        }
    }
}

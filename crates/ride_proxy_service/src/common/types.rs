/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use serde::{Deserialize, Serialize};
use std::fmt;

pub use crate::environment::AppState;

#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct Username(pub String);
#[derive(Deserialize, Serialize, Clone, Eq, PartialEq)]
pub struct Password(pub String);
#[derive(Deserialize, Serialize, Clone, Eq, PartialEq)]
pub struct Token(pub String);
#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct RiderId(pub String);
#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct RideType(pub String);
#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct StartRecord(pub String);
#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct Count(pub String);
#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct RideId(pub String);
#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct DriverId(pub String);
#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct RideActionStr(pub String);
#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct RideRequestId(pub String);
#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct TemplateId(pub String);
#[derive(Deserialize, Serialize, Clone, Debug, Eq, PartialEq)]
pub struct TemplateKey(pub String);

// Secrets never show up in logs
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResponseData {
    pub result: String,
}

/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
#![allow(clippy::expect_used)]

use crate::tools::logger::LoggerConfig;
use reqwest::{Client, Url};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub workers: usize,
    pub logger_cfg: LoggerConfig,
    pub upstream_base_url: String,
}

pub fn read_dhall_config(config_path: &str) -> Result<AppConfig, String> {
    serde_dhall::from_file(config_path)
        .parse::<AppConfig>()
        .map_err(|err| format!("Error reading config: {}", err))
}

#[derive(Clone)]
pub struct AppState {
    pub upstream_base_url: Url,
    pub http_client: Client,
}

impl AppState {
    pub fn new(app_config: AppConfig) -> AppState {
        AppState {
            upstream_base_url: Url::parse(app_config.upstream_base_url.as_str())
                .expect("Failed to parse upstream_base_url."),
            http_client: Client::new(),
        }
    }
}

/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
use actix_web::HttpRequest;

/// An empty string counts as absent.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// First value of a query key. Later repeats of the key are ignored.
pub fn first_query_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    let value = pairs
        .iter()
        .find(|(query_key, _)| query_key == key)
        .map(|(_, query_value)| query_value.to_owned());

    non_empty(value)
}

/// Reads a header as UTF-8 text, so non-ASCII values are forwarded byte for byte.
///
/// Missing and empty values come back as `None`, as do values that are not valid UTF-8.
pub fn get_header(request: &HttpRequest, header_name: &str) -> Option<String> {
    let value = request
        .headers()
        .get(header_name)
        .and_then(|header_value| std::str::from_utf8(header_value.as_bytes()).ok())
        .map(|header_value| header_value.to_string());

    non_empty(value)
}

use contracts::domain::a001_city::aggregate::City;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::get_json;

/// `GET /city`; a non-array body is a [`ApiError::MalformedResponse`].
pub async fn fetch_cities() -> Result<Vec<City>, ApiError> {
    get_json("/api/city").await
}

use contracts::domain::a002_facility::aggregate::Facility;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::get_json;

/// `GET /facility`; a non-array body is a [`ApiError::MalformedResponse`].
pub async fn fetch_facilities() -> Result<Vec<Facility>, ApiError> {
    get_json("/api/facility").await
}

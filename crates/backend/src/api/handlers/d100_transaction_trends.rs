use axum::{http::StatusCode, Json};

use contracts::dashboards::d100_transaction_trends::{
    CatalogResponse, GroupBy, Measure, TrendsRequest, TrendsResponse,
};
use contracts::domain::Grain;
use contracts::enums::{ProductTier, Region, SalesChannel};

use crate::dashboards::d100_transaction_trends::service::{self, TrendsError};
use crate::domain::transactions::store;

/// POST /api/d100/trends
pub async fn get_trends(
    Json(request): Json<TrendsRequest>,
) -> Result<Json<TrendsResponse>, (StatusCode, String)> {
    tracing::info!(
        "D100 Dashboard: trends {}..{} measure={} grain={} group_by={}",
        request.date_from,
        request.date_to,
        request.measure.code(),
        request.grain.code(),
        request.group_by.code()
    );

    let dataset = store::get_dataset();
    match service::get_transaction_trends(dataset.records(), &request) {
        Ok(response) => {
            tracing::info!(
                "D100 Dashboard: returning {} points, {} detail rows",
                response.series.len(),
                response.details.len()
            );
            Ok(Json(response))
        }
        Err(e @ TrendsError::InvalidRequest(_)) => {
            tracing::warn!("D100 Dashboard: rejected request: {}", e);
            Err((StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))
        }
    }
}

/// GET /api/d100/catalog
pub async fn get_catalog() -> Json<CatalogResponse> {
    let dataset = store::get_dataset();
    let (date_from, date_to) = dataset.date_span();

    Json(CatalogResponse {
        date_from,
        date_to,
        regions: Region::all(),
        channels: SalesChannel::all(),
        products: ProductTier::all(),
        measures: Measure::all(),
        grains: Grain::all(),
        group_dimensions: GroupBy::all(),
    })
}

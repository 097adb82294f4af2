use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::route_dto::{RouteBodyRequest, RouteFilters, RouteResponse};
use crate::models::Point;
use crate::repositories::company_repository::CompanyRepository;
use crate::repositories::point_repository::PointRepository;
use crate::repositories::route_repository::RouteRepository;
use crate::repositories::Pagination;
use crate::utils::errors::{model_not_found, AppError};

pub struct RouteController {
    repository: RouteRepository,
    company_repository: CompanyRepository,
    point_repository: PointRepository,
}

/// Ordena los ids internos de los points según la lista de uuids recibida.
/// La posición en `requested` define el `index` persistido. Falla cuando
/// algún uuid no resolvió dentro de la company.
pub fn order_point_ids(requested: &[Uuid], resolved: &[Point]) -> Result<Vec<i32>, AppError> {
    requested
        .iter()
        .map(|uuid| {
            resolved
                .iter()
                .find(|point| point.uuid == *uuid)
                .map(|point| point.id)
                .ok_or_else(|| {
                    AppError::BadRequest(format!(
                        "Point with uuid '{}' does not exist in this company",
                        uuid
                    ))
                })
        })
        .collect()
}

impl RouteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RouteRepository::new(pool.clone()),
            company_repository: CompanyRepository::new(pool.clone()),
            point_repository: PointRepository::new(pool),
        }
    }

    async fn resolve_point_ids(
        &self,
        company_id: i32,
        point_uuids: &[Uuid],
    ) -> Result<Vec<i32>, AppError> {
        let points = self
            .point_repository
            .find_many_by_uuids(company_id, point_uuids)
            .await?;

        order_point_ids(point_uuids, &points)
    }

    async fn to_response(&self, route: crate::models::Route) -> Result<RouteResponse, AppError> {
        let points = self.repository.find_points_ordered(route.id).await?;

        Ok(RouteResponse::from_route_with_points(route, points))
    }

    pub async fn create(
        &self,
        company_uuid: Uuid,
        request: RouteBodyRequest,
    ) -> Result<RouteResponse, AppError> {
        request.validate()?;

        let company = self
            .company_repository
            .find_by_uuid(company_uuid)
            .await?
            .ok_or_else(|| model_not_found("Company", &company_uuid.to_string()))?;

        let point_ids = self
            .resolve_point_ids(company.id, &request.point_uuids)
            .await?;

        let route = self
            .repository
            .create(
                company.id,
                &request.description,
                request.opening_time,
                request.closing_time,
                request.ticket_price,
                &point_ids,
            )
            .await?;

        self.to_response(route).await
    }

    pub async fn find(&self, uuid: Uuid) -> Result<RouteResponse, AppError> {
        let route = self
            .repository
            .find_by_uuid(uuid)
            .await?
            .ok_or_else(|| model_not_found("Route", &uuid.to_string()))?;

        self.to_response(route).await
    }

    pub async fn find_many(
        &self,
        company_uuid: Uuid,
        filters: RouteFilters,
    ) -> Result<Vec<RouteResponse>, AppError> {
        let company = self
            .company_repository
            .find_by_uuid(company_uuid)
            .await?
            .ok_or_else(|| model_not_found("Company", &company_uuid.to_string()))?;

        let pagination = Pagination::new(filters.page, filters.limit);

        let routes = self
            .repository
            .find_many(company.id, filters.description.as_deref(), pagination)
            .await?;

        let mut responses = Vec::with_capacity(routes.len());

        for route in routes {
            responses.push(self.to_response(route).await?);
        }

        Ok(responses)
    }

    /// Reemplaza campos y asociación completa de points
    pub async fn update(
        &self,
        uuid: Uuid,
        request: RouteBodyRequest,
    ) -> Result<RouteResponse, AppError> {
        request.validate()?;

        let route = self
            .repository
            .find_by_uuid(uuid)
            .await?
            .ok_or_else(|| model_not_found("Route", &uuid.to_string()))?;

        let point_ids = self
            .resolve_point_ids(route.company_id, &request.point_uuids)
            .await?;

        let route = self
            .repository
            .update(
                uuid,
                &request.description,
                request.opening_time,
                request.closing_time,
                request.ticket_price,
                &point_ids,
            )
            .await?
            .ok_or_else(|| model_not_found("Route", &uuid.to_string()))?;

        self.to_response(route).await
    }

    pub async fn delete(&self, uuid: Uuid) -> Result<RouteResponse, AppError> {
        let route = self
            .repository
            .find_by_uuid(uuid)
            .await?
            .ok_or_else(|| model_not_found("Route", &uuid.to_string()))?;

        // Los points se capturan antes del borrado de las junction rows
        let points = self.repository.find_points_ordered(route.id).await?;

        let route = self
            .repository
            .delete(uuid)
            .await?
            .ok_or_else(|| model_not_found("Route", &uuid.to_string()))?;

        Ok(RouteResponse::from_route_with_points(route, points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_point(id: i32, uuid: Uuid) -> Point {
        Point {
            id,
            uuid,
            company_id: 1,
            address_zip_code: "13360-000".to_string(),
            address_state: "SP".to_string(),
            address_city: "Capivari".to_string(),
            address_neighborhood: "Centro".to_string(),
            address_street: "Rua Padre Fabiano".to_string(),
            address_number: "100".to_string(),
            latitude: "-22.995".to_string(),
            longitude: "-47.508".to_string(),
            place_id: None,
        }
    }

    #[test]
    fn test_order_follows_requested_uuid_list() {
        let uuid_a = Uuid::new_v4();
        let uuid_b = Uuid::new_v4();
        let uuid_c = Uuid::new_v4();

        // resueltos en orden distinto al pedido
        let resolved = vec![
            make_point(30, uuid_c),
            make_point(10, uuid_a),
            make_point(20, uuid_b),
        ];

        let ordered = order_point_ids(&[uuid_a, uuid_b, uuid_c], &resolved).unwrap();
        assert_eq!(ordered, vec![10, 20, 30]);
    }

    #[test]
    fn test_unknown_point_uuid_fails() {
        let uuid_a = Uuid::new_v4();
        let missing = Uuid::new_v4();

        let resolved = vec![make_point(10, uuid_a)];

        let result = order_point_ids(&[uuid_a, missing], &resolved);
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_empty_point_list_is_allowed() {
        let ordered = order_point_ids(&[], &[]).unwrap();
        assert!(ordered.is_empty());
    }
}

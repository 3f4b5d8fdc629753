pub mod sea_orm_entity;

pub mod competency_gateway_postgres;
pub mod journey_gateway_postgres;
pub mod profile_gateway_postgres;
pub mod project_gateway_postgres;
pub mod service_gateway_postgres;
pub mod submission_gateway_postgres;
